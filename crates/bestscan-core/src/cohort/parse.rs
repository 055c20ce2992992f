//! Ranking page parsing.

use std::sync::LazyLock;

use scraper::{Html, Selector};

/// Separator that replaces interior spaces in display names
pub const NAME_SEPARATOR: char = '_';

static TABLE: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("table.ranking-page-table").expect("valid ranking table selector")
});

static USER_LINK: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("tbody a.ranking-page-table__user-link-text")
        .expect("valid user link selector")
});

/// Extract player display names from a ranking page, in on-page order.
///
/// Returns `None` when the page has no ranking table at all.
pub fn parse_ranking_page(html: &str) -> Option<Vec<String>> {
    let document = Html::parse_document(html);
    let table = document.select(&TABLE).next()?;

    let names = table
        .select(&USER_LINK)
        .map(|link| normalize_name(&link.text().collect::<String>()))
        .filter(|name| !name.is_empty())
        .collect();
    Some(names)
}

/// Trim the name and replace interior spaces with [`NAME_SEPARATOR`]
pub fn normalize_name(raw: &str) -> String {
    raw.trim().replace(' ', &NAME_SEPARATOR.to_string())
}
