use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

/// Ruleset a cohort is ranked in
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
    Display,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum GameMode {
    #[default]
    Osu = 0,
    Taiko = 1,
    Fruits = 2,
    Mania = 3,
}

impl GameMode {
    /// Path segment used by ranking pages and score links
    pub fn path_name(&self) -> &'static str {
        self.into()
    }

    /// Value of the API `m` parameter
    pub fn api_value(&self) -> u8 {
        *self as u8
    }
}
