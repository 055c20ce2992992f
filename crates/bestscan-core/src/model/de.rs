//! Lenient field decoding for scoring-service JSON.
//!
//! The service encodes numbers and flags as strings (`"pp": "312.5"`,
//! `"replay_available": "1"`), and some fields are null for inactive players.

use std::fmt::Display;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Str(String),
    Num(serde_json::Number),
    Bool(bool),
}

impl Loose {
    fn into_text(self) -> String {
        match self {
            Loose::Str(s) => s.trim().to_string(),
            Loose::Num(n) => n.to_string(),
            Loose::Bool(b) => String::from(if b { "1" } else { "0" }),
        }
    }
}

fn parse<T, E>(text: &str) -> Result<T, E>
where
    T: FromStr,
    T::Err: Display,
    E: serde::de::Error,
{
    text.parse::<T>()
        .map_err(|e| E::custom(format!("invalid value {:?}: {}", text, e)))
}

/// Number given as a JSON string or number
pub fn number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let text = Loose::deserialize(deserializer)?.into_text();
    parse(&text)
}

/// Number that may be null or an empty string
pub fn optional_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    match Option::<Loose>::deserialize(deserializer)? {
        None => Ok(None),
        Some(value) => {
            let text = value.into_text();
            if text.is_empty() {
                Ok(None)
            } else {
                parse(&text).map(Some)
            }
        }
    }
}

/// Flag given as `"1"`/`"0"`, `1`/`0` or a JSON boolean
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Loose::deserialize(deserializer)?.into_text().as_str() {
        "1" | "true" => Ok(true),
        "0" | "false" | "" => Ok(false),
        other => Err(D::Error::custom(format!("invalid flag {:?}", other))),
    }
}
