//! Play modifier bitmask decoding.
//!
//! The scoring service reports enabled modifiers as a bitmask. Only the
//! eleven lowest bits are known here; higher bits are ignored.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, FromRepr, IntoEnumIterator, IntoStaticStr};

/// Abbreviation used when no modifier bit is set
pub const NO_MOD: &str = "NM";

/// A single play modifier, discriminant is its bit index
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    FromRepr,
    EnumIter,
    IntoStaticStr,
    Display,
)]
#[repr(u8)]
pub enum Mod {
    #[strum(serialize = "NF")]
    NoFail = 0,
    #[strum(serialize = "EZ")]
    Easy = 1,
    #[strum(serialize = "TD")]
    TouchDevice = 2,
    #[strum(serialize = "HD")]
    Hidden = 3,
    #[strum(serialize = "HR")]
    HardRock = 4,
    #[strum(serialize = "SD")]
    SuddenDeath = 5,
    #[strum(serialize = "DT")]
    DoubleTime = 6,
    #[strum(serialize = "RX")]
    Relax = 7,
    #[strum(serialize = "HT")]
    HalfTime = 8,
    #[strum(serialize = "NC")]
    Nightcore = 9,
    #[strum(serialize = "FL")]
    Flashlight = 10,
}

impl Mod {
    pub fn bit(self) -> u32 {
        1 << (self as u8)
    }

    pub fn abbreviation(self) -> &'static str {
        self.into()
    }
}

/// Set of modifiers decoded from a raw bitmask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mods(u32);

impl Mods {
    pub fn from_mask(mask: u32) -> Self {
        Self(mask)
    }

    pub fn mask(self) -> u32 {
        self.0
    }

    pub fn contains(self, m: Mod) -> bool {
        self.0 & m.bit() != 0
    }

    /// Known modifiers set in this mask, in ascending bit order
    pub fn iter(self) -> impl Iterator<Item = Mod> {
        Mod::iter().filter(move |m| self.contains(*m))
    }

    /// Human-readable abbreviation string (e.g. "HDDT")
    pub fn abbreviations(self) -> String {
        if self.0 == 0 {
            return NO_MOD.to_string();
        }
        self.iter().map(Mod::abbreviation).collect()
    }
}

/// Decode a modifier bitmask into concatenated abbreviations.
///
/// Returns `"NM"` only for a zero mask. A mask carrying only unknown bits
/// decodes to the empty string.
pub fn decode(mask: u32) -> String {
    Mods::from_mask(mask).abbreviations()
}
