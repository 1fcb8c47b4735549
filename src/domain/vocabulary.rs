use crate::utils::error::{RecordError, Result};
use crate::utils::validation::vocabulary_error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Accepted texture strings, for callers that handle raw values.
pub mod texture {
    pub const DRY: &str = "dry";
    pub const STICKY: &str = "sticky";
    pub const CREAMY: &str = "creamy";
    pub const WATERY: &str = "watery";
    pub const CLEAR: &str = "clear";
}

/// Accepted amount strings.
pub mod amount {
    pub const LIGHT: &str = "light";
    pub const MEDIUM: &str = "medium";
    pub const HEAVY: &str = "heavy";
}

/// The consistency or texture of the user's cervical mucus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Texture {
    Dry,
    Sticky,
    Creamy,
    Watery,
    Clear,
}

impl Texture {
    pub const ALL: [Texture; 5] = [
        Texture::Dry,
        Texture::Sticky,
        Texture::Creamy,
        Texture::Watery,
        Texture::Clear,
    ];

    const NAMES: [&'static str; 5] = [
        texture::DRY,
        texture::STICKY,
        texture::CREAMY,
        texture::WATERY,
        texture::CLEAR,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Texture::Dry => texture::DRY,
            Texture::Sticky => texture::STICKY,
            Texture::Creamy => texture::CREAMY,
            Texture::Watery => texture::WATERY,
            Texture::Clear => texture::CLEAR,
        }
    }
}

impl fmt::Display for Texture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Texture {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| vocabulary_error("texture", s, &Self::NAMES))
    }
}

/// The amount of cervical mucus the user observes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Amount {
    Light,
    Medium,
    Heavy,
}

impl Amount {
    pub const ALL: [Amount; 3] = [Amount::Light, Amount::Medium, Amount::Heavy];

    const NAMES: [&'static str; 3] = [amount::LIGHT, amount::MEDIUM, amount::HEAVY];

    pub fn as_str(self) -> &'static str {
        match self {
            Amount::Light => amount::LIGHT,
            Amount::Medium => amount::MEDIUM,
            Amount::Heavy => amount::HEAVY,
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Amount {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| vocabulary_error("amount", s, &Self::NAMES))
    }
}
