/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Display-style hints attached to dictionary entries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display-style hint for an enum member.
///
/// Front-end components use it to pick a color or badge style. The set is
/// open: unknown names are preserved as [`AttrType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AttrType {
    /// Primary emphasis.
    Primary,
    /// Positive outcome.
    Success,
    /// Neutral information.
    #[default]
    Info,
    /// Needs attention.
    Warning,
    /// Negative outcome.
    Danger,
    /// Any other style name.
    Other(String),
}

impl AttrType {
    /// Returns the style name as used by front-end components.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Primary => "primary",
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Other(s) => s,
        }
    }

    /// Returns true if this is one of the well-known styles.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl FromStr for AttrType {
    type Err = std::convert::Infallible;

    /// Parses a style name. Matching is exact; anything else becomes `Other`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "primary" => Self::Primary,
            "success" => Self::Success,
            "info" => Self::Info,
            "warning" => Self::Warning,
            "danger" => Self::Danger,
            other => Self::Other(other.to_string()),
        })
    }
}

impl From<&str> for AttrType {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(attr) => attr,
            Err(never) => match never {},
        }
    }
}

impl From<String> for AttrType {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<AttrType> for String {
    fn from(attr: AttrType) -> Self {
        match attr {
            AttrType::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for AttrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
