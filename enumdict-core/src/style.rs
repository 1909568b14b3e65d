/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Naming styles for dictionary type tags.
//!
//! Enum type names come from source code (`OrderStatus`, `HTTPMethod`) while
//! consumers often key dictionaries by a different convention
//! (`order_status`, `order-status`). [`TypeStyle`] performs that rename.

use std::fmt;
use std::str::FromStr;

/// Naming style applied to a dictionary type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TypeStyle {
    /// Keep the name as given.
    #[default]
    Preserve,
    /// `orderStatus`
    SmallCamelCase,
    /// `OrderStatus`
    PascalCase,
    /// `order_status`
    SnakeCase,
    /// `order-status`
    Kebab,
}

impl TypeStyle {
    /// Returns the configuration name of this style.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Preserve => "",
            Self::SmallCamelCase => "smallCamelCase",
            Self::PascalCase => "pascalCase",
            Self::SnakeCase => "snakeCase",
            Self::Kebab => "kebab",
        }
    }

    /// Renames `name` according to this style.
    ///
    /// # Arguments
    /// * `name` - The type name, in any casing
    #[must_use]
    pub fn apply(&self, name: &str) -> String {
        match self {
            Self::Preserve => name.to_string(),
            Self::SmallCamelCase => split_words(name)
                .iter()
                .enumerate()
                .map(|(i, w)| {
                    if i == 0 {
                        w.to_lowercase()
                    } else {
                        capitalize(w)
                    }
                })
                .collect(),
            Self::PascalCase => split_words(name).iter().map(|w| capitalize(w)).collect(),
            Self::SnakeCase => join_lower(name, '_'),
            Self::Kebab => join_lower(name, '-'),
        }
    }
}

impl FromStr for TypeStyle {
    type Err = std::convert::Infallible;

    /// Parses a style name; unknown names keep the type tag unchanged.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "smallCamelCase" => Self::SmallCamelCase,
            "pascalCase" => Self::PascalCase,
            "snakeCase" => Self::SnakeCase,
            "kebab" => Self::Kebab,
            _ => Self::Preserve,
        })
    }
}

impl fmt::Display for TypeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Splits an identifier into words.
///
/// Boundaries are separators (`_`, `-`, whitespace), a lowercase or digit
/// followed by an uppercase letter, and the end of an acronym
/// (`HTTPServer` -> `HTTP`, `Server`).
fn split_words(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_lower)
            {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn join_lower(name: &str, sep: char) -> String {
    let mut result = String::new();
    for (i, word) in split_words(name).iter().enumerate() {
        if i > 0 {
            result.push(sep);
        }
        result.push_str(&word.to_lowercase());
    }
    result
}
