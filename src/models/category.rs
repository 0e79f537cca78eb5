//! Expense category model
//!
//! A closed set of classification tags. Icons and colors are presentational
//! metadata for the dashboard; they carry no business meaning.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classification tag attached to every expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Transport,
    Utilities,
    Entertainment,
    Other,
}

impl Category {
    /// All categories, in display order
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Transport,
        Category::Utilities,
        Category::Entertainment,
        Category::Other,
    ];

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Utilities => "Utilities",
            Self::Entertainment => "Entertainment",
            Self::Other => "Other",
        }
    }

    /// Dashboard icon
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Food => "🍴",
            Self::Transport => "🚗",
            Self::Utilities => "⚡",
            Self::Entertainment => "🎬",
            Self::Other => "•",
        }
    }

    /// Dashboard color name
    pub fn color(&self) -> &'static str {
        match self {
            Self::Food => "green",
            Self::Transport => "blue",
            Self::Utilities => "yellow",
            Self::Entertainment => "magenta",
            Self::Other => "gray",
        }
    }

    /// The next category in display order, wrapping around
    ///
    /// Used by the add-expense dialog to cycle the category field.
    pub fn next(self) -> Self {
        match self {
            Self::Food => Self::Transport,
            Self::Transport => Self::Utilities,
            Self::Utilities => Self::Entertainment,
            Self::Entertainment => Self::Other,
            Self::Other => Self::Food,
        }
    }

    /// The previous category in display order, wrapping around
    pub fn prev(self) -> Self {
        match self {
            Self::Food => Self::Other,
            Self::Transport => Self::Food,
            Self::Utilities => Self::Transport,
            Self::Entertainment => Self::Utilities,
            Self::Other => Self::Entertainment,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error type for category parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError(pub String);

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown category: {}", self.0)
    }
}

impl std::error::Error for ParseCategoryError {}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "food" => Ok(Self::Food),
            "transport" => Ok(Self::Transport),
            "utilities" => Ok(Self::Utilities),
            "entertainment" => Ok(Self::Entertainment),
            "other" => Ok(Self::Other),
            _ => Err(ParseCategoryError(s.trim().to_string())),
        }
    }
}
