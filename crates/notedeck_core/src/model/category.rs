//! Note categories and their display themes.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Fixed category set a note is filed under.
///
/// Serialized with the capitalized variant name (`"Work"`, `"Ideas"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Personal,
    Work,
    Study,
    Urgent,
    Ideas,
}

/// Presentation theme resolved from a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryTheme {
    /// Human-readable label.
    pub label: &'static str,
    /// Accent color token consumed by the presentation layer.
    pub accent: &'static str,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 5] = [
        Category::Personal,
        Category::Work,
        Category::Study,
        Category::Urgent,
        Category::Ideas,
    ];

    /// Wire/display name of this category.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Personal => "Personal",
            Self::Work => "Work",
            Self::Study => "Study",
            Self::Urgent => "Urgent",
            Self::Ideas => "Ideas",
        }
    }

    pub fn theme(self) -> CategoryTheme {
        let accent = match self {
            Self::Personal => "blue",
            Self::Work => "purple",
            Self::Study => "emerald",
            Self::Urgent => "rose",
            Self::Ideas => "amber",
        };
        CategoryTheme {
            label: self.as_str(),
            accent,
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a category name is outside the fixed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryParseError(pub String);

impl Display for CategoryParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown category `{}`; expected Personal|Work|Study|Urgent|Ideas",
            self.0
        )
    }
}

impl Error for CategoryParseError {}

impl FromStr for Category {
    type Err = CategoryParseError;

    /// Parses a category name, ignoring ASCII case and surrounding whitespace.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CategoryParseError(trimmed.to_string()))
    }
}
