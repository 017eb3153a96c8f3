//! Heading levels and outline entries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Level tag of an outline entry.
///
/// The extraction service clusters font sizes into at most three tiers and
/// labels them `H1` (largest) through `H3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HeadingLevel {
    /// Top-level heading.
    H1,
    /// Second-level heading.
    H2,
    /// Third-level heading.
    H3,
}

impl HeadingLevel {
    /// All levels, outermost first.
    pub const ALL: [Self; 3] = [Self::H1, Self::H2, Self::H3];

    /// Nesting depth used for indentation (`H1` = 0).
    #[must_use]
    pub const fn depth(self) -> usize {
        match self {
            Self::H1 => 0,
            Self::H2 => 1,
            Self::H3 => 2,
        }
    }

    /// Wire label (`"H1"`, `"H2"`, `"H3"`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::H1 => "H1",
            Self::H2 => "H2",
            Self::H3 => "H3",
        }
    }

    pub(crate) const fn bit(self) -> u8 {
        1 << self.depth()
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for HeadingLevel {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "H1" | "h1" => Ok(Self::H1),
            "H2" | "h2" => Ok(Self::H2),
            "H3" | "h3" => Ok(Self::H3),
            other => Err(ModelError::UnknownLevel(other.to_string())),
        }
    }
}

/// One entry of a document outline.
///
/// Headings are produced by the extraction service and never modified
/// afterwards.
///
/// # Example
///
/// ```
/// use hx_model::{Heading, HeadingLevel};
///
/// let heading = Heading::new(HeadingLevel::H2, "Background", 2);
/// assert_eq!(heading.level.depth(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Heading {
    /// Level tag.
    pub level: HeadingLevel,
    /// Heading text as it appears in the document.
    pub text: String,
    /// 1-based page number.
    pub page: u32,
}

impl Heading {
    /// Create a heading.
    pub fn new(level: HeadingLevel, text: impl Into<String>, page: u32) -> Self {
        Self {
            level,
            text: text.into(),
            page,
        }
    }
}
