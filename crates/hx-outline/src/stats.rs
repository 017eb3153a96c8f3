//! Statistics aggregator.

use hx_model::{Heading, HeadingLevel};
use serde::Serialize;

/// Per-level heading counts for one result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OutlineStats {
    /// Number of `H1` headings.
    pub h1: usize,
    /// Number of `H2` headings.
    pub h2: usize,
    /// Number of `H3` headings.
    pub h3: usize,
    /// `total_headings` as reported by the service, not a recount.
    pub total: usize,
}

impl OutlineStats {
    /// Count for a single level.
    #[must_use]
    pub const fn count(&self, level: HeadingLevel) -> usize {
        match level {
            HeadingLevel::H1 => self.h1,
            HeadingLevel::H2 => self.h2,
            HeadingLevel::H3 => self.h3,
        }
    }

    /// Sum of the per-level counts.
    #[must_use]
    pub const fn level_sum(&self) -> usize {
        self.h1 + self.h2 + self.h3
    }
}

/// Count headings per level over the full, unfiltered outline.
///
/// `total` is passed through unchanged so callers surface the service's own
/// count.
#[must_use]
pub fn outline_stats(outline: &[Heading], total: usize) -> OutlineStats {
    let mut stats = OutlineStats {
        total,
        ..OutlineStats::default()
    };
    for heading in outline {
        match heading.level {
            HeadingLevel::H1 => stats.h1 += 1,
            HeadingLevel::H2 => stats.h2 += 1,
            HeadingLevel::H3 => stats.h3 += 1,
        }
    }
    stats
}
