//! Outline filter engine.

use hx_model::{Heading, LevelSet};

/// Filter an outline by level and case-insensitive substring.
///
/// A heading is kept when its level is in `levels` and either `query` is
/// empty or the heading text contains `query`, both lower-cased. The result
/// borrows from `outline` and preserves document order.
///
/// # Example
///
/// ```
/// use hx_model::{Heading, HeadingLevel, LevelSet};
/// use hx_outline::filter_outline;
///
/// let outline = vec![
///     Heading::new(HeadingLevel::H1, "Introduction", 1),
///     Heading::new(HeadingLevel::H2, "Background", 2),
/// ];
/// let view = filter_outline(&outline, "back", LevelSet::all());
/// assert_eq!(view, vec![&outline[1]]);
/// ```
pub fn filter_outline<'a>(
    outline: &'a [Heading],
    query: &str,
    levels: LevelSet,
) -> Vec<&'a Heading> {
    if levels.is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    let view: Vec<&Heading> = outline
        .iter()
        .filter(|heading| matches_heading(heading, &needle, levels))
        .collect();

    tracing::debug!(
        total = outline.len(),
        shown = view.len(),
        query,
        ?levels,
        "recomputed outline view"
    );
    view
}

/// Whether a single heading passes the filter.
///
/// `needle` must already be lower-cased.
#[must_use]
pub fn matches_heading(heading: &Heading, needle: &str, levels: LevelSet) -> bool {
    levels.contains(heading.level)
        && (needle.is_empty() || heading.text.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hx_model::HeadingLevel;

    fn outline() -> Vec<Heading> {
        vec![
            Heading::new(HeadingLevel::H1, "Introduction", 1),
            Heading::new(HeadingLevel::H2, "Background", 2),
            Heading::new(HeadingLevel::H3, "Prior Work on BACKUPS", 3),
            Heading::new(HeadingLevel::H1, "Methods", 5),
        ]
    }

    #[test]
    fn test_empty_query_all_levels_is_identity() {
        let outline = outline();
        let view = filter_outline(&outline, "", LevelSet::all());
        assert_eq!(view.len(), outline.len());
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let outline = outline();
        let view = filter_outline(&outline, "BACK", LevelSet::all());
        let texts: Vec<_> = view.iter().map(|h| h.text.as_str()).collect();
        assert_eq!(texts, vec!["Background", "Prior Work on BACKUPS"]);
    }

    #[test]
    fn test_levels_restrict_view() {
        let outline = outline();
        let levels: LevelSet = [HeadingLevel::H1].into_iter().collect();
        let view = filter_outline(&outline, "", levels);
        assert!(view.iter().all(|h| h.level == HeadingLevel::H1));
        assert_eq!(view.len(), 2);
    }

    #[test]
    fn test_empty_levels_yield_nothing() {
        let outline = outline();
        assert!(filter_outline(&outline, "", LevelSet::empty()).is_empty());
        assert!(filter_outline(&outline, "intro", LevelSet::empty()).is_empty());
    }

    #[test]
    fn test_query_is_not_trimmed() {
        let outline = outline();
        assert!(filter_outline(&outline, " methods", LevelSet::all()).is_empty());
    }

    #[test]
    fn test_unicode_case_folding() {
        let outline = vec![Heading::new(HeadingLevel::H2, "ÜBERSICHT", 1)];
        assert_eq!(filter_outline(&outline, "übersicht", LevelSet::all()).len(), 1);
    }
}
