//! Terminal rendering of extraction results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use hx_model::{Heading, HeadingLevel};
use hx_outline::{OutlineStats, outline_line};

/// Indented listing of `headings`, one per line, no trailing newline.
#[must_use]
pub fn outline_listing(headings: &[&Heading]) -> String {
    headings
        .iter()
        .map(|&heading| outline_line(heading))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One-line footer saying how much of the outline is visible.
#[must_use]
pub fn shown_summary(shown: usize, total: usize) -> String {
    if shown == total {
        format!("{total} headings")
    } else {
        format!("Showing {shown} of {total} headings")
    }
}

/// Per-level statistics table.
#[must_use]
pub fn stats_table(stats: &OutlineStats) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Level"), header_cell("Headings")]);
    apply_table_style(&mut table);

    for level in HeadingLevel::ALL {
        table.add_row(vec![Cell::new(level.label()), Cell::new(stats.count(level))]);
    }
    table.add_row(vec![
        Cell::new("Total")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(stats.total).add_attribute(Attribute::Bold),
    ]);

    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table
}

/// Shared table style for command output.
pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hx_outline::outline_stats;

    #[test]
    fn test_outline_listing() {
        let outline = [
            Heading::new(HeadingLevel::H1, "Intro", 1),
            Heading::new(HeadingLevel::H3, "Detail", 2),
        ];
        let refs: Vec<&Heading> = outline.iter().collect();
        insta::assert_snapshot!(outline_listing(&refs), @r"
        Intro (Page 1)
            Detail (Page 2)
        ");
    }

    #[test]
    fn test_outline_listing_empty() {
        assert_eq!(outline_listing(&[]), "");
    }

    #[test]
    fn test_shown_summary() {
        assert_eq!(shown_summary(4, 4), "4 headings");
        assert_eq!(shown_summary(1, 4), "Showing 1 of 4 headings");
    }

    #[test]
    fn test_stats_table_rows() {
        let outline = [
            Heading::new(HeadingLevel::H1, "A", 1),
            Heading::new(HeadingLevel::H1, "B", 1),
            Heading::new(HeadingLevel::H2, "C", 2),
        ];
        let table = stats_table(&outline_stats(&outline, 3));
        assert_eq!(table.row_count(), 4);

        let rendered = table.to_string();
        for label in ["H1", "H2", "H3", "Total"] {
            assert!(rendered.contains(label), "{rendered}");
        }
    }
}
