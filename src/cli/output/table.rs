//! Table output formatting for CLI commands
//!
//! Ranked retrieval hits and extracted fragments rendered with comfy-table.

use comfy_table::{presets, Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use std::env;

use super::truncate;
use crate::domain::models::{Segment, Source};

const TEXT_PREVIEW_CHARS: usize = 80;

/// Table formatter for CLI output
pub struct TableFormatter {
    use_colors: bool,
    max_width: Option<u16>,
}

impl TableFormatter {
    pub fn new() -> Self {
        Self {
            use_colors: supports_color(),
            max_width: None,
        }
    }

    pub fn with_config(use_colors: bool, max_width: Option<u16>) -> Self {
        Self {
            use_colors,
            max_width,
        }
    }

    /// Retrieval hits, best first
    pub fn format_sources(&self, sources: &[Source]) -> String {
        let mut table = self.create_base_table();
        table.set_header(header(&["Rank", "ID", "Page", "Distance", "Score", "Text"]));

        for (rank, source) in sources.iter().enumerate() {
            let score_cell = Cell::new(format!("{:.3}", source.score))
                .set_alignment(CellAlignment::Right);
            let score_cell = if self.use_colors {
                score_cell.fg(score_color(source.score))
            } else {
                score_cell
            };

            table.add_row(vec![
                Cell::new(rank + 1).set_alignment(CellAlignment::Right),
                Cell::new(source.id).set_alignment(CellAlignment::Right),
                Cell::new(source.page).set_alignment(CellAlignment::Right),
                Cell::new(format!("{:.4}", source.distance)).set_alignment(CellAlignment::Right),
                score_cell,
                Cell::new(truncate(&single_line(&source.text), TEXT_PREVIEW_CHARS)),
            ]);
        }

        table.to_string()
    }

    /// Extracted fragments in document order
    pub fn format_segments(&self, segments: &[Segment]) -> String {
        let mut table = self.create_base_table();
        table.set_header(header(&["ID", "Page", "Chars", "Text"]));

        for (id, segment) in segments.iter().enumerate() {
            table.add_row(vec![
                Cell::new(id).set_alignment(CellAlignment::Right),
                Cell::new(segment.page).set_alignment(CellAlignment::Right),
                Cell::new(segment.text.chars().count()).set_alignment(CellAlignment::Right),
                Cell::new(truncate(&single_line(&segment.text), TEXT_PREVIEW_CHARS)),
            ]);
        }

        table.to_string()
    }

    fn create_base_table(&self) -> Table {
        let mut table = Table::new();
        table
            .load_preset(presets::UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        if let Some(width) = self.max_width {
            table.set_width(width);
        }

        table
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn header(titles: &[&str]) -> Vec<Cell> {
    titles
        .iter()
        .map(|title| Cell::new(title).add_attribute(Attribute::Bold))
        .collect()
}

fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn score_color(score: f32) -> Color {
    if score >= 0.75 {
        Color::Green
    } else if score >= 0.5 {
        Color::Yellow
    } else {
        Color::Red
    }
}

/// Check if terminal supports colors
fn supports_color() -> bool {
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    console::colors_enabled()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(id: usize, distance: f32, text: &str) -> Source {
        Source {
            id,
            page: 1,
            distance,
            score: 1.0 / (1.0 + distance),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_sources_table_lists_rank_and_text() {
        let formatter = TableFormatter::with_config(false, Some(120));
        let out = formatter.format_sources(&[
            source(4, 0.25, "Refunds are processed\nwithin five days."),
            source(1, 1.5, "Shipping is free."),
        ]);

        assert!(out.contains("Distance"));
        assert!(out.contains("Refunds are processed within five days."));
        assert!(out.contains("0.2500"));
        assert!(out.contains("0.800"));
    }

    #[test]
    fn test_long_text_is_truncated() {
        let formatter = TableFormatter::with_config(false, Some(200));
        let long = "word ".repeat(100);
        let out = formatter.format_segments(&[Segment::new(long.trim(), 2)]);

        assert!(out.contains("..."));
        assert!(out.contains("499"));
    }

    #[test]
    fn test_score_color_bands() {
        assert_eq!(score_color(1.0), Color::Green);
        assert_eq!(score_color(0.6), Color::Yellow);
        assert_eq!(score_color(0.1), Color::Red);
    }
}
