//! Results panel state: one fixed column plus the paged carousel.

use super::carousel::{ColumnCarousel, PAGED_COLUMNS};

/// Maximum number of result lines per column
pub const LINES_PER_COLUMN: usize = 9;

/// Total columns shown by the panel (fixed + paged)
pub const TOTAL_COLUMNS: usize = PAGED_COLUMNS + 1;

/// Results panel state (rendering-agnostic)
#[derive(Debug, Clone, Default)]
pub struct ResultsPanelState {
    /// Whether the panel is shown
    pub open: bool,

    /// True while a results request is in flight
    pub loading: bool,

    /// Column 1, always visible
    fixed_column: Vec<String>,

    /// Columns 2-6
    carousel: ColumnCarousel,

    /// Lines that did not fit into the six columns
    overflow: usize,
}

impl ResultsPanelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the panel and mark it as waiting for data
    pub fn open(&mut self) {
        self.open = true;
        self.loading = true;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.loading = false;
    }

    /// Replace panel contents with `lines`, chunked per column
    pub fn populate(&mut self, lines: Vec<String>) {
        let total = lines.len();
        let mut chunks: Vec<Vec<String>> = lines
            .chunks(LINES_PER_COLUMN)
            .take(TOTAL_COLUMNS)
            .map(|chunk| chunk.to_vec())
            .collect();

        self.overflow = total.saturating_sub(LINES_PER_COLUMN * TOTAL_COLUMNS);
        if self.overflow > 0 {
            tracing::warn!(
                "Results overflow: {} of {} lines do not fit into {} columns",
                self.overflow,
                total,
                TOTAL_COLUMNS
            );
        }

        self.fixed_column = if chunks.is_empty() {
            Vec::new()
        } else {
            chunks.remove(0)
        };
        self.carousel.populate(chunks);
        self.loading = false;

        tracing::info!(
            "Results populated: {} lines, {} paged columns",
            total,
            self.carousel.populated_len()
        );
    }

    pub fn fixed_column(&self) -> &[String] {
        &self.fixed_column
    }

    pub fn carousel(&self) -> &ColumnCarousel {
        &self.carousel
    }

    /// Lines of the visible paged column
    pub fn paged_column(&self) -> &[String] {
        self.carousel
            .visible_slot()
            .map(|slot| slot.lines.as_slice())
            .unwrap_or(&[])
    }

    pub fn overflow(&self) -> usize {
        self.overflow
    }

    pub fn next_column(&mut self) {
        self.carousel.advance();
    }

    pub fn previous_column(&mut self) {
        self.carousel.retreat();
    }

    /// Page label for the paged column, e.g. "2/4" (1-based over populated slots)
    pub fn page_label(&self) -> String {
        let pages = self.carousel.populated_len().max(1);
        let current = self.carousel.visible().map(|i| i + 1).unwrap_or(1);
        format!("{}/{}", current, pages)
    }

    /// True when there is nothing to show at all
    pub fn is_empty(&self) -> bool {
        self.fixed_column.is_empty() && self.carousel.populated_len() == 0
    }

    /// All result lines in column order, one per line
    pub fn plain_text(&self) -> String {
        let paged = self
            .carousel
            .slots()
            .iter()
            .flat_map(|slot| slot.lines.iter());
        self.fixed_column
            .iter()
            .chain(paged)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
