//! Paged results columns.
//!
//! The results panel shows one fixed column plus one of five paged columns.
//! Paged columns are filled left to right, so the first empty slot marks the
//! end of the populated range. Exactly one slot is visible once populated.

/// Number of paged columns (display columns 2 through 6)
pub const PAGED_COLUMNS: usize = 5;

/// One paged column of result lines
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnSlot {
    pub lines: Vec<String>,
}

impl ColumnSlot {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// A slot counts as empty when it holds no text at all
    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(|line| line.is_empty())
    }
}

/// Carousel over the five paged columns (rendering-agnostic)
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnCarousel {
    slots: [ColumnSlot; PAGED_COLUMNS],
    visible: Option<usize>,
}

impl Default for ColumnCarousel {
    fn default() -> Self {
        Self::new()
    }
}

impl ColumnCarousel {
    /// Create an empty carousel with nothing visible
    pub fn new() -> Self {
        Self {
            slots: Default::default(),
            visible: None,
        }
    }

    /// Replace every slot with `chunks` (missing chunks become empty slots)
    /// and show slot 0. Chunks past the fifth are ignored.
    pub fn populate(&mut self, chunks: Vec<Vec<String>>) {
        self.clear();
        for (slot, lines) in self.slots.iter_mut().zip(chunks) {
            slot.lines = lines;
        }
        self.visible = Some(0);
    }

    /// Empty all slots and hide everything
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            slot.lines.clear();
        }
        self.visible = None;
    }

    pub fn slot(&self, index: usize) -> Option<&ColumnSlot> {
        self.slots.get(index)
    }

    pub fn slots(&self) -> &[ColumnSlot] {
        &self.slots
    }

    /// Index of the visible slot, if any
    pub fn visible(&self) -> Option<usize> {
        self.visible
    }

    /// The visible slot, if any
    pub fn visible_slot(&self) -> Option<&ColumnSlot> {
        self.visible.and_then(|index| self.slots.get(index))
    }

    /// Force visibility onto one slot (out of range indices are ignored)
    pub fn show(&mut self, index: usize) {
        if index < PAGED_COLUMNS {
            self.visible = Some(index);
        }
    }

    /// Number of leading non-empty slots
    pub fn populated_len(&self) -> usize {
        self.end_index()
    }

    /// Index of the first empty slot, or `PAGED_COLUMNS` when all are filled
    fn end_index(&self) -> usize {
        self.slots
            .iter()
            .position(|slot| slot.is_empty())
            .unwrap_or(PAGED_COLUMNS)
    }

    fn is_filled(&self, index: usize) -> bool {
        self.slots.get(index).is_some_and(|slot| !slot.is_empty())
    }

    /// Move to the next non-empty slot, wrapping to slot 0
    ///
    /// Does nothing when no slot is visible.
    pub fn advance(&mut self) {
        let Some(current) = self.visible else {
            return;
        };

        let next = current + 1;
        self.visible = if self.is_filled(next) { Some(next) } else { Some(0) };
    }

    /// Move to the previous slot; from slot 0 jump to the last populated slot
    ///
    /// Falls back to slot 0 whenever the target is empty or out of range.
    /// Does nothing when no slot is visible.
    pub fn retreat(&mut self) {
        let Some(current) = self.visible else {
            return;
        };

        let target = if current == 0 {
            self.end_index().checked_sub(1)
        } else {
            Some(current - 1)
        };

        self.visible = match target {
            Some(index) if self.is_filled(index) => Some(index),
            _ => Some(0),
        };
    }
}
