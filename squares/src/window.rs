use alloc::vec::Vec;

use crate::math::{ceil_usize, floor_usize};
use crate::{Extent, ItemState, VirtualRange};

/// Inputs of one window recompute.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindowInput {
    /// Scroll offset measured from the first row.
    pub scroll_offset: f64,
    pub container: Extent,
    pub size: usize,
    pub row_height_ratio: f64,
    pub materialized: usize,
}

impl WindowInput {
    pub fn row_height(&self) -> f64 {
        row_height(self.container.width, self.size, self.row_height_ratio)
    }
}

/// Height of one row of `size` items across `width` pixels.
pub fn row_height(width: f64, size: usize, row_height_ratio: f64) -> f64 {
    if size == 0 {
        return 0.0;
    }
    (width / size as f64) * row_height_ratio
}

/// Row-aligned window for the given geometry, before clipping to materialized items.
///
/// One extra row past the viewport is included so fast scrolling never exposes rows that have
/// not been styled yet.
pub fn window_for(
    scroll_offset: f64,
    container_height: f64,
    row_height: f64,
    size: usize,
) -> VirtualRange {
    if size == 0 || row_height.is_nan() || row_height <= 0.0 {
        return VirtualRange::default();
    }
    let visible_row_start = floor_usize(scroll_offset / row_height);
    let start = visible_row_start.saturating_mul(size);
    let rows = ceil_usize(container_height / row_height).saturating_add(1);
    let end = start.saturating_add(rows.saturating_mul(size));
    VirtualRange::new(start, end)
}

/// Result of [`WindowRenderer::recompute`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowFrame {
    pub window: VirtualRange,
    pub changed: usize,
    pub cleared: usize,
    pub nearing_end: bool,
}

/// Tracks which materialized items carry visible/positioned state.
///
/// Each recompute applies only the difference between the previous and the new window, so
/// calling it again with the same inputs mutates nothing.
#[derive(Clone, Debug, Default)]
pub struct WindowRenderer {
    states: Vec<ItemState>,
    window: VirtualRange,
    dirty: Vec<usize>,
}

impl WindowRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current window, clipped to materialized items. Its start is always a row boundary.
    pub fn window(&self) -> VirtualRange {
        self.window
    }

    pub fn state(&self, index: usize) -> Option<&ItemState> {
        self.states.get(index)
    }

    /// Indexes whose record changed since the last [`Self::clear_dirty`], ascending.
    pub fn dirty(&self) -> &[usize] {
        &self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty.clear();
    }

    /// Flags `index` for re-rendering without touching its record (e.g. its node was swapped).
    pub fn mark_dirty(&mut self, index: usize) {
        if let Err(at) = self.dirty.binary_search(&index) {
            self.dirty.insert(at, index);
        }
    }

    /// Recomputes the window. Returns `None` (and touches nothing) when there is nothing to lay
    /// out: no items, no columns, or a container without width.
    pub fn recompute(&mut self, input: &WindowInput) -> Option<WindowFrame> {
        if input.materialized == 0 || input.size == 0 || !input.container.is_renderable() {
            return None;
        }
        let row_height = input.row_height();
        if row_height.is_nan() || row_height <= 0.0 {
            return None;
        }

        self.grow(input.materialized);

        let raw = window_for(
            input.scroll_offset,
            input.container.height,
            row_height,
            input.size,
        );
        let count = self.states.len();
        // Past the last item the window is empty; report it at 0 to keep the start row-aligned.
        let next = if raw.start_index < count {
            VirtualRange::new(raw.start_index, raw.end_index.min(count))
        } else {
            VirtualRange::default()
        };
        let prev = self.window;

        let mut cleared = 0;
        for index in prev.start_index..prev.end_index.min(count) {
            if next.contains(index) {
                continue;
            }
            let state = &mut self.states[index];
            if state.visible || state.positioned {
                state.visible = false;
                state.positioned = false;
                cleared += 1;
                self.dirty.push(index);
            }
        }

        let mut changed = 0;
        for index in next.start_index..next.end_index {
            let row = index / input.size;
            let state = &mut self.states[index];
            if state.visible && state.positioned && state.row == row {
                continue;
            }
            state.visible = true;
            state.positioned = true;
            state.row = row;
            changed += 1;
            self.dirty.push(index);
        }
        self.dirty.sort_unstable();
        self.dirty.dedup();
        self.window = next;

        let rows = input.materialized as f64 / input.size as f64;
        let nearing_end =
            input.scroll_offset + input.container.height > (rows - 1.0) * row_height;

        vtrace!(
            start = next.start_index,
            end = next.end_index,
            changed,
            cleared,
            nearing_end,
            "window recompute"
        );
        Some(WindowFrame {
            window: next,
            changed,
            cleared,
            nearing_end,
        })
    }

    /// Visits the records of the current window in index order.
    pub fn for_each_visible(&self, mut f: impl FnMut(&ItemState)) {
        for state in &self.states[self.window.start_index..self.window.end_index] {
            f(state);
        }
    }

    fn grow(&mut self, materialized: usize) {
        let len = self.states.len();
        if materialized > len {
            self.states.extend((len..materialized).map(ItemState::new));
        }
    }
}
