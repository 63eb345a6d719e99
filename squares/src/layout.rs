use alloc::vec::Vec;

use crate::{ItemState, Placement, SizeRange};

/// Column geometry for one column count.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnLayout {
    size: usize,
    scale: f64,
    column_left_percent: Vec<f64>,
}

impl ColumnLayout {
    fn new(size: usize) -> Self {
        let scale = 1.0 / size as f64;
        let column_left_percent = (0..size).map(|n| scale * 100.0 * n as f64).collect();
        Self {
            size,
            scale,
            column_left_percent,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn column_left_percent(&self, column: usize) -> Option<f64> {
        self.column_left_percent.get(column).copied()
    }

    /// Placement of the item at `index` when it sits in `row`.
    pub fn placement(&self, index: usize, row: usize) -> Placement {
        let column = index % self.size;
        Placement {
            left_percent: self.column_left_percent[column],
            top_percent: 100.0 * row as f64 / self.size as f64,
            scale: self.scale,
        }
    }

    /// Placement for a render record, or `None` if the record is not positioned.
    pub fn placement_for(&self, state: &ItemState) -> Option<Placement> {
        state
            .positioned
            .then(|| self.placement(state.index, state.row))
    }
}

/// Per-size layout rules, built once for every column count a grid may use.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutRegistry {
    range: SizeRange,
    layouts: Vec<ColumnLayout>,
}

impl LayoutRegistry {
    pub fn new(range: SizeRange) -> Self {
        let layouts = (range.min..=range.max).map(ColumnLayout::new).collect();
        Self { range, layouts }
    }

    pub fn range(&self) -> SizeRange {
        self.range
    }

    pub fn get(&self, size: usize) -> Option<&ColumnLayout> {
        if !self.range.contains(size) {
            return None;
        }
        self.layouts.get(size - self.range.min)
    }

    /// Height of the rows box as a percentage of its width.
    ///
    /// The rows box is exactly `size` rows tall at any column count, so item tops expressed as
    /// `100 * row / size` percent stay valid across container resizes.
    pub fn container_padding_top_percent(row_height_ratio: f64) -> f64 {
        100.0 * row_height_ratio
    }
}
