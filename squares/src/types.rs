/// Pixel dimensions of a box (the scroll container or the viewport source).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extent {
    pub width: f64,
    pub height: f64,
}

impl Extent {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether rows can be laid out in this box at all.
    pub fn is_renderable(&self) -> bool {
        self.width.is_finite() && self.width > 0.0 && self.height.is_finite()
    }
}

/// Input modality of the device showing the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerKind {
    /// Mouse, trackpad, pen.
    #[default]
    Fine,
    /// Touch.
    Coarse,
}

/// Measurements of the element that drives automatic column-count resolution.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    /// Width in device pixels.
    pub width: f64,
    pub pointer: PointerKind,
    /// Device pixels per logical pixel.
    pub pixel_ratio: f64,
}

impl Viewport {
    pub fn new(width: f64, pointer: PointerKind) -> Self {
        Self {
            width,
            pointer,
            pixel_ratio: 1.0,
        }
    }

    pub fn with_pixel_ratio(mut self, pixel_ratio: f64) -> Self {
        self.pixel_ratio = pixel_ratio;
        self
    }
}

/// A half-open range of item indexes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VirtualRange {
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl VirtualRange {
    pub fn new(start_index: usize, end_index: usize) -> Self {
        Self {
            start_index,
            end_index,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start_index && index < self.end_index
    }
}

/// Render bookkeeping for one materialized item.
///
/// Hosts derive the item's presentation from this record alone (see
/// [`crate::Grid::placement`]); nothing is encoded in class names or attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemState {
    pub index: usize,
    pub visible: bool,
    pub positioned: bool,
    /// Row the item was last positioned in. Only meaningful while `positioned`.
    pub row: usize,
}

impl ItemState {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            visible: false,
            positioned: false,
            row: 0,
        }
    }
}

/// Where a positioned item sits inside the rows box.
///
/// All values are percentages so that a container resize never needs a per-item update:
/// `left_percent` is relative to the rows box width, `top_percent` to the rows box height
/// (see [`crate::Grid::container_padding_top_percent`]).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub left_percent: f64,
    pub top_percent: f64,
    /// Uniform scale applied to a full-width item.
    pub scale: f64,
}

/// A scroll extremity crossing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EdgeRegion {
    Top,
    TopExit,
    BottomExit,
    Bottom,
}

impl EdgeRegion {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::TopExit => "top-exit",
            Self::BottomExit => "bottom-exit",
            Self::Bottom => "bottom",
        }
    }
}

/// What currently occupies a materialized slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    Ready,
    /// A placeholder waiting for its item.
    Pending,
    /// A placeholder whose item never arrived (resolved empty, or cancelled).
    Vacant,
}

/// Result of one window recompute.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowUpdate {
    /// The row-aligned render window, clipped to the materialized items.
    pub window: VirtualRange,
    /// Records that became visible or moved to a different row.
    pub changed: usize,
    /// Records that lost their visible/positioned state.
    pub cleared: usize,
    /// The viewport reaches into the last materialized row.
    pub nearing_end: bool,
    pub edge: Option<EdgeRegion>,
}
