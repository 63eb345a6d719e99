//! Column count ("size") resolution.

use crate::math::{floor_usize, round_usize};
use crate::{PointerKind, Viewport};

/// Smallest column count the default range allows.
pub const SIZE_MIN: usize = 2;
/// Largest column count the default range allows.
pub const SIZE_MAX: usize = 7;

/// Inclusive bounds for the column count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SizeRange {
    pub min: usize,
    pub max: usize,
}

impl SizeRange {
    pub fn new(min: usize, max: usize) -> Self {
        let min = min.max(1);
        Self {
            min,
            max: max.max(min),
        }
    }

    /// Clamps `size` into the range. Zero stays zero ("unresolved").
    pub fn clamp(&self, size: usize) -> usize {
        let size = size.min(self.max);
        if size > 0 && size < self.min {
            self.min
        } else {
            size
        }
    }

    pub fn contains(&self, size: usize) -> bool {
        size >= self.min && size <= self.max
    }
}

impl Default for SizeRange {
    fn default() -> Self {
        Self {
            min: SIZE_MIN,
            max: SIZE_MAX,
        }
    }
}

/// How an automatic column count is derived from the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AutoSizePolicy {
    /// Input modality: touch gets at least 3 columns at ~140px, pointers at least 2 at ~250px.
    #[default]
    Pointer,
    /// Logical width breakpoints adjusted for the device pixel ratio.
    PixelDensity,
}

/// Resolves column counts. Stateless apart from its configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SizeResolver {
    pub range: SizeRange,
    pub policy: AutoSizePolicy,
}

impl SizeResolver {
    pub fn new(range: SizeRange, policy: AutoSizePolicy) -> Self {
        Self { range, policy }
    }

    /// Picks a comfortable column count for `viewport`, clamped to the range.
    pub fn resolve(&self, viewport: &Viewport) -> usize {
        let raw = match self.policy {
            AutoSizePolicy::Pointer => pointer_size(viewport.width, viewport.pointer),
            AutoSizePolicy::PixelDensity => density_size(viewport.width, viewport.pixel_ratio),
        };
        self.range.clamp(raw)
    }

    /// Applies an explicit request: positive values are clamped, `0` asks for auto resolution.
    ///
    /// Returns `None` when auto resolution is needed and `viewport` is missing.
    pub fn resolve_requested(
        &self,
        requested: usize,
        viewport: Option<&Viewport>,
    ) -> Option<usize> {
        if requested > 0 {
            return Some(self.range.clamp(requested));
        }
        viewport.map(|v| self.resolve(v))
    }
}

/// Resolves the automatic column count with the default range and pointer policy.
pub fn resolve_auto_size(viewport_width: f64, pointer: PointerKind) -> usize {
    SizeRange::default().clamp(pointer_size(viewport_width, pointer))
}

fn pointer_size(width: f64, pointer: PointerKind) -> usize {
    match pointer {
        PointerKind::Coarse => floor_usize(width / 140.0).max(3),
        PointerKind::Fine => round_usize(width / 250.0).max(2),
    }
}

fn density_size(width: f64, pixel_ratio: f64) -> usize {
    let ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
        pixel_ratio
    } else {
        1.0
    };
    let (two, three) = if ratio == 1.0 {
        (900.0, 1400.0)
    } else {
        (450.0, 700.0)
    };
    let logical = width / ratio;

    if logical <= two {
        2
    } else if logical <= three {
        3
    } else if logical <= 1800.0 {
        4
    } else {
        5
    }
}
