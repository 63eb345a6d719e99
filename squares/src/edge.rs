use crate::EdgeRegion;

/// Classifies scroll offset samples into top/bottom extremity crossings.
///
/// Only the previous sample is remembered. The first sample establishes a baseline and never
/// fires.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeDetector {
    last: Option<f64>,
}

impl EdgeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_sample(&self) -> Option<f64> {
        self.last
    }

    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Records `offset` and returns the crossing it makes relative to the previous sample.
    ///
    /// `bottom` is the largest scroll offset (`scroll extent - container height`). Predicates
    /// are checked in priority order; at most one region is returned. An unchanged sample never
    /// fires.
    pub fn sample(&mut self, offset: f64, bottom: f64) -> Option<EdgeRegion> {
        let prev = self.last.replace(offset)?;
        if prev == offset {
            return None;
        }
        classify(prev, offset, bottom)
    }
}

/// The crossing from `prev` to `current`, if any.
pub fn classify(prev: f64, current: f64, bottom: f64) -> Option<EdgeRegion> {
    if prev > 0.0 && current <= 0.0 {
        Some(EdgeRegion::Top)
    } else if prev <= 0.0 && current > 0.0 {
        Some(EdgeRegion::TopExit)
    } else if prev >= bottom && current < bottom {
        Some(EdgeRegion::BottomExit)
    } else if current >= bottom && prev < bottom {
        Some(EdgeRegion::Bottom)
    } else {
        None
    }
}
