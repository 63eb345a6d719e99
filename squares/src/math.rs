// Float helpers that work without `std`. Negative and NaN inputs map to 0.

pub(crate) fn floor_usize(x: f64) -> usize {
    if x > 0.0 { x as usize } else { 0 }
}

pub(crate) fn ceil_usize(x: f64) -> usize {
    let f = floor_usize(x);
    if (f as f64) < x {
        f.saturating_add(1)
    } else {
        f
    }
}

pub(crate) fn round_usize(x: f64) -> usize {
    floor_usize(x + 0.5)
}
