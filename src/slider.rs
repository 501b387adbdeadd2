//! Clamping logic for the dual-handle range slider.
//!
//! The two handles share one scale; whichever handle the user dragged
//! yields so the pair always keeps at least `min_gap` between them.

/// Which handle of a dual-handle slider the user moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleOrigin {
    Min,
    Max,
}

/// Correct a `(low, high)` handle pair after one handle moved.
///
/// The moved handle is pulled back so that `low + min_gap <= high`; the
/// other handle never moves.
pub fn clamp_handles(origin: HandleOrigin, low: i32, high: i32, min_gap: i32) -> (i32, i32) {
    match origin {
        HandleOrigin::Min if low > high - min_gap => (high - min_gap, high),
        HandleOrigin::Max if high < low + min_gap => (low, low + min_gap),
        _ => (low, high),
    }
}

/// Label text shown next to the slider, e.g. `"1980 - 2010"`.
pub fn range_label(low: i32, high: i32) -> String {
    format!("{} - {}", low, high)
}
