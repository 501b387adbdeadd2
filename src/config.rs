//! Application-level configuration constants.

// UI behavior
pub const DEBOUNCE_MS: u32 = 300;

// Toggle colours, positional: neutral, include, exclude
pub const NEUTRAL_COLOR: &str = "#d0d0d0";
pub const INCLUDE_COLOR: &str = "#7bc47f";
pub const EXCLUDE_COLOR: &str = "#d9776f";

// Star rating
pub const NUM_STARS: u8 = 5;
pub const STAR_LIT_COLOR: &str = "#f0c420";
pub const STAR_UNLIT_COLOR: &str = "#555555";

// Hover preview
pub const THUMBNAIL_COLUMNS: usize = 3;

// Year range slider
pub const YEAR_MIN: i32 = 1920;
pub const YEAR_MAX: i32 = 2026;
pub const YEAR_MIN_GAP: i32 = 1;
