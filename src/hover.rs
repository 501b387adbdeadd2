//! Row layout for the hover-preview thumbnail grid.

/// Split a `;`-separated image source list, dropping empty segments.
pub fn split_sources(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Chunk `items` into rows of `columns` entries; the last row may be
/// short. A zero column count is read as one column.
pub fn grid_rows<T: Clone>(items: &[T], columns: usize) -> Vec<Vec<T>> {
    items
        .chunks(columns.max(1))
        .map(|row| row.to_vec())
        .collect()
}
