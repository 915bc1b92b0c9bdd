//! Course display colors.

/// Fixed color cycle (blue, green, amber, red, violet, pink, teal,
/// orange, indigo, lime).
pub const PALETTE: [&str; 10] = [
    "#3b82f6", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#ec4899", "#14b8a6", "#f97316",
    "#6366f1", "#84cc16",
];

/// Color for the course at input position `index`. Repeats every
/// [`PALETTE`] length.
pub fn course_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Colors for `count` courses, in input order.
pub fn color_palette(count: usize) -> Vec<&'static str> {
    (0..count).map(course_color).collect()
}
