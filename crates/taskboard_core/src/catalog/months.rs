//! Month-name lookup keyed by zero-based month index.

/// Month labels, index 0 = January.
pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "June", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Returns the label for a zero-based month index.
pub fn month_name(index: usize) -> Option<&'static str> {
    MONTHS.get(index).copied()
}
