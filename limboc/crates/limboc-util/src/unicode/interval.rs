//! Closed codepoint intervals.
//!
//! Classification tables (identifier characters, combining marks, wide
//! characters) are static slices of [`Interval`]s. Binary search over a
//! table is only correct when the table is sorted and free of overlaps, so
//! tables are declared with [`interval_table!`](crate::interval_table),
//! which rejects a badly ordered table at compile time.

use std::cmp::Ordering;

/// An inclusive range `[start, end]` of codepoints
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Interval {
    /// First codepoint in the range
    pub start: u32,
    /// Last codepoint in the range
    pub end: u32,
}

impl Interval {
    /// Create an interval covering `start..=end`
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Returns true if the codepoint lies in the interval
    #[inline]
    pub const fn contains(&self, codepoint: u32) -> bool {
        self.start <= codepoint && codepoint <= self.end
    }
}

/// Check that a table is sorted ascending and has no overlapping intervals.
///
/// Every interval must also satisfy `start <= end`. This is a `const fn`
/// so that tables can be checked while compiling.
///
/// # Examples
///
/// ```
/// use limboc_util::unicode::{is_sorted, Interval};
///
/// assert!(is_sorted(&[Interval::new(1, 2), Interval::new(3, 9)]));
/// assert!(!is_sorted(&[Interval::new(3, 9), Interval::new(1, 2)]));
/// assert!(!is_sorted(&[Interval::new(1, 5), Interval::new(5, 9)]));
/// ```
pub const fn is_sorted(table: &[Interval]) -> bool {
    let mut i = 0;
    while i < table.len() {
        if table[i].start > table[i].end {
            return false;
        }
        if i > 0 && table[i].start <= table[i - 1].end {
            return false;
        }
        i += 1;
    }
    true
}

/// Linear membership test.
///
/// Works on any table, sorted or not.
pub fn is_in_range(codepoint: u32, table: &[Interval]) -> bool {
    table.iter().any(|interval| interval.contains(codepoint))
}

/// Binary-search membership test over a sorted, non-overlapping table.
///
/// Codepoints below the first interval or above the last are rejected
/// before searching.
///
/// # Examples
///
/// ```
/// use limboc_util::unicode::{is_in_sorted_range, Interval};
///
/// let table = [Interval::new(0x30, 0x39), Interval::new(0x41, 0x5A)];
/// assert!(is_in_sorted_range('7' as u32, &table));
/// assert!(is_in_sorted_range('Q' as u32, &table));
/// assert!(!is_in_sorted_range('@' as u32, &table));
/// assert!(!is_in_sorted_range('q' as u32, &table));
/// ```
pub fn is_in_sorted_range(codepoint: u32, table: &[Interval]) -> bool {
    let (Some(first), Some(last)) = (table.first(), table.last()) else {
        return false;
    };
    if codepoint < first.start || codepoint > last.end {
        return false;
    }

    table
        .binary_search_by(|interval| {
            if interval.end < codepoint {
                Ordering::Less
            } else if interval.start > codepoint {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .is_ok()
}

/// Declare a constant interval table that is checked at compile time.
///
/// The table must be sorted ascending by `start` and must not contain
/// overlapping intervals; otherwise the crate fails to compile.
///
/// # Examples
///
/// ```
/// limboc_util::interval_table! {
///     /// ASCII digits and uppercase letters.
///     pub const DIGITS_AND_UPPER = [
///         (0x30, 0x39),
///         (0x41, 0x5A),
///     ];
/// }
///
/// assert_eq!(DIGITS_AND_UPPER.len(), 2);
/// ```
#[macro_export]
macro_rules! interval_table {
    ($(#[$meta:meta])* $vis:vis const $name:ident = [$(($start:expr, $end:expr)),* $(,)?];) => {
        $(#[$meta])*
        $vis const $name: &[$crate::unicode::Interval] = &[
            $($crate::unicode::Interval::new($start, $end)),*
        ];
        $crate::__private::const_assert!($crate::unicode::is_sorted($name));
    };
}
