use std::ops::Range;
use crate::helper::range_helper::RangeCompare::{Lower, Higher, Contained};
use crate::error::{Result, ErrorType};
use crate::field_types::{Offset, Length};

pub enum RangeCompare {
    /// value is lower than range
    Lower,
    /// value is in range
    Contained,
    /// value is higher than range
    Higher,
}

/// check if value is lower, contained or higher than the range
pub fn compare_range<T>(range: &Range<T>, value: T) -> RangeCompare
    where T: PartialOrd<T>
{
    if value < range.start {
        Lower
    } else if value >= range.end {
        Higher
    } else {
        Contained
    }
}

/// the range `[offset, offset + length)` if it fits into `size` bytes,
/// otherwise memview_lib::error::ErrorType::RangeError
pub fn checked_range(offset: Offset, length: Length, size: usize) -> Result<Range<usize>> {
    match offset.checked_add(length) {
        Some(end) if end <= size => Ok(offset..end),
        _ => Err(ErrorType::RangeError {
            offset,
            length,
            size,
        }),
    }
}
