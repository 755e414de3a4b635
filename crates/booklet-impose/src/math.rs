//! Page-count rounding

/// Smallest multiple of `num` that is at least `min`.
///
/// # Panics
/// Panics if `num` is zero.
pub fn next_multiple(num: usize, min: usize) -> usize {
    min.div_ceil(num) * num
}
