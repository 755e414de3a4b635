//! Fixed-size grouping of a sequence

/// Split `items` into consecutive groups of exactly `size` elements.
///
/// A trailing remainder shorter than `size` is dropped, not returned as a
/// short group. Signature building relies on every group having the same
/// length, so positions in the remainder simply never receive a page.
///
/// # Panics
/// Panics if `size` is zero.
pub fn chunk<T: Clone>(items: &[T], size: usize) -> Vec<Vec<T>> {
    assert!(size >= 1, "chunk size must be at least 1");
    items.chunks_exact(size).map(<[T]>::to_vec).collect()
}
