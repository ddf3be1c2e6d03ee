//! Filtering trait.

/// immutable, pure filter (2 successive equal inputs -> 2 equal outputs)
///
/// What `true` means depends on the filter: noise filters return `true` on noise,
/// quality filters return `true` on content to keep.
pub trait Filter<T>: Default {
    fn detect(&self, item: T) -> bool;
}
