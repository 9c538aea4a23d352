//! Abstraction shared by fixed-length and growable arrays.

/// Read-only view of a contiguous run of live elements.
///
/// Implemented by every Keel container so that helpers such as
/// [`render`](crate::render) work on fixed and growable arrays alike.
pub trait Sequence {
    /// Element type stored by the container.
    type Item;

    /// Number of live elements.
    fn size(&self) -> usize;

    /// The live elements, in index order.
    fn as_slice(&self) -> &[Self::Item];

    /// Whether the container holds no live elements.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

impl<T> Sequence for [T] {
    type Item = T;

    fn size(&self) -> usize {
        self.len()
    }

    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    fn size(&self) -> usize {
        self.len()
    }

    fn as_slice(&self) -> &[T] {
        self
    }
}
