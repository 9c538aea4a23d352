//! Lifecycle-counting element types.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

#[derive(Default)]
struct Counts {
    constructed: Cell<usize>,
    cloned: Cell<usize>,
    dropped: Cell<usize>,
}

fn bump(cell: &Cell<usize>) {
    cell.set(cell.get() + 1);
}

/// Shared counters for a family of [`Tracked`] values.
///
/// Each test creates its own `Lifecycle`, so counts never leak between
/// tests running on parallel threads.
#[derive(Clone, Default)]
pub struct Lifecycle {
    counts: Rc<Counts>,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of values created through [`Tracked::new`].
    pub fn constructed(&self) -> usize {
        self.counts.constructed.get()
    }

    /// Number of values created through `Clone`.
    pub fn cloned(&self) -> usize {
        self.counts.cloned.get()
    }

    /// Number of values dropped.
    pub fn dropped(&self) -> usize {
        self.counts.dropped.get()
    }

    /// Values currently alive: constructed plus cloned minus dropped.
    pub fn alive(&self) -> usize {
        self.constructed() + self.cloned() - self.dropped()
    }
}

impl fmt::Debug for Lifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lifecycle")
            .field("constructed", &self.constructed())
            .field("cloned", &self.cloned())
            .field("dropped", &self.dropped())
            .finish()
    }
}

/// An `i64` payload that reports its construction, clones and drop to a
/// [`Lifecycle`].
pub struct Tracked {
    value: i64,
    counts: Rc<Counts>,
}

impl Tracked {
    pub fn new(lifecycle: &Lifecycle, value: i64) -> Self {
        bump(&lifecycle.counts.constructed);
        Self {
            value,
            counts: Rc::clone(&lifecycle.counts),
        }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn set_value(&mut self, value: i64) {
        self.value = value;
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        bump(&self.counts.cloned);
        Self {
            value: self.value,
            counts: Rc::clone(&self.counts),
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        bump(&self.counts.dropped);
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl fmt::Debug for Tracked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tracked({})", self.value)
    }
}

impl fmt::Display for Tracked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Records the ids of [`Marked`] values in the order they are dropped.
#[derive(Clone, Default)]
pub struct DropOrder {
    log: Rc<RefCell<Vec<u32>>>,
}

impl DropOrder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a value that appends `id` to this log when dropped.
    pub fn mark(&self, id: u32) -> Marked {
        Marked {
            id,
            log: Rc::clone(&self.log),
        }
    }

    /// Ids dropped so far, oldest first.
    pub fn dropped(&self) -> Vec<u32> {
        self.log.borrow().clone()
    }
}

/// A value that logs its id to a [`DropOrder`] when dropped.
pub struct Marked {
    id: u32,
    log: Rc<RefCell<Vec<u32>>>,
}

impl Marked {
    pub fn id(&self) -> u32 {
        self.id
    }
}

impl Drop for Marked {
    fn drop(&mut self) {
        self.log.borrow_mut().push(self.id);
    }
}

impl fmt::Debug for Marked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Marked({})", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracked_counts_full_lifecycle() {
        let life = Lifecycle::new();
        let a = Tracked::new(&life, 1);
        let b = a.clone();
        assert_eq!(life.constructed(), 1);
        assert_eq!(life.cloned(), 1);
        assert_eq!(life.alive(), 2);
        drop(a);
        drop(b);
        assert_eq!(life.dropped(), 2);
        assert_eq!(life.alive(), 0);
    }

    #[test]
    fn separate_lifecycles_do_not_share_counts() {
        let first = Lifecycle::new();
        let second = Lifecycle::new();
        let _a = Tracked::new(&first, 1);
        assert_eq!(first.constructed(), 1);
        assert_eq!(second.constructed(), 0);
    }

    #[test]
    fn drop_order_records_ids() {
        let order = DropOrder::new();
        let a = order.mark(1);
        let b = order.mark(2);
        drop(b);
        drop(a);
        assert_eq!(order.dropped(), vec![2, 1]);
    }
}
