//! Low-level primitives for uninitialised element storage.
//!
//! [`RawBlock`] is the only place in the crate that talks to the global
//! allocator. It separates three concerns that a growable array must not
//! conflate: acquiring raw capacity, constructing a value into a slot,
//! and destroying the value in a slot. It never tracks which slots are
//! live; that is the owner's job.

use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::ptr::{self, NonNull};

use keel_core::ArrayError;

/// An owned, uninitialised allocation with room for `capacity` values of `T`.
///
/// Dropping a `RawBlock` releases the memory without dropping any slot.
pub(crate) struct RawBlock<T> {
    ptr: NonNull<T>,
    capacity: usize,
    _owns: PhantomData<T>,
}

// SAFETY: a RawBlock is a uniquely owned allocation; sending or sharing it
// is exactly as safe as sending or sharing the values it may hold.
unsafe impl<T: Send> Send for RawBlock<T> {}
// SAFETY: see above.
unsafe impl<T: Sync> Sync for RawBlock<T> {}

impl<T> RawBlock<T> {
    /// A block with no capacity. Never touches the allocator.
    pub(crate) const fn empty() -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: 0,
            _owns: PhantomData,
        }
    }

    /// Allocate raw storage for `capacity` values.
    ///
    /// Panics on capacity overflow; allocator refusal aborts through
    /// [`alloc::handle_alloc_error`].
    pub(crate) fn allocate(capacity: usize) -> Self {
        let layout = match Self::layout(capacity) {
            Ok(layout) => layout,
            Err(_) => capacity_overflow(capacity),
        };
        match Self::allocate_layout(capacity, layout) {
            Some(block) => block,
            None => alloc::handle_alloc_error(layout),
        }
    }

    /// Allocate raw storage for `capacity` values, reporting failure.
    pub(crate) fn try_allocate(capacity: usize) -> Result<Self, ArrayError> {
        let layout = Self::layout(capacity)?;
        Self::allocate_layout(capacity, layout).ok_or(ArrayError::AllocationFailed {
            capacity,
            bytes: layout.size(),
        })
    }

    fn layout(capacity: usize) -> Result<Layout, ArrayError> {
        Layout::array::<T>(capacity).map_err(|_| ArrayError::CapacityOverflow {
            requested: capacity,
        })
    }

    fn allocate_layout(capacity: usize, layout: Layout) -> Option<Self> {
        if layout.size() == 0 {
            // Zero-sized requests (capacity 0 or zero-sized T) need no memory.
            return Some(Self {
                ptr: NonNull::dangling(),
                capacity,
                _owns: PhantomData,
            });
        }
        // SAFETY: layout has a non-zero size.
        let raw = unsafe { alloc::alloc(layout) };
        NonNull::new(raw.cast::<T>()).map(|ptr| Self {
            ptr,
            capacity,
            _owns: PhantomData,
        })
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Pointer to slot `index`.
    ///
    /// # Safety
    ///
    /// `index <= capacity`.
    pub(crate) unsafe fn slot(&self, index: usize) -> *mut T {
        debug_assert!(index <= self.capacity);
        // SAFETY: caller keeps `index` within (or one past) the allocation.
        unsafe { self.ptr.as_ptr().add(index) }
    }

    /// Write `value` into slot `index`, making it live.
    ///
    /// # Safety
    ///
    /// `index < capacity` and the slot must not hold a live value.
    pub(crate) unsafe fn construct(&mut self, index: usize, value: T) {
        debug_assert!(index < self.capacity);
        // SAFETY: slot is in bounds and uninitialised, so no value is overwritten.
        unsafe { self.slot(index).write(value) }
    }

    /// Move the live value out of slot `index`, leaving it uninitialised.
    ///
    /// # Safety
    ///
    /// `index < capacity` and the slot must hold a live value.
    pub(crate) unsafe fn take(&mut self, index: usize) -> T {
        debug_assert!(index < self.capacity);
        // SAFETY: slot is live; the caller stops treating it as live.
        unsafe { self.slot(index).read() }
    }

    /// Drop the live values in slots `[start, end)`, in index order.
    ///
    /// # Safety
    ///
    /// `start <= end <= capacity` and every slot in the range must be live.
    /// The slots are uninitialised afterwards.
    pub(crate) unsafe fn destroy_range(&mut self, start: usize, end: usize) {
        debug_assert!(start <= end && end <= self.capacity);
        // SAFETY: the range is in bounds and every slot in it is live.
        unsafe {
            let live = ptr::slice_from_raw_parts_mut(self.slot(start), end - start);
            ptr::drop_in_place(live);
        }
    }

    /// Shift the live values in `[from, from + count)` to start at `to`.
    ///
    /// # Safety
    ///
    /// Both ranges must lie within the capacity. Slots vacated by the shift
    /// are uninitialised afterwards; slots overwritten must not hold values
    /// that still need dropping.
    pub(crate) unsafe fn shift(&mut self, from: usize, to: usize, count: usize) {
        debug_assert!(from + count <= self.capacity && to + count <= self.capacity);
        // SAFETY: both ranges are in bounds; `ptr::copy` tolerates overlap.
        unsafe { ptr::copy(self.slot(from), self.slot(to), count) }
    }

    /// Move the first `count` live values into the same slots of `dst`.
    ///
    /// The transfer is a bitwise relocation: no value is cloned or dropped.
    ///
    /// # Safety
    ///
    /// `count` must not exceed either capacity, slots `[0, count)` of `self`
    /// must be live and those of `dst` uninitialised. Afterwards the source
    /// slots are uninitialised and the destination slots are live.
    pub(crate) unsafe fn relocate_into(&mut self, dst: &mut RawBlock<T>, count: usize) {
        debug_assert!(count <= self.capacity && count <= dst.capacity);
        // SAFETY: distinct allocations never overlap, both ranges are in bounds.
        unsafe { ptr::copy_nonoverlapping(self.as_ptr(), dst.as_ptr(), count) }
    }
}

impl<T> Drop for RawBlock<T> {
    fn drop(&mut self) {
        // The layout was validated when the block was allocated.
        if let Ok(layout) = Layout::array::<T>(self.capacity) {
            if layout.size() != 0 {
                // SAFETY: the pointer came from `alloc::alloc` with this layout.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast::<u8>(), layout) }
            }
        }
    }
}

#[cold]
#[track_caller]
pub(crate) fn capacity_overflow(requested: usize) -> ! {
    panic!("capacity overflow: {requested} slots cannot be allocated")
}
