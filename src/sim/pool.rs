//! Fixed-capacity entity pools
//!
//! Slots are allocated once at construction and reused for the lifetime of
//! the session. "Free" is a flag on the entity, never a deallocation.

/// An entity that can live in a [`Pool`] slot
pub trait Pooled {
    /// Whether the slot currently holds a live entity
    fn is_active(&self) -> bool;

    /// Return the slot to the free list
    fn release(&mut self);
}

/// Index-based handle to a pool slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(pub usize);

/// Fixed-size array of reusable entity slots
#[derive(Debug, Clone)]
pub struct Pool<T> {
    slots: Box<[T]>,
}

impl<T: Pooled> Pool<T> {
    /// Build a pool of `capacity` slots, each created inactive by `make`
    pub fn new(capacity: usize, mut make: impl FnMut(SlotId) -> T) -> Self {
        let slots: Vec<T> = (0..capacity).map(|i| make(SlotId(i))).collect();
        Self {
            slots: slots.into_boxed_slice(),
        }
    }

    /// Number of slots (never changes)
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of slots currently active
    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_active()).count()
    }

    /// First free slot in index order, or `None` when every slot is active
    pub fn find_free(&self) -> Option<SlotId> {
        self.slots.iter().position(|s| !s.is_active()).map(SlotId)
    }

    /// First free slot, borrowed for activation
    ///
    /// The caller must activate the returned entity; until then the slot is
    /// still considered free.
    pub fn acquire(&mut self) -> Option<&mut T> {
        self.slots.iter_mut().find(|s| !s.is_active())
    }

    /// Release the slot at `id`; returns whether it was active
    pub fn release(&mut self, id: SlotId) -> bool {
        match self.slots.get_mut(id.0) {
            Some(slot) if slot.is_active() => {
                slot.release();
                true
            }
            _ => false,
        }
    }

    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.slots.get(id.0)
    }

    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.slots.get_mut(id.0)
    }

    /// Every slot in index order, including inactive ones
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.slots.iter()
    }

    /// Every slot in index order, including inactive ones
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.slots.iter_mut()
    }

    /// Active slots only, in index order
    pub fn active(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().filter(|s| s.is_active())
    }
}
