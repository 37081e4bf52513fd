//! Non-thread safe object pool with tagged vacant slots.
//!
//! `SlotPool` stores objects in a single `Vec` and hands out [`SlotPtr`]
//! index handles in place of references. Handles are stable: growing the pool
//! never moves an occupied slot to a different index. Vacant slots are tagged
//! and chained into a free list, so using a handle whose slot has since been
//! released is caught by a runtime check instead of turning into an invalid
//! pointer.
//!
//! This makes it possible to realize linked data structures within the "safe"
//! Rust, with the pool taking the place of individual heap allocations. Free
//! space is returned to the global heap only when the whole pool is dropped.
use std::{mem, ops};

use try_match::try_match;

/// Non-thread safe object pool with tagged vacant slots.
#[derive(Debug, Clone)]
pub struct SlotPool<T> {
    storage: Vec<Slot<T>>,
    first_vacant: Option<usize>,
}

/// A (potentially dangling) handle for an object in a [`SlotPool`], without
/// information about which specific pool it is associated with.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct SlotPtr(pub usize);

#[derive(Debug, Clone)]
enum Slot<T> {
    Occupied(T),

    /// This slot is vacant. Points to the next vacant slot.
    Vacant(Option<usize>),
}

impl<T> Slot<T> {
    fn as_ref(&self) -> Option<&T> {
        match self {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant(_) => None,
        }
    }
    fn as_mut(&mut self) -> Option<&mut T> {
        match self {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant(_) => None,
        }
    }
}

impl<T> SlotPool<T> {
    /// Construct an empty `SlotPool`.
    pub const fn new() -> Self {
        Self {
            storage: Vec::new(),
            first_vacant: None,
        }
    }

    /// Construct an empty `SlotPool` with `capacity` slots pre-chained into
    /// the free list.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut pool = Self {
            storage: Vec::with_capacity(capacity),
            first_vacant: None,
        };
        if capacity > 0 {
            for i in 0..capacity - 1 {
                pool.storage.push(Slot::Vacant(Some(i + 1)));
            }
            pool.storage.push(Slot::Vacant(None));
            pool.first_vacant = Some(0);
        }
        pool
    }

    /// Make sure at least `additional` more objects can be stored without
    /// reallocating the backing storage.
    pub fn reserve(&mut self, additional: usize) {
        if additional == 0 {
            return;
        }
        let existing_surplus = if self.first_vacant.is_some() {
            1 // at least one
        } else {
            0
        } + self.storage.capacity()
            - self.storage.len();
        if additional > existing_surplus {
            let needed_surplus =
                self.storage.capacity() - self.storage.len() + (additional - existing_surplus);
            self.storage.reserve(needed_surplus);
        }
    }

    /// Store an object, returning a handle for the slot it went into.
    ///
    /// The most recently vacated slot is reused first; the backing storage
    /// grows only when the free list is empty.
    pub fn allocate(&mut self, x: T) -> SlotPtr {
        match self.first_vacant {
            None => {
                self.storage.push(Slot::Occupied(x));
                SlotPtr(self.storage.len() - 1)
            }
            Some(i) => {
                let old = mem::replace(&mut self.storage[i], Slot::Occupied(x));
                // every slot reachable from `first_vacant` is vacant
                self.first_vacant =
                    try_match!(Slot::Vacant(next) = old).unwrap_or_else(|_| unreachable!());
                SlotPtr(i)
            }
        }
    }

    /// Remove and return the object in the slot `ptr` points to, or `None` if
    /// the slot is already vacant or `ptr` is out of range.
    pub fn deallocate(&mut self, ptr: SlotPtr) -> Option<T> {
        let slot = self.storage.get_mut(ptr.0)?;
        if matches!(slot, Slot::Vacant(_)) {
            return None;
        }
        let taken = mem::replace(slot, Slot::Vacant(self.first_vacant));
        let x = try_match!(Slot::Occupied(x) = taken).unwrap_or_else(|_| unreachable!());
        self.first_vacant = Some(ptr.0);
        Some(x)
    }

    /// Get a reference to the object in the slot `ptr` points to, or `None`
    /// if the slot is vacant or `ptr` is out of range.
    pub fn get(&self, ptr: SlotPtr) -> Option<&T> {
        self.storage.get(ptr.0).and_then(Slot::as_ref)
    }

    /// Get a mutable reference to the object in the slot `ptr` points to, or
    /// `None` if the slot is vacant or `ptr` is out of range.
    pub fn get_mut(&mut self, ptr: SlotPtr) -> Option<&mut T> {
        self.storage.get_mut(ptr.0).and_then(Slot::as_mut)
    }
}

impl<T> ops::Index<SlotPtr> for SlotPool<T> {
    type Output = T;

    fn index(&self, index: SlotPtr) -> &Self::Output {
        self.get(index).expect("dangling ptr")
    }
}

impl<T> ops::IndexMut<SlotPtr> for SlotPool<T> {
    fn index_mut(&mut self, index: SlotPtr) -> &mut Self::Output {
        self.get_mut(index).expect("dangling ptr")
    }
}

#[test]
fn test() {
    let mut pool = SlotPool::new();
    let ptr1 = pool.allocate(1);
    let ptr2 = pool.allocate(2);
    assert_eq!(pool[ptr1], 1);
    assert_eq!(pool[ptr2], 2);
}

#[test]
#[should_panic]
fn dangling_ptr() {
    let mut pool = SlotPool::new();
    let ptr = pool.allocate(1);
    pool.deallocate(ptr);
    pool[ptr];
}

#[test]
fn deallocate_returns_object() {
    let mut pool = SlotPool::new();
    let ptr = pool.allocate(42);
    assert_eq!(pool.deallocate(ptr), Some(42));
    assert_eq!(pool.deallocate(ptr), None);
    assert!(pool.get(ptr).is_none());
}

#[test]
fn vacant_slot_is_reused_first() {
    let mut pool = SlotPool::new();
    let ptr1 = pool.allocate(1);
    let ptr2 = pool.allocate(2);
    let ptr3 = pool.allocate(3);
    pool.deallocate(ptr1);
    pool.deallocate(ptr2);
    // the most recently released slot comes back first
    let ptr4 = pool.allocate(4);
    let ptr5 = pool.allocate(5);
    assert_eq!(ptr4, ptr2);
    assert_eq!(ptr5, ptr1);
    assert_eq!(pool[ptr4], 4);
    assert_eq!(pool[ptr5], 5);
    assert_eq!(pool[ptr3], 3);
}

#[test]
fn get_out_of_range() {
    let pool = SlotPool::<u32>::new();
    assert!(pool.get(SlotPtr(0)).is_none());
}

#[test]
fn with_capacity_fills_slots_in_order() {
    let mut pool = SlotPool::with_capacity(3);
    assert_eq!(pool.allocate(10), SlotPtr(0));
    assert_eq!(pool.allocate(20), SlotPtr(1));
    assert_eq!(pool.allocate(30), SlotPtr(2));
    assert_eq!(pool.allocate(40), SlotPtr(3));
}

#[test]
fn reserve_then_allocate() {
    let mut pool = SlotPool::new();
    pool.reserve(4);
    for i in 0..4 {
        assert_eq!(pool.allocate(i), SlotPtr(i));
    }
    pool.reserve(0);
}

#[test]
fn mutate_through_handle() {
    let mut pool = SlotPool::new();
    let ptr = pool.allocate(5);
    *pool.get_mut(ptr).unwrap() += 1;
    pool[ptr] *= 7;
    assert_eq!(pool[ptr], 42);
}
