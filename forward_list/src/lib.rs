//! A singly-linked list with slot-arena node storage.
//!
//! [`ForwardList`] keeps its nodes in a [`SlotPool`] and wires them together
//! with [`SlotPtr`] handles instead of per-node heap allocations. Every
//! location in a list, including the one in front of the first element, is
//! named by a [`Pos`] value:
//!
//! ```text
//! Pos:  BeforeBegin     Node(a)       Node(b)       Node(c)      End
//!            │             │             │             │          │
//!            ▼             ▼             ▼             ▼          ▼
//!        ┌───────┐     ┌───────┐     ┌───────┐     ┌───────┐
//!        │ first ├────▶│   1   ├────▶│   2   ├────▶│   3   ├────▶ ∅
//!        └───────┘     └───────┘     └───────┘     └───────┘
//! ```
//!
//! `BeforeBegin` plays the role of a sentinel node: its successor link is the
//! list's own head link, so [`insert_after`] and [`erase_after`] handle the
//! front of the list through the same code path as every other splice point,
//! in O(1) time.
//!
//! Because a `Pos` is an index and vacant slots stay tagged, a position whose
//! node has been erased is caught by a runtime check instead of becoming an
//! invalid pointer.
//!
//! [`SlotPool`]: slotpool::SlotPool
//! [`insert_after`]: ForwardList::insert_after
//! [`erase_after`]: ForwardList::erase_after
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::{mem, ops};

use slotpool::SlotPool;

mod cursor;
mod iter;

pub use self::{cursor::*, iter::*};
pub use slotpool::SlotPtr;


/// A singly-linked list with O(1) insertion and removal at any named
/// position.
///
/// See [the crate documentation](index.html) for the layout.
pub struct ForwardList<T> {
    /// Storage for the nodes. Every chain link and every `Pos::Node` handed
    /// out by this list refers to a slot of this pool.
    pool: SlotPool<Node<T>>,
    /// The handle of the node holding the first element. This doubles as the
    /// successor link of the `Pos::BeforeBegin` sentinel position.
    first: Option<SlotPtr>,
    /// Invariant: equals the number of nodes reachable from `first`.
    len: usize,
}

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    next: Option<SlotPtr>,
}

impl<T> ForwardList<T> {
    /// Creates an empty `ForwardList`.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::ForwardList;
    ///
    /// let list: ForwardList<u32> = ForwardList::new();
    /// ```
    #[inline]
    pub const fn new() -> Self {
        ForwardList {
            pool: SlotPool::new(),
            first: None,
            len: 0,
        }
    }

    /// Returns the length of the `ForwardList`.
    ///
    /// This operation should compute in O(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::ForwardList;
    ///
    /// let mut list = ForwardList::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the `ForwardList` is empty.
    ///
    /// This operation should compute in O(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::ForwardList;
    ///
    /// let mut list = ForwardList::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes all elements from the `ForwardList`.
    ///
    /// This operation should compute in O(n) time. The node storage is
    /// retained for reuse by later insertions.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::ForwardList;
    ///
    /// let mut list = ForwardList::new();
    ///
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.front(), None);
    /// ```
    pub fn clear(&mut self) {
        while let Some(_) = self.pop_front() {}
    }

    /// Returns `true` if the `ForwardList` contains an element equal to the
    /// given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::ForwardList;
    ///
    /// let list: ForwardList<u32> = [0, 1, 2].iter().cloned().collect();
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::ForwardList;
    ///
    /// let mut list = ForwardList::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(self.begin())
    }

    /// Provides a mutable reference to the front element, or `None` if the
    /// list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::ForwardList;
    ///
    /// let mut list = ForwardList::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    ///
    /// match list.front_mut() {
    ///     None => {}
    ///     Some(x) => *x = 5,
    /// }
    /// assert_eq!(list.front(), Some(&5));
    /// ```
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(self.begin())
    }

    /// Returns the position in front of the first element.
    ///
    /// The returned position never refers to an element, but it is a valid
    /// splice point for [`insert_after`] and [`erase_after`], which is how
    /// elements are added and removed at the very front of the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::ForwardList;
    ///
    /// let mut list: ForwardList<u32> = [2, 3].iter().cloned().collect();
    ///
    /// list.insert_after(list.before_begin(), 1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    ///
    /// [`insert_after`]: ForwardList::insert_after
    /// [`erase_after`]: ForwardList::erase_after
    #[inline]
    pub fn before_begin(&self) -> Pos {
        Pos::BeforeBegin
    }

    /// Returns the position of the first element, or the end position if the
    /// list is empty.
    #[inline]
    pub fn begin(&self) -> Pos {
        match self.first {
            Some(ptr) => Pos::Node(ptr),
            None => Pos::End,
        }
    }

    /// Returns the past-the-last-element position.
    #[inline]
    pub fn end(&self) -> Pos {
        Pos::End
    }

    /// Returns the position of the successor of `at`, or the end position if
    /// there is none.
    ///
    /// `list.pos_after(list.before_begin())` is equivalent to `list.begin()`.
    ///
    /// # Panics
    ///
    /// Panics if `at` is the end position or refers to an erased node.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::ForwardList;
    ///
    /// let list: ForwardList<u32> = [1, 2].iter().cloned().collect();
    ///
    /// let mut pos = list.before_begin();
    /// pos = list.pos_after(pos);
    /// assert_eq!(pos, list.begin());
    /// assert_eq!(list.get(pos), Some(&1));
    ///
    /// pos = list.pos_after(pos);
    /// assert_eq!(list.get(pos), Some(&2));
    ///
    /// pos = list.pos_after(pos);
    /// assert_eq!(pos, list.end());
    /// ```
    pub fn pos_after(&self, at: Pos) -> Pos {
        match self.link_after(at) {
            Some(ptr) => Pos::Node(ptr),
            None => Pos::End,
        }
    }

    /// Returns a reference to the element at `at`.
    ///
    /// Returns `None` if `at` is the before-begin or end position, or if the
    /// node it refers to has been erased.
    pub fn get(&self, at: Pos) -> Option<&T> {
        match at {
            Pos::Node(ptr) => self.pool.get(ptr).map(|node| &node.value),
            Pos::BeforeBegin | Pos::End => None,
        }
    }

    /// Returns a mutable reference to the element at `at`.
    ///
    /// Returns `None` if `at` is the before-begin or end position, or if the
    /// node it refers to has been erased.
    pub fn get_mut(&mut self, at: Pos) -> Option<&mut T> {
        match at {
            Pos::Node(ptr) => self.pool.get_mut(ptr).map(|node| &mut node.value),
            Pos::BeforeBegin | Pos::End => None,
        }
    }

    /// Adds an element first in the list.
    ///
    /// This operation should compute in O(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::ForwardList;
    ///
    /// let mut list = ForwardList::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.front().unwrap(), &2);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front().unwrap(), &1);
    /// ```
    pub fn push_front(&mut self, value: T) {
        self.insert_after(Pos::BeforeBegin, value);
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    ///
    /// This operation should compute in O(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::ForwardList;
    ///
    /// let mut list = ForwardList::new();
    /// assert_eq!(list.pop_front(), None);
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Some(3));
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        self.unlink_after(Pos::BeforeBegin)
    }

    /// Inserts `value` right after the position `at`, returning the position
    /// of the new element.
    ///
    /// `at` may be [`before_begin`], in which case the element becomes the
    /// new first element. Existing positions are unaffected.
    ///
    /// This operation should compute in O(1) time.
    ///
    /// # Panics
    ///
    /// Panics if `at` is the end position or refers to an erased node.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::ForwardList;
    ///
    /// let mut list: ForwardList<u32> = [1, 2, 3].iter().cloned().collect();
    ///
    /// let second = list.insert_after(list.begin(), 9);
    /// assert_eq!(list[second], 9);
    /// assert_eq!(list.iter().cloned().collect::<Vec<u32>>(), [1, 9, 2, 3]);
    /// ```
    ///
    /// [`before_begin`]: ForwardList::before_begin
    pub fn insert_after(&mut self, at: Pos, value: T) -> Pos {
        let next = self.link_after(at);
        let ptr = self.pool.allocate(Node { value, next });
        *self.link_after_mut(at) = Some(ptr);
        self.len += 1;
        Pos::Node(ptr)
    }

    /// Removes the element right after the position `at`, returning the
    /// position following the removed one.
    ///
    /// When the list is empty there is nothing to remove, and `erase_after`
    /// returns the end position without inspecting `at`. Positions other
    /// than the removed one are unaffected.
    ///
    /// This operation should compute in O(1) time.
    ///
    /// # Panics
    ///
    /// Panics if the list is not empty and `at` is the end position, refers
    /// to an erased node, or has no successor to remove.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::ForwardList;
    ///
    /// let mut list: ForwardList<u32> = [1, 2, 3].iter().cloned().collect();
    ///
    /// list.erase_after(list.before_begin());
    /// assert_eq!(list.iter().cloned().collect::<Vec<u32>>(), [2, 3]);
    ///
    /// let end = list.erase_after(list.begin());
    /// assert_eq!(end, list.end());
    /// assert_eq!(list.iter().cloned().collect::<Vec<u32>>(), [2]);
    /// ```
    pub fn erase_after(&mut self, at: Pos) -> Pos {
        if self.is_empty() {
            return Pos::End;
        }
        if self.unlink_after(at).is_none() {
            panic!("no element follows this position");
        }
        self.pos_after(at)
    }

    /// Exchanges the contents of `self` and `other` in O(1) time, without
    /// copying or moving any element.
    ///
    /// Positions obtained from one list address the same elements through
    /// the other list afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::ForwardList;
    ///
    /// let mut a: ForwardList<u32> = [1, 2].iter().cloned().collect();
    /// let mut b = ForwardList::new();
    ///
    /// a.swap(&mut b);
    /// assert!(a.is_empty());
    /// assert_eq!(b.iter().cloned().collect::<Vec<u32>>(), [1, 2]);
    /// ```
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }
}

// private methods
impl<T> ForwardList<T> {
    /// Reads the successor link controlled by the position `at`.
    fn link_after(&self, at: Pos) -> Option<SlotPtr> {
        match at {
            Pos::BeforeBegin => self.first,
            Pos::Node(ptr) => self.pool[ptr].next,
            Pos::End => panic!("the end position has no successor"),
        }
    }

    /// Resolves the successor link controlled by the position `at` for
    /// relinking.
    ///
    /// `Pos::BeforeBegin` resolves to the list's head link, which is what
    /// makes the mutation operations uniform over every splice point.
    fn link_after_mut(&mut self, at: Pos) -> &mut Option<SlotPtr> {
        match at {
            Pos::BeforeBegin => &mut self.first,
            Pos::Node(ptr) => &mut self.pool[ptr].next,
            Pos::End => panic!("the end position has no successor"),
        }
    }

    /// Unlinks and deallocates the successor of `at`, returning its value,
    /// or `None` if `at` has no successor.
    fn unlink_after(&mut self, at: Pos) -> Option<T> {
        let victim = self.link_after(at)?;
        let node = match self.pool.deallocate(victim) {
            Some(node) => node,
            // chain links always refer to occupied slots
            None => unreachable!(),
        };
        *self.link_after_mut(at) = node.next;
        self.len -= 1;
        Some(node.value)
    }

    /// Returns the position of the last element, or `Pos::BeforeBegin` if
    /// the list is empty. O(n).
    fn last_pos(&self) -> Pos {
        let mut last = Pos::BeforeBegin;
        let mut cur = self.first;
        while let Some(ptr) = cur {
            last = Pos::Node(ptr);
            cur = self.pool[ptr].next;
        }
        last
    }
}

impl<T> Default for ForwardList<T> {
    /// Creates an empty `ForwardList<T>`.
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ops::Index<Pos> for ForwardList<T> {
    type Output = T;

    fn index(&self, index: Pos) -> &Self::Output {
        self.get(index).expect("no element at this position")
    }
}

impl<T> ops::IndexMut<Pos> for ForwardList<T> {
    fn index_mut(&mut self, index: Pos) -> &mut Self::Output {
        self.get_mut(index).expect("no element at this position")
    }
}

impl<T: PartialEq> PartialEq for ForwardList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }

    fn ne(&self, other: &Self) -> bool {
        self.len() != other.len() || self.iter().ne(other)
    }
}

impl<T: Eq> Eq for ForwardList<T> {}

impl<T: PartialOrd> PartialOrd for ForwardList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for ForwardList<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for ForwardList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for ForwardList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<T: Hash> Hash for ForwardList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for elt in self {
            elt.hash(state);
        }
    }
}

// Ensure that `ForwardList` and its read-only iterators are covariant in
// their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: ForwardList<&'static str>) -> ForwardList<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}
