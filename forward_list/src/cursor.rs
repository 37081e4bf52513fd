//! Positions and cursors over a `ForwardList`.
use std::{fmt, ptr};

use slotpool::SlotPtr;

use crate::ForwardList;

/// A position in a [`ForwardList`].
///
/// A `Pos` is detached from the list it came from: it does not borrow the
/// list, holding one never keeps an element alive, and it stays meaningful
/// across unrelated insertions and removals. Using a position whose node has
/// been erased is detected by the accessors for as long as the node's slot
/// stays vacant; once the slot is reused by a later insertion, the position
/// addresses the newer element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pos {
    /// The position in front of the first element.
    BeforeBegin,
    /// The position of the element stored in the given pool slot.
    Node(SlotPtr),
    /// The position past the last element.
    End,
}

/// A read-only cursor over a [`ForwardList`]: the list reference paired with
/// a [`Pos`].
///
/// This `struct` is created by the [`cursor`] and [`cursor_front`] methods
/// on [`ForwardList`], and by [`CursorMut::as_cursor`].
///
/// [`cursor`]: ForwardList::cursor
/// [`cursor_front`]: ForwardList::cursor_front
pub struct Cursor<'a, T: 'a> {
    list: &'a ForwardList<T>,
    pos: Pos,
}

/// A cursor over a [`ForwardList`] with edit capability.
///
/// This `struct` is created by the [`cursor_mut`] and [`cursor_front_mut`]
/// methods on [`ForwardList`]. A `CursorMut` can be reborrowed as a
/// read-only [`Cursor`] with [`as_cursor`]; there is no conversion in the
/// other direction.
///
/// [`cursor_mut`]: ForwardList::cursor_mut
/// [`cursor_front_mut`]: ForwardList::cursor_front_mut
/// [`as_cursor`]: CursorMut::as_cursor
pub struct CursorMut<'a, T: 'a> {
    list: &'a mut ForwardList<T>,
    pos: Pos,
}

impl<T> ForwardList<T> {
    /// Returns a read-only cursor at the position `at`.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::ForwardList;
    ///
    /// let list: ForwardList<u32> = [10, 20].iter().cloned().collect();
    ///
    /// let mut cursor = list.cursor(list.before_begin());
    /// assert_eq!(cursor.value(), None);
    /// cursor.move_next();
    /// assert_eq!(cursor.value(), Some(&10));
    /// cursor.move_next();
    /// assert_eq!(cursor.value(), Some(&20));
    /// cursor.move_next();
    /// assert_eq!(cursor.pos(), list.end());
    /// ```
    #[inline]
    pub fn cursor(&self, at: Pos) -> Cursor<'_, T> {
        Cursor { list: self, pos: at }
    }

    /// Returns an editing cursor at the position `at`.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::ForwardList;
    ///
    /// let mut list: ForwardList<u32> = [1, 2, 4].iter().cloned().collect();
    ///
    /// let mut cursor = list.cursor_mut(list.begin());
    /// cursor.move_next();
    /// cursor.insert_after(3);
    /// assert_eq!(list.iter().cloned().collect::<Vec<u32>>(), [1, 2, 3, 4]);
    /// ```
    #[inline]
    pub fn cursor_mut(&mut self, at: Pos) -> CursorMut<'_, T> {
        CursorMut { list: self, pos: at }
    }

    /// Returns a read-only cursor at the first element.
    #[inline]
    pub fn cursor_front(&self) -> Cursor<'_, T> {
        self.cursor(self.begin())
    }

    /// Returns an editing cursor at the first element.
    #[inline]
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T> {
        self.cursor_mut(self.begin())
    }
}

impl<'a, T> Cursor<'a, T> {
    /// Returns the position under the cursor.
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// Moves the cursor to the next position.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end of the list or on an erased node.
    pub fn move_next(&mut self) {
        self.pos = self.list.pos_after(self.pos);
    }

    /// Returns a reference to the element under the cursor, or `None` if the
    /// cursor is at the before-begin or end position.
    pub fn value(&self) -> Option<&'a T> {
        self.list.get(self.pos)
    }
}

impl<'a, T> CursorMut<'a, T> {
    /// Returns the position under the cursor.
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// Moves the cursor to the next position.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end of the list or on an erased node.
    pub fn move_next(&mut self) {
        self.pos = self.list.pos_after(self.pos);
    }

    /// Returns a mutable reference to the element under the cursor, or
    /// `None` if the cursor is at the before-begin or end position.
    pub fn value(&mut self) -> Option<&mut T> {
        self.list.get_mut(self.pos)
    }

    /// Inserts `value` right after the cursor, returning the position of the
    /// new element. The cursor does not move.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end of the list or on an erased node.
    pub fn insert_after(&mut self, value: T) -> Pos {
        self.list.insert_after(self.pos, value)
    }

    /// Removes the element right after the cursor and returns its value, or
    /// `None` if no element follows the cursor. The cursor does not move.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is on an erased node.
    pub fn remove_next(&mut self) -> Option<T> {
        match self.pos {
            Pos::End => None,
            at => self.list.unlink_after(at),
        }
    }

    /// Reborrows the cursor as a read-only [`Cursor`] at the same position.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::ForwardList;
    ///
    /// let mut list: ForwardList<u32> = [5].iter().cloned().collect();
    ///
    /// let mut cursor = list.cursor_front_mut();
    /// if let Some(x) = cursor.value() {
    ///     *x += 1;
    /// }
    /// assert_eq!(cursor.as_cursor().value(), Some(&6));
    /// ```
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor {
            list: self.list,
            pos: self.pos,
        }
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        Cursor { ..*self }
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> PartialEq for Cursor<'_, T> {
    /// Two cursors are equal when they were borrowed from the same list and
    /// sit at equal positions.
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.list, other.list) && self.pos == other.pos
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor").field(&self.pos).finish()
    }
}

impl<T: fmt::Debug> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CursorMut").field(&self.pos).finish()
    }
}
