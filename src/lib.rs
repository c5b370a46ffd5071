#![doc = include_str!("../README.md")]
#![no_std]
#![cfg_attr(feature = "allocator_api", feature(allocator_api))]

use allocator_api2::alloc::AllocError;
use allocator_api2::alloc::Allocator;
use allocator_api2::alloc::Global;
use allocator_api2::boxed::Box;
use core::fmt;
use node::Link;

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// SUBMODULES                                                                 //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

mod error;
mod iter;
mod node;

pub use error::Error;
pub use iter::Iter;
pub use node::Node;

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// PUBLIC TYPE AND TRAIT DEFINITIONS                                          //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

/// A singly-linked list with an internal forward-only cursor.
///
/// New elements are always prepended, so the most recently inserted element is
/// at the head. The cursor is a `(current, position)` pair: `current` is the
/// node the cursor sits on (if any) and `position` is a 1-based counter that
/// the traversal operations keep in step with it.
///
/// The cursor is pinned by the first insertion into an empty list (or an
/// insertion while the cursor points nowhere) and is not moved by later
/// insertions. Only [`next`](Self::next), [`move_to`](Self::move_to),
/// [`front`](Self::front) and [`end`](Self::end) move it.

pub struct List<T, A: Allocator = Global> {
  head: Link<T, A>,
  len: usize,
  // Offset of the cursor's node from `head`. Kept as an offset rather than a
  // pointer, so every insertion shifts it by one.
  current: Option<usize>,
  position: usize,
  allocator: A,
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// List                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl<T> List<T, Global> {
  /// Creates an empty list backed by the global allocator.

  pub fn new() -> Self {
    Self::new_in(Global)
  }
}

impl<T, A: Allocator> List<T, A> {
  /// Creates an empty list whose nodes are allocated with `allocator`.

  pub fn new_in(allocator: A) -> Self {
    Self {
      head: None,
      len: 0,
      current: None,
      position: 1,
      allocator,
    }
  }

  /// A reference to the allocator backing the nodes.

  pub fn allocator(&self) -> &A {
    &self.allocator
  }

  /// The number of nodes reachable from the head.

  #[inline(always)]
  pub fn len(&self) -> usize {
    self.len
  }

  /// Whether the chain is empty.

  #[inline(always)]
  pub fn is_empty(&self) -> bool {
    self.head.is_none()
  }

  /// The 1-based position of the cursor.

  #[inline(always)]
  pub fn position(&self) -> usize {
    self.position
  }

  /// The data at the cursor, or `None` if the cursor does not point at a
  /// node.

  pub fn current(&self) -> Option<&T> {
    let node = self.node(self.current?)?;
    Some(&node.data)
  }

  /// The data at the cursor, mutably.

  pub fn current_mut(&mut self) -> Option<&mut T> {
    let node = self.node_mut(self.current?)?;
    Some(&mut node.data)
  }

  /// Iterates over the data of the chain from head to tail.

  pub fn iter(&self) -> Iter<'_, T, A> {
    Iter { next: self.head.as_deref(), len: self.len }
  }

  /// Returns the node at the 1-based `index`, walking from the head.
  ///
  /// # Errors
  ///
  /// [`Error::InvalidIndex`] if `index` is zero, [`Error::IndexOutOfRange`]
  /// if the chain has fewer than `index` nodes.

  pub fn get(&self, index: usize) -> Result<&Node<T, A>, Error> {
    if index == 0 {
      return Err(Error::InvalidIndex(index));
    }

    let len = self.len;

    self.node(index - 1).ok_or(Error::IndexOutOfRange { index, len })
  }

  /// Returns the node at the 1-based `index`, mutably.
  ///
  /// # Errors
  ///
  /// Same as [`get`](Self::get).

  pub fn get_mut(&mut self, index: usize) -> Result<&mut Node<T, A>, Error> {
    if index == 0 {
      return Err(Error::InvalidIndex(index));
    }

    let len = self.len;

    self.node_mut(index - 1).ok_or(Error::IndexOutOfRange { index, len })
  }

  /// Severs the chain in front of the node at the 1-based `index`, releasing
  /// that node and everything after it. The cursor position is unchanged.
  ///
  /// If the cursor's node is released, the cursor no longer points anywhere
  /// and the next insertion pins it again. Severing right after the last node
  /// is allowed and releases nothing.
  ///
  /// # Errors
  ///
  /// [`Error::InvalidIndex`] if `index` is less than 2, since the head has no
  /// predecessor to sever from. [`Error::IndexOutOfRange`] if there is no node
  /// at `index - 1`.

  pub fn remove(&mut self, index: usize) -> Result<(), Error> {
    if index < 2 {
      return Err(Error::InvalidIndex(index));
    }

    let len = self.len;

    let Some(node) = self.node_mut(index - 2) else {
      return Err(Error::IndexOutOfRange { index, len });
    };

    let suffix = node.next.take();
    let n = node::release(suffix);

    self.len = index - 1;

    if self.current.is_some_and(|c| c >= index - 1) {
      self.current = None;
    }

    log::debug!("severed {} node(s) after index {}", n, index - 1);

    Ok(())
  }

  /// Releases the whole chain and resets the cursor to position 1, pointing
  /// nowhere.

  pub fn clear(&mut self) {
    let n = node::release(self.head.take());

    self.len = 0;
    self.current = None;
    self.position = 1;

    log::debug!("cleared {} node(s)", n);
  }

  /// Steps the cursor to the following node.
  ///
  /// If the cursor was on the last node it is left pointing nowhere and the
  /// position is not incremented.
  ///
  /// # Errors
  ///
  /// [`Error::CursorDereference`] if the cursor already points nowhere.

  pub fn next(&mut self) -> Result<(), Error> {
    let Some(c) = self.current else {
      return Err(Error::CursorDereference);
    };

    if c + 1 < self.len {
      self.current = Some(c + 1);
      self.position = self.position + 1;
    } else {
      self.current = None;
    }

    Ok(())
  }

  /// Whether the cursor's node has a following node.
  ///
  /// # Errors
  ///
  /// [`Error::CursorDereference`] if the cursor points nowhere.

  pub fn has_next(&self) -> Result<bool, Error> {
    let Some(c) = self.current else {
      return Err(Error::CursorDereference);
    };

    Ok(c + 1 < self.len)
  }

  /// Moves the cursor to the 1-based `index`.
  ///
  /// Moving to `1` or to an index behind the cursor restarts from the head;
  /// otherwise the cursor walks forward from where it is. Moving to the
  /// current position is a no-op.
  ///
  /// # Errors
  ///
  /// [`Error::InvalidIndex`] if `index` is zero. [`Error::CursorDereference`]
  /// if the walk would need to step from a cursor that points nowhere or past
  /// the last node. The cursor is untouched on failure.

  pub fn move_to(&mut self, index: usize) -> Result<(), Error> {
    if index == 0 {
      return Err(Error::InvalidIndex(index));
    }

    if index == 1 {
      self.hard_reset();
      return Ok(());
    }

    let (start, from) =
      if index < self.position {
        (Some(0), 1)
      } else {
        (self.current, self.position)
      };

    let steps = index - from;

    if steps == 0 {
      return Ok(());
    }

    let Some(start) = start else {
      return Err(Error::CursorDereference);
    };

    // `start < len` whenever the cursor points at a node, and the reset path
    // starts from 0, so the subtraction cannot wrap.

    if steps >= self.len - start {
      return Err(Error::CursorDereference);
    }

    self.current = Some(start + steps);
    self.position = index;

    Ok(())
  }

  /// Moves the cursor to the head, at position 1.

  pub fn front(&mut self) {
    self.hard_reset()
  }

  /// Steps the cursor forward until it sits on the last node.
  ///
  /// # Errors
  ///
  /// [`Error::CursorDereference`] if the cursor points nowhere.

  pub fn end(&mut self) -> Result<(), Error> {
    while self.has_next()? {
      self.next()?;
    }

    Ok(())
  }

  #[inline(always)]
  fn hard_reset(&mut self) {
    self.current = if self.head.is_some() { Some(0) } else { None };
    self.position = 1;
  }

  fn node(&self, offset: usize) -> Option<&Node<T, A>> {
    let mut tmp = self.head.as_deref();

    for _ in 0 .. offset {
      tmp = tmp?.next.as_deref();
    }

    tmp
  }

  fn node_mut(&mut self, offset: usize) -> Option<&mut Node<T, A>> {
    let mut tmp = self.head.as_deref_mut();

    for _ in 0 .. offset {
      tmp = tmp?.next.as_deref_mut();
    }

    tmp
  }
}

impl<T, A: Allocator + Clone> List<T, A> {
  /// Prepends `data` as the new head.
  ///
  /// If the cursor points nowhere, it is pinned to the new node at position 1.
  /// Otherwise the cursor stays on the node it was on.
  ///
  /// # Panics
  ///
  /// Aborts on failure to allocate memory, like any other `Box` allocation.

  pub fn insert(&mut self, data: T) {
    let node = Box::new_in(Node { data, next: None }, self.allocator.clone());
    self.link_head(node)
  }

  /// Prepends `data` as the new head.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory. The list is left
  /// unchanged and `data` is dropped.

  pub fn try_insert(&mut self, data: T) -> Result<(), AllocError> {
    let node = Box::try_new_in(Node { data, next: None }, self.allocator.clone())?;
    self.link_head(node);
    Ok(())
  }

  fn link_head(&mut self, node: Box<Node<T, A>, A>) {
    let mut node = node;

    node.next = self.head.take();

    self.head = Some(node);
    self.len = self.len + 1;
    self.current =
      match self.current {
        None => {
          self.position = 1;
          Some(0)
        }
        Some(c) =>
          Some(c + 1),
      };

    log::trace!("inserted head, len = {}", self.len);
  }
}

impl<T, A: Allocator> Drop for List<T, A> {
  fn drop(&mut self) {
    let _ = node::release(self.head.take());
  }
}

impl<T> Default for List<T, Global> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for List<T, A> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("List")
      .field("chain", &self.iter())
      .field("position", &self.position)
      .field("current", &self.current())
      .finish()
  }
}

impl<'a, T, A: Allocator> IntoIterator for &'a List<T, A> {
  type Item = &'a T;
  type IntoIter = Iter<'a, T, A>;

  fn into_iter(self) -> Iter<'a, T, A> {
    self.iter()
  }
}

impl<T, A: Allocator + Clone> Extend<T> for List<T, A> {
  fn extend<I>(&mut self, iter: I)
  where
    I: IntoIterator<Item = T>
  {
    for x in iter {
      self.insert(x);
    }
  }
}

impl<T> FromIterator<T> for List<T, Global> {
  fn from_iter<I>(iter: I) -> Self
  where
    I: IntoIterator<Item = T>
  {
    let mut list = Self::new();
    list.extend(iter);
    list
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// TESTS                                                                      //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////
