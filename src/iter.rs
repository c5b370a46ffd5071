//! Borrowing iteration over a chain.

use allocator_api2::alloc::Allocator;
use allocator_api2::alloc::Global;
use core::fmt;
use core::iter::FusedIterator;
use crate::node::Node;

/// A borrowing iterator over the data of a [`List`](crate::List), from head
/// to tail.
///
/// Created by [`List::iter`](crate::List::iter).

pub struct Iter<'a, T, A: Allocator = Global> {
  pub(crate) next: Option<&'a Node<T, A>>,
  pub(crate) len: usize,
}

impl<'a, T, A: Allocator> Iterator for Iter<'a, T, A> {
  type Item = &'a T;

  #[inline]
  fn next(&mut self) -> Option<&'a T> {
    let node = self.next?;
    self.next = node.next.as_deref();
    self.len = self.len - 1;
    Some(&node.data)
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.len, Some(self.len))
  }
}

impl<'a, T, A: Allocator> ExactSizeIterator for Iter<'a, T, A> { }

impl<'a, T, A: Allocator> FusedIterator for Iter<'a, T, A> { }

// NB: Not derived, as that would require `T: Clone`.

impl<'a, T, A: Allocator> Clone for Iter<'a, T, A> {
  fn clone(&self) -> Self {
    Self { next: self.next, len: self.len }
  }
}

impl<'a, T: fmt::Debug, A: Allocator> fmt::Debug for Iter<'a, T, A> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.clone()).finish()
  }
}
