//! Chain records.

use allocator_api2::alloc::Allocator;
use allocator_api2::alloc::Global;
use allocator_api2::boxed::Box;
use core::fmt;

/// One element of a [`List`](crate::List) chain.
///
/// A node holds its data and the owning link to the node after it. Nodes are
/// only ever created by [`List::insert`](crate::List::insert) and only ever
/// handed out by reference.

pub struct Node<T, A: Allocator = Global> {
  pub(crate) data: T,
  pub(crate) next: Link<T, A>,
}

/// The owning reference from one node (or the list head) to the next node.

pub(crate) type Link<T, A> = Option<Box<Node<T, A>, A>>;

impl<T, A: Allocator> Node<T, A> {
  /// The data held by this node.

  #[inline(always)]
  pub fn data(&self) -> &T {
    &self.data
  }

  /// The data held by this node, mutably.

  #[inline(always)]
  pub fn data_mut(&mut self) -> &mut T {
    &mut self.data
  }

  /// The following node, or `None` if this is the last node of the chain.

  #[inline(always)]
  pub fn next(&self) -> Option<&Node<T, A>> {
    self.next.as_deref()
  }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for Node<T, A> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Node").field("data", &self.data).finish_non_exhaustive()
  }
}

/// Releases every node reachable from `link`, returning how many there were.
///
/// Dropping a `Box<Node>` directly would recurse once per node, so the chain
/// is unlinked one node at a time instead.

pub(crate) fn release<T, A: Allocator>(link: Link<T, A>) -> usize {
  let mut link = link;
  let mut n = 0;

  while let Some(mut node) = link {
    link = node.next.take();
    n = n + 1;
  }

  n
}
