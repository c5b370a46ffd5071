use cursorlist::Error;
use cursorlist::List;

mod remove;

// Walks `position - 1` links from the head and checks that the node found is
// the cursor's node.

fn check_reachable(list: &List<u32>) {
  let Some(current) = list.current() else { return };
  let mut node = list.get(1).unwrap();
  for _ in 1 .. list.position() {
    node = node.next().unwrap();
  }
  assert!(node.data() == current);
}

fn from_range(n: u32) -> List<u32> {
  let mut list = List::new();
  list.extend(0 .. n);
  list.front();
  list
}

#[test]
fn test_error_is_core_error() {
  fn is_error<E: core::error::Error>(_: &E) {}
  is_error(&Error::CursorDereference);
}
