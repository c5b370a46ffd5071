use super::*;

#[test]
fn test_remove_severs_suffix() {
  let mut list = List::new();
  list.insert("a");
  list.insert("b");
  list.insert("c");
  list.front();
  list.remove(2).unwrap();
  assert!(list.iter().copied().collect::<Vec<_>>() == ["c"]);
  assert!(list.len() == 1);
  assert!(list.position() == 1);
  assert!(list.current() == Some(&"c"));
}

#[test]
fn test_remove_keeps_position() {
  let mut list = List::new();
  list.extend(["a", "b", "c"]);
  list.front();
  list.next().unwrap();
  list.remove(3).unwrap();
  assert!(list.iter().copied().collect::<Vec<_>>() == ["c", "b"]);
  assert!(list.position() == 2);
  assert!(list.current() == Some(&"b"));
}

#[test]
fn test_remove_cursor_node() {
  let mut list = from_range(6);
  list.move_to(5).unwrap();
  list.remove(4).unwrap();
  assert!(list.len() == 3);
  assert!(list.current().is_none());
  assert!(list.position() == 5);
  assert!(list.has_next() == Err(Error::CursorDereference));

  // The next insertion pins the cursor again.
  list.insert(9);
  assert!(list.current() == Some(&9));
  assert!(list.position() == 1);
  check_reachable(&list);
}

#[test]
fn test_remove_pinned_tail() {
  let mut list = List::new();
  list.extend(0 .. 4_u32);
  assert!(list.current() == Some(&0));
  list.remove(4).unwrap();
  assert!(list.current().is_none());
  list.insert(7);
  assert!(list.current() == Some(&7));
}

#[test]
fn test_remove_after_tail_is_noop() {
  let mut list = from_range(3);
  list.remove(4).unwrap();
  assert!(list.len() == 3);
  assert!(list.current() == Some(&2));
}

#[test]
fn test_remove_errors() {
  let mut list = from_range(3);
  assert!(list.remove(0) == Err(Error::InvalidIndex(0)));
  assert!(list.remove(1) == Err(Error::InvalidIndex(1)));
  assert!(list.remove(5) == Err(Error::IndexOutOfRange { index: 5, len: 3 }));
  assert!(list.len() == 3);

  let mut empty = List::<u32>::new();
  assert!(empty.remove(2) == Err(Error::IndexOutOfRange { index: 2, len: 0 }));
}

#[test]
fn test_clear_then_reinsert() {
  let mut list = from_range(4);
  list.move_to(3).unwrap();
  list.clear();
  assert!(list.is_empty());
  assert!(list.len() == 0);
  assert!(list.position() == 1);
  assert!(list.current().is_none());
  assert!(list.get(1).is_err());
  list.insert(1);
  list.insert(2);
  assert!(list.current() == Some(&1));
}
