//! Replays a short session against a list, printing the chain and the cursor
//! after each step.
//!
//!   RUST_LOG=trace cargo run --example trace

use cursorlist::List;
use cursorlist::Error;

fn show(step: &str, list: &List<&str>) {
  print!("{:14} {:?}\n", step, list);
}

fn main() -> Result<(), Error> {
  env_logger::init();

  let mut list = List::new();

  list.insert("a");
  show("insert a", &list);
  list.insert("b");
  show("insert b", &list);
  list.insert("c");
  show("insert c", &list);

  list.front();
  show("front", &list);
  list.next()?;
  show("next", &list);

  list.remove(3)?;
  show("remove 3", &list);

  list.clear();
  show("clear", &list);

  list.insert("d");
  list.insert("e");
  show("insert d, e", &list);

  match list.move_to(2) {
    Ok(()) => show("move_to 2", &list),
    Err(e) => print!("{:14} {}\n", "move_to 2", e),
  }

  list.front();
  show("front", &list);
  list.move_to(2)?;
  show("move_to 2", &list);
  list.front();
  show("front", &list);
  list.end()?;
  show("end", &list);

  Ok(())
}
