//! Walks through every `List` operation and prints a colored pass/fail line per check.
//!
//! Run with `cargo run --example harness`; set `RUST_LOG=linguine=debug` to see the library's logs.

use colored::Colorize;
use linguine::{List, ListError};
use std::fmt::Display;
use std::process::ExitCode;

#[derive(Default)]
struct Harness {
    passed: usize,
    failed: usize,
}

impl Harness {
    fn section(&self, title: &str) {
        println!();
        println!("{}", format!("Running {title}").blue());
    }

    fn check(&mut self, name: &str, ok: bool, shown: impl Display) {
        if ok {
            self.passed += 1;
            println!("{}: {shown}", format!("{name} passed").green());
        } else {
            self.failed += 1;
            println!("{}: got {shown}", format!("{name} failed").red());
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let mut h = Harness::default();

    h.section("new()");
    let mut list: List<i32> = List::new();
    h.check("new()", list.is_empty(), &list);

    h.section("add(1) and len()");
    list.add(1);
    h.check("add(1) and len()", list.len() == 1, &list);

    h.section("add_all(&[2, 3])");
    list.add_all(&[2, 3]);
    h.check("add_all(&[2, 3])", list.len() == 3, &list);

    h.section("get(0)");
    h.check("get(0)", list.get(0) == Ok(&1), &list);

    h.section("remove(1)");
    let removed = list.remove(1);
    h.check("remove(1)", removed == Ok(2), &list);
    h.check("remove(1) len check", list.len() == 2, &list);

    h.section("clear()");
    list.clear();
    h.check("clear()", list.is_empty(), &list);

    h.section("contains(1) and contains(2)");
    list.add(1);
    h.check("contains(1)", list.contains(&1), &list);
    h.check("contains(2)", !list.contains(&2), &list);

    h.section("is_empty()");
    h.check("is_empty() on non-empty list", !list.is_empty(), &list);
    list.clear();
    h.check("is_empty() on empty list", list.is_empty(), &list);

    h.section("head(), tail(), pop() and dequeue() on an empty list");
    h.check(
        "head() on empty list",
        list.head() == Err(ListError::EmptyCollection),
        &list,
    );
    h.check(
        "tail() on empty list",
        list.tail() == Err(ListError::EmptyCollection),
        &list,
    );
    h.check(
        "pop() on empty list",
        list.pop() == Err(ListError::EmptyCollection),
        &list,
    );
    h.check(
        "dequeue() on empty list",
        list.dequeue() == Err(ListError::EmptyCollection),
        &list,
    );

    h.section("head() and tail()");
    list.add_all(&[1, 2, 3]);
    h.check("head()", list.head() == Ok(&1), &list);
    h.check("tail()", list.tail() == Ok(&3), &list);

    h.section("pop() and dequeue()");
    let popped = list.pop();
    h.check("pop()", popped == Ok(1) && list.head() == Ok(&2), &list);
    let dequeued = list.dequeue();
    h.check("dequeue()", dequeued == Ok(3) && list.tail() == Ok(&2), &list);

    h.section("to_string() and to_string_with_separator()");
    list.clear();
    list.add_all(&[1, 2, 3]);
    h.check("to_string()", list.to_string() == "[1, 2, 3]", &list);
    let joined = list.to_string_with_separator("; ");
    h.check("to_string_with_separator(\"; \")", joined == "1; 2; 3", &joined);

    h.section("set(1, 5)");
    let set = list.set(1, 5);
    h.check("set(1, 5)", set.is_ok() && list.get(1) == Ok(&5), &list);
    let out_of_range = list.set(3, 0);
    h.check(
        "set(3, 0) out of range",
        out_of_range == Err(ListError::IndexOutOfBounds { index: 3, len: 3 }),
        &list,
    );

    h.section("swap(0, 2)");
    let swapped = list.swap(0, 2);
    h.check(
        "swap(0, 2)",
        swapped.is_ok() && list.get(0) == Ok(&3) && list.get(2) == Ok(&1),
        &list,
    );

    h.section("reverse()");
    list.reverse();
    h.check(
        "reverse()",
        list.get(0) == Ok(&1) && list.get(2) == Ok(&3),
        &list,
    );

    h.section("sort()");
    list.sort(|a, b| a < b);
    h.check("sort()", list.as_slice() == [1, 3, 5], &list);

    h.section("append(&another)");
    let another = List::from([6, 7]);
    list.append(&another);
    h.check(
        "append(&another)",
        list.len() == 5 && list.get(4) == Ok(&7),
        &list,
    );

    h.section("union()");
    let list1 = List::from([1, 2, 3]);
    let list2 = List::from([3, 4, 5]);
    let union = list1.union(&list2);
    h.check("union()", union.as_slice() == [1, 2, 3, 3, 4, 5], &union);

    h.section("intersection()");
    let intersection = list1.intersection(&list2);
    h.check("intersection()", intersection.as_slice() == [3], &intersection);

    println!();
    let summary = format!("{} passed, {} failed", h.passed, h.failed);
    if h.failed == 0 {
        println!("{}", summary.green());
        ExitCode::SUCCESS
    } else {
        println!("{}", summary.red());
        ExitCode::FAILURE
    }
}
