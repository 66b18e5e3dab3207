//! This module is for testing only

use crate::Lifecycle;
use std::cell::RefCell;
use std::rc::Rc;

pub type Flag<T> = Rc<RefCell<T>>;

#[derive(Debug, Default)]
pub struct Counts {
    pub duplicates: usize,
    pub releases: usize,
    /// Values passed to `release`, in call order.
    pub released: Vec<String>,
    /// When set, the next `duplicate` fails and clears the flag.
    pub fail_next: bool,
}

/// `String` lifecycle that records every call into shared counters.
#[derive(Clone, Default)]
pub struct Counting {
    pub counts: Flag<Counts>,
}

impl Counting {
    pub fn new() -> Counting {
        Counting::default()
    }

    pub fn fail_next_duplicate(&self) {
        self.counts.borrow_mut().fail_next = true;
    }

    pub fn duplicates(&self) -> usize {
        self.counts.borrow().duplicates
    }

    pub fn releases(&self) -> usize {
        self.counts.borrow().releases
    }

    pub fn released(&self) -> Vec<String> {
        self.counts.borrow().released.clone()
    }
}

impl Lifecycle<String> for Counting {
    fn duplicate(&self, source: &String) -> Option<String> {
        let mut counts = self.counts.borrow_mut();
        if counts.fail_next {
            counts.fail_next = false;
            return None;
        }
        counts.duplicates += 1;
        Some(source.as_str().to_owned())
    }

    fn release(&self, item: String) {
        let mut counts = self.counts.borrow_mut();
        counts.releases += 1;
        counts.released.push(item);
    }
}

#[test]
fn counting() {
    let lifecycle = Counting::new();
    let copy = lifecycle.duplicate(&"a".to_string()).unwrap();
    lifecycle.fail_next_duplicate();
    assert_eq!(None, lifecycle.duplicate(&"b".to_string()));
    assert_eq!(1, lifecycle.duplicates());
    lifecycle.release(copy);
    assert_eq!(1, lifecycle.releases());
    assert_eq!(vec!["a".to_string()], lifecycle.released());
}
