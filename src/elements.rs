//! Ten-element table run through the whole array surface.

use crate::{Lifecycle, ManagedArray};
use std::cell::Cell;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Element {
    number: i32,
    name: String,
    value: String,
}

const TABLE: [(&str, &str); 10] = [
    ("H", "Hydrogen"),
    ("He", "Helium"),
    ("Li", "Lithium"),
    ("Be", "Beryllium"),
    ("B", "Boron"),
    ("C", "Carbon"),
    ("N", "Nitrogen"),
    ("O", "Oxygen"),
    ("Fl", "Fluorine"),
    ("Ne", "Neon"),
];

fn table() -> Vec<Element> {
    TABLE.iter()
        .enumerate()
        .map(|(i, (name, value))| Element {
            number: i as i32 + 1,
            name: name.to_string(),
            value: value.to_string(),
        })
        .collect()
}

fn by_name_value_number(a: &Element, b: &Element) -> Ordering {
    a.name.cmp(&b.name)
        .then_with(|| a.value.cmp(&b.value))
        .then_with(|| a.number.cmp(&b.number))
}

fn line(e: &Element) -> String {
    format!("{}: '{}' = '{}'", e.number, e.name, e.value)
}

#[test]
fn element_table_scenario() {
    let live = Cell::new(0i32);
    let mut array = ManagedArray::with_callbacks(
        4,
        |e: &Element| {
            live.set(live.get() + 1);
            Some(Element { number: e.number, name: e.name.clone(), value: e.value.clone() })
        },
        |_e: Element| live.set(live.get() - 1),
    ).unwrap();

    let elements = table();
    for e in &elements {
        array.add(e).unwrap();
    }
    assert_eq!(10, array.len());
    assert_eq!(10, live.get());

    let mut printed = Vec::new();
    array.apply(0, 0, |e| printed.push(line(e)));
    assert_eq!(elements.iter().map(line).collect::<Vec<_>>(), printed);

    let copy = array.item_copy(3).unwrap();
    assert_eq!(("Be", "Beryllium"), (copy.name.as_str(), copy.value.as_str()));
    array.lifecycle().release(copy);

    let borrowed = array.item(4).unwrap();
    assert_eq!(("B", "Boron"), (borrowed.name.as_str(), borrowed.value.as_str()));

    array.base().sort_by(by_name_value_number);

    let mut sorted = elements.clone();
    sorted.sort_by(by_name_value_number);
    assert_eq!(sorted.as_slice(), array.as_slice());

    let mut counter = 0;
    let mut visited = Vec::new();
    array.apply_with_context(2, array.len() - 2, |e, counter: &mut i32| {
        *counter += 1;
        visited.push(e.number);
    }, &mut counter);
    assert_eq!(6, counter);
    assert_eq!(sorted[2..8].iter().map(|e| e.number).collect::<Vec<_>>(), visited);
    assert_eq!(vec![6, 9, 1, 2, 3, 7], visited);

    for index in 0..array.len() {
        let mut copy = array.item_copy(index).unwrap();
        assert_eq!(&sorted[index], &copy);
        copy.value.push_str("-changed");
        assert_eq!(sorted[index].value, array.item(index).unwrap().value);
        array.lifecycle().release(copy);
    }

    array.destroy();
    assert_eq!(0, live.get(), "every copy has been released");
}
