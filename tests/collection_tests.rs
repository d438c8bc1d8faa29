//! Integration tests for the collection utilities.
//!
//! Covers conditional insertion into maps and queues, bulk append, indexed
//! iteration, first/last lookup, snapshots and emptiness checks through the
//! public API and prelude.

#![cfg(feature = "collections")]

use extkit::collections::{add_range, first_where, for_indexed, is_empty, last_where, to_array};
use extkit::prelude::*;
use rstest::rstest;
use std::collections::{BTreeMap, BTreeSet, HashMap, LinkedList, VecDeque};

// =============================================================================
// Test fixtures
// =============================================================================

#[derive(Debug, Clone)]
struct Shipment {
    code: u32,
    destinations: Vec<&'static str>,
}

impl PartialEq for Shipment {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

fn shipments() -> VecDeque<Shipment> {
    VecDeque::from([
        Shipment { code: 239_632, destinations: vec!["a", "d", "a"] },
        Shipment { code: 12_324, destinations: vec!["b", "e", "z"] },
        Shipment { code: 683_264_815, destinations: vec!["i", "d", "k", "f", "a"] },
    ])
}

// =============================================================================
// AddIfNotContains
// =============================================================================

#[rstest]
fn add_if_not_contains_reports_insertion() {
    let mut prices: HashMap<i32, &str> = HashMap::new();
    assert!(prices.add_if_not_contains(10, "dollars"));
    assert!(!prices.add_if_not_contains(10, "money"));
    assert_eq!(prices.len(), 1);
    assert_eq!(prices[&10], "dollars");
}

#[rstest]
fn add_if_not_contains_works_for_ordered_maps() {
    let mut ordered = BTreeMap::from([("b", 2)]);
    assert!(ordered.add_if_not_contains("a", 1));
    assert!(!ordered.add_if_not_contains("b", 20));
    assert_eq!(ordered.into_iter().collect::<Vec<_>>(), vec![("a", 1), ("b", 2)]);
}

// =============================================================================
// AddRange
// =============================================================================

#[rstest]
fn add_range_appends_in_order() {
    let mut amounts = vec![1.5_f64];
    amounts.add_range([2.0, 20.0, 80.0, 40.0]);
    assert_eq!(amounts, vec![1.5, 2.0, 20.0, 80.0, 40.0]);
}

#[rstest]
fn add_range_from_another_collection() {
    let mut collection: VecDeque<String> = VecDeque::from(["collection".to_owned(), "with".to_owned()]);
    let extra = vec!["strings".to_owned()];
    collection.add_range_cloned(&extra);
    assert_eq!(collection.back(), extra.last());
    assert_eq!(extra.len(), 1);
}

#[rstest]
fn add_range_from_iterator() {
    let mut squares = Vec::new();
    add_range(&mut squares, (1..=4).map(|value| value * value));
    assert_eq!(squares, vec![1, 4, 9, 16]);
}

// =============================================================================
// EnqueueIfNotContains
// =============================================================================

#[rstest]
#[case(10, false, 3)]
#[case(20, true, 4)]
fn enqueue_value_types(#[case] item: i32, #[case] enqueued: bool, #[case] length: usize) {
    let mut queue = VecDeque::from([2, 3, 10]);
    assert_eq!(queue.enqueue_if_not_contains(item), enqueued);
    assert_eq!(queue.len(), length);
}

#[rstest]
#[case("super", 3)]
#[case("now", 4)]
fn enqueue_strings(#[case] item: &str, #[case] length: usize) {
    let mut queue = VecDeque::from(["simple".to_owned(), "super".to_owned(), "test".to_owned()]);
    queue.enqueue_if_not_contains(item.to_owned());
    assert_eq!(queue.len(), length);
    assert_eq!(queue.back().map(String::as_str), Some(if length == 4 { item } else { "test" }));
}

#[rstest]
fn enqueue_uses_user_equality() {
    let mut queue = shipments();
    let duplicate = Shipment { code: 12_324, destinations: vec![] };
    assert!(!queue.enqueue_if_not_contains(duplicate));
    assert_eq!(queue.len(), 3);
    assert_eq!(queue[1].destinations, vec!["b", "e", "z"]);
}

// =============================================================================
// For
// =============================================================================

#[rstest]
fn for_indexed_on_strings() {
    let mut strings: Vec<String> = ["this", "is", "a", "simple", "test", "method"]
        .into_iter()
        .map(str::to_owned)
        .collect();

    strings.for_indexed(|list, index, text| {
        if index == 0 {
            list[index] = "This ".to_owned();
        } else if index == list.len() - 1 {
            list[index] = format!("{text}!");
        } else {
            list[index] = format!("{text} ");
        }
    });

    assert_eq!(strings.concat(), "This is a simple test method!");
}

#[rstest]
fn for_indexed_on_integers() {
    let mut integers = vec![1, 2, 3, 5, 8];
    for_indexed(&mut integers, |list, index, value| list[index] = value + i32::try_from(index).unwrap());
    assert_eq!(integers, vec![1, 3, 5, 8, 12]);
}

#[rstest]
fn for_indexed_on_a_queue_that_shrinks() {
    let mut queue = VecDeque::from([1, 2, 3, 4]);
    let mut visited = Vec::new();
    queue.for_indexed(|pending, index, value| {
        visited.push((index, value));
        pending.pop_back();
    });
    assert_eq!(visited, vec![(0, 1), (1, 2)]);
    assert_eq!(queue, VecDeque::from([1, 2]));
}

// =============================================================================
// First / Last
// =============================================================================

#[rstest]
fn first_and_last_of_words() {
    let words = ["Buzz", "Light", "Year"];
    assert_eq!(*words.try_first().unwrap(), "Buzz");
    assert_eq!(*words.try_last().unwrap(), "Year");
}

#[rstest]
fn predicate_lookup_scans_from_each_end() {
    let words = ["Buzz", "Light", "Year", "Is", "Yearning"];
    assert_eq!(*first_where(&words, |word| word.starts_with('Y')).unwrap(), "Year");
    assert_eq!(*last_where(&words, |word| word.starts_with('Y')).unwrap(), "Yearning");
}

#[rstest]
fn lookup_errors_are_classified() {
    let empty: [&str; 0] = [];
    assert_eq!(empty.try_first().unwrap_err().kind(), ErrorKind::InvalidOperation);
    assert_eq!(empty.last_where(|_| true).unwrap_err(), Error::EmptyCollection);

    let words = ["Buzz", "Light"];
    let error = words.first_where(|word| word.is_empty()).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::NoMatch);
}

// =============================================================================
// ToArray
// =============================================================================

#[rstest]
fn to_array_snapshot_is_independent() {
    let mut source = vec!["one".to_owned(), "two".to_owned()];
    let snapshot = to_array(&source);
    source.push("three".to_owned());
    source[0].push('!');
    assert_eq!(&*snapshot, ["one", "two"]);
    assert_eq!(source.to_array().len(), 3);
}

// =============================================================================
// IsEmpty
// =============================================================================

#[rstest]
fn is_empty_across_containers() {
    assert!(is_empty(&Vec::<u8>::new()));
    assert!(is_empty(&LinkedList::<u8>::new()));
    assert!(is_empty(&BTreeSet::<u8>::new()));
    assert!(is_empty(""));
    assert!(!is_empty(&[0_u8; 3]));
    assert!(!is_empty(&shipments()));
    assert!(!is_empty(&String::from("builder")));
}
