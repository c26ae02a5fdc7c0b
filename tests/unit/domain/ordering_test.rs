use std::{cmp::Ordering, collections::BTreeMap};

use commons_kit::{CREATION_ORDER, CreationOrder};
use proptest::prelude::*;

use crate::common::{Record, record};

fn any_record() -> impl Strategy<Value = Record> {
    (0i64..50, 0i64..5).prop_map(|(millis, id)| record(millis, id))
}

#[test]
fn ties_on_timestamp_resolve_by_id_regardless_of_argument_order() {
    let lower = record(1_000, 11);
    let higher = record(1_000, 12);
    assert_eq!(CREATION_ORDER.compare(&lower, &higher), Ordering::Less);
    assert_eq!(CREATION_ORDER.compare(&higher, &lower), Ordering::Greater);
}

#[test]
fn sorted_matches_insertion_order_when_ids_increase() {
    let inserted = vec![record(100, 1), record(100, 2), record(101, 3), record(250, 4)];
    let mut shuffled = inserted.clone();
    shuffled.reverse();
    shuffled.swap(0, 2);
    assert_eq!(CREATION_ORDER.sorted(shuffled), inserted);
}

#[test]
fn key_indexes_records_without_collapsing_ties() {
    let records = [record(5, 2), record(5, 1), record(3, 9)];
    let index: BTreeMap<_, _> = records.iter().map(|r| (CreationOrder::key(r), r.label.as_str())).collect();
    let labels: Vec<_> = index.values().copied().collect();
    assert_eq!(labels, vec!["r9@3", "r1@5", "r2@5"]);
}

#[test]
fn works_through_references_and_boxes() {
    let a = Box::new(record(1, 1));
    let b = Box::new(record(2, 1));
    assert_eq!(CREATION_ORDER.compare(&a, &b), Ordering::Less);
    assert_eq!(CREATION_ORDER.compare(&&*a, &&*b), Ordering::Less);
}

proptest! {
    #[test]
    fn sort_result_is_non_decreasing(mut records in prop::collection::vec(any_record(), 0..40)) {
        CREATION_ORDER.sort(&mut records);
        for pair in records.windows(2) {
            prop_assert_ne!(CREATION_ORDER.compare(&pair[0], &pair[1]), Ordering::Greater);
        }
    }

    #[test]
    fn antisymmetric(a in any_record(), b in any_record()) {
        prop_assert_eq!(CREATION_ORDER.compare(&a, &b), CREATION_ORDER.compare(&b, &a).reverse());
    }
}
