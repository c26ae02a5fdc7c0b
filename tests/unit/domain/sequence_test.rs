use std::{collections::HashSet, sync::Arc, thread};

use commons_kit::{SequenceGenerator, next_sequence_number, sequence};

#[test]
fn injected_generators_are_independent() {
    let orders = SequenceGenerator::new();
    let invoices = SequenceGenerator::starting_at(1_000);

    assert_eq!(orders.next_sequence_number(), 0);
    assert_eq!(invoices.next_sequence_number(), 1_000);
    assert_eq!(orders.next_sequence_number(), 1);
}

#[test]
fn shared_generator_across_spawned_threads() {
    let sequence = Arc::new(SequenceGenerator::new());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let sequence = Arc::clone(&sequence);
            thread::spawn(move || (0..500).map(|_| sequence.next_sequence_number()).collect::<Vec<_>>())
        })
        .collect();

    let values: Vec<u64> = handles.into_iter().flat_map(|h| h.join().unwrap()).collect();
    let unique: HashSet<_> = values.iter().copied().collect();
    assert_eq!(unique.len(), values.len());
    assert_eq!(values.iter().min(), Some(&0));
    assert_eq!(sequence.peek(), 2_000);
}

#[test]
fn process_wide_generator_hands_out_distinct_values() {
    let values: HashSet<u64> =
        thread::scope(|scope| {
            let handles: Vec<_> =
                (0..4).map(|_| scope.spawn(|| (0..100).map(|_| next_sequence_number()).collect::<Vec<_>>())).collect();
            handles.into_iter().flat_map(|h| h.join().unwrap()).collect()
        });
    assert_eq!(values.len(), 400);
    assert!(sequence::global().peek() >= 400);
}
