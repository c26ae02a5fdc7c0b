use std::collections::HashMap;

use commons_kit::{Tuple2, Tuple3, Tuple4};

#[test]
fn tuples_as_composite_map_keys() {
    let mut prices: HashMap<Tuple3<&str, &str, u32>, u64> = HashMap::new();
    prices.insert(Tuple3::new("WIDGET", "USD", 1), 1_999);
    prices.insert(Tuple3::new("WIDGET", "EUR", 1), 1_849);

    assert_eq!(prices[&Tuple3::new("WIDGET", "USD", 1)], 1_999);
    assert!(!prices.contains_key(&Tuple3::new("WIDGET", "USD", 2)));
}

#[test]
fn four_element_equality_splits_into_prefix_and_last() {
    let a = Tuple4::new(1, Some("x"), 'c', 9_u8);
    let b = Tuple4::new(1, Some("x"), 'c', 9_u8);
    let c = Tuple4::new(1, Some("x"), 'c', 8_u8);
    let d = Tuple4::new(1, None, 'c', 9_u8);

    assert_eq!(a, b);
    assert_eq!(a.init(), c.init());
    assert_ne!(a, c);
    assert_ne!(a.init(), d.init());
    assert_ne!(a, d);
}

#[test]
fn ordering_is_lexicographic() {
    let mut pairs = vec![Tuple2::new(2, "a"), Tuple2::new(1, "z"), Tuple2::new(1, "b")];
    pairs.sort();
    assert_eq!(pairs, vec![Tuple2::new(1, "b"), Tuple2::new(1, "z"), Tuple2::new(2, "a")]);
}

#[test]
fn serializes_with_named_slots() {
    let json = serde_json::to_value(Tuple2::new("id", 5)).unwrap();
    assert_eq!(json, serde_json::json!({ "first": "id", "second": 5 }));
    let back: Tuple2<String, i32> = serde_json::from_value(json).unwrap();
    assert_eq!(back, Tuple2::new("id".to_string(), 5));
}
