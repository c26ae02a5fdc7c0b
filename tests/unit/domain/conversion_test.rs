use commons_kit::{IdKeyed, KeyedConverter, ListToMapConverter};

use crate::common::{Record, record};

struct LabelIndex;

impl ListToMapConverter<Record, String, i64> for LabelIndex {
    fn convert(&self, items: Vec<Record>) -> std::collections::HashMap<String, i64> {
        items.into_iter().map(|r| (r.label, r.id)).collect()
    }
}

#[test]
fn records_keyed_by_id() {
    let map = IdKeyed.convert(vec![record(1, 10), record(2, 20)]);
    assert_eq!(map[&20].created.timestamp_millis(), 2);
}

#[test]
fn custom_converter_derives_values() {
    let map = LabelIndex.convert(vec![record(5, 1)]);
    assert_eq!(map["r1@5"], 1);
}

#[test]
fn keyed_converter_by_timestamp() {
    let by_millis = KeyedConverter::new(|r: &Record| r.created.timestamp_millis());
    let map = by_millis.convert(vec![record(7, 1), record(7, 2), record(8, 3)]);
    assert_eq!(map.len(), 2);
    assert_eq!(map[&7].id, 2);
}
