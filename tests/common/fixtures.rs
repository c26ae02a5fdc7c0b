use chrono::{DateTime, TimeZone, Utc};
use commons_kit::TimestampedIdentifiable;

/// Minimal stored entity: creation instant plus id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub created: DateTime<Utc>,
    pub id: i64,
    pub label: String,
}

impl TimestampedIdentifiable for Record {
    fn created_at(&self) -> DateTime<Utc> {
        self.created
    }

    fn id(&self) -> i64 {
        self.id
    }
}

pub fn record(millis: i64, id: i64) -> Record {
    Record { created: Utc.timestamp_millis_opt(millis).unwrap(), id, label: format!("r{id}@{millis}") }
}
