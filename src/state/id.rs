use chrono::Utc;

pub const SUPPLIER_PREFIX: &str = "SUP";
pub const DISTRIBUTOR_PREFIX: &str = "DIST";
pub const TICKET_PREFIX: &str = "TKT";

/// Stored suffixes further than this past the current clock are not
/// timestamps and do not seed the generator.
const MAX_CLOCK_SKEW_MILLIS: i64 = 24 * 60 * 60 * 1000;

/// Issues `<PREFIX>-<millis>` identifiers.
///
/// The numeric part follows the wall clock but never repeats or goes
/// backwards: two requests inside the same millisecond get consecutive
/// values.
#[derive(Debug, Default, Clone)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes sure future identifiers sort after `id`. Identifiers without a
    /// numeric suffix, or whose suffix lies far in the future, are ignored.
    pub fn observe(&mut self, id: &str) {
        self.observe_at(id, Utc::now().timestamp_millis());
    }

    fn observe_at(&mut self, id: &str, now_millis: i64) {
        let ceiling = now_millis.saturating_add(MAX_CLOCK_SKEW_MILLIS);
        if let Some(value) = id
            .rsplit_once('-')
            .and_then(|(_, suffix)| suffix.parse::<i64>().ok())
            .filter(|value| *value <= ceiling)
        {
            self.last = self.last.max(value);
        }
    }

    pub fn next(&mut self, prefix: &str) -> String {
        self.next_at(prefix, Utc::now().timestamp_millis())
    }

    fn next_at(&mut self, prefix: &str, now_millis: i64) -> String {
        let value = now_millis.max(self.last.saturating_add(1));
        self.last = value;
        format!("{prefix}-{value}")
    }
}
