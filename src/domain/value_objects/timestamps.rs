use time::format_description::well_known::Rfc3339;
use time::{Duration, OffsetDateTime, UtcOffset};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Timestamp(pub OffsetDateTime);

impl Timestamp {
    pub fn now_utc() -> Self {
        Self(OffsetDateTime::now_utc())
    }

    pub fn from(dt: OffsetDateTime) -> Self {
        Self(dt.to_offset(UtcOffset::UTC))
    }

    /// Returns the inner UTC `OffsetDateTime` without consuming the wrapper.
    pub fn as_inner(&self) -> OffsetDateTime {
        self.0
    }

    /// Returns `None` when the result falls outside the representable range.
    pub fn plus_minutes(&self, minutes: i64) -> Option<Self> {
        let seconds = minutes.checked_mul(60)?;
        self.0.checked_add(Duration::seconds(seconds)).map(Self)
    }

    /// Seconds since the Unix epoch, as used by JWT time claims.
    pub fn unix_seconds(&self) -> i64 {
        self.0.unix_timestamp()
    }

    pub fn to_rfc3339(&self) -> String {
        self.0.format(&Rfc3339).unwrap_or_default()
    }
}
