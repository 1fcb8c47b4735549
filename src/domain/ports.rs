use crate::domain::metadata::Metadata;
use chrono::{DateTime, FixedOffset, Utc};

/// Common surface of every health record handed to the host platform.
pub trait Record: Send + Sync {
    fn metadata(&self) -> &Metadata;

    /// Stable type name used by the host to dispatch over record kinds.
    fn record_type(&self) -> &'static str;
}

/// A record describing a single point in time.
pub trait InstantaneousRecord: Record {
    fn time(&self) -> DateTime<Utc>;

    /// `None` when the local offset of `time` is unknown.
    fn zone_offset(&self) -> Option<FixedOffset>;
}
