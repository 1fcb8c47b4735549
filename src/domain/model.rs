use crate::domain::metadata::Metadata;
use crate::domain::ports::{InstantaneousRecord, Record};
use crate::domain::vocabulary::{Amount, Texture};
use crate::utils::error::Result;
use chrono::{DateTime, FixedOffset, Utc};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

pub const CERVICAL_MUCUS_RECORD_TYPE: &str = "CervicalMucus";

/// A self-assessed description of cervical mucus at one instant.
///
/// Every characteristic is optional. Equality and hashing are structural
/// over texture, amount, time, zone offset and metadata, in that order;
/// the field order below is what the derived `Hash` follows.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CervicalMucusRecord {
    texture: Option<Texture>,
    amount: Option<Amount>,
    time: DateTime<Utc>,
    zone_offset: Option<FixedOffset>,
    metadata: Metadata,
}

impl CervicalMucusRecord {
    pub fn new(time: DateTime<Utc>, zone_offset: Option<FixedOffset>) -> Self {
        Self {
            texture: None,
            amount: None,
            time,
            zone_offset,
            metadata: Metadata::EMPTY,
        }
    }

    /// Builds a record from raw vocabulary strings.
    ///
    /// Fails with `InvalidArgument` naming the field when `texture` or
    /// `amount` is not an exact member of its vocabulary. `None` metadata
    /// means [`Metadata::EMPTY`].
    pub fn try_new(
        texture: Option<&str>,
        amount: Option<&str>,
        time: DateTime<Utc>,
        zone_offset: Option<FixedOffset>,
        metadata: Option<Metadata>,
    ) -> Result<Self> {
        let texture = texture.map(str::parse::<Texture>).transpose()?;
        let amount = amount.map(str::parse::<Amount>).transpose()?;

        Ok(Self {
            texture,
            amount,
            time,
            zone_offset,
            metadata: metadata.unwrap_or_default(),
        })
    }

    pub fn with_texture(mut self, texture: Texture) -> Self {
        self.texture = Some(texture);
        self
    }

    pub fn with_amount(mut self, amount: Amount) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn texture(&self) -> Option<Texture> {
        self.texture
    }

    pub fn amount(&self) -> Option<Amount> {
        self.amount
    }

    pub fn time(&self) -> DateTime<Utc> {
        self.time
    }

    pub fn zone_offset(&self) -> Option<FixedOffset> {
        self.zone_offset
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Deterministic hash of all five fields.
    pub fn hash_code(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

impl Record for CervicalMucusRecord {
    fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    fn record_type(&self) -> &'static str {
        CERVICAL_MUCUS_RECORD_TYPE
    }
}

impl InstantaneousRecord for CervicalMucusRecord {
    fn time(&self) -> DateTime<Utc> {
        self.time
    }

    fn zone_offset(&self) -> Option<FixedOffset> {
        self.zone_offset
    }
}
