pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::TomlConfig;
pub use crate::core::report::{DuplicateGroup, RejectedEntry, ValidationReport};
pub use domain::metadata::{DataOrigin, Device, DeviceType, Metadata, RecordingMethod};
pub use domain::model::CervicalMucusRecord;
pub use domain::ports::{InstantaneousRecord, Record};
pub use domain::vocabulary::{amount, texture, Amount, Texture};
pub use utils::error::{RecordError, Result};
