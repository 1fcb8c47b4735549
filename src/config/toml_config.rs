use crate::domain::metadata::{DataOrigin, Device, DeviceType, Metadata, RecordingMethod};
use crate::domain::model::CervicalMucusRecord;
use crate::utils::error::{RecordError, Result};
use crate::utils::validation::{validate_min, validate_range, Validate};
use chrono::{DateTime, FixedOffset, Offset, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest offset accepted from input files, in seconds (18 hours).
const MAX_OFFSET_SECONDS: i32 = 18 * 3600;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub logging: Option<LoggingConfig>,
    pub validation: Option<ValidationConfig>,
    #[serde(default)]
    pub records: Vec<RecordEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    pub fail_fast: Option<bool>,
}

/// One observation as written in an input file. Values stay raw until
/// [`RecordEntry::to_record`] so every rejection names its field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordEntry {
    pub texture: Option<String>,
    pub amount: Option<String>,
    /// RFC 3339 string or native TOML offset datetime.
    pub time: toml::Value,
    pub zone_offset: Option<String>,
    pub metadata: Option<MetadataEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetadataEntry {
    pub id: Option<String>,
    pub data_origin: Option<String>,
    pub last_modified_time: Option<toml::Value>,
    pub client_record_id: Option<String>,
    pub client_record_version: Option<i64>,
    pub recording_method: Option<RecordingMethod>,
    pub device: Option<DeviceEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeviceEntry {
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub device_type: Option<DeviceType>,
}

impl TomlConfig {
    /// Reads and parses an input file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RecordError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RecordError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables stay verbatim.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RecordError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(level) = self.log_level() {
            let valid_levels = ["trace", "debug", "info", "warn", "error"];
            if !valid_levels.contains(&level) {
                return Err(RecordError::invalid_argument(
                    "logging.level",
                    level,
                    format!("Valid levels: {}", valid_levels.join(", ")),
                ));
            }
        }
        Ok(())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn fail_fast(&self) -> bool {
        self.validation
            .as_ref()
            .and_then(|v| v.fail_fast)
            .unwrap_or(false)
    }

    /// Converts every entry, in file order. With `fail_fast` the list ends
    /// at the first failing entry.
    pub fn build_records(&self, fail_fast: bool) -> Vec<Result<CervicalMucusRecord>> {
        let mut results = Vec::with_capacity(self.records.len());
        for (index, entry) in self.records.iter().enumerate() {
            let result = entry.to_record();
            match &result {
                Ok(_) => tracing::debug!(index, "record accepted"),
                Err(e) => tracing::warn!(index, error = %e, "record rejected"),
            }
            let failed = result.is_err();
            results.push(result);
            if failed && fail_fast {
                break;
            }
        }
        results
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

impl RecordEntry {
    pub fn to_record(&self) -> Result<CervicalMucusRecord> {
        let time = parse_instant_value("time", &self.time)?;
        let zone_offset = self
            .zone_offset
            .as_deref()
            .map(parse_zone_offset)
            .transpose()?;
        let metadata = self
            .metadata
            .as_ref()
            .map(MetadataEntry::to_metadata)
            .transpose()?;

        CervicalMucusRecord::try_new(
            self.texture.as_deref(),
            self.amount.as_deref(),
            time,
            zone_offset,
            metadata,
        )
    }
}

impl MetadataEntry {
    pub fn to_metadata(&self) -> Result<Metadata> {
        let mut metadata = Metadata::EMPTY;

        if let Some(id) = &self.id {
            metadata = metadata.with_id(id.clone());
        }
        if let Some(origin) = &self.data_origin {
            metadata = metadata.with_data_origin(DataOrigin::new(origin.clone()));
        }
        if let Some(time) = &self.last_modified_time {
            let time = parse_instant_value("metadata.last_modified_time", time)?;
            metadata = metadata.with_last_modified_time(time);
        }
        if let Some(client_id) = &self.client_record_id {
            metadata = metadata.with_client_record_id(client_id.clone());
        }
        if let Some(version) = self.client_record_version {
            validate_min("metadata.client_record_version", version, 0)?;
            metadata = metadata.with_client_record_version(version);
        }
        if let Some(method) = self.recording_method {
            metadata = metadata.with_recording_method(method);
        }
        if let Some(device) = &self.device {
            metadata = metadata.with_device(device.to_device());
        }

        Ok(metadata)
    }
}

impl DeviceEntry {
    pub fn to_device(&self) -> Device {
        let mut device = Device::new(self.device_type.unwrap_or_default());
        if let Some(manufacturer) = &self.manufacturer {
            device = device.with_manufacturer(manufacturer.clone());
        }
        if let Some(model) = &self.model {
            device = device.with_model(model.clone());
        }
        device
    }
}

fn parse_instant_value(field_name: &str, value: &toml::Value) -> Result<DateTime<Utc>> {
    match value {
        toml::Value::String(text) => parse_instant(field_name, text),
        toml::Value::Datetime(datetime) => parse_instant(field_name, &datetime.to_string()),
        other => Err(RecordError::invalid_argument(
            field_name,
            &other.to_string(),
            "expected an RFC 3339 instant",
        )),
    }
}

fn parse_instant(field_name: &str, value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            RecordError::invalid_argument(field_name, value, format!("not an RFC 3339 instant: {}", e))
        })
}

/// Parses `Z`, `+HH:MM`, `-HH:MM` or `+HHMM`. Only ASCII digits are accepted.
pub fn parse_zone_offset(value: &str) -> Result<FixedOffset> {
    if value == "Z" {
        return Ok(Utc.fix());
    }

    let invalid = || RecordError::invalid_argument("zone_offset", value, "expected Z or ±HH:MM");
    if !value.is_ascii() {
        return Err(invalid());
    }

    let (sign, rest) = match value.as_bytes().first() {
        Some(b'+') => (1, &value[1..]),
        Some(b'-') => (-1, &value[1..]),
        _ => return Err(invalid()),
    };
    let (hh, mm) = match rest.len() {
        5 if rest.as_bytes()[2] == b':' => (&rest[..2], &rest[3..]),
        4 => (&rest[..2], &rest[2..]),
        _ => return Err(invalid()),
    };

    let hours = offset_component(value, hh)?;
    let minutes = offset_component(value, mm)?;
    validate_range("zone_offset", minutes, 0, 59)?;

    let seconds = sign * (hours * 3600 + minutes * 60);
    validate_range("zone_offset", seconds, -MAX_OFFSET_SECONDS, MAX_OFFSET_SECONDS)?;

    FixedOffset::east_opt(seconds)
        .ok_or_else(|| RecordError::invalid_argument("zone_offset", value, "offset out of range"))
}

fn offset_component(value: &str, digits: &str) -> Result<i32> {
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RecordError::invalid_argument(
            "zone_offset",
            value,
            "hours and minutes must be ASCII digits",
        ));
    }
    digits.parse().map_err(|e| {
        RecordError::invalid_argument("zone_offset", value, format!("invalid number: {}", e))
    })
}
