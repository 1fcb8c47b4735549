use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a record was captured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordingMethod {
    #[default]
    Unknown,
    /// The user started a session on the device.
    ActivelyRecorded,
    /// Passively collected, e.g. background sensing.
    AutomaticallyRecorded,
    /// Typed in by the user.
    ManualEntry,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceType {
    #[default]
    Unknown,
    Watch,
    Phone,
    Scale,
    Ring,
    HeadMounted,
    FitnessBand,
    ChestStrap,
    SmartDisplay,
}

/// Physical device a record was captured on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Device {
    manufacturer: Option<String>,
    model: Option<String>,
    device_type: DeviceType,
}

impl Device {
    pub fn new(device_type: DeviceType) -> Self {
        Self {
            manufacturer: None,
            model: None,
            device_type,
        }
    }

    pub fn with_manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = Some(manufacturer.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn manufacturer(&self) -> Option<&str> {
        self.manufacturer.as_deref()
    }

    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    pub fn device_type(&self) -> DeviceType {
        self.device_type
    }
}

/// Application that wrote a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DataOrigin {
    package_name: String,
}

impl DataOrigin {
    pub fn new(package_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
        }
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }
}

/// Provenance attached to every health record.
///
/// Values are built once and never mutated; the `with_*` methods consume
/// `self` and return the updated copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Metadata {
    id: String,
    data_origin: DataOrigin,
    last_modified_time: DateTime<Utc>,
    client_record_id: Option<String>,
    client_record_version: i64,
    device: Option<Device>,
    recording_method: RecordingMethod,
}

impl Metadata {
    /// Metadata of a record that has not been written anywhere yet.
    pub const EMPTY: Metadata = Metadata {
        id: String::new(),
        data_origin: DataOrigin {
            package_name: String::new(),
        },
        last_modified_time: DateTime::<Utc>::UNIX_EPOCH,
        client_record_id: None,
        client_record_version: 0,
        device: None,
        recording_method: RecordingMethod::Unknown,
    };

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_data_origin(mut self, data_origin: DataOrigin) -> Self {
        self.data_origin = data_origin;
        self
    }

    pub fn with_last_modified_time(mut self, time: DateTime<Utc>) -> Self {
        self.last_modified_time = time;
        self
    }

    pub fn with_client_record_id(mut self, client_record_id: impl Into<String>) -> Self {
        self.client_record_id = Some(client_record_id.into());
        self
    }

    pub fn with_client_record_version(mut self, version: i64) -> Self {
        self.client_record_version = version;
        self
    }

    pub fn with_device(mut self, device: Device) -> Self {
        self.device = Some(device);
        self
    }

    pub fn with_recording_method(mut self, method: RecordingMethod) -> Self {
        self.recording_method = method;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn data_origin(&self) -> &DataOrigin {
        &self.data_origin
    }

    pub fn last_modified_time(&self) -> DateTime<Utc> {
        self.last_modified_time
    }

    pub fn client_record_id(&self) -> Option<&str> {
        self.client_record_id.as_deref()
    }

    pub fn client_record_version(&self) -> i64 {
        self.client_record_version
    }

    pub fn device(&self) -> Option<&Device> {
        self.device.as_ref()
    }

    pub fn recording_method(&self) -> RecordingMethod {
        self.recording_method
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }
}

impl Default for Metadata {
    fn default() -> Self {
        Self::EMPTY
    }
}
