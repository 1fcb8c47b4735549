// Record value types and the capability traits the host platform consumes.

pub mod metadata;
pub mod model;
pub mod ports;
pub mod vocabulary;
