//! Domain model (resource type, version, errors).

pub mod errors;
pub mod resource_type;
pub mod version;

pub use self::errors::{ResourceTypeError, VersionParseError};
pub use self::resource_type::{ResourceType, parse_resource_type};
pub use self::version::Version;
