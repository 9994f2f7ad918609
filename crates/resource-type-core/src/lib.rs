//! resource-type-core
//!
//! Parses resource type strings such as `a/b/c/1.0.0` into a type
//! (`a/b/c`), a label (`c`) and an optional [`Version`] (`1.0.0`).
//!
//! # モジュール構成
//! - **domain**: ResourceType, Version, エラー型
//!
//! ```
//! use resource_type_core::ResourceType;
//!
//! let t = ResourceType::parse("a.b.c/42.0.0").unwrap();
//! assert_eq!(t.resource_type(), "a.b.c");
//! assert_eq!(t.resource_label(), "c");
//! assert_eq!(t.version().map(ToString::to_string).as_deref(), Some("42.0.0"));
//! ```

pub mod domain;

pub use domain::{ResourceType, ResourceTypeError, Version, VersionParseError, parse_resource_type};
