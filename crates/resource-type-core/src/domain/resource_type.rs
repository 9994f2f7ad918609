//! ResourceType - resource type 文字列のパース
//!
//! resource type 文字列は `a/b/c`、`a.b.c`、`a/b/c/1.0.0` のような形。
//! 最後の区切り文字より後ろのセグメントを [`Version`] としてパースし、
//! 成功して（かつ前に何かあれば）切り離す。失敗したら文字列全体が type になる。
//!
//! # 区切り文字
//! `/` が `.` より優先: `/` を含めば最後の `/`、含まなければ最後の `.` で分割する。
//! type から label を取るときも同じ規則を使う。

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

use super::errors::ResourceTypeError;
use super::version::Version;

const SLASH: char = '/';
const DOT: char = '.';

/// パース済みの resource type（type, label, version）
///
/// [`ResourceType::parse`] からのみ生成され、フィールドは読み取り専用。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ResourceType {
    #[serde(rename = "type")]
    resource_type: String,
    resource_label: String,
    version: Option<Version>,
}

impl ResourceType {
    /// Parses a resource type string.
    ///
    /// # Errors
    /// [`ResourceTypeError::InvalidArgument`] if `input` is empty. Nothing
    /// else fails: an unparsable version segment stays part of the type.
    pub fn parse(input: &str) -> Result<Self, ResourceTypeError> {
        if input.is_empty() {
            return Err(ResourceTypeError::InvalidArgument(
                "resource type string must not be empty".to_string(),
            ));
        }

        let (resource_type, version) = match split_last_segment(input) {
            (Some(head), tail) if !head.is_empty() => match Version::parse(tail) {
                Ok(version) => (head, Some(version)),
                Err(err) => {
                    debug!(input, candidate = tail, error = %err, "version segment rejected");
                    (input, None)
                }
            },
            _ => (input, None),
        };

        let (_, resource_label) = split_last_segment(resource_type);
        trace!(input, resource_type, resource_label, ?version, "parsed resource type");

        Ok(Self {
            resource_type: resource_type.to_string(),
            resource_label: resource_label.to_string(),
            version,
        })
    }

    /// Full type, without the version segment.
    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    /// Last segment of [`resource_type`](Self::resource_type).
    pub fn resource_label(&self) -> &str {
        &self.resource_label
    }

    /// Version split off the input, if the last segment was one.
    pub fn version(&self) -> Option<&Version> {
        self.version.as_ref()
    }
}

/// Nullable entry point: `None` is rejected like an empty string.
pub fn parse_resource_type(input: Option<&str>) -> Result<ResourceType, ResourceTypeError> {
    match input {
        Some(s) => ResourceType::parse(s),
        None => Err(ResourceTypeError::InvalidArgument(
            "resource type string must not be null".to_string(),
        )),
    }
}

/// Splits at the last `/`, or at the last `.` when there is no `/`.
///
/// Returns `(None, s)` when neither occurs.
fn split_last_segment(s: &str) -> (Option<&str>, &str) {
    let idx = s.rfind(SLASH).or_else(|| s.rfind(DOT));
    match idx {
        // 区切り文字はどちらも 1 byte
        Some(i) => (Some(&s[..i]), &s[i + 1..]),
        None => (None, s),
    }
}

impl FromStr for ResourceType {
    type Err = ResourceTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for ResourceType {
    type Error = ResourceTypeError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(v) => write!(f, "{}{}{}", self.resource_type, SLASH, v),
            None => self.resource_type.fmt(f),
        }
    }
}
