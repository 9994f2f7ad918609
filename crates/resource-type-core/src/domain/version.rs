//! Version - resource type の末尾に付くバージョン
//!
//! # 文法
//! - `major[.minor[.micro[.qualifier]]]`
//! - 数値要素は ASCII 数字のみ（符号 `+`/`-` は不可）、`i32::MAX` 以下
//! - qualifier は `[A-Za-z0-9_-]` の 1 文字以上
//! - 省略された数値要素は 0、省略された qualifier は空文字
//!
//! 前後の空白はトリムしない: `" 1.0.0"` はバージョンではない。

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::errors::VersionParseError;

const SEPARATOR: char = '.';

/// Version は `major.minor.micro[.qualifier]` 形式のバージョン
///
/// 等価性・順序は要素ごとに比較する（`1.0` と `1.0.0` は同じ）。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    major: u32,
    minor: u32,
    micro: u32,
    qualifier: String,
}

impl Version {
    pub fn new(major: u32, minor: u32, micro: u32) -> Self {
        Self {
            major,
            minor,
            micro,
            qualifier: String::new(),
        }
    }

    /// Same as [`Version::new`] with a qualifier attached.
    ///
    /// The qualifier is validated with the same rule the parser uses.
    pub fn with_qualifier(
        major: u32,
        minor: u32,
        micro: u32,
        qualifier: impl Into<String>,
    ) -> Result<Self, VersionParseError> {
        let qualifier = qualifier.into();
        if !qualifier.is_empty() {
            validate_qualifier(&qualifier)?;
        }
        Ok(Self {
            major,
            minor,
            micro,
            qualifier,
        })
    }

    pub fn parse(s: &str) -> Result<Self, VersionParseError> {
        if s.is_empty() {
            return Err(VersionParseError::Empty);
        }

        // 4 要素目（qualifier）には '.' を含めない
        let mut parts = s.splitn(4, SEPARATOR);
        let major = parse_component("major", parts.next())?;
        let minor = match parts.next() {
            Some(p) => parse_component("minor", Some(p))?,
            None => 0,
        };
        let micro = match parts.next() {
            Some(p) => parse_component("micro", Some(p))?,
            None => 0,
        };
        let qualifier = match parts.next() {
            Some(q) => {
                if q.contains(SEPARATOR) {
                    return Err(VersionParseError::TooManyComponents(s.to_string()));
                }
                validate_qualifier(q)?;
                q.to_string()
            }
            None => String::new(),
        };

        Ok(Self {
            major,
            minor,
            micro,
            qualifier,
        })
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    pub fn micro(&self) -> u32 {
        self.micro
    }

    /// Empty when the version had no qualifier.
    pub fn qualifier(&self) -> &str {
        &self.qualifier
    }
}

fn parse_component(component: &'static str, raw: Option<&str>) -> Result<u32, VersionParseError> {
    let raw = raw.unwrap_or_default();
    let invalid = || VersionParseError::InvalidNumber {
        component,
        value: raw.to_string(),
    };

    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let value: u32 = raw.parse().map_err(|_| invalid())?;
    if value > i32::MAX as u32 {
        return Err(invalid());
    }
    Ok(value)
}

fn validate_qualifier(q: &str) -> Result<(), VersionParseError> {
    let valid = !q.is_empty()
        && q
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-');
    if valid {
        Ok(())
    } else {
        Err(VersionParseError::InvalidQualifier(q.to_string()))
    }
}

impl FromStr for Version {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Version {
    type Error = VersionParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Version> for String {
    fn from(v: Version) -> Self {
        v.to_string()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)?;
        if !self.qualifier.is_empty() {
            write!(f, ".{}", self.qualifier)?;
        }
        Ok(())
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.micro.cmp(&other.micro))
            .then_with(|| self.qualifier.cmp(&other.qualifier))
    }
}
