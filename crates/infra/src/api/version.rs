//! Remote API capability version

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use super::errors::ApiError;

static VERSION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(\d+)\.(\d+)\.f38(?:_(\d+))?$")
        .expect("VERSION_PATTERN should compile - this is a bug")
});

/// Version reported by `api_version`, ordered component-wise
///
/// The build component is always zero. [`ApiVersion::ZERO`] marks a device
/// that predates the `api_version` action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ApiVersion {
    /// Major version
    pub major: u32,
    /// Minor version
    pub minor: u32,
    /// Always zero
    pub build: u32,
    /// Fork revision, zero when absent
    pub revision: u32,
}

impl ApiVersion {
    /// Version of a device without `api_version`
    pub const ZERO: ApiVersion = ApiVersion::new(0, 0, 0, 0);

    /// Version from its components
    pub const fn new(major: u32, minor: u32, build: u32, revision: u32) -> Self {
        Self { major, minor, build, revision }
    }

    /// Parse `major.minor.f38[_revision]`
    ///
    /// # Errors
    /// [`ApiError::UnsupportedApi`] when the string does not follow the
    /// pattern.
    pub fn parse(version: &str) -> Result<Self, ApiError> {
        let unsupported = || ApiError::UnsupportedApi { version: version.to_string() };

        let captures = VERSION_PATTERN.captures(version).ok_or_else(unsupported)?;
        let number = |index: usize| -> Result<u32, ApiError> {
            captures.get(index).map_or(Ok(0), |m| m.as_str().parse().map_err(|_| unsupported()))
        };

        Ok(Self::new(number(1)?, number(2)?, 0, number(3)?))
    }

    /// Whether this is [`ApiVersion::ZERO`]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}.{}", self.major, self.minor, self.build, self.revision)
    }
}
