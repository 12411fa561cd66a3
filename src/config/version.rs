//! Admin API version selection.

use crate::error::ConfigError;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Stable releases known to this crate, oldest first, paired with their
/// path segment.
static STABLE_RELEASES: [(ApiVersion, &str); 8] = [
    (ApiVersion::V2024_01, "2024-01"),
    (ApiVersion::V2024_04, "2024-04"),
    (ApiVersion::V2024_07, "2024-07"),
    (ApiVersion::V2024_10, "2024-10"),
    (ApiVersion::V2025_01, "2025-01"),
    (ApiVersion::V2025_04, "2025-04"),
    (ApiVersion::V2025_07, "2025-07"),
    (ApiVersion::V2025_10, "2025-10"),
];

/// Index into [`STABLE_RELEASES`] of the oldest version inside Shopify's
/// twelve-month support window.
const MINIMUM_SUPPORTED: usize = 4;

/// Shopify Admin API version, used as the `/admin/api/{version}` path
/// segment.
///
/// ```rust
/// use shopify_metafields::ApiVersion;
///
/// let version: ApiVersion = "2024-10".parse().unwrap();
/// assert_eq!(version, ApiVersion::V2024_10);
/// assert_eq!(version.to_string(), "2024-10");
/// assert!(ApiVersion::latest().is_supported());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// 2024-01
    V2024_01,
    /// 2024-04
    V2024_04,
    /// 2024-07
    V2024_07,
    /// 2024-10
    V2024_10,
    /// 2025-01
    V2025_01,
    /// 2025-04
    V2025_04,
    /// 2025-07
    V2025_07,
    /// 2025-10
    V2025_10,
    /// The unstable API, for development only.
    Unstable,
    /// A quarterly release newer than this crate knows about.
    Custom(String),
}

impl ApiVersion {
    /// Returns the latest stable API version.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V2025_10
    }

    /// Returns `true` for the named quarterly releases.
    #[must_use]
    pub const fn is_stable(&self) -> bool {
        !matches!(self, Self::Unstable | Self::Custom(_))
    }

    /// Returns `true` if the version is inside the support window.
    ///
    /// `Unstable` and `Custom` versions are always considered supported.
    #[must_use]
    pub fn is_supported(&self) -> bool {
        self.release_index()
            .map_or(true, |index| index >= MINIMUM_SUPPORTED)
    }

    fn release_index(&self) -> Option<usize> {
        STABLE_RELEASES
            .iter()
            .position(|(version, _)| version == self)
    }

    fn is_valid_release_format(s: &str) -> bool {
        let Some((year, month)) = s.split_once('-') else {
            return false;
        };
        year.len() == 4
            && year.chars().all(|c| c.is_ascii_digit())
            && matches!(month, "01" | "04" | "07" | "10")
    }
}

impl PartialOrd for ApiVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ApiVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        // Stable releases first, then unstable, then custom releases.
        let rank = |v: &Self| match v {
            Self::Unstable => STABLE_RELEASES.len(),
            Self::Custom(_) => STABLE_RELEASES.len() + 1,
            stable => stable.release_index().unwrap_or_default(),
        };
        match (self, other) {
            (Self::Custom(a), Self::Custom(b)) => a.cmp(b),
            _ => rank(self).cmp(&rank(other)),
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unstable => f.write_str("unstable"),
            Self::Custom(s) => f.write_str(s),
            stable => {
                let segment = STABLE_RELEASES
                    .iter()
                    .find(|(version, _)| version == stable)
                    .map_or("", |(_, segment)| *segment);
                f.write_str(segment)
            }
        }
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();

        if s == "unstable" {
            return Ok(Self::Unstable);
        }
        if let Some((version, _)) = STABLE_RELEASES.iter().find(|(_, segment)| *segment == s) {
            return Ok(version.clone());
        }
        if Self::is_valid_release_format(&s) {
            return Ok(Self::Custom(s));
        }
        Err(ConfigError::InvalidApiVersion { version: s })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_known_versions() {
        assert_eq!("2024-01".parse::<ApiVersion>().unwrap(), ApiVersion::V2024_01);
        assert_eq!(" 2025-10 ".parse::<ApiVersion>().unwrap(), ApiVersion::V2025_10);
        assert_eq!("UNSTABLE".parse::<ApiVersion>().unwrap(), ApiVersion::Unstable);
    }

    #[test]
    fn test_display_matches_path_segment() {
        assert_eq!(ApiVersion::V2024_07.to_string(), "2024-07");
        assert_eq!(ApiVersion::Unstable.to_string(), "unstable");
        assert_eq!(ApiVersion::Custom("2026-01".to_string()).to_string(), "2026-01");
    }

    #[test]
    fn test_future_release_parses_as_custom() {
        let version: ApiVersion = "2026-04".parse().unwrap();
        assert_eq!(version, ApiVersion::Custom("2026-04".to_string()));
        assert!(!version.is_stable());
        assert!(version.is_supported());
    }

    #[test]
    fn test_rejects_invalid_versions() {
        assert!("invalid".parse::<ApiVersion>().is_err());
        assert!("2024".parse::<ApiVersion>().is_err());
        assert!("2024-1".parse::<ApiVersion>().is_err());
        assert!("2024-02".parse::<ApiVersion>().is_err());
        assert!("24-01".parse::<ApiVersion>().is_err());
    }

    #[test]
    fn test_support_window() {
        assert!(!ApiVersion::V2024_10.is_supported());
        assert!(ApiVersion::V2025_01.is_supported());
        assert!(ApiVersion::latest().is_supported());
        assert!(ApiVersion::Unstable.is_supported());
    }

    #[test]
    fn test_ordering() {
        assert!(ApiVersion::V2024_01 < ApiVersion::V2024_04);
        assert!(ApiVersion::V2025_07 < ApiVersion::V2025_10);
        assert!(ApiVersion::V2025_10 < ApiVersion::Unstable);
        assert!(ApiVersion::Unstable < ApiVersion::Custom("2026-01".to_string()));
        assert!(
            ApiVersion::Custom("2026-01".to_string()) < ApiVersion::Custom("2026-04".to_string())
        );
    }
}
