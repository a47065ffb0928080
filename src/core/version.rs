use crate::domain::model::VersionInfo;
use crate::utils::error::Result;
use semver::Version;

impl VersionInfo {
    /// `latest` falls back to `current` when no newer release is known.
    pub fn new(current: &str, latest: Option<&str>) -> Result<Self> {
        let latest = latest.filter(|l| !l.trim().is_empty()).unwrap_or(current);
        let update_available = Version::parse(latest.trim())? > Version::parse(current.trim())?;
        Ok(Self {
            current: current.to_string(),
            latest: latest.to_string(),
            update_available,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_available() {
        let info = VersionInfo::new("7.1.0", Some("7.2.0")).unwrap();
        assert!(info.update_available);
        assert_eq!(info.latest, "7.2.0");
    }

    #[test]
    fn test_no_latest_known() {
        let info = VersionInfo::new("7.1.0", None).unwrap();
        assert!(!info.update_available);
        assert_eq!(info.latest, "7.1.0");
    }

    #[test]
    fn test_prerelease_is_older_than_release() {
        assert!(VersionInfo::new("8.0.0-rc.1", Some("8.0.0")).unwrap().update_available);
        assert!(!VersionInfo::new("8.0.0", Some("7.9.9")).unwrap().update_available);
    }

    #[test]
    fn test_invalid_version() {
        assert!(VersionInfo::new("seven", Some("7.2.0")).is_err());
    }
}
