//! Reading sensor packages from arguments and files.

use std::path::Path;

use workout_tracker_core::SensorPackage;

use crate::error::{CliResult, PackageParseError};

/// Parse a package written as `TAG:v1,v2,...`.
///
/// The tag is kept verbatim, so unknown tags surface later as build errors.
/// An empty value list (`RUN:`) is accepted for the same reason, but an empty
/// slot inside a list (`RUN:1,,3`) is rejected.
pub fn parse_package(arg: &str) -> Result<SensorPackage, PackageParseError> {
    let (tag, raw_values) = arg
        .split_once(':')
        .ok_or_else(|| PackageParseError::MissingSeparator(arg.to_string()))?;
    let tag = tag.trim();
    if tag.is_empty() {
        return Err(PackageParseError::EmptyTag(arg.to_string()));
    }

    if raw_values.trim().is_empty() {
        return Ok(SensorPackage::new(tag, Vec::<f64>::new()));
    }

    let values = raw_values
        .split(',')
        .map(str::trim)
        .map(|v| {
            if v.is_empty() {
                return Err(PackageParseError::EmptyValue(arg.to_string()));
            }
            v.parse::<f64>()
                .map_err(|_| PackageParseError::InvalidNumber {
                    package: arg.to_string(),
                    value: v.to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SensorPackage::new(tag, values))
}

/// Load a JSON array of packages from disk.
pub fn load_packages(path: &Path) -> CliResult<Vec<SensorPackage>> {
    let json = std::fs::read_to_string(path)?;
    let packages = SensorPackage::list_from_json(&json)?;
    tracing::debug!(count = packages.len(), path = %path.display(), "loaded packages");
    Ok(packages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tag_and_values() {
        let package = parse_package("SWM:720,1,80,25,40").unwrap();
        assert_eq!(package, SensorPackage::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]));
    }

    #[test]
    fn tolerates_whitespace() {
        let package = parse_package(" RUN : 15000, 1.5 ,75").unwrap();
        assert_eq!(package, SensorPackage::new("RUN", [15000.0, 1.5, 75.0]));
    }

    #[test]
    fn keeps_unknown_tags() {
        let package = parse_package("XYZ:1,2,3").unwrap();
        assert_eq!(package.tag, "XYZ");
    }

    #[test]
    fn empty_value_list_is_allowed() {
        let package = parse_package("RUN:").unwrap();
        assert!(package.values.is_empty());
    }

    #[test]
    fn rejects_empty_slot() {
        assert_eq!(
            parse_package("RUN:15000,,1,75"),
            Err(PackageParseError::EmptyValue("RUN:15000,,1,75".to_string()))
        );
        assert!(matches!(
            parse_package("RUN:15000,1,75,"),
            Err(PackageParseError::EmptyValue(_))
        ));
    }

    #[test]
    fn rejects_missing_separator() {
        assert_eq!(
            parse_package("RUN"),
            Err(PackageParseError::MissingSeparator("RUN".to_string()))
        );
    }

    #[test]
    fn rejects_empty_tag() {
        assert!(matches!(
            parse_package(":1,2,3"),
            Err(PackageParseError::EmptyTag(_))
        ));
    }

    #[test]
    fn rejects_non_numeric_value() {
        assert_eq!(
            parse_package("RUN:1,abc,3"),
            Err(PackageParseError::InvalidNumber {
                package: "RUN:1,abc,3".to_string(),
                value: "abc".to_string(),
            })
        );
    }
}
