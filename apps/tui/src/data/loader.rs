use std::path::Path;

use thiserror::Error;

use super::models::DebrisObject;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read debris data: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse debris data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Reads and parses the debris collection from disk. One read per
/// application run; there is no polling or refresh.
pub async fn load_debris(path: &Path) -> Result<Vec<DebrisObject>, DataError> {
    let raw = tokio::fs::read_to_string(path).await?;
    parse_debris(&raw)
}

pub fn parse_debris(raw: &str) -> Result<Vec<DebrisObject>, DataError> {
    Ok(serde_json::from_str(raw)?)
}

#[cfg(test)]
mod tests {
    use super::{parse_debris, DataError};

    #[test]
    fn parses_a_full_record() {
        let raw = r#"[{
            "id": 25544,
            "name": "ISS (ZARYA)",
            "object_type": "Satellite",
            "orbit_type": "LEO",
            "altitude": 420.5,
            "urgency_score": 96.2,
            "tle_line1": "1 25544U 98067A   ...",
            "tle_line2": "2 25544  51.6453 ..."
        }]"#;

        let objects = parse_debris(raw).unwrap();
        assert_eq!(objects.len(), 1);
        assert_eq!(objects[0].id, 25544);
        assert_eq!(objects[0].orbit_type.as_deref(), Some("LEO"));
        assert_eq!(objects[0].urgency_score, Some(96.2));
    }

    #[test]
    fn tolerates_missing_optional_fields() {
        let raw = r#"[{"id": 1, "name": "COSMOS 2251 DEB"}]"#;

        let objects = parse_debris(raw).unwrap();
        assert_eq!(objects[0].altitude, None);
        assert_eq!(objects[0].urgency_score, None);
        assert_eq!(objects[0].object_type, None);
    }

    #[test]
    fn empty_array_is_a_successful_empty_collection() {
        let objects = parse_debris("[]").unwrap();
        assert!(objects.is_empty());
    }

    #[test]
    fn malformed_json_is_a_parse_error_with_a_message() {
        let error = parse_debris("{not json").unwrap_err();
        assert!(matches!(error, DataError::Parse(_)));
        assert!(error.to_string().contains("failed to parse debris data"));
    }
}
