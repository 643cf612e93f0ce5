use super::types::Record;
use crate::error::{ErrorContext, TierError, TierResult};
use std::path::Path;
use tokio::fs;

/// Parses a JSON array of objects into records, keeping field order.
pub fn parse_records(json: &str) -> TierResult<Vec<Record>> {
    let document: serde_json::Value =
        serde_json::from_str(json).with_operation("parse record input", None)?;

    let serde_json::Value::Array(items) = document else {
        return Err(TierError::Input {
            message: format!("expected a JSON array of objects, found {}", json_kind(&document)),
        });
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let kind = json_kind(&item);
            Record::from_json(item).ok_or_else(|| TierError::Input {
                message: format!("element {index} is {kind}, expected an object"),
            })
        })
        .collect()
}

pub async fn load_records(path: &Path) -> TierResult<Vec<Record>> {
    let content = fs::read_to_string(path)
        .await
        .with_operation("read record input", Some(path.to_path_buf()))?;
    parse_records(&content)
}

/// Reads the trimmed, non-empty lines of a text file.
pub async fn read_lines(path: &Path) -> TierResult<Vec<String>> {
    let content = fs::read_to_string(path)
        .await
        .with_operation("read lines", Some(path.to_path_buf()))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Value;
    use tempfile::TempDir;

    #[test]
    fn test_parse_records_keeps_order() {
        let records = parse_records(r#"[{"value": 25, "type": "user"}, {}]"#).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].fields().collect::<Vec<_>>(), vec!["value", "type"]);
        assert_eq!(records[0].get("value"), Some(&Value::Int(25)));
        assert!(records[1].is_empty());
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let err = parse_records(r#"{"value": 1}"#).unwrap_err();
        assert!(matches!(err, TierError::Input { .. }));
    }

    #[test]
    fn test_parse_rejects_non_object_element() {
        let err = parse_records(r#"[{"value": 1}, 7]"#).unwrap_err();
        assert!(err.to_string().contains("element 1"));
    }

    #[test]
    fn test_parse_reports_malformed_json() {
        let err = parse_records("[{").unwrap_err();
        assert!(matches!(err, TierError::Json { .. }));
    }

    #[tokio::test]
    async fn test_read_lines_skips_blank() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("numbers.txt");
        std::fs::write(&path, "  1.5\n\n2\n   \n3  \n").unwrap();

        let lines = read_lines(&path).await.unwrap();
        assert_eq!(lines, vec!["1.5", "2", "3"]);
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = load_records(&dir.path().join("missing.json")).await.unwrap_err();
        assert!(matches!(err, TierError::Io { .. }));
    }
}
