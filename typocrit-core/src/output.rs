//! Streaming output helpers

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

/// Write items as a prettified JSON array.
pub fn write_json_pretty<T: Serialize>(items: &[T], mut w: impl Write) -> Result<()> {
    let json = serde_json::to_string_pretty(items)?;
    w.write_all(json.as_bytes())?;
    Ok(())
}

/// Write items as newline-delimited JSON (NDJSON).
pub fn write_ndjson<T: Serialize>(items: &[T], mut w: impl Write) -> Result<()> {
    for item in items {
        let line = serde_json::to_string(item)?;
        w.write_all(line.as_bytes())?;
        w.write_all(b"\n")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synthesis::{AnalysisResult, Severity, TaskType};

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            task_type: TaskType::Readability,
            severity: Severity::Warning,
            message: "Readability could be improved".to_string(),
            suggestions: vec!["Aim for 60 characters per line".to_string()],
            auto_fix_available: true,
            confidence_score: 0.25,
            typography_principle: None,
        }
    }

    #[test]
    fn ndjson_writes_one_line_per_result() {
        let results = vec![sample_result(), sample_result()];
        let mut buf = Vec::new();

        write_ndjson(&results, &mut buf).expect("write ndjson");

        let text = String::from_utf8(buf).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let parsed: AnalysisResult = serde_json::from_str(lines[0]).expect("parse");
        assert_eq!(parsed.task_type, TaskType::Readability);
        assert_eq!(parsed.confidence_score, 0.25);
    }

    #[test]
    fn pretty_json_is_a_parseable_array() {
        let results = vec![sample_result()];
        let mut buf = Vec::new();

        write_json_pretty(&results, &mut buf).expect("write json");

        let text = String::from_utf8(buf).expect("utf8");
        let parsed: serde_json::Value = serde_json::from_str(&text).expect("json");
        assert!(parsed.is_array());
        assert_eq!(parsed[0]["severity"], "warning");
    }
}
