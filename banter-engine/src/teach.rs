//! Teach-input parsing: the `topic=response` command form and the
//! comma-separated bulk format. Malformed input is rejected locally
//! as a no-op, never a fatal abort.

use banter_core::errors::{BanterResult, TeachError};

/// Split a `topic=response` command on the first `=`.
pub fn parse_teach_command(input: &str) -> BanterResult<(String, String)> {
    let (topic, response) = input.split_once('=').ok_or(TeachError::MissingSeparator)?;
    let topic = topic.trim();
    let response = response.trim();
    if topic.is_empty() || response.is_empty() {
        return Err(TeachError::EmptyField.into());
    }
    Ok((topic.to_string(), response.to_string()))
}

/// Parse one bulk row: `topic,response,confidence`. The confidence is
/// everything after the second comma and must parse as a float.
pub fn parse_bulk_row(line: &str, number: usize) -> BanterResult<(String, String, f64)> {
    let mut fields = line.splitn(3, ',');
    let (topic, response, confidence) = match (fields.next(), fields.next(), fields.next()) {
        (Some(t), Some(r), Some(c)) => (t, r, c),
        _ => {
            return Err(TeachError::MalformedRow {
                line: number,
                reason: "expected topic,response,confidence".to_string(),
            }
            .into())
        }
    };

    let confidence = confidence
        .trim()
        .parse::<f64>()
        .map_err(|e| TeachError::MalformedRow {
            line: number,
            reason: format!("bad confidence: {e}"),
        })?;

    Ok((topic.to_string(), response.to_string(), confidence))
}
