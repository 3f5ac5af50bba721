use super::{Finding, line_of};
use crate::models::ServicePayload;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// Single-quoted `-d`/`--data` argument; `'\''` is the shell's escaped quote.
static CURL_DATA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:^|\s)(?:-d|--data(?:-raw|-binary)?)\s+'((?:[^']|'\\'')*)'"#)
        .expect("curl data pattern")
});

/// The body must come back unchanged after encoding to JSON text and
/// decoding again, both as a generic value and as a typed payload.
pub fn check_round_trip(payload: &ServicePayload) -> Result<(), Finding> {
    let original = serde_json::to_value(payload).map_err(round_trip_error)?;
    let encoded = serde_json::to_string(payload).map_err(round_trip_error)?;

    let value: Value = serde_json::from_str(&encoded).map_err(round_trip_error)?;
    if value != original {
        return Err(Finding::PayloadRoundTrip(format!(
            "decoded value {} differs from the original",
            value
        )));
    }

    let decoded: ServicePayload = serde_json::from_str(&encoded).map_err(round_trip_error)?;
    if &decoded != payload {
        return Err(Finding::PayloadRoundTrip(
            "decoded payload differs from the original".to_string(),
        ));
    }

    Ok(())
}

/// Checks every JSON body passed to curl with `-d '...'` in a shell snippet.
pub fn check_curl_bodies(source: &str) -> Vec<Finding> {
    CURL_DATA
        .captures_iter(source)
        .filter_map(|caps| caps.get(1))
        .filter_map(|m| {
            let body = m.as_str().replace("'\\''", "'");
            check_json_text(&body).err().map(|err| {
                Finding::PayloadRoundTrip(format!("line {}: {}", line_of(source, m.start()), err))
            })
        })
        .collect()
}

fn check_json_text(text: &str) -> Result<(), String> {
    let value: Value = serde_json::from_str(text).map_err(|e| e.to_string())?;
    let encoded = serde_json::to_string(&value).map_err(|e| e.to_string())?;
    let again: Value = serde_json::from_str(&encoded).map_err(|e| e.to_string())?;
    if again != value {
        return Err("re-encoded body differs from the original".to_string());
    }
    Ok(())
}

fn round_trip_error(err: serde_json::Error) -> Finding {
    Finding::PayloadRoundTrip(err.to_string())
}
