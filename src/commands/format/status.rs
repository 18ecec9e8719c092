//! Status message formatting helpers

use serde::Serialize;
use serde_json::json;

use lexis_core::error::{LexisError, Result};
use lexis_core::session::Outcome;

/// Print a JSON status message with optional fields
///
/// ```ignore
/// print_json_status("ok", Some("entry deleted"), &[("id", json!(3))])?;
/// ```
pub fn print_json_status(
    status: &str,
    message: Option<&str>,
    extra_fields: &[(&str, serde_json::Value)],
) -> Result<()> {
    let mut output = json!({ "status": status });

    if let Some(obj) = output.as_object_mut() {
        if let Some(msg) = message {
            obj.insert("message".to_string(), json!(msg));
        }
        for (key, value) in extra_fields {
            obj.insert(key.to_string(), value.clone());
        }
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Pretty-print any serializable value
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Unwrap a guarded outcome; a declined confirmation becomes `Cancelled`
pub fn cancelled<T>(outcome: Outcome<T>, operation: &str) -> Result<T> {
    match outcome {
        Outcome::Done(value) => Ok(value),
        Outcome::Cancelled => Err(LexisError::Cancelled(operation.to_string())),
    }
}
