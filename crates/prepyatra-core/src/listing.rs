//! Decoding of API listings.
//!
//! The Supabase-era service returned a bare JSON array. The REST backend
//! wraps the same array as `{ "status": true, "message": "...", "data": [...] }`
//! and reports failures as `{ "status": false, "message": "..." }`.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{CoreError, Result};

#[derive(Deserialize)]
struct Envelope<T> {
    status: Option<bool>,
    message: Option<String>,
    data: Option<Vec<T>>,
}

/// Decode a listing in either shape.
///
/// A top-level object is read as an envelope, anything else as a bare
/// array, so a bad record is reported at its position in the document.
///
/// # Errors
///
/// Returns [`CoreError::Json`] on malformed JSON and [`CoreError::Custom`]
/// when the envelope reports a failure or carries no `data`.
pub fn parse_listing<T: DeserializeOwned>(json: &str) -> Result<Vec<T>> {
    if !json.trim_start().starts_with('{') {
        return Ok(serde_json::from_str::<Vec<T>>(json)?);
    }

    let envelope: Envelope<T> = serde_json::from_str(json)?;
    if envelope.status == Some(false) {
        return Err(CoreError::Custom(
            envelope
                .message
                .unwrap_or_else(|| "listing request failed".to_string()),
        ));
    }
    envelope
        .data
        .ok_or_else(|| CoreError::Custom("listing has no 'data' array".to_string()))
}
