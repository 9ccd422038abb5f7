//! Opaque cursors derived from a node's key field.
//!
//! A cursor is the standard base64 encoding of the key value's display form. It is an
//! encoding, not a security boundary.

use async_graphql::Value;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use thiserror::Error;

pub type Cursor = String;

#[derive(Debug, Error)]
pub enum CursorError {
    #[error("Cursor is not valid base64: {0:?}")]
    InvalidEncoding(#[from] base64::DecodeError),
    #[error("Cursor does not hold UTF-8 text: {0:?}")]
    InvalidText(#[from] std::string::FromUtf8Error),
}

pub type CursorResult<T> = Result<T, CursorError>;

/// The textual form of a key value: strings and enum names as-is, everything else as
/// GraphQL displays it.
pub fn textual_form(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Enum(name) => name.to_string(),
        other => other.to_string(),
    }
}

pub fn encode_cursor(text: &str) -> Cursor {
    STANDARD.encode(text.as_bytes())
}

pub fn cursor_for_value(value: &Value) -> Cursor {
    encode_cursor(&textual_form(value))
}

/// Recover the key text a cursor was derived from.
pub fn decode_cursor(cursor: &str) -> CursorResult<String> {
    let bytes = STANDARD.decode(cursor)?;
    Ok(String::from_utf8(bytes)?)
}
