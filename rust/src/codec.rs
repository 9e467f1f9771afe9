//! Short-form encoding and decoding.
//!
//! Format: exactly 22 characters over the URL-safe base64 alphabet
//! (`A-Z`, `a-z`, `0-9`, `-`, `_`), the two trailing `=` padding
//! characters always stripped.
//!
//! The 16 identifier bytes are serialized in the platform GUID layout
//! (`Uuid::to_bytes_le`), so `c9a646d3-9c61-4cb7-bfcd-ee2522c8f633`
//! encodes to `00amyWGct0y_ze4lIsj2Mw`.

use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::{Engine, alphabet};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur during short-GUID operations.
#[derive(Error, Debug)]
pub enum SguidError {
    #[error("Invalid short encoding: {0}")]
    InvalidEncoding(String),
    #[error("Non-canonical short encoding: {input} (canonical form is {canonical})")]
    NonCanonical { input: String, canonical: String },
    #[error("Unrecognized identifier format: {0}")]
    Unrecognized(String),
}

/// Length of the encoded short form.
pub const ENCODED_LEN: usize = 22;

// URL-safe alphabet, no padding emitted or accepted. Trailing bits in the
// final symbol must be tolerated here: 128 bits do not fill 22 symbols
// evenly, so several spellings alias one identifier. `decode_strict`
// rejects the non-canonical ones by re-encode comparison.
const ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::RequireNone)
        .with_decode_allow_trailing_bits(true),
);

static SHORT_FORM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]{22}$").unwrap());

/// Returns true if `text` is syntactically a short form (length and
/// alphabet only; does not decode).
pub fn is_short_form(text: &str) -> bool {
    SHORT_FORM.is_match(text)
}

/// Encode an identifier into its 22-character short form.
///
/// Deterministic and total: every identifier, including the nil one, has
/// exactly one short form.
pub fn encode(id: &Uuid) -> String {
    ENGINE.encode(id.to_bytes_le())
}

/// Decode a short-form string into an identifier.
///
/// Lenient: any 22-character string over the alphabet decodes, including
/// the spellings that alias an identifier through the unused low-order
/// bits of the final character. Use [`decode_strict`] to accept only the
/// canonical spelling.
pub fn decode(text: &str) -> Result<Uuid, SguidError> {
    let bytes = ENGINE
        .decode(text)
        .map_err(|e| SguidError::InvalidEncoding(format!("{text}: {e}")))?;
    let bytes: [u8; 16] = bytes.try_into().map_err(|b: Vec<u8>| {
        SguidError::InvalidEncoding(format!("{text}: decodes to {} bytes, expected 16", b.len()))
    })?;
    Ok(Uuid::from_bytes_le(bytes))
}

/// Decode a short-form string, accepting only the canonical spelling.
///
/// After decoding, the identifier is re-encoded and compared
/// character-for-character against `text`. A mismatch means `text`
/// decodes to the identifier without being its canonical encoding.
pub fn decode_strict(text: &str) -> Result<Uuid, SguidError> {
    let id = decode(text)?;
    let canonical = encode(&id);
    if canonical != text {
        return Err(SguidError::NonCanonical {
            input: text.to_string(),
            canonical,
        });
    }
    Ok(id)
}

/// Validate a short-form string leniently.
pub fn validate(text: &str) -> bool {
    decode(text).is_ok()
}

/// Validate that a string is a canonical short-form encoding.
pub fn validate_strict(text: &str) -> bool {
    decode_strict(text).is_ok()
}
