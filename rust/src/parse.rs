//! Dual-format identifier parsing.
//!
//! Accepts either the 22-character short form or a canonical textual
//! identifier (whatever [`Uuid::parse_str`] accepts). Short form is tried
//! first; the two grammars never overlap, so the dispatch is unambiguous.

use uuid::Uuid;

use crate::codec::{self, SguidError};
use crate::guid::ShortGuid;

/// Parse a short-form or canonical identifier string, leniently.
///
/// The empty string parses to the nil identifier rather than failing.
/// This is a deliberate compatibility affordance for round-tripping
/// optional identifier fields through one API, and a surprising default:
/// callers that want empty input rejected must check for it themselves.
pub fn parse(text: &str) -> Result<Uuid, SguidError> {
    parse_inner(text, false)
}

/// Parse a short-form or canonical identifier string; short-form input
/// must be the canonical encoding of the identifier it yields.
pub fn parse_strict(text: &str) -> Result<Uuid, SguidError> {
    parse_inner(text, true)
}

/// Non-throwing variant of [`parse`].
pub fn try_parse(text: &str) -> Option<Uuid> {
    parse(text).ok()
}

fn parse_inner(text: &str, strict: bool) -> Result<Uuid, SguidError> {
    if text.is_empty() {
        return Ok(Uuid::nil());
    }
    if codec::is_short_form(text) {
        return if strict {
            codec::decode_strict(text)
        } else {
            codec::decode(text)
        };
    }
    Uuid::parse_str(text).map_err(|_| SguidError::Unrecognized(text.to_string()))
}

/// Parse into a [`ShortGuid`] wrapper, leniently.
///
/// Aliased short-form input is accepted, but the wrapper stores the
/// canonical re-encoding, never the input text.
pub fn parse_short_guid(text: &str) -> Result<ShortGuid, SguidError> {
    parse(text).map(ShortGuid::from_uuid)
}

/// Parse into a [`ShortGuid`] wrapper; short-form input must be canonical.
///
/// Canonical short-form input becomes the wrapper text directly, skipping
/// the re-encoding that [`ShortGuid::from_uuid`] performs.
pub fn parse_short_guid_strict(text: &str) -> Result<ShortGuid, SguidError> {
    if text.is_empty() {
        return Ok(ShortGuid::empty().clone());
    }
    if codec::is_short_form(text) {
        let id = codec::decode_strict(text)?;
        return Ok(ShortGuid::from_parts(id, text.to_string()));
    }
    let id = Uuid::parse_str(text).map_err(|_| SguidError::Unrecognized(text.to_string()))?;
    Ok(ShortGuid::from_uuid(id))
}
