//! sguid: compact, URL-safe short encoding for GUID/UUID identifiers.
//!
//! Renders a 128-bit identifier as 22 characters over the URL-safe base64
//! alphabet instead of the 36-character hyphenated form, with lossless,
//! tamper-detecting conversion in both directions.
//!
//! # Format
//!
//! ```text
//! SHORT ::= 22 * [A-Za-z0-9_-]    (base64 of the 16 GUID bytes, "==" stripped)
//! LONG  ::= canonical UUID text   (e.g. "c9a646d3-9c61-4cb7-bfcd-ee2522c8f633")
//! ```
//!
//! # Example
//!
//! ```
//! use sguid::ShortGuid;
//!
//! let id = ShortGuid::from_string("c9a646d3-9c61-4cb7-bfcd-ee2522c8f633").unwrap();
//! assert_eq!(id.value(), "00amyWGct0y_ze4lIsj2Mw");
//! assert!(id.equals_str("c9a646d3-9c61-4cb7-bfcd-ee2522c8f633"));
//! ```
//!
//! Decoding comes in two flavors: [`decode`] accepts every spelling that
//! maps onto 16 bytes, while [`decode_strict`] accepts only the one
//! canonical spelling the encoder produces. The difference matters whenever
//! an encoded string is used as an identity key: see [`decode_strict`] for
//! the aliasing rationale.

mod async_api;
mod codec;
mod guid;
mod parse;
mod sql;

pub use async_api::{
    async_decode, async_decode_strict, async_encode, async_parse, async_parse_all,
};
pub use codec::{
    ENCODED_LEN, SguidError, decode, decode_strict, encode, is_short_form, validate,
    validate_strict,
};
pub use guid::ShortGuid;
pub use parse::{parse, parse_short_guid, parse_short_guid_strict, parse_strict, try_parse};
pub use sql::{TSQL_DECODE, TSQL_ENCODE, sql_script};
