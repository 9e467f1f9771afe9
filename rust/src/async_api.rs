//! Async convenience API built on top of the sync codec.

use uuid::Uuid;

use crate::codec::{self, SguidError};
use crate::parse;

/// Encode an identifier in async contexts.
pub async fn async_encode(id: Uuid) -> String {
    codec::encode(&id)
}

/// Decode a short-form string leniently in async contexts.
pub async fn async_decode(text: &str) -> Result<Uuid, SguidError> {
    codec::decode(text)
}

/// Decode a short-form string strictly in async contexts.
pub async fn async_decode_strict(text: &str) -> Result<Uuid, SguidError> {
    codec::decode_strict(text)
}

/// Parse a short-form or canonical identifier string in async contexts.
pub async fn async_parse(text: &str) -> Result<Uuid, SguidError> {
    parse::parse(text)
}

/// Parse a finite batch of identifier strings; fails on the first
/// unparseable input.
pub async fn async_parse_all(inputs: &[String]) -> Result<Vec<Uuid>, SguidError> {
    inputs.iter().map(|s| parse::parse(s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    const LONG: &str = "c9a646d3-9c61-4cb7-bfcd-ee2522c8f633";
    const SHORT: &str = "00amyWGct0y_ze4lIsj2Mw";

    #[test]
    fn async_round_trip() {
        let id = Uuid::new_v4();
        let short = block_on(async_encode(id));
        assert_eq!(block_on(async_decode(&short)).unwrap(), id);
        assert_eq!(block_on(async_decode_strict(&short)).unwrap(), id);
    }

    #[test]
    fn async_parse_both_forms() {
        let a = block_on(async_parse(LONG)).unwrap();
        let b = block_on(async_parse(SHORT)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn async_parse_all_collects_or_fails() {
        let inputs = vec![LONG.to_string(), SHORT.to_string(), String::new()];
        let ids = block_on(async_parse_all(&inputs)).unwrap();
        assert_eq!(ids.len(), 3);
        assert_eq!(ids[0], ids[1]);
        assert_eq!(ids[2], Uuid::nil());

        let bad = vec![SHORT.to_string(), "garbage".to_string()];
        assert!(block_on(async_parse_all(&bad)).is_err());
    }
}
