//! The [`ShortGuid`] wrapper value.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::codec::{self, SguidError};
use crate::parse;

static EMPTY: Lazy<ShortGuid> = Lazy::new(|| ShortGuid::from_uuid(Uuid::nil()));

/// An identifier paired with its canonical 22-character short encoding.
///
/// The two halves are always mutually consistent: re-encoding the
/// identifier reproduces the stored text exactly. Constructors re-encode
/// lenient input where needed, so an aliased spelling never survives
/// construction.
///
/// Equality, ordering, and hashing are defined purely on the identifier,
/// never the text. Serialized as the short string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct ShortGuid {
    uuid: Uuid,
    text: String,
}

impl ShortGuid {
    /// Wrapper for a freshly generated random (v4) identifier.
    pub fn new() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    /// Wrap an existing identifier, computing its canonical encoding.
    pub fn from_uuid(uuid: Uuid) -> Self {
        let text = codec::encode(&uuid);
        Self { uuid, text }
    }

    // Both halves already known and consistent (strict-decode output).
    pub(crate) fn from_parts(uuid: Uuid, text: String) -> Self {
        debug_assert_eq!(codec::encode(&uuid), text);
        Self { uuid, text }
    }

    /// Parse a short-form or canonical identifier string, leniently.
    pub fn from_string(text: &str) -> Result<Self, SguidError> {
        parse::parse_short_guid(text)
    }

    /// Parse, requiring canonical short-form input.
    pub fn from_string_strict(text: &str) -> Result<Self, SguidError> {
        parse::parse_short_guid_strict(text)
    }

    /// The wrapper for the nil identifier (`AAAAAAAAAAAAAAAAAAAAAA`).
    pub fn empty() -> &'static ShortGuid {
        &EMPTY
    }

    /// True if this wraps the nil identifier.
    pub fn is_empty(&self) -> bool {
        self.uuid.is_nil()
    }

    /// The canonical 22-character encoding.
    pub fn value(&self) -> &str {
        &self.text
    }

    /// The underlying identifier.
    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    /// Compare against an identifier string in either form.
    ///
    /// Lenient on both grammars; false for anything unparseable. The empty
    /// string matches the empty wrapper, consistent with [`parse::parse`].
    pub fn equals_str(&self, text: &str) -> bool {
        parse::try_parse(text).is_some_and(|id| id == self.uuid)
    }
}

impl Default for ShortGuid {
    fn default() -> Self {
        EMPTY.clone()
    }
}

impl PartialEq for ShortGuid {
    fn eq(&self, other: &Self) -> bool {
        self.uuid == other.uuid
    }
}

impl Eq for ShortGuid {}

impl PartialEq<Uuid> for ShortGuid {
    fn eq(&self, other: &Uuid) -> bool {
        self.uuid == *other
    }
}

impl PartialEq<ShortGuid> for Uuid {
    fn eq(&self, other: &ShortGuid) -> bool {
        *self == other.uuid
    }
}

impl PartialOrd for ShortGuid {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ShortGuid {
    fn cmp(&self, other: &Self) -> Ordering {
        self.uuid.cmp(&other.uuid)
    }
}

impl Hash for ShortGuid {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.uuid.hash(state);
    }
}

impl fmt::Display for ShortGuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for ShortGuid {
    type Err = SguidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl From<Uuid> for ShortGuid {
    fn from(uuid: Uuid) -> Self {
        Self::from_uuid(uuid)
    }
}

impl From<ShortGuid> for Uuid {
    fn from(g: ShortGuid) -> Self {
        g.uuid
    }
}

impl From<ShortGuid> for String {
    fn from(g: ShortGuid) -> Self {
        g.text
    }
}

impl TryFrom<String> for ShortGuid {
    type Error = SguidError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_string(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    const LONG: &str = "c9a646d3-9c61-4cb7-bfcd-ee2522c8f633";
    const SHORT: &str = "00amyWGct0y_ze4lIsj2Mw";

    #[test]
    fn test_from_uuid_stores_canonical_text() {
        let id = Uuid::parse_str(LONG).unwrap();
        let g = ShortGuid::from_uuid(id);
        assert_eq!(g.value(), SHORT);
        assert_eq!(g.uuid(), id);
        assert_eq!(codec::encode(&g.uuid()), g.value());
    }

    #[test]
    fn test_from_string_accepts_both_forms() {
        let a = ShortGuid::from_string(LONG).unwrap();
        let b = ShortGuid::from_string(SHORT).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.value(), b.value());
    }

    #[test]
    fn test_from_string_strict_rejects_aliased() {
        assert!(ShortGuid::from_string("bullshitmustnotbevalid").is_ok());
        assert!(matches!(
            ShortGuid::from_string_strict("bullshitmustnotbevalid"),
            Err(SguidError::NonCanonical { .. })
        ));
    }

    #[test]
    fn test_new_is_well_formed() {
        let g = ShortGuid::new();
        assert_eq!(g.value().len(), codec::ENCODED_LEN);
        assert_eq!(codec::encode(&g.uuid()), g.value());
        assert!(!g.is_empty());
    }

    #[test]
    fn test_empty_singleton() {
        let e = ShortGuid::empty();
        assert!(e.is_empty());
        assert_eq!(e.uuid(), Uuid::nil());
        assert_eq!(e.value(), "AAAAAAAAAAAAAAAAAAAAAA");
        assert_eq!(*e, ShortGuid::default());
    }

    #[test]
    fn test_equality_is_identifier_based() {
        let id = Uuid::parse_str(LONG).unwrap();
        let from_long = ShortGuid::from_string(LONG).unwrap();
        let from_aliased = ShortGuid::from_string("bullshitmustnotbevalid").unwrap();

        assert_eq!(from_long, ShortGuid::from_uuid(id));
        assert_ne!(from_long, from_aliased);

        // symmetric against the raw identifier
        assert_eq!(from_long, id);
        assert_eq!(id, from_long);
        assert_ne!(from_aliased, id);
    }

    #[test]
    fn test_equals_str_both_forms() {
        let g = ShortGuid::from_string(SHORT).unwrap();
        assert!(g.equals_str(SHORT));
        assert!(g.equals_str(LONG));
        assert!(!g.equals_str("AAAAAAAAAAAAAAAAAAAAAA"));
        assert!(!g.equals_str("Nothing to see here..."));
        assert!(ShortGuid::empty().equals_str(""));
    }

    #[test]
    fn test_ordering_follows_identifier() {
        let a = ShortGuid::from_uuid(Uuid::parse_str(LONG).unwrap());
        let b = ShortGuid::from_uuid(Uuid::nil());
        assert_eq!(a.cmp(&b), a.uuid().cmp(&b.uuid()));
        assert!(b < a);
    }

    #[test]
    fn test_hash_consistency() {
        let a = ShortGuid::from_string(LONG).unwrap();
        let b = ShortGuid::from_string(SHORT).unwrap();

        let mut ha = DefaultHasher::new();
        let mut hb = DefaultHasher::new();
        a.hash(&mut ha);
        b.hash(&mut hb);
        assert_eq!(ha.finish(), hb.finish());
    }

    #[test]
    fn test_display_and_from_str_round_trip() {
        let g: ShortGuid = SHORT.parse().unwrap();
        assert_eq!(g.to_string(), SHORT);
        let again: ShortGuid = g.to_string().parse().unwrap();
        assert_eq!(g, again);
    }

    #[test]
    fn test_serde_round_trip_as_short_string() {
        let g = ShortGuid::from_string(LONG).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, format!("\"{SHORT}\""));

        let back: ShortGuid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);

        // long-form input deserializes too, storing canonical text
        let from_long: ShortGuid = serde_json::from_str(&format!("\"{LONG}\"")).unwrap();
        assert_eq!(from_long.value(), SHORT);
    }

    #[test]
    fn test_serde_rejects_garbage() {
        let res: Result<ShortGuid, _> = serde_json::from_str("\"Nothing to see here...\"");
        assert!(res.is_err());
    }

    #[test]
    fn test_conversions() {
        let id = Uuid::parse_str(LONG).unwrap();
        let g: ShortGuid = id.into();
        let back: Uuid = g.clone().into();
        assert_eq!(back, id);
        let s: String = g.into();
        assert_eq!(s, SHORT);
    }
}
