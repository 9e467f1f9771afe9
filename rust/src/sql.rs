//! Database-side scalar functions for the short encoding.
//!
//! T-SQL definitions matching [`crate::encode`] and the lenient
//! [`crate::decode`]: same alphabet substitution, same truncation to 22
//! characters, same byte layout (`CAST(uniqueidentifier AS varbinary)`
//! serializes the first three fields little-endian, like
//! `Uuid::to_bytes_le`). Shipped as text so the port stays reviewable
//! without a database dependency; printed by `sguid sql`.

/// Scalar function: `UNIQUEIDENTIFIER` -> `CHAR(22)`.
pub const TSQL_ENCODE: &str = r#"CREATE FUNCTION [dbo].[EncodeShortGuid] (@id UNIQUEIDENTIFIER)
RETURNS CHAR(22)
AS
BEGIN
    DECLARE @bin VARBINARY(16) = CAST(@id AS VARBINARY(16));
    DECLARE @b64 CHAR(24) = CAST(N'' AS XML).value(
        'xs:base64Binary(sql:variable("@bin"))', 'CHAR(24)');
    RETURN LEFT(REPLACE(REPLACE(@b64, '/', '_'), '+', '-'), 22);
END"#;

/// Scalar function: `CHAR(22)` -> `UNIQUEIDENTIFIER`. Lenient, like
/// [`crate::decode`]: aliased spellings are accepted.
pub const TSQL_DECODE: &str = r#"CREATE FUNCTION [dbo].[DecodeShortGuid] (@encoded CHAR(22))
RETURNS UNIQUEIDENTIFIER
AS
BEGIN
    DECLARE @b64 CHAR(24) = REPLACE(REPLACE(@encoded, '_', '/'), '-', '+') + '==';
    RETURN CAST(CAST(N'' AS XML).value(
        'xs:base64Binary(sql:variable("@b64"))', 'VARBINARY(16)') AS UNIQUEIDENTIFIER);
END"#;

/// Full script creating both functions.
pub fn sql_script() -> String {
    format!("{TSQL_ENCODE}\nGO\n\n{TSQL_DECODE}\nGO\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_fn_mirrors_core_transform() {
        assert!(TSQL_ENCODE.contains("REPLACE(REPLACE(@b64, '/', '_'), '+', '-')"));
        assert!(TSQL_ENCODE.contains("22"));
        assert!(TSQL_ENCODE.contains("CHAR(24)"));
    }

    #[test]
    fn test_decode_fn_reverses_substitution_and_pads() {
        assert!(TSQL_DECODE.contains("REPLACE(REPLACE(@encoded, '_', '/'), '-', '+') + '=='"));
        assert!(TSQL_DECODE.contains("VARBINARY(16)"));
    }

    #[test]
    fn test_script_contains_both_functions() {
        let script = sql_script();
        assert!(script.contains("EncodeShortGuid"));
        assert!(script.contains("DecodeShortGuid"));
        assert_eq!(script.matches("\nGO\n").count(), 2);
    }
}
