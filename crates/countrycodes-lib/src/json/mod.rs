//! Thin wrapper over `serde_json` for command output.
//!
//! Keeps `serde_json` calls in one place and maps its errors into
//! `CountryCodeError`.

use serde::Serialize;

/// Serialize a value to a JSON string.
pub fn serialize<T: Serialize>(value: &T) -> crate::errors::Result<String> {
    serde_json::to_string(value).map_err(Into::into)
}

/// Serialize a value to a pretty-printed JSON string.
pub fn serialize_pretty<T: Serialize>(value: &T) -> crate::errors::Result<String> {
    serde_json::to_string_pretty(value).map_err(Into::into)
}

/// Serialize a value and print it to stdout, pretty-printed.
pub fn print<T: Serialize>(value: &T) -> crate::errors::Result<()> {
    println!("{}", serialize_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Hit<'a> {
        query: &'a str,
        result: Option<&'a str>,
    }

    #[test]
    fn test_serialize_null_result() {
        let hit = Hit {
            query: "ZZZ",
            result: None,
        };
        assert_eq!(
            serialize(&hit).unwrap(),
            r#"{"query":"ZZZ","result":null}"#
        );
    }

    #[test]
    fn test_serialize_pretty_is_multiline() {
        let hit = Hit {
            query: "can",
            result: Some("Canada"),
        };
        let out = serialize_pretty(&hit).unwrap();
        assert!(out.contains('\n'));
        assert!(out.contains(r#""result": "Canada""#));
    }
}
