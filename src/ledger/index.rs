//! Ledger index as carried on the wire: a JSON string of decimal digits so
//! that 64-bit values survive consumers that read numbers as doubles.

use crate::error::Error;
use serde::Serializer;
use serde_json::Value;

/// Reads a ledger index. Absent, `null` and `""` all mean "no ledger".
pub fn parse(value: Option<Value>) -> Result<Option<i64>, Error> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => parse_decimal(s).map(Some),
        // Some servers send the index as a plain number.
        Some(Value::Number(n)) => parse_decimal(n.to_string()).map(Some),
        Some(other) => Err(Error::format_violation(
            "ledger",
            other.to_string(),
            "expected a decimal string",
        )),
    }
}

fn parse_decimal(s: String) -> Result<i64, Error> {
    match s.parse::<i64>() {
        Ok(index) => Ok(index),
        Err(source) => Err(Error::MalformedNumeric { value: s, source }),
    }
}

pub fn serialize<S>(index: &Option<i64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match index {
        Some(index) => serializer.serialize_str(&index.to_string()),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_and_empty() -> Result<(), Error> {
        assert_eq!(parse(None)?, None);
        assert_eq!(parse(Some(Value::Null))?, None);
        assert_eq!(parse(Some(json!("")))?, None);
        Ok(())
    }

    #[test]
    fn decimal_string_and_number() -> Result<(), Error> {
        assert_eq!(parse(Some(json!("12345")))?, Some(12345));
        assert_eq!(parse(Some(json!("348860")))?, Some(348860));
        assert_eq!(parse(Some(json!(348860)))?, Some(348860));
        assert_eq!(
            parse(Some(json!("9223372036854775807")))?,
            Some(i64::max_value())
        );
        Ok(())
    }

    #[test]
    fn malformed() {
        for bad in &[json!("abc"), json!("12a"), json!(" 1"), json!(1.5)] {
            match parse(Some(bad.clone())) {
                Err(Error::MalformedNumeric { .. }) => {}
                other => panic!("unexpected result for {}: {:?}", bad, other),
            }
        }
        assert!(matches!(
            parse(Some(json!(true))),
            Err(Error::FormatViolation { field: "ledger", .. })
        ));
        assert!(matches!(
            parse(Some(json!(["1"]))),
            Err(Error::FormatViolation { field: "ledger", .. })
        ));
    }

    #[test]
    fn serializes_as_string() -> Result<(), Error> {
        let mut out = Vec::new();
        serialize(&Some(348860), &mut serde_json::Serializer::new(&mut out))?;
        assert_eq!(out, b"\"348860\"");
        Ok(())
    }
}
