use crate::error::Error;
use core::{fmt, str::FromStr};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

lazy_static! {
    static ref RESULT_CODE: Regex = Regex::new(r"^te[cfjlms][A-Za-z_]+$").unwrap();
}

/// Transaction engine result code reported by rippled.
///
/// `tesSUCCESS` marks a transaction validated into the ledger, every other
/// code starts with `tec`, `tef`, `tej`, `tel` or `tem`.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct ResultCode(String);

impl ResultCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ResultCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if RESULT_CODE.is_match(s) {
            Ok(ResultCode(s.to_string()))
        } else {
            Err(Error::format_violation(
                "result",
                s,
                "expected `te`, a category letter out of c, f, j, l, m, s and a code name",
            ))
        }
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Serde compatible Serialize
impl Serialize for ResultCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

/// Serde compatible Deserialize
impl<'de> Deserialize<'de> for ResultCode {
    fn deserialize<D>(deserializer: D) -> Result<ResultCode, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;

        ResultCode::from_str(&s).map_err(serde::de::Error::custom)
    }
}

#[test]
fn accepts_known_codes() -> Result<(), Error> {
    for code in &[
        "tesSUCCESS",
        "tecUNFUNDED_PAYMENT",
        "tecPATH_DRY",
        "tefPAST_SEQ",
        "tejMaxFeeExceeded",
        "telINSUF_FEE_P",
        "temBAD_AMOUNT",
    ] {
        assert_eq!(code.parse::<ResultCode>()?.as_str(), *code);
    }
    Ok(())
}

#[test]
fn rejects_unknown_category() {
    match "teXBAD".parse::<ResultCode>() {
        Err(Error::FormatViolation { field, value, .. }) => {
            assert_eq!(field, "result");
            assert_eq!(value, "teXBAD");
        }
        other => panic!("unexpected result: {:?}", other),
    }
    // the pattern must cover the whole value
    assert!("tes".parse::<ResultCode>().is_err());
    assert!("tesSUCCESS!".parse::<ResultCode>().is_err());
    assert!("xtesSUCCESS".parse::<ResultCode>().is_err());
    assert!("terRETRY".parse::<ResultCode>().is_err());
}
