use crate::error::Error;
use core::{fmt, str::FromStr};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

lazy_static! {
    // base58 alphabet without 0, O, I and l
    static ref ACCOUNT_ADDRESS: Regex = Regex::new(r"^r[1-9A-HJ-NP-Za-km-z]{25,33}$").unwrap();
}

/// A Ripple account address, e.g. `rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh`.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct AccountAddress(String);

impl AccountAddress {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for AccountAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if ACCOUNT_ADDRESS.is_match(s) {
            Ok(AccountAddress(s.to_string()))
        } else {
            Err(Error::format_violation(
                "account",
                s,
                "expected `r` followed by 25 to 33 base58 characters",
            ))
        }
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Serde compatible Serialize
impl Serialize for AccountAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

/// Serde compatible Deserialize
impl<'de> Deserialize<'de> for AccountAddress {
    fn deserialize<D>(deserializer: D) -> Result<AccountAddress, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;

        AccountAddress::from_str(&s).map_err(serde::de::Error::custom)
    }
}
