use crate::error::Error;
use core::{fmt, str::FromStr};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

lazy_static! {
    static ref HASH_256: Regex = Regex::new(r"^$|^[A-Fa-f0-9]{64}$").unwrap();
}

/// Hex representation of a 256-bit hash. The empty string is accepted and
/// stands for a transaction without a hash yet.
#[derive(Debug, PartialEq, Eq, Clone, Hash, Default)]
pub struct Hash256(String);

impl Hash256 {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for Hash256 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if HASH_256.is_match(s) {
            Ok(Hash256(s.to_string()))
        } else {
            Err(Error::format_violation(
                "hash",
                s,
                "expected an empty string or 64 hex characters",
            ))
        }
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Serde compatible Serialize
impl Serialize for Hash256 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

/// Serde compatible Deserialize
impl<'de> Deserialize<'de> for Hash256 {
    fn deserialize<D>(deserializer: D) -> Result<Hash256, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;

        Hash256::from_str(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TX_HASH: &str = "9D591B18EDDD34F0B6CF4223A2940AEA2C3CC778925BABF289E0011CD8FA056E";

    #[test]
    fn empty_hash() -> Result<(), Error> {
        let hash: Hash256 = "".parse()?;
        assert!(hash.is_empty());
        assert_eq!(hash, Hash256::default());
        Ok(())
    }

    #[test]
    fn full_hash_keeps_case() -> Result<(), Error> {
        let upper: Hash256 = TX_HASH.parse()?;
        let lower: Hash256 = TX_HASH.to_lowercase().parse()?;
        assert!(!upper.is_empty());
        assert_eq!(upper.as_str(), TX_HASH);
        assert_eq!(lower.as_str(), TX_HASH.to_lowercase());
        Ok(())
    }

    #[test]
    fn rejects_bad_hashes() {
        let short = &TX_HASH[..63];
        let long = format!("{}0", TX_HASH);
        let non_hex = format!("{}G", &TX_HASH[..63]);
        for h in &[short, long.as_str(), non_hex.as_str(), " "] {
            match h.parse::<Hash256>() {
                Err(Error::FormatViolation { field, .. }) => assert_eq!(field, "hash"),
                other => panic!("unexpected result for {:?}: {:?}", h, other),
            }
        }
    }
}
