//! `serde` support for `U256`, enabled by the `serde` feature.
//!
//! Values travel as their minimal hexadecimal string, the same text that
//! `U256::to_hex` produces and `U256::from_hex` accepts.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use super::U256;

impl Serialize for U256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for U256 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        U256::from_hex(&text).map_err(de::Error::custom)
    }
}
