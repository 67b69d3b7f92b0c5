//! Serde support
//!
//! Values serialize as base-16 strings, the same text `to_string_radix(16)`
//! produces. Deserialization also takes plain integers as raw bits.
//!
//! The mode is not written. A value comes back in its type's default mode,
//! so a signed `N64` reads back as unsigned with the same bits. Use `I64`
//! or `U64` fields where the mode has to survive.

use super::Int64;
use crate::mode::Signedness;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

impl<M: Signedness> Serialize for Int64<M> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encode(16))
    }
}

struct Int64Visitor<M>(PhantomData<M>);

impl<'de, M: Signedness> Visitor<'de> for Int64Visitor<M> {
    type Value = Int64<M>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a base-16 string or an integer")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Int64::from_str_radix(v, 16).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Int64::from_raw(v as u64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Int64::from_raw(v))
    }
}

impl<'de, M: Signedness> Deserialize<'de> for Int64<M> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(Int64Visitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use crate::value::{I64, N64, U64};

    #[test]
    fn test_serialize_as_hex() {
        assert_eq!(serde_json::to_string(&U64::MAX).unwrap(), "\"ffffffffffffffff\"");
        assert_eq!(serde_json::to_string(&I64::from(-1i64)).unwrap(), "\"-1\"");
    }

    #[test]
    fn test_deserialize_hex_and_numbers() {
        let n: I64 = serde_json::from_str("\"-ff\"").unwrap();
        assert_eq!(i64::from(n), -255);

        let n: U64 = serde_json::from_str("18446744073709551615").unwrap();
        assert_eq!(n, U64::MAX);

        let n: I64 = serde_json::from_str("-7").unwrap();
        assert_eq!(i64::from(n), -7);
    }

    #[test]
    fn test_deserialize_rejects_garbage() {
        assert!(serde_json::from_str::<N64>("\"xyz\"").is_err());
        assert!(serde_json::from_str::<N64>("true").is_err());
    }

    #[test]
    fn test_dynamic_mode_not_kept() {
        use crate::mode::Mode;

        let n = N64::from_raw_mode(-2i64 as u64, Mode::Signed);
        let json = serde_json::to_string(&n).unwrap();
        assert_eq!(json, "\"-2\"");

        let back: N64 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, n);
        assert!(!back.is_signed());

        let back: I64 = serde_json::from_str(&json).unwrap();
        assert_eq!(i64::from(back), -2);
    }

    #[test]
    fn test_round_trip_in_struct() {
        #[derive(serde::Serialize, serde::Deserialize)]
        struct Record {
            id: U64,
        }

        let json = serde_json::to_string(&Record { id: U64::from(0x1234u64) }).unwrap();
        assert_eq!(json, r#"{"id":"1234"}"#);
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id.raw(), 0x1234);
    }
}
