//! Custom serde helpers for backend wire formats.

/// (De)serializes a `Decimal` as a JSON number.
///
/// The backend stores prices and revenue as JS numbers. Strings are accepted
/// on input as well, since some proxies stringify numbers.
pub mod decimal_number {
    use rust_decimal::prelude::*;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Int(i64),
        Float(f64),
        Str(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        match NumberOrString::deserialize(deserializer)? {
            NumberOrString::Int(i) => Ok(Decimal::from(i)),
            NumberOrString::Float(f) => Decimal::from_f64(f)
                .map(|d| d.normalize())
                .ok_or_else(|| serde::de::Error::custom(format!("Invalid number: {}", f))),
            NumberOrString::Str(s) => Decimal::from_str(s.trim())
                .map_err(|e| serde::de::Error::custom(format!("Invalid decimal {:?}: {}", s, e))),
        }
    }

    pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let f = value
            .to_f64()
            .ok_or_else(|| serde::ser::Error::custom(format!("Unrepresentable: {}", value)))?;
        serializer.serialize_f64(f)
    }
}

/// Same as [`decimal_number`] for optional fields.
pub mod option_decimal_number {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Wrapped(#[serde(with = "super::decimal_number")] Decimal);

        Ok(Option::<Wrapped>::deserialize(deserializer)?.map(|Wrapped(d)| d))
    }

    pub fn serialize<S>(value: &Option<Decimal>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(d) => super::decimal_number::serialize(d, serializer),
            None => serializer.serialize_none(),
        }
    }
}
