//! Serde helper for `u128` values the contract may send either as JSON
//! strings (`"2625000"`) or as plain numbers. Always serialises as a string.

use serde::de::Error;
use serde::{Deserialize, Deserializer, Serializer};

pub fn serialize<S>(value: &u128, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_string())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<u128, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum U128Input {
        String(String),
        Number(u64),
    }

    match U128Input::deserialize(deserializer)? {
        U128Input::String(raw) => raw.trim().parse::<u128>().map_err(D::Error::custom),
        U128Input::Number(value) => Ok(u128::from(value)),
    }
}

/// Same encoding for a list of `u128` values.
pub mod vec {
    use serde::ser::SerializeSeq;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    struct Item(#[serde(with = "super")] u128);

    pub fn serialize<S>(values: &[u128], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(values.len()))?;
        for value in values {
            seq.serialize_element(&value.to_string())?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u128>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let items = Vec::<Item>::deserialize(deserializer)?;
        Ok(items.into_iter().map(|Item(value)| value).collect())
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
    struct Wrapper {
        #[serde(with = "super")]
        amount: u128,
        #[serde(with = "super::vec")]
        ids: Vec<u128>,
    }

    #[test]
    fn deserialize_accepts_string() {
        let parsed: Wrapper =
            serde_json::from_str(r#"{"amount":"2625000","ids":["1","2"]}"#).expect("string amount");
        assert_eq!(parsed.amount, 2_625_000);
        assert_eq!(parsed.ids, vec![1, 2]);
    }

    #[test]
    fn deserialize_accepts_number() {
        let parsed: Wrapper =
            serde_json::from_str(r#"{"amount":1337,"ids":[7]}"#).expect("numeric amount");
        assert_eq!(parsed.amount, 1337);
        assert_eq!(parsed.ids, vec![7]);
    }

    #[test]
    fn serializes_as_strings() {
        let json = serde_json::to_string(&Wrapper {
            amount: 5,
            ids: vec![3],
        })
        .unwrap();
        assert_eq!(json, r#"{"amount":"5","ids":["3"]}"#);
    }
}
