//! Common serde helpers for request payloads
//!
//! 请求体中 `null` 与缺省字段等价，统一落到字段的零值。

use serde::{Deserialize, Deserializer};

use crate::db::object_id::ObjectId;

/// Deserialize any `Default` value, treating null as the default
pub fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}

/// Option<ObjectId> from a hex string
///
/// `null`、空字符串和全零 ID 均视为未提供；其余非法字符串报错。
pub fn option_object_id<'de, D>(deserializer: D) -> Result<Option<ObjectId>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(text) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if text.is_empty() {
        return Ok(None);
    }
    let id = ObjectId::parse_hex(&text).map_err(serde::de::Error::custom)?;
    Ok((!id.is_zero()).then_some(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "option_object_id")]
        id: Option<ObjectId>,
        #[serde(default, deserialize_with = "null_default")]
        tags: Vec<String>,
    }

    #[test]
    fn null_and_missing_fall_back_to_default() {
        let p: Probe = serde_json::from_str(r#"{"tags": null}"#).unwrap();
        assert!(p.tags.is_empty());
        assert!(p.id.is_none());
    }

    #[test]
    fn empty_and_zero_ids_are_absent() {
        let p: Probe = serde_json::from_str(r#"{"id": ""}"#).unwrap();
        assert!(p.id.is_none());
        let p: Probe = serde_json::from_str(r#"{"id": "000000000000000000000000"}"#).unwrap();
        assert!(p.id.is_none());
        let p: Probe = serde_json::from_str(r#"{"id": null}"#).unwrap();
        assert!(p.id.is_none());
    }

    #[test]
    fn malformed_id_is_an_error() {
        assert!(serde_json::from_str::<Probe>(r#"{"id": "abc"}"#).is_err());
        assert!(serde_json::from_str::<Probe>(r#"{"id": 42}"#).is_err());
    }
}
