//! Helpers for partial update payloads
//!
//! Nullable columns need three states in a patch: absent (keep), `null`
//! (clear) and a value (set). Fields typed `Option<Option<T>>` with
//! `#[serde(default, deserialize_with = "patch::nullable")]` get exactly that.

use serde::{Deserialize, Deserializer};

pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct PhonePatch {
        #[serde(default, deserialize_with = "nullable")]
        phone: Option<Option<String>>,
    }

    #[test]
    fn distinguishes_absent_null_and_value() {
        let absent: PhonePatch = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.phone, None);

        let cleared: PhonePatch = serde_json::from_str(r#"{"phone": null}"#).unwrap();
        assert_eq!(cleared.phone, Some(None));

        let set: PhonePatch = serde_json::from_str(r#"{"phone": "0550"}"#).unwrap();
        assert_eq!(set.phone, Some(Some("0550".to_string())));
    }
}
