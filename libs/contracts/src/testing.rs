//! Shared assertions for shape tests

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt::Debug;

/// Check which keys of `valid` a shape insists on.
///
/// `valid` must decode as-is. Removing any key listed in `required` must fail
/// with serde's `missing field` error; removing any other key must still
/// decode.
pub(crate) fn assert_required_keys<T>(valid: &Value, required: &[&str])
where
    T: DeserializeOwned + Debug,
{
    if let Err(err) = serde_json::from_value::<T>(valid.clone()) {
        panic!("valid literal failed to decode: {err}");
    }

    let object = valid.as_object().expect("literal must be a JSON object");
    for key in required {
        assert!(object.contains_key(*key), "literal lacks required key `{key}`");
    }

    for key in object.keys() {
        let mut value = valid.clone();
        value
            .as_object_mut()
            .expect("literal must be a JSON object")
            .remove(key);
        let result = serde_json::from_value::<T>(value);

        if required.contains(&key.as_str()) {
            let err = result.expect_err(&format!("decoded without `{key}`"));
            assert!(
                err.to_string().contains(&format!("missing field `{key}`")),
                "unexpected error without `{key}`: {err}"
            );
        } else if let Err(err) = result {
            panic!("optional key `{key}` turned out required: {err}");
        }
    }
}
