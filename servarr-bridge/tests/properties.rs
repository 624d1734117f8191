//! Property-based tests using proptest
//!
//! These tests check the name map round trips and the numeric narrowing of
//! the bridge against randomized inputs.

use proptest::prelude::*;
use serde_json::json;
use servarr_bridge::bridge::{read_int64_field, write_int64_field};
use servarr_bridge::error::{ApiError, client_error};
use servarr_bridge::model::{Field, Int64Attr};
use servarr_bridge::names::{DEFAULT_NAME_MAP, to_api, to_schema};

#[derive(Debug, Default)]
struct Counter {
    value: Int64Attr,
}

servarr_bridge::resource!(Counter { value => "Value" });

/// Generate names that are not part of the default table
fn arb_unlisted_name() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9.]{0,30}".prop_filter("listed names are mapped", |name| {
        !DEFAULT_NAME_MAP
            .iter()
            .any(|(api, schema)| api == name || schema == name)
    })
}

#[test]
fn test_listed_pairs_round_trip() {
    for (api, schema) in DEFAULT_NAME_MAP {
        assert_eq!(to_api(to_schema(api)), *api);
        assert_eq!(to_schema(to_api(schema)), *schema);
    }
}

proptest! {
    #[test]
    fn test_unlisted_names_are_identity(name in arb_unlisted_name()) {
        prop_assert_eq!(to_schema(&name), name.as_str());
        prop_assert_eq!(to_api(&name), name.as_str());
    }

    #[test]
    fn test_int_write_truncates(v in -1e15f64..1e15f64) {
        let mut counter = Counter::default();
        write_int64_field(&Field::new("value", json!(v)), &mut counter);

        prop_assert_eq!(counter.value.get(), Some(&(v.trunc() as i64)));
    }

    #[test]
    fn test_int_read_after_write(v in any::<i32>()) {
        let mut counter = Counter::default();
        write_int64_field(&Field::new("value", v), &mut counter);

        let field = read_int64_field("value", &counter).unwrap();
        prop_assert_eq!(field.get_value(), Some(&json!(i64::from(v))));
    }

    #[test]
    fn test_client_error_is_deterministic(message in ".{0,40}", body in prop::collection::vec(any::<u8>(), 0..64)) {
        let err = ApiError::with_body(message, body);
        prop_assert_eq!(
            client_error("update", "radarr_tag", &err),
            client_error("update", "radarr_tag", &err)
        );
    }
}
