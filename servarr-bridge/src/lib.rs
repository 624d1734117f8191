//! Field bridging and error shaping for *arr infrastructure providers.
//!
//! The remote media-management API describes parts of an entity as a bag of
//! untyped `(name, value)` fields, while the declarative resource schema uses
//! typed, tri-state attributes whose names do not always match the wire. This
//! crate moves single values between the two sides and builds the canonical
//! user-facing error strings used by the provider.
//!
//! ```
//! use serde_json::json;
//! use servarr_bridge::bridge::{read_int64_field, write_int64_field};
//! use servarr_bridge::model::{Field, Int64Attr};
//!
//! #[derive(Debug, Default)]
//! struct Indexer {
//!     seed_time: Int64Attr,
//! }
//!
//! servarr_bridge::resource!(Indexer {
//!     seed_time => "SeedTime",
//! });
//!
//! let mut indexer = Indexer::default();
//! write_int64_field(&Field::new("seedCriteria.seedTime", json!(50)), &mut indexer);
//! assert_eq!(indexer.seed_time.get(), Some(&50));
//!
//! let field = read_int64_field("seedTime", &indexer).unwrap();
//! assert_eq!(field.get_name(), "seedCriteria.seedTime");
//! ```

pub mod bridge;
pub mod error;
pub mod model;
pub mod names;

pub use bridge::FieldBridge;
pub use bridge::FieldLists;
pub use error::client_error;
pub use error::not_found;
pub use names::NameMap;
