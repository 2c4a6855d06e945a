//! Typed field binding.
//!
//! Responsibilities:
//! - Describe bindable fields (`FieldDescriptor`, `FieldType`).
//! - Resolve each field's effective value: environment variable first, then
//!   merged settings.
//! - Convert the value to the declared type and hand it to a `FieldWriter`.
//!
//! Does NOT handle:
//! - Loading or merging sources (see `merge.rs`).
//! - Discovering fields of a Rust type (see `context.rs` and the `configurable!` macro).
//!
//! Invariants:
//! - An environment variable that is set, even to an empty string, wins.
//! - Unnamed fields and properties with no value are skipped without error.
//! - The first conversion, unsupported-type or writer failure aborts the pass;
//!   earlier writes are not rolled back.
//! - Values of properties whose name contains `password` or `key` are never logged.

mod bind;
mod convert;
mod field;
mod value;

pub use bind::{
    BindReport, FieldBinder, FieldWriter, Resolved, ValueOrigin, is_secret_property,
};
pub use field::{FieldDescriptor, FieldType};
pub use value::{ConfigEnum, FromValue, Value};
