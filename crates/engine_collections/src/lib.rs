// crates/engine_collections/src/lib.rs
//! Ordered containers used by the engine.
//!
//! One storage type, [`OrderedList`], covers both the plain list and the
//! list-with-uniqueness case; the difference is a zero-sized policy type.

mod list;

pub use list::{AllowDuplicates, DuplicatePolicy, List, OrderedList, RejectDuplicates, UniqueList};
