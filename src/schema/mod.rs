//! Schema inference module
//!
//! Turns a sample JSON document into a typed tree.
//!
//! # Features
//!
//! - **Merging**: sibling values collapse into one representative shape
//! - **Type Lattice**: scalars and arrays map onto a fixed set of tags
//! - **Array Voting**: array element types are decided by dominant count
//! - **String Subtypes**: optional date, time, date-time and duration tags

mod inference;
mod lattice;
mod merge;
mod types;

pub use inference::{infer_schema, SchemaInferrer};
pub use lattice::{type_of, type_of_array, type_of_elements};
pub use merge::{collapse, merge, merge_elements, merge_pair};
pub use types::Node;
