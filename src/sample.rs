//! Struct `Sample` represents a batch of typed examples.

// Provides the column schema and type inference.
pub(crate) mod schema;
// Provides a single typed row.
pub(crate) mod example;
// Provides the sample struct.
pub(crate) mod sample_struct;

// Provides a struct that reads a file.
pub(crate) mod sample_reader;


pub use schema::{ColumnType, Schema};
pub use example::{Example, Value};
pub use sample_reader::SampleReader;
pub use sample_struct::Sample;
