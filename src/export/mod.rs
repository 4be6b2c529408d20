//! Result sink: JSON artifact writing.

pub mod json_writer;

pub use json_writer::{render_result, write_result};
