//! Application layer: use cases over chains
//!
//! This layer turns domain traversals into output.

pub mod error;
pub mod error_ext;
pub mod listing;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use listing::{print_list, print_node, render_list, write_list, write_node, Delimiters};
