//! Convenience wrappers over the raw partitions.
//!
//! Every wrapper is a couple of words wide, borrows the file, and owns no
//! cache; construct and discard them freely.

mod decls;
mod module;
mod name;

pub use decls::*;
pub use module::*;
pub use name::*;
