//! Literal constants (`literal.*` by `LitIndex`) and string literals
//! (`string.literal` by `StringIndex`).

use zerocopy::{AsBytes, FromBytes, FromZeroes};

use crate::indices::{Cardinality, TextOffset};
use crate::partition::Record;

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "literal.integer")]
pub struct IntegerLiteral {
	pub value: u64,
}

/// `size` is the width in bytes of the literal as written.
#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "literal.float")]
pub struct FloatLiteral {
	pub value: f64,
	pub size: u32,
	pub unused: u32,
}

/// The character payload lives in the string table; `size` counts bytes
/// including the terminator, `suffix` names a user-defined suffix.
#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "string.literal")]
pub struct StringLiteral {
	pub start: TextOffset,
	pub size: Cardinality,
	pub suffix: TextOffset,
}
