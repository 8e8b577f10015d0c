//! Name records (`name.*`, addressed by `NameIndex`).
//!
//! The `Identifier` sort has no partition of its own: an identifier's index
//! bits are a `TextOffset` straight into the string table.

use zerocopy::{AsBytes, FromBytes, FromZeroes};

use crate::indices::{ExprIndex, NameIndex, TextOffset, TypeIndex};
use crate::partition::Record;

/// `operator` holds the vendor encoding of the operator symbol; `encoded`
/// its spelling.
#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "name.operator")]
pub struct OperatorName {
	pub encoded: TextOffset,
	pub operator: u32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "name.conversion")]
pub struct ConversionName {
	pub target: TypeIndex,
}

/// A user-defined literal suffix.
#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "name.literal")]
pub struct LiteralName {
	pub suffix: TextOffset,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "name.template")]
pub struct TemplateName {
	pub name: NameIndex,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "name.specialization")]
pub struct SpecializationName {
	pub primary: NameIndex,
	pub arguments: ExprIndex,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "name.source-file")]
pub struct SourceFileName {
	pub path: TextOffset,
	pub guard: TextOffset,
}

/// The name of a deduction guide, in the `name.guide` list.
#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes)]
pub struct GuideName {
	pub primary: NameIndex,
}
