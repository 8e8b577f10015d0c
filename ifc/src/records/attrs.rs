//! Attribute records (`attr.*`, addressed by `AttrIndex`).

use zerocopy::{AsBytes, FromBytes, FromZeroes};

use crate::indices::{AttrIndex, ExprIndex, TextOffset};
use crate::partition::{Record, Sequence};

/// A single-word attribute such as `[[noreturn]]`.
#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "attr.basic")]
pub struct BasicAttr {
	pub word: TextOffset,
}

/// `scope::member`.
#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "attr.scoped")]
pub struct ScopedAttr {
	pub scope: TextOffset,
	pub member: TextOffset,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "attr.labeled")]
pub struct LabeledAttr {
	pub label: TextOffset,
	pub attribute: AttrIndex,
}

/// An attribute applied with arguments, e.g. `deprecated("...")`.
#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "attr.called")]
pub struct CalledAttr {
	pub function: AttrIndex,
	pub arguments: AttrIndex,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "attr.expanded")]
pub struct ExpandedAttr {
	pub operand: AttrIndex,
}

/// `using factor: terms...`
#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "attr.factored")]
pub struct FactoredAttr {
	pub factor: TextOffset,
	pub terms: AttrIndex,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "attr.elaborated")]
pub struct ElaboratedAttr {
	pub expr: ExprIndex,
}

/// `elements` is a run inside `heap.attr`.
#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "attr.tuple")]
pub struct TupleAttr {
	pub elements: Sequence,
}
