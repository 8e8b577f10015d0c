//! Fixed-layout record types, one module per partition family.
//!
//! Every record is `#[repr(C)]`, little-endian, free of implicit padding,
//! and carries its canonical partition name through `#[derive(Record)]`.
//! Field values that encode a small enumeration are stored raw and decoded
//! through an accessor; an unknown discriminant decodes to `None` rather
//! than poisoning the whole view.

pub mod attrs;
pub mod charts;
pub mod decls;
pub mod exprs;
pub mod literals;
pub mod names;
pub mod syntax;
pub mod types;

use zerocopy::{AsBytes, FromBytes, FromZeroes};

use ifc_derive::FromRepr;

use crate::indices::{DeclIndex, TextOffset};
use crate::partition::Record;

pub use attrs::*;
pub use charts::*;
pub use decls::*;
pub use exprs::*;
pub use literals::*;
pub use names::*;
pub use syntax::*;
pub use types::*;

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, FromZeroes, FromBytes, AsBytes)]
pub struct SourceLocation {
	pub line: u32,
	pub column: u32,
}

/// Member access control.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, FromRepr)]
pub enum Access {
	None = 0,
	Private = 1,
	Protected = 2,
	Public = 3,
}

/// One member of a scope; the element type of `scope.member` runs.
#[repr(C)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "scope.member")]
pub struct Declaration {
	pub index: DeclIndex,
}

/// A reference to another module, or to a partition of one. Both text
/// fields may be null; `module.imported` and `module.exported` share this
/// shape, so it carries no canonical partition name.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, FromZeroes, FromBytes, AsBytes)]
pub struct ModuleReference {
	pub owner: TextOffset,
	pub partition: TextOffset,
}
