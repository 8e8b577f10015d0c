//! Type records (`type.*`, addressed by `TypeIndex`).

use bitflags::bitflags;
use zerocopy::{AsBytes, FromBytes, FromZeroes};

use ifc_derive::FromRepr;

use crate::indices::{ChartIndex, DeclIndex, ExprIndex, SyntaxIndex, TypeIndex};
use crate::partition::{Record, Sequence};
use crate::records::Access;

/// The basis of a fundamental type.
#[repr(u8)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, FromRepr)]
pub enum TypeBasis {
	Void = 0,
	Bool = 1,
	Char = 2,
	Wchar = 3,
	Char8 = 4,
	Char16 = 5,
	Char32 = 6,
	Int = 7,
	Float = 8,
	Double = 9,
	Nullptr = 10,
	Ellipsis = 11,
	Class = 12,
	Struct = 13,
	Union = 14,
	Enum = 15,
	Typename = 16,
	Namespace = 17,
}

#[repr(u8)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, FromRepr)]
pub enum TypePrecision {
	Default = 0,
	Short = 1,
	Long = 2,
	Bit8 = 3,
	Bit16 = 4,
	Bit32 = 5,
	Bit64 = 6,
	Bit128 = 7,
}

#[repr(u8)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, FromRepr)]
pub enum TypeSign {
	Plain = 0,
	Signed = 1,
	Unsigned = 2,
}

bitflags! {
	/// cv-qualification and `restrict`.
	#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
	pub struct Qualifiers: u32 {
		const CONST = 1 << 0;
		const VOLATILE = 1 << 1;
		const RESTRICT = 1 << 2;
	}
}

/// A builtin type, described by basis, precision and sign.
#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "type.fundamental")]
pub struct FundamentalType {
	pub basis: u8,
	pub precision: u8,
	pub sign: u8,
	pub unused: u8,
}

impl FundamentalType {
	pub fn basis(&self) -> Option<TypeBasis> {
		TypeBasis::from_repr(self.basis)
	}

	pub fn precision(&self) -> Option<TypePrecision> {
		TypePrecision::from_repr(self.precision)
	}

	pub fn sign(&self) -> Option<TypeSign> {
		TypeSign::from_repr(self.sign)
	}
}

/// A type designated by a declaration.
#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "type.designated")]
pub struct DesignatedType {
	pub decl: DeclIndex,
}

/// The type of a constructor or destructor.
#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "type.tor")]
pub struct TorType {
	pub source: TypeIndex,
	pub eh_spec: ExprIndex,
	pub convention: u32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "type.syntactic")]
pub struct SyntacticType {
	pub expr: ExprIndex,
}

/// A pack expansion.
#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "type.expansion")]
pub struct ExpansionType {
	pub pack: TypeIndex,
	pub mode: u32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "type.pointer")]
pub struct PointerType {
	pub pointee: TypeIndex,
}

/// `source` is the parameter tuple, `target` the return type.
#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "type.function")]
pub struct FunctionType {
	pub target: TypeIndex,
	pub source: TypeIndex,
	pub eh_spec: ExprIndex,
	pub convention: u32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "type.method")]
pub struct MethodType {
	pub target: TypeIndex,
	pub source: TypeIndex,
	pub class_type: TypeIndex,
	pub eh_spec: ExprIndex,
	pub convention: u32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "type.array")]
pub struct ArrayType {
	pub element: TypeIndex,
	pub bound: ExprIndex,
}

/// A base-class slot in a class definition.
#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "type.base")]
pub struct BaseType {
	pub ty: TypeIndex,
	pub access: u32,
	pub traits: u32,
}

impl BaseType {
	pub fn access(&self) -> Option<Access> {
		Access::from_repr(self.access)
	}
}

/// `elements` is a run inside `heap.type`.
#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "type.tuple")]
pub struct TupleType {
	pub elements: Sequence,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "type.lvalue-reference")]
pub struct LvalueReferenceType {
	pub referee: TypeIndex,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "type.rvalue-reference")]
pub struct RvalueReferenceType {
	pub referee: TypeIndex,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "type.qualified")]
pub struct QualifiedType {
	pub unqualified: TypeIndex,
	pub qualifiers: u32,
}

impl QualifiedType {
	pub fn qualifiers(&self) -> Qualifiers {
		Qualifiers::from_bits_truncate(self.qualifiers)
	}
}

/// A type universally quantified over a chart of parameters.
#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "type.forall")]
pub struct ForallType {
	pub chart: ChartIndex,
	pub subject: TypeIndex,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "type.syntax")]
pub struct SyntaxType {
	pub syntax: SyntaxIndex,
}

/// `auto` or a constrained placeholder.
#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "type.placeholder")]
pub struct PlaceholderType {
	pub constraint: ExprIndex,
	pub basis: u32,
	pub elaboration: TypeIndex,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "type.typename")]
pub struct TypenameType {
	pub path: ExprIndex,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "type.decltype")]
pub struct DecltypeType {
	pub argument: ExprIndex,
}
