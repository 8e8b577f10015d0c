//! Expression records (`expr.*`, addressed by `ExprIndex`).

use zerocopy::{AsBytes, FromBytes, FromZeroes};

use crate::indices::{DeclIndex, ExprIndex, LitIndex, NameIndex, StringIndex, SyntaxIndex, TypeIndex};
use crate::partition::{Record, Sequence};
use crate::records::SourceLocation;

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "expr.literal")]
pub struct LiteralExpr {
	pub locus: SourceLocation,
	pub ty: TypeIndex,
	pub value: LitIndex,
}

/// A type in expression position.
#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "expr.type")]
pub struct TypeExpr {
	pub locus: SourceLocation,
	pub denotation: TypeIndex,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "expr.decl")]
pub struct DeclExpr {
	pub locus: SourceLocation,
	pub ty: TypeIndex,
	pub decl: DeclIndex,
}

/// An id-expression before name resolution; `resolution` is null when the
/// name never resolved.
#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "expr.unqualified-id")]
pub struct UnqualifiedIdExpr {
	pub locus: SourceLocation,
	pub ty: TypeIndex,
	pub name: NameIndex,
	pub resolution: DeclIndex,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "expr.template-id")]
pub struct TemplateIdExpr {
	pub locus: SourceLocation,
	pub ty: TypeIndex,
	pub primary: ExprIndex,
	pub arguments: ExprIndex,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "expr.template-reference")]
pub struct TemplateReferenceExpr {
	pub locus: SourceLocation,
	pub ty: TypeIndex,
	pub member: NameIndex,
	pub parent: TypeIndex,
	pub template_arguments: ExprIndex,
}

/// A unary operation.
#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "expr.monad")]
pub struct MonadExpr {
	pub locus: SourceLocation,
	pub ty: TypeIndex,
	pub op: u32,
	pub argument: ExprIndex,
}

/// A binary operation.
#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "expr.dyad")]
pub struct DyadExpr {
	pub locus: SourceLocation,
	pub ty: TypeIndex,
	pub op: u32,
	pub arguments: [ExprIndex; 2],
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "expr.string")]
pub struct StringExpr {
	pub locus: SourceLocation,
	pub ty: TypeIndex,
	pub string: StringIndex,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "expr.call")]
pub struct CallExpr {
	pub locus: SourceLocation,
	pub ty: TypeIndex,
	pub function: ExprIndex,
	pub arguments: ExprIndex,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "expr.sizeof")]
pub struct SizeofExpr {
	pub locus: SourceLocation,
	pub ty: TypeIndex,
	pub operand: TypeIndex,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "expr.alignof")]
pub struct AlignofExpr {
	pub locus: SourceLocation,
	pub ty: TypeIndex,
	pub operand: TypeIndex,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "expr.requires")]
pub struct RequiresExpr {
	pub locus: SourceLocation,
	pub ty: TypeIndex,
	pub parameters: SyntaxIndex,
	pub body: SyntaxIndex,
}

/// `elements` is a run inside `heap.expr`.
#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "expr.tuple")]
pub struct TupleExpr {
	pub locus: SourceLocation,
	pub ty: TypeIndex,
	pub elements: Sequence,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "expr.path")]
pub struct PathExpr {
	pub locus: SourceLocation,
	pub ty: TypeIndex,
	pub scope: ExprIndex,
	pub member: ExprIndex,
}

/// An lvalue-to-rvalue conversion.
#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "expr.read")]
pub struct ReadExpr {
	pub locus: SourceLocation,
	pub ty: TypeIndex,
	pub child: ExprIndex,
	pub kind: u32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "expr.syntax-tree")]
pub struct SyntaxTreeExpr {
	pub syntax: SyntaxIndex,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "expr.list")]
pub struct ExpressionListExpr {
	pub locus: SourceLocation,
	pub elements: Sequence,
	pub delimiter: u32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "expr.qualified-name")]
pub struct QualifiedNameExpr {
	pub locus: SourceLocation,
	pub ty: TypeIndex,
	pub elements: ExprIndex,
	pub last: ExprIndex,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "expr.packed-template-arguments")]
pub struct PackedTemplateArgumentsExpr {
	pub locus: SourceLocation,
	pub ty: TypeIndex,
	pub arguments: ExprIndex,
}

/// A structured constant of class type.
#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "expr.product-value-type")]
pub struct ProductValueTypeExpr {
	pub locus: SourceLocation,
	pub structure: TypeIndex,
	pub members: ExprIndex,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "expr.subobject-value")]
pub struct SubobjectValueExpr {
	pub locus: SourceLocation,
	pub ty: TypeIndex,
	pub value: ExprIndex,
	pub field: u32,
}
