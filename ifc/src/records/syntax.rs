//! Syntax-tree records (`syntax.*`, addressed by `SyntaxIndex`).
//!
//! These preserve uninstantiated template bodies token-structure intact;
//! the reader only hands the nodes out, it never interprets them.

use zerocopy::{AsBytes, FromBytes, FromZeroes};

use crate::indices::{ExprIndex, NameIndex, SyntaxIndex};
use crate::partition::{Record, Sequence};
use crate::records::SourceLocation;

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "syntax.decl-specifier-seq")]
pub struct DeclSpecifierSeqSyntax {
	pub locus: SourceLocation,
	pub specifiers: Sequence,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "syntax.simple-type-specifier")]
pub struct SimpleTypeSpecifierSyntax {
	pub locus: SourceLocation,
	pub expr: ExprIndex,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "syntax.type-specifier-seq")]
pub struct TypeSpecifierSeqSyntax {
	pub locus: SourceLocation,
	pub type_specifier: SyntaxIndex,
	pub qualifiers: u32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "syntax.declarator")]
pub struct DeclaratorSyntax {
	pub locus: SourceLocation,
	pub pointer: SyntaxIndex,
	pub initializer: SyntaxIndex,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "syntax.pointer-declarator")]
pub struct PointerDeclaratorSyntax {
	pub locus: SourceLocation,
	pub child: SyntaxIndex,
	pub qualifiers: u32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "syntax.array-declarator")]
pub struct ArrayDeclaratorSyntax {
	pub locus: SourceLocation,
	pub bounds: ExprIndex,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "syntax.function-declarator")]
pub struct FunctionDeclaratorSyntax {
	pub locus: SourceLocation,
	pub parameters: SyntaxIndex,
	pub exception: SyntaxIndex,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "syntax.parameter-declarator")]
pub struct ParameterDeclaratorSyntax {
	pub locus: SourceLocation,
	pub specifiers: SyntaxIndex,
	pub declarator: SyntaxIndex,
	pub default_argument: ExprIndex,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "syntax.expression")]
pub struct ExpressionSyntax {
	pub expression: ExprIndex,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "syntax.expression-list")]
pub struct ExpressionListSyntax {
	pub locus: SourceLocation,
	pub expressions: Sequence,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "syntax.template-id")]
pub struct TemplateIdSyntax {
	pub locus: SourceLocation,
	pub name: NameIndex,
	pub arguments: SyntaxIndex,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "syntax.simple-declaration")]
pub struct SimpleDeclarationSyntax {
	pub locus: SourceLocation,
	pub specifiers: SyntaxIndex,
	pub declarators: SyntaxIndex,
}

/// `statements` is a run inside `heap.syn`.
#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "syntax.compound-statement")]
pub struct CompoundStatementSyntax {
	pub locus: SourceLocation,
	pub statements: Sequence,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "syntax.return-statement")]
pub struct ReturnStatementSyntax {
	pub locus: SourceLocation,
	pub expression: ExprIndex,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "syntax.declaration-statement")]
pub struct DeclarationStatementSyntax {
	pub locus: SourceLocation,
	pub declaration: SyntaxIndex,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "syntax.expression-statement")]
pub struct ExpressionStatementSyntax {
	pub locus: SourceLocation,
	pub expression: ExprIndex,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "syntax.if-statement")]
pub struct IfStatementSyntax {
	pub locus: SourceLocation,
	pub condition: ExprIndex,
	pub consequence: SyntaxIndex,
	pub alternative: SyntaxIndex,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "syntax.while-statement")]
pub struct WhileStatementSyntax {
	pub locus: SourceLocation,
	pub condition: ExprIndex,
	pub body: SyntaxIndex,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "syntax.mem-initializer")]
pub struct MemInitializerSyntax {
	pub locus: SourceLocation,
	pub name: NameIndex,
	pub arguments: ExprIndex,
}

/// `elements` is a run inside `heap.syn`.
#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "syntax.tuple")]
pub struct TupleSyntax {
	pub elements: Sequence,
}
