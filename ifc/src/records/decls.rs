//! Declaration records (`decl.*`, addressed by `DeclIndex`).

use bitflags::bitflags;
use zerocopy::{AsBytes, FromBytes, FromZeroes};

use crate::indices::{ChartIndex, DeclIndex, ExprIndex, Index, NameIndex, ScopeIndex, TypeIndex};
use crate::partition::{Record, Sequence};
use crate::records::{Access, SourceLocation};

bitflags! {
	/// Specifiers shared by most declaration kinds.
	#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
	pub struct BasicSpecifiers: u32 {
		/// Has C language linkage.
		const C_LINKAGE = 1 << 0;
		/// Internal linkage.
		const INTERNAL = 1 << 1;
		/// Entity merged across translation units.
		const VAGUE = 1 << 2;
		/// Declared but not defined in this unit.
		const EXTERNAL = 1 << 3;
		/// Carries a deprecation notice.
		const DEPRECATED = 1 << 4;
		/// Member initialized inside the class definition.
		const INITIALIZED_IN_CLASS = 1 << 5;
		/// Not reachable through the module's interface.
		const NON_EXPORTED = 1 << 6;
	}

	/// Traits of functions and special member functions.
	#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
	pub struct FunctionTraits: u32 {
		const INLINE = 1 << 0;
		const CONSTEXPR = 1 << 1;
		const EXPLICIT = 1 << 2;
		const VIRTUAL = 1 << 3;
		const PURE_VIRTUAL = 1 << 4;
		const OVERRIDE = 1 << 5;
		const FINAL = 1 << 6;
		const DEFAULTED = 1 << 7;
		const DELETED = 1 << 8;
		const NO_RETURN = 1 << 9;
	}
}

macro_rules! impl_decl_specifiers {
	($($ty:ty),* $(,)?) => {$(
		impl $ty {
			pub fn specifiers(&self) -> BasicSpecifiers {
				BasicSpecifiers::from_bits_truncate(self.specifiers)
			}

			pub fn access(&self) -> Option<Access> {
				Access::from_repr(self.access)
			}
		}
	)*};
}

macro_rules! impl_function_traits {
	($($ty:ty),* $(,)?) => {$(
		impl $ty {
			pub fn traits(&self) -> FunctionTraits {
				FunctionTraits::from_bits_truncate(self.traits)
			}
		}
	)*};
}

/// A namespace, class, struct or union; `members` designates the scope
/// descriptor holding its member run.
#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "decl.scope")]
pub struct ScopeDecl {
	pub name: NameIndex,
	pub locus: SourceLocation,
	pub ty: TypeIndex,
	pub base: TypeIndex,
	pub members: ScopeIndex,
	pub home_scope: DeclIndex,
	pub alignment: ExprIndex,
	pub specifiers: u32,
	pub access: u32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "decl.template")]
pub struct TemplateDecl {
	pub name: NameIndex,
	pub locus: SourceLocation,
	pub home_scope: DeclIndex,
	pub chart: ChartIndex,
	pub entity: DeclIndex,
	pub ty: TypeIndex,
	pub specifiers: u32,
	pub access: u32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "decl.partial-specialization")]
pub struct PartialSpecializationDecl {
	pub name: NameIndex,
	pub locus: SourceLocation,
	pub home_scope: DeclIndex,
	pub chart: ChartIndex,
	pub entity: DeclIndex,
	pub primary: DeclIndex,
	pub specifiers: u32,
	pub access: u32,
}

/// An instantiation of a primary template with concrete arguments.
#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "decl.specialization")]
pub struct SpecializationDecl {
	pub primary: DeclIndex,
	pub arguments: ExprIndex,
	pub decl: DeclIndex,
	pub mode: u32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "decl.using")]
pub struct UsingDecl {
	pub name: NameIndex,
	pub locus: SourceLocation,
	pub home_scope: DeclIndex,
	pub resolution: DeclIndex,
	pub parent: ExprIndex,
	pub specifiers: u32,
	pub access: u32,
}

/// `initializer` is the run of enumerators inside `decl.enumerator`.
#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "decl.enum")]
pub struct EnumerationDecl {
	pub name: NameIndex,
	pub locus: SourceLocation,
	pub ty: TypeIndex,
	pub base: TypeIndex,
	pub initializer: Sequence,
	pub home_scope: DeclIndex,
	pub specifiers: u32,
	pub access: u32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "decl.enumerator")]
pub struct EnumeratorDecl {
	pub name: NameIndex,
	pub locus: SourceLocation,
	pub ty: TypeIndex,
	pub initializer: ExprIndex,
	pub specifiers: u32,
	pub access: u32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "decl.alias")]
pub struct AliasDecl {
	pub name: NameIndex,
	pub locus: SourceLocation,
	pub home_scope: DeclIndex,
	pub aliasee: TypeIndex,
	pub specifiers: u32,
	pub access: u32,
}

/// A declaration owned by another translation unit; `unit` designates the
/// entry in `module.imported` it comes from.
#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "decl.reference")]
pub struct ReferenceDecl {
	pub unit: Index,
	pub local_index: DeclIndex,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "decl.function")]
pub struct FunctionDecl {
	pub name: NameIndex,
	pub locus: SourceLocation,
	pub ty: TypeIndex,
	pub home_scope: DeclIndex,
	pub chart: ChartIndex,
	pub traits: u32,
	pub specifiers: u32,
	pub access: u32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "decl.method")]
pub struct MethodDecl {
	pub name: NameIndex,
	pub locus: SourceLocation,
	pub ty: TypeIndex,
	pub home_scope: DeclIndex,
	pub chart: ChartIndex,
	pub traits: u32,
	pub specifiers: u32,
	pub access: u32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "decl.constructor")]
pub struct ConstructorDecl {
	pub name: NameIndex,
	pub locus: SourceLocation,
	pub ty: TypeIndex,
	pub home_scope: DeclIndex,
	pub chart: ChartIndex,
	pub traits: u32,
	pub specifiers: u32,
	pub access: u32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "decl.destructor")]
pub struct DestructorDecl {
	pub name: NameIndex,
	pub locus: SourceLocation,
	pub home_scope: DeclIndex,
	pub eh_spec: ExprIndex,
	pub traits: u32,
	pub specifiers: u32,
	pub access: u32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "decl.variable")]
pub struct VariableDecl {
	pub name: NameIndex,
	pub locus: SourceLocation,
	pub ty: TypeIndex,
	pub home_scope: DeclIndex,
	pub initializer: ExprIndex,
	pub alignment: ExprIndex,
	pub specifiers: u32,
	pub access: u32,
}

/// `level` and `position` locate the parameter within a (possibly
/// multilevel) parameter list.
#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "decl.parameter")]
pub struct ParameterDecl {
	pub name: NameIndex,
	pub locus: SourceLocation,
	pub ty: TypeIndex,
	pub type_constraint: ExprIndex,
	pub initializer: ExprIndex,
	pub level: u32,
	pub position: u32,
	pub properties: u32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "decl.field")]
pub struct FieldDecl {
	pub name: NameIndex,
	pub locus: SourceLocation,
	pub ty: TypeIndex,
	pub home_scope: DeclIndex,
	pub initializer: ExprIndex,
	pub alignment: ExprIndex,
	pub specifiers: u32,
	pub access: u32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "decl.friend")]
pub struct FriendDecl {
	pub entity: ExprIndex,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "decl.concept")]
pub struct ConceptDecl {
	pub name: NameIndex,
	pub locus: SourceLocation,
	pub home_scope: DeclIndex,
	pub ty: TypeIndex,
	pub chart: ChartIndex,
	pub constraint: ExprIndex,
	pub specifiers: u32,
	pub access: u32,
}

/// A compiler-provided entity with no source-level definition.
#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "decl.intrinsic")]
pub struct IntrinsicDecl {
	pub name: NameIndex,
	pub locus: SourceLocation,
	pub ty: TypeIndex,
	pub home_scope: DeclIndex,
	pub specifiers: u32,
	pub access: u32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "decl.guide")]
pub struct DeductionGuideDecl {
	pub name: NameIndex,
	pub locus: SourceLocation,
	pub home_scope: DeclIndex,
	pub source: TypeIndex,
	pub target: TypeIndex,
	pub specifiers: u32,
}

impl_decl_specifiers! {
	ScopeDecl,
	TemplateDecl,
	PartialSpecializationDecl,
	UsingDecl,
	EnumerationDecl,
	EnumeratorDecl,
	AliasDecl,
	FunctionDecl,
	MethodDecl,
	ConstructorDecl,
	DestructorDecl,
	VariableDecl,
	FieldDecl,
	ConceptDecl,
	IntrinsicDecl,
}

impl_function_traits! {
	FunctionDecl,
	MethodDecl,
	ConstructorDecl,
	DestructorDecl,
}
