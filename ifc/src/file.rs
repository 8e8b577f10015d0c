use std::mem::size_of;
use std::sync::OnceLock;

use derivative::Derivative;
use fxhash::FxHashMap;
use nohash_hasher::IntMap;
use paste::paste;
use zerocopy::{AsBytes, FromBytes, FromZeroes, Ref};

use crate::error::ReadError;
use crate::indices::{
	AttrIndex, ByteOffset, Cardinality, ChartIndex, DeclIndex, ExprIndex, Index, LitIndex,
	NameIndex, PartitionIndex, ScopeIndex, StringIndex, SyntaxIndex, TextOffset, TypeIndex,
	UnitIndex,
};
use crate::partition::{Partition, Record, Sequence};
use crate::records::*;
use crate::strings::StringTable;
use crate::traits::{AttributeAssoc, DeprecationAssoc, FriendshipAssoc, SpecializationAssoc};

/// The artifact's four-byte magic value.
pub const SIGNATURE: [u8; 4] = [0x54, 0x51, 0x45, 0x1A];

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, FromZeroes, FromBytes, AsBytes)]
pub struct Version {
	pub major: u16,
	pub minor: u16,
}

/// The fixed-layout record immediately following the signature.
#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes)]
pub struct Header {
	pub version: Version,
	pub toc: ByteOffset,
	pub partition_count: Cardinality,
	pub string_table: ByteOffset,
	pub string_table_size: Cardinality,
	pub global_scope: ScopeIndex,
	pub unit: UnitIndex,
}

/// One table-of-contents entry.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, FromZeroes, FromBytes, AsBytes)]
pub struct PartitionSummary {
	pub name: TextOffset,
	pub offset: ByteOffset,
	pub cardinality: Cardinality,
	pub entry_size: Cardinality,
}

/// A lazy, type-indexed view over one artifact.
///
/// The file borrows the blob and owns nothing but memoization state; every
/// partition handle, record reference and string obtained from it borrows
/// the blob directly and outlives the file itself. Lazy state is published
/// with [`OnceLock`], so a file can be shared across threads; a lost
/// publication race only discards an equal value.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct File<'a> {
	#[derivative(Debug = "ignore")]
	blob: &'a [u8],
	header: &'a Header,
	#[derivative(Debug = "ignore")]
	toc: &'a [PartitionSummary],
	strings: StringTable<'a>,
	#[derivative(Debug = "ignore")]
	by_name: FxHashMap<&'a str, PartitionSummary>,
	#[derivative(Debug = "ignore")]
	cache: PartitionCache,
	#[derivative(Debug = "ignore")]
	pub(crate) decl_attributes: OnceLock<IntMap<u32, Vec<AttrIndex>>>,
	#[derivative(Debug = "ignore")]
	pub(crate) deprecations: OnceLock<IntMap<u32, TextOffset>>,
	#[derivative(Debug = "ignore")]
	pub(crate) friendships: OnceLock<IntMap<u32, Sequence>>,
	#[derivative(Debug = "ignore")]
	pub(crate) specializations: OnceLock<IntMap<u32, Sequence>>,
}

impl<'a> File<'a> {
	/// Validates the signature, the header and the size invariant, then
	/// builds the TOC name map. No partition data is touched until an
	/// accessor asks for it.
	#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
	pub fn open(blob: &'a [u8]) -> Result<Self, ReadError> {
		if blob.get(..SIGNATURE.len()) != Some(&SIGNATURE[..]) {
			return Err(ReadError::CorruptedSignature);
		}

		let header_bytes = region(blob, SIGNATURE.len(), size_of::<Header>())?;
		let header = Ref::<_, Header>::new(header_bytes)
			.ok_or(ReadError::CorruptedFile)?
			.into_ref();

		let count = header.partition_count.count();
		let toc_size = count
			.checked_mul(size_of::<PartitionSummary>())
			.ok_or(ReadError::CorruptedFile)?;
		let toc_bytes = region(blob, header.toc.value(), toc_size)?;
		let toc = Ref::<_, [PartitionSummary]>::new_slice(toc_bytes)
			.ok_or(ReadError::CorruptedFile)?
			.into_slice();

		let mut expected = (SIGNATURE.len() + size_of::<Header>()) as u64
			+ header.string_table_size.count() as u64
			+ toc_size as u64;
		for summary in toc {
			expected += summary.cardinality.count() as u64 * summary.entry_size.count() as u64;
		}
		if expected != blob.len() as u64 {
			return Err(ReadError::CorruptedFile);
		}

		let strings = StringTable::new(region(
			blob,
			header.string_table.value(),
			header.string_table_size.count(),
		)?);

		let mut by_name = FxHashMap::with_capacity_and_hasher(count, Default::default());
		for summary in toc {
			let name = strings.get(summary.name).ok_or(ReadError::CorruptedFile)?;
			if by_name.insert(name, *summary).is_some() {
				return Err(ReadError::DuplicatePartition(name.to_string()));
			}
		}

		Ok(Self {
			blob,
			header,
			toc,
			strings,
			by_name,
			cache: PartitionCache::new(),
			decl_attributes: OnceLock::new(),
			deprecations: OnceLock::new(),
			friendships: OnceLock::new(),
			specializations: OnceLock::new(),
		})
	}

	#[inline]
	pub fn header(&self) -> &'a Header {
		self.header
	}

	#[inline]
	pub fn version(&self) -> Version {
		self.header.version
	}

	#[inline]
	pub fn unit(&self) -> UnitIndex {
		self.header.unit
	}

	#[inline]
	pub fn table_of_contents(&self) -> &'a [PartitionSummary] {
		self.toc
	}

	#[inline]
	pub fn string_table(&self) -> StringTable<'a> {
		self.strings
	}

	#[inline]
	pub fn get_string(&self, offset: TextOffset) -> Option<&'a str> {
		self.strings.get(offset)
	}

	/// The member run of the designated global scope.
	pub fn global_scope(&self) -> Result<Sequence, ReadError> {
		let descriptors = self.scope_descriptors()?;
		descriptors
			.try_get(self.header.global_scope)
			.copied()
			.ok_or(ReadError::MalformedIndex {
				family: "scope",
				raw: self.header.global_scope.value(),
			})
	}

	/// Resolves the partition canonically associated with `T`.
	pub fn get_partition<T: Record, I: PartitionIndex>(
		&self,
	) -> Result<Partition<'a, T, I>, ReadError> {
		self.resolve::<T>(T::PARTITION)?
			.map(Partition::new)
			.ok_or(ReadError::MissingPartition(T::PARTITION))
	}

	/// Like [`get_partition`](Self::get_partition), but a partition absent
	/// from the TOC is not an error.
	pub fn try_get_partition<T: Record, I: PartitionIndex>(
		&self,
	) -> Result<Option<Partition<'a, T, I>>, ReadError> {
		Ok(self.resolve::<T>(T::PARTITION)?.map(Partition::new))
	}

	/// Resolves a partition under an explicit format-level name.
	pub fn get_partition_by_name<T: FromBytes + Copy, I: PartitionIndex>(
		&self,
		name: &'static str,
	) -> Result<Partition<'a, T, I>, ReadError> {
		self.resolve::<T>(name)?
			.map(Partition::new)
			.ok_or(ReadError::MissingPartition(name))
	}

	pub fn try_get_partition_by_name<T: FromBytes + Copy, I: PartitionIndex>(
		&self,
		name: &'static str,
	) -> Result<Option<Partition<'a, T, I>>, ReadError> {
		Ok(self.resolve::<T>(name)?.map(Partition::new))
	}

	pub(crate) fn resolve<T: FromBytes + Copy>(
		&self,
		name: &'static str,
	) -> Result<Option<&'a [T]>, ReadError> {
		let Some(summary) = self.by_name.get(name) else {
			return Ok(None);
		};
		let entry_size = summary.entry_size.count();
		if entry_size != size_of::<T>() {
			return Err(ReadError::UnexpectedEntrySize {
				partition: name,
				expected: size_of::<T>(),
				actual: entry_size,
			});
		}
		let size = summary
			.cardinality
			.count()
			.checked_mul(entry_size)
			.ok_or(ReadError::CorruptedFile)?;
		let bytes = region(self.blob, summary.offset.value(), size)?;
		let entries = Ref::<_, [T]>::new_slice(bytes)
			.ok_or(ReadError::MisalignedPartition(name))?
			.into_slice();
		Ok(Some(entries))
	}

	fn cached_partition<T: FromBytes + Copy, I: PartitionIndex>(
		&self,
		slot: Slot,
		name: &'static str,
	) -> Result<Partition<'a, T, I>, ReadError> {
		if let Some(&(address, length)) = self.cache.slot(slot).get() {
			// A slot is only ever written by the accessor that owns it, so
			// re-typing with that accessor's element type is sound. The
			// address points into `self.blob` and shares its lifetime.
			let entries = unsafe { std::slice::from_raw_parts(address as *const T, length) };
			return Ok(Partition::new(entries));
		}
		let entries = self
			.resolve::<T>(name)?
			.ok_or(ReadError::MissingPartition(name))?;
		let _ = self
			.cache
			.slot(slot)
			.set((entries.as_ptr() as usize, entries.len()));
		Ok(Partition::new(entries))
	}
}

fn region<'a>(blob: &'a [u8], offset: usize, size: usize) -> Result<&'a [u8], ReadError> {
	let end = offset.checked_add(size).ok_or(ReadError::CorruptedFile)?;
	blob.get(offset..end).ok_or(ReadError::CorruptedFile)
}

struct PartitionCache {
	slots: [OnceLock<(usize, usize)>; SLOT_COUNT],
}

impl PartitionCache {
	fn new() -> Self {
		Self {
			slots: std::array::from_fn(|_| OnceLock::new()),
		}
	}

	#[inline]
	fn slot(&self, slot: Slot) -> &OnceLock<(usize, usize)> {
		&self.slots[slot as usize]
	}
}

macro_rules! partitions {
	($($accessor:ident => $ty:ty [$index:ty] $(= $name:literal)?),* $(,)?) => { paste! {
		#[repr(usize)]
		#[derive(Debug, Copy, Clone, Eq, PartialEq)]
		enum Slot {
			$([<$accessor:camel>]),*
		}

		const SLOT_COUNT: usize = [$(Slot::[<$accessor:camel>]),*].len();

		impl<'a> File<'a> {
			$(
				pub fn $accessor(&self) -> Result<Partition<'a, $ty, $index>, ReadError> {
					self.cached_partition::<$ty, $index>(
						Slot::[<$accessor:camel>],
						partitions!(@name $ty $(, $name)?),
					)
				}
			)*
		}
	}};
	(@name $ty:ty) => { <$ty as Record>::PARTITION };
	(@name $ty:ty, $name:literal) => { $name };
}

partitions! {
	// Declarations.
	scope_decls => ScopeDecl[DeclIndex],
	template_decls => TemplateDecl[DeclIndex],
	partial_specialization_decls => PartialSpecializationDecl[DeclIndex],
	specialization_decls => SpecializationDecl[DeclIndex],
	using_decls => UsingDecl[DeclIndex],
	enumeration_decls => EnumerationDecl[DeclIndex],
	enumerator_decls => EnumeratorDecl[DeclIndex],
	alias_decls => AliasDecl[DeclIndex],
	reference_decls => ReferenceDecl[DeclIndex],
	function_decls => FunctionDecl[DeclIndex],
	method_decls => MethodDecl[DeclIndex],
	constructor_decls => ConstructorDecl[DeclIndex],
	destructor_decls => DestructorDecl[DeclIndex],
	variable_decls => VariableDecl[DeclIndex],
	parameter_decls => ParameterDecl[DeclIndex],
	field_decls => FieldDecl[DeclIndex],
	friend_decls => FriendDecl[DeclIndex],
	concept_decls => ConceptDecl[DeclIndex],
	intrinsic_decls => IntrinsicDecl[DeclIndex],
	deduction_guide_decls => DeductionGuideDecl[DeclIndex],

	// Types.
	fundamental_types => FundamentalType[TypeIndex],
	designated_types => DesignatedType[TypeIndex],
	tor_types => TorType[TypeIndex],
	syntactic_types => SyntacticType[TypeIndex],
	expansion_types => ExpansionType[TypeIndex],
	pointer_types => PointerType[TypeIndex],
	function_types => FunctionType[TypeIndex],
	method_types => MethodType[TypeIndex],
	array_types => ArrayType[TypeIndex],
	base_types => BaseType[TypeIndex],
	tuple_types => TupleType[TypeIndex],
	lvalue_reference_types => LvalueReferenceType[TypeIndex],
	rvalue_reference_types => RvalueReferenceType[TypeIndex],
	qualified_types => QualifiedType[TypeIndex],
	forall_types => ForallType[TypeIndex],
	syntax_types => SyntaxType[TypeIndex],
	placeholder_types => PlaceholderType[TypeIndex],
	typename_types => TypenameType[TypeIndex],
	decltype_types => DecltypeType[TypeIndex],

	// Attributes.
	basic_attrs => BasicAttr[AttrIndex],
	scoped_attrs => ScopedAttr[AttrIndex],
	labeled_attrs => LabeledAttr[AttrIndex],
	called_attrs => CalledAttr[AttrIndex],
	expanded_attrs => ExpandedAttr[AttrIndex],
	factored_attrs => FactoredAttr[AttrIndex],
	elaborated_attrs => ElaboratedAttr[AttrIndex],
	tuple_attrs => TupleAttr[AttrIndex],

	// Expressions.
	literal_exprs => LiteralExpr[ExprIndex],
	type_exprs => TypeExpr[ExprIndex],
	decl_exprs => DeclExpr[ExprIndex],
	unqualified_id_exprs => UnqualifiedIdExpr[ExprIndex],
	template_id_exprs => TemplateIdExpr[ExprIndex],
	template_reference_exprs => TemplateReferenceExpr[ExprIndex],
	monad_exprs => MonadExpr[ExprIndex],
	dyad_exprs => DyadExpr[ExprIndex],
	string_exprs => StringExpr[ExprIndex],
	call_exprs => CallExpr[ExprIndex],
	sizeof_exprs => SizeofExpr[ExprIndex],
	alignof_exprs => AlignofExpr[ExprIndex],
	requires_exprs => RequiresExpr[ExprIndex],
	tuple_exprs => TupleExpr[ExprIndex],
	path_exprs => PathExpr[ExprIndex],
	read_exprs => ReadExpr[ExprIndex],
	syntax_tree_exprs => SyntaxTreeExpr[ExprIndex],
	expression_list_exprs => ExpressionListExpr[ExprIndex],
	qualified_name_exprs => QualifiedNameExpr[ExprIndex],
	packed_template_arguments_exprs => PackedTemplateArgumentsExpr[ExprIndex],
	product_value_type_exprs => ProductValueTypeExpr[ExprIndex],
	subobject_value_exprs => SubobjectValueExpr[ExprIndex],

	// Syntax trees.
	decl_specifier_seq_syntax => DeclSpecifierSeqSyntax[SyntaxIndex],
	simple_type_specifier_syntax => SimpleTypeSpecifierSyntax[SyntaxIndex],
	type_specifier_seq_syntax => TypeSpecifierSeqSyntax[SyntaxIndex],
	declarator_syntax => DeclaratorSyntax[SyntaxIndex],
	pointer_declarator_syntax => PointerDeclaratorSyntax[SyntaxIndex],
	array_declarator_syntax => ArrayDeclaratorSyntax[SyntaxIndex],
	function_declarator_syntax => FunctionDeclaratorSyntax[SyntaxIndex],
	parameter_declarator_syntax => ParameterDeclaratorSyntax[SyntaxIndex],
	expression_syntax => ExpressionSyntax[SyntaxIndex],
	expression_list_syntax => ExpressionListSyntax[SyntaxIndex],
	template_id_syntax => TemplateIdSyntax[SyntaxIndex],
	simple_declaration_syntax => SimpleDeclarationSyntax[SyntaxIndex],
	compound_statement_syntax => CompoundStatementSyntax[SyntaxIndex],
	return_statement_syntax => ReturnStatementSyntax[SyntaxIndex],
	declaration_statement_syntax => DeclarationStatementSyntax[SyntaxIndex],
	expression_statement_syntax => ExpressionStatementSyntax[SyntaxIndex],
	if_statement_syntax => IfStatementSyntax[SyntaxIndex],
	while_statement_syntax => WhileStatementSyntax[SyntaxIndex],
	mem_initializer_syntax => MemInitializerSyntax[SyntaxIndex],
	tuple_syntax => TupleSyntax[SyntaxIndex],

	// Names.
	operator_names => OperatorName[NameIndex],
	conversion_names => ConversionName[NameIndex],
	literal_names => LiteralName[NameIndex],
	template_names => TemplateName[NameIndex],
	specialization_names => SpecializationName[NameIndex],
	source_file_names => SourceFileName[NameIndex],
	guide_names => GuideName[Index] = "name.guide",

	// Charts.
	unilevel_charts => UnilevelChart[ChartIndex],
	multilevel_charts => MultilevelChart[ChartIndex],

	// Literals.
	integer_literals => IntegerLiteral[LitIndex],
	float_literals => FloatLiteral[LitIndex],
	string_literals => StringLiteral[StringIndex],

	// Scopes.
	scope_descriptors => Sequence[ScopeIndex] = "scope.desc",
	scope_members => Declaration[Index],

	// Heaps.
	type_heap => TypeIndex[Index] = "heap.type",
	expr_heap => ExprIndex[Index] = "heap.expr",
	attr_heap => AttrIndex[Index] = "heap.attr",
	syntax_heap => SyntaxIndex[Index] = "heap.syn",

	// Module references.
	imported_modules => ModuleReference[Index] = "module.imported",
	exported_modules => ModuleReference[Index] = "module.exported",

	// Associated traits.
	attribute_traits => AttributeAssoc[Index],
	msvc_attribute_traits => AttributeAssoc[Index] = ".msvc.trait.decl-attrs",
	deprecation_traits => DeprecationAssoc[Index],
	friendship_traits => FriendshipAssoc[Index],
	specialization_traits => SpecializationAssoc[Index],
}
