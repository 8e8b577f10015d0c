use derivative::Derivative;

use crate::error::ReadError;
use crate::file::File;
use crate::indices::{DeclIndex, PartitionIndex, TextOffset, UnitSort};
use crate::partition::Sequence;
use crate::records::{Declaration, ScopeDecl};
use crate::reflection::ScopeDeclaration;

/// The module unit an artifact represents.
#[derive(Derivative, Copy, Clone)]
#[derivative(Debug)]
pub struct Module<'a> {
	#[derivative(Debug = "ignore")]
	file: &'a File<'a>,
}

impl<'a> Module<'a> {
	pub fn new(file: &'a File<'a>) -> Self {
		Self { file }
	}

	#[inline]
	pub fn file(&self) -> &'a File<'a> {
		self.file
	}

	pub fn unit(&self) -> Result<Unit<'a>, ReadError> {
		let unit = self.file.header().unit;
		let sort = unit.sort().ok_or(ReadError::MalformedIndex {
			family: "unit",
			raw: unit.raw(),
		})?;
		let name = self
			.file
			.get_string(TextOffset::new(unit.position() as u32))
			.filter(|name| !name.is_empty());
		Ok(Unit { sort, name })
	}

	/// The global namespace, as a scope over `global_scope()`.
	pub fn global_namespace(&self) -> Result<Scope<'a>, ReadError> {
		Scope::new(self.file, self.file.global_scope()?)
	}

	/// Walks every scope declaration in the module.
	pub fn scope_declarations(&self) -> Result<ScopeDeclarations<'a>, ReadError> {
		let records = self
			.file
			.try_get_partition::<ScopeDecl, DeclIndex>()?
			.map_or(&[][..], |partition| partition.entries());
		Ok(ScopeDeclarations {
			file: self.file,
			records: records.iter(),
		})
	}
}

/// The description of a module unit: its sort and, when present, the name
/// it was compiled under.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Unit<'a> {
	sort: UnitSort,
	name: Option<&'a str>,
}

impl<'a> Unit<'a> {
	#[inline]
	pub fn sort(&self) -> UnitSort {
		self.sort
	}

	#[inline]
	pub fn name(&self) -> Option<&'a str> {
		self.name
	}
}

/// A run of member declarations.
#[derive(Debug, Copy, Clone)]
pub struct Scope<'a> {
	members: &'a [Declaration],
}

impl<'a> Scope<'a> {
	pub(crate) fn new(file: &'a File<'a>, sequence: Sequence) -> Result<Self, ReadError> {
		let members = if sequence.is_empty() {
			&[]
		} else {
			file.scope_members()?
				.try_slice(sequence)
				.ok_or(ReadError::MalformedIndex {
					family: "member",
					raw: sequence.start.value(),
				})?
		};
		Ok(Self { members })
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.members.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.members.is_empty()
	}

	#[inline]
	pub fn members(&self) -> &'a [Declaration] {
		self.members
	}

	pub fn declarations(&self) -> impl Iterator<Item = DeclIndex> + 'a {
		self.members.iter().map(|member| member.index)
	}
}

/// Iterates the `decl.scope` partition, yielding wrappers.
pub struct ScopeDeclarations<'a> {
	file: &'a File<'a>,
	records: std::slice::Iter<'a, ScopeDecl>,
}

impl<'a> Iterator for ScopeDeclarations<'a> {
	type Item = ScopeDeclaration<'a>;

	fn next(&mut self) -> Option<Self::Item> {
		let record = self.records.next()?;
		Some(ScopeDeclaration::from_record(self.file, record))
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.records.size_hint()
	}
}
