//! Resolution of inter-module references through an embedder-provided
//! registry.

use crate::error::ReadError;
use crate::file::File;
use crate::records::ModuleReference;

/// Locates sibling module artifacts by name. `'a` is the lifetime of the
/// blobs backing the registry's files.
pub trait Environment<'a> {
	fn get_module_by_name(&self, name: &str) -> Option<&File<'a>>;
}

impl<'a> File<'a> {
	/// The lookup key for a module reference: `owner`, `partition`, or
	/// `owner:partition`, depending on which fields are present.
	pub fn module_reference_name(&self, reference: &ModuleReference) -> Option<String> {
		let owner = self.get_string(reference.owner).filter(|s| !s.is_empty());
		let partition = self
			.get_string(reference.partition)
			.filter(|s| !s.is_empty());
		match (owner, partition) {
			(Some(owner), Some(partition)) => Some(format!("{owner}:{partition}")),
			(Some(owner), None) => Some(owner.to_string()),
			(None, Some(partition)) => Some(partition.to_string()),
			(None, None) => None,
		}
	}

	/// Resolves `reference` against `environment`.
	pub fn get_imported_module<'e>(
		&self,
		environment: &'e dyn Environment<'a>,
		reference: &ModuleReference,
	) -> Result<&'e File<'a>, ReadError> {
		let name = self
			.module_reference_name(reference)
			.ok_or_else(|| ReadError::UnresolvedModule(String::new()))?;
		environment
			.get_module_by_name(&name)
			.ok_or(ReadError::UnresolvedModule(name))
	}
}
