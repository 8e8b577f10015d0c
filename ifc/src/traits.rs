//! Associated-trait partitions and the cross-index maps derived from them.
//!
//! Each map is built on first query by scanning its partition(s) and is
//! memoized for the file's lifetime. A missing trait partition is not an
//! error; queries against it see an empty map.

use std::sync::OnceLock;

use nohash_hasher::IntMap;
use zerocopy::{AsBytes, FromBytes, FromZeroes};

use crate::error::ReadError;
use crate::file::File;
use crate::indices::{AttrIndex, DeclIndex, TextOffset};
use crate::partition::{Record, Sequence};

/// Attaches one attribute to a declaration.
#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "trait.attribute")]
pub struct AttributeAssoc {
	pub decl: DeclIndex,
	pub attribute: AttrIndex,
}

/// Attaches a deprecation message to a declaration.
#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "trait.deprecated")]
pub struct DeprecationAssoc {
	pub decl: DeclIndex,
	pub text: TextOffset,
}

/// Attaches the run of friends to a class declaration.
#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "trait.friend")]
pub struct FriendshipAssoc {
	pub decl: DeclIndex,
	pub entities: Sequence,
}

/// Attaches the run of specializations to a template declaration.
#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "trait.specialization")]
pub struct SpecializationAssoc {
	pub decl: DeclIndex,
	pub members: Sequence,
}

impl<'a> File<'a> {
	/// The attributes attached to `decl`, in association order:
	/// `trait.attribute` entries first, then `.msvc.trait.decl-attrs`.
	/// Overlap between the two partitions is preserved, not deduplicated.
	pub fn declaration_attributes(&self, decl: DeclIndex) -> Result<&[AttrIndex], ReadError> {
		let map = self.decl_attribute_map()?;
		Ok(map.get(&decl.raw()).map_or(&[], Vec::as_slice))
	}

	/// The deprecation message attached to `decl`, or the null offset.
	pub fn deprecation_text(&self, decl: DeclIndex) -> Result<TextOffset, ReadError> {
		let map = lazy_map(&self.deprecations, || {
			self.collect_last_writes::<DeprecationAssoc, _>(|assoc| (assoc.decl, assoc.text))
		})?;
		Ok(map.get(&decl.raw()).copied().unwrap_or(TextOffset::NULL))
	}

	/// The friend run attached to class `decl`, or the empty sequence.
	pub fn class_friendship(&self, decl: DeclIndex) -> Result<Sequence, ReadError> {
		let map = lazy_map(&self.friendships, || {
			self.collect_last_writes::<FriendshipAssoc, _>(|assoc| (assoc.decl, assoc.entities))
		})?;
		Ok(map.get(&decl.raw()).copied().unwrap_or(Sequence::EMPTY))
	}

	/// The specialization run attached to template `decl`, or the empty
	/// sequence.
	pub fn template_specializations(&self, decl: DeclIndex) -> Result<Sequence, ReadError> {
		let map = lazy_map(&self.specializations, || {
			self.collect_last_writes::<SpecializationAssoc, _>(|assoc| (assoc.decl, assoc.members))
		})?;
		Ok(map.get(&decl.raw()).copied().unwrap_or(Sequence::EMPTY))
	}

	fn decl_attribute_map(&self) -> Result<&IntMap<u32, Vec<AttrIndex>>, ReadError> {
		lazy_map(&self.decl_attributes, || self.build_decl_attributes())
	}

	#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
	fn build_decl_attributes(&self) -> Result<IntMap<u32, Vec<AttrIndex>>, ReadError> {
		let mut map: IntMap<u32, Vec<AttrIndex>> = IntMap::default();
		let partitions = [
			self.resolve::<AttributeAssoc>(AttributeAssoc::PARTITION)?,
			self.resolve::<AttributeAssoc>(".msvc.trait.decl-attrs")?,
		];
		for assoc in partitions.into_iter().flatten().flatten() {
			map.entry(assoc.decl.raw()).or_default().push(assoc.attribute);
		}
		Ok(map)
	}

	#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
	fn collect_last_writes<T: Record, V>(
		&self,
		project: impl Fn(&T) -> (DeclIndex, V),
	) -> Result<IntMap<u32, V>, ReadError> {
		let mut map = IntMap::default();
		if let Some(entries) = self.resolve::<T>(T::PARTITION)? {
			for entry in entries {
				let (decl, value) = project(entry);
				map.insert(decl.raw(), value);
			}
		}
		Ok(map)
	}
}

/// First call builds, later calls reuse; a lost publication race only
/// discards an equal map.
fn lazy_map<V>(
	cell: &OnceLock<IntMap<u32, V>>,
	build: impl FnOnce() -> Result<IntMap<u32, V>, ReadError>,
) -> Result<&IntMap<u32, V>, ReadError> {
	if let Some(map) = cell.get() {
		return Ok(map);
	}
	let map = build()?;
	Ok(cell.get_or_init(|| map))
}
