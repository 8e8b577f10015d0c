#![allow(dead_code)]

use std::mem::size_of;

use zerocopy::AsBytes;

use ifc::indices::{ByteOffset, Cardinality, ScopeIndex, TextOffset, UnitIndex};
use ifc::{Blob, Header, PartitionSummary, Record, Version, SIGNATURE};

/// Assembles a synthetic artifact: signature, header, partitions packed
/// back to back, the string table (padded to 8 so following regions stay
/// aligned), and the TOC last.
pub struct ArtifactBuilder {
	strings: Vec<u8>,
	partitions: Vec<PendingPartition>,
	global_scope: u32,
	unit: UnitIndex,
	version: Version,
}

struct PendingPartition {
	name: TextOffset,
	entry_size: u32,
	cardinality: u32,
	bytes: Vec<u8>,
}

impl ArtifactBuilder {
	pub fn new() -> Self {
		Self {
			strings: vec![0],
			partitions: Vec::new(),
			global_scope: 0,
			unit: UnitIndex::NULL,
			version: Version { major: 1, minor: 0 },
		}
	}

	pub fn add_string(&mut self, text: &str) -> TextOffset {
		let offset = self.strings.len() as u32;
		self.strings.extend_from_slice(text.as_bytes());
		self.strings.push(0);
		TextOffset::new(offset)
	}

	pub fn partition<T: Record + AsBytes>(&mut self, entries: &[T]) -> &mut Self {
		self.partition_named(T::PARTITION, entries)
	}

	pub fn partition_named<T: AsBytes>(&mut self, name: &str, entries: &[T]) -> &mut Self {
		let mut bytes = Vec::with_capacity(entries.len() * size_of::<T>());
		for entry in entries {
			bytes.extend_from_slice(entry.as_bytes());
		}
		self.partition_raw(name, size_of::<T>() as u32, entries.len() as u32, bytes)
	}

	/// Emits a descriptor verbatim; `bytes.len()` must equal
	/// `entry_size * cardinality` for the artifact to pass the size check.
	pub fn partition_raw(
		&mut self,
		name: &str,
		entry_size: u32,
		cardinality: u32,
		bytes: Vec<u8>,
	) -> &mut Self {
		let name = self.add_string(name);
		self.partitions.push(PendingPartition {
			name,
			entry_size,
			cardinality,
			bytes,
		});
		self
	}

	pub fn set_global_scope(&mut self, index: u32) -> &mut Self {
		self.global_scope = index;
		self
	}

	pub fn set_unit(&mut self, unit: UnitIndex) -> &mut Self {
		self.unit = unit;
		self
	}

	pub fn build_bytes(&self) -> Vec<u8> {
		let mut strings = self.strings.clone();
		while strings.len() % 8 != 0 {
			strings.push(0);
		}

		let mut offset = SIGNATURE.len() + size_of::<Header>();
		let mut summaries = Vec::with_capacity(self.partitions.len());
		let mut body = Vec::new();
		for partition in &self.partitions {
			assert_eq!(
				partition.bytes.len(),
				(partition.entry_size * partition.cardinality) as usize,
				"partition payload does not match its descriptor",
			);
			summaries.push(PartitionSummary {
				name: partition.name,
				offset: ByteOffset::new(offset as u32),
				cardinality: Cardinality::new(partition.cardinality),
				entry_size: Cardinality::new(partition.entry_size),
			});
			body.extend_from_slice(&partition.bytes);
			offset += partition.bytes.len();
		}

		let string_table = offset;
		let toc = string_table + strings.len();

		let header = Header {
			version: self.version,
			toc: ByteOffset::new(toc as u32),
			partition_count: Cardinality::new(self.partitions.len() as u32),
			string_table: ByteOffset::new(string_table as u32),
			string_table_size: Cardinality::new(strings.len() as u32),
			global_scope: ScopeIndex::new(self.global_scope),
			unit: self.unit,
		};

		let mut blob = Vec::new();
		blob.extend_from_slice(&SIGNATURE);
		blob.extend_from_slice(header.as_bytes());
		blob.extend_from_slice(&body);
		blob.extend_from_slice(&strings);
		for summary in &summaries {
			blob.extend_from_slice(summary.as_bytes());
		}
		blob
	}

	pub fn build(&self) -> Blob {
		Blob::from_bytes(&self.build_bytes())
	}
}
