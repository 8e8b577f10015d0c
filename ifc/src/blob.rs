use std::fmt::{Debug, Formatter};
use std::ops::Deref;
use std::path::Path;

use zerocopy::AsBytes;

use crate::error::ReadError;
use crate::partition::SizeDebugWrapper;

/// Owned artifact bytes, held at the alignment the reader requires.
///
/// [`File`](crate::File) itself only ever borrows a byte slice; `Blob` is
/// the convenience that makes producing a correctly aligned one easy. Disk
/// reads are copied into an 8-byte aligned heap buffer; memory maps are
/// page aligned already.
pub struct Blob {
	storage: Storage,
}

enum Storage {
	Heap { buffer: Vec<u64>, length: usize },
	#[cfg(feature = "memmap2")]
	Mapped(memmap2::Mmap),
}

impl Blob {
	/// Copies `bytes` into aligned heap storage.
	pub fn from_bytes(bytes: &[u8]) -> Self {
		let mut buffer = vec![0u64; bytes.len().div_ceil(8)];
		buffer.as_mut_slice().as_bytes_mut()[..bytes.len()].copy_from_slice(bytes);
		Self {
			storage: Storage::Heap {
				buffer,
				length: bytes.len(),
			},
		}
	}

	pub fn read(path: impl AsRef<Path>) -> Result<Self, ReadError> {
		Ok(Self::from_bytes(&std::fs::read(path)?))
	}

	#[cfg(feature = "memmap2")]
	pub fn map(path: impl AsRef<Path>) -> Result<Self, ReadError> {
		let file = std::fs::File::open(path)?;
		let map = unsafe { memmap2::Mmap::map(&file) }?;
		Ok(Self {
			storage: Storage::Mapped(map),
		})
	}

	pub fn bytes(&self) -> &[u8] {
		match &self.storage {
			Storage::Heap { buffer, length } => &buffer.as_slice().as_bytes()[..*length],
			#[cfg(feature = "memmap2")]
			Storage::Mapped(map) => map,
		}
	}
}

impl Deref for Blob {
	type Target = [u8];

	#[inline]
	fn deref(&self) -> &Self::Target {
		self.bytes()
	}
}

impl Debug for Blob {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let mut dbg = f.debug_struct("Blob");
		dbg.field("bytes", &SizeDebugWrapper(self.bytes().len()));
		dbg.finish()
	}
}
