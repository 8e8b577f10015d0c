use std::fmt::{Debug, Formatter};

use crate::indices::TextOffset;
use crate::partition::SizeDebugWrapper;

/// The artifact's string table: NUL-terminated UTF-8 strings addressed by
/// [`TextOffset`]. Offset 0 conventionally holds the empty string.
#[derive(Copy, Clone)]
pub struct StringTable<'a> {
	data: &'a [u8],
}

impl<'a> StringTable<'a> {
	pub(crate) fn new(data: &'a [u8]) -> Self {
		Self { data }
	}

	pub fn size(&self) -> usize {
		self.data.len()
	}

	pub fn get(&self, offset: TextOffset) -> Option<&'a str> {
		let slice = self.data.get(offset.value()..)?;
		let end = slice.iter().position(|c| *c == 0)?;
		std::str::from_utf8(&slice[..end]).ok()
	}
}

impl Debug for StringTable<'_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let mut dbg = f.debug_struct("StringTable");
		dbg.field("data", &SizeDebugWrapper(self.data.len()));
		dbg.finish()
	}
}
