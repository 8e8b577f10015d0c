use crate::error::ReadError;
use crate::file::File;
use crate::indices::{ExprIndex, Index, NameIndex, NameSort, PartitionIndex, TextOffset, TypeIndex};

/// A resolved name. Identifiers carry their string-table payload directly;
/// the other variants surface the fields of their name partition's record.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Name<'a> {
	Identifier(&'a str),
	Operator { text: &'a str, operator: u32 },
	Conversion { target: TypeIndex },
	Literal { suffix: &'a str },
	Template { name: NameIndex },
	Specialization { primary: NameIndex, arguments: ExprIndex },
	SourceFile { path: &'a str, guard: &'a str },
	Guide { primary: NameIndex },
}

impl<'a> Name<'a> {
	/// Routes `index` to the partition selected by its sort tag.
	pub fn resolve(file: &File<'a>, index: NameIndex) -> Result<Self, ReadError> {
		let malformed = || ReadError::MalformedIndex {
			family: "name",
			raw: index.raw(),
		};
		let text = |offset| file.get_string(offset).ok_or_else(malformed);

		match index.sort().ok_or_else(malformed)? {
			NameSort::Identifier => {
				let offset = TextOffset::new(index.position() as u32);
				Ok(Name::Identifier(text(offset)?))
			}
			NameSort::Operator => {
				let record = file.operator_names()?.try_get(index).ok_or_else(malformed)?;
				Ok(Name::Operator {
					text: text(record.encoded)?,
					operator: record.operator,
				})
			}
			NameSort::Conversion => {
				let record = file
					.conversion_names()?
					.try_get(index)
					.ok_or_else(malformed)?;
				Ok(Name::Conversion {
					target: record.target,
				})
			}
			NameSort::Literal => {
				let record = file.literal_names()?.try_get(index).ok_or_else(malformed)?;
				Ok(Name::Literal {
					suffix: text(record.suffix)?,
				})
			}
			NameSort::Template => {
				let record = file.template_names()?.try_get(index).ok_or_else(malformed)?;
				Ok(Name::Template { name: record.name })
			}
			NameSort::Specialization => {
				let record = file
					.specialization_names()?
					.try_get(index)
					.ok_or_else(malformed)?;
				Ok(Name::Specialization {
					primary: record.primary,
					arguments: record.arguments,
				})
			}
			NameSort::SourceFile => {
				let record = file
					.source_file_names()?
					.try_get(index)
					.ok_or_else(malformed)?;
				Ok(Name::SourceFile {
					path: text(record.path)?,
					guard: text(record.guard)?,
				})
			}
			NameSort::Guide => {
				let record = file
					.guide_names()?
					.try_get(Index::new(index.position() as u32))
					.ok_or_else(malformed)?;
				Ok(Name::Guide {
					primary: record.primary,
				})
			}
		}
	}

	/// The identifier text, when this is a plain identifier.
	pub fn as_identifier(&self) -> Option<&'a str> {
		match self {
			Name::Identifier(text) => Some(text),
			_ => None,
		}
	}
}
