mod common;

use common::ArtifactBuilder;

use ifc::indices::{DeclIndex, Index, TextOffset, TypeIndex, TypeSort};
use ifc::records::{Declaration, IntegerLiteral, ScopeDecl, TupleType};
use ifc::{Blob, File, ReadError, Sequence};

#[test]
fn minimal_artifact_opens() {
	let blob = ArtifactBuilder::new().build();
	let file = File::open(&blob).unwrap();
	assert_eq!(file.table_of_contents().len(), 0);
	assert_eq!(file.version().major, 1);
}

#[test]
fn rejects_bad_signature() {
	let mut bytes = ArtifactBuilder::new().build_bytes();
	bytes[0] = 0xFF;
	let blob = Blob::from_bytes(&bytes);
	assert!(matches!(
		File::open(&blob),
		Err(ReadError::CorruptedSignature)
	));
}

#[test]
fn rejects_empty_blob() {
	assert!(matches!(
		File::open(&[]),
		Err(ReadError::CorruptedSignature)
	));
}

#[test]
fn rejects_tampered_partition_count() {
	let mut builder = ArtifactBuilder::new();
	builder
		.partition_named("scope.desc", &[Sequence::EMPTY])
		.partition_named("scope.member", &[Declaration {
			index: DeclIndex::NULL,
		}]);
	let mut bytes = builder.build_bytes();
	// partition_count lives at bytes 12..16 of the artifact.
	bytes[12..16].copy_from_slice(&1u32.to_le_bytes());
	let blob = Blob::from_bytes(&bytes);
	assert!(matches!(File::open(&blob), Err(ReadError::CorruptedFile)));
}

#[test]
fn rejects_tampered_string_table_size() {
	let mut builder = ArtifactBuilder::new();
	builder.partition_named("scope.desc", &[Sequence::EMPTY]);
	let mut bytes = builder.build_bytes();
	// string_table_size lives at bytes 20..24 of the artifact.
	let size = u32::from_le_bytes(bytes[20..24].try_into().unwrap());
	bytes[20..24].copy_from_slice(&(size - 1).to_le_bytes());
	let blob = Blob::from_bytes(&bytes);
	assert!(matches!(File::open(&blob), Err(ReadError::CorruptedFile)));
}

#[test]
fn rejects_truncated_blob() {
	let mut bytes = ArtifactBuilder::new().build_bytes();
	bytes.pop();
	let blob = Blob::from_bytes(&bytes);
	assert!(matches!(File::open(&blob), Err(ReadError::CorruptedFile)));
}

#[test]
fn rejects_duplicate_partition_names() {
	let mut builder = ArtifactBuilder::new();
	builder
		.partition_named("scope.desc", &[Sequence::EMPTY])
		.partition_named("scope.desc", &[Sequence::EMPTY]);
	let blob = builder.build();
	assert!(matches!(
		File::open(&blob),
		Err(ReadError::DuplicatePartition(name)) if name == "scope.desc"
	));
}

#[test]
fn entry_size_guard() {
	let mut builder = ArtifactBuilder::new();
	builder.partition_raw("scope.desc", 12, 1, vec![0; 12]);
	let blob = builder.build();
	let file = File::open(&blob).unwrap();
	assert!(matches!(
		file.scope_descriptors(),
		Err(ReadError::UnexpectedEntrySize {
			partition: "scope.desc",
			expected: 8,
			actual: 12,
		})
	));
}

#[test]
fn missing_required_partition() {
	let blob = ArtifactBuilder::new().build();
	let file = File::open(&blob).unwrap();
	assert!(matches!(
		file.scope_descriptors(),
		Err(ReadError::MissingPartition("scope.desc"))
	));
	assert!(matches!(
		file.try_get_partition::<ScopeDecl, DeclIndex>(),
		Ok(None)
	));
}

#[test]
fn misaligned_partition() {
	let mut builder = ArtifactBuilder::new();
	// One 4-byte record pushes the literal partition off 8-byte alignment.
	builder
		.partition_named("scope.member", &[Declaration {
			index: DeclIndex::NULL,
		}])
		.partition(&[IntegerLiteral { value: 7 }]);
	let blob = builder.build();
	let file = File::open(&blob).unwrap();
	assert!(matches!(
		file.integer_literals(),
		Err(ReadError::MisalignedPartition("literal.integer"))
	));
}

#[test]
fn cache_returns_identical_views() {
	let mut builder = ArtifactBuilder::new();
	builder.partition_named("scope.desc", &[Sequence::new(0, 0), Sequence::new(0, 1)]);
	let blob = builder.build();
	let file = File::open(&blob).unwrap();

	let first = file.scope_descriptors().unwrap();
	let second = file.scope_descriptors().unwrap();
	assert_eq!(first.entries().as_ptr(), second.entries().as_ptr());
	assert_eq!(first.len(), second.len());
}

#[test]
fn global_scope_descriptor() {
	let mut builder = ArtifactBuilder::new();
	builder
		.partition_named("scope.desc", &[Sequence::new(0, 0)])
		.set_global_scope(0);
	let blob = builder.build();
	let file = File::open(&blob).unwrap();
	assert_eq!(file.global_scope().unwrap(), Sequence::new(0, 0));
}

#[test]
fn heap_sequences_slice() {
	let elements = [
		TypeIndex::new(TypeSort::Fundamental, 0),
		TypeIndex::new(TypeSort::Pointer, 0),
		TypeIndex::new(TypeSort::Fundamental, 1),
	];
	let mut builder = ArtifactBuilder::new();
	builder
		.partition_named("heap.type", &elements)
		.partition(&[TupleType {
			elements: Sequence::new(1, 2),
		}]);
	let blob = builder.build();
	let file = File::open(&blob).unwrap();

	let heap = file.type_heap().unwrap();
	let tuple = *file
		.tuple_types()
		.unwrap()
		.get(TypeIndex::new(TypeSort::Tuple, 0));
	assert_eq!(heap.slice(tuple.elements), &elements[1..3]);
	assert_eq!(heap.try_slice(Sequence::new(2, 2)), None);
	assert_eq!(*heap.get(Index::new(1)), elements[1]);
}

#[test]
fn string_table_lookup() {
	let mut builder = ArtifactBuilder::new();
	let vector = builder.add_string("vector");
	let empty = builder.add_string("");
	let blob = builder.build();
	let file = File::open(&blob).unwrap();

	assert_eq!(file.get_string(vector), Some("vector"));
	assert_eq!(file.get_string(empty), Some(""));
	assert_eq!(file.get_string(TextOffset::NULL), Some(""));
	assert_eq!(
		file.get_string(TextOffset::new(0xFFFF)),
		None
	);
}
