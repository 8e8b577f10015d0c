mod common;

use std::collections::HashMap;

use common::ArtifactBuilder;

use ifc::indices::{
	AttrIndex, AttrSort, ChartIndex, ChartSort, DeclIndex, DeclSort, ExprIndex, Index, NameIndex,
	NameSort, ScopeIndex, TextOffset, TypeIndex, TypeSort, UnitIndex, UnitSort,
};
use ifc::records::{
	Declaration, FundamentalType, ModuleReference, OperatorName, ParameterDecl, ScopeDecl,
	SourceLocation, TemplateDecl, TypeBasis, UnilevelChart,
};
use ifc::reflection::{Chart, Module, Name, ScopeDeclaration, TemplateDeclaration};
use ifc::traits::{AttributeAssoc, DeprecationAssoc, FriendshipAssoc, SpecializationAssoc};
use ifc::{Environment, File, ReadError, Sequence};

fn attr(position: u32) -> AttrIndex {
	AttrIndex::new(AttrSort::Basic, position)
}

#[test]
fn attribute_union_preserves_order() {
	let decl = DeclIndex::new(DeclSort::Function, 7);
	let other = DeclIndex::new(DeclSort::Function, 9);
	let mut builder = ArtifactBuilder::new();
	builder
		.partition(&[
			AttributeAssoc {
				decl: other,
				attribute: attr(5),
			},
			AttributeAssoc {
				decl,
				attribute: attr(1),
			},
		])
		.partition_named(
			".msvc.trait.decl-attrs",
			&[AttributeAssoc {
				decl,
				attribute: attr(2),
			}],
		);
	let blob = builder.build();
	let file = File::open(&blob).unwrap();

	assert_eq!(
		file.declaration_attributes(decl).unwrap(),
		&[attr(1), attr(2)]
	);
	assert_eq!(file.declaration_attributes(other).unwrap(), &[attr(5)]);
	assert_eq!(
		file.declaration_attributes(DeclIndex::new(DeclSort::Scope, 0))
			.unwrap(),
		&[]
	);
}

#[test]
fn attribute_queries_are_idempotent() {
	let decl = DeclIndex::new(DeclSort::Variable, 3);
	let mut builder = ArtifactBuilder::new();
	builder.partition(&[AttributeAssoc {
		decl,
		attribute: attr(0),
	}]);
	let blob = builder.build();
	let file = File::open(&blob).unwrap();

	let first = file.declaration_attributes(decl).unwrap();
	let second = file.declaration_attributes(decl).unwrap();
	assert_eq!(first, second);
	assert_eq!(first.as_ptr(), second.as_ptr());
}

#[test]
fn missing_trait_partitions_yield_defaults() {
	let blob = ArtifactBuilder::new().build();
	let file = File::open(&blob).unwrap();
	let decl = DeclIndex::new(DeclSort::Scope, 0);

	assert_eq!(file.declaration_attributes(decl).unwrap(), &[]);
	assert_eq!(file.deprecation_text(decl).unwrap(), TextOffset::NULL);
	assert_eq!(file.class_friendship(decl).unwrap(), Sequence::EMPTY);
	assert_eq!(file.template_specializations(decl).unwrap(), Sequence::EMPTY);
}

#[test]
fn deprecation_and_friendship_last_write_wins() {
	let decl = DeclIndex::new(DeclSort::Scope, 2);
	let mut builder = ArtifactBuilder::new();
	let first = builder.add_string("old message");
	let second = builder.add_string("new message");
	builder
		.partition(&[
			DeprecationAssoc { decl, text: first },
			DeprecationAssoc { decl, text: second },
		])
		.partition(&[
			FriendshipAssoc {
				decl,
				entities: Sequence::new(0, 1),
			},
			FriendshipAssoc {
				decl,
				entities: Sequence::new(4, 2),
			},
		]);
	let blob = builder.build();
	let file = File::open(&blob).unwrap();

	assert_eq!(file.deprecation_text(decl).unwrap(), second);
	assert_eq!(file.get_string(second), Some("new message"));
	assert_eq!(file.class_friendship(decl).unwrap(), Sequence::new(4, 2));
}

struct MapEnvironment<'a> {
	modules: HashMap<String, File<'a>>,
}

impl<'a> Environment<'a> for MapEnvironment<'a> {
	fn get_module_by_name(&self, name: &str) -> Option<&File<'a>> {
		self.modules.get(name)
	}
}

#[test]
fn imported_module_resolution() {
	let mut builder = ArtifactBuilder::new();
	let std_name = builder.add_string("std");
	let owner = builder.add_string("m");
	let part = builder.add_string("impl");
	builder.partition_named(
		"module.imported",
		&[
			ModuleReference {
				owner: TextOffset::NULL,
				partition: std_name,
			},
			ModuleReference {
				owner,
				partition: part,
			},
			ModuleReference {
				owner,
				partition: TextOffset::NULL,
			},
		],
	);
	let blob = builder.build();
	let file = File::open(&blob).unwrap();

	let imports = file.imported_modules().unwrap();
	let names: Vec<_> = imports
		.iter()
		.map(|reference| file.module_reference_name(reference).unwrap())
		.collect();
	assert_eq!(names, ["std", "m:impl", "m"]);

	let other_blob = ArtifactBuilder::new().build();
	let environment = MapEnvironment {
		modules: HashMap::from([("std".to_string(), File::open(&other_blob).unwrap())]),
	};

	let resolved = file
		.get_imported_module(&environment, imports.get(Index::new(0)))
		.unwrap();
	assert_eq!(resolved.table_of_contents().len(), 0);

	let unresolved = file.get_imported_module(&environment, imports.get(Index::new(2)));
	assert!(matches!(
		unresolved,
		Err(ReadError::UnresolvedModule(name)) if name == "m"
	));
}

#[test]
fn name_sort_routing() {
	let mut builder = ArtifactBuilder::new();
	let spelling = builder.add_string("==");
	let identifier = builder.add_string("vector");
	builder.partition(&[OperatorName {
		encoded: spelling,
		operator: 0x21,
	}]);
	let blob = builder.build();
	let file = File::open(&blob).unwrap();

	let operator = Name::resolve(&file, NameIndex::new(NameSort::Operator, 0)).unwrap();
	assert_eq!(
		operator,
		Name::Operator {
			text: "==",
			operator: 0x21,
		}
	);

	let name = Name::resolve(
		&file,
		NameIndex::new(NameSort::Identifier, identifier.value() as u32),
	)
	.unwrap();
	assert_eq!(name.as_identifier(), Some("vector"));

	assert!(matches!(
		Name::resolve(&file, NameIndex::new(NameSort::Operator, 4)),
		Err(ReadError::MalformedIndex { family: "name", .. })
	));
}

fn namespace_type() -> FundamentalType {
	FundamentalType {
		basis: TypeBasis::Namespace as u8,
		precision: 0,
		sign: 0,
		unused: 0,
	}
}

fn class_type() -> FundamentalType {
	FundamentalType {
		basis: TypeBasis::Class as u8,
		precision: 0,
		sign: 0,
		unused: 0,
	}
}

fn scope_decl(name: NameIndex, ty: TypeIndex, members: ScopeIndex) -> ScopeDecl {
	ScopeDecl {
		name,
		locus: SourceLocation { line: 1, column: 1 },
		ty,
		base: TypeIndex::NULL,
		members,
		home_scope: DeclIndex::NULL,
		alignment: ExprIndex::NULL,
		specifiers: 0,
		access: 0,
	}
}

#[test]
fn module_scopes_and_unit() {
	let mut builder = ArtifactBuilder::new();
	let module_name = builder.add_string("m");
	let namespace_name = builder.add_string("N");
	let class_name = builder.add_string("C");
	builder
		.partition(&[namespace_type(), class_type()])
		.partition_named(
			"scope.desc",
			&[Sequence::new(0, 2), Sequence::new(2, 0), Sequence::new(2, 0)],
		)
		.partition(&[
			Declaration {
				index: DeclIndex::new(DeclSort::Scope, 0),
			},
			Declaration {
				index: DeclIndex::new(DeclSort::Scope, 1),
			},
		])
		.partition(&[
			scope_decl(
				NameIndex::new(NameSort::Identifier, namespace_name.value() as u32),
				TypeIndex::new(TypeSort::Fundamental, 0),
				ScopeIndex::new(1),
			),
			scope_decl(
				NameIndex::new(NameSort::Identifier, class_name.value() as u32),
				TypeIndex::new(TypeSort::Fundamental, 1),
				ScopeIndex::new(2),
			),
		])
		.set_global_scope(0)
		.set_unit(UnitIndex::new(
			UnitSort::Primary,
			module_name.value() as u32,
		));
	let blob = builder.build();
	let file = File::open(&blob).unwrap();
	let module = Module::new(&file);

	let unit = module.unit().unwrap();
	assert_eq!(unit.sort(), UnitSort::Primary);
	assert_eq!(unit.name(), Some("m"));

	let global = module.global_namespace().unwrap();
	assert_eq!(global.len(), 2);
	let declarations: Vec<_> = global.declarations().collect();
	assert_eq!(declarations[0], DeclIndex::new(DeclSort::Scope, 0));

	let namespace = ScopeDeclaration::new(&file, declarations[0]).unwrap();
	assert_eq!(namespace.name().unwrap().as_identifier(), Some("N"));
	assert!(namespace.is_namespace().unwrap());
	assert!(!namespace.is_class().unwrap());
	assert!(namespace.members().unwrap().is_empty());

	let class = ScopeDeclaration::new(&file, declarations[1]).unwrap();
	assert_eq!(class.type_basis().unwrap(), Some(TypeBasis::Class));
	assert!(class.is_class().unwrap());

	let walked: Vec<_> = module.scope_declarations().unwrap().collect();
	assert_eq!(walked.len(), 2);
}

fn parameter_decl(name: NameIndex) -> ParameterDecl {
	ParameterDecl {
		name,
		locus: SourceLocation { line: 1, column: 9 },
		ty: TypeIndex::NULL,
		type_constraint: ExprIndex::NULL,
		initializer: ExprIndex::NULL,
		level: 0,
		position: 0,
		properties: 0,
	}
}

#[test]
fn template_chart_and_specializations() {
	let template = DeclIndex::new(DeclSort::Template, 0);
	let mut builder = ArtifactBuilder::new();
	let template_name = builder.add_string("f");
	let parameter_name = builder.add_string("T");
	builder
		.partition(&[parameter_decl(NameIndex::new(
			NameSort::Identifier,
			parameter_name.value() as u32,
		))])
		.partition(&[UnilevelChart {
			requires_clause: ExprIndex::NULL,
			parameters: Sequence::new(0, 1),
		}])
		.partition(&[TemplateDecl {
			name: NameIndex::new(NameSort::Identifier, template_name.value() as u32),
			locus: SourceLocation { line: 3, column: 1 },
			home_scope: DeclIndex::NULL,
			chart: ChartIndex::new(ChartSort::Unilevel, 0),
			entity: DeclIndex::new(DeclSort::Function, 0),
			ty: TypeIndex::NULL,
			specifiers: 0,
			access: 0,
		}])
		.partition(&[SpecializationAssoc {
			decl: template,
			members: Sequence::new(0, 1),
		}])
		.partition(&[Declaration {
			index: DeclIndex::new(DeclSort::Specialization, 0),
		}]);
	let blob = builder.build();
	let file = File::open(&blob).unwrap();

	let declaration = TemplateDeclaration::new(&file, template).unwrap();
	assert_eq!(declaration.name().unwrap().as_identifier(), Some("f"));
	assert_eq!(declaration.entity(), DeclIndex::new(DeclSort::Function, 0));

	match declaration.chart().unwrap() {
		Some(Chart::Unilevel {
			requires_clause,
			parameters,
		}) => {
			assert!(requires_clause.is_null());
			assert_eq!(parameters.len(), 1);
			assert_eq!(
				Name::resolve(&file, parameters[0].name)
					.unwrap()
					.as_identifier(),
				Some("T")
			);
		}
		chart => panic!("expected a unilevel chart, got {chart:?}"),
	}

	let specializations = declaration.specializations().unwrap();
	assert_eq!(specializations.len(), 1);
	assert_eq!(
		specializations[0].index,
		DeclIndex::new(DeclSort::Specialization, 0)
	);
}
