use derivative::Derivative;

use crate::error::ReadError;
use crate::file::File;
use crate::indices::{ChartIndex, ChartSort, DeclIndex, DeclSort, ExprIndex, TypeSort};
use crate::records::{
	Access, BasicSpecifiers, Declaration, ParameterDecl, ScopeDecl, TemplateDecl, TypeBasis,
	UnilevelChart,
};
use crate::reflection::{Name, Scope};

fn malformed(family: &'static str, raw: u32) -> ReadError {
	ReadError::MalformedIndex { family, raw }
}

/// A namespace, class, struct or union declaration.
#[derive(Derivative, Copy, Clone)]
#[derivative(Debug)]
pub struct ScopeDeclaration<'a> {
	#[derivative(Debug = "ignore")]
	file: &'a File<'a>,
	record: &'a ScopeDecl,
}

impl<'a> ScopeDeclaration<'a> {
	pub fn new(file: &'a File<'a>, index: DeclIndex) -> Result<Self, ReadError> {
		if index.sort() != Some(DeclSort::Scope) {
			return Err(malformed("decl", index.raw()));
		}
		let record = file
			.scope_decls()?
			.try_get(index)
			.ok_or_else(|| malformed("decl", index.raw()))?;
		Ok(Self { file, record })
	}

	pub(crate) fn from_record(file: &'a File<'a>, record: &'a ScopeDecl) -> Self {
		Self { file, record }
	}

	#[inline]
	pub fn record(&self) -> &'a ScopeDecl {
		self.record
	}

	pub fn name(&self) -> Result<Name<'a>, ReadError> {
		Name::resolve(self.file, self.record.name)
	}

	#[inline]
	pub fn home_scope(&self) -> DeclIndex {
		self.record.home_scope
	}

	pub fn access(&self) -> Option<Access> {
		self.record.access()
	}

	pub fn specifiers(&self) -> BasicSpecifiers {
		self.record.specifiers()
	}

	/// The `TypeBasis` of this scope's fundamental type, when it has one.
	pub fn type_basis(&self) -> Result<Option<TypeBasis>, ReadError> {
		let ty = self.record.ty;
		if ty.sort() != Some(TypeSort::Fundamental) {
			return Ok(None);
		}
		let record = self
			.file
			.fundamental_types()?
			.try_get(ty)
			.ok_or_else(|| malformed("type", ty.raw()))?;
		Ok(record.basis())
	}

	pub fn is_namespace(&self) -> Result<bool, ReadError> {
		Ok(matches!(self.type_basis()?, Some(TypeBasis::Namespace)))
	}

	pub fn is_class(&self) -> Result<bool, ReadError> {
		Ok(matches!(
			self.type_basis()?,
			Some(TypeBasis::Class | TypeBasis::Struct | TypeBasis::Union)
		))
	}

	/// The run of member declarations inside this scope.
	pub fn members(&self) -> Result<Scope<'a>, ReadError> {
		let descriptors = self.file.scope_descriptors()?;
		let sequence = descriptors
			.try_get(self.record.members)
			.copied()
			.ok_or_else(|| malformed("scope", self.record.members.value()))?;
		Scope::new(self.file, sequence)
	}
}

/// A template declaration together with its parameter chart.
#[derive(Derivative, Copy, Clone)]
#[derivative(Debug)]
pub struct TemplateDeclaration<'a> {
	#[derivative(Debug = "ignore")]
	file: &'a File<'a>,
	index: DeclIndex,
	record: &'a TemplateDecl,
}

impl<'a> TemplateDeclaration<'a> {
	pub fn new(file: &'a File<'a>, index: DeclIndex) -> Result<Self, ReadError> {
		if index.sort() != Some(DeclSort::Template) {
			return Err(malformed("decl", index.raw()));
		}
		let record = file
			.template_decls()?
			.try_get(index)
			.ok_or_else(|| malformed("decl", index.raw()))?;
		Ok(Self {
			file,
			index,
			record,
		})
	}

	#[inline]
	pub fn record(&self) -> &'a TemplateDecl {
		self.record
	}

	pub fn name(&self) -> Result<Name<'a>, ReadError> {
		Name::resolve(self.file, self.record.name)
	}

	/// The templated entity itself.
	#[inline]
	pub fn entity(&self) -> DeclIndex {
		self.record.entity
	}

	pub fn chart(&self) -> Result<Option<Chart<'a>>, ReadError> {
		if self.record.chart.is_null() {
			return Ok(None);
		}
		Chart::resolve(self.file, self.record.chart).map(Some)
	}

	/// The specializations recorded for this template, as a run of scope
	/// members.
	pub fn specializations(&self) -> Result<&'a [Declaration], ReadError> {
		let sequence = self.file.template_specializations(self.index)?;
		if sequence.is_empty() {
			return Ok(&[]);
		}
		self.file
			.scope_members()?
			.try_slice(sequence)
			.ok_or_else(|| malformed("member", sequence.start.value()))
	}
}

/// A resolved template parameter chart.
#[derive(Debug, Copy, Clone)]
pub enum Chart<'a> {
	Unilevel {
		requires_clause: ExprIndex,
		parameters: &'a [ParameterDecl],
	},
	Multilevel(&'a [UnilevelChart]),
}

impl<'a> Chart<'a> {
	pub fn resolve(file: &File<'a>, index: ChartIndex) -> Result<Self, ReadError> {
		match index.sort().ok_or_else(|| malformed("chart", index.raw()))? {
			ChartSort::Unilevel => {
				let chart = file
					.unilevel_charts()?
					.try_get(index)
					.ok_or_else(|| malformed("chart", index.raw()))?;
				let parameters = if chart.parameters.is_empty() {
					&[]
				} else {
					file.parameter_decls()?
						.try_slice(chart.parameters)
						.ok_or_else(|| malformed("parameter", chart.parameters.start.value()))?
				};
				Ok(Chart::Unilevel {
					requires_clause: chart.requires_clause,
					parameters,
				})
			}
			ChartSort::Multilevel => {
				let chart = file
					.multilevel_charts()?
					.try_get(index)
					.ok_or_else(|| malformed("chart", index.raw()))?;
				let charts = if chart.charts.is_empty() {
					&[]
				} else {
					file.unilevel_charts()?
						.try_slice(chart.charts)
						.ok_or_else(|| malformed("chart", chart.charts.start.value()))?
				};
				Ok(Chart::Multilevel(charts))
			}
		}
	}
}
