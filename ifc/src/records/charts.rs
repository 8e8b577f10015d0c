//! Template parameter charts (`chart.*`, addressed by `ChartIndex`).

use zerocopy::{AsBytes, FromBytes, FromZeroes};

use crate::indices::ExprIndex;
use crate::partition::{Record, Sequence};

/// One level of template parameters: a run inside `decl.parameter` plus an
/// optional requires-clause.
#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "chart.unilevel")]
pub struct UnilevelChart {
	pub requires_clause: ExprIndex,
	pub parameters: Sequence,
}

/// A nested parameter list: a run of unilevel charts, outermost first.
#[repr(C)]
#[derive(Debug, Copy, Clone, FromZeroes, FromBytes, AsBytes, Record)]
#[record(partition = "chart.multilevel")]
pub struct MultilevelChart {
	pub charts: Sequence,
}
