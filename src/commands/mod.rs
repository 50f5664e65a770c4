//! Command implementations

pub mod curate;
pub mod serve;

pub use curate::{CurateConfig, CurationOutcome, run_curate};
pub use serve::{ServeConfig, prepare_store, run_serve};
