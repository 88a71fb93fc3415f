pub mod compose;
mod constants;
mod fit;
mod grouping;
mod paginate;
mod panel;
mod stats;
mod types;

pub use compose::compose_sheet_plan;
pub use constants::*;
pub use fit::select_best_fit;
pub use grouping::{chunk_keys, group_by_key, rank_key, sort_keys};
pub use paginate::paginate;
pub use panel::panel_box;
pub use stats::plan_statistics;
pub use types::*;
