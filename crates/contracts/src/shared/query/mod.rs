//! Filter / period / page / search coordinator
//!
//! Each concern is an independent state value; they meet only in
//! [`ListQuery::build`], which normalizes them into request parameters and a
//! [`QueryKey`] used to decide whether a refetch is needed.

pub mod filters;
pub mod key;
pub mod page;
pub mod params;
pub mod period;
pub mod search;

pub use filters::{Facet, FilterChange, FilterState};
pub use key::QueryKey;
pub use page::{PagePatch, PageState, SortSpec, DEFAULT_PAGE_SIZE};
pub use params::{ListQuery, QueryInputs};
pub use period::{
    format_period_label, month_end, month_start, parse_period_label, NormalizedPeriod,
    PeriodAdvisory, PeriodResolution, PeriodState,
};
pub use search::{SearchPatch, SearchState};
