pub mod list;
pub mod summary_card;

pub use summary_card::SalesPersonSummaryCard;
