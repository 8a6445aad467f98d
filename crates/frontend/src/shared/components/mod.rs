pub mod advisory_notice;
pub mod facet_filter;
pub mod filter_panel;
pub mod floating_filter_button;
pub mod pagination_controls;
pub mod period_picker;
pub mod search_input;
pub mod sortable_header;
pub mod stat_card;
pub mod table_cell_money;
pub mod toast;
