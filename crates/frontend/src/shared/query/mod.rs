pub mod client;
pub mod hooks;
pub mod stores;
pub mod url_sync;

pub use client::{provide_query_client, use_query_client, QueryClient};
pub use hooks::{use_api_query, use_list_query, use_view_query, QueryState, ViewQuery, ViewQuerySpec};
pub use stores::{provide_query_stores, use_query_stores, QueryStores, DEFAULT_CONTEXT};
pub use url_sync::use_url_sync;
