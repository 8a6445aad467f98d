mod dashboard;

pub use dashboard::SalesAnalyticsDashboard;
