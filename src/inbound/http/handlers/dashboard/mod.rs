mod stats;

pub use stats::dashboard_stats;
