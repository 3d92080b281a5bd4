pub mod activity;
pub mod sort;

pub use activity::{ActivityGroup, RecentActivity, recent_since};
pub use sort::sort_by_recency;
