//! Target-independent types shared by the dashboard UI: the tabular data
//! engine and the store overview dataset.

pub mod dashboards;
pub mod shared;
