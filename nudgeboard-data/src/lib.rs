mod config;
mod error;
mod mock;
pub mod models;

pub use config::Config;
pub use error::{NudgeDataError, NudgeDataResult};
pub use mock::MockDashboard;


use crate::models::DashboardSnapshot;

/// Seam between the service and whatever backs the dashboard. The mock
/// fixture implements it today; a real data backend slots in behind it.
pub trait DashboardSource {
    fn fetch(&self) -> impl Future<Output = NudgeDataResult<DashboardSnapshot>> + Send;
}
