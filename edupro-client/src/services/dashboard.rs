//! Dashboard KPIs

use async_trait::async_trait;
use shared::models::DashboardStats;

use crate::http::HttpClient;
use crate::ClientResult;

pub const DASHBOARD_STATS_PATH: &str = "/dashboard/stats/";

#[async_trait]
pub trait DashboardApi: HttpClient + Sized {
    async fn dashboard_stats(&self) -> ClientResult<DashboardStats> {
        self.get(DASHBOARD_STATS_PATH).await
    }
}

impl<C: HttpClient> DashboardApi for C {}
