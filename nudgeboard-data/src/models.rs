#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub stats: Stats,
    pub monthly_engagement: Vec<EngagementPoint>,
    pub content_performance: Vec<ContentSlice>,
    pub upcoming_milestones: Vec<Milestone>,
    pub recent_activity: Vec<Activity>,
}

/// Top-level marketing KPIs.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub clients_on_track: u32,
    pub avg_progress_score: u32,
    pub new_leads_this_month: u32,
    pub avg_time_in_plan: u32,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct EngagementPoint {
    pub month: String,
    pub engagement: u32,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ContentSlice {
    pub name: String,
    pub value: u32,
    pub color: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Milestone {
    pub name: String,
    pub progress: u32,
    pub id: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub client: String,
    pub action: String,
    pub date: chrono::DateTime<chrono::Utc>,
    pub status: ActivityStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    Completed,
    Info,
    Alert,
}
