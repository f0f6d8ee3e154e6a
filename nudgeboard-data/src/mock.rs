use std::time::Duration;

use chrono::TimeZone;

use crate::models::{
    Activity, ActivityStatus, ContentSlice, DashboardSnapshot, EngagementPoint, Milestone, Stats,
};
use crate::{Config, DashboardSource, NudgeDataResult};

/// Fixed-shape in-memory fixture standing in for a real dashboard backend.
pub struct MockDashboard {
    delay: Duration,
}

impl MockDashboard {
    pub fn new(config: &Config) -> Self {
        Self {
            delay: Duration::from_millis(config.simulated_delay_ms),
        }
    }

    fn snapshot() -> DashboardSnapshot {
        let date = |y, m, d| chrono::Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap();

        DashboardSnapshot {
            stats: Stats {
                clients_on_track: 14,
                avg_progress_score: 85,
                new_leads_this_month: 124,
                avg_time_in_plan: 45,
            },
            monthly_engagement: [
                ("Jan", 300),
                ("Feb", 450),
                ("Mar", 620),
                ("Apr", 580),
                ("May", 750),
                ("Jun", 910),
            ]
            .into_iter()
            .map(|(month, engagement)| EngagementPoint {
                month: month.to_string(),
                engagement,
            })
            .collect(),
            content_performance: [
                ("Blog Posts", 35, "#8B5CF6"),
                ("Videos", 25, "#14B8A6"),
                ("Case Studies", 20, "#3B82F6"),
                ("Social Media", 20, "#F59E0B"),
            ]
            .into_iter()
            .map(|(name, value, color)| ContentSlice {
                name: name.to_string(),
                value,
                color: color.to_string(),
            })
            .collect(),
            upcoming_milestones: [
                ("Define Buyer Persona", 100, "day-1"),
                ("Develop Social Media Strategy", 85, "day-2"),
                ("Launch Lead Generation Campaign", 20, "day-3"),
                ("Create 7-Day Content Plan", 50, "day-4"),
            ]
            .into_iter()
            .map(|(name, progress, id)| Milestone {
                name: name.to_string(),
                progress,
                id: id.to_string(),
            })
            .collect(),
            recent_activity: vec![
                Activity {
                    client: "Jane Doe".to_string(),
                    action: r#"Completed "Develop Social Media Strategy" module"#.to_string(),
                    date: date(2025, 7, 31),
                    status: ActivityStatus::Completed,
                },
                Activity {
                    client: "Acme Corp".to_string(),
                    action: "Requested a call about advanced SEO".to_string(),
                    date: date(2025, 7, 30),
                    status: ActivityStatus::Info,
                },
                Activity {
                    client: "Marketing Masters".to_string(),
                    action: "Uploaded a new content asset".to_string(),
                    date: date(2025, 7, 29),
                    status: ActivityStatus::Completed,
                },
                Activity {
                    client: "John Smith".to_string(),
                    action: r#"Failed to complete "Week 2 Tasks""#.to_string(),
                    date: date(2025, 7, 28),
                    status: ActivityStatus::Alert,
                },
            ],
        }
    }
}

impl DashboardSource for MockDashboard {
    async fn fetch(&self) -> NudgeDataResult<DashboardSnapshot> {
        // Emulate a backend roundtrip
        tokio::time::sleep(self.delay).await;
        Ok(Self::snapshot())
    }
}
