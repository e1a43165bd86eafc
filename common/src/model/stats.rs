use serde::{Deserialize, Serialize};

/// Aggregates shown on the admin dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminStatistics {
    pub total_samples: i64,
    pub validated_samples: i64,
    pub pending_samples: i64,
    pub samples_by_location: Vec<LocationCount>,
    pub recent_samples: Vec<RecentSample>,
    pub visits_last_7_days: Vec<DailyVisits>,
    pub total_visits_30_days: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationCount {
    pub location: String,
    pub count: i64,
}

/// Compact sample row for the "latest submissions" list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentSample {
    pub id: i64,
    pub sampling_date: String,
    pub location: String,
    pub validated: bool,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyVisits {
    pub date: String,
    pub visits: i64,
}
