use log::error;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::types::{Event, LeaveRequest, Notice, Task};

const SEED_JSON: &str = include_str!("seed.json");

/// Everything the dashboard starts with. There is no other data source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedData {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub notices: Vec<Notice>,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub leave_requests: Vec<LeaveRequest>,
}

impl SeedData {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn embedded() -> Result<Self, AppError> {
        Self::parse(SEED_JSON)
    }

    /// Embedded seed, or empty collections if it cannot be read.
    pub fn load() -> Self {
        Self::embedded().unwrap_or_else(|err| {
            error!("{}; starting with empty collections", err);
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LeaveStatus, NoticeKind};

    #[test]
    fn embedded_seed_parses() {
        let seed = SeedData::embedded().unwrap();
        assert!(!seed.tasks.is_empty());
        assert!(!seed.events.is_empty());
        assert!(seed.notices.iter().any(|n| n.kind == NoticeKind::Urgent));
        assert!(seed
            .leave_requests
            .iter()
            .all(|r| r.status != LeaveStatus::Pending));
    }

    #[test]
    fn seed_ids_are_unique_per_collection() {
        let seed = SeedData::embedded().unwrap();
        let mut task_ids: Vec<u64> = seed.tasks.iter().map(|t| t.id).collect();
        task_ids.sort_unstable();
        task_ids.dedup();
        assert_eq!(task_ids.len(), seed.tasks.len());

        let mut leave_ids: Vec<u64> = seed.leave_requests.iter().map(|r| r.id).collect();
        leave_ids.sort_unstable();
        leave_ids.dedup();
        assert_eq!(leave_ids.len(), seed.leave_requests.len());
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let seed = SeedData::parse(r#"{ "tasks": [] }"#).unwrap();
        assert!(seed.events.is_empty());
        assert!(seed.leave_requests.is_empty());
    }

    #[test]
    fn malformed_seed_is_reported() {
        let err = SeedData::parse("[1, 2").unwrap_err();
        assert!(matches!(err, AppError::Seed(_)));
    }
}
