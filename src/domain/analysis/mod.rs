//! Instance analysis domain types
//!
//! Types for the simulated ServiceNow instance analysis workflow: progress
//! tracking, recommendations, and the consultancy agent roster.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of an analysis workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisState {
    InProgress,
    Completed,
}

/// A tracked analysis run
#[derive(Debug, Clone)]
pub struct AnalysisRecord {
    pub state: AnalysisState,
    pub progress: u8,
    pub started_at: DateTime<Utc>,
    pub instance_url: String,
    pub current_agent: String,
}

impl AnalysisRecord {
    pub fn new(instance_url: impl Into<String>) -> Self {
        Self {
            state: AnalysisState::InProgress,
            progress: 0,
            started_at: Utc::now(),
            instance_url: instance_url.into(),
            current_agent: "discovery".to_string(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= 100
    }
}

/// Snapshot of an analysis run returned to callers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisStatus {
    pub workflow_id: String,
    pub status: AnalysisState,
    pub progress: u8,
    pub current_agent: String,
}

/// A single recommendation in the analysis results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub priority: String,
}

impl Recommendation {
    pub fn new(title: impl Into<String>, priority: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            priority: priority.into(),
        }
    }
}

/// Final results of a completed analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResults {
    pub workflow_id: String,
    pub health_score: u8,
    pub recommendations: Vec<Recommendation>,
    pub estimated_savings: String,
}

/// A consultancy agent in the roster
#[derive(Debug, Clone, Serialize)]
pub struct AgentInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub status: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_starts_at_zero() {
        let record = AnalysisRecord::new("https://dev.service-now.com");

        assert_eq!(record.state, AnalysisState::InProgress);
        assert_eq!(record.progress, 0);
        assert_eq!(record.current_agent, "discovery");
        assert!(!record.is_complete());
    }

    #[test]
    fn test_state_serialization() {
        assert_eq!(
            serde_json::to_string(&AnalysisState::InProgress).unwrap(),
            "\"in_progress\""
        );
        assert_eq!(
            serde_json::to_string(&AnalysisState::Completed).unwrap(),
            "\"completed\""
        );
    }
}
