//! In-memory instance analysis tracking
//!
//! Demo-grade tracker for ServiceNow instance analyses: runs live in a
//! process-wide map, progress is simulated on each status poll, and results
//! are canned. A production build would drive these from real agent runs.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Duration, Utc};
use tracing::info;
use uuid::Uuid;

use crate::domain::analysis::{
    AgentInfo, AnalysisRecord, AnalysisResults, AnalysisState, AnalysisStatus, Recommendation,
};
use crate::domain::DomainError;

/// Progress added on every status poll
const PROGRESS_STEP: u8 = 20;

/// The consultancy agent roster
const AGENTS: &[AgentInfo] = &[
    AgentInfo {
        id: "discovery",
        name: "Discovery Agent",
        status: "idle",
    },
    AgentInfo {
        id: "architecture",
        name: "Architecture Agent",
        status: "idle",
    },
    AgentInfo {
        id: "configuration",
        name: "Configuration Agent",
        status: "idle",
    },
    AgentInfo {
        id: "documentation",
        name: "Documentation Agent",
        status: "idle",
    },
    AgentInfo {
        id: "analysis",
        name: "Analysis Agent",
        status: "idle",
    },
    AgentInfo {
        id: "project",
        name: "Project Management Agent",
        status: "idle",
    },
];

/// A freshly started analysis
#[derive(Debug, Clone)]
pub struct StartedAnalysis {
    pub workflow_id: String,
    pub estimated_completion: DateTime<Utc>,
}

/// In-memory analysis workflow tracker
#[derive(Debug, Default)]
pub struct AnalysisService {
    records: RwLock<HashMap<String, AnalysisRecord>>,
}

impl AnalysisService {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Start tracking a new analysis
    pub fn start(&self, instance_url: &str) -> Result<StartedAnalysis, DomainError> {
        let workflow_id = Uuid::new_v4().to_string();

        let mut records = self
            .records
            .write()
            .map_err(|e| DomainError::internal(format!("Failed to acquire write lock: {}", e)))?;
        records.insert(workflow_id.clone(), AnalysisRecord::new(instance_url));

        info!(workflow_id = %workflow_id, "Analysis started");

        Ok(StartedAnalysis {
            workflow_id,
            estimated_completion: Utc::now() + Duration::minutes(5),
        })
    }

    /// Get the status of an analysis, advancing its simulated progress
    pub fn status(&self, workflow_id: &str) -> Result<AnalysisStatus, DomainError> {
        let mut records = self
            .records
            .write()
            .map_err(|e| DomainError::internal(format!("Failed to acquire write lock: {}", e)))?;

        let record = records
            .get_mut(workflow_id)
            .ok_or_else(|| DomainError::not_found(format!("Analysis '{}' not found", workflow_id)))?;

        record.progress = record.progress.saturating_add(PROGRESS_STEP).min(100);
        if record.is_complete() {
            record.state = AnalysisState::Completed;
        }

        Ok(AnalysisStatus {
            workflow_id: workflow_id.to_string(),
            status: record.state,
            progress: record.progress,
            current_agent: record.current_agent.clone(),
        })
    }

    /// Get the results of a completed analysis
    pub fn results(&self, workflow_id: &str) -> Result<AnalysisResults, DomainError> {
        let records = self
            .records
            .read()
            .map_err(|e| DomainError::internal(format!("Failed to acquire read lock: {}", e)))?;

        let record = records
            .get(workflow_id)
            .ok_or_else(|| DomainError::not_found(format!("Analysis '{}' not found", workflow_id)))?;

        if !record.is_complete() {
            return Err(DomainError::validation("Analysis not complete"));
        }

        Ok(AnalysisResults {
            workflow_id: workflow_id.to_string(),
            health_score: 85,
            recommendations: vec![
                Recommendation::new("Upgrade ServiceNow Version", "high"),
                Recommendation::new("Optimize Business Rules", "medium"),
                Recommendation::new("Implement Service Portal", "medium"),
            ],
            estimated_savings: "$45,000/year".to_string(),
        })
    }

    /// Get the agent roster
    pub fn agents(&self) -> &'static [AgentInfo] {
        AGENTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_and_poll_to_completion() {
        let service = AnalysisService::new();
        let started = service.start("https://dev.service-now.com").unwrap();

        // Five polls of +20 reach 100
        for expected in [20, 40, 60, 80, 100] {
            let status = service.status(&started.workflow_id).unwrap();
            assert_eq!(status.progress, expected);
        }

        let status = service.status(&started.workflow_id).unwrap();
        assert_eq!(status.progress, 100);
        assert_eq!(status.status, AnalysisState::Completed);
    }

    #[test]
    fn test_unknown_workflow_is_not_found() {
        let service = AnalysisService::new();

        let result = service.status("does-not-exist");
        assert!(matches!(result, Err(DomainError::NotFound { .. })));

        let result = service.results("does-not-exist");
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[test]
    fn test_results_require_completion() {
        let service = AnalysisService::new();
        let started = service.start("https://dev.service-now.com").unwrap();

        let result = service.results(&started.workflow_id);
        assert!(matches!(result, Err(DomainError::Validation { .. })));

        for _ in 0..5 {
            service.status(&started.workflow_id).unwrap();
        }

        let results = service.results(&started.workflow_id).unwrap();
        assert_eq!(results.health_score, 85);
        assert_eq!(results.recommendations.len(), 3);
        assert_eq!(results.estimated_savings, "$45,000/year");
    }

    #[test]
    fn test_agent_roster() {
        let service = AnalysisService::new();
        let agents = service.agents();

        assert_eq!(agents.len(), 6);
        assert_eq!(agents[0].id, "discovery");
    }
}
