//! Model tier selection
//!
//! Maps a caller-supplied complexity hint to one of a fixed set of model
//! tiers, each backed by a concrete model id.

use serde::{Deserialize, Serialize};

/// A named class of completion model, trading cost and latency for quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelTier {
    Simple,
    Medium,
    Advanced,
}

impl ModelTier {
    /// Select a tier from a complexity hint. Total: unrecognized or absent
    /// values fall back to Medium, never an error.
    pub fn from_complexity(complexity: &str) -> Self {
        match complexity {
            "simple" => Self::Simple,
            "advanced" => Self::Advanced,
            _ => Self::Medium,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Medium => "medium",
            Self::Advanced => "advanced",
        }
    }
}

/// Mapping from model tier to backend model id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingTable {
    #[serde(default = "default_simple_model")]
    pub simple_model: String,
    #[serde(default = "default_medium_model")]
    pub medium_model: String,
    #[serde(default = "default_advanced_model")]
    pub advanced_model: String,
}

fn default_simple_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_medium_model() -> String {
    "gpt-4-turbo".to_string()
}

fn default_advanced_model() -> String {
    "gpt-4o".to_string()
}

impl Default for RoutingTable {
    fn default() -> Self {
        Self {
            simple_model: default_simple_model(),
            medium_model: default_medium_model(),
            advanced_model: default_advanced_model(),
        }
    }
}

impl RoutingTable {
    /// Get the backend model id for a tier
    pub fn model_for(&self, tier: ModelTier) -> &str {
        match tier {
            ModelTier::Simple => &self.simple_model,
            ModelTier::Medium => &self.medium_model,
            ModelTier::Advanced => &self.advanced_model,
        }
    }

    /// Select a model id directly from a complexity hint
    pub fn model_for_complexity(&self, complexity: &str) -> &str {
        self.model_for(ModelTier::from_complexity(complexity))
    }
}
