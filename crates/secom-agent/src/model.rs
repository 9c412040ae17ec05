//! A2A (Agent-to-Agent) data models
//!
//! The agent card advertises the agent and every skill it offers. Each skill
//! carries JSON schemas for its input and output so that an orchestrating
//! agent can plan calls without out-of-band documentation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// AgentCard - represents an AI agent's capabilities and identity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentCard {
    /// Agent name (unique identifier)
    pub name: String,

    /// Agent display name
    #[serde(default)]
    pub display_name: String,

    /// Agent description
    #[serde(default)]
    pub description: String,

    /// Agent version
    #[serde(default = "default_version")]
    pub version: String,

    /// Base URL where the agent is served
    pub url: String,

    /// Agent protocol version
    #[serde(default = "default_protocol_version")]
    pub protocol_version: String,

    /// Topic namespace of the agent mesh the agent belongs to
    #[serde(default)]
    pub namespace: String,

    /// Agent capabilities
    #[serde(default)]
    pub capabilities: AgentCapabilities,

    /// Agent skills
    #[serde(default)]
    pub skills: Vec<AgentSkill>,

    /// Supported input modes
    #[serde(default)]
    pub default_input_modes: Vec<InputMode>,

    /// Supported output modes
    #[serde(default)]
    pub default_output_modes: Vec<OutputMode>,

    /// Agent metadata
    #[serde(default)]
    pub metadata: HashMap<String, String>,

    /// Tags for categorization
    #[serde(default)]
    pub tags: Vec<String>,
}

fn default_version() -> String {
    "1.0.0".to_string()
}

fn default_protocol_version() -> String {
    "1.0".to_string()
}

impl AgentCard {
    pub fn skill(&self, id: &str) -> Option<&AgentSkill> {
        self.skills.iter().find(|s| s.id == id)
    }
}

/// Agent capabilities
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentCapabilities {
    #[serde(default)]
    pub streaming: bool,

    #[serde(default)]
    pub push_notifications: bool,

    #[serde(default)]
    pub state_transition_history: bool,
}

/// Agent skill
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentSkill {
    /// Stable skill identifier, used in invocation URLs
    pub id: String,

    /// Human readable skill name
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// What the skill can be used for
    #[serde(default)]
    pub capabilities: Vec<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    /// Example invocations
    #[serde(default)]
    pub examples: Vec<String>,

    /// JSON Schema of the invocation arguments
    #[serde(default)]
    pub input_schema: serde_json::Value,

    /// JSON Schema of the result
    #[serde(default)]
    pub output_schema: serde_json::Value,

    /// Error statuses the skill may report
    #[serde(default)]
    pub error_responses: Vec<ErrorResponseSpec>,
}

/// Documented error response of a skill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponseSpec {
    pub status: u16,
    pub description: String,
}

impl ErrorResponseSpec {
    pub fn new(status: u16, description: &str) -> Self {
        Self {
            status,
            description: description.to_string(),
        }
    }
}

/// Input mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    Text,
    Json,
}

/// Output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Text,
    Json,
}

/// Skill invocation request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillInvocation {
    /// Arguments matching the skill's input schema
    #[serde(default = "empty_arguments")]
    pub arguments: serde_json::Value,
}

fn empty_arguments() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

/// Skill invocation result
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillResult {
    pub skill_id: String,
    pub result: serde_json::Value,
    pub elapsed_ms: u64,
}
