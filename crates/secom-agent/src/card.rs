// Agent card builder

use std::collections::HashMap;

use crate::{
    model::{AgentCapabilities, AgentCard, InputMode, OutputMode},
    registry::SkillRegistry,
};

pub const DEFAULT_AGENT_NAME: &str = "SecomQualityAgent";
pub const DEFAULT_DISPLAY_NAME: &str = "SECOM Quality Agent";
pub const DEFAULT_DESCRIPTION: &str = "Agent for the SECOM MES quality inspection API. \
     Looks up inspection results, filters them by outcome, lot, risk and defect type, \
     and computes quality summaries and statistics.";

/// Builds the agent card from settings and the registered skills
#[derive(Debug, Clone)]
pub struct AgentCardBuilder {
    name: String,
    display_name: String,
    description: String,
    version: String,
    url: String,
    namespace: String,
    metadata: HashMap<String, String>,
    tags: Vec<String>,
}

impl Default for AgentCardBuilder {
    fn default() -> Self {
        Self {
            name: DEFAULT_AGENT_NAME.to_string(),
            display_name: DEFAULT_DISPLAY_NAME.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            url: String::new(),
            namespace: String::new(),
            metadata: HashMap::new(),
            tags: vec!["quality".to_string(), "manufacturing".to_string()],
        }
    }
}

impl AgentCardBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Snapshot the registry's skills into a card
    pub fn build(&self, registry: &SkillRegistry) -> AgentCard {
        AgentCard {
            name: self.name.clone(),
            display_name: self.display_name.clone(),
            description: self.description.clone(),
            version: self.version.clone(),
            url: self.url.clone(),
            protocol_version: "1.0".to_string(),
            namespace: self.namespace.clone(),
            capabilities: AgentCapabilities::default(),
            skills: registry.list(),
            default_input_modes: vec![InputMode::Text, InputMode::Json],
            default_output_modes: vec![OutputMode::Text, OutputMode::Json],
            metadata: self.metadata.clone(),
            tags: self.tags.clone(),
        }
    }
}
