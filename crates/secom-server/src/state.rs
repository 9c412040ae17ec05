//! Shared application state

use std::sync::Arc;

use secom_agent::{
    AgentCardBuilder, SkillRegistry, model::AgentCard, register_quality_skills,
};
use secom_quality_client::QualityClient;

use crate::model::Configuration;

/// State shared by every request handler
pub struct AppState {
    pub configuration: Configuration,
    pub client: Arc<QualityClient>,
    pub registry: Arc<SkillRegistry>,
    pub card: AgentCard,
}

impl AppState {
    /// Build the quality client, register the skills and snapshot the card
    pub fn new(configuration: Configuration) -> anyhow::Result<Self> {
        let api = configuration.quality_api();
        let client = Arc::new(QualityClient::new(api.to_client_config())?);
        Self::with_client(configuration, client)
    }

    pub fn with_client(
        configuration: Configuration,
        client: Arc<QualityClient>,
    ) -> anyhow::Result<Self> {
        let registry = Arc::new(SkillRegistry::new());
        register_quality_skills(&registry, client.clone())?;

        let card = agent_card(&configuration, &client, &registry);

        Ok(AppState {
            configuration,
            client,
            registry,
            card,
        })
    }
}

/// Agent card for the given configuration and registered skills
pub fn agent_card(
    configuration: &Configuration,
    client: &QualityClient,
    registry: &SkillRegistry,
) -> AgentCard {
    AgentCardBuilder::new()
        .url(configuration.server_url())
        .namespace(configuration.namespace())
        .metadata("qualityApi", client.current_server())
        .metadata(
            "highRiskThreshold",
            client.high_risk_threshold().to_string(),
        )
        .build(registry)
}
