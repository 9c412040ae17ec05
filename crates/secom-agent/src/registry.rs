//! Skill Registry
//!
//! Concurrent registry of the skills an agent offers, with per-skill
//! invocation counters.

use std::{collections::BTreeMap, sync::Arc, time::Instant};

use dashmap::{DashMap, mapref::entry::Entry};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::{
    model::{AgentSkill, SkillResult},
    skill::{Skill, SkillError},
};

#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCounters {
    pub invocations: u64,
    pub failures: u64,
    pub total_elapsed_ms: u64,
}

/// Skill registry statistics
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRegistryStats {
    pub total_skills: usize,
    pub total_invocations: u64,
    pub total_failures: u64,
    pub by_skill: BTreeMap<String, SkillCounters>,
}

/// Registry of skills indexed by skill ID
pub struct SkillRegistry {
    skills: DashMap<String, Arc<dyn Skill>>,
    counters: DashMap<String, SkillCounters>,
}

impl SkillRegistry {
    pub fn new() -> Self {
        Self {
            skills: DashMap::new(),
            counters: DashMap::new(),
        }
    }

    /// Register a skill; IDs must be unique
    pub fn register(&self, skill: Arc<dyn Skill>) -> Result<(), SkillError> {
        let id = skill.descriptor().id;

        match self.skills.entry(id.clone()) {
            Entry::Occupied(_) => Err(SkillError::DuplicateSkill(id)),
            Entry::Vacant(entry) => {
                entry.insert(skill);
                self.counters.insert(id.clone(), SkillCounters::default());
                info!(skill_id = %id, "Skill registered");
                Ok(())
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<Arc<dyn Skill>> {
        self.skills.get(id).map(|s| s.value().clone())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.skills.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Descriptors of all skills, sorted by ID
    pub fn list(&self) -> Vec<AgentSkill> {
        let mut skills: Vec<AgentSkill> =
            self.skills.iter().map(|s| s.value().descriptor()).collect();
        skills.sort_by(|a, b| a.id.cmp(&b.id));
        skills
    }

    /// Invoke a skill by ID and record the outcome
    pub async fn invoke(
        &self,
        id: &str,
        arguments: serde_json::Value,
    ) -> Result<SkillResult, SkillError> {
        let skill = self
            .get(id)
            .ok_or_else(|| SkillError::UnknownSkill(id.to_string()))?;

        debug!(skill_id = %id, "Invoking skill");
        let started = Instant::now();
        let outcome = skill.invoke(arguments).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        if let Some(mut counters) = self.counters.get_mut(id) {
            counters.invocations += 1;
            counters.total_elapsed_ms += elapsed_ms;
            if outcome.is_err() {
                counters.failures += 1;
            }
        }

        match outcome {
            Ok(result) => {
                debug!(skill_id = %id, elapsed_ms, "Skill completed");
                Ok(SkillResult {
                    skill_id: id.to_string(),
                    result,
                    elapsed_ms,
                })
            }
            Err(e) => {
                warn!(skill_id = %id, elapsed_ms, error = %e, "Skill failed");
                Err(e)
            }
        }
    }

    pub fn stats(&self) -> SkillRegistryStats {
        let by_skill: BTreeMap<String, SkillCounters> = self
            .counters
            .iter()
            .map(|c| (c.key().clone(), *c.value()))
            .collect();

        SkillRegistryStats {
            total_skills: self.skills.len(),
            total_invocations: by_skill.values().map(|c| c.invocations).sum(),
            total_failures: by_skill.values().map(|c| c.failures).sum(),
            by_skill,
        }
    }
}

impl Default for SkillRegistry {
    fn default() -> Self {
        Self::new()
    }
}
