//! Agent capabilities for the SECOM quality agent
//!
//! This crate provides:
//! - A2A data models (agent card, skills with JSON schemas)
//! - The `Skill` trait and a concurrent skill registry
//! - The quality skills backed by `secom-quality-client`
//! - An agent card builder

pub mod card;
pub mod model;
pub mod quality_skills;
pub mod registry;
pub mod skill;

pub use card::AgentCardBuilder;
pub use quality_skills::register_quality_skills;
pub use registry::{SkillRegistry, SkillRegistryStats};
pub use skill::{Skill, SkillError};
