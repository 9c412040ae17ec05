// Model types for quality API responses

pub mod common;
pub mod lot;
pub mod quality;
pub mod summary;

pub use common::{Page, PageRequest};
pub use lot::{Equipment, LocalTime, Lot, LotStatus, Operator, ProductType, Shift};
pub use quality::{Classification, DefectType, QualityResult};
pub use summary::{QualityStatistics, QualitySummary};
