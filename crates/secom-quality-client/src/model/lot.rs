// Production lot model types and the entities a lot references

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Product type (e.g. a logic or memory part family)
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductType {
    pub product_type_id: Option<i64>,
    pub product_code: Option<String>,
    pub product_name: Option<String>,
    /// e.g. "Logic", "Memory", "Analog"
    pub product_family: Option<String>,
    pub target_yield: Option<f64>,
    pub specification_version: Option<String>,
    pub created_at: Option<String>,
}

/// Process equipment
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Equipment {
    pub equipment_id: Option<i64>,
    pub equipment_code: Option<String>,
    pub equipment_name: Option<String>,
    /// e.g. "CVD", "Etcher"
    pub equipment_type: Option<String>,
    pub location: Option<String>,
    pub manufacturer: Option<String>,
    /// YYYY-MM-DD
    pub install_date: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Operator, inspector or reviewer
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Operator {
    pub operator_id: Option<i64>,
    pub operator_code: Option<String>,
    pub operator_name: Option<String>,
    pub employee_number: Option<String>,
    pub department: Option<String>,
    pub hire_date: Option<String>,
    pub email: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Time of day as serialized by the MES (java.time.LocalTime)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalTime {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub nano: u32,
}

impl fmt::Display for LocalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// Production shift
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Shift {
    pub shift_id: Option<i64>,
    /// e.g. "DAY", "SWING", "NIGHT"
    pub shift_code: Option<String>,
    pub shift_name: Option<String>,
    pub start_time: Option<LocalTime>,
    pub end_time: Option<LocalTime>,
    pub description: Option<String>,
    pub created_at: Option<String>,
}

/// Production lot
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Lot {
    pub lot_id: Option<i64>,
    pub lot_number: Option<String>,
    pub product_type: Option<ProductType>,
    pub equipment: Option<Equipment>,
    pub operator: Option<Operator>,
    pub shift: Option<Shift>,
    pub production_start: Option<String>,
    pub production_end: Option<String>,
    pub wafer_count: Option<u32>,
    pub status: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Lot {
    /// Parsed lot status; `None` when absent or not a known status
    pub fn lot_status(&self) -> Option<LotStatus> {
        self.status.as_deref().and_then(|s| s.parse().ok())
    }
}

/// Known lot lifecycle states
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LotStatus {
    InProgress,
    Completed,
    QualityHold,
    Released,
    Scrapped,
}

impl LotStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LotStatus::InProgress => "in_progress",
            LotStatus::Completed => "completed",
            LotStatus::QualityHold => "quality_hold",
            LotStatus::Released => "released",
            LotStatus::Scrapped => "scrapped",
        }
    }
}

impl fmt::Display for LotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LotStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in_progress" => Ok(LotStatus::InProgress),
            "completed" => Ok(LotStatus::Completed),
            "quality_hold" => Ok(LotStatus::QualityHold),
            "released" => Ok(LotStatus::Released),
            "scrapped" => Ok(LotStatus::Scrapped),
            other => Err(format!("unknown lot status '{}'", other)),
        }
    }
}
