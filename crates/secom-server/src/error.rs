// Error codes carried in response bodies

use secom_agent::SkillError;
use serde::{Deserialize, Serialize};

/// Error code structure for API responses
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct ErrorCode<'a> {
    pub code: i32,
    pub message: &'a str,
}

pub const SUCCESS: ErrorCode<'static> = ErrorCode {
    code: 0,
    message: "success",
};

pub const PARAMETER_VALIDATE_ERROR: ErrorCode<'static> = ErrorCode {
    code: 20002,
    message: "parameter validate error",
};

pub const RESOURCE_NOT_FOUND: ErrorCode<'static> = ErrorCode {
    code: 20004,
    message: "resource not found",
};

pub const RESOURCE_CONFLICT: ErrorCode<'static> = ErrorCode {
    code: 20005,
    message: "resource conflict",
};

pub const SKILL_NOT_FOUND: ErrorCode<'static> = ErrorCode {
    code: 21001,
    message: "skill not found",
};

pub const QUALITY_API_ERROR: ErrorCode<'static> = ErrorCode {
    code: 21002,
    message: "quality API error",
};

pub const SERVER_ERROR: ErrorCode<'static> = ErrorCode {
    code: 30000,
    message: "server error",
};

/// Response code and HTTP status for a skill error
pub fn skill_error_code(err: &SkillError) -> (u16, ErrorCode<'static>) {
    let code = match err {
        SkillError::InvalidArguments(_) => PARAMETER_VALIDATE_ERROR,
        SkillError::NotFound(_) => RESOURCE_NOT_FOUND,
        SkillError::UnknownSkill(_) => SKILL_NOT_FOUND,
        SkillError::DuplicateSkill(_) => RESOURCE_CONFLICT,
        SkillError::Upstream(_) => QUALITY_API_ERROR,
        SkillError::Serialization(_) => SERVER_ERROR,
    };
    (err.status_code(), code)
}
