//! Health score and overall verdict
//!
//! The score starts at 100 and loses points per finding. The verdict is
//! derived from the score alone and may disagree with component statuses.

use crate::domain::{IssueSeverity, Status, ValidationResult};

const ENV_ERROR_PENALTY: i64 = 30;
const ENV_WARNING_PENALTY: i64 = 15;
const NOT_ACTIVATED_PENALTY: i64 = 5;
const OUTDATED_PENALTY: i64 = 3;
const CRITICAL_PENALTY: i64 = 25;
const HIGH_PENALTY: i64 = 15;
const MEDIUM_PENALTY: i64 = 5;
const LOW_PENALTY: i64 = 2;
const PERFORMANCE_PENALTY: i64 = 10;
const ISSUE_ERROR_PENALTY: i64 = 20;
const ISSUE_WARNING_PENALTY: i64 = 10;
const ISSUE_INFO_PENALTY: i64 = 5;

/// Lowest score that still counts as success
pub const SUCCESS_THRESHOLD: u8 = 80;
/// Lowest score that still counts as warning
pub const WARNING_THRESHOLD: u8 = 50;

/// Map a score to the overall verdict
pub fn verdict(score: u8) -> Status {
    if score >= SUCCESS_THRESHOLD {
        Status::Success
    } else if score >= WARNING_THRESHOLD {
        Status::Warning
    } else {
        Status::Error
    }
}

/// Compute the score, clamped to 0..=100, and its verdict
pub fn calculate_score(result: &ValidationResult) -> (u8, Status) {
    let mut score: i64 = 100;

    if let Some(info) = &result.venv_info {
        score -= match info.status {
            Status::Error => ENV_ERROR_PENALTY,
            Status::Warning => ENV_WARNING_PENALTY,
            Status::Success => 0,
        };
        if !info.is_activated() {
            score -= NOT_ACTIVATED_PENALTY;
        }
    }

    score -= result.outdated_count() as i64 * OUTDATED_PENALTY;

    if let Some(security) = &result.security {
        score -= i64::from(security.critical) * CRITICAL_PENALTY;
        score -= i64::from(security.high) * HIGH_PENALTY;
        score -= i64::from(security.medium) * MEDIUM_PENALTY;
        score -= i64::from(security.low) * LOW_PENALTY;
    }

    if result
        .performance
        .as_ref()
        .is_some_and(|p| p.status == Status::Warning)
    {
        score -= PERFORMANCE_PENALTY;
    }

    for issue in &result.issues {
        score -= match issue.severity {
            IssueSeverity::Error => ISSUE_ERROR_PENALTY,
            IssueSeverity::Warning => ISSUE_WARNING_PENALTY,
            IssueSeverity::Info => ISSUE_INFO_PENALTY,
        };
    }

    let score = score.clamp(0, 100) as u8;
    (score, verdict(score))
}

/// Store the score and verdict on the result
pub fn apply_score(result: &mut ValidationResult) {
    let (score, status) = calculate_score(result);
    result.score = score;
    result.overall_status = status;
}
