use crate::models::{AttendanceStatus, RiskLevel, StatsSummary};
use std::collections::BTreeMap;

/// Derives attendance figures from a record set. Only `present` and
/// `absent` count; reserved or unrecognized statuses touch neither counter.
/// `percent` keeps full precision, rounding is display-side.
pub fn compute_stats(records: &BTreeMap<String, AttendanceStatus>) -> StatsSummary {
    let mut attended = 0u64;
    let mut total = 0u64;
    for status in records.values() {
        match status {
            AttendanceStatus::Present => {
                attended += 1;
                total += 1;
            }
            AttendanceStatus::Absent => {
                total += 1;
            }
            _ => {}
        }
    }

    let percent = if total == 0 {
        0.0
    } else {
        attended as f64 / total as f64 * 100.0
    };

    StatsSummary {
        attended,
        total,
        percent,
    }
}

/// Display classification for a percentage, evaluated high to low.
pub fn risk_level(percent: f64) -> RiskLevel {
    if percent >= 80.0 {
        RiskLevel::VerySafe
    } else if percent >= 75.0 {
        RiskLevel::Safe
    } else if percent >= 65.0 {
        RiskLevel::Warning
    } else {
        RiskLevel::Danger
    }
}
