use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectType {
    Regular,
    Weekly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
    /// Reserved: rendered when found in a document, never written by any
    /// mutation path, ignored by statistics.
    NoClass,
}

/// One tracked subject. Field names match the persisted document, so data
/// written by earlier versions of the app loads unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    #[serde(rename = "type")]
    pub subject_type: SubjectType,
    /// 0 = Sunday. Set iff `subject_type` is `Weekly`.
    #[serde(rename = "weeklyDay")]
    pub weekly_day: Option<u8>,
    pub records: BTreeMap<String, AttendanceStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Store {
    pub subjects: BTreeMap<String, Subject>,
}

#[derive(Debug, Deserialize)]
pub struct CreateSubjectRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub subject_type: SubjectType,
    #[serde(rename = "weeklyDay")]
    pub weekly_day: Option<u8>,
}

#[derive(Debug, Deserialize)]
pub struct MarkRequest {
    pub day: String,
    pub action: String,
}

#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatsSummary {
    pub attended: u64,
    pub total: u64,
    pub percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskLevel {
    VerySafe,
    Safe,
    Warning,
    Danger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DimReason {
    Weekend,
    NonClassDay,
    Future,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayCell {
    pub day: u32,
    /// 0 = Sunday, same convention as `weekly_day`.
    pub weekday: u8,
    /// Canonical local-day key for this cell.
    pub date: String,
    pub status: Option<AttendanceStatus>,
    pub interactable: bool,
    pub dim: Option<DimReason>,
}

#[derive(Debug, Serialize)]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
    pub label: String,
    pub at_current_month: bool,
    pub cells: Vec<DayCell>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

#[derive(Debug, Serialize)]
pub struct MonthNav {
    pub prev: YearMonth,
    pub next: YearMonth,
    pub next_enabled: bool,
}

#[derive(Debug, Serialize)]
pub struct SubjectSummary {
    pub name: String,
    #[serde(rename = "type")]
    pub subject_type: SubjectType,
    #[serde(rename = "weeklyDay")]
    pub weekly_day: Option<u8>,
    pub stats: StatsSummary,
    pub level: RiskLevel,
}

#[derive(Debug, Serialize)]
pub struct SubjectListResponse {
    pub subjects: Vec<SubjectSummary>,
}

#[derive(Debug, Serialize)]
pub struct MonthResponse {
    pub subject: String,
    pub today: String,
    pub month: MonthView,
    pub nav: MonthNav,
    pub stats: StatsSummary,
    pub level: RiskLevel,
    pub remind_today: bool,
}

#[derive(Debug, Serialize)]
pub struct MarkResponse {
    pub subject: String,
    pub day: String,
    pub status: Option<AttendanceStatus>,
    pub today: String,
    pub stats: StatsSummary,
    pub level: RiskLevel,
    pub remind_today: bool,
}
