use chrono::NaiveDate;

/// Canonical `YYYY-MM-DD` key for a local calendar day.
///
/// Every record key in the store comes through here. `NaiveDate` carries no
/// offset, so the key can never shift across a UTC midnight boundary the way
/// an ISO timestamp serialization would.
pub fn local_day_string(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
