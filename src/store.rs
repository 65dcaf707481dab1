use crate::models::{AttendanceStatus, Store, Subject, SubjectType};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    EmptyName,
    DuplicateName,
    NotFound,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            StoreError::EmptyName => "subject name must not be empty",
            StoreError::DuplicateName => "subject already exists",
            StoreError::NotFound => "subject not found",
        };
        f.write_str(message)
    }
}

impl std::error::Error for StoreError {}

/// Inserts a new subject with an empty record set. The name is trimmed
/// before the empty/duplicate checks; lookup is exact and case-sensitive.
pub fn create_subject(
    store: &mut Store,
    name: &str,
    subject_type: SubjectType,
    weekly_day: Option<u8>,
) -> Result<(), StoreError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(StoreError::EmptyName);
    }
    if store.subjects.contains_key(name) {
        return Err(StoreError::DuplicateName);
    }

    let weekly_day = match subject_type {
        SubjectType::Weekly => weekly_day,
        SubjectType::Regular => None,
    };
    store.subjects.insert(
        name.to_string(),
        Subject {
            subject_type,
            weekly_day,
            records: BTreeMap::new(),
        },
    );
    Ok(())
}

/// Upserts a day's status, or removes the key entirely when `status` is
/// `None`. Weekends, non-class weekdays and future days are accepted here;
/// restricting them is the calendar's concern, not the store's.
pub fn set_status(
    store: &mut Store,
    name: &str,
    day: &str,
    status: Option<AttendanceStatus>,
) -> Result<(), StoreError> {
    let subject = store.subjects.get_mut(name).ok_or(StoreError::NotFound)?;
    match status {
        Some(status) => {
            subject.records.insert(day.to_string(), status);
        }
        None => {
            subject.records.remove(day);
        }
    }
    Ok(())
}

pub fn remove_subject(store: &mut Store, name: &str) -> Result<(), StoreError> {
    store
        .subjects
        .remove(name)
        .map(|_| ())
        .ok_or(StoreError::NotFound)
}

/// Upgrades subjects persisted in the old flat shape (a bare day→status map)
/// to the wrapped `{type, weeklyDay, records}` shape. The upgrade trigger is
/// the absence of a `records` field, which also makes a second run a no-op.
///
/// Runs on the raw document before deserialization. Returns whether any
/// subject was rewritten so the caller can persist the upgraded document.
pub fn migrate_legacy(document: &mut Value) -> bool {
    let Some(subjects) = document.get_mut("subjects").and_then(Value::as_object_mut) else {
        return false;
    };

    let mut migrated = false;
    for subject in subjects.values_mut() {
        let Some(fields) = subject.as_object_mut() else {
            continue;
        };
        if fields.contains_key("records") {
            continue;
        }

        let records = std::mem::take(fields);
        fields.insert("type".to_string(), Value::String("regular".to_string()));
        fields.insert("weeklyDay".to_string(), Value::Null);
        fields.insert("records".to_string(), Value::Object(records));
        migrated = true;
    }
    migrated
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_trims_and_inserts_empty_records() {
        let mut store = Store::default();
        create_subject(&mut store, "  Math ", SubjectType::Weekly, Some(2)).unwrap();

        let subject = store.subjects.get("Math").expect("missing subject");
        assert_eq!(subject.subject_type, SubjectType::Weekly);
        assert_eq!(subject.weekly_day, Some(2));
        assert!(subject.records.is_empty());
    }

    #[test]
    fn create_rejects_empty_and_duplicate_names() {
        let mut store = Store::default();
        assert_eq!(
            create_subject(&mut store, "   ", SubjectType::Regular, None),
            Err(StoreError::EmptyName)
        );

        create_subject(&mut store, "Math", SubjectType::Regular, None).unwrap();
        assert_eq!(
            create_subject(&mut store, "Math", SubjectType::Regular, None),
            Err(StoreError::DuplicateName)
        );
    }

    #[test]
    fn create_drops_weekly_day_for_regular_subjects() {
        let mut store = Store::default();
        create_subject(&mut store, "Physics", SubjectType::Regular, Some(3)).unwrap();
        assert_eq!(store.subjects["Physics"].weekly_day, None);
    }

    #[test]
    fn set_status_upserts_and_clear_removes_the_key() {
        let mut store = Store::default();
        create_subject(&mut store, "Math", SubjectType::Weekly, Some(2)).unwrap();

        set_status(&mut store, "Math", "2024-01-02", Some(AttendanceStatus::Absent)).unwrap();
        set_status(&mut store, "Math", "2024-01-02", Some(AttendanceStatus::Present)).unwrap();
        assert_eq!(
            store.subjects["Math"].records.get("2024-01-02"),
            Some(&AttendanceStatus::Present)
        );

        set_status(&mut store, "Math", "2024-01-02", None).unwrap();
        assert!(!store.subjects["Math"].records.contains_key("2024-01-02"));
    }

    #[test]
    fn operations_on_unknown_subjects_fail() {
        let mut store = Store::default();
        assert_eq!(
            set_status(&mut store, "Math", "2024-01-02", None),
            Err(StoreError::NotFound)
        );
        assert_eq!(remove_subject(&mut store, "Math"), Err(StoreError::NotFound));
    }

    #[test]
    fn remove_deletes_the_subject() {
        let mut store = Store::default();
        create_subject(&mut store, "Math", SubjectType::Regular, None).unwrap();
        remove_subject(&mut store, "Math").unwrap();
        assert!(store.subjects.is_empty());
    }

    #[test]
    fn migrate_wraps_flat_subjects() {
        let mut document = json!({
            "subjects": {
                "History": { "2024-01-02": "present", "2024-01-03": "absent" }
            }
        });

        assert!(migrate_legacy(&mut document));
        assert_eq!(
            document,
            json!({
                "subjects": {
                    "History": {
                        "type": "regular",
                        "weeklyDay": null,
                        "records": { "2024-01-02": "present", "2024-01-03": "absent" }
                    }
                }
            })
        );

        let store: Store = serde_json::from_value(document).unwrap();
        assert_eq!(store.subjects["History"].subject_type, SubjectType::Regular);
        assert_eq!(store.subjects["History"].records.len(), 2);
    }

    #[test]
    fn migrate_is_idempotent() {
        let mut document = json!({
            "subjects": {
                "History": { "2024-01-02": "present" },
                "Math": { "type": "weekly", "weeklyDay": 2, "records": {} }
            }
        });

        assert!(migrate_legacy(&mut document));
        let once = document.clone();
        assert!(!migrate_legacy(&mut document));
        assert_eq!(document, once);
    }

    #[test]
    fn migrate_leaves_wrapped_subjects_alone() {
        let mut document = json!({
            "subjects": {
                "Math": { "type": "weekly", "weeklyDay": 2, "records": { "2024-01-02": "present" } }
            }
        });
        let before = document.clone();
        assert!(!migrate_legacy(&mut document));
        assert_eq!(document, before);
    }
}
