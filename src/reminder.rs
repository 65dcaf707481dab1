use crate::dates::local_day_string;
use crate::models::{Subject, SubjectType};
use chrono::{Datelike, NaiveDateTime, Timelike};

/// Whether the "mark today" nudge should show for the currently open
/// subject. Pure function of the subject and the wall clock; callers
/// re-evaluate it after every mutation and on subject open.
///
/// Reminders fire from 18:00 local time onward, never on Sundays, only on
/// a weekly subject's class day, and only while today is still unmarked.
pub fn should_remind(subject: Option<&Subject>, now: NaiveDateTime) -> bool {
    let Some(subject) = subject else {
        return false;
    };

    if now.hour() < 18 {
        return false;
    }

    let weekday = now.weekday().num_days_from_sunday() as u8;
    if weekday == 0 {
        return false;
    }
    if subject.subject_type == SubjectType::Weekly && subject.weekly_day != Some(weekday) {
        return false;
    }

    // Any status counts as marked, clearing re-arms the reminder.
    !subject.records.contains_key(&local_day_string(now.date()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AttendanceStatus;
    use chrono::NaiveDate;
    use std::collections::BTreeMap;

    fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn subject(subject_type: SubjectType, weekly_day: Option<u8>) -> Subject {
        Subject {
            subject_type,
            weekly_day,
            records: BTreeMap::new(),
        }
    }

    #[test]
    fn no_open_subject_means_no_reminder() {
        // 2024-01-02 is a Tuesday.
        assert!(!should_remind(None, at(2024, 1, 2, 19, 0)));
    }

    #[test]
    fn fires_from_six_pm_onward() {
        let subject = subject(SubjectType::Regular, None);
        assert!(!should_remind(Some(&subject), at(2024, 1, 2, 17, 59)));
        assert!(should_remind(Some(&subject), at(2024, 1, 2, 18, 0)));
        assert!(should_remind(Some(&subject), at(2024, 1, 2, 23, 30)));
    }

    #[test]
    fn never_fires_on_sunday() {
        let subject = subject(SubjectType::Regular, None);
        // 2024-01-07 is a Sunday.
        assert!(!should_remind(Some(&subject), at(2024, 1, 7, 19, 0)));
    }

    #[test]
    fn weekly_subjects_only_fire_on_their_class_day() {
        let subject = subject(SubjectType::Weekly, Some(2));
        // Tuesday matches, Wednesday does not.
        assert!(should_remind(Some(&subject), at(2024, 1, 2, 19, 0)));
        assert!(!should_remind(Some(&subject), at(2024, 1, 3, 19, 0)));
    }

    #[test]
    fn any_mark_today_silences_the_reminder() {
        let mut subject = subject(SubjectType::Regular, None);
        subject
            .records
            .insert("2024-01-02".to_string(), AttendanceStatus::Absent);
        assert!(!should_remind(Some(&subject), at(2024, 1, 2, 19, 0)));

        subject.records.clear();
        assert!(should_remind(Some(&subject), at(2024, 1, 2, 19, 0)));
    }
}
