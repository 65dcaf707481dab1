use crate::dates::local_day_string;
use crate::models::{DayCell, DimReason, MonthView, Subject, SubjectType};
use chrono::{Datelike, NaiveDate};

/// Projects one calendar month of a subject into display cells, one per day.
///
/// Precedence per day: weekends first (never attendance-eligible), then
/// non-class weekdays of a weekly subject, then days after `today`. Whatever
/// remains is a clickable class day carrying its recorded status. Future
/// days keep a recorded status visible should one exist; weekend and
/// non-class cells suppress it.
///
/// Months are 1-12; a year/month that chrono cannot represent yields `None`.
pub fn project_month(
    subject: &Subject,
    year: i32,
    month: u32,
    today: NaiveDate,
) -> Option<MonthView> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let days = days_in_month(year, month)?;

    let mut cells = Vec::with_capacity(days as usize);
    for day in 1..=days {
        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        let weekday = date.weekday().num_days_from_sunday() as u8;
        let key = local_day_string(date);

        let (status, interactable, dim) = if weekday == 0 || weekday == 6 {
            (None, false, Some(DimReason::Weekend))
        } else if subject.subject_type == SubjectType::Weekly
            && subject.weekly_day != Some(weekday)
        {
            (None, false, Some(DimReason::NonClassDay))
        } else if date > today {
            (subject.records.get(&key).copied(), false, Some(DimReason::Future))
        } else {
            (subject.records.get(&key).copied(), true, None)
        };

        cells.push(DayCell {
            day,
            weekday,
            date: key,
            status,
            interactable,
            dim,
        });
    }

    Some(MonthView {
        year,
        month,
        label: first.format("%B %Y").to_string(),
        at_current_month: year == today.year() && month == today.month(),
        cells,
    })
}

pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }?;
    Some(next.pred_opt()?.day())
}

/// One month back, carrying the year across January.
pub fn prev_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// One month forward, carrying the year across December. Forward navigation
/// stops at the real-world current month: once `(year, month)` equals
/// `current`, the pair is returned unchanged.
pub fn next_month(year: i32, month: u32, current: (i32, u32)) -> (i32, u32) {
    if (year, month) == current {
        return (year, month);
    }
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AttendanceStatus;
    use std::collections::BTreeMap;

    fn weekly_subject(weekly_day: u8) -> Subject {
        Subject {
            subject_type: SubjectType::Weekly,
            weekly_day: Some(weekly_day),
            records: BTreeMap::new(),
        }
    }

    fn regular_subject() -> Subject {
        Subject {
            subject_type: SubjectType::Regular,
            weekly_day: None,
            records: BTreeMap::new(),
        }
    }

    #[test]
    fn weekly_subject_dims_other_weekdays() {
        // January 2024: the 1st is a Monday.
        let subject = weekly_subject(2);
        let today = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let view = project_month(&subject, 2024, 1, today).unwrap();

        assert_eq!(view.cells.len(), 31);
        for cell in &view.cells {
            match cell.weekday {
                0 | 6 => assert_eq!(cell.dim, Some(DimReason::Weekend)),
                2 => {
                    assert_eq!(cell.dim, None);
                    assert!(cell.interactable);
                }
                _ => {
                    assert_eq!(cell.dim, Some(DimReason::NonClassDay));
                    assert!(!cell.interactable);
                }
            }
        }
    }

    #[test]
    fn weekends_take_precedence_over_everything() {
        // Weekly subject meeting on Saturday: the weekend rule still wins.
        let subject = weekly_subject(6);
        let today = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let view = project_month(&subject, 2024, 1, today).unwrap();

        for cell in view.cells.iter().filter(|cell| cell.weekday == 6) {
            assert_eq!(cell.dim, Some(DimReason::Weekend));
            assert!(!cell.interactable);
        }
    }

    #[test]
    fn days_after_today_are_future_and_not_interactable() {
        let subject = regular_subject();
        let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let view = project_month(&subject, 2024, 1, today).unwrap();

        // Jan 15 2024 is a Monday, Jan 16 a Tuesday.
        let monday = &view.cells[14];
        assert!(monday.interactable);
        assert_eq!(monday.dim, None);

        let tuesday = &view.cells[15];
        assert!(!tuesday.interactable);
        assert_eq!(tuesday.dim, Some(DimReason::Future));
    }

    #[test]
    fn entirely_future_months_are_all_dimmed() {
        let subject = regular_subject();
        let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let view = project_month(&subject, 2024, 2, today).unwrap();

        for cell in &view.cells {
            assert!(!cell.interactable);
            assert!(matches!(
                cell.dim,
                Some(DimReason::Future) | Some(DimReason::Weekend)
            ));
        }
    }

    #[test]
    fn future_cells_still_surface_a_recorded_status() {
        let mut subject = regular_subject();
        subject
            .records
            .insert("2024-01-22".to_string(), AttendanceStatus::Present);
        let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let view = project_month(&subject, 2024, 1, today).unwrap();

        let cell = &view.cells[21];
        assert_eq!(cell.dim, Some(DimReason::Future));
        assert_eq!(cell.status, Some(AttendanceStatus::Present));
    }

    #[test]
    fn weekend_cells_suppress_status() {
        let mut subject = regular_subject();
        subject
            .records
            .insert("2024-01-06".to_string(), AttendanceStatus::Present);
        let today = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let view = project_month(&subject, 2024, 1, today).unwrap();

        let saturday = &view.cells[5];
        assert_eq!(saturday.dim, Some(DimReason::Weekend));
        assert_eq!(saturday.status, None);
    }

    #[test]
    fn cells_carry_canonical_day_keys() {
        let subject = regular_subject();
        let today = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        let view = project_month(&subject, 2024, 3, today).unwrap();
        assert_eq!(view.cells[6].date, "2024-03-07");
    }

    #[test]
    fn month_label_and_current_flag() {
        let subject = regular_subject();
        let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();

        let view = project_month(&subject, 2024, 1, today).unwrap();
        assert_eq!(view.label, "January 2024");
        assert!(view.at_current_month);

        let view = project_month(&subject, 2023, 12, today).unwrap();
        assert_eq!(view.label, "December 2023");
        assert!(!view.at_current_month);
    }

    #[test]
    fn invalid_months_are_rejected() {
        let subject = regular_subject();
        let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert!(project_month(&subject, 2024, 0, today).is_none());
        assert!(project_month(&subject, 2024, 13, today).is_none());
    }

    #[test]
    fn february_lengths() {
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2023, 2), Some(28));
        assert_eq!(days_in_month(2024, 12), Some(31));
    }

    #[test]
    fn navigation_wraps_across_year_boundaries() {
        assert_eq!(prev_month(2024, 1), (2023, 12));
        assert_eq!(prev_month(2024, 6), (2024, 5));
        assert_eq!(next_month(2023, 12, (2024, 6)), (2024, 1));
        assert_eq!(next_month(2024, 4, (2024, 6)), (2024, 5));
    }

    #[test]
    fn next_month_is_a_no_op_at_the_current_month() {
        assert_eq!(next_month(2024, 6, (2024, 6)), (2024, 6));
    }
}
