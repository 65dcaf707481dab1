use crate::calendar::{next_month, prev_month, project_month};
use crate::dates::local_day_string;
use crate::errors::AppError;
use crate::models::{
    AttendanceStatus, CreateSubjectRequest, MarkRequest, MarkResponse, MonthNav, MonthQuery,
    MonthResponse, Store, Subject, SubjectListResponse, SubjectSummary, SubjectType, YearMonth,
};
use crate::reminder::should_remind;
use crate::state::AppState;
use crate::stats::{compute_stats, risk_level};
use crate::storage::persist_data;
use crate::store::{self, StoreError};
use crate::ui::{render_index, service_worker_script};
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    Json,
};
use chrono::{Datelike, Local, NaiveDate};

pub async fn index() -> Html<&'static str> {
    Html(render_index())
}

pub async fn service_worker() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        service_worker_script(),
    )
}

pub async fn list_subjects(State(state): State<AppState>) -> Json<SubjectListResponse> {
    let data = state.data.lock().await;
    Json(SubjectListResponse {
        subjects: summaries(&data),
    })
}

pub async fn create_subject(
    State(state): State<AppState>,
    Json(payload): Json<CreateSubjectRequest>,
) -> Result<(StatusCode, Json<SubjectListResponse>), AppError> {
    let weekly_day = match payload.subject_type {
        SubjectType::Weekly => match payload.weekly_day {
            Some(day @ 0..=6) => Some(day),
            Some(_) => return Err(AppError::bad_request("weeklyDay must be between 0 and 6")),
            None => return Err(AppError::bad_request("weekly subjects need a weeklyDay")),
        },
        SubjectType::Regular => None,
    };

    let mut data = state.data.lock().await;
    store::create_subject(&mut data, &payload.name, payload.subject_type, weekly_day)?;
    persist_data(&state.data_path, &data).await?;

    Ok((
        StatusCode::CREATED,
        Json(SubjectListResponse {
            subjects: summaries(&data),
        }),
    ))
}

pub async fn delete_subject(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<SubjectListResponse>, AppError> {
    let mut data = state.data.lock().await;
    store::remove_subject(&mut data, &name)?;
    persist_data(&state.data_path, &data).await?;

    Ok(Json(SubjectListResponse {
        subjects: summaries(&data),
    }))
}

/// Calendar projection for one subject and month. Opening a subject hits
/// this without year/month, which also serves as the subject-open reminder
/// evaluation point.
pub async fn month_view(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<MonthResponse>, AppError> {
    let now = Local::now().naive_local();
    let today = now.date();
    let year = query.year.unwrap_or_else(|| today.year());
    let month = query.month.unwrap_or_else(|| today.month());

    let data = state.data.lock().await;
    let subject = data.subjects.get(&name).ok_or(StoreError::NotFound)?;

    let view = project_month(subject, year, month, today)
        .ok_or_else(|| AppError::bad_request("year/month out of range"))?;
    let stats = compute_stats(&subject.records);
    let current = (today.year(), today.month());
    let (prev_y, prev_m) = prev_month(year, month);
    let (next_y, next_m) = next_month(year, month, current);

    Ok(Json(MonthResponse {
        subject: name,
        today: local_day_string(today),
        nav: MonthNav {
            prev: YearMonth {
                year: prev_y,
                month: prev_m,
            },
            next: YearMonth {
                year: next_y,
                month: next_m,
            },
            next_enabled: !view.at_current_month,
        },
        stats,
        level: risk_level(stats.percent),
        remind_today: should_remind(Some(subject), now),
        month: view,
    }))
}

pub async fn set_record(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(payload): Json<MarkRequest>,
) -> Result<Json<MarkResponse>, AppError> {
    let parsed = NaiveDate::parse_from_str(payload.day.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::bad_request("day must be a YYYY-MM-DD date"))?;
    // Re-format so every stored key goes through the canonical formatter.
    let day = local_day_string(parsed);

    let status = match payload.action.trim() {
        "present" => Some(AttendanceStatus::Present),
        "absent" => Some(AttendanceStatus::Absent),
        "clear" => None,
        _ => {
            return Err(AppError::bad_request(
                "action must be 'present', 'absent' or 'clear'",
            ));
        }
    };

    let now = Local::now().naive_local();
    let mut data = state.data.lock().await;
    store::set_status(&mut data, &name, &day, status)?;
    persist_data(&state.data_path, &data).await?;

    let subject = data.subjects.get(&name).ok_or(StoreError::NotFound)?;
    let stats = compute_stats(&subject.records);

    Ok(Json(MarkResponse {
        day,
        status,
        today: local_day_string(now.date()),
        stats,
        level: risk_level(stats.percent),
        remind_today: should_remind(Some(subject), now),
        subject: name,
    }))
}

fn summaries(data: &Store) -> Vec<SubjectSummary> {
    data.subjects
        .iter()
        .map(|(name, subject)| summarize(name, subject))
        .collect()
}

fn summarize(name: &str, subject: &Subject) -> SubjectSummary {
    let stats = compute_stats(&subject.records);
    SubjectSummary {
        name: name.to_string(),
        subject_type: subject.subject_type,
        weekly_day: subject.weekly_day,
        stats,
        level: risk_level(stats.percent),
    }
}
