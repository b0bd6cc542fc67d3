//! Weekly class schedule model and DTOs.
//!
//! A schedule slot ties a program to a day of the week and a time window,
//! optionally with a trainer and a court.

use chrono::NaiveTime;
use courtside_core::types::{DbId, Timestamp};
use courtside_core::validation::error_with_message;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

/// A row from `schedules` with program, trainer and court names joined in.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Schedule {
    pub id: DbId,
    pub program_id: DbId,
    pub program_name: Option<String>,
    pub trainer_id: Option<DbId>,
    pub trainer_name: Option<String>,
    pub court_id: Option<DbId>,
    pub court_name: Option<String>,
    /// 1 = Monday ... 7 = Sunday.
    pub day_of_week: i16,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub schedule_status: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_create_window"))]
pub struct CreateSchedule {
    pub program_id: DbId,
    pub trainer_id: Option<DbId>,
    pub court_id: Option<DbId>,
    #[validate(range(min = 1, max = 7, message = "must be between 1 (Monday) and 7 (Sunday)"))]
    pub day_of_week: i16,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub schedule_status: Option<bool>,
}

/// Partial schedule update. An explicit `null` for `trainer_id` or
/// `court_id` detaches it; an absent key leaves it unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[validate(schema(function = "validate_update_window"))]
pub struct UpdateSchedule {
    pub program_id: Option<DbId>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub trainer_id: Option<Option<DbId>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub court_id: Option<Option<DbId>>,
    #[validate(range(min = 1, max = 7, message = "must be between 1 (Monday) and 7 (Sunday)"))]
    pub day_of_week: Option<i16>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub schedule_status: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScheduleFilter {
    pub program_id: Option<DbId>,
    pub trainer_id: Option<DbId>,
    pub court_id: Option<DbId>,
    pub day_of_week: Option<i16>,
}

fn window_error() -> ValidationError {
    error_with_message("time_window", "start_time must be before end_time")
}

fn validate_create_window(input: &CreateSchedule) -> Result<(), ValidationError> {
    if input.start_time >= input.end_time {
        return Err(window_error());
    }
    Ok(())
}

fn validate_update_window(input: &UpdateSchedule) -> Result<(), ValidationError> {
    match (input.start_time, input.end_time) {
        (Some(start), Some(end)) if start >= end => Err(window_error()),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn window_must_be_forward() {
        let mut input = CreateSchedule {
            program_id: 1,
            trainer_id: None,
            court_id: None,
            day_of_week: 3,
            start_time: time(9, 0),
            end_time: time(10, 30),
            schedule_status: None,
        };
        assert!(input.validate().is_ok());

        input.end_time = time(9, 0);
        assert!(input.validate().is_err());
    }

    #[test]
    fn day_of_week_is_bounded() {
        let input = UpdateSchedule {
            day_of_week: Some(8),
            ..Default::default()
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn null_and_absent_references_differ() {
        let absent: UpdateSchedule = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.trainer_id, None);

        let cleared: UpdateSchedule = serde_json::from_str(r#"{"trainer_id": null}"#).unwrap();
        assert_eq!(cleared.trainer_id, Some(None));

        let set: UpdateSchedule = serde_json::from_str(r#"{"court_id": 3}"#).unwrap();
        assert_eq!(set.court_id, Some(Some(3)));
    }

    #[test]
    fn partial_window_update_is_not_checked_here() {
        let input = UpdateSchedule {
            end_time: Some(time(6, 0)),
            ..Default::default()
        };
        assert!(input.validate().is_ok());
    }
}
