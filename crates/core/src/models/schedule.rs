use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::FormErrors;
use super::shift::ShiftResponse;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateScheduleRequest {
    pub name: Option<String>,
    pub start_day: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// A schedule payload that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSchedule {
    pub name: String,
    pub start_day: NaiveDate,
    pub end_date: NaiveDate,
}

impl CreateScheduleRequest {
    /// All three fields are required; a blank name counts as missing.
    /// `end_date >= start_day` is deliberately not checked.
    pub fn validate(self) -> Result<NewSchedule, FormErrors> {
        let mut errors = FormErrors::new();

        let name = match self.name.as_deref().map(str::trim) {
            Some(n) if !n.is_empty() => Some(n.to_string()),
            _ => {
                errors.push("name", "This field is required.");
                None
            }
        };
        if self.start_day.is_none() {
            errors.push("start_day", "This field is required.");
        }
        if self.end_date.is_none() {
            errors.push("end_date", "This field is required.");
        }

        match (name, self.start_day, self.end_date) {
            (Some(name), Some(start_day), Some(end_date)) => Ok(NewSchedule {
                name,
                start_day,
                end_date,
            }),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditScheduleRequest {
    pub name: Option<String>,
    pub start_day: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Validated partial update. Absent fields keep their stored value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleChanges {
    pub name: Option<String>,
    pub start_day: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl EditScheduleRequest {
    /// A name, when present, must not be blank.
    pub fn validate(self) -> Result<ScheduleChanges, FormErrors> {
        if let Some(name) = self.name.as_deref() {
            if name.trim().is_empty() {
                return Err(FormErrors::single("name", "This field is required."));
            }
        }
        Ok(ScheduleChanges {
            name: self.name.map(|n| n.trim().to_string()),
            start_day: self.start_day,
            end_date: self.end_date,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub id: Uuid,
    pub name: String,
    pub start_day: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleDetailResponse {
    pub id: Uuid,
    pub name: String,
    pub start_day: NaiveDate,
    pub end_date: NaiveDate,
    pub shifts: Vec<ShiftResponse>,
}

/// Printable checkout view: the schedule, its shifts, and the headcount the
/// shifts can absorb in total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleCheckoutResponse {
    pub id: Uuid,
    pub name: String,
    pub start_day: NaiveDate,
    pub end_date: NaiveDate,
    pub shifts: Vec<ShiftResponse>,
    pub total_capacity: i64,
}
