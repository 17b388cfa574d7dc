use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::FormErrors;

/// Kind of shift within a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShiftType {
    Main,
    Night,
    Weekend,
}

impl ShiftType {
    pub const ALL: [ShiftType; 3] = [ShiftType::Main, ShiftType::Night, ShiftType::Weekend];

    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "Main" => Some(ShiftType::Main),
            "Night" => Some(ShiftType::Night),
            "Weekend" => Some(ShiftType::Weekend),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            ShiftType::Main => "Main",
            ShiftType::Night => "Night",
            ShiftType::Weekend => "Weekend",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateShiftRequest {
    /// Id of the owning schedule.
    pub schedule: Option<Uuid>,
    pub name: Option<String>,
    pub capacity: Option<i32>,
    pub shift_type: Option<String>,
}

/// A shift payload that passed validation. The schedule reference still has
/// to be checked against the store before insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShift {
    pub schedule_id: Uuid,
    pub name: String,
    pub capacity: i32,
    pub shift_type: ShiftType,
}

impl CreateShiftRequest {
    pub fn validate(self) -> Result<NewShift, FormErrors> {
        let mut errors = FormErrors::new();

        let schedule_id = match self.schedule {
            Some(id) => Some(id),
            None => {
                errors.push("schedule", "This field is required.");
                None
            }
        };
        let name = match self.name.as_deref().map(str::trim) {
            Some(n) if !n.is_empty() => Some(n.to_string()),
            _ => {
                errors.push("name", "This field is required.");
                None
            }
        };
        let capacity = match self.capacity {
            Some(c) if c >= 1 => Some(c),
            Some(_) => {
                errors.push("capacity", "Capacity must be a positive number.");
                None
            }
            None => {
                errors.push("capacity", "This field is required.");
                None
            }
        };
        let shift_type = match self.shift_type.as_deref().map(ShiftType::parse) {
            Some(Some(t)) => Some(t),
            _ => {
                errors.push("shift_type", "Select a valid choice.");
                None
            }
        };

        match (schedule_id, name, capacity, shift_type) {
            (Some(schedule_id), Some(name), Some(capacity), Some(shift_type)) => Ok(NewShift {
                schedule_id,
                name,
                capacity,
                shift_type,
            }),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftResponse {
    pub id: Uuid,
    pub name: String,
    pub capacity: i32,
    pub shift_type: String,
}
