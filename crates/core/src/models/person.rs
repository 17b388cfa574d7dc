use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::FormErrors;

/// Job titles a staff member can hold. Serialized by the short codes the
/// roster has always used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StaffTitle {
    #[serde(rename = "Mgr")]
    Manager,
    #[serde(rename = "Pharm")]
    Pharmacist,
    #[serde(rename = "Tech")]
    Technician,
    #[serde(rename = "Intern")]
    Intern,
}

impl StaffTitle {
    pub const ALL: [StaffTitle; 4] = [
        StaffTitle::Manager,
        StaffTitle::Pharmacist,
        StaffTitle::Technician,
        StaffTitle::Intern,
    ];

    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "Mgr" => Some(StaffTitle::Manager),
            "Pharm" => Some(StaffTitle::Pharmacist),
            "Tech" => Some(StaffTitle::Technician),
            "Intern" => Some(StaffTitle::Intern),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            StaffTitle::Manager => "Mgr",
            StaffTitle::Pharmacist => "Pharm",
            StaffTitle::Technician => "Tech",
            StaffTitle::Intern => "Intern",
        }
    }
}

/// Payload for the add-person workflow, which provisions the backing
/// account together with the roster entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePersonRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPerson {
    pub username: String,
    pub password: String,
    pub name: String,
    pub title: StaffTitle,
}

impl CreatePersonRequest {
    pub fn validate(self) -> Result<NewPerson, FormErrors> {
        let mut errors = FormErrors::new();

        let username = match self.username.as_deref().map(str::trim) {
            Some(u) if !u.is_empty() => Some(u.to_string()),
            _ => {
                errors.push("username", "This field is required.");
                None
            }
        };
        let password = match self.password.as_deref() {
            Some(p) if !p.is_empty() => Some(p.to_string()),
            _ => {
                errors.push("password", "This field is required.");
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
        let title = match self.title.as_deref().map(StaffTitle::parse) {
            Some(Some(t)) => Some(t),
            _ => {
                errors.push("title", "Select a valid choice.");
                None
            }
        };

        match (username, password, name, title) {
            (Some(username), Some(password), Some(name), Some(title)) => Ok(NewPerson {
                username,
                password,
                name,
                title,
            }),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonResponse {
    pub id: Uuid,
    pub name: String,
    pub title: String,
    /// Backing account, absent once the account has been deleted.
    pub user_id: Option<Uuid>,
}
