use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three fixed account roles. Each maps to its own signing secret,
/// so a role is proven by which secret a bearer token verifies under.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "admin")]
    Admin,
    #[serde(rename = "editor")]
    Editor,
    #[serde(rename = "read-only")]
    ReadOnly,
}

impl Role {
    pub fn parse(s: &str) -> Option<Role> {
        match s {
            "admin" => Some(Role::Admin),
            "editor" => Some(Role::Editor),
            "read-only" => Some(Role::ReadOnly),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Editor => "editor",
            Role::ReadOnly => "read-only",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registration body. Every field is optional at the wire so the
/// validator can report missing fields instead of a deserialize error.
#[derive(Serialize, Deserialize, Clone)]
pub struct RRegister {
    pub name: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub email: Option<String>,
}

/// What actually gets inserted: validated fields plus the bcrypt hash.
#[derive(Serialize, Deserialize)]
pub struct DBUserCreate {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

#[derive(Serialize, Deserialize)]
pub struct RLogin {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
pub struct MessageRes {
    pub message: String,
}

#[derive(Serialize, Deserialize)]
pub struct LoginRes {
    pub message: String,
    pub token: String,
}

/// Read-side view of a user. The password hash never leaves the service.
#[derive(Serialize, Deserialize)]
pub struct PublicUser {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<entity::user::Model> for PublicUser {
    fn from(m: entity::user::Model) -> Self {
        PublicUser {
            id: m.id,
            name: m.name,
            email: m.email,
            role: m.role,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
