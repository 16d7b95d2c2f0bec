use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error as ThisError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Recruiter,
    JobSeeker,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Recruiter => "recruiter",
            Role::JobSeeker => "job_seeker",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
#[error("unknown role `{0}`")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recruiter" => Ok(Role::Recruiter),
            "job_seeker" => Ok(Role::JobSeeker),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// Free-form profile; replaced wholesale on every update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub company_description: Option<String>,
    pub location: String,
}

/// Stored account. The password is kept verbatim and never serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub email: String,
    pub password: String,
    pub role: Role,
    pub profile: Option<Profile>,
}

impl User {
    pub fn new(email: impl Into<String>, password: impl Into<String>, role: Role) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            role,
            profile: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    pub message: String,
    pub role: Role,
}

/// `?email=` query used by profile updates and liked-job lookups.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_uses_snake_case_on_the_wire() {
        assert_eq!(
            serde_json::to_string(&Role::JobSeeker).unwrap(),
            r#""job_seeker""#
        );
        assert_eq!("recruiter".parse::<Role>().unwrap(), Role::Recruiter);
        let err = "Recruiter".parse::<Role>().unwrap_err();
        assert_eq!(err, UnknownRole("Recruiter".to_string()));
        assert_eq!(err.to_string(), "unknown role `Recruiter`");
    }

    #[test]
    fn profile_optional_fields_default() {
        let p: Profile = serde_json::from_str(r#"{"name":"Ann","location":"NY"}"#).unwrap();
        assert_eq!(p.bio, None);
        assert!(p.skills.is_empty());
        assert_eq!(p.company_name, None);
    }

    #[test]
    fn signup_rejects_unknown_role() {
        let res = serde_json::from_str::<SignupRequest>(
            r#"{"email":"a@x.com","password":"pw","role":"admin"}"#,
        );
        assert!(res.is_err());
    }
}
