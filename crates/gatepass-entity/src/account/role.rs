//! Account role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of account roles.
///
/// Role names are matched exactly: `"Admin"`, `"Security"`, `"Visitor"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "account_role")]
pub enum Role {
    /// Registers security staff and reads everything.
    Admin,
    /// Registers visitors and issues passes.
    Security,
    /// A registered visitor. Has no login of its own.
    Visitor,
}

impl Role {
    /// Return the role name as stored in documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Security => "Security",
            Self::Visitor => "Visitor",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = gatepass_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Admin" => Ok(Self::Admin),
            "Security" => Ok(Self::Security),
            "Visitor" => Ok(Self::Visitor),
            _ => Err(gatepass_core::AppError::validation(format!(
                "Invalid role: '{s}'. Expected one of: Admin, Security, Visitor"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_is_case_sensitive() {
        assert_eq!("Admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("Security".parse::<Role>().unwrap(), Role::Security);
        assert!("admin".parse::<Role>().is_err());
        assert!("SECURITY".parse::<Role>().is_err());
    }

    #[test]
    fn test_serde_uses_document_casing() {
        assert_eq!(serde_json::to_string(&Role::Visitor).unwrap(), "\"Visitor\"");
        let role: Role = serde_json::from_str("\"Security\"").unwrap();
        assert_eq!(role, Role::Security);
        assert!(serde_json::from_str::<Role>("\"security\"").is_err());
    }
}
