use serde::{Deserialize, Serialize};

use crate::{
    EntityKind, Record,
    validation::{self, FieldErrors},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Seniority, 1 being entry level.
    #[serde(default = "default_level")]
    pub level: u8,
    #[serde(default)]
    pub permissions: Vec<String>,
}

fn default_level() -> u8 {
    1
}

impl Role {
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }
}

impl Record for Role {
    const KIND: EntityKind = EntityKind::Role;

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        validation::check_required(validation::field::NAME, &self.name, "Name is required", &mut errors);
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_default() {
        let role: Role = serde_json::from_str(r#"{"name":"Designer"}"#).unwrap();
        assert_eq!(role.level, 1);
        assert!(role.permissions.is_empty());
        assert!(!role.has_permission("approve_leave"));
    }

    #[test]
    fn blank_name_is_invalid() {
        let role: Role = serde_json::from_str(r#"{"name":"  "}"#).unwrap();
        assert_eq!(role.validate().get(validation::field::NAME), Some("Name is required"));
    }
}
