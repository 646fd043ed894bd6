use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::{
    EntityKind, Id, Record,
    validation::{self, FieldErrors},
};

labeled_enum! {
    #[derive(Default)]
    pub enum EmployeeStatus {
        #[default]
        Active => ("active", "Active"),
        Inactive => ("inactive", "Inactive"),
        OnLeave => ("on_leave", "On Leave"),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl Address {
    pub fn is_blank(&self) -> bool {
        [&self.street, &self.city, &self.state, &self.zip_code]
            .iter()
            .all(|part| part.trim().is_empty())
    }

    /// "City, State" with whichever parts are present.
    pub fn locality(&self) -> String {
        [self.city.trim(), self.state.trim()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub department_id: Id,
    pub role_id: Id,
    pub status: EmployeeStatus,
    #[serde(default)]
    pub address: Address,
    pub join_date: Date,
    #[serde(default)]
    pub photo_url: Option<String>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn initials(&self) -> String {
        self.first_name
            .chars()
            .take(1)
            .chain(self.last_name.chars().take(1))
            .flat_map(char::to_uppercase)
            .collect()
    }

    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }

    /// Case-insensitive substring match on first name, last name or email.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        [&self.first_name, &self.last_name, &self.email]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

impl Record for Employee {
    const KIND: EntityKind = EntityKind::Employee;

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        validation::check_person(
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.phone,
            &mut errors,
        );
        errors
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn sample() -> Employee {
        Employee {
            first_name: "Sarah".into(),
            last_name: "Johnson".into(),
            email: "sarah.johnson@company.com".into(),
            phone: "+1 (555) 123-4567".into(),
            department_id: Id::new(1),
            role_id: Id::new(2),
            status: EmployeeStatus::Active,
            address: Address::default(),
            join_date: date(2022, 3, 15),
            photo_url: None,
        }
    }

    #[test]
    fn matches_any_name_or_email_ignoring_case() {
        let employee = sample();
        assert!(employee.matches("sarah"));
        assert!(employee.matches("JOHN"));
        assert!(employee.matches("company.com"));
        assert!(!employee.matches("smith"));
    }

    #[test]
    fn initials_are_uppercased() {
        let mut employee = sample();
        employee.first_name = "ana".into();
        employee.last_name = "de la cruz".into();
        assert_eq!(employee.initials(), "AD");
    }

    #[test]
    fn status_uses_snake_case_on_the_wire() {
        assert_eq!(
            serde_json::to_string(&EmployeeStatus::OnLeave).unwrap(),
            "\"on_leave\""
        );
        assert_eq!("inactive".parse::<EmployeeStatus>().unwrap(), EmployeeStatus::Inactive);
        assert_eq!(EmployeeStatus::OnLeave.label(), "On Leave");
    }

    #[test]
    fn validation_flags_bad_email() {
        let mut employee = sample();
        employee.email = "not-an-email".into();
        let errors = employee.validate();
        assert_eq!(errors.get(validation::field::EMAIL), Some("Email is invalid"));
    }

    #[test]
    fn locality_skips_blank_parts() {
        let address = Address {
            city: "Austin".into(),
            ..Address::default()
        };
        assert_eq!(address.locality(), "Austin");
        assert!(!address.is_blank());
        assert!(Address::default().is_blank());
    }
}
