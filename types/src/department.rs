use serde::{Deserialize, Serialize};

use crate::{
    EntityKind, Id, Record,
    validation::{self, FieldErrors},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Dangling ids are allowed; joins render them as unknown.
    #[serde(default)]
    pub manager_id: Option<Id>,
}

impl Record for Department {
    const KIND: EntityKind = EntityKind::Department;

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        validation::check_required(validation::field::NAME, &self.name, "Name is required", &mut errors);
        errors
    }
}
