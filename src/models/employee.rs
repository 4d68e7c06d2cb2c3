//! Employee model.

use serde::{Deserialize, Serialize};

/// An employee record.
///
/// The same shape is used for request bodies: a missing field deserializes as
/// `None`, which is what the partial update relies on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Assigned by the store on insert
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl Employee {
    /// Build an unsaved employee.
    #[cfg(test)]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            email: Some(email.into()),
        }
    }

    /// Overwrite every field that is set on `patch`. The id is never touched.
    pub fn merge(&mut self, patch: Employee) {
        if let Some(first_name) = patch.first_name {
            self.first_name = Some(first_name);
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = Some(last_name);
        }
        if let Some(email) = patch.email {
            self.email = Some(email);
        }
    }
}
