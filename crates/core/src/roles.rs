//! Administrator role definitions.
//!
//! The constants must match the seed data in
//! `20250310000001_create_administrators_table.sql`. The `role` column itself
//! is free text; only the create-administrator input constrains values to
//! this enumeration.

use serde::{Deserialize, Serialize};

pub const ROLE_ADM: &str = "Adm";
pub const ROLE_EDITOR: &str = "Editor";

/// Accepted role values for the create-administrator input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Adm,
    Editor,
}

impl Role {
    /// The role name as stored in the `role` column and embedded in tokens.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Adm => ROLE_ADM,
            Role::Editor => ROLE_EDITOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_names_match_constants() {
        assert_eq!(Role::Adm.as_str(), ROLE_ADM);
        assert_eq!(Role::Editor.as_str(), ROLE_EDITOR);
    }

    #[test]
    fn role_deserializes_from_exact_names() {
        let role: Role = serde_json::from_str("\"Adm\"").unwrap();
        assert_eq!(role, Role::Adm);
        assert!(serde_json::from_str::<Role>("\"adm\"").is_err());
    }
}
