use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors;

/// Upper bound shared by `title` and `writer`; matches the column width.
pub const MAX_TEXT_LEN: usize = 255;

/// A song row. `id` is internal and never crosses the API boundary.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "song")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(skip)]
    pub id: i32,
    #[sea_orm(unique)]
    pub public_id: String,
    pub title: String,
    pub writer: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Fresh random public handle for a new song.
pub fn new_public_id() -> String {
    Uuid::new_v4().to_string()
}

pub fn validate_public_id(p: &str) -> Result<(), errors::ModelError> {
    if p.trim().is_empty() {
        return Err(errors::ModelError::Validation("public_id required".into()));
    }
    Ok(())
}

fn validate_text(field: &str, v: &str) -> Result<(), errors::ModelError> {
    if v.trim().is_empty() {
        return Err(errors::ModelError::Validation(format!("{field} required")));
    }
    if v.chars().count() > MAX_TEXT_LEN {
        let msg = format!("{field} longer than {MAX_TEXT_LEN} characters");
        return Err(errors::ModelError::Validation(msg));
    }
    Ok(())
}

pub fn validate_title(t: &str) -> Result<(), errors::ModelError> { validate_text("title", t) }

pub fn validate_writer(w: &str) -> Result<(), errors::ModelError> { validate_text("writer", w) }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_ids_are_uuids_and_distinct() {
        let a = new_public_id();
        let b = new_public_id();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(&a).is_ok());
        assert_eq!(a.len(), 36);
    }

    #[test]
    fn blank_fields_are_rejected() {
        assert!(validate_title("   ").is_err());
        assert!(validate_writer("").is_err());
        assert!(validate_public_id(" ").is_err());
        assert!(validate_title("Imagine").is_ok());
        assert!(validate_public_id("anything").is_ok());
    }

    #[test]
    fn overlong_text_is_rejected() {
        let long = "x".repeat(MAX_TEXT_LEN + 1);
        assert!(matches!(validate_writer(&long), Err(errors::ModelError::Validation(_))));
        assert!(validate_writer(&"x".repeat(MAX_TEXT_LEN)).is_ok());
    }

    #[test]
    fn serialized_song_hides_internal_id() {
        let m = Model { id: 7, public_id: "p".into(), title: "Imagine".into(), writer: "Lennon".into() };
        let v = serde_json::to_value(&m).unwrap();
        assert_eq!(v, serde_json::json!({"publicId": "p", "title": "Imagine", "writer": "Lennon"}));
    }
}
