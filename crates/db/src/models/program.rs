//! Program catalog: categories and programs.
//!
//! Programs carry an age range and a list of key selling points, and
//! optionally belong to a category.

use courtside_core::types::{DbId, Timestamp};
use courtside_core::validation::{check_ordered, SLUG_RE};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// A row from the `program_categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProgramCategory {
    pub id: DbId,
    pub category_name: String,
    pub slug: String,
    pub description: Option<String>,
    pub category_status: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProgramCategory {
    #[validate(length(min = 1, max = 100, message = "is required (max 100 characters)"))]
    pub category_name: String,
    #[validate(regex(path = *SLUG_RE, message = "must be a lowercase, hyphen-separated slug"))]
    pub slug: String,
    pub description: Option<String>,
    pub category_status: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProgramCategory {
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub category_name: Option<String>,
    #[validate(regex(path = *SLUG_RE, message = "must be a lowercase, hyphen-separated slug"))]
    pub slug: Option<String>,
    pub description: Option<String>,
    pub category_status: Option<bool>,
}

// ---------------------------------------------------------------------------
// Programs
// ---------------------------------------------------------------------------

/// A row from `programs`, with the category name joined in.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Program {
    pub id: DbId,
    pub category_id: Option<DbId>,
    pub category_name: Option<String>,
    pub program_name: String,
    pub slug: String,
    pub description: Option<String>,
    pub age_min: Option<i32>,
    pub age_max: Option<i32>,
    pub key_points: Vec<String>,
    pub program_image: Option<String>,
    pub program_status: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_create_ages"))]
pub struct CreateProgram {
    pub category_id: Option<DbId>,
    #[validate(length(min = 1, max = 150, message = "is required (max 150 characters)"))]
    pub program_name: String,
    #[validate(regex(path = *SLUG_RE, message = "must be a lowercase, hyphen-separated slug"))]
    pub slug: String,
    pub description: Option<String>,
    #[validate(range(min = 0, max = 120, message = "must be between 0 and 120"))]
    pub age_min: Option<i32>,
    #[validate(range(min = 0, max = 120, message = "must be between 0 and 120"))]
    pub age_max: Option<i32>,
    /// Defaults to an empty list if omitted.
    pub key_points: Option<Vec<String>>,
    pub program_image: Option<String>,
    pub program_status: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[validate(schema(function = "validate_update_ages"))]
pub struct UpdateProgram {
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub category_id: Option<Option<DbId>>,
    #[validate(length(min = 1, max = 150, message = "must be 1-150 characters"))]
    pub program_name: Option<String>,
    #[validate(regex(path = *SLUG_RE, message = "must be a lowercase, hyphen-separated slug"))]
    pub slug: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 0, max = 120, message = "must be between 0 and 120"))]
    pub age_min: Option<i32>,
    #[validate(range(min = 0, max = 120, message = "must be between 0 and 120"))]
    pub age_max: Option<i32>,
    pub key_points: Option<Vec<String>>,
    pub program_image: Option<String>,
    pub program_status: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProgramFilter {
    pub category_id: Option<DbId>,
}

const AGE_RANGE_MESSAGE: &str = "age_min must not exceed age_max";

fn validate_create_ages(input: &CreateProgram) -> Result<(), ValidationError> {
    check_ordered(input.age_min, input.age_max, "age_range", AGE_RANGE_MESSAGE)
}

fn validate_update_ages(input: &UpdateProgram) -> Result<(), ValidationError> {
    check_ordered(input.age_min, input.age_max, "age_range", AGE_RANGE_MESSAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program(age_min: Option<i32>, age_max: Option<i32>) -> CreateProgram {
        CreateProgram {
            category_id: None,
            program_name: "Junior Tennis".into(),
            slug: "junior-tennis".into(),
            description: None,
            age_min,
            age_max,
            key_points: None,
            program_image: None,
            program_status: None,
        }
    }

    #[test]
    fn inverted_age_range_is_rejected() {
        assert!(program(Some(6), Some(12)).validate().is_ok());
        assert!(program(Some(12), Some(6)).validate().is_err());
        assert!(program(None, Some(6)).validate().is_ok());
    }

    #[test]
    fn ages_are_bounded() {
        assert!(program(Some(-1), None).validate().is_err());
        assert!(program(None, Some(200)).validate().is_err());
    }
}
