//! Customer testimonial model and DTOs.

use courtside_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `testimonials` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Testimonial {
    pub id: DbId,
    pub author_name: String,
    pub author_title: Option<String>,
    pub content: String,
    /// 1-5 stars.
    pub rating: i16,
    pub testimonial_image: Option<String>,
    pub testimonial_status: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTestimonial {
    #[validate(length(min = 1, max = 150, message = "is required (max 150 characters)"))]
    pub author_name: String,
    #[validate(length(max = 150))]
    pub author_title: Option<String>,
    #[validate(length(min = 1, message = "is required"))]
    pub content: String,
    #[validate(range(min = 1, max = 5, message = "must be between 1 and 5"))]
    pub rating: i16,
    pub testimonial_image: Option<String>,
    pub testimonial_status: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTestimonial {
    #[validate(length(min = 1, max = 150, message = "must be 1-150 characters"))]
    pub author_name: Option<String>,
    #[validate(length(max = 150))]
    pub author_title: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub content: Option<String>,
    #[validate(range(min = 1, max = 5, message = "must be between 1 and 5"))]
    pub rating: Option<i16>,
    pub testimonial_image: Option<String>,
    pub testimonial_status: Option<bool>,
}
