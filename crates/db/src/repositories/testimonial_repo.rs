//! Repository for the `testimonials` table.

use async_trait::async_trait;
use courtside_core::types::DbId;
use sqlx::PgPool;

use crate::models::testimonial::{CreateTestimonial, Testimonial, UpdateTestimonial};
use crate::resource::{ColumnFilter, NoFilter, Resource, SoftDelete};

pub struct TestimonialRepo;

#[async_trait]
impl Resource for TestimonialRepo {
    const ENTITY: &'static str = "Testimonial";
    const TABLE: &'static str = "testimonials";
    const COLUMNS: &'static str = "testimonials.id, testimonials.author_name, \
        testimonials.author_title, testimonials.content, testimonials.rating, \
        testimonials.testimonial_image, testimonials.testimonial_status, \
        testimonials.created_at, testimonials.updated_at";
    const LABEL_COLUMN: &'static str = "testimonials.author_name";
    const SOFT_DELETE: SoftDelete = SoftDelete::Flag("testimonial_status");

    type Row = Testimonial;
    type Create = CreateTestimonial;
    type Update = UpdateTestimonial;
    type Filter = NoFilter;

    fn filters(_filter: &NoFilter) -> Vec<ColumnFilter> {
        Vec::new()
    }

    async fn insert(pool: &PgPool, input: &CreateTestimonial) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO testimonials
                (author_name, author_title, content, rating, testimonial_image,
                 testimonial_status)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, TRUE))
             RETURNING id",
        )
        .bind(&input.author_name)
        .bind(&input.author_title)
        .bind(&input.content)
        .bind(input.rating)
        .bind(&input.testimonial_image)
        .bind(input.testimonial_status)
        .fetch_one(pool)
        .await
    }

    async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTestimonial,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE testimonials SET
                author_name = COALESCE($2, author_name),
                author_title = COALESCE($3, author_title),
                content = COALESCE($4, content),
                rating = COALESCE($5, rating),
                testimonial_image = COALESCE($6, testimonial_image),
                testimonial_status = COALESCE($7, testimonial_status)
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.author_name)
        .bind(&input.author_title)
        .bind(&input.content)
        .bind(input.rating)
        .bind(&input.testimonial_image)
        .bind(input.testimonial_status)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
