//! Repository for the `contacts` table.
//!
//! Contacts use their `status` column as the soft-delete marker: deleting an
//! inquiry marks it done.

use async_trait::async_trait;
use courtside_core::status::ContactStatus;
use courtside_core::types::DbId;
use sqlx::PgPool;

use crate::models::contact::{Contact, ContactFilter, CreateContact, UpdateContact};
use crate::resource::{ColumnFilter, FilterSet, Resource, SoftDelete, StatusResource};

pub struct ContactRepo;

#[async_trait]
impl Resource for ContactRepo {
    const ENTITY: &'static str = "Contact";
    const TABLE: &'static str = "contacts";
    const COLUMNS: &'static str = "contacts.id, contacts.full_name, contacts.email, \
        contacts.phone, contacts.subject, contacts.message, contacts.status, \
        contacts.created_at, contacts.updated_at";
    const LABEL_COLUMN: &'static str = "contacts.full_name";
    const SOFT_DELETE: SoftDelete = SoftDelete::Terminal {
        column: "status",
        value: "DONE",
    };

    type Row = Contact;
    type Create = CreateContact;
    type Update = UpdateContact;
    type Filter = ContactFilter;

    fn filters(filter: &ContactFilter) -> Vec<ColumnFilter> {
        FilterSet::new()
            .eq("contacts.status", filter.status.map(ContactStatus::as_str))
            .into_vec()
    }

    async fn insert(pool: &PgPool, input: &CreateContact) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO contacts (full_name, email, phone, subject, message, status)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 'NEW'))
             RETURNING id",
        )
        .bind(&input.full_name)
        .bind(&input.email)
        .bind(&input.phone)
        .bind(&input.subject)
        .bind(&input.message)
        .bind(input.status.map(ContactStatus::as_str))
        .fetch_one(pool)
        .await
    }

    async fn update(pool: &PgPool, id: DbId, input: &UpdateContact) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE contacts SET
                full_name = COALESCE($2, full_name),
                email = COALESCE($3, email),
                phone = COALESCE($4, phone),
                subject = COALESCE($5, subject),
                message = COALESCE($6, message),
                status = COALESCE($7, status)
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.full_name)
        .bind(&input.email)
        .bind(&input.phone)
        .bind(&input.subject)
        .bind(&input.message)
        .bind(input.status.map(ContactStatus::as_str))
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}

impl StatusResource for ContactRepo {
    type Status = ContactStatus;

    fn status_str(status: ContactStatus) -> &'static str {
        status.as_str()
    }
}
