//! Generic CRUD resource abstraction.
//!
//! Every admin-managed entity implements [`Resource`] once: it names its
//! table, select list (including joined columns from related tables), the
//! dropdown label column, its soft-delete marker, and supplies the insert and
//! partial-update statements. [`CrudRepo`] then provides listing, detail,
//! for-select, soft delete and bulk soft delete for all of them.

use std::marker::PhantomData;

use async_trait::async_trait;
use courtside_core::pagination::PageRequest;
use courtside_core::types::DbId;
use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

// ---------------------------------------------------------------------------
// Building blocks
// ---------------------------------------------------------------------------

/// How a resource marks rows as deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoftDelete {
    /// A boolean column; `true` is active, `false` is deleted.
    Flag(&'static str),
    /// A text status column; `value` is the terminal (deleted) status.
    Terminal {
        column: &'static str,
        value: &'static str,
    },
}

impl SoftDelete {
    /// The marker column name.
    pub fn column(&self) -> &'static str {
        match self {
            SoftDelete::Flag(column) => column,
            SoftDelete::Terminal { column, .. } => column,
        }
    }

    /// `SET` clause that marks a row deleted.
    pub fn set_clause(&self) -> String {
        match self {
            SoftDelete::Flag(column) => format!("{column} = FALSE"),
            SoftDelete::Terminal { column, value } => format!("{column} = '{value}'"),
        }
    }

    /// Predicate matching active rows of `table`.
    pub fn active_predicate(&self, table: &str) -> String {
        match self {
            SoftDelete::Flag(column) => format!("{table}.{column} = TRUE"),
            SoftDelete::Terminal { column, value } => format!("{table}.{column} <> '{value}'"),
        }
    }

    /// Predicate matching deleted rows of `table`.
    pub fn inactive_predicate(&self, table: &str) -> String {
        match self {
            SoftDelete::Flag(column) => format!("{table}.{column} = FALSE"),
            SoftDelete::Terminal { column, value } => format!("{table}.{column} = '{value}'"),
        }
    }
}

/// A bindable equality-filter value.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Id(DbId),
    SmallInt(i16),
    Bool(bool),
    Text(String),
}

impl From<DbId> for FilterValue {
    fn from(value: DbId) -> Self {
        FilterValue::Id(value)
    }
}

impl From<i16> for FilterValue {
    fn from(value: i16) -> Self {
        FilterValue::SmallInt(value)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Bool(value)
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Text(value)
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Text(value.to_string())
    }
}

/// `column = value` where `column` is a qualified, compile-time column name.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnFilter {
    pub column: &'static str,
    pub value: FilterValue,
}

impl ColumnFilter {
    pub fn new(column: &'static str, value: impl Into<FilterValue>) -> Self {
        Self {
            column,
            value: value.into(),
        }
    }

    /// Push `column = $n` with the value bound.
    fn push(&self, qb: &mut QueryBuilder<'_, Postgres>) {
        qb.push(self.column).push(" = ");
        match &self.value {
            FilterValue::Id(v) => {
                qb.push_bind(*v);
            }
            FilterValue::SmallInt(v) => {
                qb.push_bind(*v);
            }
            FilterValue::Bool(v) => {
                qb.push_bind(*v);
            }
            FilterValue::Text(v) => {
                qb.push_bind(v.clone());
            }
        }
    }
}

/// Collects optional equality filters, skipping absent values.
#[derive(Debug, Default)]
pub struct FilterSet(Vec<ColumnFilter>);

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `column = value` when `value` is present.
    pub fn eq<V: Into<FilterValue>>(mut self, column: &'static str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.0.push(ColumnFilter::new(column, value));
        }
        self
    }

    pub fn into_vec(self) -> Vec<ColumnFilter> {
        self.0
    }
}

/// A foreign key referenced by a create or update payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reference {
    /// Display name used in the not-found error (e.g. `"Branch"`).
    pub entity: &'static str,
    pub table: &'static str,
    pub id: DbId,
}

impl Reference {
    pub fn new(entity: &'static str, table: &'static str, id: DbId) -> Self {
        Self { entity, table, id }
    }

    /// A reference only when the optional key is set.
    pub fn optional(entity: &'static str, table: &'static str, id: Option<DbId>) -> Option<Self> {
        id.map(|id| Self::new(entity, table, id))
    }
}

/// Minimal projection for dropdowns.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct SelectOption {
    pub id: DbId,
    pub label: String,
}

/// Query-string filter for resources without per-column filters.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct NoFilter {}

/// Everything that narrows a listing.
#[derive(Debug, Default)]
pub struct ListFilter {
    pub columns: Vec<ColumnFilter>,
    /// `Some(true)` for active rows only, `Some(false)` for deleted only.
    pub active: Option<bool>,
    pub page: Option<PageRequest>,
}

// ---------------------------------------------------------------------------
// Traits
// ---------------------------------------------------------------------------

/// A table managed through the generic CRUD endpoints.
#[async_trait]
pub trait Resource: Send + Sync + 'static {
    /// Display name used in messages and errors (e.g. `"Branch"`).
    const ENTITY: &'static str;
    const TABLE: &'static str;
    /// Qualified select list, including joined columns.
    const COLUMNS: &'static str;
    /// `LEFT JOIN ...` clauses backing joined columns.
    const JOINS: &'static str = "";
    /// Qualified column shown as the dropdown label.
    const LABEL_COLUMN: &'static str;
    const SOFT_DELETE: SoftDelete;
    /// Unqualified column for public slug lookups.
    const SLUG_COLUMN: Option<&'static str> = None;

    type Row: for<'r> FromRow<'r, PgRow> + Serialize + Send + Sync + Unpin + 'static;
    type Create: Send + Sync + 'static;
    type Update: Send + Sync + 'static;
    type Filter: Send + Sync + 'static;

    /// Equality filters derived from the query string.
    fn filters(filter: &Self::Filter) -> Vec<ColumnFilter>;

    /// Foreign keys a create payload points at.
    fn create_references(_input: &Self::Create) -> Vec<Reference> {
        Vec::new()
    }

    /// Foreign keys an update payload points at (only those being changed).
    fn update_references(_input: &Self::Update) -> Vec<Reference> {
        Vec::new()
    }

    /// Insert a row and return its id.
    async fn insert(pool: &PgPool, input: &Self::Create) -> Result<DbId, sqlx::Error>;

    /// Apply the non-`None` fields of `input`. Returns `false` if `id` does not exist.
    async fn update(pool: &PgPool, id: DbId, input: &Self::Update) -> Result<bool, sqlx::Error>;
}

/// A resource whose soft-delete marker is a text status that clients may set.
pub trait StatusResource: Resource {
    type Status: Copy + Send + Sync + 'static;

    fn status_str(status: Self::Status) -> &'static str;
}

// ---------------------------------------------------------------------------
// Generic repository
// ---------------------------------------------------------------------------

/// CRUD operations shared by every [`Resource`].
pub struct CrudRepo<R>(PhantomData<R>);

impl<R: Resource> CrudRepo<R> {
    fn select_from() -> String {
        format!("SELECT {} FROM {} {}", R::COLUMNS, R::TABLE, R::JOINS)
    }

    fn push_conditions(qb: &mut QueryBuilder<'_, Postgres>, filter: &ListFilter) {
        qb.push(" WHERE TRUE");
        match filter.active {
            Some(true) => {
                qb.push(" AND ").push(R::SOFT_DELETE.active_predicate(R::TABLE));
            }
            Some(false) => {
                qb.push(" AND ").push(R::SOFT_DELETE.inactive_predicate(R::TABLE));
            }
            None => {}
        }
        for column in &filter.columns {
            qb.push(" AND ");
            column.push(qb);
        }
    }

    /// List rows matching `filter`, newest id first.
    pub async fn list(pool: &PgPool, filter: &ListFilter) -> Result<Vec<R::Row>, sqlx::Error> {
        let mut qb = QueryBuilder::<Postgres>::new(Self::select_from());
        Self::push_conditions(&mut qb, filter);
        qb.push(format!(" ORDER BY {}.id DESC", R::TABLE));
        if let Some(page) = filter.page {
            qb.push(" LIMIT ").push_bind(page.limit);
            qb.push(" OFFSET ").push_bind(page.offset());
        }
        qb.build_query_as::<R::Row>().fetch_all(pool).await
    }

    /// Count rows matching `filter`, ignoring its page.
    pub async fn count(pool: &PgPool, filter: &ListFilter) -> Result<i64, sqlx::Error> {
        let mut qb =
            QueryBuilder::<Postgres>::new(format!("SELECT COUNT(*) FROM {} {}", R::TABLE, R::JOINS));
        Self::push_conditions(&mut qb, filter);
        qb.build_query_scalar::<i64>().fetch_one(pool).await
    }

    /// Active rows as `{id, label}` pairs, sorted by label.
    pub async fn for_select(pool: &PgPool) -> Result<Vec<SelectOption>, sqlx::Error> {
        let query = format!(
            "SELECT {table}.id, {label} AS label FROM {table} \
             WHERE {active} \
             ORDER BY {label}, {table}.id",
            table = R::TABLE,
            label = R::LABEL_COLUMN,
            active = R::SOFT_DELETE.active_predicate(R::TABLE),
        );
        sqlx::query_as::<_, SelectOption>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a row by id regardless of its soft-delete state.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<R::Row>, sqlx::Error> {
        let query = format!("{} WHERE {}.id = $1", Self::select_from(), R::TABLE);
        sqlx::query_as::<_, R::Row>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an active row by id.
    pub async fn find_active_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<R::Row>, sqlx::Error> {
        let query = format!(
            "{} WHERE {table}.id = $1 AND {active}",
            Self::select_from(),
            table = R::TABLE,
            active = R::SOFT_DELETE.active_predicate(R::TABLE),
        );
        sqlx::query_as::<_, R::Row>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an active row by slug. Always `None` for resources without a slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<R::Row>, sqlx::Error> {
        let Some(slug_column) = R::SLUG_COLUMN else {
            return Ok(None);
        };
        let query = format!(
            "{} WHERE {table}.{slug_column} = $1 AND {active}",
            Self::select_from(),
            table = R::TABLE,
            active = R::SOFT_DELETE.active_predicate(R::TABLE),
        );
        sqlx::query_as::<_, R::Row>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Return the first reference whose target row does not exist.
    pub async fn first_missing(
        pool: &PgPool,
        references: &[Reference],
    ) -> Result<Option<Reference>, sqlx::Error> {
        for reference in references {
            let query = format!(
                "SELECT EXISTS(SELECT 1 FROM {} WHERE id = $1)",
                reference.table
            );
            let exists: bool = sqlx::query_scalar(&query)
                .bind(reference.id)
                .fetch_one(pool)
                .await?;
            if !exists {
                return Ok(Some(*reference));
            }
        }
        Ok(None)
    }

    /// Insert and re-fetch the row with its joined columns.
    pub async fn create(pool: &PgPool, input: &R::Create) -> Result<R::Row, sqlx::Error> {
        let id = R::insert(pool, input).await?;
        let query = format!("{} WHERE {}.id = $1", Self::select_from(), R::TABLE);
        sqlx::query_as::<_, R::Row>(&query)
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Apply a partial update and re-fetch. `None` if `id` does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &R::Update,
    ) -> Result<Option<R::Row>, sqlx::Error> {
        if !R::update(pool, id, input).await? {
            return Ok(None);
        }
        Self::find_by_id(pool, id).await
    }

    /// Mark one row deleted. Returns `false` if `id` does not exist.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!(
            "UPDATE {} SET {} WHERE id = $1",
            R::TABLE,
            R::SOFT_DELETE.set_clause()
        );
        let result = sqlx::query(&query).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }

    /// Mark many rows deleted in one statement. Unknown ids are ignored.
    ///
    /// Returns the number of rows updated.
    pub async fn soft_delete_many(pool: &PgPool, ids: &[DbId]) -> Result<u64, sqlx::Error> {
        let query = format!(
            "UPDATE {} SET {} WHERE id = ANY($1)",
            R::TABLE,
            R::SOFT_DELETE.set_clause()
        );
        let result = sqlx::query(&query).bind(ids).execute(pool).await?;
        Ok(result.rows_affected())
    }
}

impl<R: StatusResource> CrudRepo<R> {
    /// Set the status of many rows in one statement. Unknown ids are ignored.
    ///
    /// Returns the number of rows updated.
    pub async fn set_status(
        pool: &PgPool,
        ids: &[DbId],
        status: R::Status,
    ) -> Result<u64, sqlx::Error> {
        let query = format!(
            "UPDATE {} SET {} = $2 WHERE id = ANY($1)",
            R::TABLE,
            R::SOFT_DELETE.column()
        );
        let result = sqlx::query(&query)
            .bind(ids)
            .bind(R::status_str(status))
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
