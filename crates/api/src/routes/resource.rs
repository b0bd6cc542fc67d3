//! Generic route builders, one instantiation per [`Resource`].
//!
//! ```text
//! GET    /                         list
//! GET    /for-select               active {id, label} pairs
//! GET    /{id}                     detail
//! POST   /create                   create            (resource_router)
//! PUT    /update/{id}              partial update    (resource_router)
//! DELETE /delete/{id}              soft delete
//! POST   /delete-multiple          bulk soft delete
//! PUT    /status/{id}              set status        (status_router)
//! POST   /update-status-multiple   bulk set status   (status_router)
//! ```

use axum::routing::{delete, get, post, put};
use axum::Router;
use courtside_db::resource::{Resource, StatusResource};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::handlers::{crud, public, status};
use crate::state::AppState;

/// Read and delete routes. Resources with bespoke writes (users) add their
/// own `create` / `update` on top.
pub fn base_router<R>() -> Router<AppState>
where
    R: Resource,
    R::Filter: DeserializeOwned,
{
    Router::new()
        .route("/", get(crud::list::<R>))
        .route("/for-select", get(crud::for_select::<R>))
        .route("/{id}", get(crud::detail::<R>))
        .route("/delete/{id}", delete(crud::soft_delete::<R>))
        .route("/delete-multiple", post(crud::soft_delete_many::<R>))
}

/// The full admin CRUD surface.
pub fn resource_router<R>() -> Router<AppState>
where
    R: Resource,
    R::Create: DeserializeOwned + Validate,
    R::Update: DeserializeOwned + Validate,
    R::Filter: DeserializeOwned,
{
    base_router::<R>()
        .route("/create", post(crud::create::<R>))
        .route("/update/{id}", put(crud::update::<R>))
}

/// Status transitions for resources with a text status.
pub fn status_router<R>() -> Router<AppState>
where
    R: StatusResource,
    R::Status: DeserializeOwned,
{
    Router::new()
        .route("/status/{id}", put(status::set_status::<R>))
        .route("/update-status-multiple", post(status::set_status_many::<R>))
}

/// Public read-only routes; adds `/slug/{slug}` when the resource has a slug.
pub fn public_router<R>() -> Router<AppState>
where
    R: Resource,
    R::Filter: DeserializeOwned,
{
    let router = Router::new()
        .route("/", get(public::list::<R>))
        .route("/{id}", get(public::detail::<R>));
    if R::SLUG_COLUMN.is_some() {
        router.route("/slug/{slug}", get(public::by_slug::<R>))
    } else {
        router
    }
}
