use axum::extract::DefaultBodyLimit;
use axum::middleware::from_extractor_with_state;
use axum::routing::{get, post, put};
use axum::Router;
use courtside_db::repositories::{
    BranchRepo, CollaborationRepo, ContactRepo, CourtRepo, EventRepo, FacilityRepo,
    MenuLabelRepo, MenuRepo, ProgramCategoryRepo, ProgramRepo, RoleRepo, ScheduleRepo,
    TestimonialRepo, TrainerRepo, TrialClassRepo, UserRepo,
};

use super::resource::{base_router, resource_router, status_router};
use crate::handlers::{auth, dashboard, roles, upload, users, visitor_logs};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Build the `/admin/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                               login (public)
/// /auth/me                                  profile + menu tree
///
/// /branches, /courts, /facilities,          generic CRUD
/// /program-categories, /programs,
/// /trainers, /schedules, /testimonials,
/// /events, /collaborations,
/// /menu-labels, /menus
///
/// /trial-classes, /contacts                 generic CRUD + status routes
///
/// /users                                    generic reads/deletes,
///                                           password-hashing create/update
///
/// /roles                                    generic CRUD
/// /roles/{id}/menus                         get, replace menu grants
///
/// /visitor-logs                             list
/// /upload                                   multipart image upload
///
/// /dashboard/summary                        headline counts
/// /dashboard/visitors                       monthly visits (?year=)
/// /dashboard/visitors/yearly                visits per year
/// /dashboard/visitors/top-pages             most visited paths (?limit=)
/// /dashboard/trial-classes                  monthly bookings per branch (?year=)
/// /dashboard/contacts/status                contacts per status
/// ```
///
/// Everything except `/auth/login` requires a Bearer token.
pub fn admin_routes(state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/auth/me", get(auth::me))
        .nest("/branches", resource_router::<BranchRepo>())
        .nest("/courts", resource_router::<CourtRepo>())
        .nest("/facilities", resource_router::<FacilityRepo>())
        .nest("/program-categories", resource_router::<ProgramCategoryRepo>())
        .nest("/programs", resource_router::<ProgramRepo>())
        .nest("/trainers", resource_router::<TrainerRepo>())
        .nest("/schedules", resource_router::<ScheduleRepo>())
        .nest(
            "/trial-classes",
            resource_router::<TrialClassRepo>().merge(status_router::<TrialClassRepo>()),
        )
        .nest(
            "/contacts",
            resource_router::<ContactRepo>().merge(status_router::<ContactRepo>()),
        )
        .nest("/testimonials", resource_router::<TestimonialRepo>())
        .nest("/events", resource_router::<EventRepo>())
        .nest("/collaborations", resource_router::<CollaborationRepo>())
        .nest(
            "/users",
            base_router::<UserRepo>()
                .route("/create", post(users::create))
                .route("/update/{id}", put(users::update)),
        )
        .nest(
            "/roles",
            resource_router::<RoleRepo>()
                .route("/{id}/menus", get(roles::get_menus).put(roles::replace_menus)),
        )
        .nest("/menu-labels", resource_router::<MenuLabelRepo>())
        .nest("/menus", resource_router::<MenuRepo>())
        .route("/visitor-logs", get(visitor_logs::list))
        .route(
            "/upload",
            post(upload::upload).layer(DefaultBodyLimit::max(state.config.upload_max_bytes)),
        )
        .nest("/dashboard", dashboard_router())
        .route_layer(from_extractor_with_state::<AuthUser, AppState>(state.clone()));

    Router::new()
        .route("/auth/login", post(auth::login))
        .merge(protected)
}

fn dashboard_router() -> Router<AppState> {
    Router::new()
        .route("/summary", get(dashboard::summary))
        .route("/visitors", get(dashboard::visitors_by_month))
        .route("/visitors/yearly", get(dashboard::visitors_by_year))
        .route("/visitors/top-pages", get(dashboard::top_pages))
        .route("/trial-classes", get(dashboard::trial_classes_by_branch))
        .route("/contacts/status", get(dashboard::contacts_by_status))
}
