use axum::routing::post;
use axum::Router;
use courtside_db::repositories::{
    BranchRepo, CollaborationRepo, CourtRepo, EventRepo, FacilityRepo, ProgramCategoryRepo,
    ProgramRepo, ScheduleRepo, TestimonialRepo, TrainerRepo,
};

use super::resource::public_router;
use crate::handlers::{public, visitor_logs};
use crate::state::AppState;

/// Build the `/user/v1` route tree (no authentication).
///
/// ```text
/// /branches, /program-categories,           list, detail, /slug/{slug}
/// /programs, /events
///
/// /courts, /facilities, /trainers,          list, detail
/// /schedules, /testimonials,
/// /collaborations
///
/// /trial-classes/create                     book a trial class (PENDING)
/// /contacts/create                          send an inquiry (NEW)
/// /visitor-logs/create                      record a page view
/// ```
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .nest("/branches", public_router::<BranchRepo>())
        .nest("/courts", public_router::<CourtRepo>())
        .nest("/facilities", public_router::<FacilityRepo>())
        .nest("/program-categories", public_router::<ProgramCategoryRepo>())
        .nest("/programs", public_router::<ProgramRepo>())
        .nest("/trainers", public_router::<TrainerRepo>())
        .nest("/schedules", public_router::<ScheduleRepo>())
        .nest("/testimonials", public_router::<TestimonialRepo>())
        .nest("/events", public_router::<EventRepo>())
        .nest("/collaborations", public_router::<CollaborationRepo>())
        .route("/trial-classes/create", post(public::create_trial_class))
        .route("/contacts/create", post(public::create_contact))
        .route("/visitor-logs/create", post(visitor_logs::create))
}
