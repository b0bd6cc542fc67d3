//! Repository layer.
//!
//! Catalog repositories are zero-sized structs implementing
//! [`Resource`](crate::resource::Resource); use them through
//! [`CrudRepo`](crate::resource::CrudRepo). Users, menus, visitor logs and
//! the dashboard also have bespoke methods that accept `&PgPool` first.

pub mod branch_repo;
pub mod collaboration_repo;
pub mod contact_repo;
pub mod court_repo;
pub mod dashboard_repo;
pub mod event_repo;
pub mod facility_repo;
pub mod menu_label_repo;
pub mod menu_repo;
pub mod program_category_repo;
pub mod program_repo;
pub mod role_repo;
pub mod schedule_repo;
pub mod testimonial_repo;
pub mod trainer_repo;
pub mod trial_class_repo;
pub mod user_repo;
pub mod visitor_log_repo;

pub use branch_repo::BranchRepo;
pub use collaboration_repo::CollaborationRepo;
pub use contact_repo::ContactRepo;
pub use court_repo::CourtRepo;
pub use dashboard_repo::DashboardRepo;
pub use event_repo::EventRepo;
pub use facility_repo::FacilityRepo;
pub use menu_label_repo::MenuLabelRepo;
pub use menu_repo::MenuRepo;
pub use program_category_repo::ProgramCategoryRepo;
pub use program_repo::ProgramRepo;
pub use role_repo::RoleRepo;
pub use schedule_repo::ScheduleRepo;
pub use testimonial_repo::TestimonialRepo;
pub use trainer_repo::TrainerRepo;
pub use trial_class_repo::TrialClassRepo;
pub use user_repo::UserRepo;
pub use visitor_log_repo::VisitorLogRepo;
