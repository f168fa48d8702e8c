pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::{Profile, UpsertProfileRequest};
pub use router::profile_routes;
pub use services::profile::ProfileService;
