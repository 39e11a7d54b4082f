//! Students bounded context - application services

pub mod command_service;
pub mod external_profile;
pub mod query_service;

pub use command_service::StudentCommandService;
pub use external_profile::{ExternalProfileService, FacadeProfileService};
pub use query_service::StudentQueryService;
