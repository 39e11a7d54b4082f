//! Profiles bounded context - application services

pub mod command_service;
pub mod facade;
pub mod query_service;

pub use command_service::ProfileCommandService;
pub use facade::{ProfileValues, ProfilesContextFacade};
pub use query_service::ProfileQueryService;
