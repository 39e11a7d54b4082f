//! AppState - services shared by every handler

use std::sync::Arc;

use center_domain::Clock;
use center_usecase::profiles::{ProfileCommandService, ProfileQueryService, ProfilesContextFacade};
use center_usecase::students::{FacadeProfileService, StudentCommandService, StudentQueryService};

use crate::repository::{Database, InMemoryProfileRepository, InMemoryStudentRepository};

#[derive(Clone)]
pub struct AppState {
    pub profile_commands: Arc<ProfileCommandService>,
    pub profile_queries: Arc<ProfileQueryService>,
    pub student_commands: Arc<StudentCommandService>,
    pub student_queries: Arc<StudentQueryService>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Wire both contexts on top of `db`.
    ///
    /// Students reach Profiles only through the facade.
    pub fn new(db: Database, clock: Arc<dyn Clock>) -> Self {
        let profiles = Arc::new(InMemoryProfileRepository::new(db.clone(), clock.clone()));
        let students = Arc::new(InMemoryStudentRepository::new(db, clock.clone()));

        let profile_commands = Arc::new(ProfileCommandService::new(profiles.clone()));
        let profile_queries = Arc::new(ProfileQueryService::new(profiles));
        let facade = Arc::new(ProfilesContextFacade::new(
            profile_commands.clone(),
            profile_queries.clone(),
            clock.clone(),
        ));

        let student_commands = Arc::new(StudentCommandService::new(
            students.clone(),
            Arc::new(FacadeProfileService::new(facade)),
            clock.clone(),
        ));
        let student_queries = Arc::new(StudentQueryService::new(students));

        Self {
            profile_commands,
            profile_queries,
            student_commands,
            student_queries,
            clock,
        }
    }
}
