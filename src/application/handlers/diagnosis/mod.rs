//! Diagnosis command and query handlers.
//!
//! Each handler loads the session once, applies one step of the
//! questionnaire, and saves it once.

mod clear_session;
mod complete_diagnosis;
mod get_result;
mod start_session;
mod submit_answers;
mod submit_household;

pub use clear_session::{ClearSessionCommand, ClearSessionHandler};
pub use complete_diagnosis::{CompleteDiagnosisCommand, CompleteDiagnosisHandler};
pub use get_result::{GetResultHandler, GetResultQuery};
pub use start_session::{StartSessionCommand, StartSessionHandler, StartSessionResult};
pub use submit_answers::{SubmitAnswersCommand, SubmitAnswersHandler, SubmitAnswersResult};
pub use submit_household::{
    SubmitHouseholdCommand, SubmitHouseholdHandler, SubmitHouseholdResult,
};
