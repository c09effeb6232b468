//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod diagnosis;

pub use diagnosis::{
    ClearSessionCommand, ClearSessionHandler, CompleteDiagnosisCommand, CompleteDiagnosisHandler,
    GetResultHandler, GetResultQuery, StartSessionCommand, StartSessionHandler,
    StartSessionResult, SubmitAnswersCommand, SubmitAnswersHandler, SubmitAnswersResult,
    SubmitHouseholdCommand, SubmitHouseholdHandler, SubmitHouseholdResult,
};
