//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers change a session; query handlers only read it.

pub mod handlers;

pub use handlers::{
    ClearSessionCommand, ClearSessionHandler, CompleteDiagnosisCommand, CompleteDiagnosisHandler,
    GetResultHandler, GetResultQuery, StartSessionCommand, StartSessionHandler,
    StartSessionResult, SubmitAnswersCommand, SubmitAnswersHandler, SubmitAnswersResult,
    SubmitHouseholdCommand, SubmitHouseholdHandler, SubmitHouseholdResult,
};
