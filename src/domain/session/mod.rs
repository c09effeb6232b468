//! Session domain module.
//!
//! Holds the questionnaire state of one household between the first answer
//! and the report. Persistence goes through the `SessionStore` port.

mod aggregate;

pub use aggregate::{DiagnosisSession, Respondent};
