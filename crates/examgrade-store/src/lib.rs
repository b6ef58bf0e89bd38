//! examgrade-store — File-backed stores for exams, answer keys, and
//! submissions.
//!
//! Everything here is flat per-exam JSON files in configured directories.
//! The stores own the skip-and-warn policy for malformed records; the
//! scoring engine only ever sees already-parsed inputs.

pub mod catalog;
pub mod config;
pub mod error;
pub mod keys;
pub mod submissions;

pub use catalog::ExamCatalog;
pub use config::StoreConfig;
pub use error::StoreError;
pub use keys::AnswerKeyStore;
pub use submissions::SubmissionStore;
