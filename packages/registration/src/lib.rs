pub mod config;
pub mod models;
pub mod payment;
pub mod phone;
pub mod registrar;
pub mod schema;
pub mod session;
pub mod wizard;

mod memory;
pub use memory::MemoryRegistrar;

pub use config::EventConfig;
pub use models::{Category, DuplicateCheckResult, SubmissionRecord, UserRecord};
pub use payment::{confirm_payment, PaymentError};
pub use phone::format_phone;
pub use registrar::{Registrar, SubmissionError, SubmitOutcome};
pub use schema::{validate_field, validate_record, Field, FieldErrors, ValidationError};
pub use session::{Registration, Session};
pub use wizard::{Advance, ExistingSubmission, Step, SubmissionMode, Wizard, WizardState};
