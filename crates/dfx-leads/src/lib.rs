//! # dfx-leads: Client-side lead capture.
//!
//! Validates contact submissions and appends them to best-effort local
//! storage. Independent of the revenue model.
//!
//! # Modules
//!
//! - [`error`]: `LeadError` and per-field validation messages
//! - [`lead`]: `Lead` record, `LeadForm` validation
//! - [`store`]: `LeadStore` trait with in-memory and JSON-file stores
//! - [`capture`]: submit flow tying form, timestamp and store together

pub mod capture;
pub mod error;
pub mod lead;
pub mod store;

// Re-exports for convenient access
pub use capture::LeadCapture;
pub use error::{FieldError, FieldErrors, LeadError};
pub use lead::{Lead, LeadForm, is_valid_email};
pub use store::{JsonFileStore, LeadStore, MemoryStore};
