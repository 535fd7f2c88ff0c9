//! Persistence for the site's form endpoints: CSV rows appended per form,
//! the scraped corpus text file, and validation of contact inquiries.

pub mod errors;
pub mod inquiry;
pub mod submission_store;
pub mod structs;

pub use errors::form_store_error::FormStoreError;
pub use inquiry::validate_inquiry;
pub use structs::inquiry::{Inquiry, ValidInquiry};
pub use submission_store::{CORPUS_FILE_NAME, SubmissionStore};
