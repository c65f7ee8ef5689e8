mod form;
pub use form::ContactForm;

pub mod state;
pub use state::{ContactDraft, SubmissionState};
