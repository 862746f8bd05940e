pub mod submission;
pub mod vocab;

pub use submission::SubmissionForm;
