pub mod case_study;
pub mod contact;

pub use case_study::{CASE_STUDY_COLLECTION, CaseStudy, CaseStudyCategory};
pub use contact::{CONTACT_COLLECTION, ContactMessage, ContactRequest, ContactSource};
