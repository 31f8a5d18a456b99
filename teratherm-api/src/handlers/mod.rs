//! HTTP handlers for teratherm-api.

pub mod case_studies;
pub mod contact;
pub mod diagnostics;
pub mod metrics;
pub mod root;

pub use case_studies::list_case_studies;
pub use contact::submit_contact;
pub use diagnostics::test_database;
pub use metrics::metrics_endpoint;
pub use root::root;
