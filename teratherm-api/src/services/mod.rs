pub mod demo;
pub mod metrics;
pub mod mongo;
pub mod store;

pub use demo::{case_studies_or_demo, demo_case_studies};
pub use metrics::{get_metrics, init_metrics};
pub use mongo::MongoStore;
pub use store::{DocumentStore, RecordStream, StorageError, UnavailableStore};
