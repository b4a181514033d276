pub mod analyze;
pub mod assessments;
pub mod health;

pub use analyze::{analyze_handler, batch_analyze_handler, facts_analyze_handler};
pub use assessments::{list_assessments_handler, submit_assessment_handler};
pub use health::health_handler;
