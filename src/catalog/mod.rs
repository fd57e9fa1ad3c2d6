//! Hard-coded content directories the informational pages read. The data
//! never changes at runtime; the query helpers are the only logic.

pub mod blog;
pub mod lawyers;
pub mod plans;
pub mod templates;

pub use blog::BlogPost;
pub use lawyers::Lawyer;
pub use plans::{BillingPeriod, PricingPlan};
pub use templates::DocumentTemplate;
