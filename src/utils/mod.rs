pub mod analytics;
pub mod dom;
pub mod error;
pub mod filters;
pub mod pricing;
