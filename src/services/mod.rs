// Variable configuration
pub mod variables;

// Evaluation and reporting
pub mod scorecard;
