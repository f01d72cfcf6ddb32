pub mod comparison_source;
pub mod explanation_prompter;
pub mod incident_sink;
