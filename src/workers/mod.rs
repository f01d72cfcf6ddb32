pub mod command_runner;
pub mod review_runner;
pub mod stdin_prompter;
