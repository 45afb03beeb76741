pub mod error;
pub mod grader;
pub mod operations;
pub mod selector;
