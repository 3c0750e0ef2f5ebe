pub mod common;
pub mod forms;
