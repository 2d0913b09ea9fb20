pub mod forms;
pub mod responses;
