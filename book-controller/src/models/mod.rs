pub mod book;
pub mod responses;
