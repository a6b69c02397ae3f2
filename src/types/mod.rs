pub mod catalog;
pub mod document;
pub mod response;
pub mod scoring;
