pub mod doc;
pub mod handlers;
