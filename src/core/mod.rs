pub mod backup;
pub mod del;
pub mod draft_store;
pub mod extract;
pub mod repository;
pub mod submit;
pub mod table;
