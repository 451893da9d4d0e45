pub mod coords;
pub mod draft;
pub mod entry;
pub mod incident_type;
pub mod photo;
