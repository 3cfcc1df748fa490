pub mod api;
pub mod contact;
pub mod enums;
pub mod models;
