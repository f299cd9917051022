pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod projects;
