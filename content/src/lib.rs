pub mod catalog;
pub mod personal;
pub mod project;
pub mod section;

pub use catalog::Catalog;
pub use personal::PersonalInfo;
pub use project::{Category, CategoryFilter, ProjectId, ProjectRecord};
pub use section::Section;
