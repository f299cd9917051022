pub mod dom;
pub mod storage;
pub mod style;
