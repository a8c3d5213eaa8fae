pub mod authentication;
pub mod errors;
pub mod pagination;
pub mod physician;
