pub mod health;
pub mod podcast;
pub mod templates;
