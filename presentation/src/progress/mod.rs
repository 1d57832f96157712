pub mod reporter;
pub mod transcript;
