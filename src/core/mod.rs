pub mod gateway;
pub mod languages;
pub mod prompt;
pub mod reply;
