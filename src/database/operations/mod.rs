pub mod image;
pub mod lesson;
pub mod progress;
pub mod user;
