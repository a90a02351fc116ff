mod handler;
mod model;

pub use handler::{list_progress, progress_summary, save_progress};
pub use model::{ProgressQuery, ProgressRequest, SaveProgressResponse};
