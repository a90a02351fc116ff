mod handler;
mod model;

pub use handler::generate_illustration;
pub use model::{IllustrationRequest, IllustrationResponse};
