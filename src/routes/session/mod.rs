mod handler;
mod model;

pub use handler::{get_session, set_api_keys};
pub use model::{ApiKeysRequest, SessionInfo};
