mod handler;
mod model;

pub use handler::{login, logout, register};
pub use model::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
