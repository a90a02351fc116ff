mod handler;
mod model;

pub use handler::{current_quiz, generate_quiz};
pub use model::QuizRequest;
