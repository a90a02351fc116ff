mod handler;
mod model;

pub use handler::{
    current_lesson, find_lesson, generate_outline, list_lesson_images, list_lessons,
    save_current_lesson, save_lesson,
};
pub use model::{OutlineRequest, SaveLessonRequest, SaveLessonResponse};
