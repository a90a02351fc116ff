use super::LessonDocument;

pub const DEFAULT_GRADE_LEVEL: &str = "Trung học";
pub const DEFAULT_DURATION_MINUTES: u32 = 45;

const OUTLINE_STEPS: [&str; 5] = [
    "1. Giới thiệu và mục tiêu học tập",
    "2. Kiến thức cơ bản",
    "3. Ví dụ minh họa",
    "4. Bài tập thực hành",
    "5. Tổng kết và đánh giá",
];

/// 按固定模板生成课程大纲
///
/// 纯函数：相同输入总是得到相同文档。年级只在远程提示词中使用。
pub fn generate_outline(topic: &str, subject: &str, _grade_level: &str) -> LessonDocument {
    LessonDocument {
        title: format!("Bài học về {topic}"),
        outline: OUTLINE_STEPS.iter().map(|step| step.to_string()).collect(),
        content: format!("Nội dung chi tiết về {topic} trong môn {subject}..."),
        key_points: vec![
            format!("Khái niệm cơ bản về {topic}"),
            format!("Ứng dụng thực tế của {topic}"),
            format!("Các bài tập liên quan đến {topic}"),
        ],
        estimated_time: format_duration(DEFAULT_DURATION_MINUTES),
    }
}

pub fn format_duration(minutes: u32) -> String {
    format!("{minutes} phút")
}

/// 远程大纲生成使用的提示词
pub fn outline_prompt(topic: &str, subject: &str, grade_level: &str) -> String {
    format!(
        "Tạo dàn ý bài giảng chi tiết cho chủ đề: {topic}\n\
         Môn học: {subject}\n\
         Cấp độ: {grade_level}\n\
         \n\
         Yêu cầu:\n\
         1. Dàn ý rõ ràng, logic\n\
         2. Nội dung phù hợp với cấp độ học sinh\n\
         3. Bao gồm hoạt động thực hành\n\
         4. Thời gian dự kiến cho mỗi phần\n\
         \n\
         Trả về JSON với các trường: title, outline (mảng chuỗi), content, \
         key_points (mảng chuỗi), estimated_time."
    )
}
