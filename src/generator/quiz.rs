use super::QuestionRecord;

const OPTIONS: [&str; 4] = ["Đáp án A", "Đáp án B", "Đáp án C", "Đáp án D"];

/// 生成 count 道占位选择题，题号从 1 开始
pub fn generate_quiz(topic: &str, count: usize) -> Vec<QuestionRecord> {
    (1..=count)
        .map(|i| QuestionRecord {
            question: format!("Câu hỏi {i} về {topic}?"),
            options: OPTIONS.iter().map(|option| option.to_string()).collect(),
            correct_answer: 0,
            explanation: format!("Giải thích cho câu {i}"),
        })
        .collect()
}

pub fn quiz_prompt(topic: &str, count: usize) -> String {
    format!(
        "Tạo {count} câu hỏi trắc nghiệm về chủ đề: {topic}\n\
         Mỗi câu có đúng 4 đáp án.\n\
         Trả về JSON dạng {{\"questions\": [{{\"question\", \"options\", \
         \"correct_answer\" (chỉ số 0-3), \"explanation\"}}]}}."
    )
}

/// 校验远程返回的题目：数量足够、每题四个选项且答案下标合法
pub fn validate_questions(
    mut questions: Vec<QuestionRecord>,
    count: usize,
) -> Result<Vec<QuestionRecord>, String> {
    if questions.len() < count {
        return Err(format!(
            "expected {count} questions, got {}",
            questions.len()
        ));
    }
    questions.truncate(count);

    for (i, q) in questions.iter().enumerate() {
        if q.options.len() != OPTIONS.len() {
            return Err(format!("question {} has {} options", i + 1, q.options.len()));
        }
        if q.correct_answer >= q.options.len() {
            return Err(format!(
                "question {} has out-of-range answer {}",
                i + 1,
                q.correct_answer
            ));
        }
    }

    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiz_has_exactly_count_questions() {
        for n in [0, 1, 5, 20, 37] {
            assert_eq!(generate_quiz("Pythagoras", n).len(), n);
        }
    }

    #[test]
    fn questions_are_numbered_from_one() {
        let quiz = generate_quiz("Pythagoras", 3);

        assert_eq!(quiz[0].question, "Câu hỏi 1 về Pythagoras?");
        assert_eq!(quiz[2].question, "Câu hỏi 3 về Pythagoras?");
        assert_eq!(quiz[2].explanation, "Giải thích cho câu 3");
        assert!(quiz.iter().all(|q| q.correct_answer == 0));
        assert_eq!(quiz[1].options, OPTIONS.to_vec());
    }

    #[test]
    fn validation_truncates_extra_questions() {
        let questions = validate_questions(generate_quiz("x", 6), 4).unwrap();
        assert_eq!(questions.len(), 4);
    }

    #[test]
    fn validation_rejects_short_or_invalid_sets() {
        assert!(validate_questions(generate_quiz("x", 2), 3).is_err());

        let mut bad = generate_quiz("x", 1);
        bad[0].correct_answer = 4;
        assert!(validate_questions(bad, 1).is_err());

        let mut bad = generate_quiz("x", 1);
        bad[0].options.pop();
        assert!(validate_questions(bad, 1).is_err());
    }
}
