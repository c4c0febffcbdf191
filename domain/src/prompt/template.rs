//! Prompt templates for quiz batches and the tutor persona

use crate::quiz::difficulty::{Difficulty, EducationLevel};
use serde_json::{Value, json};

/// Templates for generating prompts and output-shape contracts
pub struct PromptTemplate;

impl PromptTemplate {
    /// User prompt for one difficulty-tier question batch.
    ///
    /// Embeds the desired count, tier definition, grade/topic context and
    /// the JSON output example. The answer-distribution goal counters the
    /// models' bias toward making 'A' the correct option.
    pub fn quiz_batch(
        count: u32,
        difficulty: Difficulty,
        level: EducationLevel,
        grade: u8,
        topic: &str,
    ) -> String {
        let per_option = count.div_ceil(4);
        format!(
            r#"Generate {count} [{difficulty}] level computer science (Tin học) questions for Grade {grade} on topic '{topic}' following Vietnamese curriculum.

QUESTION TYPES FOR COMPUTER SCIENCE:
1. Conceptual questions: definitions, terminology, how things work
2. Practical application: what happens when you do X, how to achieve Y
3. Problem-solving: algorithms, coding logic, debugging
4. True/False about computer concepts
5. Comparison questions: differences between technologies/methods

CRITICAL FORMATTING RULES:
1. Questions must be in Vietnamese.
2. Use technical terms appropriately (can use English terms in parentheses for clarity).
3. For code-related questions, format code clearly with backticks if needed.
4. Options should be realistic and plausible choices.

CONTENT GUIDELINES BY LEVEL:
- Tiểu học (Grade 1-5): Basic computer parts, mouse/keyboard, Paint, Word basics, internet safety, Scratch basics
- THCS (Grade 6-9): File management, Office suite, algorithms, Python basics, HTML/CSS
- THPT (Grade 10-12): OOP, databases, web development, advanced programming

ANSWER DISTRIBUTION (IMPORTANT):
- Ensure that the correct answers are evenly distributed among A, B, C, and D.
- Avoid making 'A' the correct answer too frequently.
- For {count} questions, aim for approximately {per_option} of each option.

Difficulty Definition for {label} ({difficulty}):
- Nhận biết (Recognition): Direct recall of facts, definitions, simple identification.
- Thông hiểu (Understanding): Explain concepts, describe processes, apply in simple scenarios.
- Vận dụng (Application): Solve problems, write/debug code, complex scenarios.

Requested level: {level}.

Output JSON format:
[
  {{
    "text": "Question text in Vietnamese...",
    "options": ["A. ...", "B. ...", "C. ...", "D. ..."],
    "correctAnswer": "A",
    "explanation": "- Bước 1: ...\n- Bước 2: ...\n=> Kết luận...",
    "difficulty": "{difficulty}"
  }}
]"#,
            count = count,
            difficulty = difficulty.as_str(),
            grade = grade,
            topic = topic,
            per_option = per_option,
            label = difficulty.label(),
            level = level.as_str(),
        )
    }

    /// Output-shape contract for a question batch.
    ///
    /// Gemini response-schema form: an ARRAY of OBJECTs with all five
    /// fields required, so the model returns conforming JSON directly
    /// instead of free text.
    pub fn question_array_schema() -> Value {
        json!({
            "type": "ARRAY",
            "items": {
                "type": "OBJECT",
                "properties": {
                    "text": {
                        "type": "STRING",
                        "description": "Nội dung câu hỏi tiếng Việt (Unicode Math)"
                    },
                    "options": {
                        "type": "ARRAY",
                        "items": { "type": "STRING" },
                        "description": "4 lựa chọn A, B, C, D (Unicode Math)."
                    },
                    "correctAnswer": {
                        "type": "STRING",
                        "description": "Đáp án đúng (chỉ ký tự 'A', 'B', 'C' hoặc 'D')"
                    },
                    "explanation": {
                        "type": "STRING",
                        "description": "Giải thích chi tiết (xuống dòng rõ ràng, Unicode Math)"
                    },
                    "difficulty": {
                        "type": "STRING",
                        "description": "'recognition', 'understanding', hoặc 'application'"
                    }
                },
                "required": ["text", "options", "correctAnswer", "explanation", "difficulty"]
            }
        })
    }

    /// System instruction for the chat tutor.
    ///
    /// Static configuration — attached identically on every call.
    pub fn tutor_system() -> &'static str {
        r#"VAI TRÒ:
- Bạn là "Thầy Tin AI", một gia sư Tin học thân thiện, kiên nhẫn và thông thái.
- Nhiệm vụ: Giúp học sinh hiểu bài, giải đáp câu hỏi về máy tính, lập trình, và công nghệ thông tin.
- Đối tượng: Học sinh từ lớp 1 đến lớp 12.

LĨNH VỰC HỖ TRỢ:
- Tiểu học: Sử dụng máy tính, Paint, Word, Internet an toàn
- THCS: Office, Scratch, Python cơ bản, HTML/CSS
- THPT: Lập trình nâng cao, Database, Web development, OOP

QUY TẮC SƯ PHẠM CHUNG:
1. Hiểu câu hỏi & Xác nhận.
2. Phương pháp Socrate: Gợi mở để học sinh tự tư duy.
3. Giải thích từng bước dễ hiểu.
4. Đưa ví dụ code nếu cần (giải thích từng dòng).
5. Luôn tích cực, dùng emoji (👋😊💡🎯💻).

WORKFLOW XỬ LÝ ẢNH (OCR):
1. Trích xuất văn bản/code từ ảnh.
2. Nếu mờ -> yêu cầu chụp lại.
3. Nếu đọc được -> Trả lời theo cấu trúc:
   ## 📷 Nội dung nhận dạng: ...
   ## ❓ Xác nhận: ...
   ## 📖 Hướng dẫn giải: ...
   ## 💡 Lưu ý: ..."#
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_batch_embeds_parameters() {
        let prompt = PromptTemplate::quiz_batch(
            6,
            Difficulty::Understanding,
            EducationLevel::Middle,
            7,
            "Thuật toán",
        );
        assert!(prompt.contains("Generate 6 [understanding]"));
        assert!(prompt.contains("Grade 7"));
        assert!(prompt.contains("'Thuật toán'"));
        assert!(prompt.contains("Thông hiểu (understanding)"));
        // 6 questions → roughly 2 per option
        assert!(prompt.contains("approximately 2 of each option"));
    }

    #[test]
    fn test_schema_requires_all_fields() {
        let schema = PromptTemplate::question_array_schema();
        assert_eq!(schema["type"], "ARRAY");
        let required = schema["items"]["required"].as_array().unwrap();
        assert_eq!(required.len(), 5);
        assert!(required.contains(&serde_json::json!("correctAnswer")));
    }

    #[test]
    fn test_tutor_system_is_static() {
        let system = PromptTemplate::tutor_system();
        assert!(system.contains("Thầy Tin AI"));
        assert!(system.contains("OCR"));
    }
}
