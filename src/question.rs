use serde::{Deserialize, Serialize};

/// A single quiz question and its answer options.
///
/// The record is immutable after construction apart from the skip counter.
/// `correct_index` is zero-based into `options` and is stored as given;
/// nothing range-checks it against the option list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    text: String,
    options: Vec<String>,
    correct_index: usize,
    image_ref: String,
    hint: String,
    explanation: String,
    #[serde(default)]
    skip_count: u32,
}

impl Question {
    pub(crate) fn new(
        text: String,
        options: Vec<String>,
        correct_index: usize,
        image_ref: String,
        hint: String,
        explanation: String,
    ) -> Self {
        Self {
            text,
            options,
            correct_index,
            image_ref,
            hint,
            explanation,
            skip_count: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub(crate) fn correct_index(&self) -> usize {
        self.correct_index
    }

    /// Image URL or asset id; empty means the question has no image.
    pub fn image_ref(&self) -> &str {
        &self.image_ref
    }

    pub fn hint(&self) -> &str {
        &self.hint
    }

    /// Shown to the player only after an incorrect answer.
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// How many times the player skipped past this question.
    pub fn skip_count(&self) -> u32 {
        self.skip_count
    }

    pub(crate) fn record_skip(&mut self) {
        self.skip_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Question {
        Question::new(
            "What is the capital of France?".to_string(),
            vec!["Lyon".to_string(), "Paris".to_string()],
            1,
            "paris.png".to_string(),
            "It hosts the Eiffel Tower.".to_string(),
            "Paris has been the capital since 987.".to_string(),
        )
    }

    #[test]
    fn test_question_fields() {
        let q = sample();

        assert_eq!(q.text(), "What is the capital of France?");
        assert_eq!(q.options(), ["Lyon", "Paris"]);
        assert_eq!(q.correct_index(), 1);
        assert_eq!(q.image_ref(), "paris.png");
        assert_eq!(q.hint(), "It hosts the Eiffel Tower.");
        assert_eq!(q.explanation(), "Paris has been the capital since 987.");
        assert_eq!(q.skip_count(), 0);
    }

    #[test]
    fn test_record_skip_accumulates() {
        let mut q = sample();

        q.record_skip();
        q.record_skip();

        assert_eq!(q.skip_count(), 2);
    }

    #[test]
    fn test_out_of_range_correct_index_is_stored_as_given() {
        let q = Question::new(
            "broken".to_string(),
            vec!["only option".to_string()],
            7,
            String::new(),
            String::new(),
            String::new(),
        );

        assert_eq!(q.correct_index(), 7);
    }

    #[test]
    fn test_serde_skip_count_defaults_to_zero() {
        let json = r#"{
            "text": "2 + 2?",
            "options": ["3", "4"],
            "correct_index": 1,
            "image_ref": "",
            "hint": "",
            "explanation": ""
        }"#;

        let q: Question = serde_json::from_str(json).unwrap();

        assert_eq!(q.skip_count(), 0);
        assert_eq!(q.options(), ["3", "4"]);
    }

    #[test]
    fn test_serde_roundtrip_keeps_skip_count() {
        let mut q = sample();
        q.record_skip();

        let json = serde_json::to_string(&q).unwrap();
        let back: Question = serde_json::from_str(&json).unwrap();

        assert_eq!(back.skip_count(), 1);
        assert_eq!(back.text(), q.text());
    }
}
