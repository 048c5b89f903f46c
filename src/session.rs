use crate::events::{NullObserver, SessionObserver};
use crate::question::Question;
use crate::util::percent_of;
use rand::seq::SliceRandom;

/// Score delta applied when an answer is wrong.
const NEGATIVE_MARK: i32 = -1;

/// Where the session is in its lifecycle.
///
/// `Finished` requires the cursor to sit past the last question, which
/// `next_question` never produces on its own; see `is_finished`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum_macros::Display)]
pub enum SessionPhase {
    NotStarted,
    InProgress,
    Finished,
}

/// One quiz run: the question list plus all volatile play state.
///
/// The public surface is one-based wherever a question or answer position
/// crosses it; storage is zero-based, converted exactly once at each
/// boundary. Invalid positions degrade to sentinel values rather than
/// errors, with the single exception of `correct_answer`.
pub struct QuizSession {
    questions: Vec<Question>,
    /// Zero-based position; `None` until the first `next_question`.
    cursor: Option<usize>,
    score: i32,
    /// Advisory per-question limit; stored for collaborators, never enforced.
    time_limit_ms: i64,
    observer: Box<dyn SessionObserver>,
}

impl QuizSession {
    pub fn new() -> Self {
        Self {
            questions: Vec::new(),
            cursor: None,
            score: 0,
            time_limit_ms: 0,
            observer: Box::new(NullObserver),
        }
    }

    /// Replaces the notification sink. The previous observer is dropped.
    pub fn set_observer(&mut self, observer: Box<dyn SessionObserver>) {
        self.observer = observer;
    }

    /// Appends a question. `correct_answer` is one-based into `options`.
    ///
    /// Nothing is validated: an empty option list or a correct-answer
    /// position outside it is stored as given and only surfaces later,
    /// through `correct_answer`.
    pub fn add_question(
        &mut self,
        text: String,
        options: Vec<String>,
        correct_answer: usize,
        image_ref: String,
        hint: String,
        explanation: String,
    ) {
        log::debug!("adding question: {text} (image: {image_ref:?})");
        self.questions.push(Question::new(
            text,
            options,
            correct_answer.wrapping_sub(1),
            image_ref,
            hint,
            explanation,
        ));
    }

    /// Uniformly permutes the question order, then restarts the quiz.
    /// A shuffled session always begins from scratch.
    pub fn shuffle_questions(&mut self) {
        self.questions.shuffle(&mut rand::thread_rng());
        log::debug!("shuffled {} questions", self.questions.len());
        self.reset();
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Question text at a one-based position, or a fixed sentinel string
    /// when the position is out of range.
    pub fn question_by_index(&self, index: usize) -> String {
        match index.checked_sub(1).and_then(|i| self.questions.get(i)) {
            Some(q) => q.text().to_string(),
            None => String::from("Index out of bounds"),
        }
    }

    /// Options at a one-based position; empty when out of range.
    pub fn options_by_index(&self, index: usize) -> Vec<String> {
        match index.checked_sub(1).and_then(|i| self.questions.get(i)) {
            Some(q) => q.options().to_vec(),
            None => Vec::new(),
        }
    }

    /// Advances to the next question and reports progress.
    ///
    /// Returns `false` without moving once the cursor sits on the last
    /// question (or the list is empty); the cursor never walks past it.
    pub fn next_question(&mut self) -> bool {
        let next = self.cursor.map_or(0, |i| i + 1);
        if next < self.questions.len() {
            self.cursor = Some(next);
            self.notify_progress();
            true
        } else {
            false
        }
    }

    /// Returns to the not-started state with a zero score, keeping the
    /// question list. Fires a progress notification unless the list is
    /// empty.
    pub fn reset(&mut self) {
        self.cursor = None;
        self.score = 0;
        self.notify_progress();
        log::debug!("quiz reset; score zeroed, position cleared");
    }

    /// Skips the current question, bumping its skip counter, then advances
    /// exactly like `next_question`. Returns `false` when no question is
    /// current.
    pub fn skip_question(&mut self) -> bool {
        let Some(question) = self.cursor.and_then(|i| self.questions.get_mut(i)) else {
            return false;
        };
        question.record_skip();
        self.next_question()
    }

    /// Whether the cursor has moved past the final question.
    ///
    /// `next_question` caps the cursor at the last question, so through
    /// this surface the answer stays `false` even once every question has
    /// been seen.
    pub fn is_finished(&self) -> bool {
        self.cursor.is_some_and(|i| i >= self.questions.len())
    }

    /// One-based position of the current question; 0 means not started.
    pub fn current_question_index(&self) -> usize {
        self.cursor.map_or(0, |i| i + 1)
    }

    pub fn phase(&self) -> SessionPhase {
        match self.cursor {
            None => SessionPhase::NotStarted,
            Some(i) if i >= self.questions.len() => SessionPhase::Finished,
            Some(_) => SessionPhase::InProgress,
        }
    }

    pub fn current_question(&self) -> String {
        match self.current() {
            Some(q) => q.text().to_string(),
            None => String::new(),
        }
    }

    /// Image reference of the current question; empty when there is none
    /// (or no question is current).
    pub fn current_question_image(&self) -> String {
        match self.current() {
            Some(q) => q.image_ref().to_string(),
            None => String::new(),
        }
    }

    pub fn current_options(&self) -> Vec<String> {
        match self.current() {
            Some(q) => q.options().to_vec(),
            None => Vec::new(),
        }
    }

    /// Text of the correct option for the current question, or empty when
    /// no question is current.
    ///
    /// Panics if the question was registered with a correct-answer position
    /// outside its option list; that lookup is deliberately unguarded.
    pub fn correct_answer(&self) -> String {
        match self.current() {
            Some(q) => q.options()[q.correct_index()].clone(),
            None => String::new(),
        }
    }

    /// Hint for the current question, verbatim (possibly empty), or a fixed
    /// fallback when no question is current.
    pub fn hint(&self) -> String {
        match self.current() {
            Some(q) => q.hint().to_string(),
            None => String::from("No hint available."),
        }
    }

    /// Evaluates a one-based answer position against the current question.
    ///
    /// Correct answers add one point; wrong ones apply the negative mark.
    /// Fires the answered notification, then progress. Does not advance the
    /// cursor. A no-op returning `false` when no question is current.
    pub fn check_answer(&mut self, answer: usize) -> bool {
        let Some(question) = self.current() else {
            return false;
        };
        let correct = question.correct_index() == answer.wrapping_sub(1);
        let explanation = if correct {
            String::new()
        } else {
            question.explanation().to_string()
        };
        self.score += if correct { 1 } else { NEGATIVE_MARK };
        self.observer.answer_evaluated(correct, &explanation);
        self.notify_progress();
        correct
    }

    /// Raw score; negative marking can push it below zero.
    pub fn score(&self) -> i32 {
        self.score
    }

    /// Score over the full question count, truncated toward zero. Not
    /// clamped, so partial completion and negative marking can push it
    /// outside 0..=100. Zero when there are no questions.
    pub fn score_percentage(&self) -> i32 {
        percent_of(self.score, self.questions.len()).unwrap_or(0)
    }

    /// Questions seen so far minus the score. A derived approximation of
    /// the wrong-answer count, not a tracked counter; before the quiz
    /// starts it yields the negated score.
    pub fn incorrect_answers(&self) -> i32 {
        self.current_question_index() as i32 - self.score
    }

    /// Advisory per-question time limit in milliseconds. Stored as given
    /// (negative values included), never enforced here.
    pub fn set_time_limit(&mut self, limit_ms: i64) {
        self.time_limit_ms = limit_ms;
    }

    pub fn time_limit(&self) -> i64 {
        self.time_limit_ms
    }

    fn current(&self) -> Option<&Question> {
        self.cursor.and_then(|i| self.questions.get(i))
    }

    fn notify_progress(&mut self) {
        let position = self.current_question_index() as i32;
        if let Some(percent) = percent_of(position, self.questions.len()) {
            self.observer.progress_changed(percent);
        }
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}
