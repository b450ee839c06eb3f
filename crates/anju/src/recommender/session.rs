use super::domain::{AnswerSet, Question, QuestionNumber, QuestionSet};

/// Per-user walk through the question set.
///
/// Holds the current step and the answers given so far; nothing is shared
/// between sessions except the read-only question set.
#[derive(Debug, Clone)]
pub struct QuizSession<'a> {
    questions: &'a QuestionSet,
    step: usize,
    answers: AnswerSet,
}

impl<'a> QuizSession<'a> {
    pub fn new(questions: &'a QuestionSet) -> Self {
        Self {
            questions,
            step: 0,
            answers: AnswerSet::new(),
        }
    }

    /// Question awaiting an answer, `None` once every question is answered.
    pub fn current(&self) -> Option<&'a Question> {
        self.questions.questions().get(self.step)
    }

    /// Answers the current question with one of its options (0-based).
    pub fn answer(&mut self, option_index: usize) -> Result<QuestionNumber, SessionError> {
        let question = self.current().ok_or(SessionError::Finished)?;
        let text = question
            .options
            .get(option_index)
            .cloned()
            .ok_or(SessionError::InvalidOption {
                q_no: question.q_no,
                index: option_index,
                available: question.options.len(),
            })?;
        Ok(self.record(text))
    }

    /// Answers the current question with free text.
    pub fn answer_text(&mut self, text: impl Into<String>) -> Result<QuestionNumber, SessionError> {
        if self.current().is_none() {
            return Err(SessionError::Finished);
        }
        Ok(self.record(text.into()))
    }

    fn record(&mut self, text: String) -> QuestionNumber {
        let q_no = self.questions.questions()[self.step].q_no;
        self.answers.insert(q_no, text);
        self.step += 1;
        q_no
    }

    /// Steps back one question; the earlier answer stays until overwritten.
    pub fn back(&mut self) -> bool {
        if self.step == 0 {
            return false;
        }
        self.step -= 1;
        true
    }

    pub fn restart(&mut self) {
        self.step = 0;
        self.answers = AnswerSet::new();
    }

    pub fn is_complete(&self) -> bool {
        self.step >= self.questions.len()
    }

    /// `(answered, total)` in question order.
    pub fn progress(&self) -> (usize, usize) {
        (self.step.min(self.questions.len()), self.questions.len())
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn finish(self) -> Result<AnswerSet, SessionError> {
        if !self.is_complete() {
            let (answered, total) = self.progress();
            return Err(SessionError::Incomplete { answered, total });
        }
        Ok(self.answers)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("question {q_no} has no option {index} ({available} available)")]
    InvalidOption {
        q_no: QuestionNumber,
        index: usize,
        available: usize,
    },
    #[error("every question has already been answered")]
    Finished,
    #[error("quiz incomplete: {answered} of {total} questions answered")]
    Incomplete { answered: usize, total: usize },
}
