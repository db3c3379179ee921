/// One quiz question: a word, its definition and the options shown for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub word: String,
    pub definition: String,
    /// Between 1 and 4 entries, `definition` among them exactly once.
    pub options: Vec<String>,
}

/// Correct definition per question index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerKey(Vec<String>);

impl AnswerKey {
    pub fn correct(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn is_correct(&self, index: usize, answer: &str) -> bool {
        self.correct(index) == Some(answer)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Everything one quiz needs. Building a new quiz replaces it wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizSession {
    questions: Vec<Question>,
    answer_key: AnswerKey,
}

impl QuizSession {
    pub fn new(questions: Vec<Question>) -> Self {
        let answer_key = AnswerKey(questions.iter().map(|q| q.definition.clone()).collect());
        Self {
            questions,
            answer_key,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answer_key(&self) -> &AnswerKey {
        &self.answer_key
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
