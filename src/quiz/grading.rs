use crate::models::QuizSession;

/// Outcome for one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// 1-based question number.
    pub number: usize,
    pub correct: bool,
    /// The correct definition.
    pub expected: String,
}

impl Verdict {
    pub fn message(&self) -> String {
        if self.correct {
            format!("Q{}: Correct!", self.number)
        } else {
            format!("Q{}: Wrong! Correct: {}", self.number, self.expected)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grade {
    pub score: usize,
    pub total: usize,
    pub verdicts: Vec<Verdict>,
}

impl Grade {
    /// Score as a whole percentage, rounded to nearest.
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.score as f64 / self.total as f64 * 100.0).round() as u32
    }

    pub fn summary(&self) -> String {
        format!("Score: {}/{} ({}%)", self.score, self.total, self.percent())
    }
}

/// Grade the checked option of each question against the answer key.
///
/// `selections[i]` is the index of the option checked for question `i`. A missing
/// or out-of-range selection counts as wrong.
pub fn grade(session: &QuizSession, selections: &[Option<usize>]) -> Grade {
    let key = session.answer_key();

    let verdicts: Vec<Verdict> = session
        .questions()
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let chosen = selections
                .get(index)
                .copied()
                .flatten()
                .and_then(|option| question.options.get(option));

            Verdict {
                number: index + 1,
                correct: chosen.is_some_and(|answer| key.is_correct(index, answer)),
                expected: key.correct(index).unwrap_or_default().to_string(),
            }
        })
        .collect();

    Grade {
        score: verdicts.iter().filter(|v| v.correct).count(),
        total: session.len(),
        verdicts,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::Question;

    fn session(count: usize) -> QuizSession {
        let questions = (0..count)
            .map(|i| Question {
                word: format!("word{i}"),
                definition: format!("def{i}"),
                options: vec![
                    format!("wrong{i}"),
                    format!("def{i}"),
                    format!("other{i}"),
                ],
            })
            .collect();
        QuizSession::new(questions)
    }

    #[test]
    fn test_grade_counts_exact_matches() {
        let session = session(3);
        let grade = grade(&session, &[Some(1), Some(0), None]);

        assert_eq!(grade.score, 1);
        assert_eq!(grade.total, 3);
        assert_eq!(
            grade.verdicts.iter().map(Verdict::message).collect::<Vec<_>>(),
            vec![
                "Q1: Correct!".to_string(),
                "Q2: Wrong! Correct: def1".to_string(),
                "Q3: Wrong! Correct: def2".to_string(),
            ]
        );
    }

    #[test]
    fn test_grade_is_repeatable() {
        let session = session(4);
        let selections = [Some(1), Some(1), Some(2), Some(0)];
        assert_eq!(grade(&session, &selections), grade(&session, &selections));
    }

    #[test]
    fn test_score_stays_in_range() {
        let session = session(5);
        assert_eq!(grade(&session, &[]).score, 0);
        assert_eq!(grade(&session, &[Some(9); 5]).score, 0);
        assert_eq!(grade(&session, &[Some(1); 8]).score, 5);
    }

    #[test]
    fn test_percent_rounds_to_nearest() {
        let session = session(6);
        let grade = grade(&session, &[Some(1), Some(1), None, None, None, None]);
        assert_eq!(grade.percent(), 33);
        assert_eq!(grade.summary(), "Score: 2/6 (33%)");

        let grade = Grade {
            score: 4,
            total: 6,
            verdicts: Vec::new(),
        };
        assert_eq!(grade.percent(), 67);

        let grade = Grade {
            score: 0,
            total: 0,
            verdicts: Vec::new(),
        };
        assert_eq!(grade.percent(), 0);
    }
}
