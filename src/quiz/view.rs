//! View models the UI renders instead of reading the session directly.

use crate::models::QuizSession;

use super::builder::MAX_OPTIONS;
use super::grading::Grade;

const OPTION_LABELS: [char; MAX_OPTIONS] = ['A', 'B', 'C', 'D'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView<'a> {
    pub label: char,
    pub text: &'a str,
    pub checked: bool,
    /// The keyboard cursor rests on this option.
    pub focused: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView<'a> {
    pub number: usize,
    pub word: &'a str,
    pub options: Vec<OptionView<'a>>,
    pub answered: bool,
}

/// One view per question. `cursor` is `(question index, option index)`.
pub fn question_views<'a>(
    session: &'a QuizSession,
    selections: &[Option<usize>],
    cursor: Option<(usize, usize)>,
) -> Vec<QuestionView<'a>> {
    session
        .questions()
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let selected = selections.get(index).copied().flatten();
            let options = question
                .options
                .iter()
                .zip(OPTION_LABELS)
                .enumerate()
                .map(|(option, (text, label))| OptionView {
                    label,
                    text,
                    checked: selected == Some(option),
                    focused: cursor == Some((index, option)),
                })
                .collect();

            QuestionView {
                number: index + 1,
                word: &question.word,
                options,
                answered: selected.is_some(),
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerdictView<'a> {
    pub number: usize,
    pub word: &'a str,
    pub correct: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView<'a> {
    pub summary: String,
    pub percent: u32,
    pub verdicts: Vec<VerdictView<'a>>,
}

pub fn result_view<'a>(session: &'a QuizSession, grade: &Grade) -> ResultView<'a> {
    let verdicts = grade
        .verdicts
        .iter()
        .zip(session.questions())
        .map(|(verdict, question)| VerdictView {
            number: verdict.number,
            word: &question.word,
            correct: verdict.correct,
            message: verdict.message(),
        })
        .collect();

    ResultView {
        summary: grade.summary(),
        percent: grade.percent(),
        verdicts,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::Question;
    use crate::quiz::grade;

    fn session() -> QuizSession {
        QuizSession::new(vec![
            Question {
                word: "apple".into(),
                definition: "A fruit.".into(),
                options: vec!["A river.".into(), "A fruit.".into()],
            },
            Question {
                word: "river".into(),
                definition: "A river.".into(),
                options: vec!["A fruit.".into(), "A river.".into()],
            },
        ])
    }

    #[test]
    fn test_question_views_mark_checked_and_focused() {
        let session = session();
        let views = question_views(&session, &[Some(1), None], Some((1, 0)));

        assert_eq!(views.len(), 2);
        assert_eq!(views[0].word, "apple");
        assert!(views[0].answered);
        assert!(!views[1].answered);

        let first: Vec<(char, bool, bool)> = views[0]
            .options
            .iter()
            .map(|o| (o.label, o.checked, o.focused))
            .collect();
        assert_eq!(first, vec![('A', false, false), ('B', true, false)]);
        assert!(views[1].options[0].focused);
        assert_eq!(views[1].options.iter().filter(|o| o.checked).count(), 0);
    }

    #[test]
    fn test_result_view() {
        let session = session();
        let grade = grade(&session, &[Some(1), Some(0)]);
        let view = result_view(&session, &grade);

        assert_eq!(view.summary, "Score: 1/2 (50%)");
        assert_eq!(view.verdicts[0].message, "Q1: Correct!");
        assert_eq!(view.verdicts[1].word, "river");
        assert!(!view.verdicts[1].correct);
    }
}
