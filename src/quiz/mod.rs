//! Quiz assembly, grading and the view models shown by the UI.

pub mod builder;
mod grading;
pub mod view;

pub use builder::{assemble, QuizBuilder, WordDefinition, MAX_OPTIONS};
pub use grading::{grade, Grade, Verdict};
