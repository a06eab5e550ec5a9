// Quote form content and submission handling

pub mod questions;
pub mod submission;

pub use questions::{catalog, AnswerOption, Question};
pub use submission::{assemble, ContactDetails, QuoteAnswer, QuoteRequest, QuoteSubmission};
