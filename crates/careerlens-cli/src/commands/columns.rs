//! Columns command implementation.

use crate::error::Result;
use crate::output::Formatter;

/// Survey questions that give the oracle the most to work with
pub const RECOMMENDED_COLUMNS: &[&str] = &[
    "Full Name / Name",
    "Email Address / Email",
    "What do you like doing best? / Interests",
    "How do you prefer to work?",
    "What tech areas are you interested in?",
    "What tech-related activities have you enjoyed?",
    "What is your experience level?",
    "What certifications do you have?",
    "What tools/platforms have you used?",
];

/// Execute the columns command.
pub fn execute_columns(formatter: &Formatter) -> Result<String> {
    formatter.format_columns(RECOMMENDED_COLUMNS)
}
