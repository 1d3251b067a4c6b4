//! Command implementations.

pub mod analyze;
pub mod columns;
pub mod export;
pub mod prompt;

pub use self::analyze::execute_analyze;
pub use self::columns::{execute_columns, RECOMMENDED_COLUMNS};
pub use self::export::{execute_export, write_export};
pub use self::prompt::execute_prompt;
