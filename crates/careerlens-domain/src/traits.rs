//! Trait definitions for external interactions
//!
//! These traits define the boundary between the analysis pipeline and the
//! text-generating oracle. Implementations live in `careerlens-llm`.

/// Trait for LLM provider operations
///
/// The call is synchronous and returns the whole reply at once; there is no
/// streaming or partial delivery.
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error;

    /// Generate a completion for `prompt` under the given system instruction
    fn generate(&self, system: &str, prompt: &str) -> Result<String, Self::Error>;

    /// Model identifier, used in diagnostics
    fn model_name(&self) -> &str {
        "llm"
    }
}
