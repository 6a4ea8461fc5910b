//! Prompt construction for simplification requests

/// Fixed instruction prepended to every chunk of text sent to the provider
pub const SIMPLIFY_INSTRUCTIONS: &str = "Simplify the following academic notes while \
retaining all details, headings, examples, and structure. Explain complex terms in \
simpler language, do not shorten or remove any content. Use clear, student-friendly \
language while preserving completeness. Maintain all formatting and organization:";

/// Build the full prompt for one chunk of text
pub fn build_prompt(text: &str) -> String {
    format!("{}\n\n{}", SIMPLIFY_INSTRUCTIONS, text)
}
