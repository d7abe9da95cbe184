// Interview question generation.
// Flow: extract → normalize → build prompt → generate → (client-side) parse.
// All LLM calls go through llm_client; no direct Gemini calls here.

pub mod analyzer;
pub mod extract;
pub mod handlers;
pub mod normalize;
pub mod parser;
pub mod prompts;
