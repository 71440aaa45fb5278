// Adapters that turn uploaded documents into validated profile records.
// All LLM calls go through llm_client; nothing here talks HTTP directly.

#[cfg(test)]
pub mod fixtures;
pub mod pdf;
pub mod profile_parser;
pub mod validation;
