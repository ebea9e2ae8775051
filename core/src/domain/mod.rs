pub mod common;
pub mod llm;
pub mod nutrition;
