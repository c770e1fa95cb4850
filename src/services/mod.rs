pub mod generator;
pub mod input;
pub mod llm;
pub mod parser;
pub mod publisher;
pub mod renderer;
