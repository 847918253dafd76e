// src/core.rs
pub mod counter;
pub mod scanner;
