//! Static HTML export for a component tree

mod compiler;

pub use compiler::{compile_to_html, CompileError, CompileOptions};

#[cfg(test)]
mod tests;
