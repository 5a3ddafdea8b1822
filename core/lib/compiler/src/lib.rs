//! Compiles a textual opcode specification (`NAME = NUMBER` lines) into a lookup function mapping
//! assembly mnemonics to opcode values, written in one of several target languages.
//!
//! The pipeline is [Tokenizer] -> [Parser] -> [OpcodeTable::build] -> [render]. Each stage
//! collects every error it can find before giving up, and nothing is rendered unless the whole
//! specification is valid.

use tracing::debug;

mod source;
pub use source::*;

mod error;
pub use error::*;

mod tokenizer;
pub use tokenizer::*;

mod parser;
pub use parser::*;

mod canonical;
pub use canonical::*;

mod config;
pub use config::*;

mod table;
pub use table::*;

pub mod render;
pub use render::{render, Dialect, Render};

/// Tokenizes, parses and validates a specification, without rendering it.
pub fn compile_table(spec: &str, config: &CompilerConfig) -> Result<OpcodeTable, CompilerFailure> {
    config.validate()?;

    let tokens = Tokenizer::from_str(spec).tokenize();
    let entries = Parser::from_tokens(&tokens, config.max_value()).parse()?;
    debug!(tokens = tokens.len(), entries = entries.len(), "parsed opcode specification");

    Ok(OpcodeTable::build(entries, config)?)
}

/// Compiles a specification all the way to source code in the configured dialect.
pub fn compile(spec: &str, config: &CompilerConfig) -> Result<String, CompilerFailure> {
    let table = compile_table(spec, config)?;
    Ok(render(&table, config))
}
