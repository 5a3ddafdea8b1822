//! Conversion of a validated [OpcodeTable] into source code for a target language.
//!
//! Every dialect produces the same shape of output:
//!
//!   1. a fixed "generated code" notice,
//!   2. the error type returned on a lookup miss (where the dialect needs one),
//!   3. optionally, one named constant per opcode,
//!   4. the lookup function: one branch per entry in table order, then exactly one fallback,
//!   5. optionally, the reverse (opcode to mnemonic) lookup function.
//!
//! Output depends only on the table and the configuration, so it is byte-identical between runs.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};
use tracing::debug;

use crate::{CompilerConfig, OpcodeEntry, OpcodeTable};

mod c;
pub use c::*;

mod go;
pub use go::*;

mod rust;
pub use rust::*;

/// The language which generated lookup code is written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, EnumIter, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    Go,
    Rust,
    C,
}

impl Dialect {
    pub fn renderer(&self) -> &'static dyn Render {
        match self {
            Dialect::Go => &GoRenderer,
            Dialect::Rust => &RustRenderer,
            Dialect::C => &CRenderer,
        }
    }
}

/// Anything which can convert an [OpcodeTable] into source code.
pub trait Render {
    /// Converts the table into source code, according to the configuration.
    fn render(&self, table: &OpcodeTable, config: &CompilerConfig) -> String;
}

/// Renders the table in the configured dialect.
pub fn render(table: &OpcodeTable, config: &CompilerConfig) -> String {
    let output = config.dialect.renderer().render(table, config);
    debug!(dialect = config.dialect.as_ref(), entries = table.len(), bytes = output.len(), "rendered lookup");
    output
}

pub(crate) const GENERATED_NOTICE: &str = "Generated by opcodegen from an opcode specification. Do not edit.";

/// Size in bits of the narrowest unsigned integer type which can hold an opcode field.
pub(crate) fn value_type_bits(config: &CompilerConfig) -> u8 {
    match config.opcode_width_bits {
        0..=8 => 8,
        9..=16 => 16,
        17..=32 => 32,
        _ => 64,
    }
}

/// Formats a display mnemonic as a double-quoted string literal. This escape syntax is shared
/// by every supported dialect.
pub(crate) fn string_literal(s: &str) -> String {
    let mut literal = String::with_capacity(s.len() + 2);
    literal.push('"');
    for c in s.chars() {
        match c {
            '"' => literal.push_str("\\\""),
            '\\' => literal.push_str("\\\\"),
            c => literal.push(c),
        }
    }
    literal.push('"');
    literal
}

/// Parameter names used by every dialect's lookup functions.
const PARAMETER_NAMES: &[&str] = &["mnemonic", "opcode"];

/// Name of the constant emitted for an entry. Names colliding with a reserved identifier of the
/// target language, a parameter, or a generated function get a trailing underscore.
pub(crate) fn constant_name(entry: &OpcodeEntry, config: &CompilerConfig, reserved: &[&str], functions: &[&str]) -> String {
    let name = format!("{}{}", config.constant_prefix, entry.mnemonic);
    let taken = reserved.contains(&name.as_str())
        || PARAMETER_NAMES.contains(&name.as_str())
        || functions.contains(&name.as_str());
    if taken {
        format!("{name}_")
    } else {
        name
    }
}

/// Indents each line by `levels` steps of `unit`, leaving empty lines empty.
pub(crate) fn indent(lines: &[String], unit: &str, levels: usize) -> Vec<String> {
    lines.iter()
        .map(|l| if l.is_empty() { String::new() } else { format!("{}{l}", unit.repeat(levels)) })
        .collect()
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use crate::{compile, CompilerConfig, Dialect};

    use super::string_literal;

    const EXAMPLE: &str = "
        ADD = 1
        SUB = 3
        B_EQ = 34
    ";

    #[test]
    fn test_dialect_names() {
        assert_eq!(
            vec!["go", "rust", "c"],
            Dialect::iter().map(|d| d.as_ref().to_string()).collect::<Vec<_>>()
        );
        assert_eq!(Ok(Dialect::Rust), Dialect::from_str("rust"));
        assert!(Dialect::from_str("python").is_err());
    }

    #[test]
    fn test_string_literal() {
        assert_eq!(r#""B.EQ""#, string_literal("B.EQ"));
        assert_eq!(r#""A\"B\\C""#, string_literal("A\"B\\C"));
    }

    #[test]
    fn test_deterministic() {
        for dialect in Dialect::iter() {
            let config = CompilerConfig {
                with_constants: true,
                with_reverse_lookup: true,
                ..CompilerConfig::new(dialect)
            };
            assert_eq!(
                compile(EXAMPLE, &config).unwrap(),
                compile(EXAMPLE, &config).unwrap(),
            );
        }
    }

    #[test]
    fn test_notice_first() {
        for dialect in Dialect::iter() {
            let output = compile(EXAMPLE, &CompilerConfig::new(dialect)).unwrap();
            let first_line = output.lines().next().unwrap();
            assert!(first_line.to_lowercase().contains("do not edit"), "{dialect:?}: {first_line}");
            assert!(output.ends_with('\n'));
        }
    }
}
