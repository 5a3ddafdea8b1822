use crate::{CompilerConfig, OpcodeTable};

use super::{constant_name, indent, string_literal, value_type_bits, Render, GENERATED_NOTICE};

const RUST_KEYWORDS: &[&str] = &[
    "_", "Self", "abstract", "as", "async", "await", "become", "box", "break", "const", "continue",
    "crate", "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if",
    "impl", "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub",
    "ref", "return", "self", "static", "struct", "super", "trait", "true", "try", "type", "typeof",
    "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
    // Names the output refers to unqualified
    "Ok", "Err", "Some", "None", "UnknownMnemonic",
];

/// Renders Rust items: a `match` over the mnemonic string returning a [Result].
///
/// The output is also what the `opcode_lookup!` macro expands to, so it must always be valid
/// Rust, including for an empty table.
pub struct RustRenderer;

impl RustRenderer {
    fn reverse_function_name(config: &CompilerConfig) -> String {
        format!("{}_mnemonic", config.function_name)
    }
}

impl Render for RustRenderer {
    fn render(&self, table: &OpcodeTable, config: &CompilerConfig) -> String {
        let ty = format!("u{}", value_type_bits(config));
        let func = &config.function_name;
        let reverse = Self::reverse_function_name(config);

        let values = table.iter()
            .map(|e| if config.with_constants {
                constant_name(e, config, RUST_KEYWORDS, &[func.as_str(), reverse.as_str()])
            } else {
                e.value.to_string()
            })
            .collect::<Vec<_>>();

        let mut lines = vec![
            format!("// {GENERATED_NOTICE}"),
            String::new(),
            format!("/// Returned by [`{func}`] when no opcode has the given mnemonic."),
            "#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]".to_string(),
            "pub struct UnknownMnemonic;".to_string(),
            String::new(),
            "impl ::std::fmt::Display for UnknownMnemonic {".to_string(),
            "    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {".to_string(),
            "        f.write_str(\"unknown mnemonic\")".to_string(),
            "    }".to_string(),
            "}".to_string(),
            String::new(),
            "impl ::std::error::Error for UnknownMnemonic {}".to_string(),
            String::new(),
        ];

        // Constants
        if config.with_constants {
            for (entry, name) in table.iter().zip(&values) {
                if name.chars().any(|c| c.is_ascii_lowercase()) {
                    lines.push("#[allow(non_upper_case_globals)]".to_string());
                }
                lines.push(format!("pub const {name}: {ty} = {};", entry.value));
            }
            if !table.is_empty() {
                lines.push(String::new());
            }
        }

        // Lookup
        let mut arms = table.iter().zip(&values)
            .map(|(entry, value)| format!("{} => Ok({value}),", string_literal(&entry.canonical_mnemonic)))
            .collect::<Vec<_>>();
        arms.push("_ => Err(UnknownMnemonic),".to_string());

        lines.push("/// Returns the opcode for an assembly mnemonic.".to_string());
        lines.push(format!("pub fn {func}(mnemonic: &str) -> ::std::result::Result<{ty}, UnknownMnemonic> {{"));
        lines.push("    match mnemonic {".to_string());
        lines.extend(indent(&arms, "    ", 2));
        lines.push("    }".to_string());
        lines.push("}".to_string());

        // Reverse lookup
        if config.with_reverse_lookup {
            let mut arms = table.iter().zip(&values)
                .map(|(entry, value)| format!("{value} => Some({}),", string_literal(&entry.canonical_mnemonic)))
                .collect::<Vec<_>>();
            arms.push("_ => None,".to_string());

            lines.push(String::new());
            lines.push("/// Returns the assembly mnemonic for an opcode.".to_string());
            // A table filling the whole field makes the fallback unreachable
            lines.push("#[allow(unreachable_patterns)]".to_string());
            lines.push(format!(
                "pub fn {reverse}(opcode: {ty}) -> ::std::option::Option<&'static str> {{",
            ));
            lines.push("    match opcode {".to_string());
            lines.extend(indent(&arms, "    ", 2));
            lines.push("    }".to_string());
            lines.push("}".to_string());
        }

        lines.push(String::new());
        lines.join("\n")
    }
}
