use crate::{CompilerConfig, OpcodeTable};

use super::{constant_name, indent, string_literal, value_type_bits, Render, GENERATED_NOTICE};

const C_KEYWORDS: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else", "enum",
    "extern", "float", "for", "goto", "if", "inline", "int", "long", "register", "restrict",
    "return", "short", "signed", "sizeof", "static", "struct", "switch", "typedef", "union",
    "unsigned", "void", "volatile", "while", "_Alignas", "_Alignof", "_Atomic", "_Bool",
    "_Complex", "_Generic", "_Imaginary", "_Noreturn", "_Static_assert", "_Thread_local",
    "NULL",
    // Library function called by the output
    "strcmp",
];

/// Renders a C fragment: a chain of `strcmp` tests writing the opcode through an out-parameter
/// and returning a status code.
pub struct CRenderer;

impl CRenderer {
    fn value_type(config: &CompilerConfig) -> &'static str {
        match value_type_bits(config) {
            8 => "unsigned char",
            16 => "unsigned short",
            32 => "unsigned long",
            _ => "unsigned long long",
        }
    }

    fn literal_suffix(config: &CompilerConfig) -> &'static str {
        match value_type_bits(config) {
            8 | 16 => "U",
            32 => "UL",
            _ => "ULL",
        }
    }

    fn status_name(config: &CompilerConfig, status: &str) -> String {
        format!("{}_{status}", config.function_name.to_ascii_uppercase())
    }
}

impl Render for CRenderer {
    fn render(&self, table: &OpcodeTable, config: &CompilerConfig) -> String {
        let ty = Self::value_type(config);
        let suffix = Self::literal_suffix(config);
        let func = &config.function_name;
        let ok = Self::status_name(config, "OK");
        let unknown = Self::status_name(config, "UNKNOWN_MNEMONIC");
        let reverse = format!("{func}_mnemonic");
        let status = format!("{func}_status");

        let values = table.iter()
            .map(|e| if config.with_constants {
                constant_name(e, config, C_KEYWORDS, &[func.as_str(), reverse.as_str(), status.as_str(), ok.as_str(), unknown.as_str()])
            } else {
                format!("{}{suffix}", e.value)
            })
            .collect::<Vec<_>>();

        let mut lines = vec![
            format!("/* {GENERATED_NOTICE} */"),
            String::new(),
            "#include <string.h>".to_string(),
            String::new(),
        ];

        // Constants
        if config.with_constants && !table.is_empty() {
            for (entry, name) in table.iter().zip(&values) {
                lines.push(format!("#define {name} {}{suffix}", entry.value));
            }
            lines.push(String::new());
        }

        lines.push(format!("/* Status codes returned by {func}. */"));
        lines.push(format!("enum {status} {{"));
        lines.push(format!("    {ok} = 0,"));
        lines.push(format!("    {unknown} = 1"));
        lines.push("};".to_string());
        lines.push(String::new());

        // Lookup
        let mut body = vec![];
        for (entry, value) in table.iter().zip(&values) {
            body.push(format!("if (strcmp(mnemonic, {}) == 0) {{", string_literal(&entry.canonical_mnemonic)));
            body.push(format!("    *opcode = {value};"));
            body.push(format!("    return {ok};"));
            body.push("}".to_string());
        }
        body.push(format!("return {unknown};"));

        lines.push(format!("/* Writes the opcode for an assembly mnemonic to `opcode`, or returns {unknown}. */"));
        lines.push(format!("int {func}(const char *mnemonic, {ty} *opcode)"));
        lines.push("{".to_string());
        lines.extend(indent(&body, "    ", 1));
        lines.push("}".to_string());

        // Reverse lookup
        if config.with_reverse_lookup {
            let mut cases = vec![];
            for (entry, value) in table.iter().zip(&values) {
                cases.push(format!("case {value}:"));
                cases.push(format!("    return {};", string_literal(&entry.canonical_mnemonic)));
            }
            cases.push("default:".to_string());
            cases.push("    return NULL;".to_string());

            lines.push(String::new());
            lines.push("/* Returns the assembly mnemonic for an opcode, or NULL. */".to_string());
            lines.push(format!("const char *{reverse}({ty} opcode)"));
            lines.push("{".to_string());
            lines.push("    switch (opcode) {".to_string());
            lines.extend(indent(&cases, "    ", 1));
            lines.push("    }".to_string());
            lines.push("}".to_string());
        }

        lines.push(String::new());
        lines.join("\n")
    }
}
