use crate::{CompilerConfig, OpcodeTable};

use super::{constant_name, indent, string_literal, value_type_bits, Render};

const GO_KEYWORDS: &[&str] = &[
    "_", "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
    "for", "func", "go", "goto", "if", "import", "interface", "map", "package", "range", "return",
    "select", "struct", "switch", "type", "var",
    // Predeclared or generated identifiers referenced by the output
    "false", "nil", "string", "true", "error", "UnknownMnemonicError",
];

/// Renders a Go fragment: a `switch` over the mnemonic string, as used by the assembler's
/// `parseOpcode`.
pub struct GoRenderer;

impl GoRenderer {
    fn value_type(config: &CompilerConfig) -> String {
        format!("uint{}", value_type_bits(config))
    }

    fn reverse_function_name(config: &CompilerConfig) -> String {
        format!("{}Mnemonic", config.function_name)
    }
}

impl Render for GoRenderer {
    fn render(&self, table: &OpcodeTable, config: &CompilerConfig) -> String {
        let ty = Self::value_type(config);
        let func = &config.function_name;
        let reverse = Self::reverse_function_name(config);

        // How each entry's value is spelled at use sites
        let values = table.iter()
            .map(|e| if config.with_constants {
                constant_name(e, config, GO_KEYWORDS, &[func.as_str(), reverse.as_str()])
            } else {
                e.value.to_string()
            })
            .collect::<Vec<_>>();

        let mut lines = vec![
            "// Code generated by opcodegen. DO NOT EDIT.".to_string(),
            String::new(),
            format!("// UnknownMnemonicError is returned by {func} when no opcode has the given mnemonic."),
            "type UnknownMnemonicError struct {".to_string(),
            "\tMnemonic string".to_string(),
            "}".to_string(),
            String::new(),
            "func (e UnknownMnemonicError) Error() string {".to_string(),
            "\treturn \"unknown mnemonic: \" + e.Mnemonic".to_string(),
            "}".to_string(),
            String::new(),
        ];

        // Constants
        if config.with_constants && !table.is_empty() {
            lines.push("const (".to_string());
            let consts = table.iter().zip(&values)
                .map(|(e, name)| format!("{name} {ty} = {}", e.value))
                .collect::<Vec<_>>();
            lines.extend(indent(&consts, "\t", 1));
            lines.push(")".to_string());
            lines.push(String::new());
        }

        // Lookup
        let mut cases = vec![];
        for (entry, value) in table.iter().zip(&values) {
            cases.push(format!("case {}:", string_literal(&entry.canonical_mnemonic)));
            cases.push(format!("\treturn {value}, nil"));
        }
        cases.push("default:".to_string());
        cases.push("\treturn 0, UnknownMnemonicError{Mnemonic: mnemonic}".to_string());

        lines.push(format!("// {func} returns the opcode for an assembly mnemonic."));
        lines.push(format!("func {func}(mnemonic string) ({ty}, error) {{"));
        lines.push("\tswitch mnemonic {".to_string());
        lines.extend(indent(&cases, "\t", 1));
        lines.push("\t}".to_string());
        lines.push("}".to_string());

        // Reverse lookup
        if config.with_reverse_lookup {
            let mut cases = vec![];
            for (entry, value) in table.iter().zip(&values) {
                cases.push(format!("case {value}:"));
                cases.push(format!("\treturn {}, true", string_literal(&entry.canonical_mnemonic)));
            }
            cases.push("default:".to_string());
            cases.push("\treturn \"\", false".to_string());

            lines.push(String::new());
            lines.push(format!("// {reverse} returns the assembly mnemonic for an opcode."));
            lines.push(format!("func {reverse}(opcode {ty}) (string, bool) {{"));
            lines.push("\tswitch opcode {".to_string());
            lines.extend(indent(&cases, "\t", 1));
            lines.push("\t}".to_string());
            lines.push("}".to_string());
        }

        lines.push(String::new());
        lines.join("\n")
    }
}
