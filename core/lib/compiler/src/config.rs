use serde::{Deserialize, Serialize};

use crate::{ConfigError, Dialect, Separators};

/// Everything which influences how a specification is validated and rendered.
///
/// Every field has a default, so a JSON configuration file only needs to name the fields it
/// changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompilerConfig {
    /// How specification mnemonics map onto display mnemonics.
    pub separators: Separators,

    /// Width of the opcode field in the target instruction encoding. Values must fit in it.
    pub opcode_width_bits: u8,

    pub dialect: Dialect,

    /// Name of the generated mnemonic-to-opcode function.
    pub function_name: String,

    /// Also emit one named constant per opcode, and return those from the lookup.
    pub with_constants: bool,

    /// Also emit an opcode-to-display-mnemonic function.
    pub with_reverse_lookup: bool,

    /// Prepended to every emitted constant name.
    pub constant_prefix: String,
}

impl CompilerConfig {
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect, ..Self::default() }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Json(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=64).contains(&self.opcode_width_bits) {
            return Err(ConfigError::WidthOutOfRange(self.opcode_width_bits));
        }

        if !is_identifier(&self.function_name) {
            return Err(ConfigError::InvalidFunctionName(self.function_name.clone()));
        }

        // An empty prefix is fine; mnemonics are identifiers by themselves
        if !self.constant_prefix.is_empty() && !is_identifier(&self.constant_prefix) {
            return Err(ConfigError::InvalidConstantPrefix(self.constant_prefix.clone()));
        }

        let to = self.separators.to;
        if !to.is_ascii_graphic() || to == '"' || to == '\\' || to == '\'' {
            return Err(ConfigError::InvalidSeparator(to));
        }

        Ok(())
    }

    /// The largest opcode value which fits in the configured field.
    pub fn max_value(&self) -> u64 {
        match self.opcode_width_bits {
            0 => 0,
            w if w >= 64 => u64::MAX,
            w => (1 << w) - 1,
        }
    }
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            separators: Separators::default(),
            opcode_width_bits: 6,
            dialect: Dialect::Go,
            function_name: "lookup".to_string(),
            with_constants: false,
            with_reverse_lookup: false,
            constant_prefix: String::new(),
        }
    }
}

/// Whether a string is an ASCII identifier: a letter or `_`, followed by letters, digits or `_`.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => (),
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
