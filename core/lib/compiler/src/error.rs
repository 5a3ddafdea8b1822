use thiserror::Error;

use crate::SourceLocation;

/// An error which makes an opcode specification unusable.
///
/// Every stage reports as many of these as it can find before stopping, so a caller gets the full
/// picture of a broken specification in one run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error("malformed entry: {reason}")]
    MalformedEntry {
        location: SourceLocation,
        reason: String,
    },

    #[error("invalid mnemonic '{mnemonic}': must start with a letter or `_` and contain only letters, digits and `_`")]
    InvalidMnemonicSyntax {
        location: SourceLocation,
        mnemonic: String,
    },

    #[error("duplicate mnemonic '{mnemonic}', first defined at {first}")]
    DuplicateMnemonic {
        location: SourceLocation,
        mnemonic: String,
        first: SourceLocation,
    },

    #[error("duplicate opcode value {value} for '{mnemonic}', already used by '{first_mnemonic}'")]
    DuplicateValue {
        location: SourceLocation,
        mnemonic: String,
        value: u64,
        first_mnemonic: String,
    },

    #[error("opcode value {literal} for '{mnemonic}' does not fit the opcode field (maximum {max})")]
    ValueOutOfRange {
        location: SourceLocation,
        mnemonic: String,
        literal: String,
        max: u64,
    },
}

impl CompileError {
    /// Where in the specification this error was found.
    pub fn location(&self) -> SourceLocation {
        match self {
            CompileError::MalformedEntry { location, .. }
            | CompileError::InvalidMnemonicSyntax { location, .. }
            | CompileError::DuplicateMnemonic { location, .. }
            | CompileError::DuplicateValue { location, .. }
            | CompileError::ValueOutOfRange { location, .. } => *location,
        }
    }

    /// Formats this error as `file:line:col: message`.
    pub fn describe(&self, file: &str) -> String {
        format!("{}: {self}", self.location().describe(file))
    }
}

/// An invalid [CompilerConfig](crate::CompilerConfig). Detected before any input is parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("opcode field width must be between 1 and 64 bits, got {0}")]
    WidthOutOfRange(u8),

    #[error("function name '{0}' is not a valid identifier")]
    InvalidFunctionName(String),

    #[error("constant prefix '{0}' cannot start an identifier")]
    InvalidConstantPrefix(String),

    #[error("display separator {0:?} cannot appear in a mnemonic string")]
    InvalidSeparator(char),

    #[error("could not read configuration: {0}")]
    Json(String),
}

/// Returned by an in-process lookup when no entry has the requested mnemonic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown mnemonic: {0}")]
pub struct UnknownMnemonic(pub String);

/// Why a whole compilation run failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompilerFailure {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("{} error(s) in opcode specification", .0.len())]
    Compile(Vec<CompileError>),
}

impl From<Vec<CompileError>> for CompilerFailure {
    fn from(errors: Vec<CompileError>) -> Self {
        CompilerFailure::Compile(errors)
    }
}
