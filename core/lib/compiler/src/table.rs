use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, trace};

use crate::{config::is_identifier, CompileError, CompilerConfig, ParsedEntry, SourceLocation, UnknownMnemonic};

/// One validated line of an opcode specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpcodeEntry {
    /// The mnemonic exactly as written in the specification, e.g. `B_EQ`.
    pub mnemonic: String,

    pub value: u64,

    /// The mnemonic as written in assembly source, e.g. `B.EQ`.
    pub canonical_mnemonic: String,

    #[serde(skip)]
    pub location: SourceLocation,
}

/// A validated instruction set, in specification order.
///
/// Construction guarantees that mnemonics (in both forms) and values are unique, and that every
/// value fits in the configured opcode field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpcodeTable {
    entries: Vec<OpcodeEntry>,
}

impl OpcodeTable {
    /// Validates parsed entries, reporting every problem rather than only the first.
    pub fn build(parsed: Vec<ParsedEntry>, config: &CompilerConfig) -> Result<OpcodeTable, Vec<CompileError>> {
        let max = config.max_value();

        let mut errors = vec![];
        let mut entries: Vec<OpcodeEntry> = vec![];

        // Index into `entries` for each name/value seen so far
        let mut by_mnemonic: HashMap<String, usize> = HashMap::new();
        let mut by_canonical: HashMap<String, usize> = HashMap::new();
        let mut by_value: HashMap<u64, usize> = HashMap::new();

        for ParsedEntry { mnemonic, value, location } in parsed {
            if !is_identifier(&mnemonic) {
                errors.push(CompileError::InvalidMnemonicSyntax { location, mnemonic });
                continue;
            }

            if value > max {
                errors.push(CompileError::ValueOutOfRange {
                    location,
                    literal: value.to_string(),
                    mnemonic,
                    max,
                });
                continue;
            }

            let canonical_mnemonic = config.separators.canonicalize(&mnemonic);

            let existing = by_mnemonic.get(&mnemonic).or_else(|| by_canonical.get(&canonical_mnemonic));
            if let Some(&i) = existing {
                errors.push(CompileError::DuplicateMnemonic {
                    location,
                    mnemonic,
                    first: entries[i].location,
                });
                continue;
            }

            if let Some(&i) = by_value.get(&value) {
                errors.push(CompileError::DuplicateValue {
                    location,
                    mnemonic,
                    value,
                    first_mnemonic: entries[i].mnemonic.clone(),
                });
                continue;
            }

            trace!(%mnemonic, %canonical_mnemonic, value, "accepted opcode");

            let index = entries.len();
            by_mnemonic.insert(mnemonic.clone(), index);
            by_canonical.insert(canonical_mnemonic.clone(), index);
            by_value.insert(value, index);
            entries.push(OpcodeEntry { mnemonic, value, canonical_mnemonic, location });
        }

        if errors.is_empty() {
            debug!(entries = entries.len(), max_value = max, "opcode table validated");
            Ok(OpcodeTable { entries })
        } else {
            debug!(errors = errors.len(), "opcode table rejected");
            Err(errors)
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &OpcodeEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up the opcode for a display mnemonic, with the same semantics as generated code.
    pub fn lookup(&self, mnemonic: &str) -> Result<u64, UnknownMnemonic> {
        self.entries.iter()
            .find(|e| e.canonical_mnemonic == mnemonic)
            .map(|e| e.value)
            .ok_or_else(|| UnknownMnemonic(mnemonic.to_string()))
    }

    /// Looks up the display mnemonic for an opcode.
    pub fn mnemonic_for(&self, value: u64) -> Option<&str> {
        self.entries.iter()
            .find(|e| e.value == value)
            .map(|e| e.canonical_mnemonic.as_str())
    }

    /// Serializes the table as pretty-printed JSON, in specification order.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.entries)
    }
}

impl<'a> IntoIterator for &'a OpcodeTable {
    type Item = &'a OpcodeEntry;
    type IntoIter = std::slice::Iter<'a, OpcodeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
