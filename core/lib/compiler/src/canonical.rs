use serde::{Deserialize, Serialize};

/// The separator convention mapping specification mnemonics onto display mnemonics.
///
/// Specifications are usually written with identifier-safe names (`B_EQ`) while assembly source
/// uses a different separator (`B.EQ`). Every occurrence of `from` is replaced by `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Separators {
    pub from: char,
    pub to: char,
}

impl Separators {
    pub fn new(from: char, to: char) -> Self {
        Self { from, to }
    }

    /// A convention which leaves mnemonics untouched.
    pub fn identity() -> Self {
        Self { from: '_', to: '_' }
    }

    pub fn is_identity(&self) -> bool {
        self.from == self.to
    }

    /// Converts a specification mnemonic into its display form.
    pub fn canonicalize(&self, mnemonic: &str) -> String {
        if self.is_identity() {
            return mnemonic.to_string();
        }
        mnemonic.chars()
            .map(|c| if c == self.from { self.to } else { c })
            .collect()
    }
}

impl Default for Separators {
    fn default() -> Self {
        Self { from: '_', to: '.' }
    }
}
