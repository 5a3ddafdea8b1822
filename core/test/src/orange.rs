//! The Orange VM instruction set, compiled both ways: by the macro into real Rust, and by the
//! compiler into an in-process table.

use opcode_table_compiler::CompilerConfig;
use opcode_table_macros::opcode_lookup;

use crate::util::{self, NOT_MNEMONICS, ORANGE_SPEC};

// Must stay identical to `ORANGE_SPEC`
opcode_lookup!("ADD  = 1
           \tADDI = 2
           \tSUB  = 3
           \tSUBI = 4
           \tAND  = 5
           \tOR   = 6
           \tXOR  = 7
           \tLSL  = 8
           \tLSR  = 9
           \tCMP  = 10
           \tCMPI = 11
           \tLDREG  = 20
           \tLDWORD = 21
           \tLDHWRD = 22
           \tLDBYTE = 23
           \tSTREG  = 24
           \tSTWORD = 25
           \tSTHWRD = 26
           \tSTBYTE = 27
           \tMOVZ = 30
           \tMOVK = 31
           \tB     = 32
           \tBREG  = 33
           \tB_EQ  = 34
           \tB_NEQ = 35
           \tB_LT  = 36
           \tB_LE  = 37
           \tB_GT  = 38
           \tB_GE  = 39
           \tBL    = 40
           \tHALT = 62
           \tNOOP = 63", width = 6, reverse = true);

#[test]
fn test_every_entry_round_trips() {
    let table = util::oracle(ORANGE_SPEC, &CompilerConfig::default());
    assert_eq!(32, table.len());

    for entry in &table {
        let expected = u8::try_from(entry.value).unwrap();
        assert_eq!(Ok(expected), lookup(&entry.canonical_mnemonic), "{}", entry.mnemonic);
        assert_eq!(Some(entry.canonical_mnemonic.as_str()), lookup_mnemonic(expected));
    }
}

#[test]
fn test_branch_mnemonics() {
    assert_eq!(Ok(32), lookup("B"));
    assert_eq!(Ok(34), lookup("B.EQ"));
    assert_eq!(Ok(35), lookup("B.NEQ"));
    assert_eq!(Ok(39), lookup("B.GE"));
    assert_eq!(Ok(40), lookup("BL"));
}

#[test]
fn test_unknown_mnemonics() {
    for mnemonic in NOT_MNEMONICS {
        assert_eq!(Err(UnknownMnemonic), lookup(mnemonic), "{mnemonic:?}");
    }
}

#[test]
fn test_unused_opcodes() {
    // Gaps in the encoding have no mnemonic
    for opcode in [0, 12, 19, 28, 29, 41, 61] {
        assert_eq!(None, lookup_mnemonic(opcode), "{opcode}");
    }
}
