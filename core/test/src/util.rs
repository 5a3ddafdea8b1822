use opcode_table_compiler::{compile_table, CompilerConfig, OpcodeTable};

/// The instruction set of the Orange VM, as written in its assembler's generator script.
pub const ORANGE_SPEC: &str = "ADD  = 1
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
           \tNOOP = 63";

/// The compiler's in-process view of a specification, used as the expected behaviour of
/// generated code.
pub fn oracle(spec: &str, config: &CompilerConfig) -> OpcodeTable {
    compile_table(spec, config).unwrap()
}

/// Display mnemonics which don't appear in any table under test.
pub const NOT_MNEMONICS: &[&str] = &["", "XOR ", "xor", "B_EQ", "B.", "B.EQ.", "NOP", "HALT\n", "B..EQ"];
