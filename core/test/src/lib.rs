// This library is functionally blank.
// It is only a harness for integration tests, which call lookup functions generated by
// `opcode_lookup!` and compare them with the compiler's own view of the table.

#[cfg(test)]
pub mod util;

#[cfg(test)]
mod orange;

#[cfg(test)]
mod options;

#[cfg(test)]
mod test {
    use opcode_table_macros::opcode_lookup;

    opcode_lookup!("
        ADD = 1
        SUB = 3
        B_EQ = 34
    ");

    #[test]
    fn test_example() {
        assert_eq!(Ok(1), lookup("ADD"));
        assert_eq!(Ok(3), lookup("SUB"));
        assert_eq!(Ok(34), lookup("B.EQ"));
        assert_eq!(Err(UnknownMnemonic), lookup("XOR"));
    }

    #[test]
    fn test_source_form_does_not_match() {
        assert_eq!(Err(UnknownMnemonic), lookup("B_EQ"));
        assert_eq!(Err(UnknownMnemonic), lookup("add"));
        assert_eq!(Err(UnknownMnemonic), lookup(""));
        assert_eq!(Err(UnknownMnemonic), lookup(" ADD"));
    }

    #[test]
    fn test_error_is_usable() {
        let err: Box<dyn std::error::Error> = Box::new(lookup("XOR").unwrap_err());
        assert_eq!("unknown mnemonic", err.to_string());
    }
}
