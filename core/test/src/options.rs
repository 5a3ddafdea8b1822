//! Generated code under non-default options.

mod constants {
    use opcode_table_macros::opcode_lookup;

    opcode_lookup!("
        ADD = 0x01
        B_EQ = 0b100010 ; conditional branch
        loop = 7
    ", constants = true, reverse = true, function = parse_opcode);

    #[test]
    fn test_constants() {
        assert_eq!(1, ADD);
        assert_eq!(34, B_EQ);
        assert_eq!(7, loop_);

        assert_eq!(Ok(B_EQ), parse_opcode("B.EQ"));
        assert_eq!(Ok(loop_), parse_opcode("loop"));
        assert_eq!(Some("B.EQ"), parse_opcode_mnemonic(B_EQ));
        assert_eq!(None, parse_opcode_mnemonic(2));
    }
}

mod prefixed {
    use opcode_table_macros::opcode_lookup;

    opcode_lookup!("HALT = 62\nNOOP = 63", constants = true, prefix = "OP_");

    #[test]
    fn test_prefix() {
        assert_eq!(62, OP_HALT);
        assert_eq!(Ok(OP_NOOP), lookup("NOOP"));
    }
}

mod generated_names {
    use opcode_table_macros::opcode_lookup;

    // Each of these would otherwise clash with a parameter, a function or a prelude name
    opcode_lookup!("
        mnemonic = 1
        opcode = 2
        lookup = 3
        lookup_mnemonic = 4
        Ok = 5
    ", constants = true, reverse = true);

    #[test]
    fn test_generated_names_are_suffixed() {
        assert_eq!((1, 2, 3, 4, 5), (mnemonic_, opcode_, lookup_, lookup_mnemonic_, Ok_));

        assert_eq!(Ok(mnemonic_), lookup("mnemonic"));
        assert_eq!(Ok(5), lookup("Ok"));
        assert_eq!(Some("opcode"), lookup_mnemonic(opcode_));
        assert_eq!(Err(UnknownMnemonic), lookup("Err"));
    }
}

mod separators {
    use opcode_table_macros::opcode_lookup;

    opcode_lookup!("
        ld_w = 1
        ld_b = 2
    ", separator_from = '_', separator_to = '-');

    #[test]
    fn test_custom_separator() {
        assert_eq!(Ok(1), lookup("ld-w"));
        assert_eq!(Ok(2), lookup("ld-b"));
        assert_eq!(Err(UnknownMnemonic), lookup("ld.w"));
        assert_eq!(Err(UnknownMnemonic), lookup("ld_w"));
    }
}

mod wide {
    use opcode_table_macros::opcode_lookup;

    opcode_lookup!("
        EXT = 0x1FF
        BIG = 0xFFFFFFFF
    ", width = 32, reverse = true);

    #[test]
    fn test_wide_field() {
        let value: Result<u32, UnknownMnemonic> = lookup("EXT");
        assert_eq!(Ok(0x1FF), value);
        assert_eq!(Ok(u32::MAX), lookup("BIG"));
        assert_eq!(Some("BIG"), lookup_mnemonic(u32::MAX));
    }
}

mod full_field {
    use opcode_table_macros::opcode_lookup;

    // Every value of a 1-bit field is used
    opcode_lookup!("OFF = 0\nON = 1", width = 1, reverse = true);

    #[test]
    fn test_full_field() {
        assert_eq!(Some("OFF"), lookup_mnemonic(0));
        assert_eq!(Some("ON"), lookup_mnemonic(1));
        assert_eq!(None, lookup_mnemonic(2));
    }
}

mod empty {
    use opcode_table_macros::opcode_lookup;

    opcode_lookup!("");

    #[test]
    fn test_empty_table() {
        assert_eq!(Err(UnknownMnemonic), lookup("ADD"));
        assert_eq!(Err(UnknownMnemonic), lookup(""));
    }
}
