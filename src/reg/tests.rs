use crate::reg::{narrow16, narrow8, RegisterFile};
use crate::sm83::{Flag, Register16, Register8};
use crate::AccessError;
use proptest::prelude::*;

#[test]
fn test_register_file_zeroed() {
    let regs = RegisterFile::new();

    for reg in [Register16::AF, Register16::BC, Register16::DE, Register16::HL, Register16::PC, Register16::SP].iter() {
        assert_eq!(regs.get16(*reg), 0);
    }

    for flag in Flag::all().iter() {
        assert!(!regs.flag(*flag));
    }
}

#[test]
fn test_pair_is_big_endian() {
    let mut regs = RegisterFile::new();

    regs.set16(Register16::BC, 0x1234).unwrap();
    assert_eq!(regs.get8(Register8::B), 0x12);
    assert_eq!(regs.get8(Register8::C), 0x34);

    regs.set8(Register8::H, 0xC0).unwrap();
    regs.set8(Register8::L, 0x01).unwrap();
    assert_eq!(regs.get16(Register16::HL), 0xC001);

    regs.set8(Register8::A, 0x01).unwrap();
    regs.set8(Register8::F, 0xB0).unwrap();
    assert_eq!(regs.get16(Register16::AF), 0x01B0);
}

#[test]
fn test_pairs_do_not_overlap() {
    let mut regs = RegisterFile::new();

    regs.set16(Register16::PC, 0x0100).unwrap();
    regs.set16(Register16::SP, 0xFFFE).unwrap();
    regs.set16(Register16::HL, 0xFFFF).unwrap();

    assert_eq!(regs.get16(Register16::PC), 0x0100);
    assert_eq!(regs.get16(Register16::SP), 0xFFFE);
    assert_eq!(regs.get16(Register16::DE), 0x0000);
}

#[test]
fn test_negative_values_are_masked() {
    let mut regs = RegisterFile::new();

    regs.set8(Register8::D, -1).unwrap();
    assert_eq!(regs.get8(Register8::D), 0xFF);

    regs.set16(Register16::DE, -2).unwrap();
    assert_eq!(regs.get16(Register16::DE), 0xFFFE);

    assert_eq!(narrow8(-128), Ok(0x80));
    assert_eq!(narrow16(-0x8000), Ok(0x8000));
}

#[test]
fn test_out_of_range_values() {
    let mut regs = RegisterFile::new();

    regs.set8(Register8::E, 0x42).unwrap();
    assert_eq!(
        regs.set8(Register8::E, 0x100),
        Err(AccessError::Value {
            value: 0x100,
            bits: 8
        })
    );
    assert!(regs.set8(Register8::E, -129).is_err());
    assert_eq!(regs.get8(Register8::E), 0x42);

    assert!(regs.set16(Register16::SP, 0x10000).is_err());
    assert!(regs.set16(Register16::SP, -0x8001).is_err());
    assert_eq!(regs.get16(Register16::SP), 0);
}

#[test]
fn test_flags() {
    let mut regs = RegisterFile::new();

    regs.set_flag(Flag::Z, true);
    regs.set_flag(Flag::C, true);
    assert_eq!(regs.get8(Register8::F), 0x90);
    assert!(regs.flag(Flag::Z));
    assert!(!regs.flag(Flag::N));

    regs.set_flag(Flag::Z, false);
    assert_eq!(regs.get8(Register8::F), 0x10);

    regs.set8(Register8::F, 0x0F).unwrap();
    regs.set_flag(Flag::H, true);
    assert_eq!(regs.get8(Register8::F), 0x2F);
}

#[test]
fn test_named_access() {
    let mut regs = RegisterFile::new();

    regs.set_named("HL", 0xABCD).unwrap();
    assert_eq!(regs.get_named("H"), Ok(0xAB));
    assert_eq!(regs.get_named("HL"), Ok(0xABCD));

    regs.set_named("A", 7).unwrap();
    assert_eq!(regs.get_named("AF"), Ok(0x0700));

    assert_eq!(
        regs.get_named("IX"),
        Err(AccessError::UnknownKey("IX".to_string()))
    );
    assert!(regs.set_named("hl", 1).is_err());
    assert!(regs.set_named("Q", 1).is_err());
}

#[test]
fn test_named_flags() {
    let mut regs = RegisterFile::new();

    regs.set_flag_named("Z", true).unwrap();
    regs.set_flag_named("C", true).unwrap();
    assert_eq!(regs.get8(Register8::F), 0x90);
    assert_eq!(regs.flag_named("Z"), Ok(true));
    assert_eq!(regs.flag_named("N"), Ok(false));

    regs.set_flag_named("Z", false).unwrap();
    assert_eq!(regs.get8(Register8::F), 0x10);

    assert_eq!(
        regs.flag_named("Q"),
        Err(AccessError::UnknownKey("Q".to_string()))
    );
    assert_eq!(
        regs.set_flag_named("A", true),
        Err(AccessError::UnknownKey("A".to_string()))
    );
    assert_eq!(regs.get8(Register8::F), 0x10);
}

proptest! {
    #[test]
    fn test_pair_roundtrip(value in 0i64..=0xFFFF) {
        let mut regs = RegisterFile::new();

        regs.set16(Register16::DE, value).unwrap();
        let hi = regs.get8(Register8::D) as i64;
        let lo = regs.get8(Register8::E) as i64;
        prop_assert_eq!(hi << 8 | lo, value);
    }

    #[test]
    fn test_halves_roundtrip(hi in any::<u8>(), lo in any::<u8>()) {
        let mut regs = RegisterFile::new();

        regs.set8(Register8::B, hi as i64).unwrap();
        regs.set8(Register8::C, lo as i64).unwrap();
        prop_assert_eq!(regs.get16(Register16::BC), (hi as u16) << 8 | lo as u16);
    }
}
