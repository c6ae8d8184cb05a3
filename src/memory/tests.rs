use crate::memory::{check_address, Endianness, Memory, MEMORY_SIZE};
use crate::AccessError;
use proptest::prelude::*;

#[test]
fn memory_starts_zeroed() {
    let mem = Memory::new();

    assert_eq!(mem.read8(0x0000), Ok(0));
    assert_eq!(mem.read8(0xFFFF), Ok(0));
    assert_eq!(mem.read32(0x8000), Ok(0));
}

#[test]
fn memory_little_endian_words() {
    let mut mem = Memory::new();

    mem.write16(0xC000, 0x1234).unwrap();
    assert_eq!(mem.read8(0xC000), Ok(0x34));
    assert_eq!(mem.read8(0xC001), Ok(0x12));

    mem.write32(0xC010, 0xDEADBEEF).unwrap();
    assert_eq!(mem.read8(0xC010), Ok(0xEF));
    assert_eq!(mem.read8(0xC013), Ok(0xDE));
    assert_eq!(mem.read16(0xC010), Ok(0xBEEF));
    assert_eq!(mem.read16(0xC012), Ok(0xDEAD));
}

#[test]
fn memory_last_valid_addresses() {
    let mut mem = Memory::new();

    assert!(mem.write8(0xFFFF, 0xAA).is_ok());
    assert!(mem.write16(0xFFFE, 0xBBAA).is_ok());
    assert!(mem.write32(0xFFFC, 0).is_ok());

    assert_eq!(
        mem.read16(0xFFFF),
        Err(AccessError::Address {
            address: 0xFFFF,
            width: 2
        })
    );
    assert!(mem.read32(0xFFFD).is_err());
    assert!(mem.read8(0x10000).is_err());
    assert!(mem.read8(-1).is_err());
}

#[test]
fn memory_rejects_bad_values() {
    let mut mem = Memory::new();

    assert_eq!(
        mem.write8(0, 0x100),
        Err(AccessError::Value {
            value: 0x100,
            bits: 8
        })
    );
    assert!(mem.write8(0, -1).is_err());
    assert!(mem.write16(0, 0x10000).is_err());
    assert!(mem.write32(0, 0x1_0000_0000).is_err());
    assert_eq!(mem.read32(0), Ok(0));
}

#[test]
fn memory_failed_write_is_not_partial() {
    let mut mem = Memory::new();

    mem.write8(0xFFFF, 0x55).unwrap();
    assert!(mem.write16(0xFFFF, 0x1234).is_err());
    assert_eq!(mem.read8(0xFFFF), Ok(0x55));
}

#[test]
fn endianness_join_split() {
    let mut bytes = [0u8; 2];

    Endianness::BigEndian.split(0x1234u16, &mut bytes);
    assert_eq!(bytes, [0x12, 0x34]);
    assert_eq!(Endianness::BigEndian.join::<u16>(&bytes), 0x1234);
    assert_eq!(Endianness::LittleEndian.join::<u16>(&bytes), 0x3412);

    let mut bytes = [0u8; 4];

    Endianness::LittleEndian.split(0x11223344u32, &mut bytes);
    assert_eq!(bytes, [0x44, 0x33, 0x22, 0x11]);
}

#[test]
fn check_address_bounds() {
    assert_eq!(check_address(0, 4), Ok(0));
    assert_eq!(check_address((MEMORY_SIZE - 4) as i64, 4), Ok(0xFFFC));
    assert!(check_address((MEMORY_SIZE - 3) as i64, 4).is_err());
}

proptest! {
    #[test]
    fn memory_word_roundtrip(address in 0i64..=0xFFFE, value in 0i64..=0xFFFF) {
        let mut mem = Memory::new();

        mem.write16(address, value).unwrap();
        prop_assert_eq!(mem.read16(address).unwrap() as i64, value);

        let lo = mem.read8(address).unwrap() as i64;
        let hi = mem.read8(address + 1).unwrap() as i64;
        prop_assert_eq!(hi << 8 | lo, value);
    }

    #[test]
    fn memory_dword_roundtrip(address in 0i64..=0xFFFC, value in 0i64..=0xFFFF_FFFF) {
        let mut mem = Memory::new();

        mem.write32(address, value).unwrap();
        prop_assert_eq!(mem.read32(address).unwrap() as i64, value);

        let mut joined = 0i64;
        for i in (0..4).rev() {
            joined = joined << 8 | mem.read8(address + i).unwrap() as i64;
        }
        prop_assert_eq!(joined, value);
    }
}
