//! Bit-level queries on the first octet of an address and the
//! EUI-48 / modified EUI-64 transforms.

use crate::error::{Error, Result};

/// Individual/Group bit: set for multicast.
pub const IG_BIT: u8 = 0b0000_0001;
/// Universal/Local bit: set for locally administered addresses.
pub const UL_BIT: u8 = 0b0000_0010;

/// Anything that can hand out its address octets.
pub trait AddressLike {
    fn octets(&self) -> &[u8];
}

impl AddressLike for [u8] {
    fn octets(&self) -> &[u8] {
        self
    }
}

impl<const N: usize> AddressLike for [u8; N] {
    fn octets(&self) -> &[u8] {
        self
    }
}

impl AddressLike for Vec<u8> {
    fn octets(&self) -> &[u8] {
        self
    }
}

impl AddressLike for eui48::MacAddress {
    fn octets(&self) -> &[u8] {
        self.as_bytes()
    }
}

pub fn first_byte<A: AddressLike + ?Sized>(addr: &A) -> Result<u8> {
    addr.octets()
        .first()
        .copied()
        .ok_or_else(|| Error::UnsupportedInput("empty address".to_string()))
}

pub fn is_multicast<A: AddressLike + ?Sized>(addr: &A) -> Result<bool> {
    Ok(first_byte(addr)? & IG_BIT == IG_BIT)
}

pub fn is_unicast<A: AddressLike + ?Sized>(addr: &A) -> Result<bool> {
    is_multicast(addr).map(|multicast| !multicast)
}

pub fn is_locally_administered<A: AddressLike + ?Sized>(addr: &A) -> Result<bool> {
    Ok(first_byte(addr)? & UL_BIT == UL_BIT)
}

pub fn is_universally_administered<A: AddressLike + ?Sized>(addr: &A) -> Result<bool> {
    is_locally_administered(addr).map(|local| !local)
}

/// Ethernet broadcast, `ff:ff:ff:ff:ff:ff`. Never true for other lengths.
pub fn is_broadcast<A: AddressLike + ?Sized>(addr: &A) -> bool {
    addr.octets().len() == 6 && addr.octets().iter().all(|&b| b == 0xff)
}

// The bit helpers return the modified first octet; callers build a new
// address from it when they need one.

pub fn flip_ul_bit<A: AddressLike + ?Sized>(addr: &A) -> Result<u8> {
    Ok(first_byte(addr)? ^ UL_BIT)
}

pub fn set_ul_bit<A: AddressLike + ?Sized>(addr: &A) -> Result<u8> {
    Ok(first_byte(addr)? | UL_BIT)
}

pub fn clear_ul_bit<A: AddressLike + ?Sized>(addr: &A) -> Result<u8> {
    Ok(first_byte(addr)? & !UL_BIT)
}

pub fn clear_ig_bit<A: AddressLike + ?Sized>(addr: &A) -> Result<u8> {
    Ok(first_byte(addr)? & !IG_BIT)
}

/// Modified EUI-64: flip U/L and insert `ff:fe` after the OUI.
pub fn to_eui64_from_eui48<A: AddressLike + ?Sized>(addr: &A) -> Result<[u8; 8]> {
    let p = addr.octets();
    if p.len() != 6 {
        return Err(Error::LengthMismatch {
            expected: 48,
            found: p.len() * 8,
        });
    }

    let mut out = [0u8; 8];
    out[0] = p[0] ^ UL_BIT;
    out[1..3].copy_from_slice(&p[1..3]);
    out[3] = 0xff;
    out[4] = 0xfe;
    out[5..8].copy_from_slice(&p[3..6]);
    Ok(out)
}

/// Inverse of [`to_eui64_from_eui48`]; `None` unless the input is 64 bits
/// carrying the `ff:fe` filler.
pub fn to_eui48_from_eui64<A: AddressLike + ?Sized>(addr: &A) -> Option<[u8; 6]> {
    let p = addr.octets();
    if p.len() != 8 || p[3] != 0xff || p[4] != 0xfe {
        return None;
    }

    Some([p[0] ^ UL_BIT, p[1], p[2], p[5], p[6], p[7]])
}
