use std::{
    cmp::Ordering,
    fmt,
    ops::Deref,
    str::FromStr,
    sync::Arc,
};

use log::warn;
use num::{BigInt, BigUint, ToPrimitive};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{codec, format, semantics};
use crate::{
    error::{Error, Result},
    oui::OuiFacade,
};

/// Returned by the vendor lookups on [`HardwareAddress`] when nothing matched.
pub const UNDEFINED_VENDOR: &str = "Undefined";

/// A hardware address of any multiple-of-8 bit length.
///
/// The canonical string, packed bytes and numeric value are derived together
/// at construction and never change afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "AddressRecord", try_from = "AddressRecord")]
pub struct HardwareAddress {
    canonical: String,
    packed: Box<[u8]>,
    addr: BigUint,
    length: usize,
}

/// Serialized form: only the canonical string and length are trusted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRecord {
    pub canonical: String,
    pub length: usize,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(Error::UnsupportedInput(format!("sort direction `{other}`"))),
        }
    }
}

fn is_canonical_input(input: &str) -> bool {
    input
        .split([':', '-'])
        .all(|g| g.len() == 2 && g.bytes().all(|b| b.is_ascii_hexdigit()))
}

impl HardwareAddress {
    fn from_parts(packed: Vec<u8>, length: usize) -> Self {
        HardwareAddress {
            canonical: codec::packed_to_canonical(&packed),
            addr: codec::packed_to_numeric(&packed),
            packed: packed.into_boxed_slice(),
            length,
        }
    }

    /// Parses two-digit hex groups joined by `:` or `-`, in any case. A lone
    /// group such as `ab` is an 8 bit address.
    ///
    /// The length is inferred from the group count.
    pub fn from_canonical(input: &str) -> Result<Self> {
        if !is_canonical_input(input) {
            return Err(Error::InvalidCanonical(input.to_string()));
        }

        let canonical = input.replace('-', ":").to_ascii_lowercase();
        let length = canonical.split(':').count() * 8;
        let packed = codec::canonical_to_packed(&canonical, length)?;
        Ok(Self::from_parts(packed, length))
    }

    /// Like [`from_canonical`](Self::from_canonical) but the inferred length
    /// must equal `length`.
    pub fn from_canonical_with_length(input: &str, length: usize) -> Result<Self> {
        let address = Self::from_canonical(input)?;
        if address.length != length {
            return Err(Error::LengthMismatch {
                expected: length,
                found: address.length,
            });
        }
        Ok(address)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Err(Error::InvalidLength(0));
        }
        Ok(Self::from_parts(bytes.to_vec(), bytes.len() * 8))
    }

    /// Builds an address of `length` bits from its numeric value.
    pub fn from_numeric(value: impl Into<BigInt>, length: usize) -> Result<Self> {
        let packed = codec::numeric_to_packed(&value.into(), length)?;
        Ok(Self::from_parts(packed, length))
    }

    /// Deep copy of `other`.
    pub fn from_existing(other: &HardwareAddress) -> Self {
        other.clone()
    }

    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// Copy of the packed bytes.
    pub fn packed(&self) -> Vec<u8> {
        self.packed.to_vec()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.packed
    }

    pub fn addr(&self) -> &BigUint {
        &self.addr
    }

    pub fn as_u64(&self) -> Option<u64> {
        self.addr.to_u64()
    }

    pub fn as_u128(&self) -> Option<u128> {
        self.addr.to_u128()
    }

    /// Length in bits.
    pub fn length(&self) -> usize {
        self.length
    }

    fn hex(&self) -> String {
        codec::HexSlice::new(&self.packed, None).to_string()
    }

    pub fn valid_formats(&self) -> Arc<[String]> {
        format::valid_formats(self.length)
    }

    /// Renders the address with a pattern such as `xxxx.xxxx.xxxx` or an
    /// alias (`canonical`, `dashed`, `dotted`, `plain`).
    pub fn format(&self, pattern_or_alias: &str) -> Result<String> {
        format::render(&self.hex(), self.length, pattern_or_alias)
    }

    /// The first three bytes as a 24-bit address. Shorter addresses are
    /// returned whole.
    pub fn oui(&self) -> HardwareAddress {
        let end = self.packed.len().min(3);
        Self::from_parts(self.packed[..end].to_vec(), end * 8)
    }

    /// Vendor for this address through the process-wide [`OuiFacade`].
    ///
    /// Never fails: no match and lookup errors both give [`UNDEFINED_VENDOR`].
    pub async fn oui_data(&self) -> String {
        self.oui_data_with(OuiFacade::global(), None).await
    }

    /// Vendor for an explicit prefix through the process-wide [`OuiFacade`].
    pub async fn oui_data_for(&self, prefix: &str) -> String {
        self.oui_data_with(OuiFacade::global(), Some(prefix)).await
    }

    pub async fn oui_data_with(&self, facade: &OuiFacade, prefix: Option<&str>) -> String {
        let result = match prefix {
            Some(p) if !p.is_empty() => facade.resolve_by_prefix(p).await,
            _ => facade.resolve_from_canonical(&self.canonical).await,
        };

        match result {
            Ok(Some(vendor)) => vendor,
            Ok(None) => UNDEFINED_VENDOR.to_string(),
            Err(e) => {
                warn!("Vendor lookup for {} failed: {}", self.canonical, e);
                UNDEFINED_VENDOR.to_string()
            }
        }
    }

    /// Same length and same value.
    pub fn equals(&self, other: &HardwareAddress) -> bool {
        self.length == other.length && self.addr == other.addr
    }

    /// Three-way comparison; only defined for equal lengths.
    pub fn compare(a: &HardwareAddress, b: &HardwareAddress) -> Result<Ordering> {
        if a.length != b.length {
            return Err(Error::Incomparable(a.length, b.length));
        }
        Ok(a.addr.cmp(&b.addr))
    }

    pub fn compare_to(&self, other: &HardwareAddress) -> Result<Ordering> {
        Self::compare(self, other)
    }

    pub fn less_than(&self, other: &HardwareAddress) -> Result<bool> {
        self.compare_to(other).map(Ordering::is_lt)
    }

    pub fn greater_than(&self, other: &HardwareAddress) -> Result<bool> {
        self.compare_to(other).map(Ordering::is_gt)
    }

    pub fn less_than_or_equal(&self, other: &HardwareAddress) -> Result<bool> {
        self.compare_to(other).map(Ordering::is_le)
    }

    pub fn greater_than_or_equal(&self, other: &HardwareAddress) -> Result<bool> {
        self.compare_to(other).map(Ordering::is_ge)
    }

    /// `canonical@length`, usable as a map key.
    pub fn hash_key(&self) -> String {
        format!("{}@{}", self.canonical, self.length)
    }

    /// Stable sort by value. Every address must have the same length.
    pub fn sort(addresses: &[HardwareAddress], direction: SortDirection) -> Result<Vec<HardwareAddress>> {
        if let Some(first) = addresses.first() {
            if let Some(odd) = addresses.iter().find(|a| a.length != first.length) {
                return Err(Error::Incomparable(first.length, odd.length));
            }
        }

        let mut sorted = addresses.to_vec();
        sorted.sort_by(|a, b| a.addr.cmp(&b.addr));
        if direction == SortDirection::Desc {
            sorted.reverse();
        }
        Ok(sorted)
    }

    pub fn to_record(&self) -> AddressRecord {
        AddressRecord {
            canonical: self.canonical.clone(),
            length: self.length,
        }
    }

    pub fn to_json(&self) -> Value {
        serde_json::json!({
            "canonical": self.canonical,
            "length": self.length,
        })
    }

    /// Rebuilds an address from `{canonical, length}`; packed and numeric
    /// forms are re-derived from the canonical string.
    pub fn from_json(value: &Value) -> Result<Self> {
        let obj = value
            .as_object()
            .ok_or_else(|| Error::InvalidJson("expected an object".to_string()))?;
        let canonical = obj
            .get("canonical")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::InvalidJson("`canonical` must be a string".to_string()))?;
        let length = obj
            .get("length")
            .and_then(Value::as_u64)
            .ok_or_else(|| Error::InvalidJson("`length` must be a non-negative integer".to_string()))?;

        Self::from_canonical_with_length(canonical, length as usize)
    }

    pub fn is_multicast(&self) -> bool {
        self.packed[0] & semantics::IG_BIT != 0
    }

    pub fn is_unicast(&self) -> bool {
        !self.is_multicast()
    }

    pub fn is_locally_administered(&self) -> bool {
        self.packed[0] & semantics::UL_BIT != 0
    }

    pub fn is_universally_administered(&self) -> bool {
        !self.is_locally_administered()
    }

    pub fn is_broadcast(&self) -> bool {
        semantics::is_broadcast(self)
    }
}

impl semantics::AddressLike for HardwareAddress {
    fn octets(&self) -> &[u8] {
        &self.packed
    }
}

impl PartialOrd for HardwareAddress {
    /// `None` across lengths; there is no cross-length order.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Self::compare(self, other).ok()
    }
}

impl fmt::Display for HardwareAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}

impl FromStr for HardwareAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_canonical(s)
    }
}

impl From<HardwareAddress> for AddressRecord {
    fn from(address: HardwareAddress) -> Self {
        AddressRecord {
            canonical: address.canonical,
            length: address.length,
        }
    }
}

impl TryFrom<AddressRecord> for HardwareAddress {
    type Error = Error;

    fn try_from(record: AddressRecord) -> Result<Self> {
        Self::from_canonical_with_length(&record.canonical, record.length)
    }
}

impl From<eui48::MacAddress> for HardwareAddress {
    fn from(mac: eui48::MacAddress) -> Self {
        Self::from_parts(mac.as_bytes().to_vec(), 48)
    }
}

macro_rules! fixed_length_address {
    ($name:ident, $bits:expr, $bytes:expr, $int:ty) => {
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Serialize, Deserialize)]
        #[serde(try_from = "HardwareAddress", into = "HardwareAddress")]
        pub struct $name(HardwareAddress);

        impl $name {
            pub const LENGTH: usize = $bits;

            pub fn new(bytes: [u8; $bytes]) -> Self {
                $name(HardwareAddress::from_parts(bytes.to_vec(), $bits))
            }

            pub fn from_canonical(input: &str) -> Result<Self> {
                HardwareAddress::from_canonical_with_length(input, $bits).map($name)
            }

            pub fn from_numeric(value: $int) -> Result<Self> {
                HardwareAddress::from_numeric(value, $bits).map($name)
            }

            pub fn octets(&self) -> [u8; $bytes] {
                let mut out = [0u8; $bytes];
                out.copy_from_slice(self.0.as_bytes());
                out
            }

            pub fn into_inner(self) -> HardwareAddress {
                self.0
            }
        }

        impl Deref for $name {
            type Target = HardwareAddress;

            fn deref(&self) -> &HardwareAddress {
                &self.0
            }
        }

        impl TryFrom<HardwareAddress> for $name {
            type Error = Error;

            fn try_from(address: HardwareAddress) -> Result<Self> {
                if address.length != $bits {
                    return Err(Error::LengthMismatch {
                        expected: $bits,
                        found: address.length,
                    });
                }
                Ok($name(address))
            }
        }

        impl From<$name> for HardwareAddress {
            fn from(address: $name) -> Self {
                address.0
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                Self::from_canonical(s)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

fixed_length_address!(Eui48, 48, 6, u64);
fixed_length_address!(Eui64, 64, 8, u64);

impl Eui48 {
    /// Modified EUI-64 derived from this address.
    pub fn to_eui64(&self) -> Eui64 {
        let p = self.octets();
        Eui64::new([p[0] ^ semantics::UL_BIT, p[1], p[2], 0xff, 0xfe, p[3], p[4], p[5]])
    }

    pub fn to_mac_address(&self) -> eui48::MacAddress {
        eui48::MacAddress::new(self.octets())
    }
}

impl Eui64 {
    /// Reverses [`Eui48::to_eui64`] when the `ff:fe` filler is present.
    pub fn to_eui48(&self) -> Option<Eui48> {
        semantics::to_eui48_from_eui64(&self.octets()).map(Eui48::new)
    }
}

impl From<eui48::MacAddress> for Eui48 {
    fn from(mac: eui48::MacAddress) -> Self {
        Eui48::new(mac.to_array())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use rand::Rng;
    use std::collections::HashSet;

    fn mac(s: &str) -> HardwareAddress {
        HardwareAddress::from_canonical(s).unwrap()
    }

    #[test]
    fn from_canonical_derives_all_forms() {
        let a = mac("99:88:77:66:55:44");
        assert_eq!(a.packed(), vec![0x99, 0x88, 0x77, 0x66, 0x55, 0x44]);
        assert_eq!(a.as_u64(), Some(0x998877665544));
        assert_eq!(a.length(), 48);
    }

    #[test]
    fn from_canonical_normalizes_case_and_separator() {
        let a = mac("AA-bb-CC-dd-EE-ff");
        assert_eq!(a.canonical(), "aa:bb:cc:dd:ee:ff");
        assert_eq!(mac("aa:bb-cc").length(), 24);
    }

    #[test]
    fn from_canonical_rejects_malformed() {
        for bad in ["", "a", "aa:bb:", "aa::bb", "aa:b:cc", "aa.bb.cc", "zz:bb:cc", "aabbcc"] {
            let err = HardwareAddress::from_canonical(bad).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Format, "{bad}");
        }
    }

    #[test]
    fn explicit_length_must_match() {
        assert!(HardwareAddress::from_canonical_with_length("aa:bb:cc:dd:ee:ff", 48).is_ok());
        assert!(matches!(
            HardwareAddress::from_canonical_with_length("aa:bb:cc", 48),
            Err(Error::LengthMismatch { expected: 48, found: 24 })
        ));
    }

    #[test]
    fn from_numeric_mac() {
        let a = HardwareAddress::from_numeric(0x998877665544u64, 48).unwrap();
        assert_eq!(a.canonical(), "99:88:77:66:55:44");
    }

    #[test]
    fn from_numeric_validates_length_and_range() {
        assert!(matches!(
            HardwareAddress::from_numeric(1u8, 0),
            Err(Error::InvalidLength(0))
        ));
        assert!(matches!(
            HardwareAddress::from_numeric(1u8, 12),
            Err(Error::InvalidLength(12))
        ));
        assert!(matches!(
            HardwareAddress::from_numeric(-5i64, 48),
            Err(Error::NegativeNumeric)
        ));
        assert!(matches!(
            HardwareAddress::from_numeric(0x1_0000_0000_0000u64, 48),
            Err(Error::NumericOutOfRange(48))
        ));
    }

    #[test]
    fn wide_numeric_is_exact() {
        let a = HardwareAddress::from_numeric(u64::MAX, 64).unwrap();
        assert_eq!(a.canonical(), "ff:ff:ff:ff:ff:ff:ff:ff");
        assert_eq!(a.as_u64(), Some(u64::MAX));

        let big = HardwareAddress::from_numeric(u128::MAX - 1, 128).unwrap();
        assert_eq!(big.as_u128(), Some(u128::MAX - 1));
        assert_eq!(big.packed().last(), Some(&0xfe));
    }

    #[test]
    fn from_bytes_and_copies() {
        let mut bytes = vec![0x00, 0x1b, 0x63, 0x84, 0x45, 0xe6, 0x10];
        let a = HardwareAddress::from_bytes(&bytes).unwrap();
        bytes[0] = 0xff;
        assert_eq!(a.length(), 56);
        assert_eq!(a.canonical(), "00:1b:63:84:45:e6:10");

        let mut out = a.packed();
        out[0] = 0xff;
        assert_eq!(a.as_bytes()[0], 0x00);

        let copy = HardwareAddress::from_existing(&a);
        assert!(copy.equals(&a));
        assert_ne!(copy.as_bytes().as_ptr(), a.as_bytes().as_ptr());

        assert!(HardwareAddress::from_bytes(&[]).is_err());
    }

    #[test]
    fn format_with_aliases_and_patterns() {
        let a = mac("aa:bb:cc:dd:ee:ff");
        assert_eq!(a.format("canonical").unwrap(), "aa:bb:cc:dd:ee:ff");
        assert_eq!(a.format("dashed").unwrap(), "aa-bb-cc-dd-ee-ff");
        assert_eq!(a.format("dotted").unwrap(), "aabb.ccdd.eeff");
        assert_eq!(a.format("plain").unwrap(), "aabbccddeeff");
        assert_eq!(a.format("xx-xx-xx-xx-xx-xx").unwrap(), "aa-bb-cc-dd-ee-ff");
        assert!(a.format("xx*xx*xx*xx*xx*xx").is_err());
        assert!(a.format("xxx:xx:xx:xx:xx:xx").is_err());
        assert!(a.format("bogus").is_err());
    }

    #[test]
    fn canonical_alias_round_trips_for_any_length() {
        for s in ["aa:bb:cc", "01:02:03:04:05:06:07:08", "de:ad:be:ef:00:11:22"] {
            assert_eq!(mac(s).format("canonical").unwrap(), s);
        }
    }

    #[test]
    fn oui_takes_first_three_bytes() {
        let oui = mac("30:5a:3a:7f:5e:cc").oui();
        assert_eq!(oui.canonical(), "30:5a:3a");
        assert_eq!(oui.length(), 24);
        assert_eq!(mac("30:5a").oui().length(), 16);
    }

    #[test]
    fn ordering_within_a_length() {
        let a = mac("00:00:00:00:00:01");
        let b = mac("00:00:00:00:00:02");
        assert_eq!(a.compare_to(&b).unwrap(), Ordering::Less);
        assert_eq!(HardwareAddress::compare(&b, &a).unwrap() as i8, 1);
        assert_eq!(a.compare_to(&a.clone()).unwrap() as i8, 0);
        assert!(a.less_than(&b).unwrap());
        assert!(b.greater_than(&a).unwrap());
        assert!(a.less_than_or_equal(&a).unwrap());
        assert!(b.greater_than_or_equal(&a).unwrap());
        assert!(a < b);
    }

    #[test]
    fn ordering_across_lengths_fails() {
        let a = mac("00:00:00:00:00:01");
        let b = mac("00:00:00:00:00:00:01");
        let err = a.compare_to(&b).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Comparability);
        assert!(a.less_than(&b).is_err());
        assert!(a.greater_than_or_equal(&b).is_err());
        assert_eq!(a.partial_cmp(&b), None);
        assert!(!a.equals(&b));
    }

    #[test]
    fn hash_key_matches_equals() {
        let a = mac("AA:BB:CC:DD:EE:FF");
        let b = HardwareAddress::from_numeric(0xaabbccddeeffu64, 48).unwrap();
        let c = HardwareAddress::from_numeric(0xaabbccddeeffu64, 56).unwrap();
        assert_eq!(a.hash_key(), "aa:bb:cc:dd:ee:ff@48");
        assert!(a.equals(&b) && a.hash_key() == b.hash_key());
        assert!(!a.equals(&c) && a.hash_key() != c.hash_key());

        let set: HashSet<HardwareAddress> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn sort_both_directions() {
        let xs = vec![mac("00:00:03"), mac("00:00:01"), mac("00:00:02")];
        let asc = HardwareAddress::sort(&xs, SortDirection::Asc).unwrap();
        let names: Vec<&str> = asc.iter().map(HardwareAddress::canonical).collect();
        assert_eq!(names, ["00:00:01", "00:00:02", "00:00:03"]);

        let mut desc = HardwareAddress::sort(&xs, "desc".parse().unwrap()).unwrap();
        desc.reverse();
        assert_eq!(desc, asc);

        assert!(HardwareAddress::sort(&[mac("00:00:01"), mac("00:00:00:01")], SortDirection::Asc).is_err());
        assert!(HardwareAddress::sort(&[], SortDirection::Desc).unwrap().is_empty());
    }

    #[test]
    fn random_same_length_addresses_order_consistently() {
        let mut rng = rand::thread_rng();
        let xs: Vec<HardwareAddress> = (0..64)
            .map(|_| HardwareAddress::from_numeric(rng.gen_range(0u64..16), 16).unwrap())
            .collect();

        for a in &xs {
            for b in &xs {
                let ab = a.compare_to(b).unwrap();
                assert_eq!(ab.reverse(), b.compare_to(a).unwrap());
                assert_eq!(ab == Ordering::Equal, a.equals(b));
                assert_eq!(a.hash_key() == b.hash_key(), a.equals(b));
            }
        }

        let asc = HardwareAddress::sort(&xs, SortDirection::Asc).unwrap();
        assert!(asc.windows(2).all(|w| w[0].less_than_or_equal(&w[1]).unwrap()));
        let mut desc = HardwareAddress::sort(&xs, SortDirection::Desc).unwrap();
        desc.reverse();
        assert_eq!(desc, asc);
    }

    #[test]
    fn json_round_trip() {
        let json = serde_json::json!({ "canonical": "aa:bb:cc:dd:ee:ff", "length": 48 });
        let a = HardwareAddress::from_json(&json).unwrap();
        assert!(a.equals(&mac("aa:bb:cc:dd:ee:ff")));
        assert_eq!(a.to_json(), json);

        let text = serde_json::to_string(&a).unwrap();
        let back: HardwareAddress = serde_json::from_str(&text).unwrap();
        assert_eq!(back, a);
    }

    #[test]
    fn json_rejects_bad_shapes() {
        for bad in [
            serde_json::json!("aa:bb:cc"),
            serde_json::json!({ "canonical": "aa:bb:cc" }),
            serde_json::json!({ "canonical": 5, "length": 24 }),
            serde_json::json!({ "canonical": "aa:bb:cc", "length": "24" }),
        ] {
            let err = HardwareAddress::from_json(&bad).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        }
        assert!(HardwareAddress::from_json(&serde_json::json!({ "canonical": "aa:bb:cc", "length": 48 })).is_err());
        assert!(serde_json::from_str::<HardwareAddress>(r#"{"canonical":"zz:bb","length":16}"#).is_err());
    }

    #[test]
    fn bit_predicates() {
        assert!(mac("01:00:5e:00:00:fb").is_multicast());
        assert!(mac("02:00:00:00:00:01").is_locally_administered());
        assert!(mac("00:1b:63:84:45:e6").is_unicast());
        assert!(mac("00:1b:63:84:45:e6").is_universally_administered());
        assert!(mac("ff:ff:ff:ff:ff:ff").is_broadcast());
        assert!(!mac("ff:ff:ff:ff:ff:ff:ff:ff").is_broadcast());
    }

    #[test]
    fn single_byte_addresses_are_durable() {
        let a = HardwareAddress::from_bytes(&[0xab]).unwrap();
        assert_eq!(a.canonical(), "ab");
        assert_eq!(a.length(), 8);
        assert_eq!(a.format("canonical").unwrap(), "ab");
        assert_eq!(a.format("dashed").unwrap(), "ab");
        assert_eq!(a.format("plain").unwrap(), "ab");

        let n = HardwareAddress::from_numeric(0xabu8, 8).unwrap();
        assert_eq!(HardwareAddress::from_json(&n.to_json()).unwrap(), n);
        assert_eq!(n.to_string().parse::<HardwareAddress>().unwrap(), a);

        let back: HardwareAddress = serde_json::from_str(r#"{"canonical":"01","length":8}"#).unwrap();
        assert_eq!(back.packed(), [0x01]);
        assert_eq!(mac("AB"), a);
    }

    #[test]
    fn display_and_parse() {
        let a: HardwareAddress = "AA-BB-CC".parse().unwrap();
        assert_eq!(a.to_string(), "aa:bb:cc");
    }

    #[test]
    fn eui48_and_eui64() {
        let e48 = Eui48::from_canonical("00:1b:63:84:45:e6").unwrap();
        let e64 = e48.to_eui64();
        assert_eq!(e64.canonical(), "02:1b:63:ff:fe:84:45:e6");
        assert_eq!(e64.to_eui48(), Some(e48.clone()));
        assert!(Eui64::from_numeric(1).unwrap().to_eui48().is_none());

        assert!(Eui48::from_canonical("00:1b:63:84:45:e6:00:00").is_err());
        assert!(Eui48::from_numeric(1 << 48).is_err());
        assert_eq!(Eui48::from_numeric(0x998877665544).unwrap().to_string(), "99:88:77:66:55:44");
        assert!(Eui48::try_from(mac("aa:bb:cc")).is_err());
    }

    #[test]
    fn eui48_interop_with_mac_address() {
        let mac_address = eui48::MacAddress::new([0x30, 0x5a, 0x3a, 0x7f, 0x5e, 0xcc]);
        let e48 = Eui48::from(mac_address);
        assert_eq!(e48.canonical(), "30:5a:3a:7f:5e:cc");
        assert_eq!(e48.to_mac_address(), mac_address);
        assert_eq!(HardwareAddress::from(mac_address), e48.clone().into_inner());
    }

    #[test]
    fn eui48_serializes_like_hardware_address() {
        let e48 = Eui48::new([0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff]);
        let text = serde_json::to_string(&e48).unwrap();
        assert_eq!(text, r#"{"canonical":"aa:bb:cc:dd:ee:ff","length":48}"#);
        let back: Eui48 = serde_json::from_str(&text).unwrap();
        assert_eq!(back, e48);
    }
}
