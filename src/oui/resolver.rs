use dashmap::DashMap;
use log::debug;

use super::store::{normalize_key, VendorStore, PREFIX_LENGTHS};
use crate::{
    error::{Error, Result},
    net::{codec, HardwareAddress},
};

/// Address forms the resolver accepts.
#[derive(Clone, Copy, Debug)]
pub enum AddressInput<'a> {
    /// Packed bytes.
    Bytes(&'a [u8]),
    /// Hex string with any separators, e.g. `aa:bb:cc:dd:ee:ff`.
    Canonical(&'a str),
}

impl<'a> AddressInput<'a> {
    /// Uppercase hex digits with separators stripped.
    pub fn to_hex_upper(&self) -> String {
        match self {
            AddressInput::Bytes(bytes) => codec::hex_upper(bytes),
            AddressInput::Canonical(s) => normalize_key(s),
        }
    }
}

impl<'a> From<&'a [u8]> for AddressInput<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        AddressInput::Bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for AddressInput<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        AddressInput::Bytes(bytes)
    }
}

impl<'a> From<&'a str> for AddressInput<'a> {
    fn from(s: &'a str) -> Self {
        AddressInput::Canonical(s)
    }
}

impl<'a> From<&'a HardwareAddress> for AddressInput<'a> {
    fn from(address: &'a HardwareAddress) -> Self {
        AddressInput::Bytes(address.as_bytes())
    }
}

/// Validates a 6, 7 or 9 digit prefix; `:`, `-`, `.` and spaces are dropped.
pub fn normalize_prefix(prefix: &str) -> Result<String> {
    if prefix
        .chars()
        .any(|c| !c.is_ascii_hexdigit() && !matches!(c, ':' | '-' | '.' | ' '))
    {
        return Err(Error::InvalidPrefix(prefix.to_string()));
    }

    let hex = normalize_key(prefix);
    if !PREFIX_LENGTHS.contains(&hex.len()) {
        return Err(Error::InvalidPrefixLength(hex.len()));
    }
    Ok(hex)
}

/// Cascading OUI lookup over a [`VendorStore`].
///
/// A full address is tried at 24, then 28, then 36 bits; the first prefix the
/// store knows wins even when a longer one would also match. Both hits and
/// misses are cached per prefix unless caching is disabled.
pub struct OuiResolver {
    store: Box<dyn VendorStore>,
    cache: Option<DashMap<String, Option<String>>>,
}

impl OuiResolver {
    pub fn new(store: impl VendorStore + 'static) -> Self {
        Self::with_cache(store, true)
    }

    pub fn with_cache(store: impl VendorStore + 'static, enabled: bool) -> Self {
        OuiResolver {
            store: Box::new(store),
            cache: enabled.then(DashMap::new),
        }
    }

    pub fn cache_enabled(&self) -> bool {
        self.cache.is_some()
    }

    /// Number of cached prefixes, hits and misses alike.
    pub fn cached_len(&self) -> usize {
        self.cache.as_ref().map_or(0, |cache| cache.len())
    }

    fn cached(&self, prefix: &str) -> Option<Option<String>> {
        self.cache
            .as_ref()
            .and_then(|cache| cache.get(prefix).map(|entry| entry.value().clone()))
    }

    fn remember(&self, prefix: &str, vendor: Option<String>) {
        if let Some(cache) = &self.cache {
            cache.insert(prefix.to_string(), vendor);
        }
    }

    pub async fn resolve_from_address<'a>(
        &self,
        addr: impl Into<AddressInput<'a>>,
    ) -> Result<Option<String>> {
        let hex = addr.into().to_hex_upper();

        for len in PREFIX_LENGTHS {
            let candidate = &hex[..hex.len().min(len)];
            match self.cached(candidate) {
                Some(Some(vendor)) => {
                    debug!("OUI cache hit {} -> {}", candidate, vendor);
                    return Ok(Some(vendor));
                }
                // Known miss, go on to the next width.
                Some(None) => continue,
                None => {}
            }

            debug!("OUI lookup {}", candidate);
            let hit = self.store.lookup_exact(candidate).await?;
            self.remember(candidate, hit.clone());
            if hit.is_some() {
                return Ok(hit);
            }
        }
        Ok(None)
    }

    /// Single lookup of an explicit 24, 28 or 36 bit prefix.
    pub async fn resolve_by_prefix(&self, prefix: &str) -> Result<Option<String>> {
        let prefix = normalize_prefix(prefix)?;
        if let Some(vendor) = self.cached(&prefix) {
            debug!("OUI cache hit {}", prefix);
            return Ok(vendor);
        }

        let hit = self.store.lookup_exact(&prefix).await?;
        self.remember(&prefix, hit.clone());
        Ok(hit)
    }

    pub fn clear_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.clear();
        }
    }
}
