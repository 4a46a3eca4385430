//! Vendor stores: the exact-prefix lookup the resolver cascades over.

use std::{
    collections::HashMap,
    future::Future,
    io,
    path::{Path, PathBuf},
    pin::Pin,
    sync::Arc,
};

use log::{info, warn};
use tokio::sync::OnceCell;

use crate::error::{Error, Result};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Accepted prefix widths in hex digits: 24, 28 and 36 bits.
pub const PREFIX_LENGTHS: [usize; 3] = [6, 7, 9];

/// Exact-match lookup of a normalized (uppercase, separator-free) prefix.
///
/// Implementations must be idempotent; the resolver caches their answers.
pub trait VendorStore: Send + Sync {
    fn lookup_exact<'a>(&'a self, prefix: &'a str) -> BoxFuture<'a, Result<Option<String>>>;
}

impl<S: VendorStore + ?Sized> VendorStore for Arc<S> {
    fn lookup_exact<'a>(&'a self, prefix: &'a str) -> BoxFuture<'a, Result<Option<String>>> {
        (**self).lookup_exact(prefix)
    }
}

/// Uppercase hex digits of `key` with everything else dropped.
pub(crate) fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(char::is_ascii_hexdigit)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, prefix: &str, vendor: impl Into<String>) {
        self.entries.insert(normalize_key(prefix), vendor.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut store = MemoryStore::new();
        for (prefix, vendor) in iter {
            store.insert(prefix.as_ref(), vendor);
        }
        store
    }
}

impl VendorStore for MemoryStore {
    fn lookup_exact<'a>(&'a self, prefix: &'a str) -> BoxFuture<'a, Result<Option<String>>> {
        Box::pin(async move { Ok::<_, Error>(self.entries.get(prefix).cloned()) })
    }
}

/// Parses a vendor database. JSON objects (`{"286FB9": "Vendor"}`) and
/// tab-separated lines (`286FB9<TAB>Vendor`, `#` comments) are accepted.
pub fn parse_database(origin: &str, raw: &str) -> Result<HashMap<String, String>> {
    let raw = raw.trim();

    if raw.starts_with('{') {
        let obj: HashMap<String, String> =
            serde_json::from_str(raw).map_err(|e| Error::StoreParse(origin.to_string(), e))?;
        return Ok(obj
            .into_iter()
            .map(|(k, v)| (normalize_key(&k), v))
            .collect());
    }

    let mut map = HashMap::new();
    for line in raw.lines() {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut parts = line.split('\t');
        let (Some(prefix), Some(name)) = (parts.next(), parts.next()) else {
            continue;
        };
        let key = normalize_key(prefix.trim());
        if !PREFIX_LENGTHS.contains(&key.len()) {
            continue;
        }
        map.insert(key, name.trim().to_string());
    }
    Ok(map)
}

/// Database file loaded on first lookup. A missing file is an empty store.
#[derive(Debug)]
pub struct FlatFileStore {
    path: PathBuf,
    map: OnceCell<HashMap<String, String>>,
}

impl FlatFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FlatFileStore {
            path: path.into(),
            map: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<HashMap<String, String>> {
        let origin = self.path.display().to_string();
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!("Vendor database {} not found, lookups will miss", origin);
                return Ok(HashMap::new());
            }
            Err(e) => return Err(Error::StoreIo(origin, e)),
        };

        let map = parse_database(&origin, &raw)?;
        info!("Loaded {} OUI records from {}", map.len(), origin);
        Ok(map)
    }

    async fn ensure_loaded(&self) -> Result<&HashMap<String, String>> {
        self.map.get_or_try_init(|| self.load()).await
    }
}

impl VendorStore for FlatFileStore {
    fn lookup_exact<'a>(&'a self, prefix: &'a str) -> BoxFuture<'a, Result<Option<String>>> {
        Box::pin(async move {
            let map = self.ensure_loaded().await?;
            Ok::<_, Error>(map.get(&normalize_key(prefix)).cloned())
        })
    }
}
