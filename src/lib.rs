//! Hardware addresses (EUI-48, EUI-64 and any other multiple of 8 bits) with
//! conversions between canonical strings, packed bytes and integers, and
//! OUI vendor resolution over a pluggable store.
//!
//! ```no_run
//! # async fn demo() -> hwaddr::Result<()> {
//! use hwaddr::HardwareAddress;
//!
//! let mac: HardwareAddress = "30-5A-3A-7F-5E-CC".parse()?;
//! assert_eq!(mac.canonical(), "30:5a:3a:7f:5e:cc");
//! assert_eq!(mac.format("dotted")?, "305a.3a7f.5ecc");
//! println!("{}", mac.oui_data().await);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod net;
pub mod oui;

pub use config::OuiConfig;
pub use error::{Error, ErrorKind, Result};
pub use net::{
    codec, semantics, AddressLike, AddressRecord, Eui48, Eui64, HardwareAddress, SortDirection,
    UNDEFINED_VENDOR,
};
pub use oui::{AddressInput, FlatFileStore, MemoryStore, OuiFacade, OuiResolver, VendorStore};
