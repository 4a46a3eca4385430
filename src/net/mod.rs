pub mod codec;
pub mod format;
pub mod mac;
pub mod semantics;

pub use mac::{AddressRecord, Eui48, Eui64, HardwareAddress, SortDirection, UNDEFINED_VENDOR};
pub use semantics::AddressLike;
