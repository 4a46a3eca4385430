pub mod facade;
pub mod resolver;
pub mod store;

pub use facade::OuiFacade;
pub use resolver::{normalize_prefix, AddressInput, OuiResolver};
pub use store::{FlatFileStore, MemoryStore, VendorStore};
