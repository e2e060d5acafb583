//! Abstract storage traits for the Karo rebate service.
//!
//! Every storage backend (in-memory, SQL, key-value) implements these
//! traits. The rest of the workspace depends only on the traits; the only
//! requirement on a backend is that reads are strongly consistent with the
//! most recent write.

pub mod campaign;
pub mod error;
pub mod product;

pub use campaign::{CampaignRecord, CampaignStore};
pub use error::StoreError;
pub use product::{ProductRecord, ProductStore};
