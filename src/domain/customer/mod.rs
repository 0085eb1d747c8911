//! Customer data domain types

mod record;

pub use record::{CustomerRecord, NOT_FOUND};
