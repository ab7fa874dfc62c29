// Account Registry - Core Library
// In-memory store for bank account records: CRUD + predicate search,
// concurrency-safe id issuance, one shared process-wide instance.

pub mod builder;
pub mod entities;

// Re-export commonly used types
pub use builder::AccountBuilder;
pub use entities::{Account, AccountRegistry, AccountStatus, AccountType, Customer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
