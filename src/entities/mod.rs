// Entity Models
//
// Each entity here is a plain record:
// - Customer: account owner, caller-assigned id
// - Account: bank account, registry-assigned id, owns its Customer
// - AccountRegistry lives next to Account (the registry stores exactly
//   one entity kind)

pub mod account;
pub mod customer;

pub use account::{Account, AccountRegistry, AccountStatus, AccountType};
pub use customer::Customer;
