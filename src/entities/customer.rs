// 👤 Customer Entity - Account owner
//
// "A customer is a value owned by exactly one account"
//
// Problem solved:
// - Every account carries its own Customer, no sharing between accounts
// - Duplicating an account must yield an independent customer copy
// - Customer id is caller-assigned and never validated here

use serde::{Deserialize, Serialize};

// ============================================================================
// CUSTOMER ENTITY
// ============================================================================

/// Customer - the owner of a bank account
///
/// Identity: `id` (caller-assigned integer, not issued or checked here)
/// Values: `name`
///
/// A Customer is reachable only through the Account that owns it; there is
/// no back-reference from customer to account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Caller-assigned identity (not validated)
    pub id: u64,

    /// Customer name
    pub name: String,
}

impl Customer {
    /// Create a new customer
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Customer {
            id,
            name: name.into(),
        }
    }

    /// Produce an independent copy of this customer
    ///
    /// The copy owns its own `name` allocation, so mutating it never
    /// affects the original.
    pub fn duplicate(&self) -> Customer {
        Customer {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
