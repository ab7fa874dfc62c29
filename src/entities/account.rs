// 💳 Account Entity - Bank account record + in-memory registry
//
// "The registry issues identity, the account just carries it"
//
// Problem solved:
// - Accounts are plain records; their id is meaningless until the
//   registry assigns one at save time (0 = never saved)
// - Concurrent saves must never hand two callers the same id
// - Lookups return explicit absence, never a zero-valued account
// - Each account exclusively owns its Customer value

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;
use tracing::{debug, info};

use crate::builder::AccountBuilder;
use crate::entities::customer::Customer;

// ============================================================================
// ACCOUNT TYPE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountType {
    /// Savings account (interest-bearing)
    Savings,

    /// Current account (daily transactions, overdraft allowed)
    Current,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Savings => "Savings",
            AccountType::Current => "Current",
        }
    }
}

// ============================================================================
// ACCOUNT STATUS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountStatus {
    /// Freshly created, not yet activated
    Created,

    /// Active and usable
    Activated,

    /// Blocked by the bank
    Blocked,

    /// Temporarily suspended
    Suspended,
}

impl AccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Created => "Created",
            AccountStatus::Activated => "Activated",
            AccountStatus::Blocked => "Blocked",
            AccountStatus::Suspended => "Suspended",
        }
    }
}

// ============================================================================
// ACCOUNT ENTITY
// ============================================================================

/// Account - one bank account record
///
/// Identity: `account_id`, assigned exclusively by [`AccountRegistry::save`]
/// (0 means "never saved"). Values: balance, currency, type, status.
/// Relationship: exclusively owned [`Customer`] value.
///
/// Balance sign and currency code are accepted as-is; the registry is a
/// record store, not a validator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Registry-assigned identity (0 until first save)
    pub account_id: u64,

    /// Current balance (sign not validated)
    pub balance: f64,

    /// Currency code (ISO 4217 style: USD, EUR, MXN - unvalidated)
    pub currency: String,

    /// Type of account
    pub account_type: AccountType,

    /// Lifecycle status
    pub account_status: AccountStatus,

    /// Owning customer (exclusively owned, duplicated on copy)
    pub customer: Customer,
}

impl Account {
    /// Start building an account
    ///
    /// Convenience entry point; returns a fresh [`AccountBuilder`].
    pub fn builder() -> AccountBuilder {
        AccountBuilder::new()
    }

    /// Produce an independent copy of this account
    ///
    /// Scalar and enum fields are copied by value; the owned [`Customer`]
    /// is duplicated into a structurally independent value, so mutating
    /// the copy's customer never touches the original's.
    ///
    /// The copy keeps the same `account_id` - it is not registered
    /// anywhere until explicitly saved or updated.
    pub fn duplicate(&self) -> Account {
        Account {
            account_id: self.account_id,
            balance: self.balance,
            currency: self.currency.clone(),
            account_type: self.account_type,
            account_status: self.account_status,
            customer: self.customer.duplicate(),
        }
    }
}

// ============================================================================
// ACCOUNT REGISTRY
// ============================================================================

/// Registry of all known accounts
///
/// This is the store itself: it holds every Account keyed by identity,
/// issues identities, and provides CRUD + predicate search. All state is
/// volatile and lost at process end. In production, this would be backed
/// by a database keyed on account_id.
///
/// Concurrency: the id counter and the backing map are synchronized
/// independently - issuing an id never blocks readers of the map, and an
/// account only becomes visible once fully inserted.
pub struct AccountRegistry {
    /// Last issued identity (ids run 1, 2, 3, ... per registry instance)
    last_id: AtomicU64,

    /// All stored accounts, keyed by account_id
    accounts: Arc<RwLock<HashMap<u64, Account>>>,
}

/// Process-wide registry, built exactly once on first access
static SHARED_REGISTRY: Lazy<AccountRegistry> = Lazy::new(|| {
    info!("shared account registry initialized");
    AccountRegistry::new()
});

impl AccountRegistry {
    /// Create a new empty registry
    ///
    /// This is the primary construction path: build one at startup and
    /// pass it to whatever needs it. Use [`AccountRegistry::shared`] only
    /// when a single process-wide instance is genuinely wanted.
    pub fn new() -> Self {
        AccountRegistry {
            last_id: AtomicU64::new(0),
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Get the shared process-wide registry
    ///
    /// Constructed exactly once before first use, even under concurrent
    /// first access; every caller sees the same instance for the lifetime
    /// of the process. There is no reset.
    pub fn shared() -> &'static AccountRegistry {
        &SHARED_REGISTRY
    }

    /// Save a new account, assigning it a fresh identity
    ///
    /// Whatever id the caller put on the account is overwritten: ids are
    /// issued by the registry alone, starting at 1 and strictly
    /// increasing. Concurrent saves each get a distinct id with no gaps
    /// in 1..=N after N saves. Returns the account with its new id set.
    pub fn save(&self, mut account: Account) -> Account {
        let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        account.account_id = id;

        {
            let mut accounts = self.accounts.write().unwrap();
            accounts.insert(id, account.clone());
        }

        debug!(account_id = id, "account saved");
        account
    }

    /// Get all stored accounts (snapshot, no ordering guarantee)
    pub fn all_accounts(&self) -> Vec<Account> {
        let accounts = self.accounts.read().unwrap();
        accounts.values().cloned().collect()
    }

    /// Find an account by id - returns None if never stored or deleted
    pub fn find_by_id(&self, id: u64) -> Option<Account> {
        let accounts = self.accounts.read().unwrap();
        accounts.get(&id).cloned()
    }

    /// Get all accounts matching a predicate
    ///
    /// The predicate sees a read-view of each stored account; accounts
    /// for which it returns true are cloned into the result. Empty vec
    /// when nothing matches.
    pub fn search<P>(&self, predicate: P) -> Vec<Account>
    where
        P: Fn(&Account) -> bool,
    {
        let accounts = self.accounts.read().unwrap();
        accounts
            .values()
            .filter(|account| predicate(account))
            .cloned()
            .collect()
    }

    /// Write an account under its own id (insert or replace)
    ///
    /// Raw overwrite: no "must already exist" check. An account that was
    /// never saved (or was deleted) is simply inserted under whatever id
    /// it carries. Returns the account unchanged.
    pub fn update(&self, account: Account) -> Account {
        {
            let mut accounts = self.accounts.write().unwrap();
            accounts.insert(account.account_id, account.clone());
        }

        debug!(account_id = account.account_id, "account updated");
        account
    }

    /// Remove the account with the given id - no-op if absent
    pub fn delete_by_id(&self, id: u64) {
        let mut accounts = self.accounts.write().unwrap();
        if accounts.remove(&id).is_some() {
            debug!(account_id = id, "account deleted");
        }
    }

    /// Count stored accounts
    pub fn count(&self) -> usize {
        let accounts = self.accounts.read().unwrap();
        accounts.len()
    }
}

impl Default for AccountRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
