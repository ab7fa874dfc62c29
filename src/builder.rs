// 🔧 Account Builder - Staged account construction
//
// "Accumulate first, normalize once"
//
// Problem solved:
// - Callers assemble an account field by field, in any order
// - The one business rule (non-Current accounts are always Activated)
//   runs in a single pass at build() over the complete configuration,
//   so setter order can never change the outcome
// - No completeness check: anything left unset gets its zero-value

use crate::entities::account::{Account, AccountStatus, AccountType};
use crate::entities::customer::Customer;

// ============================================================================
// ACCOUNT BUILDER
// ============================================================================

/// AccountBuilder - chainable, all-fields-optional account configuration
///
/// Setters assign verbatim with no validation. `build()` is the only
/// place any rule fires.
#[derive(Debug, Default)]
pub struct AccountBuilder {
    account_id: Option<u64>,
    balance: Option<f64>,
    currency: Option<String>,
    account_type: Option<AccountType>,
    account_status: Option<AccountStatus>,
    customer: Option<Customer>,
}

impl AccountBuilder {
    /// Create an empty builder (see also [`Account::builder`])
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set account id
    ///
    /// Only useful for records managed outside a registry; the registry
    /// overwrites this on save.
    pub fn with_account_id(mut self, id: u64) -> Self {
        self.account_id = Some(id);
        self
    }

    /// Builder: set balance (sign not validated)
    pub fn with_balance(mut self, balance: f64) -> Self {
        self.balance = Some(balance);
        self
    }

    /// Builder: set currency code (unvalidated)
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Builder: set account type
    pub fn with_account_type(mut self, account_type: AccountType) -> Self {
        self.account_type = Some(account_type);
        self
    }

    /// Builder: request a status
    ///
    /// Recorded verbatim here; whether it is honored is decided at
    /// `build()` (only Current accounts keep a caller-chosen status).
    pub fn with_status(mut self, status: AccountStatus) -> Self {
        self.account_status = Some(status);
        self
    }

    /// Builder: set the owning customer
    pub fn with_customer(mut self, customer: Customer) -> Self {
        self.customer = Some(customer);
        self
    }

    /// Build the account, running the one normalization rule
    ///
    /// Current accounts keep the requested status (Created when none was
    /// requested). Every other type - including an unset type - is forced
    /// to Activated, whatever the caller asked for. Unset fields get
    /// zero-values; there is no completeness check.
    pub fn build(self) -> Account {
        let account_type = self.account_type.unwrap_or(AccountType::Savings);

        let account_status = if account_type == AccountType::Current {
            self.account_status.unwrap_or(AccountStatus::Created)
        } else {
            AccountStatus::Activated
        };

        Account {
            account_id: self.account_id.unwrap_or(0),
            balance: self.balance.unwrap_or(0.0),
            currency: self.currency.unwrap_or_default(),
            account_type,
            account_status,
            customer: self.customer.unwrap_or_default(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_account_keeps_requested_status() {
        let account = Account::builder()
            .with_account_type(AccountType::Current)
            .with_status(AccountStatus::Blocked)
            .build();

        assert_eq!(account.account_status, AccountStatus::Blocked);
    }

    #[test]
    fn test_savings_account_forces_activated() {
        let account = Account::builder()
            .with_account_type(AccountType::Savings)
            .with_status(AccountStatus::Blocked)
            .build();

        assert_eq!(account.account_status, AccountStatus::Activated);
    }

    #[test]
    fn test_status_rule_ignores_setter_order() {
        // Status set before type: the rule still sees the final type
        let account = Account::builder()
            .with_status(AccountStatus::Blocked)
            .with_account_type(AccountType::Current)
            .build();

        assert_eq!(account.account_status, AccountStatus::Blocked);

        let account = Account::builder()
            .with_status(AccountStatus::Suspended)
            .with_account_type(AccountType::Savings)
            .build();

        assert_eq!(account.account_status, AccountStatus::Activated);
    }

    #[test]
    fn test_unset_type_forces_activated() {
        let account = Account::builder().with_status(AccountStatus::Blocked).build();

        assert_eq!(account.account_type, AccountType::Savings);
        assert_eq!(account.account_status, AccountStatus::Activated);
    }

    #[test]
    fn test_current_without_status_is_created() {
        let account = Account::builder()
            .with_account_type(AccountType::Current)
            .build();

        assert_eq!(account.account_status, AccountStatus::Created);
    }

    #[test]
    fn test_unset_fields_get_zero_values() {
        let account = Account::builder().build();

        assert_eq!(account.account_id, 0);
        assert_eq!(account.balance, 0.0);
        assert_eq!(account.currency, "");
        assert_eq!(account.customer, Customer::default());
    }

    #[test]
    fn test_all_fields_assigned_verbatim() {
        let account = Account::builder()
            .with_account_id(9)
            .with_balance(-12.5)
            .with_currency("EUR")
            .with_account_type(AccountType::Current)
            .with_status(AccountStatus::Suspended)
            .with_customer(Customer::new(3, "Carol"))
            .build();

        assert_eq!(account.account_id, 9);
        // Negative balances are accepted as-is
        assert_eq!(account.balance, -12.5);
        assert_eq!(account.currency, "EUR");
        assert_eq!(account.account_type, AccountType::Current);
        assert_eq!(account.account_status, AccountStatus::Suspended);
        assert_eq!(account.customer.name, "Carol");
    }
}
