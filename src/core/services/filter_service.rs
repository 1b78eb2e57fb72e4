//! Branch-scoped partitioning of accounts for the debit/credit selectors.

use crate::domain::{Account, AccountType};

/// Accounts split by posting role for one branch selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredAccounts {
    pub debit: Vec<Account>,
    pub credit: Vec<Account>,
}

pub struct FilterService;

impl FilterService {
    /// Splits `accounts` into debit- and credit-eligible subsets for one
    /// branch.
    ///
    /// An account belongs to the branch when `branch_id` appears as a
    /// substring of its `branch_ids` cell. One cell may list several branch
    /// ids, so this must stay a substring check, never equality; an empty
    /// branch id consequently matches every account. Accounts typed neither
    /// debit nor credit land in no subset. Input order is preserved.
    pub fn by_branch(accounts: &[Account], branch_id: &str) -> FilteredAccounts {
        let mut filtered = FilteredAccounts::default();
        for account in accounts {
            if !account.branch_ids.contains(branch_id) {
                continue;
            }
            match account.kind {
                AccountType::Debit => filtered.debit.push(account.clone()),
                AccountType::Credit => filtered.credit.push(account.clone()),
                AccountType::Other => {}
            }
        }
        filtered
    }
}
