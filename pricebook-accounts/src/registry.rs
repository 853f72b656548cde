use crate::models::{Account, AccountView, SortMode};
use std::collections::HashMap;

/// In-memory account store keyed by login
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountRegistry {
    accounts: HashMap<String, Account>,
}

impl AccountRegistry {
    pub fn new() -> Self {
        Self {
            accounts: HashMap::new(),
        }
    }

    /// Register a copy of `account` under `login`
    pub fn add_account(&mut self, login: &str, account: &Account) -> Result<(), AccountError> {
        if login.is_empty() {
            return Err(AccountError::EmptyLogin);
        }

        if self.accounts.contains_key(login) {
            return Err(AccountError::AlreadyExists(login.to_string()));
        }

        self.accounts.insert(login.to_string(), account.clone());
        tracing::debug!("Account {} registered with balance {}", login, account.balance);
        Ok(())
    }

    pub fn get(&self, login: &str) -> Option<&Account> {
        self.accounts.get(login)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Snapshot of every account in the requested order
    pub fn sorted_view(&self, mode: SortMode) -> Vec<AccountView> {
        let mut view: Vec<AccountView> = self.accounts.iter()
            .map(|(login, account)| AccountView {
                login: login.clone(),
                account: account.clone(),
            })
            .collect();

        match mode {
            SortMode::NameAscending => view.sort_by(|a, b| a.login.cmp(&b.login)),
            SortMode::NameDescending => view.sort_by(|a, b| b.login.cmp(&a.login)),
            SortMode::BalanceDescending => view.sort_by(|a, b| {
                b.account.balance.cmp(&a.account.balance)
                    .then_with(|| a.login.cmp(&b.login))
            }),
        }

        view
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountError {
    #[error("Account login must not be empty")]
    EmptyLogin,

    #[error("Account already exists: {0}")]
    AlreadyExists(String),
}
