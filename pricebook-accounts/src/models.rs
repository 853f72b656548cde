use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A registered account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Display name of the account holder
    pub owner: String,
    pub balance: u64,
}

impl Account {
    pub fn new(owner: impl Into<String>, balance: u64) -> Self {
        Self {
            owner: owner.into(),
            balance,
        }
    }
}

/// One row of a sorted registry view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountView {
    pub login: String,
    pub account: Account,
}

/// Ordering applied by [`crate::AccountRegistry::sorted_view`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    NameAscending,
    NameDescending,
    /// Highest balance first, equal balances by login ascending
    BalanceDescending,
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name-asc" | "1" => Ok(SortMode::NameAscending),
            "name-desc" | "2" => Ok(SortMode::NameDescending),
            "balance-desc" | "3" => Ok(SortMode::BalanceDescending),
            other => Err(format!(
                "unknown sort mode '{}', expected name-asc, name-desc or balance-desc",
                other
            )),
        }
    }
}
