//! Assets and liabilities, each backed by its own snapshot history.

use super::allocation::AssetClass;
use super::dates::{DateConverter, SECONDS_PER_DAY};
use super::error::WorthError;
use super::snapshot::{Snapshot, SnapshotHistory};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountKind {
    Asset,
    Liability,
}

impl AccountKind {
    /// Multiplier applied to an account's balance when totalling.
    pub fn sign(&self) -> Decimal {
        match self {
            AccountKind::Asset => Decimal::ONE,
            AccountKind::Liability => Decimal::NEGATIVE_ONE,
        }
    }
}

/// Options recognized when opening an account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AccountConfig {
    pub name: String,
    pub owner: String,
    pub investment: String,
    pub institution: String,
    pub asset_class: Option<String>,
    #[serde(default)]
    pub liability: bool,
    /// Expected number of days between updates.
    pub update_frequency: Option<u32>,
}

impl AccountConfig {
    pub fn build(self) -> Result<Account, WorthError> {
        if self.name.trim().is_empty() {
            return Err(WorthError::InvalidAccount("name is required".to_string()));
        }
        if self.investment.trim().is_empty() {
            return Err(WorthError::InvalidAccount(format!(
                "investment is required for '{}'",
                self.name
            )));
        }

        let kind = if self.liability {
            AccountKind::Liability
        } else {
            AccountKind::Asset
        };

        Ok(Account {
            name: self.name,
            owner: self.owner,
            investment: self.investment,
            institution: self.institution,
            asset_class: self.asset_class,
            kind,
            update_frequency: self.update_frequency,
            history: SnapshotHistory::new(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub name: String,
    pub owner: String,
    /// Symbol of the holding, used to group allocation percentages.
    pub investment: String,
    pub institution: String,
    asset_class: Option<String>,
    kind: AccountKind,
    update_frequency: Option<u32>,
    history: SnapshotHistory,
}

impl Account {
    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    pub fn is_liability(&self) -> bool {
        self.kind == AccountKind::Liability
    }

    /// Allocation bucket of an asset. Liabilities and unknown labels have none.
    pub fn asset_class(&self) -> Option<AssetClass> {
        match self.kind {
            AccountKind::Asset => self.asset_class.as_deref().and_then(AssetClass::parse),
            AccountKind::Liability => None,
        }
    }

    pub fn update_frequency(&self) -> Option<u32> {
        self.update_frequency
    }

    pub fn history(&self) -> &SnapshotHistory {
        &self.history
    }

    pub fn import_snapshot(&mut self, time: i64, value: Decimal) {
        self.history.import_snapshot(Snapshot::new(time, value));
    }

    /// Signed as-of value: liabilities count against the total.
    pub fn value(&self, query_time: i64) -> Decimal {
        self.kind.sign() * self.history.value(query_time)
    }

    /// Unsigned as-of balance, as it appears on a statement.
    pub fn balance(&self, query_time: i64) -> Decimal {
        self.history.value(query_time)
    }

    pub fn last_updated_at(&self) -> Option<i64> {
        self.history.last_updated()
    }

    /// Time of the latest snapshot as an RFC 3339 string.
    pub fn last_updated(&self, dates: &DateConverter) -> Option<String> {
        self.last_updated_at()
            .and_then(|epoch| dates.timestamp(epoch))
            .map(|dt| dt.to_rfc3339())
    }

    /// Whether the account is overdue for an update given its frequency.
    pub fn is_stale(&self, now: i64) -> bool {
        let Some(days) = self.update_frequency else {
            return false;
        };
        match self.last_updated_at() {
            Some(last) => now - last > i64::from(days) * SECONDS_PER_DAY,
            None => true,
        }
    }
}
