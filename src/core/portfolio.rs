//! Aggregation of many accounts into totals and allocation breakdowns.
//!
//! Sums saturate at the bounds of `Decimal` instead of panicking, and a
//! share whose quotient overflows is reported as zero.
use super::account::{Account, AccountConfig};
use super::allocation::AssetClass;
use super::error::WorthError;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Decimal places kept in symbol percentages.
const PERCENTAGE_PRECISION: u32 = 3;

/// A single ledger observation, already converted to core units.
///
/// A record with an asset class describes an asset; one without describes a
/// liability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub timestamp: i64,
    pub name: String,
    pub symbol: String,
    pub value: Decimal,
    pub asset_class: Option<String>,
    pub owner: String,
    pub institution: String,
    /// Expected days between updates, taken from the first record of an account.
    pub update_frequency: Option<u32>,
}

fn saturating_sum(values: impl Iterator<Item = Decimal>) -> Decimal {
    values.fold(Decimal::ZERO, Decimal::saturating_add)
}

fn share_of(part: Decimal, total: Decimal) -> Decimal {
    if total.is_zero() {
        return Decimal::ZERO;
    }
    part.checked_div(total).unwrap_or_else(|| {
        warn!(%part, %total, "Allocation share overflowed, reporting zero");
        Decimal::ZERO
    })
}

#[derive(Debug, Clone, Default)]
pub struct Portfolio {
    accounts: Vec<Account>,
}

impl Portfolio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn import_account(&mut self, account: Account) {
        debug!(
            name = %account.name,
            investment = %account.investment,
            kind = ?account.kind(),
            "Importing account"
        );
        self.accounts.push(account);
    }

    /// Appends a record's snapshot to the account with the same name and
    /// symbol, opening a new account when there is none.
    pub fn import_data(&mut self, record: Record) -> Result<(), WorthError> {
        let existing = self
            .accounts
            .iter_mut()
            .find(|a| a.name == record.name && a.investment == record.symbol);

        match existing {
            Some(account) => account.import_snapshot(record.timestamp, record.value),
            None => {
                let liability = record.asset_class.is_none();
                let mut account = AccountConfig {
                    name: record.name,
                    owner: record.owner,
                    investment: record.symbol,
                    institution: record.institution,
                    asset_class: record.asset_class,
                    liability,
                    update_frequency: record.update_frequency,
                }
                .build()?;
                account.import_snapshot(record.timestamp, record.value);
                self.import_account(account);
            }
        }
        Ok(())
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn assets(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter().filter(|a| !a.is_liability())
    }

    pub fn liabilities(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter().filter(|a| a.is_liability())
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Latest snapshot time across every account.
    pub fn last_updated_at(&self) -> Option<i64> {
        self.accounts.iter().filter_map(Account::last_updated_at).max()
    }

    /// Net worth: assets minus liabilities as of `query_time`.
    pub fn total_value(&self, query_time: i64) -> Decimal {
        saturating_sum(self.accounts.iter().map(|a| a.value(query_time)))
    }

    fn total_asset_value(&self, query_time: i64) -> Decimal {
        saturating_sum(self.assets().map(|a| a.value(query_time)))
    }

    /// Share of total asset value held in each symbol, rounded to three
    /// decimal places. Liabilities are left out.
    pub fn percentages(&self, query_time: i64) -> BTreeMap<String, Decimal> {
        let mut by_symbol: BTreeMap<String, Decimal> = BTreeMap::new();
        for asset in self.assets() {
            let bucket = by_symbol.entry(asset.investment.clone()).or_default();
            *bucket = bucket.saturating_add(asset.value(query_time));
        }

        let total = saturating_sum(by_symbol.values().copied());
        debug!(%total, symbols = by_symbol.len(), "Computing symbol percentages");

        for share in by_symbol.values_mut() {
            *share = share_of(*share, total).round_dp(PERCENTAGE_PRECISION);
        }
        by_symbol
    }

    /// Share of total asset value held in each asset class. Every class is
    /// present, and all are zero when there is no asset value.
    pub fn asset_classes(&self, query_time: i64) -> BTreeMap<AssetClass, Decimal> {
        let mut by_class: BTreeMap<AssetClass, Decimal> = AssetClass::ALL
            .into_iter()
            .map(|class| (class, Decimal::ZERO))
            .collect();

        let total = self.total_asset_value(query_time);
        debug!(%total, "Computing asset class allocation");
        if total.is_zero() {
            return by_class;
        }

        for asset in self.assets() {
            if let Some(class) = asset.asset_class() {
                let bucket = by_class.entry(class).or_default();
                *bucket = bucket.saturating_add(asset.value(query_time));
            }
        }
        for share in by_class.values_mut() {
            *share = share_of(*share, total);
        }
        by_class
    }
}
