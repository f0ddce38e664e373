//! Balance sheet view of a portfolio: assets, then liabilities, then the
//! net total.
use crate::core::{Account, DateConverter, Portfolio};
use rust_decimal::Decimal;
use serde::Serialize;

pub const SEPARATOR: &str = "---";
pub const COLUMNS: usize = 6;

/// Formats an amount with two decimal places.
pub fn format_amount(value: Decimal) -> String {
    format!("{:.2}", value.round_dp(2))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSheetEntry {
    pub last_updated: Option<String>,
    pub institution: String,
    pub owner: String,
    pub account: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub value: Decimal,
    pub investment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalanceSheetJson {
    pub assets: Vec<BalanceSheetEntry>,
    pub liabilities: Vec<BalanceSheetEntry>,
}

pub struct BalanceSheet<'a> {
    portfolio: &'a Portfolio,
    dates: DateConverter,
}

impl<'a> BalanceSheet<'a> {
    pub fn new(portfolio: &'a Portfolio, dates: DateConverter) -> Self {
        Self { portfolio, dates }
    }

    /// `[date, institution, name, investment, owner, balance]` for one account.
    pub fn row(&self, account: &Account, now: i64) -> Vec<String> {
        let date = account
            .last_updated_at()
            .and_then(|epoch| self.dates.epoch_to_date(epoch))
            .map(DateConverter::format_date)
            .unwrap_or_default();
        vec![
            date,
            account.institution.clone(),
            account.name.clone(),
            account.investment.clone(),
            account.owner.clone(),
            format_amount(account.balance(now)),
        ]
    }

    pub fn separator() -> Vec<String> {
        vec![SEPARATOR.to_string(); COLUMNS]
    }

    pub fn total_row(&self, now: i64) -> Vec<String> {
        let mut row = vec![String::new(); COLUMNS - 2];
        row.push("Total".to_string());
        row.push(format_amount(self.portfolio.total_value(now)));
        row
    }

    pub fn create(&self, now: i64) -> Vec<Vec<String>> {
        let mut rows: Vec<Vec<String>> = self
            .portfolio
            .assets()
            .map(|account| self.row(account, now))
            .collect();
        rows.push(Self::separator());
        rows.extend(
            self.portfolio
                .liabilities()
                .map(|account| self.row(account, now)),
        );
        rows.push(self.total_row(now));
        rows
    }

    fn entry(&self, account: &Account, now: i64) -> BalanceSheetEntry {
        BalanceSheetEntry {
            last_updated: account.last_updated(&self.dates),
            institution: account.institution.clone(),
            owner: account.owner.clone(),
            account: account.name.clone(),
            value: account.balance(now),
            investment: account.investment.clone(),
        }
    }

    pub fn json(&self, now: i64) -> BalanceSheetJson {
        BalanceSheetJson {
            assets: self
                .portfolio
                .assets()
                .map(|account| self.entry(account, now))
                .collect(),
            liabilities: self
                .portfolio
                .liabilities()
                .map(|account| self.entry(account, now))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AccountConfig;
    use crate::core::dates::SECONDS_PER_DAY;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn dates() -> DateConverter {
        "-05:00".parse().unwrap()
    }

    fn epoch(date: &str) -> i64 {
        dates().date_to_epoch(dates().parse_date(date).unwrap())
    }

    fn now() -> i64 {
        epoch("2020-01-01")
    }

    fn account(suffix: &str, liability: bool) -> Account {
        let field = |base: &str| {
            if suffix.is_empty() {
                base.to_string()
            } else {
                format!("{base} {suffix}")
            }
        };
        AccountConfig {
            name: field("name"),
            owner: field("owner"),
            investment: field("investment"),
            institution: field("institution"),
            liability,
            update_frequency: Some(3),
            ..Default::default()
        }
        .build()
        .unwrap()
    }

    fn rows(rows: &[[&str; 6]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_it_returns_a_formatted_row() {
        let portfolio = Portfolio::new();
        let sheet = BalanceSheet::new(&portfolio, dates());
        let mut asset = account("", false);
        let taken = now() - 2 * SECONDS_PER_DAY;
        asset.import_snapshot(taken, dec!(100));

        let expected_date = DateConverter::format_date(dates().epoch_to_date(taken).unwrap());
        assert_eq!(
            sheet.row(&asset, now()),
            vec![
                expected_date,
                "institution".to_string(),
                "name".to_string(),
                "investment".to_string(),
                "owner".to_string(),
                "100.00".to_string()
            ]
        );
    }

    #[test]
    fn test_an_account_without_data_has_a_blank_date() {
        let portfolio = Portfolio::new();
        let sheet = BalanceSheet::new(&portfolio, dates());
        let row = sheet.row(&account("", false), now());
        assert_eq!(row[0], "");
        assert_eq!(row[5], "0.00");
    }

    #[test]
    fn test_an_empty_portfolio_has_only_separator_and_total() {
        let portfolio = Portfolio::new();
        let sheet = BalanceSheet::new(&portfolio, dates());
        assert_eq!(
            sheet.create(now()),
            rows(&[
                ["---", "---", "---", "---", "---", "---"],
                ["", "", "", "", "Total", "0.00"],
            ])
        );
    }

    #[test]
    fn test_one_asset() {
        let mut asset = account("", false);
        asset.import_snapshot(epoch("2017-12-12"), dec!(100));
        let mut portfolio = Portfolio::new();
        portfolio.import_account(asset);

        let sheet = BalanceSheet::new(&portfolio, dates());
        assert_eq!(
            sheet.create(now()),
            rows(&[
                ["2017-12-12", "institution", "name", "investment", "owner", "100.00"],
                ["---", "---", "---", "---", "---", "---"],
                ["", "", "", "", "Total", "100.00"],
            ])
        );
    }

    #[test]
    fn test_one_liability() {
        let mut liability = account("", true);
        liability.import_snapshot(epoch("2011-01-01"), dec!(500.12));
        let mut portfolio = Portfolio::new();
        portfolio.import_account(liability);

        let sheet = BalanceSheet::new(&portfolio, dates());
        assert_eq!(
            sheet.create(now()),
            rows(&[
                ["---", "---", "---", "---", "---", "---"],
                ["2011-01-01", "institution", "name", "investment", "owner", "500.12"],
                ["", "", "", "", "Total", "-500.12"],
            ])
        );
    }

    #[test]
    fn test_an_asset_and_a_liability() {
        let mut asset = account("", false);
        asset.import_snapshot(epoch("2017-11-12"), dec!(1020));
        let mut liability = account("", true);
        liability.import_snapshot(epoch("2013-05-05"), dec!(0.12));
        let mut portfolio = Portfolio::new();
        portfolio.import_account(liability);
        portfolio.import_account(asset);

        let sheet = BalanceSheet::new(&portfolio, dates());
        assert_eq!(
            sheet.create(now()),
            rows(&[
                ["2017-11-12", "institution", "name", "investment", "owner", "1020.00"],
                ["---", "---", "---", "---", "---", "---"],
                ["2013-05-05", "institution", "name", "investment", "owner", "0.12"],
                ["", "", "", "", "Total", "1019.88"],
            ])
        );
    }

    #[test]
    fn test_json_with_no_accounts() {
        let portfolio = Portfolio::new();
        let sheet = BalanceSheet::new(&portfolio, dates());
        assert_eq!(
            serde_json::to_value(sheet.json(now())).unwrap(),
            json!({"assets": [], "liabilities": []})
        );
    }

    #[test]
    fn test_json_with_two_assets_and_a_liability() {
        let mut one = account("one", false);
        one.import_snapshot(epoch("2005-11-12"), dec!(100.50));
        let mut two = account("two", false);
        two.import_snapshot(epoch("2000-12-12"), dec!(1289));
        let mut loan = account("", true);
        loan.import_snapshot(epoch("2010-01-10"), dec!(129));

        let mut portfolio = Portfolio::new();
        portfolio.import_account(one);
        portfolio.import_account(loan);
        portfolio.import_account(two);

        let sheet = BalanceSheet::new(&portfolio, dates());
        assert_eq!(
            serde_json::to_value(sheet.json(now())).unwrap(),
            json!({
                "assets": [
                    {
                        "lastUpdated": "2005-11-12T12:00:00-05:00",
                        "institution": "institution one",
                        "owner": "owner one",
                        "account": "name one",
                        "value": 100.5,
                        "investment": "investment one"
                    },
                    {
                        "lastUpdated": "2000-12-12T12:00:00-05:00",
                        "institution": "institution two",
                        "owner": "owner two",
                        "account": "name two",
                        "value": 1289.0,
                        "investment": "investment two"
                    }
                ],
                "liabilities": [
                    {
                        "lastUpdated": "2010-01-10T12:00:00-05:00",
                        "institution": "institution",
                        "owner": "owner",
                        "account": "name",
                        "value": 129.0,
                        "investment": "investment"
                    }
                ]
            })
        );
    }

    #[test]
    fn test_json_marks_missing_data_as_null() {
        let mut portfolio = Portfolio::new();
        portfolio.import_account(account("", false));
        let sheet = BalanceSheet::new(&portfolio, dates());
        let json = serde_json::to_value(sheet.json(now())).unwrap();
        assert_eq!(json["assets"][0]["lastUpdated"], serde_json::Value::Null);
        assert_eq!(json["assets"][0]["value"], json!(0.0));
    }
}
