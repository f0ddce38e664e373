use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Buckets used for asset class allocation reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum AssetClass {
    #[serde(rename = "Cash Equivalents")]
    CashEquivalents,
    Equities,
    #[serde(rename = "Fixed Income")]
    FixedIncome,
    #[serde(rename = "Real Estate")]
    RealEstate,
    Commodities,
}

impl AssetClass {
    /// Every class reported by an allocation breakdown, in display order.
    pub const ALL: [AssetClass; 5] = [
        AssetClass::CashEquivalents,
        AssetClass::Equities,
        AssetClass::FixedIncome,
        AssetClass::RealEstate,
        AssetClass::Commodities,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AssetClass::CashEquivalents => "Cash Equivalents",
            AssetClass::Equities => "Equities",
            AssetClass::FixedIncome => "Fixed Income",
            AssetClass::RealEstate => "Real Estate",
            AssetClass::Commodities => "Commodities",
        }
    }

    /// Matches a ledger label against the known classes, ignoring case.
    /// Unknown labels are unclassified.
    pub fn parse(s: &str) -> Option<AssetClass> {
        let label = s.trim();
        AssetClass::ALL
            .into_iter()
            .find(|class| class.name().eq_ignore_ascii_case(label))
    }
}

impl Display for AssetClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
