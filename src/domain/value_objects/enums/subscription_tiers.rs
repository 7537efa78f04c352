use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    Monthly,
    Quarterly,
    Semiannual,
    Annual,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct TierTerms {
    /// Whole currency units.
    pub price: i32,
    pub duration_days: i32,
}

impl SubscriptionTier {
    /// Every tier, in catalog order.
    pub const ALL: [SubscriptionTier; 4] = [
        SubscriptionTier::Monthly,
        SubscriptionTier::Quarterly,
        SubscriptionTier::Semiannual,
        SubscriptionTier::Annual,
    ];

    pub const fn terms(&self) -> TierTerms {
        match self {
            SubscriptionTier::Monthly => TierTerms {
                price: 10,
                duration_days: 30,
            },
            SubscriptionTier::Quarterly => TierTerms {
                price: 24,
                duration_days: 90,
            },
            SubscriptionTier::Semiannual => TierTerms {
                price: 42,
                duration_days: 180,
            },
            SubscriptionTier::Annual => TierTerms {
                price: 72,
                duration_days: 365,
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionTier::Monthly => "monthly",
            SubscriptionTier::Quarterly => "quarterly",
            SubscriptionTier::Semiannual => "semiannual",
            SubscriptionTier::Annual => "annual",
        }
    }

    /// Exact, case-sensitive match on the tier name.
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "monthly" => Some(SubscriptionTier::Monthly),
            "quarterly" => Some(SubscriptionTier::Quarterly),
            "semiannual" => Some(SubscriptionTier::Semiannual),
            "annual" => Some(SubscriptionTier::Annual),
            _ => None,
        }
    }

    const fn position(&self) -> usize {
        match self {
            SubscriptionTier::Monthly => 0,
            SubscriptionTier::Quarterly => 1,
            SubscriptionTier::Semiannual => 2,
            SubscriptionTier::Annual => 3,
        }
    }
}

// `ALL` must list each variant exactly once; `position` is exhaustive, so a new
// variant fails to compile until it is added here too.
const _: () = {
    let mut index = 0;
    while index < SubscriptionTier::ALL.len() {
        assert!(SubscriptionTier::ALL[index].position() == index);
        index += 1;
    }
};

impl Display for SubscriptionTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_matches_published_prices() {
        let catalog: Vec<(&str, i32, i32)> = SubscriptionTier::ALL
            .iter()
            .map(|tier| (tier.as_str(), tier.terms().price, tier.terms().duration_days))
            .collect();

        assert_eq!(
            catalog,
            vec![
                ("monthly", 10, 30),
                ("quarterly", 24, 90),
                ("semiannual", 42, 180),
                ("annual", 72, 365),
            ]
        );
    }

    #[test]
    fn names_round_trip() {
        for tier in SubscriptionTier::ALL {
            assert_eq!(SubscriptionTier::from_str(tier.as_str()), Some(tier));
            assert_eq!(tier.to_string(), tier.as_str());
        }
    }

    #[test]
    fn unknown_names_are_rejected() {
        for name in ["weekly", "Monthly", "", " monthly", "lifetime"] {
            assert_eq!(SubscriptionTier::from_str(name), None, "{name:?}");
        }
    }
}
