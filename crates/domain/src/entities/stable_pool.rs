use crate::enums::PoolKind;
use crate::math::to_non_divisible_number;
use crate::views::StablePoolView;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A stable or rated pool read by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StablePool {
    pub id: u64,
    pub pool_kind: PoolKind,
    pub token_account_ids: Vec<String>,
    pub decimals: Vec<u8>,
    pub amounts: Vec<String>,
    pub c_amounts: Vec<String>,
    pub total_fee: u32,
    pub shares_total_supply: String,
    pub amp: u64,
    pub rates: Vec<String>,
    /// Remaining fields of the contract reply.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StablePool {
    /// Tags a `get_stable_pool` payload and derives unit rates.
    ///
    /// Every reserve gets the rate 1 expressed at `lp_decimals` precision.
    #[must_use]
    pub fn stable(view: StablePoolView, id: u64, lp_decimals: u32) -> Self {
        let unit = to_non_divisible_number(lp_decimals, "1");
        let rates = vec![unit; view.c_amounts.len()];
        Self::with_kind(view, id, PoolKind::StableSwap, rates)
    }

    /// Tags a `get_rated_pool` payload, keeping the rates it reports.
    #[must_use]
    pub fn rated(view: StablePoolView, id: u64) -> Self {
        let rates = view.rates.clone();
        Self::with_kind(view, id, PoolKind::RatedSwap, rates)
    }

    fn with_kind(view: StablePoolView, id: u64, pool_kind: PoolKind, rates: Vec<String>) -> Self {
        let mut extra = view.extra;
        // `id` is always the requested one.
        extra.remove("id");
        Self {
            id,
            pool_kind,
            token_account_ids: view.token_account_ids,
            decimals: view.decimals,
            amounts: view.amounts,
            c_amounts: view.c_amounts,
            total_fee: view.total_fee,
            shares_total_supply: view.shares_total_supply,
            amp: view.amp,
            rates,
            extra,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::STABLE_LP_TOKEN_DECIMALS;

    fn view(rates: Vec<&str>) -> StablePoolView {
        StablePoolView {
            pool_kind: Some("STABLE_SWAP".into()),
            token_account_ids: vec!["a.near".into(), "b.near".into(), "c.near".into()],
            decimals: vec![18, 6, 6],
            amounts: vec!["1".into(), "2".into(), "3".into()],
            c_amounts: vec!["10".into(), "20".into(), "30".into()],
            total_fee: 5,
            shares_total_supply: "60".into(),
            amp: 240,
            rates: rates.into_iter().map(String::from).collect(),
            extra: Map::new(),
        }
    }

    #[test]
    fn test_stable_derives_unit_rates() {
        let pool = StablePool::stable(view(vec![]), 1910, STABLE_LP_TOKEN_DECIMALS);

        assert_eq!(pool.id, 1910);
        assert_eq!(pool.pool_kind, PoolKind::StableSwap);
        assert_eq!(pool.rates.len(), pool.c_amounts.len());
        assert!(pool.rates.iter().all(|r| r == "1000000000000000000"));
    }

    #[test]
    fn test_rated_keeps_reported_rates() {
        let pool = StablePool::rated(view(vec!["1", "2", "3"]), 3514);

        assert_eq!(pool.id, 3514);
        assert_eq!(pool.pool_kind, PoolKind::RatedSwap);
        assert_eq!(pool.rates, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_extra_fields_survive_tagging() {
        let mut raw = view(vec![]);
        raw.extra.insert("degens".into(), Value::from(vec!["a.near"]));
        raw.extra.insert("id".into(), Value::from(1));

        let pool = StablePool::rated(raw, 3514);
        let json = serde_json::to_value(&pool).unwrap();

        assert_eq!(json["degens"], serde_json::json!(["a.near"]));
        assert_eq!(json["id"], 3514);
        assert_eq!(json["pool_kind"], "RATED_SWAP");
    }
}
