use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::{Addr, BlockInfo, CanonicalAddr, StdResult, Storage};
use cw0::Expiration;
use cw721::ContractInfoResponse;
use cw_storage_plus::{Index, IndexList, IndexedMap, Item, Map, MultiIndex};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Config {
    pub registry_address: CanonicalAddr,
    pub reverse_registrar: Option<CanonicalAddr>,
    pub owner: CanonicalAddr,
    pub base_node: Vec<u8>,
    pub base_name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Approval {
    pub spender: Addr,
    pub expires: Expiration,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct NameToken {
    pub owner: Addr,
    /// Per-token approvals, dropped on every transfer
    pub approvals: Vec<Approval>,
    /// `<label>.<base_name>`
    pub name: String,
}

impl NameToken {
    pub fn is_approved(&self, spender: &Addr, block: &BlockInfo) -> bool {
        self.approvals
            .iter()
            .any(|approval| &approval.spender == spender && !approval.expires.is_expired(block))
    }
}

pub struct TokenIndexes<'a> {
    pub owner: MultiIndex<'a, (Addr, Vec<u8>), NameToken>,
}

impl<'a> IndexList<NameToken> for TokenIndexes<'a> {
    fn get_indexes(&'_ self) -> Box<dyn Iterator<Item = &'_ dyn Index<NameToken>> + '_> {
        let v: Vec<&dyn Index<NameToken>> = vec![&self.owner];
        Box::new(v.into_iter())
    }
}

fn holder_index(token: &NameToken, pk: Vec<u8>) -> (Addr, Vec<u8>) {
    (token.owner.clone(), pk)
}

pub const CONFIG: Item<Config> = Item::new("CONFIG");
pub const CONTRACT_INFO: Item<ContractInfoResponse> = Item::new("CONTRACT_INFO");
pub const TOKEN_COUNT: Item<u64> = Item::new("TOKEN_COUNT");

// (holder, operator) -> expiry
pub const OPERATORS: Map<(&Addr, &Addr), Expiration> = Map::new("OPERATORS");

/// Tokens keyed by token id, indexed by holder.
pub fn tokens<'a>() -> IndexedMap<'a, &'a str, NameToken, TokenIndexes<'a>> {
    let indexes = TokenIndexes {
        owner: MultiIndex::new(holder_index, "TOKENS", "TOKENS__OWNER"),
    };
    IndexedMap::new("TOKENS", indexes)
}

pub fn token_count(storage: &dyn Storage) -> StdResult<u64> {
    Ok(TOKEN_COUNT.may_load(storage)?.unwrap_or_default())
}

pub fn increment_token_count(storage: &mut dyn Storage) -> StdResult<u64> {
    let count = token_count(storage)? + 1;
    TOKEN_COUNT.save(storage, &count)?;
    Ok(count)
}

pub fn decrement_token_count(storage: &mut dyn Storage) -> StdResult<u64> {
    let count = token_count(storage)?.saturating_sub(1);
    TOKEN_COUNT.save(storage, &count)?;
    Ok(count)
}
