use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::CanonicalAddr;
use cw_storage_plus::Map;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
pub struct Record {
    pub owner: Option<CanonicalAddr>,
    pub resolver: Option<CanonicalAddr>,
    pub ttl: u64,
}

pub const RECORDS: Map<Vec<u8>, Record> = Map::new("RECORDS");

// (owner, operator) => approved
pub const OPERATORS: Map<(Vec<u8>, Vec<u8>), bool> = Map::new("OPERATORS");
