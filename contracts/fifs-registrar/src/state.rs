use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::CanonicalAddr;
use cw_storage_plus::Item;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Config {
    pub registry_address: CanonicalAddr,
    pub root_node: Vec<u8>,
}

pub const CONFIG: Item<Config> = Item::new("CONFIG");
