use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::{Binary, CanonicalAddr};
use cw_storage_plus::{Item, Map, U64Key};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Config {
    pub registry_address: CanonicalAddr,
    pub trusted_controller: Option<CanonicalAddr>,
    pub trusted_reverse_registrar: Option<CanonicalAddr>,
    pub name_wrapper: Option<CanonicalAddr>,
    pub owner: CanonicalAddr,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct PublicKey {
    pub x: Binary,
    pub y: Binary,
}

pub const CONFIG: Item<Config> = Item::new("CONFIG");

pub const RECORD_VERSIONS: Map<Vec<u8>, u64> = Map::new("RECORD_VERSIONS");

// Every record table below is keyed by `versioned_node(node, version)`.
pub const ADDRESSES: Map<(Vec<u8>, U64Key), Vec<u8>> = Map::new("ADDRESSES");

pub const NAMES: Map<Vec<u8>, String> = Map::new("NAMES");

pub const PUBKEYS: Map<Vec<u8>, PublicKey> = Map::new("PUBKEYS");

pub const TEXTS: Map<(Vec<u8>, String), String> = Map::new("TEXTS");

pub const CONTENT_HASHES: Map<Vec<u8>, Vec<u8>> = Map::new("CONTENT_HASHES");

pub const OPERATORS: Map<(Vec<u8>, Vec<u8>), bool> = Map::new("OPERATORS");

pub fn versioned_node(node: &[u8], version: u64) -> Vec<u8> {
    let mut key = node.to_vec();
    key.extend_from_slice(&version.to_be_bytes());
    key
}
