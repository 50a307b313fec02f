use cosmwasm_std::{Addr, Binary};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Coin type whose address doubles as the legacy single-address record.
pub const DEFAULT_COIN_TYPE: u64 = 60;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct InstantiateMsg {
    pub registry_address: String,
    pub trusted_controller: Option<String>,
    pub trusted_reverse_registrar: Option<String>,
    pub name_wrapper: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    SetAddress {
        node: Vec<u8>,
        coin_type: u64,
        address: Binary,
    },
    /// Legacy form, equivalent to `SetAddress` with the default coin type.
    SetAddr {
        node: Vec<u8>,
        address: String,
    },
    SetName {
        node: Vec<u8>,
        name: String,
    },
    SetPubkey {
        node: Vec<u8>,
        x: Binary,
        y: Binary,
    },
    SetText {
        node: Vec<u8>,
        key: String,
        value: String,
    },
    SetContenthash {
        node: Vec<u8>,
        hash: Binary,
    },
    ClearRecords {
        node: Vec<u8>,
    },
    SetApprovalForAll {
        operator: String,
        approved: bool,
    },
    /// Each call is a JSON encoded `ExecuteMsg`.
    Multicall {
        calls: Vec<Binary>,
    },
    MulticallWithNodeCheck {
        node: Vec<u8>,
        calls: Vec<Binary>,
    },
    SetConfig {
        registry_address: String,
        trusted_controller: Option<String>,
        trusted_reverse_registrar: Option<String>,
        name_wrapper: Option<String>,
        owner: String,
    },
}

impl ExecuteMsg {
    /// Node a record call writes to, None for calls not bound to a node.
    pub fn node(&self) -> Option<&[u8]> {
        match self {
            ExecuteMsg::SetAddress { node, .. }
            | ExecuteMsg::SetAddr { node, .. }
            | ExecuteMsg::SetName { node, .. }
            | ExecuteMsg::SetPubkey { node, .. }
            | ExecuteMsg::SetText { node, .. }
            | ExecuteMsg::SetContenthash { node, .. }
            | ExecuteMsg::ClearRecords { node }
            | ExecuteMsg::MulticallWithNodeCheck { node, .. } => Some(node.as_slice()),
            ExecuteMsg::SetApprovalForAll { .. }
            | ExecuteMsg::Multicall { .. }
            | ExecuteMsg::SetConfig { .. } => None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    GetAddress { node: Vec<u8>, coin_type: u64 },
    GetAddr { node: Vec<u8> },
    GetName { node: Vec<u8> },
    GetPubkey { node: Vec<u8> },
    GetText { node: Vec<u8>, key: String },
    GetContenthash { node: Vec<u8> },
    GetRecordVersion { node: Vec<u8> },
    GetIsApprovedForAll { owner: String, operator: String },
    SupportsInterface { interface_id: u32 },
    /// Each call is a JSON encoded `QueryMsg`; results come back in order.
    Multicall { calls: Vec<Binary> },
    GetConfig {},
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct AddressResponse {
    pub address: Binary,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct AddrResponse {
    pub address: Option<Addr>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct NameResponse {
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct PubkeyResponse {
    pub x: Binary,
    pub y: Binary,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct TextResponse {
    pub value: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ContenthashResponse {
    pub hash: Binary,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct RecordVersionResponse {
    pub version: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct OperatorResponse {
    pub is_approve: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct SupportsInterfaceResponse {
    pub supported: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct MulticallResponse {
    pub results: Vec<Binary>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ConfigResponse {
    pub registry_address: Addr,
    pub trusted_controller: Option<Addr>,
    pub trusted_reverse_registrar: Option<Addr>,
    pub name_wrapper: Option<Addr>,
    pub owner: Addr,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct MigrateMsg {}
