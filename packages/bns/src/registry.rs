use cosmwasm_std::Addr;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct InstantiateMsg {}

/// `owner: None` releases the node. `resolver: None` leaves it unset.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    SetRecord {
        node: Vec<u8>,
        owner: Option<String>,
        resolver: Option<String>,
        ttl: u64,
    },
    SetSubnodeRecord {
        node: Vec<u8>,
        label: Vec<u8>,
        owner: Option<String>,
        resolver: Option<String>,
        ttl: u64,
    },
    SetSubnodeOwner {
        node: Vec<u8>,
        label: Vec<u8>,
        owner: Option<String>,
    },
    SetOwner {
        node: Vec<u8>,
        owner: Option<String>,
    },
    SetResolver {
        node: Vec<u8>,
        resolver: Option<String>,
    },
    SetTTL {
        node: Vec<u8>,
        ttl: u64,
    },
    SetApprovalForAll {
        operator: String,
        approved: bool,
    },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    GetOwner { node: Vec<u8> },
    GetResolver { node: Vec<u8> },
    GetTtl { node: Vec<u8> },
    GetRecord { name: String },
    GetRecordByNode { node: Vec<u8> },
    GetRecordExists { node: Vec<u8> },
    GetIsNodeOwner { node: Vec<u8>, address: String },
    GetIsApprovedForAll { owner: String, operator: String },
}

// We define a custom struct for each query response
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct RecordResponse {
    pub owner: Option<Addr>,
    pub resolver: Option<Addr>,
    pub ttl: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct OwnerResponse {
    pub owner: Option<Addr>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ResolverResponse {
    pub resolver: Option<Addr>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct TtlResponse {
    pub ttl: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct RecordExistsResponse {
    pub exists: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct OperatorResponse {
    pub is_approve: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct MigrateMsg {}
