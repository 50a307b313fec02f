use cosmwasm_std::{Addr, Binary};
use cw0::Expiration;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct InstantiateMsg {
    /// Hex encoded namehash of `base_name`
    pub base_node: String,
    pub base_name: String,
    pub registry_address: String,
    pub reverse_registrar: Option<String>,
    /// Collection name reported by `ContractInfo`
    pub name: String,
    pub symbol: String,
}

/// Token ids are the hex encoded keccak256 hash of the label.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Mint `label` to `owner`, point its registry record at `resolver` and
    /// run `resolver_setup_calls` (JSON encoded resolver `ExecuteMsg`s) on it.
    Register {
        label: String,
        owner: String,
        resolver_setup_calls: Vec<Binary>,
        resolver: String,
    },
    /// Same as `Register` without writing the registry record.
    RegisterOnly {
        label: String,
        owner: String,
        resolver_setup_calls: Vec<Binary>,
        resolver: String,
    },
    /// Point the registry record of `id` at `owner`.
    Reclaim {
        id: String,
        owner: String,
    },
    SetConfig {
        registry_address: String,
        reverse_registrar: Option<String>,
        owner: String,
    },

    /// Moves the token only. `from` must be the current holder.
    TransferFrom {
        from: String,
        to: String,
        token_id: String,
    },
    TransferNft {
        recipient: String,
        token_id: String,
    },
    /// Transfer to `contract` and notify it with a `Cw721ReceiveMsg` carrying `msg`.
    SendNft {
        contract: String,
        token_id: String,
        msg: Binary,
    },
    Approve {
        spender: String,
        token_id: String,
        expires: Option<Expiration>,
    },
    Revoke {
        spender: String,
        token_id: String,
    },
    /// Let `operator` move every token the sender holds.
    ApproveAll {
        operator: String,
        expires: Option<Expiration>,
    },
    RevokeAll {
        operator: String,
    },
    /// Destroy the token, the label becomes available again.
    Burn {
        token_id: String,
    },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    IsAvailable {
        id: String,
    },
    GetTokenId {
        label: String,
    },
    GetBaseNode {},
    GetRegistry {},
    GetConfig {},

    BalanceOf {
        owner: String,
    },
    /// cw721 `OwnerOfResponse`. Expired approvals are hidden unless `include_expired`.
    OwnerOf {
        token_id: String,
        include_expired: Option<bool>,
    },
    /// cw721 `ApprovedForAllResponse`
    ApprovedForAll {
        owner: String,
        include_expired: Option<bool>,
        start_after: Option<String>,
        limit: Option<u32>,
    },
    NumTokens {},
    ContractInfo {},
    /// cw721 `NftInfoResponse<NameMetadata>`
    NftInfo {
        token_id: String,
    },
    /// cw721 `AllNftInfoResponse<NameMetadata>`
    AllNftInfo {
        token_id: String,
        include_expired: Option<bool>,
    },
    /// Token ids held by `owner`, cw721 `TokensResponse`
    Tokens {
        owner: String,
        start_after: Option<String>,
        limit: Option<u32>,
    },
    AllTokens {
        start_after: Option<String>,
        limit: Option<u32>,
    },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct IsAvailableResponse {
    pub available: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct TokenIdResponse {
    pub token_id: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct GetBaseNodeResponse {
    pub base_node: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct GetRegistryResponse {
    pub registry: Addr,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct BalanceResponse {
    pub count: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
/// Token extension carried in cw721 `NftInfoResponse`.
pub struct NameMetadata {
    /// `<label>.<base_name>`
    pub name: String,
    /// Hex encoded namehash of `name`
    pub node: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ConfigResponse {
    pub registry_address: Addr,
    pub reverse_registrar: Option<Addr>,
    pub owner: Addr,
    pub base_node: Vec<u8>,
    pub base_name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct MigrateMsg {}
