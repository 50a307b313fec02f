use cosmwasm_std::Addr;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct InstantiateMsg {
    pub registry_address: String,
    pub default_resolver: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Hand the sender's reverse node to `owner`.
    Claim {
        owner: String,
    },
    ClaimForAddr {
        address: String,
        owner: String,
        resolver: String,
    },
    ClaimWithResolver {
        owner: String,
        resolver: String,
    },
    /// Claim the sender's reverse node with the default resolver and set its name.
    SetName {
        name: String,
    },
    SetNameForAddr {
        address: String,
        owner: String,
        resolver: String,
        name: String,
    },
    SetDefaultResolver {
        resolver: String,
    },
    SetController {
        controller: String,
        enabled: bool,
    },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    Node { address: String },
    IsController { address: String },
    GetConfig {},
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct NodeResponse {
    pub node: Vec<u8>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct IsControllerResponse {
    pub is_controller: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ConfigResponse {
    pub registry_address: Addr,
    pub default_resolver: Option<Addr>,
    pub owner: Addr,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct MigrateMsg {}
