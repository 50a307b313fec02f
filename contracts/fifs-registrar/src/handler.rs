use crate::error::ContractError;
use crate::state::CONFIG;
use bns::fifs_registrar::ConfigResponse;
use bns::registry::{
    ExecuteMsg as RegistryExecuteMsg, OwnerResponse, QueryMsg as RegistryQueryMsg,
};
use bns::utils::{convert_namehash_to_hex_string, subnode};
use cosmwasm_std::{
    to_binary, CosmosMsg, Deps, DepsMut, Env, MessageInfo, QueryRequest, Response, StdResult,
    WasmMsg, WasmQuery,
};

/// Gives `label` under the root node to `owner`. Free names go to whoever
/// asks first; taken names only move when their owner asks.
pub fn register(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    label: Vec<u8>,
    owner: String,
) -> Result<Response, ContractError> {
    let owner = deps.api.addr_validate(owner.as_str())?;
    let config = CONFIG.load(deps.storage)?;
    let registry_address = deps.api.addr_humanize(&config.registry_address)?.to_string();
    let node = subnode(&config.root_node, &label);

    let current: OwnerResponse = deps.querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
        contract_addr: registry_address.clone(),
        msg: to_binary(&RegistryQueryMsg::GetOwner { node: node.clone() })?,
    }))?;
    if let Some(current_owner) = current.owner {
        if current_owner != info.sender {
            return Err(ContractError::Unauthorized {
                sender: info.sender.to_string(),
                node: convert_namehash_to_hex_string(&node),
            });
        }
    }

    let set_subnode_owner_msg = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: registry_address,
        msg: to_binary(&RegistryExecuteMsg::SetSubnodeOwner {
            node: config.root_node,
            label,
            owner: Some(owner.to_string()),
        })?,
        funds: vec![],
    });
    Ok(Response::new()
        .add_message(set_subnode_owner_msg)
        .add_attribute("method", "register")
        .add_attribute("node", convert_namehash_to_hex_string(&node))
        .add_attribute("owner", owner))
}

pub fn get_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        registry_address: deps.api.addr_humanize(&config.registry_address)?,
        root_node: config.root_node,
    })
}
