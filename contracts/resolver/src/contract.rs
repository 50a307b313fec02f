use crate::error::ContractError;
use crate::handler::{
    clear_records, get_config, multicall, query_addr, query_address, query_contenthash,
    query_is_approved_for_all, query_multicall, query_name, query_pubkey, query_record_version,
    query_supports_interface, query_text, set_addr, set_address, set_approval_for_all, set_config,
    set_contenthash, set_name, set_pubkey, set_text,
};
use crate::state::{Config, CONFIG};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use bns::resolver::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use cw2::set_contract_version;

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:bns-resolver";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    let canonicalize = |address: Option<String>| {
        address
            .map(|address| deps.api.addr_canonicalize(address.as_str()))
            .transpose()
    };
    let config = Config {
        registry_address: deps.api.addr_canonicalize(msg.registry_address.as_str())?,
        trusted_controller: canonicalize(msg.trusted_controller)?,
        trusted_reverse_registrar: canonicalize(msg.trusted_reverse_registrar)?,
        name_wrapper: canonicalize(msg.name_wrapper)?,
        owner: deps.api.addr_canonicalize(info.sender.as_str())?,
    };
    CONFIG.save(deps.storage, &config)?;
    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("registry_address", msg.registry_address))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::SetAddress {
            node,
            coin_type,
            address,
        } => set_address(deps, env, info, node, coin_type, address),
        ExecuteMsg::SetAddr { node, address } => set_addr(deps, env, info, node, address),
        ExecuteMsg::SetName { node, name } => set_name(deps, env, info, node, name),
        ExecuteMsg::SetPubkey { node, x, y } => set_pubkey(deps, env, info, node, x, y),
        ExecuteMsg::SetText { node, key, value } => set_text(deps, env, info, node, key, value),
        ExecuteMsg::SetContenthash { node, hash } => set_contenthash(deps, env, info, node, hash),
        ExecuteMsg::ClearRecords { node } => clear_records(deps, env, info, node),
        ExecuteMsg::SetApprovalForAll { operator, approved } => {
            set_approval_for_all(deps, env, info, operator, approved)
        }
        ExecuteMsg::Multicall { calls } => multicall(deps, env, info, None, calls),
        ExecuteMsg::MulticallWithNodeCheck { node, calls } => {
            multicall(deps, env, info, Some(node), calls)
        }
        ExecuteMsg::SetConfig {
            registry_address,
            trusted_controller,
            trusted_reverse_registrar,
            name_wrapper,
            owner,
        } => set_config(
            deps,
            env,
            info,
            registry_address,
            trusted_controller,
            trusted_reverse_registrar,
            name_wrapper,
            owner,
        ),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::GetAddress { node, coin_type } => {
            to_binary(&query_address(deps, env, node, coin_type)?)
        }
        QueryMsg::GetAddr { node } => to_binary(&query_addr(deps, env, node)?),
        QueryMsg::GetName { node } => to_binary(&query_name(deps, env, node)?),
        QueryMsg::GetPubkey { node } => to_binary(&query_pubkey(deps, env, node)?),
        QueryMsg::GetText { node, key } => to_binary(&query_text(deps, env, node, key)?),
        QueryMsg::GetContenthash { node } => to_binary(&query_contenthash(deps, env, node)?),
        QueryMsg::GetRecordVersion { node } => {
            to_binary(&query_record_version(deps, env, node)?)
        }
        QueryMsg::GetIsApprovedForAll { owner, operator } => {
            to_binary(&query_is_approved_for_all(deps, env, owner, operator)?)
        }
        QueryMsg::SupportsInterface { interface_id } => {
            to_binary(&query_supports_interface(interface_id))
        }
        QueryMsg::Multicall { calls } => to_binary(&query_multicall(deps, env, calls)?),
        QueryMsg::GetConfig {} => to_binary(&get_config(deps)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(_deps: DepsMut, _env: Env, _msg: MigrateMsg) -> StdResult<Response> {
    Ok(Response::default())
}
