use crate::error::ContractError;
use crate::handler::{
    query_is_approved_for_all, query_is_node_owner, query_owner, query_record,
    query_record_by_node, query_record_exists, query_resolver, query_ttl, set_approval_for_all,
    set_owner, set_record, set_resolver, set_subnode_owner, set_subnode_record, set_ttl,
};
use crate::state::{Record, RECORDS};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use bns::registry::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use bns::utils::root_node;
use cw2::set_contract_version;

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:bns-registry";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    _msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    let sender = deps.api.addr_canonicalize(info.sender.as_str())?;
    RECORDS.save(
        deps.storage,
        root_node(),
        &Record {
            owner: Some(sender),
            resolver: None,
            ttl: 0,
        },
    )?;
    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", info.sender))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::SetRecord {
            node,
            owner,
            resolver,
            ttl,
        } => set_record(deps, env, info, node, owner, resolver, ttl),
        ExecuteMsg::SetSubnodeRecord {
            node,
            label,
            owner,
            resolver,
            ttl,
        } => set_subnode_record(deps, env, info, node, label, owner, resolver, ttl),
        ExecuteMsg::SetSubnodeOwner { node, label, owner } => {
            set_subnode_owner(deps, env, info, node, label, owner)
        }
        ExecuteMsg::SetOwner { node, owner } => set_owner(deps, env, info, node, owner),
        ExecuteMsg::SetResolver { node, resolver } => set_resolver(deps, env, info, node, resolver),
        ExecuteMsg::SetTTL { node, ttl } => set_ttl(deps, env, info, node, ttl),
        ExecuteMsg::SetApprovalForAll { operator, approved } => {
            set_approval_for_all(deps, env, info, operator, approved)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::GetOwner { node } => to_binary(&query_owner(deps, env, node)?),
        QueryMsg::GetResolver { node } => to_binary(&query_resolver(deps, env, node)?),
        QueryMsg::GetTtl { node } => to_binary(&query_ttl(deps, env, node)?),
        QueryMsg::GetRecord { name } => to_binary(&query_record(deps, env, name)?),
        QueryMsg::GetRecordByNode { node } => to_binary(&query_record_by_node(deps, env, node)?),
        QueryMsg::GetRecordExists { node } => to_binary(&query_record_exists(deps, env, node)?),
        QueryMsg::GetIsNodeOwner { node, address } => {
            to_binary(&query_is_node_owner(deps, env, node, address)?)
        }
        QueryMsg::GetIsApprovedForAll { owner, operator } => {
            to_binary(&query_is_approved_for_all(deps, env, owner, operator)?)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(_deps: DepsMut, _env: Env, _msg: MigrateMsg) -> StdResult<Response> {
    Ok(Response::default())
}
