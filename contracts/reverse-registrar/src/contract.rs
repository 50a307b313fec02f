use crate::error::ContractError;
use crate::handler::{
    claim, claim_for_addr, claim_with_resolver, get_config, query_is_controller, query_node,
    set_controller, set_default_resolver, set_name, set_name_for_addr,
};
use crate::state::{Config, CONFIG};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use bns::reverse_registrar::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use cw2::set_contract_version;

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:bns-reverse-registrar";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    let default_resolver = match msg.default_resolver {
        Some(resolver) => Some(deps.api.addr_canonicalize(resolver.as_str())?),
        None => None,
    };
    CONFIG.save(
        deps.storage,
        &Config {
            registry_address: deps.api.addr_canonicalize(msg.registry_address.as_str())?,
            default_resolver,
            owner: deps.api.addr_canonicalize(info.sender.as_str())?,
        },
    )?;
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
        ExecuteMsg::Claim { owner } => claim(deps, env, info, owner),
        ExecuteMsg::ClaimForAddr {
            address,
            owner,
            resolver,
        } => claim_for_addr(deps, env, info, address, owner, resolver),
        ExecuteMsg::ClaimWithResolver { owner, resolver } => {
            claim_with_resolver(deps, env, info, owner, resolver)
        }
        ExecuteMsg::SetName { name } => set_name(deps, env, info, name),
        ExecuteMsg::SetNameForAddr {
            address,
            owner,
            resolver,
            name,
        } => set_name_for_addr(deps, env, info, address, owner, resolver, name),
        ExecuteMsg::SetDefaultResolver { resolver } => {
            set_default_resolver(deps, env, info, resolver)
        }
        ExecuteMsg::SetController {
            controller,
            enabled,
        } => set_controller(deps, env, info, controller, enabled),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Node { address } => to_binary(&query_node(deps, env, address)?),
        QueryMsg::IsController { address } => {
            to_binary(&query_is_controller(deps, env, address)?)
        }
        QueryMsg::GetConfig {} => to_binary(&get_config(deps)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(_deps: DepsMut, _env: Env, _msg: MigrateMsg) -> StdResult<Response> {
    Ok(Response::default())
}
