use crate::error::ContractError;
use crate::handler::{burn, reclaim, register, set_config, transfer_from};
use crate::query::{
    get_config, query_balance_of, query_base_node, query_is_available, query_registry,
    query_token_id,
};
use crate::state::{Config, CONFIG, CONTRACT_INFO};
use crate::token::NameTokens;
use crate::utils::decode_node_string_to_bytes;
use bns::registrar::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use bns::utils::namehash;
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use cw2::set_contract_version;
use cw721::{ContractInfoResponse, Cw721Execute, Cw721Query};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:bns-registrar";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    let base_node = decode_node_string_to_bytes(msg.base_node)
        .map_err(|_| ContractError::BytesFormatError {})?;
    if namehash(&msg.base_name) != base_node {
        return Err(ContractError::NameAndHashNotMatch {});
    }

    let config = Config {
        registry_address: deps.api.addr_canonicalize(msg.registry_address.as_str())?,
        reverse_registrar: msg
            .reverse_registrar
            .map(|reverse_registrar| deps.api.addr_canonicalize(reverse_registrar.as_str()))
            .transpose()?,
        owner: deps.api.addr_canonicalize(info.sender.as_str())?,
        base_node,
        base_name: msg.base_name,
    };
    CONFIG.save(deps.storage, &config)?;
    CONTRACT_INFO.save(
        deps.storage,
        &ContractInfoResponse {
            name: msg.name,
            symbol: msg.symbol,
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
        ExecuteMsg::Register {
            label,
            owner,
            resolver_setup_calls,
            resolver,
        } => register(deps, env, info, label, owner, resolver_setup_calls, resolver, true),
        ExecuteMsg::RegisterOnly {
            label,
            owner,
            resolver_setup_calls,
            resolver,
        } => register(deps, env, info, label, owner, resolver_setup_calls, resolver, false),
        ExecuteMsg::Reclaim { id, owner } => reclaim(deps, env, info, id, owner),
        ExecuteMsg::SetConfig {
            registry_address,
            reverse_registrar,
            owner,
        } => set_config(deps, env, info, registry_address, reverse_registrar, owner),
        ExecuteMsg::TransferFrom { from, to, token_id } => {
            transfer_from(deps, env, info, from, to, token_id)
        }
        ExecuteMsg::TransferNft {
            recipient,
            token_id,
        } => NameTokens.transfer_nft(deps, env, info, recipient, token_id),
        ExecuteMsg::SendNft {
            contract,
            token_id,
            msg,
        } => NameTokens.send_nft(deps, env, info, contract, token_id, msg),
        ExecuteMsg::Approve {
            spender,
            token_id,
            expires,
        } => NameTokens.approve(deps, env, info, spender, token_id, expires),
        ExecuteMsg::Revoke { spender, token_id } => {
            NameTokens.revoke(deps, env, info, spender, token_id)
        }
        ExecuteMsg::ApproveAll { operator, expires } => {
            NameTokens.approve_all(deps, env, info, operator, expires)
        }
        ExecuteMsg::RevokeAll { operator } => NameTokens.revoke_all(deps, env, info, operator),
        ExecuteMsg::Burn { token_id } => burn(deps, env, info, token_id),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::IsAvailable { id } => to_binary(&query_is_available(deps, id)?),
        QueryMsg::GetTokenId { label } => to_binary(&query_token_id(label)),
        QueryMsg::GetBaseNode {} => to_binary(&query_base_node(deps)?),
        QueryMsg::GetRegistry {} => to_binary(&query_registry(deps)?),
        QueryMsg::GetConfig {} => to_binary(&get_config(deps)?),
        QueryMsg::BalanceOf { owner } => to_binary(&query_balance_of(deps, owner)?),
        QueryMsg::OwnerOf {
            token_id,
            include_expired,
        } => to_binary(&NameTokens.owner_of(
            deps,
            env,
            token_id,
            include_expired.unwrap_or(false),
        )?),
        QueryMsg::ApprovedForAll {
            owner,
            include_expired,
            start_after,
            limit,
        } => to_binary(&NameTokens.all_approvals(
            deps,
            env,
            owner,
            include_expired.unwrap_or(false),
            start_after,
            limit,
        )?),
        QueryMsg::NumTokens {} => to_binary(&NameTokens.num_tokens(deps)?),
        QueryMsg::ContractInfo {} => to_binary(&NameTokens.contract_info(deps)?),
        QueryMsg::NftInfo { token_id } => to_binary(&NameTokens.nft_info(deps, token_id)?),
        QueryMsg::AllNftInfo {
            token_id,
            include_expired,
        } => to_binary(&NameTokens.all_nft_info(
            deps,
            env,
            token_id,
            include_expired.unwrap_or(false),
        )?),
        QueryMsg::Tokens {
            owner,
            start_after,
            limit,
        } => to_binary(&NameTokens.tokens(deps, owner, start_after, limit)?),
        QueryMsg::AllTokens { start_after, limit } => {
            to_binary(&NameTokens.all_tokens(deps, start_after, limit)?)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(_deps: DepsMut, _env: Env, _msg: MigrateMsg) -> StdResult<Response> {
    Ok(Response::default())
}
