use crate::error::ContractError;
use crate::state::{decrement_token_count, increment_token_count, tokens, NameToken, CONFIG};
use crate::token::{can_send, hand_over, load_sendable};
use crate::utils::validate_label;
use bns::registry::ExecuteMsg as RegistryExecuteMsg;
use bns::resolver::ExecuteMsg as ResolverExecuteMsg;
use bns::reverse_registrar::ExecuteMsg as ReverseRegistrarExecuteMsg;
use bns::utils::{
    convert_namehash_to_hex_string, get_label_from_name, get_label_from_token_id,
    get_token_id_from_label, or_none, subnode,
};
use cosmwasm_std::{
    to_binary, Binary, CosmosMsg, Deps, DepsMut, Env, MessageInfo, Response, Storage, WasmMsg,
};

fn only_owner(deps: Deps, info: &MessageInfo) -> Result<(), ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let sender = deps.api.addr_canonicalize(info.sender.as_str())?;
    if sender != config.owner {
        return Err(ContractError::NotOwner {
            sender: info.sender.to_string(),
            owner: deps.api.addr_humanize(&config.owner)?.to_string(),
        });
    }
    Ok(())
}

fn mint(storage: &mut dyn Storage, token_id: &str, token: NameToken) -> Result<(), ContractError> {
    tokens().update(storage, token_id, |existing| match existing {
        Some(_) => Err(ContractError::AlreadyRegistered {
            token_id: token_id.to_string(),
        }),
        None => Ok(token),
    })?;
    increment_token_count(storage)?;
    Ok(())
}

/// Mints `label` to `owner`. With `sync_registry` the registry record and
/// the reverse record are written too; without it token and registry
/// diverge until `reclaim`.
#[allow(clippy::too_many_arguments)]
pub fn register(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    label: String,
    owner: String,
    resolver_setup_calls: Vec<Binary>,
    resolver: String,
    sync_registry: bool,
) -> Result<Response, ContractError> {
    validate_label(&label)?;
    let owner = deps.api.addr_validate(owner.as_str())?;
    let resolver = deps.api.addr_validate(resolver.as_str())?;
    let config = CONFIG.load(deps.storage)?;

    let label_hash = get_label_from_name(&label);
    let token_id = get_token_id_from_label(&label_hash);
    let name = format!("{}.{}", label, config.base_name);
    let node = subnode(&config.base_node, &label_hash);
    mint(
        deps.storage,
        &token_id,
        NameToken {
            owner: owner.clone(),
            approvals: vec![],
            name: name.clone(),
        },
    )?;

    let mut messages: Vec<CosmosMsg> = vec![];
    if sync_registry {
        messages.push(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: deps.api.addr_humanize(&config.registry_address)?.to_string(),
            msg: to_binary(&RegistryExecuteMsg::SetSubnodeRecord {
                node: config.base_node.clone(),
                label: label_hash,
                owner: Some(owner.to_string()),
                resolver: Some(resolver.to_string()),
                ttl: 0,
            })?,
            funds: vec![],
        }));
    }
    if !resolver_setup_calls.is_empty() {
        messages.push(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: resolver.to_string(),
            msg: to_binary(&ResolverExecuteMsg::MulticallWithNodeCheck {
                node: node.clone(),
                calls: resolver_setup_calls,
            })?,
            funds: vec![],
        }));
    }
    if let (true, Some(reverse_registrar)) = (sync_registry, &config.reverse_registrar) {
        messages.push(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: deps.api.addr_humanize(reverse_registrar)?.to_string(),
            msg: to_binary(&ReverseRegistrarExecuteMsg::SetNameForAddr {
                address: owner.to_string(),
                owner: owner.to_string(),
                resolver: resolver.to_string(),
                name: name.clone(),
            })?,
            funds: vec![],
        }));
    }

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("method", if sync_registry { "register" } else { "register_only" })
        .add_attribute("name", name)
        .add_attribute("owner", owner)
        .add_attribute("token_id", token_id)
        .add_attribute("node", convert_namehash_to_hex_string(&node))
        .set_data(node))
}

/// Points the registry record of token `id` at `owner`.
pub fn reclaim(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    id: String,
    owner: String,
) -> Result<Response, ContractError> {
    load_sendable(deps.as_ref(), &env, &info, &id)?;
    let owner = deps.api.addr_validate(owner.as_str())?;
    let label = get_label_from_token_id(&id).map_err(|_| ContractError::BytesFormatError {})?;

    let config = CONFIG.load(deps.storage)?;
    let registry_address = deps.api.addr_humanize(&config.registry_address)?;
    let set_subnode_owner_registry_msg: CosmosMsg = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: registry_address.to_string(),
        msg: to_binary(&RegistryExecuteMsg::SetSubnodeOwner {
            node: config.base_node,
            label,
            owner: Some(owner.to_string()),
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(set_subnode_owner_registry_msg)
        .add_attribute("method", "reclaim")
        .add_attribute("id", id)
        .add_attribute("owner", owner))
}

/// Moves the token only; the registry keeps its owner until `reclaim`.
pub fn transfer_from(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    from: String,
    to: String,
    token_id: String,
) -> Result<Response, ContractError> {
    let token = tokens().load(deps.storage, &token_id)?;
    let from_address = deps.api.addr_validate(from.as_str())?;
    if token.owner != from_address || !can_send(deps.storage, &env.block, &info.sender, &token)? {
        return Err(ContractError::NotOwner {
            sender: info.sender.to_string(),
            owner: token.owner.to_string(),
        });
    }
    hand_over(deps, &token_id, token, &to)?;

    Ok(Response::new()
        .add_attribute("method", "transfer_from")
        .add_attribute("sender", info.sender)
        .add_attribute("from", from)
        .add_attribute("to", to)
        .add_attribute("token_id", token_id))
}

pub fn burn(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token_id: String,
) -> Result<Response, ContractError> {
    load_sendable(deps.as_ref(), &env, &info, &token_id)?;
    tokens().remove(deps.storage, &token_id)?;
    decrement_token_count(deps.storage)?;

    Ok(Response::new()
        .add_attribute("method", "burn")
        .add_attribute("sender", info.sender)
        .add_attribute("token_id", token_id))
}

pub fn set_config(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    registry_address: String,
    reverse_registrar: Option<String>,
    owner: String,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info)?;
    let mut config = CONFIG.load(deps.storage)?;

    config.registry_address = deps.api.addr_canonicalize(registry_address.as_str())?;
    config.reverse_registrar = reverse_registrar
        .as_ref()
        .map(|reverse_registrar| deps.api.addr_canonicalize(reverse_registrar.as_str()))
        .transpose()?;
    config.owner = deps.api.addr_canonicalize(owner.as_str())?;

    CONFIG.save(deps.storage, &config)?;
    Ok(Response::new()
        .add_attribute("method", "set_config")
        .add_attribute("registry_address", registry_address)
        .add_attribute("reverse_registrar", or_none(reverse_registrar.unwrap_or_default()))
        .add_attribute("owner", owner))
}
