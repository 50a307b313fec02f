use crate::error::ContractError;
use crate::state::{CONFIG, CONTROLLERS};
use bns::ownable::query_contract_owner;
use bns::registry::{
    ExecuteMsg as RegistryExecuteMsg, OperatorResponse, QueryMsg as RegistryQueryMsg,
};
use bns::resolver::ExecuteMsg as ResolverExecuteMsg;
use bns::reverse_registrar::{ConfigResponse, IsControllerResponse, NodeResponse};
use bns::utils::{
    convert_namehash_to_hex_string, get_label_from_name, namehash, reverse_label, reverse_node,
    ADDR_REVERSE_NAME,
};
use cosmwasm_std::{
    to_binary, Addr, CosmosMsg, Deps, DepsMut, Env, Event, MessageInfo, QueryRequest, Response,
    StdResult, WasmMsg, WasmQuery,
};

fn only_owner(deps: Deps, env: &Env, info: &MessageInfo) -> Result<(), ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let sender = deps.api.addr_canonicalize(info.sender.as_str())?;
    if sender != config.owner {
        return Err(ContractError::Unauthorized {
            sender: info.sender.to_string(),
            address: env.contract.address.to_string(),
        });
    }
    Ok(())
}

fn is_controller(deps: Deps, address: &Addr) -> StdResult<bool> {
    let canonical = deps.api.addr_canonicalize(address.as_str())?;
    Ok(CONTROLLERS
        .may_load(deps.storage, canonical.to_vec())?
        .unwrap_or(false))
}

/// `sender` may act for `address` when it is the address itself, a
/// controller, a registry operator of the address, or the owner reported by
/// the address when that is an ownable contract.
pub fn is_authorised(deps: Deps, sender: &Addr, address: &Addr) -> StdResult<bool> {
    if sender == address || is_controller(deps, sender)? {
        return Ok(true);
    }

    let config = CONFIG.load(deps.storage)?;
    let registry_address = deps.api.addr_humanize(&config.registry_address)?.to_string();
    let approval: OperatorResponse = deps.querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
        contract_addr: registry_address,
        msg: to_binary(&RegistryQueryMsg::GetIsApprovedForAll {
            owner: address.to_string(),
            operator: sender.to_string(),
        })?,
    }))?;
    if approval.is_approve {
        return Ok(true);
    }

    Ok(query_contract_owner(&deps.querier, address)?.as_ref() == Some(sender))
}

fn only_authorized(deps: Deps, info: &MessageInfo, address: &Addr) -> Result<(), ContractError> {
    if is_authorised(deps, &info.sender, address)? {
        return Ok(());
    }
    Err(ContractError::Unauthorized {
        sender: info.sender.to_string(),
        address: address.to_string(),
    })
}

struct Claim {
    node: Vec<u8>,
    label: Vec<u8>,
    message: CosmosMsg,
    event: Event,
}

/// Builds the registry write handing the reverse node of `address` to
/// `owner`, after checking the sender may act for `address`.
fn _claim_for_addr(
    deps: Deps,
    info: &MessageInfo,
    address: String,
    owner: String,
    resolver: Option<String>,
) -> Result<Claim, ContractError> {
    let address = deps.api.addr_validate(address.as_str())?;
    only_authorized(deps, info, &address)?;
    let owner = deps.api.addr_validate(owner.as_str())?;
    let resolver = resolver
        .map(|resolver| deps.api.addr_validate(resolver.as_str()))
        .transpose()?;

    let config = CONFIG.load(deps.storage)?;
    let canonical_address = deps.api.addr_canonicalize(address.as_str())?;
    let node = reverse_node(canonical_address.as_slice());
    let label = get_label_from_name(&reverse_label(canonical_address.as_slice()));

    let message = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: deps.api.addr_humanize(&config.registry_address)?.to_string(),
        msg: to_binary(&RegistryExecuteMsg::SetSubnodeRecord {
            node: namehash(ADDR_REVERSE_NAME),
            label: label.clone(),
            owner: Some(owner.to_string()),
            resolver: resolver.map(|resolver| resolver.to_string()),
            ttl: 0,
        })?,
        funds: vec![],
    });
    let event = Event::new("reverse_claimed")
        .add_attribute("address", address)
        .add_attribute("node", convert_namehash_to_hex_string(&node));

    Ok(Claim {
        node,
        label,
        message,
        event,
    })
}

fn default_resolver(deps: Deps) -> StdResult<Option<String>> {
    let config = CONFIG.load(deps.storage)?;
    config
        .default_resolver
        .map(|resolver| deps.api.addr_humanize(&resolver).map(|r| r.to_string()))
        .transpose()
}

pub fn claim(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    owner: String,
) -> Result<Response, ContractError> {
    let resolver = default_resolver(deps.as_ref())?;
    let claim = _claim_for_addr(deps.as_ref(), &info, info.sender.to_string(), owner, resolver)?;
    Ok(Response::new()
        .add_attribute("method", "claim")
        .add_message(claim.message)
        .add_event(claim.event)
        .set_data(claim.node))
}

pub fn claim_for_addr(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    address: String,
    owner: String,
    resolver: String,
) -> Result<Response, ContractError> {
    let claim = _claim_for_addr(deps.as_ref(), &info, address, owner, Some(resolver))?;
    Ok(Response::new()
        .add_attribute("method", "claim_for_addr")
        .add_message(claim.message)
        .add_event(claim.event)
        .set_data(claim.node))
}

pub fn claim_with_resolver(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    owner: String,
    resolver: String,
) -> Result<Response, ContractError> {
    let address = info.sender.to_string();
    let claim = _claim_for_addr(deps.as_ref(), &info, address, owner, Some(resolver))?;
    Ok(Response::new()
        .add_attribute("method", "claim_with_resolver")
        .add_message(claim.message)
        .add_event(claim.event)
        .set_data(claim.node))
}

pub fn set_name(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    name: String,
) -> Result<Response, ContractError> {
    let resolver = match default_resolver(deps.as_ref())? {
        Some(resolver) => resolver,
        None => return Err(ContractError::DefaultResolverNotSet {}),
    };
    let sender = info.sender.to_string();
    set_name_for_addr(deps, env, info, sender.clone(), sender, resolver, name)
}

/// Claims the reverse node for this contract, writes the name on
/// `resolver`, then hands the node to `owner`. Holding the node while the
/// name is written lets any resolver accept it.
pub fn set_name_for_addr(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    address: String,
    owner: String,
    resolver: String,
    name: String,
) -> Result<Response, ContractError> {
    let owner = deps.api.addr_validate(owner.as_str())?;
    let claim = _claim_for_addr(
        deps.as_ref(),
        &info,
        address,
        env.contract.address.to_string(),
        Some(resolver.clone()),
    )?;
    let set_name_message = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: resolver,
        msg: to_binary(&ResolverExecuteMsg::SetName {
            node: claim.node.clone(),
            name: name.clone(),
        })?,
        funds: vec![],
    });

    let config = CONFIG.load(deps.storage)?;
    let hand_over_message = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: deps.api.addr_humanize(&config.registry_address)?.to_string(),
        msg: to_binary(&RegistryExecuteMsg::SetSubnodeOwner {
            node: namehash(ADDR_REVERSE_NAME),
            label: claim.label,
            owner: Some(owner.to_string()),
        })?,
        funds: vec![],
    });
    Ok(Response::new()
        .add_attribute("method", "set_name_for_addr")
        .add_attribute("name", name)
        .add_attribute("owner", owner)
        .add_message(claim.message)
        .add_message(set_name_message)
        .add_message(hand_over_message)
        .add_event(claim.event)
        .set_data(claim.node))
}

pub fn set_default_resolver(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    resolver: String,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &env, &info)?;
    let mut config = CONFIG.load(deps.storage)?;
    config.default_resolver = Some(deps.api.addr_canonicalize(resolver.as_str())?);
    CONFIG.save(deps.storage, &config)?;
    Ok(Response::new()
        .add_attribute("method", "set_default_resolver")
        .add_event(Event::new("default_resolver_changed").add_attribute("resolver", resolver)))
}

pub fn set_controller(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    controller: String,
    enabled: bool,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &env, &info)?;
    let canonical_controller = deps.api.addr_canonicalize(controller.as_str())?;
    CONTROLLERS.save(deps.storage, canonical_controller.to_vec(), &enabled)?;
    Ok(Response::new()
        .add_attribute("method", "set_controller")
        .add_event(
            Event::new("controller_changed")
                .add_attribute("controller", controller)
                .add_attribute("enabled", enabled.to_string()),
        ))
}

pub fn query_node(deps: Deps, _env: Env, address: String) -> StdResult<NodeResponse> {
    let canonical = deps.api.addr_canonicalize(address.as_str())?;
    Ok(NodeResponse {
        node: reverse_node(canonical.as_slice()),
    })
}

pub fn query_is_controller(deps: Deps, _env: Env, address: String) -> StdResult<IsControllerResponse> {
    let address = deps.api.addr_validate(address.as_str())?;
    Ok(IsControllerResponse {
        is_controller: is_controller(deps, &address)?,
    })
}

pub fn get_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        registry_address: deps.api.addr_humanize(&config.registry_address)?,
        default_resolver: config
            .default_resolver
            .map(|resolver| deps.api.addr_humanize(&resolver))
            .transpose()?,
        owner: deps.api.addr_humanize(&config.owner)?,
    })
}
