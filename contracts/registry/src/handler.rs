use crate::error::ContractError;
use crate::state::{Record, OPERATORS, RECORDS};
use bns::registry::{
    OperatorResponse, OwnerResponse, RecordExistsResponse, RecordResponse, ResolverResponse,
    TtlResponse,
};
use bns::utils::{convert_namehash_to_hex_string, namehash, or_none, subnode};
use cosmwasm_std::{
    Addr, Api, CanonicalAddr, Deps, DepsMut, Env, Event, MessageInfo, Response, StdResult, Storage,
};

fn load_record(storage: &dyn Storage, node: &[u8]) -> StdResult<Record> {
    Ok(RECORDS
        .may_load(storage, node.to_vec())?
        .unwrap_or_default())
}

fn canonicalize_option(api: &dyn Api, address: Option<String>) -> StdResult<Option<CanonicalAddr>> {
    address
        .map(|address| api.addr_canonicalize(address.as_str()))
        .transpose()
}

fn humanize_option(api: &dyn Api, address: &Option<CanonicalAddr>) -> StdResult<Option<Addr>> {
    address
        .as_ref()
        .map(|address| api.addr_humanize(address))
        .transpose()
}

fn display(address: &Option<String>) -> String {
    or_none(address.clone().unwrap_or_default())
}

fn is_operator(storage: &dyn Storage, owner: &CanonicalAddr, operator: &CanonicalAddr) -> StdResult<bool> {
    Ok(OPERATORS
        .may_load(storage, (owner.to_vec(), operator.to_vec()))?
        .unwrap_or(false))
}

fn is_authorised(storage: &dyn Storage, node: &[u8], sender: &CanonicalAddr) -> StdResult<bool> {
    let record = load_record(storage, node)?;
    match record.owner {
        Some(owner) => Ok(owner == *sender || is_operator(storage, &owner, sender)?),
        None => Ok(false),
    }
}

fn only_authorized(deps: &DepsMut, info: &MessageInfo, node: &[u8]) -> Result<(), ContractError> {
    let canonical_sender = deps.api.addr_canonicalize(info.sender.as_str())?;
    if is_authorised(deps.storage, node, &canonical_sender)? {
        return Ok(());
    }
    Err(ContractError::Unauthorized {
        sender: info.sender.to_string(),
        node: convert_namehash_to_hex_string(node),
    })
}

fn transfer_event(node: &[u8], owner: &Option<String>) -> Event {
    Event::new("transfer")
        .add_attribute("node", convert_namehash_to_hex_string(node))
        .add_attribute("owner", display(owner))
}

fn new_resolver_event(node: &[u8], resolver: &Option<String>) -> Event {
    Event::new("new_resolver")
        .add_attribute("node", convert_namehash_to_hex_string(node))
        .add_attribute("resolver", display(resolver))
}

fn new_ttl_event(node: &[u8], ttl: u64) -> Event {
    Event::new("new_ttl")
        .add_attribute("node", convert_namehash_to_hex_string(node))
        .add_attribute("ttl", ttl.to_string())
}

fn new_owner_event(node: &[u8], label: &[u8], owner: &Option<String>) -> Event {
    Event::new("new_owner")
        .add_attribute("node", convert_namehash_to_hex_string(node))
        .add_attribute("label", convert_namehash_to_hex_string(label))
        .add_attribute("owner", display(owner))
}

/// Writes resolver and ttl, returning events only for fields that changed.
fn _set_resolver_and_ttl(
    deps: &mut DepsMut,
    node: &[u8],
    resolver: Option<String>,
    ttl: u64,
) -> Result<Vec<Event>, ContractError> {
    let mut record = load_record(deps.storage, node)?;
    let canonical_resolver = canonicalize_option(deps.api, resolver.clone())?;
    let mut events = vec![];
    if record.resolver != canonical_resolver {
        record.resolver = canonical_resolver;
        events.push(new_resolver_event(node, &resolver));
    }
    if record.ttl != ttl {
        record.ttl = ttl;
        events.push(new_ttl_event(node, ttl));
    }
    RECORDS.save(deps.storage, node.to_vec(), &record)?;
    Ok(events)
}

fn _set_owner(deps: &mut DepsMut, node: &[u8], owner: Option<String>) -> Result<(), ContractError> {
    let mut record = load_record(deps.storage, node)?;
    record.owner = canonicalize_option(deps.api, owner)?;
    RECORDS.save(deps.storage, node.to_vec(), &record)?;
    Ok(())
}

fn _set_subnode_owner(
    deps: &mut DepsMut,
    node: &[u8],
    label: &[u8],
    owner: Option<String>,
) -> Result<Vec<u8>, ContractError> {
    let subnode = subnode(node, label);
    _set_owner(deps, &subnode, owner)?;
    Ok(subnode)
}

pub fn set_record(
    mut deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    node: Vec<u8>,
    owner: Option<String>,
    resolver: Option<String>,
    ttl: u64,
) -> Result<Response, ContractError> {
    only_authorized(&deps, &info, &node)?;
    _set_owner(&mut deps, &node, owner.clone())?;
    let events = _set_resolver_and_ttl(&mut deps, &node, resolver, ttl)?;
    Ok(Response::new()
        .add_attribute("method", "set_record")
        .add_event(transfer_event(&node, &owner))
        .add_events(events))
}

#[allow(clippy::too_many_arguments)]
pub fn set_subnode_record(
    mut deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    node: Vec<u8>,
    label: Vec<u8>,
    owner: Option<String>,
    resolver: Option<String>,
    ttl: u64,
) -> Result<Response, ContractError> {
    only_authorized(&deps, &info, &node)?;
    let subnode = _set_subnode_owner(&mut deps, &node, &label, owner.clone())?;
    let events = _set_resolver_and_ttl(&mut deps, &subnode, resolver, ttl)?;
    Ok(Response::new()
        .add_attribute("method", "set_subnode_record")
        .add_attribute("subnode", convert_namehash_to_hex_string(&subnode))
        .add_event(new_owner_event(&node, &label, &owner))
        .add_events(events))
}

pub fn set_subnode_owner(
    mut deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    node: Vec<u8>,
    label: Vec<u8>,
    owner: Option<String>,
) -> Result<Response, ContractError> {
    only_authorized(&deps, &info, &node)?;
    let subnode = _set_subnode_owner(&mut deps, &node, &label, owner.clone())?;
    Ok(Response::new()
        .add_attribute("method", "set_subnode_owner")
        .add_attribute("subnode", convert_namehash_to_hex_string(&subnode))
        .add_event(new_owner_event(&node, &label, &owner))
        .set_data(subnode))
}

pub fn set_owner(
    mut deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    node: Vec<u8>,
    owner: Option<String>,
) -> Result<Response, ContractError> {
    only_authorized(&deps, &info, &node)?;
    _set_owner(&mut deps, &node, owner.clone())?;
    Ok(Response::new()
        .add_attribute("method", "set_owner")
        .add_event(transfer_event(&node, &owner)))
}

pub fn set_resolver(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    node: Vec<u8>,
    resolver: Option<String>,
) -> Result<Response, ContractError> {
    only_authorized(&deps, &info, &node)?;
    let mut record = load_record(deps.storage, &node)?;
    record.resolver = canonicalize_option(deps.api, resolver.clone())?;
    RECORDS.save(deps.storage, node.clone(), &record)?;
    Ok(Response::new()
        .add_attribute("method", "set_resolver")
        .add_event(new_resolver_event(&node, &resolver)))
}

pub fn set_ttl(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    node: Vec<u8>,
    ttl: u64,
) -> Result<Response, ContractError> {
    only_authorized(&deps, &info, &node)?;
    let mut record = load_record(deps.storage, &node)?;
    record.ttl = ttl;
    RECORDS.save(deps.storage, node.clone(), &record)?;
    Ok(Response::new()
        .add_attribute("method", "set_ttl")
        .add_event(new_ttl_event(&node, ttl)))
}

pub fn set_approval_for_all(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    operator: String,
    approved: bool,
) -> Result<Response, ContractError> {
    let sender_address = deps.api.addr_canonicalize(info.sender.as_str())?;
    let operator_address = deps.api.addr_canonicalize(operator.as_str())?;
    if sender_address == operator_address {
        return Err(ContractError::SelfApproval { operator });
    }
    OPERATORS.save(
        deps.storage,
        (sender_address.to_vec(), operator_address.to_vec()),
        &approved,
    )?;

    Ok(Response::new()
        .add_attribute("method", "set_approval_for_all")
        .add_event(
            Event::new("approval_for_all")
                .add_attribute("owner", info.sender)
                .add_attribute("operator", operator)
                .add_attribute("approved", approved.to_string()),
        ))
}

pub fn query_owner(deps: Deps, _env: Env, node: Vec<u8>) -> StdResult<OwnerResponse> {
    let record = load_record(deps.storage, &node)?;
    Ok(OwnerResponse {
        owner: humanize_option(deps.api, &record.owner)?,
    })
}

pub fn query_resolver(deps: Deps, _env: Env, node: Vec<u8>) -> StdResult<ResolverResponse> {
    let record = load_record(deps.storage, &node)?;
    Ok(ResolverResponse {
        resolver: humanize_option(deps.api, &record.resolver)?,
    })
}

pub fn query_ttl(deps: Deps, _env: Env, node: Vec<u8>) -> StdResult<TtlResponse> {
    let record = load_record(deps.storage, &node)?;
    Ok(TtlResponse { ttl: record.ttl })
}

pub fn query_record_by_node(deps: Deps, _env: Env, node: Vec<u8>) -> StdResult<RecordResponse> {
    let record = load_record(deps.storage, &node)?;
    Ok(RecordResponse {
        owner: humanize_option(deps.api, &record.owner)?,
        resolver: humanize_option(deps.api, &record.resolver)?,
        ttl: record.ttl,
    })
}

pub fn query_record(deps: Deps, env: Env, name: String) -> StdResult<RecordResponse> {
    query_record_by_node(deps, env, namehash(name.as_str()))
}

pub fn query_record_exists(deps: Deps, _env: Env, node: Vec<u8>) -> StdResult<RecordExistsResponse> {
    let record = load_record(deps.storage, &node)?;
    Ok(RecordExistsResponse {
        exists: record.owner.is_some(),
    })
}

pub fn query_is_node_owner(deps: Deps, _env: Env, node: Vec<u8>, address: String) -> StdResult<bool> {
    let canonical_sender = deps.api.addr_canonicalize(&address)?;
    is_authorised(deps.storage, &node, &canonical_sender)
}

pub fn query_is_approved_for_all(
    deps: Deps,
    _env: Env,
    owner: String,
    operator: String,
) -> StdResult<OperatorResponse> {
    let owner_address = deps.api.addr_canonicalize(owner.as_str())?;
    let operator_address = deps.api.addr_canonicalize(operator.as_str())?;
    Ok(OperatorResponse {
        is_approve: is_operator(deps.storage, &owner_address, &operator_address)?,
    })
}
