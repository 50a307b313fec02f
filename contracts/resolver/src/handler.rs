use crate::contract::{execute, query};
use crate::error::ContractError;
use crate::state::{
    versioned_node, Config, PublicKey, ADDRESSES, CONFIG, CONTENT_HASHES, NAMES, OPERATORS,
    PUBKEYS, RECORD_VERSIONS, TEXTS,
};
use bns::ownable::query_contract_owner;
use bns::registry::{OwnerResponse as RegistryOwnerResponse, QueryMsg as RegistryQueryMsg};
use bns::resolver::{
    AddrResponse, AddressResponse, ConfigResponse, ContenthashResponse, ExecuteMsg,
    MulticallResponse, NameResponse, OperatorResponse, PubkeyResponse, QueryMsg,
    RecordVersionResponse, SupportsInterfaceResponse, TextResponse, DEFAULT_COIN_TYPE,
};
use bns::utils::{convert_namehash_to_hex_string, or_none};
use cosmwasm_std::{
    from_binary, to_binary, Addr, Api, Binary, CanonicalAddr, Deps, DepsMut, Env, Event,
    MessageInfo, QueryRequest, Response, StdResult, Storage, WasmQuery,
};
use cw_storage_plus::U64Key;

const PUBKEY_COORDINATE_LENGTH: usize = 32;

const INTERFACE_ID_ADDR: u32 = 0x3b3b57de;
const INTERFACE_ID_ADDRESS: u32 = 0xf1cb7e06;
const INTERFACE_ID_NAME: u32 = 0x691f3431;
const INTERFACE_ID_PUBKEY: u32 = 0xc8690233;
const INTERFACE_ID_TEXT: u32 = 0x59d1d43c;
const INTERFACE_ID_CONTENTHASH: u32 = 0xbc1c58d1;
const INTERFACE_ID_SUPPORTS_INTERFACE: u32 = 0x01ffc9a7;

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

fn is_operator(storage: &dyn Storage, owner: &CanonicalAddr, operator: &CanonicalAddr) -> StdResult<bool> {
    Ok(OPERATORS
        .may_load(storage, (owner.to_vec(), operator.to_vec()))?
        .unwrap_or(false))
}

/// The resolver owns nothing itself: the registry's current owner of `node`
/// decides, looking through the name wrapper when it holds the node.
pub fn is_authorised(deps: Deps, node: &[u8], sender: &Addr) -> StdResult<bool> {
    let config = CONFIG.load(deps.storage)?;
    let canonical_sender = deps.api.addr_canonicalize(sender.as_str())?;
    if config.trusted_controller.as_ref() == Some(&canonical_sender)
        || config.trusted_reverse_registrar.as_ref() == Some(&canonical_sender)
    {
        return Ok(true);
    }

    let registry_address = deps.api.addr_humanize(&config.registry_address)?.to_string();
    let response: RegistryOwnerResponse = deps.querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
        contract_addr: registry_address,
        msg: to_binary(&RegistryQueryMsg::GetOwner {
            node: node.to_vec(),
        })?,
    }))?;
    let mut owner = match response.owner {
        Some(owner) => owner,
        None => return Ok(false),
    };

    if let Some(name_wrapper) = config.name_wrapper {
        if deps.api.addr_canonicalize(owner.as_str())? == name_wrapper {
            owner = match query_contract_owner(&deps.querier, &owner)? {
                Some(wrapped_owner) => wrapped_owner,
                None => return Ok(false),
            };
        }
    }

    if owner == *sender {
        return Ok(true);
    }
    let canonical_owner = deps.api.addr_canonicalize(owner.as_str())?;
    is_operator(deps.storage, &canonical_owner, &canonical_sender)
}

fn only_authorized(deps: &DepsMut, info: &MessageInfo, node: &[u8]) -> Result<(), ContractError> {
    if is_authorised(deps.as_ref(), node, &info.sender)? {
        return Ok(());
    }
    Err(ContractError::Unauthorized {
        sender: info.sender.to_string(),
        node: convert_namehash_to_hex_string(node),
    })
}

fn record_version(storage: &dyn Storage, node: &[u8]) -> StdResult<u64> {
    Ok(RECORD_VERSIONS
        .may_load(storage, node.to_vec())?
        .unwrap_or(0))
}

fn current_key(storage: &dyn Storage, node: &[u8]) -> StdResult<Vec<u8>> {
    Ok(versioned_node(node, record_version(storage, node)?))
}

pub fn set_address(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    node: Vec<u8>,
    coin_type: u64,
    address: Binary,
) -> Result<Response, ContractError> {
    only_authorized(&deps, &info, &node)?;
    let key = current_key(deps.storage, &node)?;
    ADDRESSES.save(
        deps.storage,
        (key, U64Key::from(coin_type)),
        &address.to_vec(),
    )?;

    let hex_node = convert_namehash_to_hex_string(&node);
    let mut response = Response::new()
        .add_attribute("method", "set_address")
        .add_event(
            Event::new("address_changed")
                .add_attribute("node", hex_node.clone())
                .add_attribute("coin_type", coin_type.to_string())
                .add_attribute("address", or_none(address.to_base64())),
        );
    // Coin type 60 is the legacy address; both views read the same entry.
    if coin_type == DEFAULT_COIN_TYPE {
        response = response.add_event(
            Event::new("addr_changed")
                .add_attribute("node", hex_node)
                .add_attribute(
                    "address",
                    or_none(String::from_utf8_lossy(&address).to_string()),
                ),
        );
    }
    Ok(response)
}

pub fn set_addr(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    node: Vec<u8>,
    address: String,
) -> Result<Response, ContractError> {
    let address = deps.api.addr_validate(address.as_str())?;
    set_address(
        deps,
        env,
        info,
        node,
        DEFAULT_COIN_TYPE,
        Binary::from(address.as_bytes()),
    )
}

pub fn set_name(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    node: Vec<u8>,
    name: String,
) -> Result<Response, ContractError> {
    only_authorized(&deps, &info, &node)?;
    let key = current_key(deps.storage, &node)?;
    NAMES.save(deps.storage, key, &name)?;
    Ok(Response::new()
        .add_attribute("method", "set_name")
        .add_event(
            Event::new("name_changed")
                .add_attribute("node", convert_namehash_to_hex_string(&node))
                .add_attribute("name", or_none(name)),
        ))
}

pub fn set_pubkey(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    node: Vec<u8>,
    x: Binary,
    y: Binary,
) -> Result<Response, ContractError> {
    only_authorized(&deps, &info, &node)?;
    if x.len() != PUBKEY_COORDINATE_LENGTH || y.len() != PUBKEY_COORDINATE_LENGTH {
        return Err(ContractError::InvalidPubkey {});
    }
    let key = current_key(deps.storage, &node)?;
    PUBKEYS.save(
        deps.storage,
        key,
        &PublicKey {
            x: x.clone(),
            y: y.clone(),
        },
    )?;
    Ok(Response::new()
        .add_attribute("method", "set_pubkey")
        .add_event(
            Event::new("pubkey_changed")
                .add_attribute("node", convert_namehash_to_hex_string(&node))
                .add_attribute("x", hex::encode(x.as_slice()))
                .add_attribute("y", hex::encode(y.as_slice())),
        ))
}

pub fn set_text(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    node: Vec<u8>,
    key: String,
    value: String,
) -> Result<Response, ContractError> {
    only_authorized(&deps, &info, &node)?;
    let record_key = current_key(deps.storage, &node)?;
    let previous_value = TEXTS
        .may_load(deps.storage, (record_key.clone(), key.clone()))?
        .unwrap_or_default();
    TEXTS.save(deps.storage, (record_key, key.clone()), &value)?;
    Ok(Response::new()
        .add_attribute("method", "set_text")
        .add_event(
            Event::new("text_changed")
                .add_attribute("node", convert_namehash_to_hex_string(&node))
                .add_attribute("key", key)
                .add_attribute("previous_value", or_none(previous_value))
                .add_attribute("value", or_none(value)),
        ))
}

pub fn set_contenthash(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    node: Vec<u8>,
    hash: Binary,
) -> Result<Response, ContractError> {
    only_authorized(&deps, &info, &node)?;
    let key = current_key(deps.storage, &node)?;
    CONTENT_HASHES.save(deps.storage, key, &hash.to_vec())?;
    Ok(Response::new()
        .add_attribute("method", "set_contenthash")
        .add_event(
            Event::new("contenthash_changed")
                .add_attribute("node", convert_namehash_to_hex_string(&node))
                .add_attribute("hash", or_none(hex::encode(hash.as_slice()))),
        ))
}

/// Bumps the version; entries written under older versions stay in storage
/// but are no longer reachable.
pub fn clear_records(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    node: Vec<u8>,
) -> Result<Response, ContractError> {
    only_authorized(&deps, &info, &node)?;
    let version = record_version(deps.storage, &node)? + 1;
    RECORD_VERSIONS.save(deps.storage, node.clone(), &version)?;
    Ok(Response::new()
        .add_attribute("method", "clear_records")
        .add_event(
            Event::new("version_changed")
                .add_attribute("node", convert_namehash_to_hex_string(&node))
                .add_attribute("version", version.to_string()),
        ))
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

/// Runs each encoded call through `execute` with the caller's own identity.
/// Any failing call fails the batch.
pub fn multicall(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    expected_node: Option<Vec<u8>>,
    calls: Vec<Binary>,
) -> Result<Response, ContractError> {
    let mut response = Response::new().add_attribute("method", "multicall");
    let mut results = vec![];
    for call in calls {
        let msg: ExecuteMsg = from_binary(&call)?;
        // Under a node check every call must name that node; unbound calls
        // (nested multicalls, approvals, config) are refused.
        if let Some(expected) = &expected_node {
            if msg.node() != Some(expected.as_slice()) {
                return Err(ContractError::NodeMismatch {
                    expected: convert_namehash_to_hex_string(expected),
                    found: or_none(
                        msg.node()
                            .map(convert_namehash_to_hex_string)
                            .unwrap_or_default(),
                    ),
                });
            }
        }
        let res = execute(deps.branch(), env.clone(), info.clone(), msg)?;
        results.push(res.data.unwrap_or_default());
        response = response
            .add_submessages(res.messages)
            .add_attributes(res.attributes)
            .add_events(res.events);
    }
    Ok(response.set_data(to_binary(&MulticallResponse { results })?))
}

#[allow(clippy::too_many_arguments)]
pub fn set_config(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    registry_address: String,
    trusted_controller: Option<String>,
    trusted_reverse_registrar: Option<String>,
    name_wrapper: Option<String>,
    owner: String,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info)?;
    let config = Config {
        registry_address: deps.api.addr_canonicalize(registry_address.as_str())?,
        trusted_controller: canonicalize_option(deps.api, trusted_controller)?,
        trusted_reverse_registrar: canonicalize_option(deps.api, trusted_reverse_registrar)?,
        name_wrapper: canonicalize_option(deps.api, name_wrapper)?,
        owner: deps.api.addr_canonicalize(owner.as_str())?,
    };
    CONFIG.save(deps.storage, &config)?;
    Ok(Response::new()
        .add_attribute("method", "set_config")
        .add_attribute("registry_address", registry_address)
        .add_attribute("owner", owner))
}

pub fn query_address(
    deps: Deps,
    _env: Env,
    node: Vec<u8>,
    coin_type: u64,
) -> StdResult<AddressResponse> {
    let key = current_key(deps.storage, &node)?;
    let address = ADDRESSES
        .may_load(deps.storage, (key, U64Key::from(coin_type)))?
        .unwrap_or_default();
    Ok(AddressResponse {
        address: Binary::from(address),
    })
}

pub fn query_addr(deps: Deps, env: Env, node: Vec<u8>) -> StdResult<AddrResponse> {
    let address = query_address(deps, env, node, DEFAULT_COIN_TYPE)?.address;
    if address.is_empty() {
        return Ok(AddrResponse { address: None });
    }
    Ok(AddrResponse {
        address: String::from_utf8(address.to_vec()).ok().map(Addr::unchecked),
    })
}

pub fn query_name(deps: Deps, _env: Env, node: Vec<u8>) -> StdResult<NameResponse> {
    let key = current_key(deps.storage, &node)?;
    Ok(NameResponse {
        name: NAMES.may_load(deps.storage, key)?.unwrap_or_default(),
    })
}

pub fn query_pubkey(deps: Deps, _env: Env, node: Vec<u8>) -> StdResult<PubkeyResponse> {
    let key = current_key(deps.storage, &node)?;
    match PUBKEYS.may_load(deps.storage, key)? {
        Some(pubkey) => Ok(PubkeyResponse {
            x: pubkey.x,
            y: pubkey.y,
        }),
        None => Ok(PubkeyResponse {
            x: Binary::from(vec![0u8; PUBKEY_COORDINATE_LENGTH]),
            y: Binary::from(vec![0u8; PUBKEY_COORDINATE_LENGTH]),
        }),
    }
}

pub fn query_text(deps: Deps, _env: Env, node: Vec<u8>, key: String) -> StdResult<TextResponse> {
    let record_key = current_key(deps.storage, &node)?;
    Ok(TextResponse {
        value: TEXTS
            .may_load(deps.storage, (record_key, key))?
            .unwrap_or_default(),
    })
}

pub fn query_contenthash(deps: Deps, _env: Env, node: Vec<u8>) -> StdResult<ContenthashResponse> {
    let key = current_key(deps.storage, &node)?;
    let hash = CONTENT_HASHES.may_load(deps.storage, key)?.unwrap_or_default();
    Ok(ContenthashResponse {
        hash: Binary::from(hash),
    })
}

pub fn query_record_version(deps: Deps, _env: Env, node: Vec<u8>) -> StdResult<RecordVersionResponse> {
    Ok(RecordVersionResponse {
        version: record_version(deps.storage, &node)?,
    })
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

pub fn query_supports_interface(interface_id: u32) -> SupportsInterfaceResponse {
    let supported = matches!(
        interface_id,
        INTERFACE_ID_ADDR
            | INTERFACE_ID_ADDRESS
            | INTERFACE_ID_NAME
            | INTERFACE_ID_PUBKEY
            | INTERFACE_ID_TEXT
            | INTERFACE_ID_CONTENTHASH
            | INTERFACE_ID_SUPPORTS_INTERFACE
    );
    SupportsInterfaceResponse { supported }
}

pub fn query_multicall(deps: Deps, env: Env, calls: Vec<Binary>) -> StdResult<MulticallResponse> {
    let results = calls
        .iter()
        .map(|call| {
            let msg: QueryMsg = from_binary(call)?;
            query(deps, env.clone(), msg)
        })
        .collect::<StdResult<Vec<Binary>>>()?;
    Ok(MulticallResponse { results })
}

pub fn get_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        registry_address: deps.api.addr_humanize(&config.registry_address)?,
        trusted_controller: humanize_option(deps.api, &config.trusted_controller)?,
        trusted_reverse_registrar: humanize_option(deps.api, &config.trusted_reverse_registrar)?,
        name_wrapper: humanize_option(deps.api, &config.name_wrapper)?,
        owner: deps.api.addr_humanize(&config.owner)?,
    })
}
