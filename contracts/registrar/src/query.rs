use crate::state::{token_count, tokens, NameToken, CONFIG, CONTRACT_INFO, OPERATORS};
use crate::token::NameTokens;
use crate::utils::encode_node_bytes_to_string;
use bns::registrar::{
    BalanceResponse, ConfigResponse, GetBaseNodeResponse, GetRegistryResponse,
    IsAvailableResponse, NameMetadata, TokenIdResponse,
};
use bns::utils::{convert_namehash_to_hex_string, get_label_from_name, get_token_id_from_label, namehash};
use cosmwasm_std::{BlockInfo, Deps, Env, Order, StdError, StdResult};
use cw0::maybe_addr;
use cw721::{
    AllNftInfoResponse, Approval, ApprovedForAllResponse, ContractInfoResponse, Cw721Query,
    NftInfoResponse, NumTokensResponse, OwnerOfResponse, TokensResponse,
};
use cw_storage_plus::Bound;

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

fn page_size(limit: Option<u32>) -> usize {
    limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize
}

fn visible_approvals(block: &BlockInfo, token: &NameToken, include_expired: bool) -> Vec<Approval> {
    token
        .approvals
        .iter()
        .filter(|approval| include_expired || !approval.expires.is_expired(block))
        .map(|approval| Approval {
            spender: approval.spender.to_string(),
            expires: approval.expires,
        })
        .collect()
}

fn utf8_keys(keys: Vec<Vec<u8>>) -> StdResult<Vec<String>> {
    keys.into_iter()
        .map(|key| String::from_utf8(key).map_err(StdError::invalid_utf8))
        .collect()
}

impl Cw721Query<NameMetadata> for NameTokens {
    fn contract_info(&self, deps: Deps) -> StdResult<ContractInfoResponse> {
        CONTRACT_INFO.load(deps.storage)
    }

    fn num_tokens(&self, deps: Deps) -> StdResult<NumTokensResponse> {
        Ok(NumTokensResponse {
            count: token_count(deps.storage)?,
        })
    }

    fn nft_info(&self, deps: Deps, token_id: String) -> StdResult<NftInfoResponse<NameMetadata>> {
        let token = tokens().load(deps.storage, &token_id)?;
        Ok(NftInfoResponse {
            token_uri: None,
            extension: NameMetadata {
                node: convert_namehash_to_hex_string(&namehash(&token.name)),
                name: token.name,
            },
        })
    }

    fn owner_of(
        &self,
        deps: Deps,
        env: Env,
        token_id: String,
        include_expired: bool,
    ) -> StdResult<OwnerOfResponse> {
        let token = tokens().load(deps.storage, &token_id)?;
        Ok(OwnerOfResponse {
            owner: token.owner.to_string(),
            approvals: visible_approvals(&env.block, &token, include_expired),
        })
    }

    fn all_approvals(
        &self,
        deps: Deps,
        env: Env,
        owner: String,
        include_expired: bool,
        start_after: Option<String>,
        limit: Option<u32>,
    ) -> StdResult<ApprovedForAllResponse> {
        let owner = deps.api.addr_validate(&owner)?;
        let start = maybe_addr(deps.api, start_after)?.map(|addr| Bound::exclusive(addr.as_str()));

        let operators: StdResult<Vec<Approval>> = OPERATORS
            .prefix(&owner)
            .range(deps.storage, start, None, Order::Ascending)
            .filter(|item| match item {
                Ok((_, expires)) => include_expired || !expires.is_expired(&env.block),
                Err(_) => true,
            })
            .take(page_size(limit))
            .map(|item| {
                let (operator, expires) = item?;
                Ok(Approval {
                    spender: String::from_utf8(operator)?,
                    expires,
                })
            })
            .collect();
        Ok(ApprovedForAllResponse {
            operators: operators?,
        })
    }

    fn tokens(
        &self,
        deps: Deps,
        owner: String,
        start_after: Option<String>,
        limit: Option<u32>,
    ) -> StdResult<TokensResponse> {
        let owner = deps.api.addr_validate(&owner)?;
        let start = start_after.map(Bound::exclusive);
        let keys: Vec<Vec<u8>> = tokens()
            .idx
            .owner
            .prefix(owner)
            .keys(deps.storage, start, None, Order::Ascending)
            .take(page_size(limit))
            .collect();
        Ok(TokensResponse {
            tokens: utf8_keys(keys)?,
        })
    }

    fn all_tokens(
        &self,
        deps: Deps,
        start_after: Option<String>,
        limit: Option<u32>,
    ) -> StdResult<TokensResponse> {
        let start = start_after.map(Bound::exclusive);
        let keys: StdResult<Vec<Vec<u8>>> = tokens()
            .range(deps.storage, start, None, Order::Ascending)
            .take(page_size(limit))
            .map(|item| item.map(|(key, _)| key))
            .collect();
        Ok(TokensResponse {
            tokens: utf8_keys(keys?)?,
        })
    }

    fn all_nft_info(
        &self,
        deps: Deps,
        env: Env,
        token_id: String,
        include_expired: bool,
    ) -> StdResult<AllNftInfoResponse<NameMetadata>> {
        Ok(AllNftInfoResponse {
            access: self.owner_of(deps, env, token_id.clone(), include_expired)?,
            info: self.nft_info(deps, token_id)?,
        })
    }
}

pub fn query_balance_of(deps: Deps, owner: String) -> StdResult<BalanceResponse> {
    let owner = deps.api.addr_validate(&owner)?;
    let count = tokens()
        .idx
        .owner
        .prefix(owner)
        .keys(deps.storage, None, None, Order::Ascending)
        .count();
    Ok(BalanceResponse {
        count: count as u64,
    })
}

pub fn query_is_available(deps: Deps, id: String) -> StdResult<IsAvailableResponse> {
    Ok(IsAvailableResponse {
        available: tokens().may_load(deps.storage, &id)?.is_none(),
    })
}

pub fn query_token_id(label: String) -> TokenIdResponse {
    TokenIdResponse {
        token_id: get_token_id_from_label(&get_label_from_name(&label)),
    }
}

pub fn query_base_node(deps: Deps) -> StdResult<GetBaseNodeResponse> {
    let base_node = CONFIG.load(deps.storage)?.base_node;
    Ok(GetBaseNodeResponse {
        base_node: encode_node_bytes_to_string(base_node),
    })
}

pub fn query_registry(deps: Deps) -> StdResult<GetRegistryResponse> {
    let registry_address = CONFIG.load(deps.storage)?.registry_address;
    Ok(GetRegistryResponse {
        registry: deps.api.addr_humanize(&registry_address)?,
    })
}

pub fn get_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        registry_address: deps.api.addr_humanize(&config.registry_address)?,
        reverse_registrar: config
            .reverse_registrar
            .map(|reverse_registrar| deps.api.addr_humanize(&reverse_registrar))
            .transpose()?,
        owner: deps.api.addr_humanize(&config.owner)?,
        base_node: config.base_node,
        base_name: config.base_name,
    })
}
