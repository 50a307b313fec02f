use cosmwasm_std::{to_binary, Addr, QuerierWrapper, QueryRequest, StdResult, WasmQuery};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Query every ownable contract answers. The resolver uses it to look through
/// a wrapper owner, the reverse registrar to let a contract's owner claim on
/// its behalf.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum OwnableQueryMsg {
    Owner {},
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct OwnerResponse {
    pub owner: Addr,
}

/// Owner reported by `contract`, or None when it is not a contract or does not
/// answer the ownable query.
pub fn query_contract_owner(querier: &QuerierWrapper, contract: &Addr) -> StdResult<Option<Addr>> {
    let request = QueryRequest::Wasm(WasmQuery::Smart {
        contract_addr: contract.to_string(),
        msg: to_binary(&OwnableQueryMsg::Owner {})?,
    });
    let response: StdResult<OwnerResponse> = querier.query(&request);
    Ok(response.ok().map(|res| res.owner))
}
