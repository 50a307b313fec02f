use bns::registry::{OwnerResponse, QueryMsg as RegistryQueryMsg};
use cosmwasm_std::testing::{MockApi, MockQuerier, MockStorage, MOCK_CONTRACT_ADDR};
use cosmwasm_std::{
    from_binary, from_slice, to_binary, Addr, Coin, ContractResult, Empty, OwnedDeps, Querier,
    QuerierResult, QueryRequest, SystemError, SystemResult, WasmQuery,
};
use std::collections::HashMap;

pub fn mock_dependencies(
    contract_balance: &[Coin],
) -> OwnedDeps<MockStorage, MockApi, WasmMockQuerier> {
    let custom_querier: WasmMockQuerier =
        WasmMockQuerier::new(MockQuerier::new(&[(MOCK_CONTRACT_ADDR, contract_balance)]));

    OwnedDeps {
        storage: MockStorage::default(),
        api: MockApi::default(),
        querier: custom_querier,
    }
}

/// Registry stand-in that only knows node owners.
pub struct WasmMockQuerier {
    base: MockQuerier<Empty>,
    node_owners: HashMap<Vec<u8>, String>,
}

impl Querier for WasmMockQuerier {
    fn raw_query(&self, bin_request: &[u8]) -> QuerierResult {
        let request: QueryRequest<Empty> = match from_slice(bin_request) {
            Ok(v) => v,
            Err(e) => {
                return SystemResult::Err(SystemError::InvalidRequest {
                    error: format!("Parsing query request: {}", e),
                    request: bin_request.into(),
                })
            }
        };
        self.handle_query(&request)
    }
}

impl WasmMockQuerier {
    pub fn new(base: MockQuerier<Empty>) -> Self {
        WasmMockQuerier {
            base,
            node_owners: HashMap::new(),
        }
    }

    pub fn set_node_owner(&mut self, node: Vec<u8>, owner: &str) {
        self.node_owners.insert(node, owner.to_string());
    }

    pub fn handle_query(&self, request: &QueryRequest<Empty>) -> QuerierResult {
        match request {
            QueryRequest::Wasm(WasmQuery::Smart { msg, .. }) => {
                match from_binary::<RegistryQueryMsg>(msg) {
                    Ok(RegistryQueryMsg::GetOwner { node }) => SystemResult::Ok(
                        ContractResult::Ok(
                            to_binary(&OwnerResponse {
                                owner: self.node_owners.get(&node).map(Addr::unchecked),
                            })
                            .unwrap(),
                        ),
                    ),
                    _ => SystemResult::Err(SystemError::UnsupportedRequest {
                        kind: String::from("registry query"),
                    }),
                }
            }
            _ => self.base.handle_query(request),
        }
    }
}
