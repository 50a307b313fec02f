use bns::ownable::{OwnableQueryMsg, OwnerResponse as OwnableOwnerResponse};
use bns::registry::{OperatorResponse, OwnerResponse, QueryMsg as RegistryQueryMsg};
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

/// Answers registry queries from in-memory tables, and the ownable query for
/// contracts registered with `set_contract_owner`.
pub struct WasmMockQuerier {
    base: MockQuerier<Empty>,
    node_owners: HashMap<Vec<u8>, String>,
    operators: HashMap<(String, String), bool>,
    contract_owners: HashMap<String, String>,
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
            operators: HashMap::new(),
            contract_owners: HashMap::new(),
        }
    }

    pub fn set_node_owner(&mut self, node: Vec<u8>, owner: &str) {
        self.node_owners.insert(node, owner.to_string());
    }

    pub fn set_registry_operator(&mut self, owner: &str, operator: &str, approved: bool) {
        self.operators
            .insert((owner.to_string(), operator.to_string()), approved);
    }

    pub fn set_contract_owner(&mut self, contract: &str, owner: &str) {
        self.contract_owners
            .insert(contract.to_string(), owner.to_string());
    }

    pub fn handle_query(&self, request: &QueryRequest<Empty>) -> QuerierResult {
        match request {
            QueryRequest::Wasm(WasmQuery::Smart { contract_addr, msg }) => {
                if let Ok(query) = from_binary::<RegistryQueryMsg>(msg) {
                    return self.handle_registry_query(query);
                }
                match from_binary::<OwnableQueryMsg>(msg) {
                    Ok(OwnableQueryMsg::Owner {}) => match self.contract_owners.get(contract_addr) {
                        Some(owner) => SystemResult::Ok(ContractResult::Ok(
                            to_binary(&OwnableOwnerResponse {
                                owner: Addr::unchecked(owner),
                            })
                            .unwrap(),
                        )),
                        None => SystemResult::Ok(ContractResult::Err(format!(
                            "{} does not answer owner queries",
                            contract_addr
                        ))),
                    },
                    Err(_) => SystemResult::Err(SystemError::UnsupportedRequest {
                        kind: String::from("unknown smart query"),
                    }),
                }
            }
            _ => self.base.handle_query(request),
        }
    }

    fn handle_registry_query(&self, query: RegistryQueryMsg) -> QuerierResult {
        let response = match query {
            RegistryQueryMsg::GetOwner { node } => to_binary(&OwnerResponse {
                owner: self.node_owners.get(&node).map(Addr::unchecked),
            }),
            RegistryQueryMsg::GetIsApprovedForAll { owner, operator } => {
                to_binary(&OperatorResponse {
                    is_approve: *self.operators.get(&(owner, operator)).unwrap_or(&false),
                })
            }
            _ => {
                return SystemResult::Err(SystemError::UnsupportedRequest {
                    kind: String::from("registry query"),
                })
            }
        };
        SystemResult::Ok(ContractResult::Ok(response.unwrap()))
    }
}
