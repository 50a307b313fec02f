#![cfg(test)]
use crate::contract::{execute, instantiate, query};
use bns::fifs_registrar::{ExecuteMsg as FifsExecuteMsg, InstantiateMsg as FifsInstantiateMsg};
use bns::registrar::{ExecuteMsg, InstantiateMsg, IsAvailableResponse, QueryMsg, TokenIdResponse};
use bns::registry::{
    ExecuteMsg as RegistryExecuteMsg, InstantiateMsg as RegistryInstantiateMsg,
    OwnerResponse, QueryMsg as RegistryQueryMsg,
};
use bns::resolver::{
    ExecuteMsg as ResolverExecuteMsg, InstantiateMsg as ResolverInstantiateMsg, NameResponse,
    QueryMsg as ResolverQueryMsg, TextResponse,
};
use bns::reverse_registrar::{
    ExecuteMsg as ReverseExecuteMsg, InstantiateMsg as ReverseInstantiateMsg, NodeResponse,
    QueryMsg as ReverseQueryMsg,
};
use bns::utils::{convert_namehash_to_hex_string, get_label_from_name, namehash};
use cosmwasm_std::testing::MockApi;
use cosmwasm_std::{
    to_binary, Addr, Api, Binary, CanonicalAddr, Empty, RecoverPubkeyError, StdError, StdResult,
    VerificationError,
};
use cw721::OwnerOfResponse;
use cw_multi_test::{App, AppBuilder, Contract, ContractWrapper, Executor};

const ADMIN: &str = "admin";
const ADDR1: &str = "addr1";
const ADDR2: &str = "addr2";

/// `MockApi` refuses mixed-case input, but the app names its contracts
/// `Contract #N`. Canonical form here is the address bytes unchanged.
struct CaseKeepingApi {
    mock: MockApi,
}

impl Api for CaseKeepingApi {
    fn addr_validate(&self, human: &str) -> StdResult<Addr> {
        self.addr_humanize(&self.addr_canonicalize(human)?)
    }

    fn addr_canonicalize(&self, human: &str) -> StdResult<CanonicalAddr> {
        if human.len() < 3 || human.len() > 54 {
            return Err(StdError::generic_err(format!("Invalid address: {}", human)));
        }
        Ok(CanonicalAddr::from(human.as_bytes().to_vec()))
    }

    fn addr_humanize(&self, canonical: &CanonicalAddr) -> StdResult<Addr> {
        Ok(Addr::unchecked(String::from_utf8(canonical.to_vec())?))
    }

    fn secp256k1_verify(
        &self,
        message_hash: &[u8],
        signature: &[u8],
        public_key: &[u8],
    ) -> Result<bool, VerificationError> {
        self.mock.secp256k1_verify(message_hash, signature, public_key)
    }

    fn secp256k1_recover_pubkey(
        &self,
        message_hash: &[u8],
        signature: &[u8],
        recovery_param: u8,
    ) -> Result<Vec<u8>, RecoverPubkeyError> {
        self.mock
            .secp256k1_recover_pubkey(message_hash, signature, recovery_param)
    }

    fn ed25519_verify(
        &self,
        message: &[u8],
        signature: &[u8],
        public_key: &[u8],
    ) -> Result<bool, VerificationError> {
        self.mock.ed25519_verify(message, signature, public_key)
    }

    fn ed25519_batch_verify(
        &self,
        messages: &[&[u8]],
        signatures: &[&[u8]],
        public_keys: &[&[u8]],
    ) -> Result<bool, VerificationError> {
        self.mock.ed25519_batch_verify(messages, signatures, public_keys)
    }

    fn debug(&self, message: &str) {
        self.mock.debug(message)
    }
}

fn registry_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        registry::contract::execute,
        registry::contract::instantiate,
        registry::contract::query,
    );
    Box::new(contract)
}

fn resolver_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        resolver::contract::execute,
        resolver::contract::instantiate,
        resolver::contract::query,
    );
    Box::new(contract)
}

fn reverse_registrar_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        reverse_registrar::contract::execute,
        reverse_registrar::contract::instantiate,
        reverse_registrar::contract::query,
    );
    Box::new(contract)
}

fn fifs_registrar_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        fifs_registrar::contract::execute,
        fifs_registrar::contract::instantiate,
        fifs_registrar::contract::query,
    );
    Box::new(contract)
}

fn registrar_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(execute, instantiate, query);
    Box::new(contract)
}

struct Suite {
    app: App,
    resolver_code: u64,
    registry: Addr,
    resolver: Addr,
    reverse_registrar: Addr,
    registrar: Addr,
}

impl Suite {
    /// Wires the four contracts together the way a deployment does: `b` and
    /// `addr.reverse` owned by their registrars, the registrar trusted by the
    /// resolver and by the reverse registrar.
    fn new() -> Self {
        let mut app: App = AppBuilder::new()
            .with_api(CaseKeepingApi {
                mock: MockApi::default(),
            })
            .build();
        let admin = Addr::unchecked(ADMIN);

        let registry_id = app.store_code(registry_contract());
        let resolver_id = app.store_code(resolver_contract());
        let reverse_id = app.store_code(reverse_registrar_contract());
        let registrar_id = app.store_code(registrar_contract());

        let registry = app
            .instantiate_contract(
                registry_id,
                admin.clone(),
                &RegistryInstantiateMsg {},
                &[],
                "registry",
                None,
            )
            .unwrap();

        let reverse_registrar = app
            .instantiate_contract(
                reverse_id,
                admin.clone(),
                &ReverseInstantiateMsg {
                    registry_address: registry.to_string(),
                    default_resolver: None,
                },
                &[],
                "reverse-registrar",
                None,
            )
            .unwrap();

        let resolver = app
            .instantiate_contract(
                resolver_id,
                admin.clone(),
                &ResolverInstantiateMsg {
                    registry_address: registry.to_string(),
                    trusted_controller: None,
                    trusted_reverse_registrar: Some(reverse_registrar.to_string()),
                    name_wrapper: None,
                },
                &[],
                "resolver",
                None,
            )
            .unwrap();

        app.execute_contract(
            admin.clone(),
            reverse_registrar.clone(),
            &ReverseExecuteMsg::SetDefaultResolver {
                resolver: resolver.to_string(),
            },
            &[],
        )
        .unwrap();

        // reverse -> admin, addr.reverse -> reverse registrar
        app.execute_contract(
            admin.clone(),
            registry.clone(),
            &RegistryExecuteMsg::SetSubnodeOwner {
                node: namehash(""),
                label: get_label_from_name("reverse"),
                owner: Some(ADMIN.to_string()),
            },
            &[],
        )
        .unwrap();
        app.execute_contract(
            admin.clone(),
            registry.clone(),
            &RegistryExecuteMsg::SetSubnodeOwner {
                node: namehash("reverse"),
                label: get_label_from_name("addr"),
                owner: Some(reverse_registrar.to_string()),
            },
            &[],
        )
        .unwrap();

        let registrar = app
            .instantiate_contract(
                registrar_id,
                admin.clone(),
                &InstantiateMsg {
                    base_node: convert_namehash_to_hex_string(&namehash("b")),
                    base_name: String::from("b"),
                    registry_address: registry.to_string(),
                    reverse_registrar: Some(reverse_registrar.to_string()),
                    name: String::from("Base Names"),
                    symbol: String::from("BNS"),
                },
                &[],
                "registrar",
                None,
            )
            .unwrap();

        app.execute_contract(
            admin.clone(),
            registry.clone(),
            &RegistryExecuteMsg::SetSubnodeOwner {
                node: namehash(""),
                label: get_label_from_name("b"),
                owner: Some(registrar.to_string()),
            },
            &[],
        )
        .unwrap();
        app.execute_contract(
            admin.clone(),
            reverse_registrar.clone(),
            &ReverseExecuteMsg::SetController {
                controller: registrar.to_string(),
                enabled: true,
            },
            &[],
        )
        .unwrap();
        app.execute_contract(
            admin,
            resolver.clone(),
            &ResolverExecuteMsg::SetConfig {
                registry_address: registry.to_string(),
                trusted_controller: Some(registrar.to_string()),
                trusted_reverse_registrar: Some(reverse_registrar.to_string()),
                name_wrapper: None,
                owner: ADMIN.to_string(),
            },
            &[],
        )
        .unwrap();

        Suite {
            app,
            resolver_code: resolver_id,
            registry,
            resolver,
            reverse_registrar,
            registrar,
        }
    }

    fn register(&mut self, sender: &str, label: &str, owner: &str, calls: Vec<Binary>) -> bool {
        let msg = ExecuteMsg::Register {
            label: label.to_string(),
            owner: owner.to_string(),
            resolver_setup_calls: calls,
            resolver: self.resolver.to_string(),
        };
        self.app
            .execute_contract(Addr::unchecked(sender), self.registrar.clone(), &msg, &[])
            .is_ok()
    }

    fn execute_registrar(&mut self, sender: &str, msg: ExecuteMsg) -> bool {
        self.app
            .execute_contract(Addr::unchecked(sender), self.registrar.clone(), &msg, &[])
            .is_ok()
    }

    fn token_id(&self, label: &str) -> String {
        let res: TokenIdResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                self.registrar.clone(),
                &QueryMsg::GetTokenId {
                    label: label.to_string(),
                },
            )
            .unwrap();
        res.token_id
    }

    fn token_owner(&self, label: &str) -> String {
        let res: OwnerOfResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                self.registrar.clone(),
                &QueryMsg::OwnerOf {
                    token_id: self.token_id(label),
                    include_expired: None,
                },
            )
            .unwrap();
        res.owner
    }

    fn registry_owner(&self, name: &str) -> Option<Addr> {
        let res: OwnerResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                self.registry.clone(),
                &RegistryQueryMsg::GetOwner {
                    node: namehash(name),
                },
            )
            .unwrap();
        res.owner
    }

    /// A resolver trusting nobody, as a registrant might deploy.
    fn plain_resolver(&mut self) -> Addr {
        self.app
            .instantiate_contract(
                self.resolver_code,
                Addr::unchecked(ADDR1),
                &ResolverInstantiateMsg {
                    registry_address: self.registry.to_string(),
                    trusted_controller: None,
                    trusted_reverse_registrar: None,
                    name_wrapper: None,
                },
                &[],
                "plain-resolver",
                None,
            )
            .unwrap()
    }

    fn reverse_node(&self, address: &str) -> Vec<u8> {
        let res: NodeResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                self.reverse_registrar.clone(),
                &ReverseQueryMsg::Node {
                    address: address.to_string(),
                },
            )
            .unwrap();
        res.node
    }

    fn name_on(&self, resolver: &Addr, node: Vec<u8>) -> String {
        let res: NameResponse = self
            .app
            .wrap()
            .query_wasm_smart(resolver.clone(), &ResolverQueryMsg::GetName { node })
            .unwrap();
        res.name
    }

    fn reverse_name(&self, address: &str) -> String {
        self.name_on(&self.resolver, self.reverse_node(address))
    }
}

#[test]
fn register_writes_token_registry_and_reverse_record() {
    let mut suite = Suite::new();
    assert!(suite.register(ADDR2, "testname", ADDR1, vec![]));

    assert_eq!(suite.token_owner("testname"), ADDR1);
    assert_eq!(
        suite.registry_owner("testname.b"),
        Some(Addr::unchecked(ADDR1))
    );
    assert_eq!(suite.reverse_name(ADDR1), "testname.b");
}

#[test]
fn register_runs_resolver_setup_calls() {
    let mut suite = Suite::new();
    let node = namehash("testname.b");
    let calls = vec![to_binary(&ResolverExecuteMsg::SetText {
        node: node.clone(),
        key: String::from("url"),
        value: String::from("https://testname.example"),
    })
    .unwrap()];
    assert!(suite.register(ADDR1, "testname", ADDR1, calls));

    let res: TextResponse = suite
        .app
        .wrap()
        .query_wasm_smart(
            suite.resolver.clone(),
            &ResolverQueryMsg::GetText {
                node,
                key: String::from("url"),
            },
        )
        .unwrap();
    assert_eq!(res.value, "https://testname.example");
}

#[test]
fn setup_calls_for_other_nodes_revert_registration() {
    let mut suite = Suite::new();
    let calls = vec![to_binary(&ResolverExecuteMsg::SetText {
        node: namehash("other.b"),
        key: String::from("url"),
        value: String::from("https://other.example"),
    })
    .unwrap()];
    assert!(!suite.register(ADDR1, "testname", ADDR1, calls));

    assert_eq!(suite.registry_owner("testname.b"), None);
    let available: IsAvailableResponse = suite
        .app
        .wrap()
        .query_wasm_smart(
            suite.registrar.clone(),
            &QueryMsg::IsAvailable {
                id: suite.token_id("testname"),
            },
        )
        .unwrap();
    assert!(available.available);
}

#[test]
fn register_only_then_reclaim() {
    let mut suite = Suite::new();
    let msg = ExecuteMsg::RegisterOnly {
        label: String::from("testname"),
        owner: String::from(ADDR1),
        resolver_setup_calls: vec![],
        resolver: suite.resolver.to_string(),
    };
    assert!(suite.execute_registrar(ADDR1, msg));

    assert_eq!(suite.token_owner("testname"), ADDR1);
    assert_eq!(suite.registry_owner("testname.b"), None);

    let reclaim = ExecuteMsg::Reclaim {
        id: suite.token_id("testname"),
        owner: String::from(ADDR1),
    };
    assert!(!suite.execute_registrar(ADDR2, reclaim.clone()));
    assert!(suite.execute_registrar(ADDR1, reclaim));
    assert_eq!(
        suite.registry_owner("testname.b"),
        Some(Addr::unchecked(ADDR1))
    );
}

#[test]
fn duplicate_registration_fails() {
    let mut suite = Suite::new();
    assert!(suite.register(ADDR1, "testname", ADDR1, vec![]));
    assert!(!suite.register(ADDR2, "testname", ADDR2, vec![]));

    assert_eq!(suite.token_owner("testname"), ADDR1);
    assert_eq!(
        suite.registry_owner("testname.b"),
        Some(Addr::unchecked(ADDR1))
    );
}

#[test]
fn invisible_label_fails() {
    let mut suite = Suite::new();
    assert!(!suite.register(ADDR1, "test\u{200B}name", ADDR1, vec![]));
    assert_eq!(suite.registry_owner("test\u{200B}name.b"), None);
}

#[test]
fn transfer_leaves_registry_alone() {
    let mut suite = Suite::new();
    assert!(suite.register(ADDR1, "testname", ADDR1, vec![]));

    let transfer = ExecuteMsg::TransferFrom {
        from: String::from(ADDR1),
        to: String::from(ADDR2),
        token_id: suite.token_id("testname"),
    };
    assert!(!suite.execute_registrar(ADDR2, transfer.clone()));
    assert!(suite.execute_registrar(ADDR1, transfer));

    assert_eq!(suite.token_owner("testname"), ADDR2);
    assert_eq!(
        suite.registry_owner("testname.b"),
        Some(Addr::unchecked(ADDR1))
    );

    // The new holder brings the registry in line
    let reclaim = ExecuteMsg::Reclaim {
        id: suite.token_id("testname"),
        owner: String::from(ADDR2),
    };
    assert!(suite.execute_registrar(ADDR2, reclaim));
    assert_eq!(
        suite.registry_owner("testname.b"),
        Some(Addr::unchecked(ADDR2))
    );
}

#[test]
fn reverse_registrar_sets_name() {
    let mut suite = Suite::new();
    suite
        .app
        .execute_contract(
            Addr::unchecked(ADDR1),
            suite.reverse_registrar.clone(),
            &ReverseExecuteMsg::SetName {
                name: String::from("alice"),
            },
            &[],
        )
        .unwrap();
    assert_eq!(suite.reverse_name(ADDR1), "alice");

    let node: NodeResponse = suite
        .app
        .wrap()
        .query_wasm_smart(
            suite.reverse_registrar.clone(),
            &ReverseQueryMsg::Node {
                address: ADDR1.to_string(),
            },
        )
        .unwrap();
    let owner: OwnerResponse = suite
        .app
        .wrap()
        .query_wasm_smart(
            suite.registry.clone(),
            &RegistryQueryMsg::GetOwner { node: node.node },
        )
        .unwrap();
    assert_eq!(owner.owner, Some(Addr::unchecked(ADDR1)));
}

#[test]
fn reverse_name_on_untrusting_resolver() {
    let mut suite = Suite::new();
    let resolver = suite.plain_resolver();
    suite
        .app
        .execute_contract(
            Addr::unchecked(ADDR1),
            suite.reverse_registrar.clone(),
            &ReverseExecuteMsg::SetNameForAddr {
                address: ADDR1.to_string(),
                owner: ADDR1.to_string(),
                resolver: resolver.to_string(),
                name: String::from("alice"),
            },
            &[],
        )
        .unwrap();

    let node = suite.reverse_node(ADDR1);
    assert_eq!(suite.name_on(&resolver, node.clone()), "alice");
    let owner: OwnerResponse = suite
        .app
        .wrap()
        .query_wasm_smart(suite.registry.clone(), &RegistryQueryMsg::GetOwner { node })
        .unwrap();
    assert_eq!(owner.owner, Some(Addr::unchecked(ADDR1)));
}

#[test]
fn register_with_own_resolver_sets_reverse_record() {
    let mut suite = Suite::new();
    let resolver = suite.plain_resolver();
    let msg = ExecuteMsg::Register {
        label: String::from("testname"),
        owner: String::from(ADDR1),
        resolver_setup_calls: vec![],
        resolver: resolver.to_string(),
    };
    assert!(suite.execute_registrar(ADDR1, msg));

    assert_eq!(
        suite.registry_owner("testname.b"),
        Some(Addr::unchecked(ADDR1))
    );
    let node = suite.reverse_node(ADDR1);
    assert_eq!(suite.name_on(&resolver, node), "testname.b");
}

#[test]
fn fifs_registrar_first_come_first_served() {
    let mut suite = Suite::new();
    let fifs_id = suite.app.store_code(fifs_registrar_contract());
    let fifs = suite
        .app
        .instantiate_contract(
            fifs_id,
            Addr::unchecked(ADMIN),
            &FifsInstantiateMsg {
                registry_address: suite.registry.to_string(),
                root_node: namehash("test"),
            },
            &[],
            "fifs-registrar",
            None,
        )
        .unwrap();
    suite
        .app
        .execute_contract(
            Addr::unchecked(ADMIN),
            suite.registry.clone(),
            &RegistryExecuteMsg::SetSubnodeOwner {
                node: namehash(""),
                label: get_label_from_name("test"),
                owner: Some(fifs.to_string()),
            },
            &[],
        )
        .unwrap();

    let register = |label: &str, owner: &str| FifsExecuteMsg::Register {
        label: get_label_from_name(label),
        owner: owner.to_string(),
    };
    let res = suite
        .app
        .execute_contract(Addr::unchecked(ADDR1), fifs.clone(), &register("eth", ADDR1), &[])
        .unwrap();
    assert!(res.events.iter().any(|e| e.ty == "wasm-new_owner"));
    assert_eq!(suite.registry_owner("eth.test"), Some(Addr::unchecked(ADDR1)));

    // Taken by ADDR1, so ADDR2 is refused
    assert!(suite
        .app
        .execute_contract(Addr::unchecked(ADDR2), fifs.clone(), &register("eth", ADDR2), &[])
        .is_err());
    assert_eq!(suite.registry_owner("eth.test"), Some(Addr::unchecked(ADDR1)));

    suite
        .app
        .execute_contract(Addr::unchecked(ADDR1), fifs, &register("eth", ADDR2), &[])
        .unwrap();
    assert_eq!(suite.registry_owner("eth.test"), Some(Addr::unchecked(ADDR2)));
}
