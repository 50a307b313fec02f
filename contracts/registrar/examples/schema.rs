use std::env::current_dir;
use std::fs::create_dir_all;

use cosmwasm_schema::{export_schema, remove_schemas, schema_for};
use cw721::{AllNftInfoResponse, NftInfoResponse};

use bns::registrar::{
    BalanceResponse, ConfigResponse, ExecuteMsg, GetBaseNodeResponse, GetRegistryResponse,
    InstantiateMsg, IsAvailableResponse, NameMetadata, QueryMsg, TokenIdResponse,
};

fn main() {
    let mut out_dir = current_dir().unwrap();
    out_dir.push("schema");
    create_dir_all(&out_dir).unwrap();
    remove_schemas(&out_dir).unwrap();

    export_schema(&schema_for!(BalanceResponse), &out_dir);
    export_schema(&schema_for!(ConfigResponse), &out_dir);
    export_schema(&schema_for!(ExecuteMsg), &out_dir);
    export_schema(&schema_for!(GetBaseNodeResponse), &out_dir);
    export_schema(&schema_for!(GetRegistryResponse), &out_dir);
    export_schema(&schema_for!(InstantiateMsg), &out_dir);
    export_schema(&schema_for!(IsAvailableResponse), &out_dir);
    export_schema(&schema_for!(NftInfoResponse<NameMetadata>), &out_dir);
    export_schema(&schema_for!(AllNftInfoResponse<NameMetadata>), &out_dir);
    export_schema(&schema_for!(QueryMsg), &out_dir);
    export_schema(&schema_for!(TokenIdResponse), &out_dir);
}
