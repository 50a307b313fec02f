use std::env::current_dir;
use std::fs::create_dir_all;

use cosmwasm_schema::{export_schema, remove_schemas, schema_for};

use bns::registry::{
    ExecuteMsg, InstantiateMsg, OperatorResponse, OwnerResponse, QueryMsg, RecordExistsResponse,
    RecordResponse, ResolverResponse, TtlResponse,
};

fn main() {
    let mut out_dir = current_dir().unwrap();
    out_dir.push("schema");
    create_dir_all(&out_dir).unwrap();
    remove_schemas(&out_dir).unwrap();

    export_schema(&schema_for!(ExecuteMsg), &out_dir);
    export_schema(&schema_for!(InstantiateMsg), &out_dir);
    export_schema(&schema_for!(OperatorResponse), &out_dir);
    export_schema(&schema_for!(OwnerResponse), &out_dir);
    export_schema(&schema_for!(QueryMsg), &out_dir);
    export_schema(&schema_for!(RecordExistsResponse), &out_dir);
    export_schema(&schema_for!(RecordResponse), &out_dir);
    export_schema(&schema_for!(ResolverResponse), &out_dir);
    export_schema(&schema_for!(TtlResponse), &out_dir);
}
