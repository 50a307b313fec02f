use std::env::current_dir;
use std::fs::create_dir_all;

use cosmwasm_schema::{export_schema, remove_schemas, schema_for};

use bns::resolver::{
    AddrResponse, AddressResponse, ConfigResponse, ContenthashResponse, ExecuteMsg, InstantiateMsg,
    MulticallResponse, NameResponse, OperatorResponse, PubkeyResponse, QueryMsg,
    RecordVersionResponse, SupportsInterfaceResponse, TextResponse,
};

fn main() {
    let mut out_dir = current_dir().unwrap();
    out_dir.push("schema");
    create_dir_all(&out_dir).unwrap();
    remove_schemas(&out_dir).unwrap();

    export_schema(&schema_for!(AddrResponse), &out_dir);
    export_schema(&schema_for!(AddressResponse), &out_dir);
    export_schema(&schema_for!(ConfigResponse), &out_dir);
    export_schema(&schema_for!(ContenthashResponse), &out_dir);
    export_schema(&schema_for!(ExecuteMsg), &out_dir);
    export_schema(&schema_for!(InstantiateMsg), &out_dir);
    export_schema(&schema_for!(MulticallResponse), &out_dir);
    export_schema(&schema_for!(NameResponse), &out_dir);
    export_schema(&schema_for!(OperatorResponse), &out_dir);
    export_schema(&schema_for!(PubkeyResponse), &out_dir);
    export_schema(&schema_for!(QueryMsg), &out_dir);
    export_schema(&schema_for!(RecordVersionResponse), &out_dir);
    export_schema(&schema_for!(SupportsInterfaceResponse), &out_dir);
    export_schema(&schema_for!(TextResponse), &out_dir);
}
