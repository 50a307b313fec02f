use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: Sender {sender} is not authorised for node {node}.")]
    Unauthorized { sender: String, node: String },

    #[error("SelfApproval: {operator} cannot be its own operator.")]
    SelfApproval { operator: String },
}
