use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: Sender {sender} is not authorised for node {node}.")]
    Unauthorized { sender: String, node: String },

    #[error("NotOwner: Sender is {sender}, but owner is {owner}")]
    NotOwner { sender: String, owner: String },

    #[error("SelfApproval: {operator} cannot be its own operator.")]
    SelfApproval { operator: String },

    #[error("NodeMismatch: Call targets node {found}, expected {expected}.")]
    NodeMismatch { expected: String, found: String },

    #[error("InvalidPubkey: Coordinates must be 32 bytes each.")]
    InvalidPubkey {},
}
