use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: Sender {sender} cannot act for {address}.")]
    Unauthorized { sender: String, address: String },

    #[error("DefaultResolverNotSet: No default resolver is configured.")]
    DefaultResolverNotSet {},
}
