use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: Sender {sender} may not act on token {token_id}.")]
    Unauthorized { sender: String, token_id: String },

    #[error("NotOwner: Sender is {sender}, but owner is {owner}.")]
    NotOwner { sender: String, owner: String },

    #[error("AlreadyRegistered: Token {token_id} is already owned.")]
    AlreadyRegistered { token_id: String },

    #[error("InvalidLabel: {label:?} is not a valid label.")]
    InvalidLabel { label: String },

    #[error("Expired: Approval would already be expired.")]
    Expired {},

    #[error("BytesFormatError")]
    BytesFormatError {},

    #[error("NameAndHashNotMatch")]
    NameAndHashNotMatch {},
}
