use crate::error::ContractError;
use crate::state::{tokens, Approval, NameToken, OPERATORS};
use bns::registrar::NameMetadata;
use cosmwasm_std::{
    Addr, Binary, BlockInfo, CosmosMsg, Deps, DepsMut, Empty, Env, MessageInfo, Response,
    StdResult, Storage,
};
use cw0::Expiration;
use cw721::{Cw721Execute, Cw721ReceiveMsg};

/// The cw721 surface of the registrar. Token state lives in `crate::state`.
pub struct NameTokens;

fn is_operator(
    storage: &dyn Storage,
    block: &BlockInfo,
    holder: &Addr,
    operator: &Addr,
) -> StdResult<bool> {
    Ok(match OPERATORS.may_load(storage, (holder, operator))? {
        Some(expires) => !expires.is_expired(block),
        None => false,
    })
}

/// Holder or one of its live operators.
pub fn can_approve(
    storage: &dyn Storage,
    block: &BlockInfo,
    sender: &Addr,
    token: &NameToken,
) -> StdResult<bool> {
    Ok(&token.owner == sender || is_operator(storage, block, &token.owner, sender)?)
}

/// Anyone who may approve, plus spenders with a live approval on the token.
pub fn can_send(
    storage: &dyn Storage,
    block: &BlockInfo,
    sender: &Addr,
    token: &NameToken,
) -> StdResult<bool> {
    Ok(token.is_approved(sender, block) || can_approve(storage, block, sender, token)?)
}

fn unauthorized(info: &MessageInfo, token_id: &str) -> ContractError {
    ContractError::Unauthorized {
        sender: info.sender.to_string(),
        token_id: token_id.to_string(),
    }
}

pub fn load_sendable(
    deps: Deps,
    env: &Env,
    info: &MessageInfo,
    token_id: &str,
) -> Result<NameToken, ContractError> {
    let token = tokens().load(deps.storage, token_id)?;
    if !can_send(deps.storage, &env.block, &info.sender, &token)? {
        return Err(unauthorized(info, token_id));
    }
    Ok(token)
}

/// Gives `token` to `recipient`. Approvals do not survive the move.
pub fn hand_over(
    deps: DepsMut,
    token_id: &str,
    mut token: NameToken,
    recipient: &str,
) -> StdResult<()> {
    token.owner = deps.api.addr_validate(recipient)?;
    token.approvals.clear();
    tokens().save(deps.storage, token_id, &token)
}

/// Drops any approval `spender` holds on the token, then grants a new one
/// when `grant` is set.
fn update_approval(
    deps: DepsMut,
    env: &Env,
    info: &MessageInfo,
    spender: &str,
    token_id: &str,
    grant: Option<Expiration>,
) -> Result<(), ContractError> {
    let mut token = tokens().load(deps.storage, token_id)?;
    if !can_approve(deps.storage, &env.block, &info.sender, &token)? {
        return Err(unauthorized(info, token_id));
    }

    let spender = deps.api.addr_validate(spender)?;
    token.approvals.retain(|approval| approval.spender != spender);
    if let Some(expires) = grant {
        if expires.is_expired(&env.block) {
            return Err(ContractError::Expired {});
        }
        token.approvals.push(Approval { spender, expires });
    }
    tokens().save(deps.storage, token_id, &token)?;
    Ok(())
}

impl Cw721Execute<NameMetadata, Empty> for NameTokens {
    type Err = ContractError;

    fn transfer_nft(
        &self,
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
        recipient: String,
        token_id: String,
    ) -> Result<Response, ContractError> {
        let token = load_sendable(deps.as_ref(), &env, &info, &token_id)?;
        hand_over(deps, &token_id, token, &recipient)?;
        Ok(Response::new()
            .add_attribute("method", "transfer_nft")
            .add_attribute("sender", info.sender)
            .add_attribute("recipient", recipient)
            .add_attribute("token_id", token_id))
    }

    fn send_nft(
        &self,
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
        contract: String,
        token_id: String,
        msg: Binary,
    ) -> Result<Response, ContractError> {
        let token = load_sendable(deps.as_ref(), &env, &info, &token_id)?;
        hand_over(deps, &token_id, token, &contract)?;

        let notification: CosmosMsg = Cw721ReceiveMsg {
            sender: info.sender.to_string(),
            token_id: token_id.clone(),
            msg,
        }
        .into_cosmos_msg(contract.clone())?;
        Ok(Response::new()
            .add_message(notification)
            .add_attribute("method", "send_nft")
            .add_attribute("sender", info.sender)
            .add_attribute("recipient", contract)
            .add_attribute("token_id", token_id))
    }

    fn approve(
        &self,
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
        spender: String,
        token_id: String,
        expires: Option<Expiration>,
    ) -> Result<Response, ContractError> {
        let grant = Some(expires.unwrap_or_default());
        update_approval(deps, &env, &info, &spender, &token_id, grant)?;
        Ok(Response::new()
            .add_attribute("method", "approve")
            .add_attribute("sender", info.sender)
            .add_attribute("spender", spender)
            .add_attribute("token_id", token_id))
    }

    fn revoke(
        &self,
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
        spender: String,
        token_id: String,
    ) -> Result<Response, ContractError> {
        update_approval(deps, &env, &info, &spender, &token_id, None)?;
        Ok(Response::new()
            .add_attribute("method", "revoke")
            .add_attribute("sender", info.sender)
            .add_attribute("spender", spender)
            .add_attribute("token_id", token_id))
    }

    fn approve_all(
        &self,
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
        operator: String,
        expires: Option<Expiration>,
    ) -> Result<Response, ContractError> {
        let expires = expires.unwrap_or_default();
        if expires.is_expired(&env.block) {
            return Err(ContractError::Expired {});
        }
        let operator_address = deps.api.addr_validate(&operator)?;
        OPERATORS.save(deps.storage, (&info.sender, &operator_address), &expires)?;
        Ok(Response::new()
            .add_attribute("method", "approve_all")
            .add_attribute("sender", info.sender)
            .add_attribute("operator", operator))
    }

    fn revoke_all(
        &self,
        deps: DepsMut,
        _env: Env,
        info: MessageInfo,
        operator: String,
    ) -> Result<Response, ContractError> {
        let operator_address = deps.api.addr_validate(&operator)?;
        OPERATORS.remove(deps.storage, (&info.sender, &operator_address));
        Ok(Response::new()
            .add_attribute("method", "revoke_all")
            .add_attribute("sender", info.sender)
            .add_attribute("operator", operator))
    }
}
