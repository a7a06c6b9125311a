use std::io::{BufRead, Write};

use thiserror::Error;

use crate::{
    account::AccountId,
    action::Action,
    directory::{AccountDirectory, DirectoryError},
};

use super::{Teller, TellerError};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Teller(#[from] TellerError),
    #[error(transparent)]
    Directory(#[from] DirectoryError),
    #[error("Balance of account {id} is out of range")]
    BalanceOverflow { id: AccountId },
}

impl SessionError {
    /// Errors the customer can be told about before carrying on. Anything else
    /// means the console itself is gone.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            Self::Teller(TellerError::Io(_) | TellerError::InputClosed)
        )
    }
}

/// Carries out one action for customer `id`. `Next` and `Finished` have no
/// effect here, sequencing customers is up to the caller.
pub fn serve_action<R, W, D>(
    teller: &mut Teller<R, W>,
    directory: &mut D,
    id: AccountId,
    action: Action,
) -> Result<(), SessionError>
where
    R: BufRead,
    W: Write,
    D: AccountDirectory,
{
    match action {
        Action::Balance => {
            let account = directory.lookup(id)?;
            let message = format!("{}, your balance is {}", account.name(), account.balance());
            teller.present_message(&message)?;
        }
        Action::Deposit(amount) => {
            let balance = directory
                .get_balance(id)?
                .checked_add(amount)
                .ok_or(SessionError::BalanceOverflow { id })?;
            directory.update_balance(id, balance)?;
            teller.present_message(&format!("New balance: {balance}"))?;
        }
        Action::Withdraw(amount) => {
            let balance = directory
                .get_balance(id)?
                .checked_sub(amount)
                .ok_or(SessionError::BalanceOverflow { id })?;
            directory.update_balance(id, balance)?;
            teller.deliver_cash(amount)?;
        }
        Action::Next | Action::Finished => {}
    }
    Ok(())
}
