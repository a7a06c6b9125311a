use thiserror::Error;

use crate::account::{Account, AccountId, Balance};

pub mod in_memory_directory;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("No account with id {id}")]
    NotFound { id: AccountId },
}

pub trait AccountDirectory {
    /// Adds every record, keyed by id. Calling it again accumulates, and a
    /// record with an already known id replaces the stored one.
    fn initialize<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = Account>;

    fn lookup(&self, id: AccountId) -> Result<&Account, DirectoryError>;

    /// Replaces the record for `id` with one carrying `new_balance`.
    fn update_balance(&mut self, id: AccountId, new_balance: Balance)
    -> Result<(), DirectoryError>;

    fn get_balance(&self, id: AccountId) -> Result<Balance, DirectoryError> {
        self.lookup(id).map(Account::balance)
    }

    fn get_name(&self, id: AccountId) -> Result<&str, DirectoryError> {
        self.lookup(id).map(Account::name)
    }
}
