use std::collections::{HashMap, hash_map::Entry};

use crate::account::{Account, AccountId, Balance};

use super::{AccountDirectory, DirectoryError};

#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    accounts: HashMap<AccountId, Account>,
}

impl InMemoryDirectory {
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl AccountDirectory for InMemoryDirectory {
    fn initialize<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = Account>,
    {
        for account in records {
            let id = account.id();
            if let Some(replaced) = self.accounts.insert(id, account) {
                tracing::warn!(
                    id,
                    name = replaced.name(),
                    "duplicate account id, last one wins"
                );
            }
        }
        tracing::debug!(accounts = self.accounts.len(), "directory initialized");
    }

    fn lookup(&self, id: AccountId) -> Result<&Account, DirectoryError> {
        self.accounts.get(&id).ok_or(DirectoryError::NotFound { id })
    }

    fn update_balance(
        &mut self,
        id: AccountId,
        new_balance: Balance,
    ) -> Result<(), DirectoryError> {
        let Entry::Occupied(mut entry) = self.accounts.entry(id) else {
            return Err(DirectoryError::NotFound { id });
        };
        let replacement = entry.get().with_balance(new_balance);
        entry.insert(replacement);
        tracing::debug!(id, balance = new_balance, "balance updated");
        Ok(())
    }
}
