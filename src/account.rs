pub type AccountId = i64;

pub type Balance = i64;

/// A customer account. Id and name are fixed once created, a new balance
/// produces a new record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: AccountId,
    name: String,
    balance: Balance,
}

impl Account {
    pub fn new(name: impl Into<String>, id: AccountId, balance: Balance) -> Self {
        Self {
            id,
            name: name.into(),
            balance,
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> Balance {
        self.balance
    }

    pub fn with_balance(&self, balance: Balance) -> Self {
        Self {
            balance,
            ..self.clone()
        }
    }
}
