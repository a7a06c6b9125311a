use crate::account::Balance;

/// One operation requested by the customer at the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Balance,
    Withdraw(Balance),
    Deposit(Balance),
    /// Current customer is done, the next one steps up.
    Next,
    /// No more customers.
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Balance,
    Withdraw,
    Deposit,
    Next,
    Finished,
}

impl ActionKind {
    /// Maps a menu token to its action. Surrounding whitespace is ignored,
    /// tokens are case sensitive.
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim() {
            "B" => Some(Self::Balance),
            "-" => Some(Self::Withdraw),
            "+" => Some(Self::Deposit),
            "=" => Some(Self::Next),
            "X" => Some(Self::Finished),
            _ => None,
        }
    }
}
