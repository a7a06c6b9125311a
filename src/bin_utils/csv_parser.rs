use std::io::Read;

use crate::account::{Account, AccountId, Balance};
use csv::{DeserializeRecordsIntoIter, Trim};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AccountRow {
    pub name: String,
    pub id: AccountId,
    pub balance: Balance,
}

impl From<AccountRow> for Account {
    fn from(row: AccountRow) -> Self {
        Account::new(row.name, row.id, row.balance)
    }
}

/// Parses the initial account list, `name,id,balance` with a header line.
pub struct CsvAccountParser<R> {
    iter: DeserializeRecordsIntoIter<R, AccountRow>,
}

impl<R> CsvAccountParser<R>
where
    R: Read,
{
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(Trim::All)
            .from_reader(source);

        Self {
            iter: reader.into_deserialize(),
        }
    }
}

impl<R> Iterator for CsvAccountParser<R>
where
    R: Read,
{
    type Item = anyhow::Result<Account>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.iter.next()?;
        Some(row.map(Account::from).map_err(|err| {
            let context = match err.position() {
                Some(pos) => format!("Malformed account record at line {}", pos.line()),
                None => "Malformed account record".to_owned(),
            };
            anyhow::Error::new(err).context(context)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accounts() {
        let source = "name, id, balance\nAlice, 1, 500\n Bob Smith ,2,-20\n";
        let accounts = CsvAccountParser::new(source.as_bytes())
            .collect::<anyhow::Result<Vec<_>>>()
            .unwrap();
        assert_eq!(
            accounts,
            vec![
                Account::new("Alice", 1, 500),
                Account::new("Bob Smith", 2, -20)
            ]
        );
    }

    #[test]
    fn reject_non_numeric_balance() {
        let source = "name,id,balance\nAlice,1,lots\n";
        let mut parser = CsvAccountParser::new(source.as_bytes());
        let err = parser.next().unwrap().unwrap_err();
        assert_eq!(err.to_string(), "Malformed account record at line 2");
        assert!(parser.next().is_none());
    }
}
