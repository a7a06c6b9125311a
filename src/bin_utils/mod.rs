//! Bootstraps [`crate::teller`] on a console: loads the initial accounts and
//! serves customers one after another until `X` or end of input.

use std::io::{BufRead, Read, Write};

use crate::{
    account::AccountId,
    action::Action,
    directory::{AccountDirectory, in_memory_directory::InMemoryDirectory},
    teller::{
        Teller, TellerError,
        session::{SessionError, serve_action},
    },
};
use anyhow::Result;
use csv_parser::CsvAccountParser;
pub mod csv_parser;

pub struct Service<'w, A, R, W: 'w> {
    pub accounts: A,
    pub input: R,
    pub output: &'w mut W,
}

impl<'w, A, R, W> Service<'w, A, R, W>
where
    A: Read,
    R: BufRead,
    W: Write + 'w,
{
    pub fn run(self) -> Result<()> {
        let records = CsvAccountParser::new(self.accounts).collect::<Result<Vec<_>>>()?;

        let mut directory = InMemoryDirectory::default();
        directory.initialize(records);

        let mut teller = Teller::new(self.input, self.output);
        match serve_customers(&mut teller, &mut directory) {
            Ok(()) | Err(SessionError::Teller(TellerError::InputClosed)) => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

fn serve_customers<R, W, D>(
    teller: &mut Teller<R, W>,
    directory: &mut D,
) -> Result<(), SessionError>
where
    R: BufRead,
    W: Write,
    D: AccountDirectory,
{
    loop {
        let id = identify_customer(teller, directory)?;
        tracing::debug!(id, "customer session started");
        loop {
            let served = match teller.acquire_action() {
                Ok(Action::Next) => break,
                Ok(Action::Finished) => return Ok(()),
                Ok(action) => serve_action(teller, directory, id, action),
                Err(err) => Err(err.into()),
            };
            if let Err(err) = served {
                report(teller, err)?;
            }
        }
    }
}

/// Asks for an id until it names a known account.
fn identify_customer<R, W, D>(
    teller: &mut Teller<R, W>,
    directory: &D,
) -> Result<AccountId, SessionError>
where
    R: BufRead,
    W: Write,
    D: AccountDirectory,
{
    loop {
        let id = match teller.acquire_id() {
            Ok(id) => id,
            Err(err) => {
                report(teller, err.into())?;
                continue;
            }
        };
        match directory.get_name(id) {
            Ok(name) => {
                teller.present_message(&format!("Welcome, {name}"))?;
                return Ok(id);
            }
            Err(err) => report(teller, err.into())?,
        }
    }
}

fn report<R, W>(teller: &mut Teller<R, W>, err: SessionError) -> Result<(), SessionError>
where
    R: BufRead,
    W: Write,
{
    if !err.is_recoverable() {
        return Err(err);
    }
    tracing::debug!(%err, "reported to customer");
    teller.present_message(&err.to_string())?;
    Ok(())
}
