use std::{
    io::{self, BufRead, Write},
    num::ParseIntError,
};

use thiserror::Error;

use crate::{
    account::{AccountId, Balance},
    action::{Action, ActionKind},
    cash::CashBreakdown,
};

pub mod session;

pub const ACTION_MENU: &str = "B balance, - withdraw, + deposit, = next customer, X finish: ";
pub const ID_PROMPT: &str = "Account id: ";
pub const AMOUNT_PROMPT: &str = "Amount: ";

#[derive(Debug, Error)]
pub enum TellerError {
    #[error("`{input}` is not a number")]
    Parse {
        input: String,
        source: ParseIntError,
    },
    #[error("Console input closed")]
    InputClosed,
    #[error("Console I/O failed")]
    Io(#[from] io::Error),
}

/// Customer facing side of the machine: prompts on `output`, reads answers
/// line by line from `input`.
pub struct Teller<R, W> {
    input: R,
    output: W,
}

impl<R, W> Teller<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes `text` as a whole line.
    pub fn present_message(&mut self, text: &str) -> Result<(), TellerError> {
        writeln!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    pub fn acquire_id(&mut self) -> Result<AccountId, TellerError> {
        self.prompt(ID_PROMPT)?;
        self.read_integer()
    }

    /// Sign and magnitude are not checked here.
    pub fn acquire_amount(&mut self) -> Result<Balance, TellerError> {
        self.prompt(AMOUNT_PROMPT)?;
        self.read_integer()
    }

    /// Shows the menu until a known token is entered. Unknown tokens are not
    /// errors, the menu is simply shown again. A malformed amount after `+`
    /// or `-` is returned as [`TellerError::Parse`].
    pub fn acquire_action(&mut self) -> Result<Action, TellerError> {
        let kind = loop {
            self.prompt(ACTION_MENU)?;
            let line = self.read_line()?;
            match ActionKind::parse(&line) {
                Some(kind) => break kind,
                None => tracing::trace!(token = line.trim(), "unknown action token"),
            }
        };
        let action = match kind {
            ActionKind::Balance => Action::Balance,
            ActionKind::Withdraw => Action::Withdraw(self.acquire_amount()?),
            ActionKind::Deposit => Action::Deposit(self.acquire_amount()?),
            ActionKind::Next => Action::Next,
            ActionKind::Finished => Action::Finished,
        };
        tracing::debug!(?action, "action acquired");
        Ok(action)
    }

    /// Presents the note breakdown for `amount`. Account balances are left to
    /// the caller. Tags are written straight to the output, one per note, so
    /// the line is as long as the number of notes but nothing is buffered.
    pub fn deliver_cash(&mut self, amount: Balance) -> Result<CashBreakdown, TellerError> {
        let breakdown = CashBreakdown::compute(amount);
        writeln!(self.output, "{breakdown}")?;
        self.output.flush()?;
        Ok(breakdown)
    }

    fn prompt(&mut self, text: &str) -> Result<(), TellerError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Bytes that are not UTF-8 are replaced, so they end up as an unknown
    /// token or a malformed number rather than an I/O failure.
    fn read_line(&mut self) -> Result<String, TellerError> {
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(TellerError::InputClosed);
        }
        Ok(String::from_utf8_lossy(&line).into_owned())
    }

    fn read_integer(&mut self) -> Result<i64, TellerError> {
        let line = self.read_line()?;
        let input = line.trim();
        input.parse().map_err(|source| TellerError::Parse {
            input: input.to_owned(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teller(input: &str) -> Teller<&[u8], Vec<u8>> {
        Teller::new(input.as_bytes(), Vec::new())
    }

    fn output(teller: Teller<&[u8], Vec<u8>>) -> String {
        String::from_utf8(teller.into_output()).unwrap()
    }

    #[test]
    fn unknown_tokens_prompt_again() {
        let mut teller = teller("Q\nQ\nB\n");
        assert_eq!(teller.acquire_action().unwrap(), Action::Balance);
        assert_eq!(output(teller), ACTION_MENU.repeat(3));
    }

    #[test]
    fn money_actions_read_amount() {
        let mut teller = teller("+\n50\n-\n 120 \n");
        assert_eq!(teller.acquire_action().unwrap(), Action::Deposit(50));
        assert_eq!(teller.acquire_action().unwrap(), Action::Withdraw(120));
        assert_eq!(
            output(teller),
            format!("{ACTION_MENU}{AMOUNT_PROMPT}{ACTION_MENU}{AMOUNT_PROMPT}")
        );
    }

    #[test]
    fn session_ending_actions() {
        let mut teller = teller("=\nX\n");
        assert_eq!(teller.acquire_action().unwrap(), Action::Next);
        assert_eq!(teller.acquire_action().unwrap(), Action::Finished);
    }

    #[test]
    fn malformed_amount_is_not_retried() {
        let mut teller = teller("-\nlots\nB\n");
        let err = teller.acquire_action().unwrap_err();
        assert!(matches!(&err, TellerError::Parse { input, .. } if input == "lots"));
        assert_eq!(err.to_string(), "`lots` is not a number");
        // the rest of the input is left for the caller
        assert_eq!(teller.acquire_action().unwrap(), Action::Balance);
    }

    #[test]
    fn acquire_numbers_verbatim() {
        let mut teller = teller("42\n-3\n-250\n");
        assert_eq!(teller.acquire_id().unwrap(), 42);
        assert_eq!(teller.acquire_id().unwrap(), -3);
        assert_eq!(teller.acquire_amount().unwrap(), -250);
        assert_eq!(
            output(teller),
            format!("{ID_PROMPT}{ID_PROMPT}{AMOUNT_PROMPT}")
        );
    }

    #[test]
    fn non_numeric_id_fails() {
        let mut teller = teller("abc\n");
        assert!(matches!(
            teller.acquire_id(),
            Err(TellerError::Parse { input, .. }) if input == "abc"
        ));
    }

    #[test]
    fn closed_input() {
        let mut teller = teller("Q\n");
        assert!(matches!(
            teller.acquire_action(),
            Err(TellerError::InputClosed)
        ));
        assert!(matches!(teller.acquire_id(), Err(TellerError::InputClosed)));
    }

    #[test]
    fn invalid_utf8_token_prompts_again() {
        let mut teller = Teller::new(&b"\xff\nB\n"[..], Vec::new());
        assert_eq!(teller.acquire_action().unwrap(), Action::Balance);
        assert_eq!(output(teller), ACTION_MENU.repeat(2));
    }

    #[test]
    fn invalid_utf8_number_is_parse_error() {
        let mut teller = Teller::new(&b"\xff\n+\n5\xfe\n"[..], Vec::new());
        assert!(matches!(
            teller.acquire_id(),
            Err(TellerError::Parse { input, .. }) if input == "\u{FFFD}"
        ));
        assert!(matches!(
            teller.acquire_action(),
            Err(TellerError::Parse { input, .. }) if input == "5\u{FFFD}"
        ));
    }

    #[test]
    fn present_and_deliver() {
        let mut teller = teller("");
        teller.present_message("Welcome").unwrap();
        let cash = teller.deliver_cash(237).unwrap();
        assert_eq!(cash.leftover, 17);
        assert_eq!(output(teller), "Welcome\n[100 1][100 1][20 1]17\n");
    }
}
