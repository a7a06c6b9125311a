use std::{fs::File, io};

use anyhow::{Context, Result};
use atm::bin_utils::Service;

fn main() -> Result<()> {
    let filename = std::env::args()
        .nth(1)
        .context("Expected an accounts file name as the first argument")?;
    let file = File::open(&filename).with_context(|| format!("Failed to open `{filename}`"))?;

    let service = Service {
        accounts: file,
        input: io::stdin().lock(),
        output: &mut io::stdout(),
    };
    service.run()
}
