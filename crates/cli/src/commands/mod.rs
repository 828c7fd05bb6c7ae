//! CLI subcommands.
//!
//! Every command loads the configured seed data afresh. Changes to stock
//! (production starts, shipped orders) are reported but not written back.

use std::io::Write;

use serde::Serialize;

pub mod check;
pub mod inventory;
pub mod plan;
pub mod send;

/// Write `value` to stdout as pretty-printed JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
