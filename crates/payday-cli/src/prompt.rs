//! Interactive input on stdin.

use std::io::{self, BufRead, Write};

use payday_client::PhonePrompt;
use payday_core::Plan;

/// Read one line after printing `label` to stderr. `None` on EOF.
pub fn read_line(label: &str) -> io::Result<Option<String>> {
    let mut stderr = io::stderr();
    write!(stderr, "{label}")?;
    stderr.flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Asks for the M-Pesa number on the terminal. EOF or a read error dismisses.
pub struct StdinPrompt;

impl PhonePrompt for StdinPrompt {
    fn ask_phone(&mut self, plan: &Plan) -> Option<String> {
        let label = format!("M-Pesa number for {} ({}): ", plan.name, plan.price);
        read_line(&label).ok().flatten()
    }
}
