use crate::config::ShellConfig;
use std::fs;
use std::io::{self, BufRead, Write};
use tracing::warn;

const BANNER: &str = r"
   __ _  ___  ___| |__
  / _` |/ _ \/ __| '_ \
 | (_| | (_) \__ \ | | |
  \__, |\___/|___/_| |_|
  |___/
";

/// Name to greet: the flag, then `~/.gosh_user`, then asks once and saves it.
pub fn user_name<R: BufRead, W: Write>(
    config: &ShellConfig,
    input: &mut R,
    out: &mut W,
) -> io::Result<String> {
    if let Some(name) = &config.user_name {
        return Ok(name.clone());
    }
    if let Ok(saved) = fs::read_to_string(&config.user_path) {
        let saved = saved.trim();
        if !saved.is_empty() {
            return Ok(saved.to_string());
        }
    }

    write!(out, "Enter your name: ")?;
    out.flush()?;
    let mut name = String::new();
    input.read_line(&mut name)?;
    let name = name.trim().to_string();

    if let Err(e) = fs::write(&config.user_path, &name) {
        warn!(path = %config.user_path.display(), error = %e, "could not save user name");
    }
    Ok(name)
}

pub fn print_banner<W: Write>(out: &mut W, user: &str) -> io::Result<()> {
    writeln!(out, "{BANNER}")?;
    writeln!(out, "Welcome to your personal shell, {user}! Type 'exit' to quit.")?;
    writeln!(out)
}
