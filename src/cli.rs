//! CLI argument parsing module for enva

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Parse duration string in format: N or Ns (seconds), Nm (minutes)
fn parse_duration(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty duration string".to_string());
    }

    let (num_str, unit) = if let Some(n) = s.strip_suffix('s') {
        (n, 's')
    } else if let Some(n) = s.strip_suffix('m') {
        (n, 'm')
    } else {
        (s, 's')
    };

    let num: u64 = num_str
        .parse()
        .map_err(|_| format!("invalid number in duration: {}", num_str))?;

    if num == 0 {
        return Err("duration must be greater than zero".to_string());
    }

    let seconds = match unit {
        's' => Some(num),
        'm' => num.checked_mul(60),
        _ => unreachable!(),
    }
    .ok_or_else(|| format!("duration too large: {}", s))?;

    Ok(Duration::from_secs(seconds))
}

/// Python virtual environment health validator
#[derive(Parser, Debug, Clone)]
#[command(
    name = "enva",
    version,
    about = "Python virtual environment health validator"
)]
pub struct CliArgs {
    /// Virtual environment path (default: auto-detect, then ./venv)
    #[arg(long, value_name = "PATH")]
    pub venv: Option<PathBuf>,

    // Output options
    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Timeout for each python/pip invocation (e.g., 30, 45s, 2m)
    #[arg(
        long,
        value_name = "DUR",
        env = "ENVA_TIMEOUT",
        default_value = "30",
        value_parser = parse_duration
    )]
    pub timeout: Duration,

    // General options
    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - no progress spinner
    #[arg(short, long)]
    pub quiet: bool,
}
