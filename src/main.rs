mod logging;

use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use tracing::error;

use nm_extract::{Input, Mode};

const AFTER_HELP: &str = r#"Examples:
    nm-extract -p scan.xml          prints -p21,22,139,445
    nmap -oX - 10.10.10.3 | nm-extract
    nmap -sV $(nm-extract -p scan.xml) $(nm-extract -a scan.xml)

Only the first host of the report is read."#;

/// Parse XML output from Nmap (file or stdin) to get reusable information
#[derive(Parser, Debug)]
#[command(name = "nm-extract", version, after_help = AFTER_HELP)]
struct CommandLine {
    /// nmap -oX report, `-` or nothing for stdin
    #[arg(value_name = "FILE")]
    file: Option<String>,

    /// Get hostnames
    #[arg(short = 'n', long)]
    hostnames: bool,

    /// Get address
    #[arg(short, long)]
    address: bool,

    /// List open ports
    #[arg(short, long)]
    ports: bool,

    /// Log progress to stderr, repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl CommandLine {
    fn mode(&self) -> Mode {
        Mode::from_flags(self.ports, self.address, self.hostnames)
    }
}

fn run(commands: &CommandLine) -> anyhow::Result<()> {
    let input = Input::from_arg(commands.file.as_deref());
    let out = nm_extract::process(&input, commands.mode())?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", out)?;
    stdout.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let commands = CommandLine::parse();
    logging::init(commands.verbose);

    match run(&commands) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
