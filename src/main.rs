use std::io::{self, IsTerminal, Read, Write};

use clap::Parser;
use vshell::{Profile, Session};

#[derive(Parser)]
#[command(name = "vshell")]
#[command(about = "An in-memory Unix-like shell with a vi-style modal editor")]
#[command(version)]
struct Cli {
    /// Execute a single command line and exit
    #[arg(short = 'c')]
    command: Option<String>,

    /// Filesystem profile to seed the session with
    #[arg(long = "profile", default_value = "default")]
    profile: String,

    /// Script file to execute line-by-line
    #[arg()]
    script_file: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    let profile = Profile::parse(&cli.profile);
    let mut session = Session::initialize(profile);

    if let Some(command) = cli.command {
        std::process::exit(run_line(&mut session, &command));
    }

    if let Some(path) = cli.script_file {
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                eprintln!("vshell: {path}: {err}");
                std::process::exit(1);
            }
        };
        let mut exit_code = 0;
        for line in content.lines() {
            exit_code = run_line(&mut session, line);
        }
        std::process::exit(exit_code);
    }

    if io::stdin().is_terminal() {
        run_repl(&mut session);
        return;
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf).unwrap_or_default();
    let mut exit_code = 0;
    for line in buf.lines() {
        exit_code = run_line(&mut session, line);
    }
    std::process::exit(exit_code);
}

fn run_line(session: &mut Session, line: &str) -> i32 {
    let result = session.execute(line);
    let text = result.output.flatten();
    if !text.is_empty() {
        print!("{text}");
    }
    if let Some(err) = &result.error {
        eprintln!("{err}");
    }
    result.exit_code
}

fn run_repl(session: &mut Session) {
    loop {
        print!("{} $ ", session.fs.pwd());
        let _ = io::stdout().flush();

        let mut line = String::new();
        if io::stdin().read_line(&mut line).unwrap_or(0) == 0 {
            break;
        }
        let line = line.trim_end_matches('\n');
        if line.is_empty() {
            continue;
        }
        run_line(session, line);
    }
}
