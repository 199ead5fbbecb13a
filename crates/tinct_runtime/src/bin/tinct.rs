//! Tinct CLI entry point.

use std::env;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tinct_engine::EngineConfig;
use tinct_runtime::Repl;
use tracing_subscriber::EnvFilter;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    files: Vec<PathBuf>,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
    strict: bool,
    console: bool,
    marker: Option<char>,
}

fn main() -> ExitCode {
    init_tracing();
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr, filtered by `TINCT_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_env("TINCT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "--strict" => config.strict = true,
            "--console" => config.console = true,
            "--marker" => {
                i += 1;
                let value = args.get(i).ok_or("--marker requires a value")?;
                let mut chars = value.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => config.marker = Some(c),
                    _ => return Err(format!("invalid --marker value: {value}").into()),
                }
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => config.files.push(PathBuf::from(path)),
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("tinct {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut engine_config = if config.strict {
        EngineConfig::strict()
    } else {
        EngineConfig::default()
    };
    if let Some(marker) = config.marker {
        engine_config = engine_config.with_marker(marker);
    }

    let mut repl = Repl::new(engine_config)?;
    repl.terminal().set_interactive(!config.console);

    for file in &config.files {
        repl.eval_file(file)?;
    }

    if config.batch_mode {
        return Ok(());
    }

    if !config.files.is_empty() {
        repl = repl.without_banner();
    }

    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mTinct\x1b[0m - Styled message markup preview

\x1b[1mUSAGE:\x1b[0m
    tinct [OPTIONS] [FILES...]

\x1b[1mARGUMENTS:\x1b[0m
    [FILES...]    Template files to render, one template per line

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    -b, --batch        Render files and exit (no REPL)
    --strict           Disable simple mode (no #RGB or short gradients)
    --console          Preview as the console instead of a player
    --marker C         Use C instead of & as the style-code marker

\x1b[1mENVIRONMENT:\x1b[0m
    TINCT_LOG          Log filter, e.g. debug or tinct_span=trace

\x1b[1mEXAMPLES:\x1b[0m
    tinct                           Start interactive preview
    tinct -b motd.txt               Render motd.txt and exit
    tinct --console -b motd.txt     Render motd.txt as the console sees it

\x1b[1mREPL COMMANDS:\x1b[0m
    :set TOKEN VALUE     Substitute TOKEN in later lines
    :player / :console   Switch the previewed recipient
    :help                List every command
    Ctrl+D               Exit REPL"
    );
}
