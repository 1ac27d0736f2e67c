use clap::{Parser as ClapParser, Subcommand};
use mylang::config::{Config, OutputFormat};
use mylang::error::MyLangError;
use mylang::repl::{lex_file, Repl};
use std::io;
use std::path::PathBuf;

#[derive(ClapParser)]
#[command(author, version, about = "MyLang lexer and token shell")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive token shell (the default)
    Repl {
        /// Print tokens as JSON objects
        #[arg(long)]
        json: bool,
    },
    /// Tokenize a source file and print every token
    Lex {
        /// Path of the source file
        file: PathBuf,
        /// Print tokens as JSON objects
        #[arg(long)]
        json: bool,
        /// Fail on the first unrecognized character
        #[arg(long)]
        strict: bool,
    },
    /// Manage the MyLang configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Write a config file with defaults
    Init,
    /// Print the config file location
    Path,
}

fn output_format(json: bool, config: &Config) -> OutputFormat {
    if json {
        OutputFormat::Json
    } else {
        config.output
    }
}

// `path` and `init` never parse the config file, so they still work when it
// is malformed.
fn run_config_command(command: ConfigCommands) -> Result<(), MyLangError> {
    match command {
        ConfigCommands::Show => {
            let config = load_config()?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigCommands::Init => {
            let config_path = Config::get_config_path();
            if Config::init_at(&config_path)? {
                println!("Initialized new config file at: {}", config_path.display());
            } else {
                println!("Config file already exists at: {}", config_path.display());
            }
        }
        ConfigCommands::Path => {
            println!("{}", Config::get_config_path().display());
        }
    }
    Ok(())
}

fn load_config() -> Result<Config, MyLangError> {
    let config = Config::load()?;
    mylang::init_tracing(&config.log_filter());
    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        None => {
            let config = load_config()?;
            let stdin = io::stdin();
            Repl::new(&config).run(stdin.lock(), &mut io::stdout())?;
        }
        Some(Commands::Repl { json }) => {
            let mut config = load_config()?;
            config.output = output_format(json, &config);
            let stdin = io::stdin();
            Repl::new(&config).run(stdin.lock(), &mut io::stdout())?;
        }
        Some(Commands::Lex { file, json, strict }) => {
            let config = load_config()?;
            let stdout = io::stdout();
            lex_file(&file, output_format(json, &config), strict, &mut stdout.lock())?;
        }
        Some(Commands::Config { command }) => {
            mylang::init_tracing(&Config::default().log_filter());
            run_config_command(command)?;
        }
    }

    Ok(())
}
