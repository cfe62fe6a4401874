use anyhow::{Context, Result};
use pico_args::Arguments;
use powerline_shell::config::{self, CONFIG_ENV};
use powerline_shell::{generate_prompt, PromptFacts, Shell};
use std::env;
use std::path::PathBuf;

#[derive(Debug)]
struct Args {
    shell: String,
    exit_code: String,
    width: String,
    theme: Option<String>,
    symbols: Option<String>,
    config: Option<PathBuf>,
    help: bool,
}

impl Args {
    fn from_env() -> Result<Self> {
        let mut args = Arguments::from_env();

        let help = args.contains(["-h", "--help"]);
        let theme = args.opt_value_from_str("--theme")?;
        let symbols = args.opt_value_from_str("--symbols")?;
        let config = args
            .opt_value_from_str::<_, PathBuf>("--config")?
            .or_else(|| env::var_os(CONFIG_ENV).map(PathBuf::from));

        // Positionals come last: SHELL EXIT_CODE WIDTH
        let shell = args.opt_free_from_str()?.unwrap_or_else(|| "bash".to_string());
        let exit_code = args.opt_free_from_str()?.unwrap_or_else(|| "0".to_string());
        let width = args.opt_free_from_str()?.unwrap_or_else(|| "0".to_string());

        Ok(Self {
            shell,
            exit_code,
            width,
            theme,
            symbols,
            config,
            help,
        })
    }
}

fn main() -> Result<()> {
    let args = Args::from_env()?;

    if args.help {
        print_help();
        return Ok(());
    }

    let mut config = config::load_config(args.config.clone()).context("Failed to load configuration")?;
    if let Some(theme) = args.theme {
        config.theme = theme;
    }
    if let Some(symbols) = args.symbols {
        config.symbols = symbols;
    }

    let facts = PromptFacts::gather(&config, &args.exit_code)?;
    let prompt = generate_prompt(&config, Shell::from_name(&args.shell), &facts, &args.width);
    print!("{}", prompt);

    Ok(())
}

fn print_help() {
    println!("powerline-shell - two-line powerline prompt for bash and zsh");
    println!();
    println!("USAGE:");
    println!("    powerline-shell [OPTIONS] [SHELL] [EXIT_CODE] [WIDTH]");
    println!();
    println!("ARGS:");
    println!("    SHELL        bash, zsh or test [default: bash]");
    println!("    EXIT_CODE    Exit status of the previous command [default: 0]");
    println!("    WIDTH        Terminal width in columns [default: 0]");
    println!();
    println!("OPTIONS:");
    println!("    --theme <THEME>        Theme: dark, light [default: dark]");
    println!("    --symbols <SET>        Symbols: powerline, compatible [default: powerline]");
    println!("    --config <FILE>        Custom config file path");
    println!("    -h, --help             Show this help message");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    POWERLINE_SHELL_THEME      Override theme");
    println!("    POWERLINE_SHELL_SYMBOLS    Override symbol set");
    println!("    POWERLINE_SHELL_CONFIG     Override config path");
    println!("    POWERLINE_SHELL_DEBUG      Enable debug logging on stderr");
    println!();
    println!("BASH:");
    println!("    PROMPT_COMMAND='PS1=\"$(powerline-shell bash $? $COLUMNS)\"'");
}
