use clap::{Parser, Subcommand};
use log::debug;
use nesgenie::random::CodeGenerator;
use nesgenie::{Genie, GenieConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nesgenie", author, version, about = "NES cheat code toolkit")]
struct Args {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Generate random code
    #[command(visible_alias = "r")]
    Random {
        /// Number of codes to generate
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
        /// Seed for a repeatable sequence of codes
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Get info on code
    #[command(visible_alias = "n")]
    Info {
        /// 6-/8-character code
        code: String,
    },
    /// Change details of a code
    #[command(visible_alias = "e")]
    Change {
        /// 6-/8-character code to change
        code: String,
        /// Replacement value
        #[arg(short, long, value_parser = parse_byte)]
        value: u8,
        /// Compare value, turns the result into an 8-character code
        #[arg(short, long, value_parser = parse_byte)]
        compare: Option<u8>,
    },
    /// Expand code to 8-character using a ROM
    #[command(visible_alias = "i")]
    Improve {
        /// 6-character code to improve
        code: String,
        /// Path to ROM file
        #[arg(short, long)]
        rom: PathBuf,
    },
    /// Find where a value is statically assigned
    #[command(visible_aliases = ["s", "char"])]
    Search {
        /// Value to search for, use `0x` prefix for hex
        #[arg(value_parser = parse_byte)]
        literal: u8,
        /// Path to ROM file
        #[arg(short, long)]
        rom: PathBuf,
        /// Replacement value; defaults to the configured value (200)
        #[arg(short, long, value_parser = parse_byte)]
        value: Option<u8>,
        /// Include X and Y register stores from the start
        #[arg(long)]
        harder: bool,
        /// Emit 6-character codes without compare byte
        #[arg(long)]
        short: bool,
        /// Require a matching decrement elsewhere in the program
        #[arg(long)]
        check_dec: bool,
    },
}

fn parse_byte(s: &str) -> Result<u8, String> {
    let value = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse::<u32>(),
    }
    .map_err(|e| format!("Invalid number '{}': {}", s, e))?;
    u8::try_from(value).map_err(|_| format!("{} does not fit in one byte", s))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => GenieConfig::load(path)?,
        None => GenieConfig::default(),
    };
    let mut genie = Genie::new(config);
    debug!("configuration: {:?}", genie.config());

    match args.action {
        Action::Random { count, seed } => {
            if let Some(seed) = seed {
                genie = genie.with_generator(CodeGenerator::new_predictable(seed));
            }
            for _ in 0..count {
                println!("{}", genie.generate_random_code());
            }
        }
        Action::Info { code } => {
            println!("{}", genie.decode_code(&code)?);
        }
        Action::Change {
            code,
            value,
            compare,
        } => {
            println!("{}", genie.reencode(&code, value, compare)?);
        }
        Action::Improve { code, rom } => {
            for code in genie.expand_safer(&code, &rom)? {
                println!("{}", code);
            }
        }
        Action::Search {
            literal,
            rom,
            value,
            harder,
            short,
            check_dec,
        } => {
            let mut options = genie.default_seek_options();
            if let Some(value) = value {
                options.write = value;
            }
            options.harder |= harder;
            options.short |= short;
            options.check_dec |= check_dec;
            for code in genie.seek_char(literal, &rom, &options)? {
                println!("{}", code);
            }
        }
    }

    Ok(())
}
