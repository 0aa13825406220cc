use clap::{Parser, Subcommand};

mod enc;
mod list;

/// rawcipher command-line tool for raw symmetric cipher transforms.
#[derive(Parser)]
#[command(name = "rawcipher")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Enable debug logging (overrides RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Raw (unpadded) encryption/decryption of a whole file.
    Enc {
        /// Cipher algorithm (e.g. aes-256-cbc, sm4-ctr, des-ede3-cbc).
        #[arg(short, long)]
        cipher: String,
        /// Decrypt mode.
        #[arg(short, long)]
        decrypt: bool,
        /// Input file.
        #[arg(short, long)]
        input: String,
        /// Output file.
        #[arg(short, long)]
        output: String,
        /// Key as hex.
        #[arg(short, long, env = "RAWCIPHER_KEY", hide_env_values = true)]
        key: String,
        /// IV as hex (omit for ECB).
        #[arg(long, env = "RAWCIPHER_IV", default_value = "")]
        iv: String,
    },
    /// List supported ciphers with their key, IV and block sizes.
    List,
}

fn main() {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn"),
    );
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let result = match cli.command {
        Commands::Enc {
            cipher,
            decrypt,
            input,
            output,
            key,
            iv,
        } => enc::run(&cipher, decrypt, &input, &output, &key, &iv),
        Commands::List => list::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
