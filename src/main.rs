//! Wallet Retriever - recover an Ethereum key and address from a mnemonic.
//!
//! Thin presentation layer over the library pipeline: parse arguments,
//! run one derivation, print the result. The private key is masked
//! unless `--reveal` is given.

use clap::Parser;
use colored::Colorize;

use wallet_retriever::{retrieve_at_path, retrieve_wallet, RetrievedWallet};

/// Retrieve an Ethereum private key and address from a BIP-39 mnemonic.
#[derive(Parser)]
#[command(name = "wallet-retriever", version, about)]
struct Cli {
    /// BIP-39 mnemonic phrase.
    #[arg(short, long)]
    mnemonic: String,

    /// Address index within the account (derives m/44'/60'/0'/0/{index}).
    #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
    index: i64,

    /// Explicit derivation path, overrides --index.
    #[arg(short, long)]
    path: Option<String>,

    /// Print the private key instead of masking it.
    #[arg(long)]
    reveal: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> wallet_retriever::Result<()> {
    let wallet = match &cli.path {
        Some(path) => retrieve_at_path(&cli.mnemonic, path)?,
        None => retrieve_wallet(&cli.mnemonic, cli.index)?,
    };

    print_wallet(&wallet, cli.reveal);
    Ok(())
}

fn print_wallet(wallet: &RetrievedWallet, reveal: bool) {
    println!("{} {}", "Path:".bold(), wallet.path);
    println!("{} {}", "Address:".bold(), wallet.address.green());
    if reveal {
        println!(
            "{} {}",
            "Private Key:".bold(),
            wallet.private_key_hex.as_str().red()
        );
    } else {
        println!("{} {}", "Private Key:".bold(), "***** (use --reveal)".dimmed());
    }
}
