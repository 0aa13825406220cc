//! List supported ciphers.

use rawcipher_crypto::supported_ciphers;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("Raw ciphers:");
    println!("  {:<16} {:>4} {:>4} {:>6}", "NAME", "KEY", "IV", "BLOCK");
    for d in supported_ciphers() {
        println!(
            "  {:<16} {:>4} {:>4} {:>6}",
            d.name, d.key_len, d.iv_len, d.block_size
        );
    }
    Ok(())
}
