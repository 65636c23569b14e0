//! Encrypt command - seals a value for the settings file

use clap::Args;
use tracing::info;

use crate::domain::Encryptor;
use crate::infrastructure::crypto::AesGcmEncryptor;

/// Arguments for the encrypt command
#[derive(Args, Clone, Debug)]
pub struct EncryptArgs {
    /// Plaintext to encrypt (e.g. an OpenAI API key)
    pub plaintext: String,
}

pub async fn run(args: EncryptArgs) -> anyhow::Result<()> {
    let config = super::bootstrap();

    let encryptor = AesGcmEncryptor::new(&config.crypt.key)?;
    let sealed = encryptor.encrypt(&args.plaintext)?;

    info!("Value encrypted");
    println!("{}", sealed);

    Ok(())
}
