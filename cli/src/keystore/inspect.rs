use std::path::PathBuf;

use clap::Args;
use jks::{Entry, Keystore};
use serde::Serialize;

use crate::error::{Error, Result};
use crate::output::OutputFormat;
use crate::utils::read_input;

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the keystore. If not specified, reads from stdin
    file: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    output: OutputFormat,
}

#[derive(Debug, Serialize)]
struct KeystoreReport {
    format: &'static str,
    entries: Vec<EntryReport>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum EntryReport {
    PrivateKey {
        alias: String,
        encrypted_key_len: usize,
        chain_len: usize,
    },
    Certificate {
        cert_type: String,
        len: usize,
    },
}

impl From<&Keystore> for KeystoreReport {
    fn from(keystore: &Keystore) -> Self {
        let entries = keystore
            .entries()
            .iter()
            .map(|entry| match entry {
                Entry::PrivateKey(key) => EntryReport::PrivateKey {
                    alias: key.name().to_string(),
                    encrypted_key_len: key.encrypted_key().len(),
                    chain_len: key.cert_chain().len(),
                },
                Entry::Certificate(cert) => EntryReport::Certificate {
                    cert_type: cert.cert_type().to_string(),
                    len: cert.data().len(),
                },
            })
            .collect();
        KeystoreReport {
            format: keystore.format(),
            entries,
        }
    }
}

impl KeystoreReport {
    fn to_text(&self) -> String {
        let count = self.entries.len();
        let mut out = format!("Keystore: {} ({count} entries)\n", self.format);
        for (index, entry) in self.entries.iter().enumerate() {
            let line = match entry {
                EntryReport::PrivateKey {
                    alias,
                    encrypted_key_len,
                    chain_len,
                } => format!(
                    "  [{index}] private key \"{alias}\": {encrypted_key_len} byte encrypted key, \
                     {chain_len} chain certificate(s)\n"
                ),
                EntryReport::Certificate { cert_type, len } => {
                    format!("  [{index}] certificate {cert_type}: {len} bytes\n")
                }
            };
            out.push_str(&line);
        }
        out
    }
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let input = read_input(config.file.as_deref())?;
    let content = loader::strip_garbage_header(&input);

    let keystore = jks::parse(content)?.ok_or(Error::NotKeystore)?;
    let report = KeystoreReport::from(&keystore);

    match config.output {
        OutputFormat::Text => print!("{}", report.to_text()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Yaml => println!("{}", serde_yml::to_string(&report)?),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use jks::testing::KeystoreBuilder;

    use super::KeystoreReport;

    #[test]
    fn test_text_report() {
        let bytes = KeystoreBuilder::new()
            .key_entry("server", &[0u8; 30], &[("X.509", &[0x30, 0x00])])
            .cert_entry("X.509", &[0x30, 0x01, 0x00])
            .build();
        let keystore = jks::parse(&bytes).unwrap().unwrap();
        let text = KeystoreReport::from(&keystore).to_text();
        let expected = concat!(
            "Keystore: jks (2 entries)\n",
            "  [0] private key \"server\": 6 byte encrypted key, 1 chain certificate(s)\n",
            "  [1] certificate X.509: 3 bytes\n",
        );
        assert_eq!(expected, text);
    }
}
