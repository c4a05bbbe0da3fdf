use std::path::{Path, PathBuf};

use clap::Args;
use loader::{MaterialRecord, Password, PathSource, SourceConfiguration};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::output::OutputFormat;
use crate::utils::{read_file, read_text};

#[derive(Args)]
pub(crate) struct Config {
    /// PEM file holding the private key
    #[arg(long, value_name = "FILE")]
    key_pem: Option<PathBuf>,

    /// PEM file holding the certificate
    #[arg(long, value_name = "FILE")]
    cert_pem: Option<PathBuf>,

    /// JKS keystore or password protected container (repeatable)
    #[arg(long, value_name = "FILE")]
    key_file: Vec<PathBuf>,

    /// PEM certificate file (repeatable)
    #[arg(long, value_name = "FILE")]
    cert_file: Vec<PathBuf>,

    /// Deprecated: key container read through the legacy path field
    #[arg(long, value_name = "FILE")]
    key_path: Vec<PathBuf>,

    /// Deprecated: certificate read through the legacy path field
    #[arg(long, value_name = "FILE")]
    cert_path: Vec<PathBuf>,

    /// Password for keystores and containers
    #[arg(long)]
    password: Option<String>,

    /// Algorithm hint for password protected containers
    #[arg(long)]
    algorithm: Option<String>,

    /// YAML or JSON file listing sources; flags are added after its entries
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    output: OutputFormat,
}

/// Sources listed in a `--config` file. Relative paths are taken from the
/// file's directory.
#[derive(Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct SourcesFile {
    private_key_pem: Option<PathBuf>,
    certificate_pem: Option<PathBuf>,
    key_files: Vec<PathBuf>,
    cert_files: Vec<PathBuf>,
    private_key_path: Vec<PathBuf>,
    certificate_path: Vec<PathBuf>,
    password: Option<String>,
    algorithm: Option<String>,
}

impl SourcesFile {
    fn read(path: &Path) -> Result<Self> {
        let text = read_text(path)?;
        let json = path.extension().is_some_and(|ext| ext == "json");
        let parsed = if json {
            serde_json::from_str(&text).map_err(|e| e.to_string())
        } else {
            serde_yml::from_str(&text).map_err(|e| e.to_string())
        };
        let file: SourcesFile = parsed.map_err(|message| Error::SourcesFile {
            path: path.to_path_buf(),
            message,
        })?;
        Ok(file.relative_to(path.parent().unwrap_or(Path::new(""))))
    }

    fn relative_to(self, base: &Path) -> Self {
        let join = |path: PathBuf| base.join(path);
        SourcesFile {
            private_key_pem: self.private_key_pem.map(join),
            certificate_pem: self.certificate_pem.map(join),
            key_files: self.key_files.into_iter().map(join).collect(),
            cert_files: self.cert_files.into_iter().map(join).collect(),
            private_key_path: self.private_key_path.into_iter().map(join).collect(),
            certificate_path: self.certificate_path.into_iter().map(join).collect(),
            password: self.password,
            algorithm: self.algorithm,
        }
    }

    /// Appends the command line sources after the file's. Single valued
    /// flags replace the file's value.
    fn merge(mut self, config: Config) -> Self {
        self.private_key_pem = config.key_pem.or(self.private_key_pem);
        self.certificate_pem = config.cert_pem.or(self.certificate_pem);
        self.key_files.extend(config.key_file);
        self.cert_files.extend(config.cert_file);
        self.private_key_path.extend(config.key_path);
        self.certificate_path.extend(config.cert_path);
        self.password = config.password.or(self.password);
        self.algorithm = config.algorithm.or(self.algorithm);
        self
    }

    fn into_configuration(self) -> Result<SourceConfiguration> {
        Ok(SourceConfiguration {
            private_key_pem: self.private_key_pem.as_deref().map(read_text).transpose()?,
            certificate_pem: self.certificate_pem.as_deref().map(read_text).transpose()?,
            password: self.password.map(Password::from),
            algorithm: self.algorithm,
            key_buffers: read_all(&self.key_files)?,
            cert_buffers: read_all(&self.cert_files)?,
            private_key_path: path_source(self.private_key_path),
            certificate_path: path_source(self.certificate_path),
            ..Default::default()
        })
    }
}

fn read_all(paths: &[PathBuf]) -> Result<Vec<Vec<u8>>> {
    paths.iter().map(|path| read_file(path)).collect()
}

fn path_source(mut paths: Vec<PathBuf>) -> Option<PathSource> {
    match paths.len() {
        0 => None,
        1 => paths.pop().map(PathSource::Single),
        _ => Some(PathSource::Many(paths)),
    }
}

#[derive(Debug, Serialize)]
struct RecordReport {
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<&'static str>,
    der_len: usize,
}

impl From<&MaterialRecord> for RecordReport {
    fn from(record: &MaterialRecord) -> Self {
        match record {
            MaterialRecord::PrivateKey(key) => RecordReport {
                kind: record.kind(),
                format: Some(key.format().name()),
                der_len: key.der().len(),
            },
            MaterialRecord::Certificate(cert) => RecordReport {
                kind: record.kind(),
                format: None,
                der_len: cert.der().len(),
            },
        }
    }
}

impl RecordReport {
    fn to_text(&self) -> String {
        match self.format {
            Some(format) => format!("{} ({format}, {} bytes)", self.kind, self.der_len),
            None => format!("{} ({} bytes)", self.kind, self.der_len),
        }
    }
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let sources = match &config.config {
        Some(path) => SourcesFile::read(path)?,
        None => SourcesFile::default(),
    };
    let output = config.output;
    let sources = sources.merge(config);
    debug!(
        key_files = sources.key_files.len(),
        cert_files = sources.cert_files.len(),
        "resolved sources"
    );

    let records = loader::load(&sources.into_configuration()?)?;
    let reports: Vec<RecordReport> = records.iter().map(RecordReport::from).collect();

    match output {
        OutputFormat::Text => {
            for report in &reports {
                println!("{}", report.to_text());
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
        OutputFormat::Yaml => println!("{}", serde_yml::to_string(&reports)?),
    }

    Ok(())
}
