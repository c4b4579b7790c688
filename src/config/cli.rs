use crate::config::toml_config::TomlConfig;
use crate::config::ClientConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "formfill")]
#[command(about = "Send PDFs to the form-filling service and print its answer")]
pub struct CliConfig {
    /// Source PDF, repeat for several files
    #[arg(long = "input", required = true)]
    pub input_files: Vec<String>,

    /// Fillable PDF form used as template
    #[arg(long = "form")]
    pub form_file: String,

    #[arg(long = "output")]
    pub output_file: String,

    /// Overrides `api.base_url` from the config file
    #[arg(long)]
    pub api_base_url: Option<String>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// TOML file with an `[api]` section
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    /// 優先順序：命令列參數 > 設定檔 > 預設值
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading config file {}", path.display());
                TomlConfig::from_file(path)?.to_client_config()
            }
            None => ClientConfig::default(),
        };

        if let Some(url) = &self.api_base_url {
            config.api_base_url = url.clone();
        }
        if let Some(seconds) = self.timeout_seconds {
            config.timeout_seconds = Some(seconds);
        }

        config.validate()?;
        Ok(config)
    }
}
