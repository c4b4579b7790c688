use clap::Parser;
use formfill::utils::logger;
use formfill::{CliConfig, ErrorCategory, FormFillError, PdfApiClient};

fn exit_code(e: &FormFillError) -> i32 {
    match e.category() {
        ErrorCategory::Response => 1,
        ErrorCategory::Transport => 2,
        ErrorCategory::Config => 3,
    }
}

fn fail(e: FormFillError) -> ! {
    tracing::error!("❌ {} (Category: {:?})", e, e.category());
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(exit_code(&e));
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    let config = cli.client_config().unwrap_or_else(|e| fail(e));
    tracing::debug!("Client config: {:?}", config);

    let client = PdfApiClient::new(config).unwrap_or_else(|e| fail(e));
    tracing::info!(
        "Sending {} input file(s) to {}",
        cli.input_files.len(),
        client.endpoint()
    );

    let response = client
        .process(cli.input_files.clone(), &cli.form_file, &cli.output_file)
        .await
        .unwrap_or_else(|e| fail(e));

    tracing::info!("✅ {}: {}", response.status, response.output_file);
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
