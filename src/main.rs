use clap::Parser;
use schema_deployer::core::deploy::read_schema;
use schema_deployer::utils::{logger, validation::Validate};
use schema_deployer::{AppSyncService, CliConfig, DeployError, DeploymentEngine, LocalStorage};

fn report_failure(e: &DeployError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    if let DeployError::Timeout {
        last_error: Some(last_error),
        ..
    } = e
    {
        tracing::error!("Last poll error: {}", last_error);
    }
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!();
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.load() {
        Ok(config) => config,
        Err(e) => report_failure(&e),
    };
    if let Err(e) = config.validate() {
        report_failure(&e);
    }

    let storage = LocalStorage::default();

    if cli.dry_run {
        tracing::info!("🔍 DRY RUN MODE - AppSync will not be contacted");
        match read_schema(&storage, &config.schema_path).await {
            Ok(schema) => {
                println!("📄 Read schema ({} characters)", schema.chars().count());
                println!("✅ Dry run complete for API {} in {}", config.api_id, config.region);
            }
            Err(e) => report_failure(&e),
        }
        return;
    }

    let service = AppSyncService::connect(&config.region, config.endpoint_url.as_deref()).await;
    let engine = DeploymentEngine::new(service, storage, config);

    match engine.run().await {
        Ok(report) => {
            tracing::info!(
                "Deployment of {} finished in {}s after {} polls",
                report.api_id,
                report.elapsed().num_seconds(),
                report.completion.attempts()
            );
            println!();
            println!("{}", "═".repeat(50));
            println!("🎉 Schema Deployment Complete!");
            println!("{}", "═".repeat(50));
            println!();
            println!("Next steps:");
            println!("1. Deploy resolvers for any new fields");
            println!("2. Test queries in the AppSync console");
            println!("3. Refresh your web app");
            println!();
        }
        Err(e) => report_failure(&e),
    }
}
