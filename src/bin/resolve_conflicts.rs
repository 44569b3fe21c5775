use anyhow::{Context, Result};
use clap::Parser;
use schema_deployer::core::conflicts::clean_file;
use schema_deployer::utils::logger;
use schema_deployer::LocalStorage;

#[derive(Parser)]
#[command(name = "resolve-conflicts")]
#[command(about = "Strip merge-conflict blocks from a markdown file, keeping the HEAD side")]
struct Args {
    /// File to clean in place
    #[arg(default_value = "Tasks.md")]
    file: String,

    /// Report what would change without rewriting the file
    #[arg(long)]
    dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let storage = LocalStorage::default();
    let resolution = clean_file(&storage, &args.file, args.dry_run)
        .await
        .with_context(|| format!("failed to clean {}", args.file))?;

    if !resolution.changed() {
        println!("No merge conflicts found in {}", args.file);
    } else if args.dry_run {
        println!(
            "Would resolve {} merge conflicts in {}",
            resolution.blocks_resolved, args.file
        );
    } else {
        println!("Merge conflicts resolved!");
        println!(
            "{} cleaned successfully ({} blocks)",
            args.file, resolution.blocks_resolved
        );
    }
    Ok(())
}
