use anyhow::Context;
use clap::Parser;
use portfolio_maker::core::{ConfigProvider, PortfolioStore};
use portfolio_maker::utils::{logger, validation::Validate};
use portfolio_maker::{
    export_file_name, ExportEngine, ExportPipeline, JsonPortfolioStore, LocalStorage, TomlConfig,
};

#[derive(Parser)]
#[command(name = "toml-export")]
#[command(about = "Export a stored portfolio using a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "portfolio.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Show what would be exported without writing anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 載入 TOML 配置
    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if args.verbose {
        logger::init_cli_logger(true);
    } else {
        logger::init_with_level(config.log_level());
    }

    tracing::info!("🚀 Starting TOML-based portfolio export");
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    display_config_summary(&config, &args);

    let store = JsonPortfolioStore::new(LocalStorage::new(config.store_path()), config.store_key());

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be written");
        perform_dry_run(&config, &store).await?;
        return Ok(());
    }

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let output = LocalStorage::new(config.output_path());
    let pipeline = ExportPipeline::new(store, output, config);
    let engine = ExportEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(output_path) => {
            println!("✅ Portfolio exported to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Export failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = e.exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    println!("  Store: {} (key '{}')", config.store_path(), config.store_key());
    println!("  Output: {}", config.output_path());
    if let Some(file_name) = config.file_name_override() {
        println!("  File name: {}", file_name);
    }

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

async fn perform_dry_run(
    config: &TomlConfig,
    store: &JsonPortfolioStore<LocalStorage>,
) -> anyhow::Result<()> {
    let data = store
        .load()
        .await
        .with_context(|| format!("loading portfolio from '{}'", config.store_path()))?;
    let file_name = config
        .file_name_override()
        .map(str::to_string)
        .unwrap_or_else(|| export_file_name(&data.personal.name));

    println!("🔍 Dry Run Analysis:");
    println!("  Name: {}", data.personal.name);
    println!("  Skills: {}", data.skills.len());
    println!("  Projects: {}", data.projects.len());
    println!("  Experience: {}", data.experience.len());
    println!(
        "  Would write: {}",
        std::path::Path::new(config.output_path()).join(file_name).display()
    );

    Ok(())
}
