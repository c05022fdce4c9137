use clap::Parser;
use portfolio_maker::config::{Command, ExperienceAction, ProjectAction, SkillAction};
use portfolio_maker::core::ConfigProvider;
use portfolio_maker::utils::{logger, validation::Validate};
use portfolio_maker::{
    CliConfig, Editor, ExportEngine, ExportPipeline, ImageUpload, JsonPortfolioStore,
    LocalStorage, PortfolioError,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(config).await {
        if e.is_warning() {
            tracing::warn!("⚠️ {}", e);
            eprintln!("⚠️ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            return Ok(());
        }

        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
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

    Ok(())
}

async fn run(config: CliConfig) -> Result<(), PortfolioError> {
    let store = JsonPortfolioStore::new(
        LocalStorage::new(config.store_path()),
        config.store_key(),
    );
    let limit = config.max_upload_bytes();

    let mut editor = Editor::open(store.clone()).await?.with_upload_limit(limit);

    match config.command.clone() {
        Command::Export => {
            let output = LocalStorage::new(config.output_path());
            let monitor_enabled = config.monitor;
            let pipeline = ExportPipeline::new(store, output, config);
            let engine = ExportEngine::new_with_monitoring(pipeline, monitor_enabled);

            let output_path = engine.run().await?;
            println!("✅ Portfolio exported to: {}", output_path);
        }
        Command::Preview => {
            print!("{}", editor.export_document().html);
        }
        Command::Show => {
            println!("{}", serde_json::to_string_pretty(editor.data())?);
        }
        Command::Reset => {
            editor.reset().await?;
            println!("✅ Portfolio reset to the default data");
        }
        Command::Set { field, value } => {
            editor.set_personal(field, value).await?;
            println!("✅ Updated {:?}", field);
        }
        Command::Theme { field, value } => {
            editor.set_theme(field, value).await?;
            println!("✅ Updated theme {:?}", field);
        }
        Command::Photo { file } => {
            let upload = ImageUpload::from_path(&file, limit).await?;
            editor.set_photo(&upload).await?;
            println!("✅ Profile photo uploaded");
        }
        Command::Skill { action } => match action {
            SkillAction::Add => {
                let index = editor.add_skill().await?;
                println!("✅ Added skill #{}", index);
            }
            SkillAction::Update { index, name, level } => {
                editor.update_skill(index, name, level).await?;
                println!("✅ Updated skill #{}", index);
            }
            SkillAction::Remove { index } => {
                let removed = editor.remove_skill(index).await?;
                println!("🗑️  Removed skill '{}'", removed.name);
            }
        },
        Command::Project { action } => match action {
            ProjectAction::Add => {
                let index = editor.add_project().await?;
                println!("✅ Added project #{}", index);
            }
            ProjectAction::Update { index, field, value } => {
                editor.update_project(index, field, value).await?;
                println!("✅ Updated project #{} {:?}", index, field);
            }
            ProjectAction::Image { index, file } => {
                let upload = ImageUpload::from_path(&file, limit).await?;
                editor.set_project_image(index, &upload).await?;
                println!("✅ Project #{} image uploaded", index);
            }
            ProjectAction::Remove { index } => {
                let removed = editor.remove_project(index).await?;
                println!("🗑️  Removed project '{}'", removed.title);
            }
        },
        Command::Experience { action } => match action {
            ExperienceAction::Add => {
                let index = editor.add_experience().await?;
                println!("✅ Added experience #{}", index);
            }
            ExperienceAction::Update { index, field, value } => {
                editor.update_experience(index, field, value).await?;
                println!("✅ Updated experience #{} {:?}", index, field);
            }
            ExperienceAction::Remove { index } => {
                let removed = editor.remove_experience(index).await?;
                println!("🗑️  Removed experience at '{}'", removed.company);
            }
        },
    }

    Ok(())
}
