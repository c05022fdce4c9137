use anyhow::Result;
use portfolio_maker::core::PortfolioStore;
use portfolio_maker::domain::model::{PersonalField, ProjectField, ThemeField};
use portfolio_maker::{
    Editor, ExportEngine, ExportPipeline, ImageUpload, JsonPortfolioStore, LocalStorage,
    PortfolioData, PortfolioError, TomlConfig,
};
use tempfile::TempDir;
use tokio_test::{assert_err, assert_ok};

fn toml_for(data_dir: &str, output_dir: &str, extra: &str) -> String {
    format!(
        r#"
[store]
path = "{}"

[export]
output_path = "{}"
{}
"#,
        data_dir.replace('\\', "/"),
        output_dir.replace('\\', "/"),
        extra
    )
}

#[tokio::test]
async fn test_edit_then_export_end_to_end() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let data_dir = temp_dir.path().join("data");
    let output_dir = temp_dir.path().join("site");

    let store = JsonPortfolioStore::new(LocalStorage::new(&data_dir), "portfolio-data");
    let mut editor = Editor::open(store.clone()).await?;
    editor.set_personal(PersonalField::Name, "Ada Lovelace").await?;
    editor.set_theme(ThemeField::PrimaryColor, "#123456").await?;
    let index = editor.add_project().await?;
    editor
        .update_project(index, ProjectField::Title, "Analytical <Engine>")
        .await?;

    assert!(data_dir.join("portfolio-data.json").exists());

    let config = TomlConfig::from_toml_str(&toml_for(
        data_dir.to_str().unwrap(),
        output_dir.to_str().unwrap(),
        "",
    ))?;
    let pipeline = ExportPipeline::new(store, LocalStorage::new(&output_dir), config);
    let engine = ExportEngine::new(pipeline);

    let output_path = engine.run().await?;

    assert!(output_path.ends_with("ada-lovelace-portfolio.html"));
    let html = std::fs::read_to_string(output_dir.join("ada-lovelace-portfolio.html"))?;
    assert!(html.contains("<h1>Ada Lovelace</h1>"));
    assert!(html.contains("--primary-color: #123456;"));
    assert!(html.contains("Analytical &lt;Engine&gt;"));
    assert_eq!(html.matches(r#"class="project-card""#).count(), 3);

    Ok(())
}

#[tokio::test]
async fn test_export_without_stored_record_uses_seed() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let data_dir = temp_dir.path().join("empty");
    let output_dir = temp_dir.path().join("out");

    let config = TomlConfig::from_toml_str(&toml_for(
        data_dir.to_str().unwrap(),
        output_dir.to_str().unwrap(),
        r#"file_name = "index.html""#,
    ))?;
    let store = JsonPortfolioStore::new(LocalStorage::new(&data_dir), "portfolio-data");
    let engine = ExportEngine::new_with_monitoring(
        ExportPipeline::new(store, LocalStorage::new(&output_dir), config),
        false,
    );

    assert_ok!(engine.run().await);

    let html = std::fs::read_to_string(output_dir.join("index.html"))?;
    assert!(html.contains("<title>Your Name - Portfolio</title>"));
    assert!(html.contains(r#"style="width: 90%""#));
    // export reads, it never seeds the store on disk
    assert!(!data_dir.join("portfolio-data.json").exists());

    Ok(())
}

#[tokio::test]
async fn test_record_survives_editor_restart() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = JsonPortfolioStore::new(LocalStorage::new(temp_dir.path()), "portfolio-data");

    {
        let mut editor = Editor::open(store.clone()).await?;
        editor.remove_skill(0).await?;
        editor.update_skill(0, Some("Design".to_string()), Some(33)).await?;
    }

    let editor = Editor::open(store.clone()).await?;
    assert_eq!(editor.data().skills.len(), 2);
    assert_eq!(editor.data().skills[0].name, "Design");
    assert_eq!(editor.data().skills[0].level, 33);
    assert_eq!(store.load().await?, *editor.data());

    Ok(())
}

#[tokio::test]
async fn test_image_upload_from_disk() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let image_path = temp_dir.path().join("avatar.png");
    std::fs::write(&image_path, [0x89, b'P', b'N', b'G'])?;

    let store = JsonPortfolioStore::new(LocalStorage::new(temp_dir.path().join("data")), "p");
    let mut editor = Editor::open(store).await?.with_upload_limit(1024);

    let upload = ImageUpload::from_path(&image_path, 1024).await?;
    editor.set_photo(&upload).await?;

    let document = editor.export_document();
    assert!(document
        .html
        .contains(r#"<img src="data:image/png;base64,iVBORw==""#));

    Ok(())
}

#[tokio::test]
async fn test_oversized_image_leaves_record_untouched() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let image_path = temp_dir.path().join("huge.jpg");
    std::fs::write(&image_path, vec![0u8; 2048])?;

    let result = ImageUpload::from_path(&image_path, 1024).await;
    let err = assert_err!(result);
    assert!(matches!(err, PortfolioError::ImageTooLargeError { .. }));
    assert_eq!(err.exit_code(), 0);

    let store = JsonPortfolioStore::new(LocalStorage::new(temp_dir.path()), "portfolio-data");
    assert_eq!(store.load().await?, PortfolioData::seed());

    Ok(())
}
