use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct ExportEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> ExportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting portfolio export...");

        // Extract
        let data = self.pipeline.extract().await?;
        tracing::info!(
            "Loaded portfolio for '{}': {} skills, {} projects, {} experience entries",
            data.personal.name,
            data.skills.len(),
            data.projects.len(),
            data.experience.len()
        );
        self.monitor.log_stats("extract");

        // Transform
        let document = self.pipeline.transform(data).await?;
        tracing::info!(
            "Generated {} ({} bytes)",
            document.file_name,
            document.html.len()
        );
        self.monitor.log_stats("transform");

        // Load
        let output_path = self.pipeline.load(document).await?;
        tracing::info!("Portfolio written to: {}", output_path);
        self.monitor.log_final_stats();

        Ok(output_path)
    }
}
