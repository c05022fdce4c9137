//! The editor shell: owns the working copy of the portfolio and persists every
//! change through a [`PortfolioStore`].

use crate::core::export::build_document;
use crate::core::image::{ImageUpload, MAX_UPLOAD_BYTES};
use crate::core::{PortfolioData, PortfolioStore};
use crate::domain::model::{
    Experience, ExperienceField, ExportDocument, PersonalField, Project, ProjectField, Skill,
    ThemeField,
};
use crate::utils::error::{PortfolioError, Result};

pub struct Editor<P: PortfolioStore> {
    store: P,
    data: PortfolioData,
    upload_limit: u64,
}

fn checked_index(list: &'static str, index: usize, len: usize) -> Result<usize> {
    if index < len {
        Ok(index)
    } else {
        Err(PortfolioError::IndexOutOfRangeError { list, index, len })
    }
}

impl<P: PortfolioStore> Editor<P> {
    pub async fn open(store: P) -> Result<Self> {
        let data = store.load().await?;
        Ok(Self {
            store,
            data,
            upload_limit: MAX_UPLOAD_BYTES,
        })
    }

    pub fn with_upload_limit(mut self, limit: u64) -> Self {
        self.upload_limit = limit;
        self
    }

    pub fn data(&self) -> &PortfolioData {
        &self.data
    }

    /// Owned copy handed to the generator at export time.
    pub fn snapshot(&self) -> PortfolioData {
        self.data.clone()
    }

    pub fn export_document(&self) -> ExportDocument {
        build_document(&self.data)
    }

    async fn commit(&self) -> Result<()> {
        self.store.save(&self.data).await
    }

    pub async fn reset(&mut self) -> Result<()> {
        self.data = PortfolioData::seed();
        tracing::info!("Portfolio reset to seed data");
        self.commit().await
    }

    pub async fn set_personal(&mut self, field: PersonalField, value: impl Into<String>) -> Result<()> {
        *self.data.personal.field_mut(field) = value.into();
        self.commit().await
    }

    pub async fn set_theme(&mut self, field: ThemeField, value: impl Into<String>) -> Result<()> {
        *self.data.theme.field_mut(field) = value.into();
        self.commit().await
    }

    /// Embeds an uploaded image as the profile photo.
    pub async fn set_photo(&mut self, upload: &ImageUpload) -> Result<()> {
        let uri = upload.to_data_uri(self.upload_limit)?;
        self.data.personal.photo = uri;
        tracing::info!("Profile photo uploaded from '{}'", upload.file_name);
        self.commit().await
    }

    // ---- skills ----

    pub async fn add_skill(&mut self) -> Result<usize> {
        self.data.skills.push(Skill::placeholder());
        self.commit().await?;
        Ok(self.data.skills.len() - 1)
    }

    /// Updates name and/or level; the level is clamped to 0..=100.
    pub async fn update_skill(
        &mut self,
        index: usize,
        name: Option<String>,
        level: Option<i64>,
    ) -> Result<()> {
        let index = checked_index("skill", index, self.data.skills.len())?;
        let skill = &mut self.data.skills[index];
        if let Some(name) = name {
            skill.name = name;
        }
        if let Some(level) = level {
            skill.level = level.clamp(0, 100);
        }
        self.commit().await
    }

    pub async fn remove_skill(&mut self, index: usize) -> Result<Skill> {
        let index = checked_index("skill", index, self.data.skills.len())?;
        let removed = self.data.skills.remove(index);
        self.commit().await?;
        Ok(removed)
    }

    // ---- projects ----

    pub async fn add_project(&mut self) -> Result<usize> {
        self.data.projects.push(Project::placeholder());
        self.commit().await?;
        Ok(self.data.projects.len() - 1)
    }

    pub async fn update_project(
        &mut self,
        index: usize,
        field: ProjectField,
        value: impl Into<String>,
    ) -> Result<()> {
        let index = checked_index("project", index, self.data.projects.len())?;
        *self.data.projects[index].field_mut(field) = value.into();
        self.commit().await
    }

    pub async fn set_project_image(&mut self, index: usize, upload: &ImageUpload) -> Result<()> {
        let index = checked_index("project", index, self.data.projects.len())?;
        let uri = upload.to_data_uri(self.upload_limit)?;
        self.data.projects[index].image = uri;
        tracing::info!("Project #{} image uploaded from '{}'", index, upload.file_name);
        self.commit().await
    }

    pub async fn remove_project(&mut self, index: usize) -> Result<Project> {
        let index = checked_index("project", index, self.data.projects.len())?;
        let removed = self.data.projects.remove(index);
        self.commit().await?;
        Ok(removed)
    }

    // ---- experience ----

    pub async fn add_experience(&mut self) -> Result<usize> {
        self.data.experience.push(Experience::placeholder());
        self.commit().await?;
        Ok(self.data.experience.len() - 1)
    }

    pub async fn update_experience(
        &mut self,
        index: usize,
        field: ExperienceField,
        value: impl Into<String>,
    ) -> Result<()> {
        let index = checked_index("experience", index, self.data.experience.len())?;
        *self.data.experience[index].field_mut(field) = value.into();
        self.commit().await
    }

    pub async fn remove_experience(&mut self, index: usize) -> Result<Experience> {
        let index = checked_index("experience", index, self.data.experience.len())?;
        let removed = self.data.experience.remove(index);
        self.commit().await?;
        Ok(removed)
    }
}
