use serde::{Deserialize, Serialize};

use crate::utils::error::{PortfolioError, Result};

/// Everything the user has entered: personal details, skills, projects,
/// experience and the colour theme.
///
/// Serialized with camelCase keys. Missing keys fall back to empty values so
/// a partially written record still loads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortfolioData {
    pub personal: Personal,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub experience: Vec<Experience>,
    pub theme: Theme,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Personal {
    pub name: String,
    pub title: String,
    pub about: String,
    /// Image URL or `data:` URI.
    pub photo: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub social_media: SocialMedia,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialMedia {
    pub linkedin: String,
    pub github: String,
    pub twitter: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub name: String,
    /// Nominally 0..=100. The editor clamps, the generator renders as given.
    pub level: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image: String,
    pub link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub company: String,
    pub position: String,
    /// Free-form label such as "2020 - Present".
    pub date: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Theme {
    pub primary_color: String,
    pub text_color: String,
    pub background_color: String,
    pub accent_color: String,
}

/// The generated document together with its suggested download name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocument {
    pub file_name: String,
    pub html: String,
}

impl PortfolioData {
    /// Record used the first time the editor runs.
    pub fn seed() -> Self {
        Self {
            personal: Personal {
                name: "Your Name".to_string(),
                title: "Your Profession / Expertise".to_string(),
                about: "Write a short description about yourself. You can mention your experiences, interests, and goals.".to_string(),
                photo: "https://placehold.co/300x300".to_string(),
                email: "example@email.com".to_string(),
                phone: "+1 555 123 4567".to_string(),
                location: "New York, USA".to_string(),
                social_media: SocialMedia {
                    linkedin: "https://linkedin.com/in/username".to_string(),
                    github: "https://github.com/username".to_string(),
                    twitter: "https://twitter.com/username".to_string(),
                },
            },
            skills: vec![
                Skill::new("Web Development", 90),
                Skill::new("UI/UX Design", 75),
                Skill::new("Mobile App Development", 60),
            ],
            projects: vec![
                Project {
                    title: "E-Commerce Website".to_string(),
                    description: "A comprehensive e-commerce platform developed using React and Node.js.".to_string(),
                    image: "https://placehold.co/300x200".to_string(),
                    link: "https://project-example.com".to_string(),
                },
                Project {
                    title: "Mobile Fitness App".to_string(),
                    description: "A fitness application developed with Flutter, offering personalized workout programs.".to_string(),
                    image: "https://placehold.co/300x200".to_string(),
                    link: "https://project-example.com".to_string(),
                },
            ],
            experience: vec![
                Experience {
                    company: "ABC Technology".to_string(),
                    position: "Senior Software Developer".to_string(),
                    date: "2020 - Present".to_string(),
                    description: "Web application development, team leadership, and project management.".to_string(),
                },
                Experience {
                    company: "XYZ Digital".to_string(),
                    position: "Frontend Developer".to_string(),
                    date: "2018 - 2020".to_string(),
                    description: "Designing and developing user interfaces.".to_string(),
                },
            ],
            theme: Theme::seed(),
        }
    }
}

impl Skill {
    pub fn new(name: impl Into<String>, level: i64) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }

    /// Entry appended by "add skill".
    pub fn placeholder() -> Self {
        Self::new("New Skill", 50)
    }
}

impl Project {
    pub fn placeholder() -> Self {
        Self {
            title: "New Project".to_string(),
            description: "Project description".to_string(),
            image: "https://placehold.co/300x200".to_string(),
            link: "https://project-example.com".to_string(),
        }
    }
}

impl Experience {
    pub fn placeholder() -> Self {
        Self {
            company: "New Company".to_string(),
            position: "Position".to_string(),
            date: "2022 - 2023".to_string(),
            description: "Job description".to_string(),
        }
    }
}

impl Theme {
    pub fn seed() -> Self {
        Self {
            primary_color: "#3b82f6".to_string(),
            text_color: "#1e293b".to_string(),
            background_color: "#ffffff".to_string(),
            accent_color: "#f97316".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Editable field names. They parse from the same names the JSON record uses,
// so `socialMedia.github` on the command line addresses `personal.socialMedia.github`.
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonalField {
    Name,
    Title,
    About,
    Photo,
    Email,
    Phone,
    Location,
    Linkedin,
    Github,
    Twitter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeField {
    PrimaryColor,
    TextColor,
    BackgroundColor,
    AccentColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectField {
    Title,
    Description,
    Image,
    Link,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceField {
    Company,
    Position,
    Date,
    Description,
}

fn unknown_field(section: &str, field: &str) -> PortfolioError {
    PortfolioError::UnknownFieldError {
        section: section.to_string(),
        field: field.to_string(),
    }
}

impl std::str::FromStr for PersonalField {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "name" => Ok(Self::Name),
            "title" => Ok(Self::Title),
            "about" => Ok(Self::About),
            "photo" => Ok(Self::Photo),
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            "location" => Ok(Self::Location),
            "socialMedia.linkedin" | "linkedin" => Ok(Self::Linkedin),
            "socialMedia.github" | "github" => Ok(Self::Github),
            "socialMedia.twitter" | "twitter" => Ok(Self::Twitter),
            other => Err(unknown_field("personal", other)),
        }
    }
}

impl std::str::FromStr for ThemeField {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "primaryColor" | "primary" => Ok(Self::PrimaryColor),
            "textColor" | "text" => Ok(Self::TextColor),
            "backgroundColor" | "background" => Ok(Self::BackgroundColor),
            "accentColor" | "accent" => Ok(Self::AccentColor),
            other => Err(unknown_field("theme", other)),
        }
    }
}

impl std::str::FromStr for ProjectField {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "title" => Ok(Self::Title),
            "description" => Ok(Self::Description),
            "image" => Ok(Self::Image),
            "link" => Ok(Self::Link),
            other => Err(unknown_field("project", other)),
        }
    }
}

impl std::str::FromStr for ExperienceField {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "company" => Ok(Self::Company),
            "position" => Ok(Self::Position),
            "date" => Ok(Self::Date),
            "description" => Ok(Self::Description),
            other => Err(unknown_field("experience", other)),
        }
    }
}

impl Personal {
    pub fn field_mut(&mut self, field: PersonalField) -> &mut String {
        match field {
            PersonalField::Name => &mut self.name,
            PersonalField::Title => &mut self.title,
            PersonalField::About => &mut self.about,
            PersonalField::Photo => &mut self.photo,
            PersonalField::Email => &mut self.email,
            PersonalField::Phone => &mut self.phone,
            PersonalField::Location => &mut self.location,
            PersonalField::Linkedin => &mut self.social_media.linkedin,
            PersonalField::Github => &mut self.social_media.github,
            PersonalField::Twitter => &mut self.social_media.twitter,
        }
    }
}

impl Theme {
    pub fn field_mut(&mut self, field: ThemeField) -> &mut String {
        match field {
            ThemeField::PrimaryColor => &mut self.primary_color,
            ThemeField::TextColor => &mut self.text_color,
            ThemeField::BackgroundColor => &mut self.background_color,
            ThemeField::AccentColor => &mut self.accent_color,
        }
    }
}

impl Project {
    pub fn field_mut(&mut self, field: ProjectField) -> &mut String {
        match field {
            ProjectField::Title => &mut self.title,
            ProjectField::Description => &mut self.description,
            ProjectField::Image => &mut self.image,
            ProjectField::Link => &mut self.link,
        }
    }
}

impl Experience {
    pub fn field_mut(&mut self, field: ExperienceField) -> &mut String {
        match field {
            ExperienceField::Company => &mut self.company,
            ExperienceField::Position => &mut self.position,
            ExperienceField::Date => &mut self.date,
            ExperienceField::Description => &mut self.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let data = PortfolioData::seed();
        let json = serde_json::to_value(&data).unwrap();

        assert_eq!(json["personal"]["socialMedia"]["github"], "https://github.com/username");
        assert_eq!(json["theme"]["primaryColor"], "#3b82f6");
        assert_eq!(json["skills"][0]["level"], 90);
    }

    #[test]
    fn test_partial_record_fills_missing_fields() {
        let json = r#"{"personal": {"name": "Ada"}, "skills": [{"name": "Rust"}]}"#;
        let data: PortfolioData = serde_json::from_str(json).unwrap();

        assert_eq!(data.personal.name, "Ada");
        assert_eq!(data.personal.social_media.twitter, "");
        assert_eq!(data.skills, vec![Skill::new("Rust", 0)]);
        assert!(data.projects.is_empty());
        assert_eq!(data.theme, Theme::default());
    }

    #[test]
    fn test_field_names_parse() {
        assert_eq!("socialMedia.github".parse::<PersonalField>().unwrap(), PersonalField::Github);
        assert_eq!("accentColor".parse::<ThemeField>().unwrap(), ThemeField::AccentColor);
        assert_eq!("link".parse::<ProjectField>().unwrap(), ProjectField::Link);
        assert_eq!("date".parse::<ExperienceField>().unwrap(), ExperienceField::Date);

        let err = "nickname".parse::<PersonalField>().unwrap_err();
        assert!(matches!(err, PortfolioError::UnknownFieldError { .. }));
    }

    #[test]
    fn test_field_mut_addresses_nested_social_links() {
        let mut personal = Personal::default();
        *personal.field_mut(PersonalField::Linkedin) = "https://linkedin.com/in/ada".to_string();

        assert_eq!(personal.social_media.linkedin, "https://linkedin.com/in/ada");
    }
}
