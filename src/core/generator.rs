//! Static document generation.
//!
//! Turns a [`PortfolioData`] snapshot into one self-contained HTML5 document:
//! inline CSS bound to the theme colours, no external scripts or stylesheets.
//! Generation is total over any value and never touches I/O.

use chrono::Datelike;

use crate::core::escape::{escape_attribute, escape_css_value, escape_html};
use crate::domain::model::{Experience, Personal, PortfolioData, Project, Skill, Theme};

pub const PROFILE_PLACEHOLDER: &str = "https://placehold.co/300x300";
pub const PROJECT_PLACEHOLDER: &str = "https://placehold.co/300x200";

/// Render the full document, stamping the footer with the current year.
pub fn generate(data: &PortfolioData) -> String {
    generate_for_year(data, chrono::Local::now().year())
}

/// Render the full document with a fixed copyright year.
pub fn generate_for_year(data: &PortfolioData, year: i32) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - Portfolio</title>
    <style>{css}</style>
</head>
<body>
    <div class="container">
        {header}

        <section>
            <h3 class="section-title">My Skills</h3>
            <div class="skills">{skills}</div>
        </section>

        <section>
            <h3 class="section-title">My Projects</h3>
            <div class="projects">{projects}</div>
        </section>

        <section>
            <h3 class="section-title">Work Experience</h3>
            <div class="experience-timeline">{experience}</div>
        </section>

        {footer}
    </div>
</body>
</html>
"#,
        title = escape_html(&data.personal.name),
        css = inline_css(&data.theme),
        header = render_header(&data.personal),
        skills = data.skills.iter().map(render_skill).collect::<String>(),
        projects = data.projects.iter().map(render_project).collect::<String>(),
        experience = data.experience.iter().map(render_experience).collect::<String>(),
        footer = render_footer(&data.personal.name, year),
    )
}

/// Build-time half of the image fallback: an empty candidate resolves to the placeholder.
/// Any non-empty value, whitespace included, is kept as written.
///
/// The view-time half is the `onerror` handler on every emitted `<img>`.
pub fn resolve_image<'a>(candidate: &'a str, placeholder: &'a str) -> &'a str {
    if candidate.is_empty() {
        placeholder
    } else {
        candidate
    }
}

fn render_image(candidate: &str, alt: &str, class: &str, placeholder: &str) -> String {
    // placeholder lands inside a single-quoted JS string
    debug_assert!(!placeholder.contains(&['\'', '"', '\\'][..]));

    format!(
        r#"<img src="{src}" alt="{alt}" class="{class}" onerror="this.onerror=null; this.src='{fallback}';">"#,
        src = escape_attribute(resolve_image(candidate, placeholder)),
        alt = escape_attribute(alt),
        fallback = escape_attribute(placeholder),
    )
}

fn render_header(personal: &Personal) -> String {
    let social = &personal.social_media;

    format!(
        r#"<header>
            <div class="profile">
                {photo}
                <div class="profile-content">
                    <h1>{name}</h1>
                    <h2>{title}</h2>
                    <p>{about}</p>

                    <div class="contact-info">
                        {email}
                        {phone}
                        {location}
                    </div>

                    <div class="social-links">
                        {linkedin}
                        {github}
                        {twitter}
                    </div>
                </div>
            </div>
        </header>"#,
        photo = render_image(&personal.photo, &personal.name, "profile-image", PROFILE_PLACEHOLDER),
        name = escape_html(&personal.name),
        title = escape_html(&personal.title),
        about = escape_html(&personal.about),
        email = render_contact_item(ICON_MAIL, &personal.email),
        phone = render_contact_item(ICON_PHONE, &personal.phone),
        location = render_contact_item(ICON_LOCATION, &personal.location),
        linkedin = render_social_link(&social.linkedin, "LinkedIn", ICON_LINKEDIN),
        github = render_social_link(&social.github, "GitHub", ICON_GITHUB),
        twitter = render_social_link(&social.twitter, "Twitter", ICON_TWITTER),
    )
}

fn render_contact_item(icon: &str, value: &str) -> String {
    format!(
        r#"<div class="contact-item">
                            {icon}
                            <span>{value}</span>
                        </div>"#,
        value = escape_html(value),
    )
}

fn render_social_link(href: &str, label: &str, icon: &str) -> String {
    format!(
        r#"<a href="{href}" class="social-link" target="_blank" rel="noopener noreferrer" aria-label="{label}">
                            {icon}
                        </a>"#,
        href = escape_attribute(href),
    )
}

fn render_skill(skill: &Skill) -> String {
    format!(
        r#"
                <div class="skill-item">
                    <div class="skill-info">
                        <span>{name}</span>
                        <span>{level}%</span>
                    </div>
                    <div class="skill-bar">
                        <div class="skill-progress" style="width: {level}%"></div>
                    </div>
                </div>
            "#,
        name = escape_html(&skill.name),
        level = skill.level,
    )
}

fn render_project(project: &Project) -> String {
    format!(
        r#"
                <div class="project-card">
                    {image}
                    <div class="project-content">
                        <h4 class="project-title">{title}</h4>
                        <p class="project-description">{description}</p>
                        <a href="{link}" class="project-link" target="_blank" rel="noopener noreferrer">View Project</a>
                    </div>
                </div>
            "#,
        image = render_image(&project.image, &project.title, "project-image", PROJECT_PLACEHOLDER),
        title = escape_html(&project.title),
        description = escape_html(&project.description),
        link = escape_attribute(&project.link),
    )
}

fn render_experience(experience: &Experience) -> String {
    format!(
        r#"
                <div class="experience-item">
                    <div class="experience-date">{date}</div>
                    <h4 class="experience-position">{position}</h4>
                    <div class="experience-company">{company}</div>
                    <p>{description}</p>
                </div>
            "#,
        date = escape_html(&experience.date),
        position = escape_html(&experience.position),
        company = escape_html(&experience.company),
        description = escape_html(&experience.description),
    )
}

fn render_footer(name: &str, year: i32) -> String {
    format!(
        r#"<footer>
            <p>&copy; {year} {name} - All Rights Reserved</p>
            <p style="margin-top: 10px; font-size: 0.8rem;">Created with PortfolioMaker</p>
        </footer>"#,
        name = escape_html(name),
    )
}

/// Theme custom properties followed by the fixed layout rules.
fn inline_css(theme: &Theme) -> String {
    let mut css = String::with_capacity(BASE_CSS.len() + 256);
    css.push_str("\n        :root {\n");
    for (property, value) in [
        ("--primary-color", &theme.primary_color),
        ("--text-color", &theme.text_color),
        ("--background-color", &theme.background_color),
        ("--accent-color", &theme.accent_color),
    ] {
        css.push_str(&format!("            {}: {};\n", property, escape_css_value(value)));
    }
    css.push_str("        }\n");
    css.push_str(BASE_CSS);
    css
}

const BASE_CSS: &str = r#"
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
            background-color: var(--background-color);
            color: var(--text-color);
            line-height: 1.6;
        }

        .container {
            max-width: 1200px;
            margin: 0 auto;
            padding: 0 20px;
        }

        header {
            padding: 40px 0;
            text-align: center;
        }

        .profile {
            display: flex;
            flex-direction: column;
            align-items: center;
            margin-bottom: 60px;
        }

        .profile-image {
            width: 200px;
            height: 200px;
            border-radius: 50%;
            border: 4px solid var(--primary-color);
            object-fit: cover;
            margin-bottom: 20px;
        }

        .profile-content {
            flex: 1;
        }

        h1 {
            font-size: 2.5rem;
            margin-bottom: 10px;
            color: var(--text-color);
        }

        h2 {
            font-size: 1.5rem;
            margin-bottom: 20px;
            color: var(--accent-color);
            font-weight: 500;
        }

        .section-title {
            font-size: 2rem;
            margin-bottom: 30px;
            text-align: center;
            color: var(--primary-color);
        }

        section {
            margin-bottom: 60px;
        }

        .contact-info,
        .social-links {
            display: flex;
            flex-wrap: wrap;
            gap: 15px;
            margin-top: 20px;
            justify-content: center;
        }

        .contact-item {
            display: flex;
            align-items: center;
            gap: 5px;
        }

        .social-link {
            display: inline-flex;
            align-items: center;
            justify-content: center;
            width: 40px;
            height: 40px;
            border-radius: 50%;
            border: 1px solid var(--text-color);
            color: var(--text-color);
            text-decoration: none;
        }

        @media (min-width: 768px) {
            .profile {
                flex-direction: row;
                align-items: flex-start;
                text-align: left;
            }

            .profile-image {
                margin-right: 40px;
                margin-bottom: 0;
            }

            .contact-info,
            .social-links {
                justify-content: flex-start;
            }
        }

        .skills {
            max-width: 800px;
            margin: 0 auto;
        }

        .skill-item {
            margin-bottom: 20px;
        }

        .skill-info {
            display: flex;
            justify-content: space-between;
            margin-bottom: 5px;
        }

        .skill-bar {
            height: 10px;
            background-color: rgba(0, 0, 0, 0.1);
            border-radius: 5px;
            overflow: hidden;
        }

        .skill-progress {
            height: 100%;
            max-width: 100%;
            background-color: var(--primary-color);
        }

        .projects {
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
            gap: 30px;
            max-width: 1200px;
            margin: 0 auto;
            justify-content: center;
        }

        .project-card {
            border-radius: 8px;
            overflow: hidden;
            box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
            background-color: white;
        }

        .project-image {
            width: 100%;
            height: 200px;
            object-fit: cover;
        }

        .project-content {
            padding: 20px;
        }

        .project-title {
            font-size: 1.25rem;
            margin-bottom: 10px;
        }

        .project-description {
            margin-bottom: 15px;
            font-size: 0.9rem;
        }

        .project-link {
            display: inline-block;
            padding: 8px 16px;
            background-color: var(--accent-color);
            color: white;
            text-decoration: none;
            border-radius: 4px;
            font-weight: 500;
        }

        .experience-timeline {
            max-width: 800px;
            margin: 0 auto;
            position: relative;
        }

        .experience-timeline::before {
            content: '';
            position: absolute;
            top: 0;
            bottom: 0;
            left: 0;
            width: 2px;
            background-color: var(--primary-color);
        }

        .experience-item {
            position: relative;
            padding-left: 30px;
            margin-bottom: 40px;
        }

        .experience-item::before {
            content: '';
            position: absolute;
            left: -4px;
            top: 0;
            width: 10px;
            height: 10px;
            border-radius: 50%;
            background-color: var(--primary-color);
        }

        .experience-date {
            color: var(--accent-color);
            margin-bottom: 5px;
        }

        .experience-position {
            font-size: 1.25rem;
            font-weight: bold;
            margin-bottom: 5px;
        }

        .experience-company {
            font-size: 1.1rem;
            margin-bottom: 10px;
        }

        footer {
            text-align: center;
            padding: 20px 0;
            border-top: 1px solid rgba(0, 0, 0, 0.1);
            margin-top: 60px;
        }
    "#;

// Lucide icon outlines, inlined so the document has no external references.

const ICON_MAIL: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><rect width="20" height="16" x="2" y="4" rx="2"></rect><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"></path></svg>"#;

const ICON_PHONE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z"></path></svg>"#;

const ICON_LOCATION: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"></path><circle cx="12" cy="10" r="3"></circle></svg>"#;

const ICON_LINKEDIN: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"></path><rect width="4" height="12" x="2" y="9"></rect><circle cx="4" cy="4" r="2"></circle></svg>"#;

const ICON_GITHUB: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"></path><path d="M9 18c-4.51 2-5-2-7-2"></path></svg>"#;

const ICON_TWITTER: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z"></path></svg>"#;
