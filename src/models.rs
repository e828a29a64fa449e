//! Content Models
//!
//! Data structures for the static page content. Every instance lives in a
//! `&'static` literal table in `content.rs`; nothing is created at runtime.

/// A showcased project
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub live_url: &'static str,
    pub source_url: &'static str,
    /// Free-form status label, see `ProjectStatus`
    pub status: &'static str,
}

/// Known project status labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Production,
    Live,
    Beta,
    Development,
    /// Anything else
    Other,
}

impl ProjectStatus {
    pub fn from_str(s: &str) -> Self {
        match s {
            "Production" => ProjectStatus::Production,
            "Live" => ProjectStatus::Live,
            "Beta" => ProjectStatus::Beta,
            "Development" => ProjectStatus::Development,
            _ => ProjectStatus::Other,
        }
    }

    /// Badge style token
    pub fn style_token(&self) -> &'static str {
        match self {
            ProjectStatus::Production => "status-green",
            ProjectStatus::Live => "status-blue",
            ProjectStatus::Beta => "status-yellow",
            ProjectStatus::Development => "status-purple",
            ProjectStatus::Other => "status-neutral",
        }
    }
}

/// Badge style for any status label. Unknown labels get the neutral style.
pub fn status_color(status: &str) -> &'static str {
    ProjectStatus::from_str(status).style_token()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency, 0 - 100
    pub level: u8,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkillGroup {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

/// A tool, device or service from the "uses" list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UsesItem {
    pub name: &'static str,
    pub note: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UsesGroup {
    pub title: &'static str,
    pub items: &'static [UsesItem],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

/// Who the page is about
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteProfile {
    pub name: &'static str,
    pub headline: &'static str,
    /// Cycled in the hero, in order
    pub roles: &'static [&'static str],
    /// Markdown
    pub bio: &'static str,
    pub email: &'static str,
    pub location: &'static str,
    pub site_url: &'static str,
    pub socials: &'static [SocialLink],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_status_colors() {
        assert_eq!(status_color("Production"), "status-green");
        assert_eq!(status_color("Live"), "status-blue");
        assert_eq!(status_color("Beta"), "status-yellow");
        assert_eq!(status_color("Development"), "status-purple");
    }

    #[test]
    fn test_unknown_status_falls_back() {
        for s in ["Unknown", "", "beta", "PRODUCTION", " Live", "🚧", "Archived"] {
            assert_eq!(status_color(s), "status-neutral", "status {:?}", s);
        }
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(ProjectStatus::from_str("Production"), ProjectStatus::Production);
        assert_eq!(ProjectStatus::from_str("Development"), ProjectStatus::Development);
        assert_eq!(ProjectStatus::from_str("production"), ProjectStatus::Other);
    }
}
