//! Structured Data
//!
//! schema.org `Person` description of the profile, injected into `<head>`
//! as JSON-LD.

use serde::Serialize;

use crate::models::{SiteProfile, SkillGroup};

const SCRIPT_ID: &str = "person-jsonld";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonSchema<'a> {
    #[serde(rename = "@context")]
    pub context: &'a str,
    #[serde(rename = "@type")]
    pub kind: &'a str,
    pub name: &'a str,
    pub job_title: &'a str,
    pub description: &'a str,
    pub email: String,
    pub url: &'a str,
    pub address: &'a str,
    pub same_as: Vec<&'a str>,
    pub knows_about: Vec<&'a str>,
}

impl<'a> PersonSchema<'a> {
    pub fn from_profile(profile: &'a SiteProfile, skills: &'a [SkillGroup]) -> Self {
        Self {
            context: "https://schema.org",
            kind: "Person",
            name: profile.name,
            job_title: profile.roles.first().copied().unwrap_or_default(),
            description: profile.headline,
            email: format!("mailto:{}", profile.email),
            url: profile.site_url,
            address: profile.location,
            same_as: profile.socials.iter().map(|s| s.url).collect(),
            knows_about: skills.iter().flat_map(|g| g.skills.iter().map(|s| s.name)).collect(),
        }
    }
}

/// Serialize the profile as a JSON-LD document
pub fn person_json_ld(profile: &SiteProfile, skills: &[SkillGroup]) -> Result<String, String> {
    serde_json::to_string(&PersonSchema::from_profile(profile, skills)).map_err(|e| e.to_string())
}

/// Insert (or refresh) the JSON-LD `<script>` in the document head
pub fn inject_person_json_ld(profile: &SiteProfile, skills: &[SkillGroup]) -> Result<(), String> {
    let json = person_json_ld(profile, skills)?;
    let doc = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "no document".to_string())?;

    if let Some(existing) = doc.get_element_by_id(SCRIPT_ID) {
        existing.set_text_content(Some(&json));
        return Ok(());
    }

    let head = doc.head().ok_or_else(|| "no <head>".to_string())?;
    let script = doc.create_element("script").map_err(|e| format!("{:?}", e))?;
    script.set_id(SCRIPT_ID);
    script
        .set_attribute("type", "application/ld+json")
        .map_err(|e| format!("{:?}", e))?;
    script.set_text_content(Some(&json));
    head.append_child(&script).map_err(|e| format!("{:?}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{PROFILE, SKILL_GROUPS};

    #[test]
    fn test_person_shape() {
        let json = person_json_ld(&PROFILE, SKILL_GROUPS).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["@context"], "https://schema.org");
        assert_eq!(value["@type"], "Person");
        assert_eq!(value["name"], PROFILE.name);
        assert_eq!(value["jobTitle"], PROFILE.roles[0]);
        assert_eq!(value["email"], format!("mailto:{}", PROFILE.email));
        assert_eq!(value["sameAs"].as_array().unwrap().len(), PROFILE.socials.len());

        let skill_count: usize = SKILL_GROUPS.iter().map(|g| g.skills.len()).sum();
        assert_eq!(value["knowsAbout"].as_array().unwrap().len(), skill_count);
    }
}
