// SPDX-License-Identifier: MIT

//! Static portfolio display data: project cards, skill groups, and stats.
//! Titles and labels are catalog keys so the gallery follows the UI language.

/// A single project card in the gallery.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title_key: &'static str,
    pub technologies: &'static [&'static str],
    /// Live demo, when one is hosted.
    pub preview_url: Option<&'static str>,
    pub code_url: &'static str,
}

/// A titled group of skills shown in the about section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillGroup {
    pub title_key: &'static str,
    pub skills: &'static [&'static str],
}

/// Headline figure with a localized caption.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label_key: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title_key: "project-title-landing",
        technologies: &["HTML", "CSS", "JavaScript", "Bootstrap"],
        preview_url: None,
        code_url: "https://github.com/youssefweb1",
    },
    Project {
        title_key: "project-title-store",
        technologies: &["PHP", "MySQL", "Bootstrap", "jQuery"],
        preview_url: None,
        code_url: "https://github.com/youssefweb1",
    },
    Project {
        title_key: "project-title-three",
        technologies: &["Three.js", "GSAP", "JavaScript"],
        preview_url: None,
        code_url: "https://github.com/youssefweb1",
    },
    Project {
        title_key: "project-title-academy",
        technologies: &["HTML", "CSS", "JavaScript", "RTL Design"],
        preview_url: Some("https://j2oe.github.io/Ibra_Academy/"),
        code_url: "https://github.com/youssefweb1",
    },
    Project {
        title_key: "project-title-tasks",
        technologies: &["HTML", "CSS", "JavaScript", "GSAP"],
        preview_url: Some("https://j2oe.github.io/task-fleex/"),
        code_url: "https://github.com/youssefweb1",
    },
    Project {
        title_key: "project-title-bold",
        technologies: &["HTML", "CSS", "JavaScript", "Dark Mode"],
        preview_url: Some("https://j2oe.github.io/Bold-Portfolio/"),
        code_url: "https://github.com/youssefweb1",
    },
];

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title_key: "about-skills-frontend",
        skills: &["HTML", "CSS", "JavaScript", "Tailwind CSS", "Bootstrap", "Three.js"],
    },
    SkillGroup {
        title_key: "about-skills-backend",
        skills: &["PHP", "Laravel", "MySQL", "Node.js"],
    },
    SkillGroup {
        title_key: "about-skills-tools",
        skills: &["Git", "Vite", "Figma", "Salla"],
    },
];

pub const STATS: &[Stat] = &[
    Stat {
        value: "5+",
        label_key: "about-stats-experience",
    },
    Stat {
        value: "50+",
        label_key: "about-stats-projects",
    },
    Stat {
        value: "20+",
        label_key: "about-stats-clients",
    },
    Stat {
        value: "99%",
        label_key: "about-stats-satisfaction",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    #[test]
    fn project_links_are_absolute_https_urls() {
        for project in PROJECTS {
            let code = Url::parse(project.code_url).expect("code link should parse");
            assert_eq!(code.scheme(), "https", "{}", project.code_url);

            if let Some(preview) = project.preview_url {
                let preview = Url::parse(preview).expect("preview link should parse");
                assert_eq!(preview.scheme(), "https");
            }
        }
    }

    #[test]
    fn every_card_names_at_least_one_technology() {
        assert!(PROJECTS.iter().all(|p| !p.technologies.is_empty()));
    }

    #[test]
    fn title_keys_are_unique() {
        let mut keys: Vec<_> = PROJECTS.iter().map(|p| p.title_key).collect();
        keys.sort_unstable();
        keys.dedup();

        assert_eq!(keys.len(), PROJECTS.len());
    }
}
