// SPDX-License-Identifier: MIT OR Apache-2.0
//! Portfolio content shown by the section views.

use crate::theme::Accent;

/// Hero header
pub struct Hero {
    /// First name line (gradient)
    pub first_name: &'static str,
    /// Last name line
    pub last_name: &'static str,
    /// Roles shown under the name
    pub roles: &'static [(&'static str, Accent)],
    /// Call-to-action label
    pub cta: &'static str,
}

/// About-section card
pub struct Achievement {
    /// Icon glyph
    pub icon: &'static str,
    /// Card title
    pub title: &'static str,
    /// Card body
    pub description: &'static str,
    /// Accent color
    pub accent: Accent,
}

/// Skill with a proficiency bar
pub struct Skill {
    /// Icon glyph
    pub icon: &'static str,
    /// Skill name
    pub name: &'static str,
    /// Proficiency percentage (0-100)
    pub level: u8,
    /// Accent color
    pub accent: Accent,
}

/// Project card
pub struct Project {
    /// Project title
    pub title: &'static str,
    /// Short description
    pub description: &'static str,
    /// Technologies used
    pub technologies: &'static [&'static str],
    /// Source link
    pub source_url: Option<&'static str>,
    /// Accent color
    pub accent: Accent,
}

/// Contact method
pub struct ContactMethod {
    /// Icon glyph
    pub icon: &'static str,
    /// Label
    pub label: &'static str,
    /// Displayed value
    pub value: &'static str,
    /// Link target, if the value is clickable
    pub href: Option<&'static str>,
    /// Accent color
    pub accent: Accent,
}

/// Social profile
pub struct SocialLink {
    /// Network name
    pub name: &'static str,
    /// Profile URL
    pub url: &'static str,
    /// Short pitch
    pub description: &'static str,
    /// Accent color
    pub accent: Accent,
}

pub const HERO: Hero = Hero {
    first_name: "ARBAAB",
    last_name: "HUSSAIN",
    roles: &[
        ("Penetration Tester in Training", Accent::Blue),
        ("Remote Freelancer", Accent::Green),
    ],
    cta: "Explore My Work",
};

pub const ABOUT_INTRO: &str = "Cybersecurity enthusiast pursuing a Bachelor's in IT, \
    focused on penetration testing and offering remote services to clients worldwide.";

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        icon: "🎓",
        title: "BS IT Student",
        description: "Building a strong foundation in Information Technology",
        accent: Accent::Blue,
    },
    Achievement {
        icon: "🛡",
        title: "Cybersecurity Training",
        description: "Hands-on course covering industry security practice",
        accent: Accent::Blue,
    },
    Achievement {
        icon: "💼",
        title: "Versatile Skills",
        description: "Data entry, Excel automation, frontend development, web pentesting",
        accent: Accent::Purple,
    },
    Achievement {
        icon: "🌐",
        title: "Remote Ready",
        description: "Open to remote work and freelancing worldwide",
        accent: Accent::Blue,
    },
];

pub const SKILLS: &[Skill] = &[
    Skill { icon: "🛡", name: "Cybersecurity", level: 85, accent: Accent::Red },
    Skill { icon: "</>", name: "Web Development", level: 90, accent: Accent::Green },
    Skill { icon: "▦", name: "Data Processing", level: 95, accent: Accent::Blue },
    Skill { icon: "🔍", name: "Penetration Testing", level: 75, accent: Accent::Red },
    Skill { icon: ">_", name: "Linux Systems", level: 80, accent: Accent::Green },
    Skill { icon: "🌐", name: "Network Security", level: 70, accent: Accent::Blue },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Web Application Security Scanner",
        description: "Automated scanner detecting XSS, SQLi and OWASP Top 10 issues",
        technologies: &["Python", "Flask", "SQLAlchemy", "BeautifulSoup"],
        source_url: Some("https://github.com/arbaab"),
        accent: Accent::Red,
    },
    Project {
        title: "Excel Data Automation Suite",
        description: "Automation tools for data processing, analysis and reporting",
        technologies: &["VBA", "Power Query", "Python", "Pandas"],
        source_url: Some("https://github.com/arbaab"),
        accent: Accent::Green,
    },
    Project {
        title: "Cybersecurity Portfolio",
        description: "This animated portfolio",
        technologies: &["Rust", "egui", "wgpu"],
        source_url: None,
        accent: Accent::Blue,
    },
    Project {
        title: "Network Vulnerability Assessment Tool",
        description: "Scanner for open ports, services and likely weaknesses",
        technologies: &["Python", "Nmap", "Scapy", "Tkinter"],
        source_url: Some("https://github.com/arbaab"),
        accent: Accent::Purple,
    },
];

pub const CONTACTS: &[ContactMethod] = &[
    ContactMethod {
        icon: "✉",
        label: "Email",
        value: "aaahussain1806@gmail.com",
        href: Some("mailto:aaahussain1806@gmail.com"),
        accent: Accent::Blue,
    },
    ContactMethod {
        icon: "☎",
        label: "WhatsApp",
        value: "03707332494",
        href: Some("https://wa.me/923707332494"),
        accent: Accent::Blue,
    },
    ContactMethod {
        icon: "📍",
        label: "Location",
        value: "Pakistan (Remote Available)",
        href: None,
        accent: Accent::Purple,
    },
];

pub const SOCIALS: &[SocialLink] = &[
    SocialLink {
        name: "GitHub",
        url: "https://github.com/arbaab",
        description: "Open-source security tools and automation scripts",
        accent: Accent::Blue,
    },
    SocialLink {
        name: "LinkedIn",
        url: "https://www.linkedin.com/",
        description: "Professional profile and latest achievements",
        accent: Accent::Blue,
    },
    SocialLink {
        name: "TryHackMe",
        url: "https://tryhackme.com/",
        description: "Security challenges and ethical hacking progress",
        accent: Accent::Red,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_levels_are_percentages() {
        assert!(SKILLS.iter().all(|s| s.level <= 100));
    }

    #[test]
    fn test_links_are_absolute() {
        let links = PROJECTS
            .iter()
            .filter_map(|p| p.source_url)
            .chain(SOCIALS.iter().map(|s| s.url))
            .chain(CONTACTS.iter().filter_map(|c| c.href));
        for link in links {
            assert!(link.starts_with("https://") || link.starts_with("mailto:"), "{link}");
        }
    }
}
