//! Static site content plus the small pure helpers the sections render from.

use crate::replay::{LineKind, TerminalLine};

/// Anything that renders as a fixed-size glyph from the icon font.
pub trait Glyph {
    fn glyph_class(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Person,
    Terminal,
    Code,
    Work,
    Mail,
    Download,
    Storage,
    Cloud,
    Build,
    GitHub,
    LinkedIn,
    Twitter,
    Phone,
    Location,
    School,
    Trophy,
    Bank,
}

impl Glyph for Icon {
    fn glyph_class(&self) -> &'static str {
        match self {
            Icon::Person => "extra-person",
            Icon::Terminal => "extra-terminal",
            Icon::Code => "extra-code",
            Icon::Work => "extra-work",
            Icon::Mail => "extra-email",
            Icon::Download => "extra-download",
            Icon::Storage => "extra-storage",
            Icon::Cloud => "extra-cloud",
            Icon::Build => "extra-build",
            Icon::GitHub => "devicon-github-plain",
            Icon::LinkedIn => "devicon-linkedin-plain",
            Icon::Twitter => "devicon-twitter-original",
            Icon::Phone => "extra-phone",
            Icon::Location => "extra-location",
            Icon::School => "extra-school",
            Icon::Trophy => "extra-trophy",
            Icon::Bank => "extra-bank",
        }
    }
}

pub const OWNER: &str = "Haritha Wickramasinga";
pub const OWNER_EMAIL: &str = "haritha@example.com";

pub const TITLES: &[&str] = &["Full Stack Developer", "Student", "Tech Enthusiast"];

pub const TERMINAL_LINES: &[TerminalLine] = &[
    TerminalLine::new(LineKind::Command, "$ whoami"),
    TerminalLine::new(LineKind::Output, "Haritha Wickramasinga - Full Stack Developer"),
    TerminalLine::new(LineKind::Command, "$ cat skills.txt"),
    TerminalLine::new(LineKind::Output, "React • Node.js • TypeScript • MongoDB • AWS"),
    TerminalLine::new(LineKind::Command, "$ echo $STATUS"),
    TerminalLine::new(LineKind::Output, "🟢 Available for opportunities"),
    TerminalLine::new(LineKind::Command, "$ ./start-project.sh"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub label: &'static str,
    /// Id of the section to scroll to.
    pub action: &'static str,
    pub keywords: &'static str,
    pub icon: Icon,
}

pub const COMMANDS: &[Command] = &[
    Command {
        label: "Go to About",
        action: "about",
        keywords: "about me profile",
        icon: Icon::Person,
    },
    Command {
        label: "View Skills",
        action: "skills",
        keywords: "skills tech stack",
        icon: Icon::Terminal,
    },
    Command {
        label: "Browse Projects",
        action: "projects",
        keywords: "projects portfolio",
        icon: Icon::Code,
    },
    Command {
        label: "View Experience",
        action: "experience",
        keywords: "experience timeline",
        icon: Icon::Work,
    },
    Command {
        label: "Contact Me",
        action: "contact",
        keywords: "contact email message",
        icon: Icon::Mail,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Icon,
}

pub const HERO_LINKS: &[Link] = &[
    Link {
        label: "GitHub",
        href: "https://github.com",
        icon: Icon::GitHub,
    },
    Link {
        label: "LinkedIn",
        href: "https://linkedin.com",
        icon: Icon::LinkedIn,
    },
    Link {
        label: "Email",
        href: "mailto:haritha@example.com",
        icon: Icon::Mail,
    },
    Link {
        label: "Resume",
        href: "#",
        icon: Icon::Download,
    },
];

pub const SOCIAL_LINKS: &[Link] = &[
    Link {
        label: "GitHub",
        href: "https://github.com",
        icon: Icon::GitHub,
    },
    Link {
        label: "LinkedIn",
        href: "https://linkedin.com",
        icon: Icon::LinkedIn,
    },
    Link {
        label: "Twitter",
        href: "https://twitter.com",
        icon: Icon::Twitter,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct ContactItem {
    pub label: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
    pub icon: Icon,
}

pub const CONTACT_INFO: &[ContactItem] = &[
    ContactItem {
        label: "Email",
        value: OWNER_EMAIL,
        href: Some("mailto:haritha@example.com"),
        icon: Icon::Mail,
    },
    ContactItem {
        label: "Phone",
        value: "+94 77 123 4567",
        href: Some("tel:+94771234567"),
        icon: Icon::Phone,
    },
    ContactItem {
        label: "Location",
        value: "Colombo, Sri Lanka",
        href: None,
        icon: Icon::Location,
    },
];

/// Page sections in scroll order as `(id, label)`.
pub const NAV_ITEMS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("about", "About"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("experience", "Experience"),
    ("contact", "Contact"),
];

pub const ABOUT_STATS: &[(&str, &str)] = &[
    ("Projects", "5+"),
    ("Technologies", "15+"),
    ("Experience", "3+ Yrs"),
];

pub const COMPETENCIES: &[&str] = &[
    "Full Stack Development",
    "React & Next.js",
    "Node.js & Express",
    "Database Design",
    "API Development",
    "Cloud Deployment",
    "Agile Methodology",
    "Problem Solving",
];

pub struct SkillTab {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: Icon,
    pub file_name: &'static str,
    pub code: &'static str,
}

pub const SKILL_TABS: &[SkillTab] = &[
    SkillTab {
        id: "frontend",
        label: "Frontend",
        icon: Icon::Code,
        file_name: "frontend.tsx",
        code: r#"// Frontend Technologies
import React from 'react';
import NextJS from 'next';
import TypeScript from 'typescript';
import TailwindCSS from 'tailwindcss';

const skills = {
  frameworks: ['React', 'Next.js', 'Vue.js'],
  languages: ['TypeScript', 'JavaScript', 'HTML5', 'CSS3'],
  styling: ['Tailwind CSS', 'Sass', 'Styled Components'],
  tools: ['Vite', 'Webpack', 'Redux', 'React Query'],
  proficiency: '90%'
};

export default skills;"#,
    },
    SkillTab {
        id: "backend",
        label: "Backend",
        icon: Icon::Terminal,
        file_name: "backend.js",
        code: r#"// Backend & APIs
const express = require('express');
const mongoose = require('mongoose');

class BackendDeveloper {
  constructor() {
    this.languages = ['Node.js', 'Python', 'Java'];
    this.frameworks = ['Express', 'FastAPI', 'Spring Boot'];
    this.apis = ['REST', 'GraphQL', 'WebSocket'];
    this.auth = ['JWT', 'OAuth', 'Passport'];
  }

  buildAPI() {
    return 'Scalable & Secure APIs';
  }
}

module.exports = new BackendDeveloper();"#,
    },
    SkillTab {
        id: "database",
        label: "Database",
        icon: Icon::Storage,
        file_name: "database.sql",
        code: r#"-- Database & Storage
SELECT * FROM skills
WHERE category = 'Database'
ORDER BY proficiency DESC;

/* MongoDB, PostgreSQL, MySQL, Redis */

CREATE TABLE expertise (
  id SERIAL PRIMARY KEY,
  skill VARCHAR(50),
  level INT CHECK (level >= 80)
);"#,
    },
    SkillTab {
        id: "devops",
        label: "DevOps",
        icon: Icon::Cloud,
        file_name: "devops.sh",
        code: r#"# DevOps & Cloud
docker build -t app .
docker-compose up -d

AWS • Vercel • CI/CD
GitHub Actions"#,
    },
    SkillTab {
        id: "tools",
        label: "Tools",
        icon: Icon::Build,
        file_name: "tools.json",
        code: r#"{
  "editor": "VS Code",
  "design": ["Figma", "Adobe XD"],
  "testing": ["Postman", "Insomnia"],
  "versionControl": "Git & GitHub"
}"#,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub categories: &'static [&'static str],
    pub tech: &'static [&'static str],
    pub stars: u32,
    pub forks: u32,
    pub language: &'static str,
    pub language_color: &'static str,
    pub github: &'static str,
    pub github_repo: &'static str,
    pub demo: Option<&'static str>,
    pub lines: &'static str,
    pub commits: &'static str,
}

/// `(id, label)` pairs for the project filter chips; `all` shows everything.
pub const PROJECT_FILTERS: &[(&str, &str)] = &[
    ("all", "// All Projects"),
    ("featured", "// Featured"),
    ("web", "// Web Apps"),
    ("api", "// APIs"),
];

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "DevConnect Platform",
        description: "Real-time collaboration platform for developers with code sharing, video calls, and project management.",
        categories: &["featured", "web"],
        tech: &["Next.js", "Socket.io", "PostgreSQL", "Redis"],
        stars: 234,
        forks: 45,
        language: "TypeScript",
        language_color: "#3178C6",
        github: "https://github.com/devconnect/platform",
        github_repo: "devconnect/platform",
        demo: Some("https://devconnect.demo.com"),
        lines: "15.2K",
        commits: "234",
    },
    Project {
        id: 2,
        title: "AI Code Reviewer",
        description: "ML-powered code review assistant that provides intelligent suggestions and detects potential bugs.",
        categories: &["featured", "api"],
        tech: &["Python", "FastAPI", "TensorFlow", "Docker"],
        stars: 567,
        forks: 89,
        language: "Python",
        language_color: "#3776AB",
        github: "https://github.com/ai/reviewer",
        github_repo: "ai/reviewer",
        demo: None,
        lines: "8.7K",
        commits: "156",
    },
    Project {
        id: 3,
        title: "TaskFlow API",
        description: "RESTful API for task management with advanced filtering, real-time updates, and team collaboration.",
        categories: &["api"],
        tech: &["Node.js", "Express", "MongoDB", "JWT"],
        stars: 189,
        forks: 34,
        language: "JavaScript",
        language_color: "#F7DF1E",
        github: "https://github.com/taskflow/api",
        github_repo: "taskflow/api",
        demo: Some("https://taskflow.demo.com"),
        lines: "6.3K",
        commits: "98",
    },
    Project {
        id: 4,
        title: "Design System Kit",
        description: "Comprehensive React component library with 50+ customizable components and theming support.",
        categories: &["web"],
        tech: &["React", "TypeScript", "Storybook", "Tailwind"],
        stars: 423,
        forks: 67,
        language: "TypeScript",
        language_color: "#3178C6",
        github: "https://github.com/design/system-kit",
        github_repo: "design/system-kit",
        demo: Some("https://designkit.demo.com"),
        lines: "12.1K",
        commits: "189",
    },
    Project {
        id: 5,
        title: "WeatherPulse",
        description: "Beautiful weather dashboard with interactive maps, forecasts, and location-based alerts.",
        categories: &["web"],
        tech: &["React", "Leaflet", "OpenWeather API", "Chart.js"],
        stars: 145,
        forks: 28,
        language: "JavaScript",
        language_color: "#F7DF1E",
        github: "https://github.com/weather/pulse",
        github_repo: "weather/pulse",
        demo: Some("https://weatherpulse.demo.com"),
        lines: "4.5K",
        commits: "67",
    },
    Project {
        id: 6,
        title: "DevMetrics Analytics",
        description: "Developer productivity analytics platform with GitHub integration and insights dashboard.",
        categories: &["featured", "web"],
        tech: &["Next.js", "D3.js", "Supabase", "GitHub API"],
        stars: 312,
        forks: 52,
        language: "TypeScript",
        language_color: "#3178C6",
        github: "https://github.com/devmetrics/analytics",
        github_repo: "devmetrics/analytics",
        demo: Some("https://devmetrics.demo.com"),
        lines: "9.8K",
        commits: "145",
    },
];

pub fn projects_for(filter: &str) -> Vec<&'static Project> {
    PROJECTS
        .iter()
        .filter(|p| filter == "all" || p.categories.contains(&filter))
        .collect()
}

pub fn project_by_id(id: u32) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineKind {
    Experience,
    Education,
    Achievement,
}

impl TimelineKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TimelineKind::Experience => "experience",
            TimelineKind::Education => "education",
            TimelineKind::Achievement => "achievement",
        }
    }
}

pub struct TimelineItem {
    pub kind: TimelineKind,
    pub icon: Icon,
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub current: bool,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
}

pub const TIMELINE: &[TimelineItem] = &[
    TimelineItem {
        kind: TimelineKind::Experience,
        icon: Icon::Work,
        title: "Frontend Developer Intern",
        company: "StartupXYZ",
        period: "Jan 2024 - May 2024",
        current: false,
        description: "Built responsive web interfaces and improved user experience for the main product. Worked closely with designers to implement pixel-perfect designs.",
        achievements: &[
            "Redesigned landing page, increasing conversion by 25%",
            "Implemented component library used across 5+ projects",
            "Mentored 2 junior developers",
        ],
    },
    TimelineItem {
        kind: TimelineKind::Education,
        icon: Icon::School,
        title: "BSc Software Engineering",
        company: "University of Technology",
        period: "2023 - 2027 (Expected)",
        current: true,
        description: "2nd Year student specializing in software development and computer science. Maintaining strong academic performance while actively participating in tech clubs.",
        achievements: &[
            "GPA: 3.8/4.0",
            "Dean's List: 2023, 2024",
            "President of Computer Science Society",
        ],
    },
    TimelineItem {
        kind: TimelineKind::Achievement,
        icon: Icon::Trophy,
        title: "Hackathon Winner",
        company: "National Tech Hackathon 2024",
        period: "Mar 2024",
        current: false,
        description: "Led a team of 4 to win 1st place by developing an AI-powered student learning platform in 48 hours.",
        achievements: &[
            "Competed against 50+ teams",
            "Implemented ML model with 85% accuracy",
            "Featured in local tech news",
        ],
    },
    TimelineItem {
        kind: TimelineKind::Education,
        icon: Icon::Bank,
        title: "High School Diploma",
        company: "Royal College",
        period: "2019 - 2022",
        current: false,
        description: "Completed Advanced Level examinations with distinction in Mathematics and Computer Science.",
        achievements: &[
            "Top performer in district",
            "Led school robotics club",
            "Won inter-school coding competition",
        ],
    },
];

pub const MATRIX_COLUMNS: usize = 15;
pub const MATRIX_COLUMN_LEN: usize = 20;

/// One falling column of the hero backdrop.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixColumn {
    pub bits: String,
    pub duration_secs: f64,
    pub delay_secs: f64,
}

/// Deterministic backdrop columns; column `i` is seeded with `i * 12345`.
pub fn matrix_columns(count: usize, len: usize) -> Vec<MatrixColumn> {
    (0..count)
        .map(|i| {
            let mut seed = i as u64 * 12345;
            let bits = (0..len)
                .map(|_| {
                    seed = (seed * 9301 + 49297) % 233280;
                    if seed % 2 == 0 {
                        '1'
                    } else {
                        '0'
                    }
                })
                .collect();
            MatrixColumn {
                bits,
                duration_secs: (5 + i % 5) as f64,
                delay_secs: (i as f64 * 0.5) % 5.0,
            }
        })
        .collect()
}

/// Offset between the viewport top and the point a section counts as active.
pub const SCROLL_SPY_OFFSET: f64 = 100.0;

/// Section under the viewport top, given `(id, offset_top, height)` per section.
/// When ranges overlap the later section wins.
pub fn active_section<'a>(scroll_y: f64, sections: &[(&'a str, f64, f64)]) -> Option<&'a str> {
    sections
        .iter()
        .filter(|(_, top, height)| {
            let top = top - SCROLL_SPY_OFFSET;
            scroll_y >= top && scroll_y < top + height
        })
        .map(|(id, _, _)| *id)
        .last()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_filters() {
        assert_eq!(projects_for("all").len(), PROJECTS.len());
        let featured = projects_for("featured")
            .iter()
            .map(|p| p.id)
            .collect::<Vec<_>>();
        assert_eq!(featured, vec![1, 2, 6]);
        let apis = projects_for("api").iter().map(|p| p.id).collect::<Vec<_>>();
        assert_eq!(apis, vec![2, 3]);
        assert!(projects_for("mobile").is_empty());

        for (id, _) in PROJECT_FILTERS.iter().skip(1) {
            assert!(!projects_for(id).is_empty(), "filter {id} shows nothing");
        }
    }

    #[test]
    fn test_project_lookup() {
        assert_eq!(project_by_id(4).map(|p| p.title), Some("Design System Kit"));
        assert!(project_by_id(99).is_none());
    }

    #[test]
    fn test_commands_target_sections() {
        for cmd in COMMANDS {
            assert!(
                NAV_ITEMS.iter().any(|(id, _)| *id == cmd.action),
                "no section for {}",
                cmd.action
            );
            assert!(!cmd.icon.glyph_class().is_empty());
        }
    }

    #[test]
    fn test_matrix_columns_are_deterministic() {
        let a = matrix_columns(MATRIX_COLUMNS, MATRIX_COLUMN_LEN);
        let b = matrix_columns(MATRIX_COLUMNS, MATRIX_COLUMN_LEN);
        assert_eq!(a, b);
        assert_eq!(a.len(), 15);
        assert!(a.iter().all(|c| c.bits.len() == 20));
        assert!(a.iter().all(|c| c.bits.chars().all(|ch| ch == '0' || ch == '1')));

        // seed 0 -> 49297 (odd) -> '0' first
        assert!(a[0].bits.starts_with('0'));
        assert_eq!(a[0].duration_secs, 5.0);
        assert_eq!(a[7].duration_secs, 7.0);
        assert_eq!(a[3].delay_secs, 1.5);
        assert_eq!(a[12].delay_secs, 1.0);
    }

    #[test]
    fn test_active_section() {
        let sections = [
            ("home", 0.0, 800.0),
            ("about", 800.0, 600.0),
            ("skills", 1400.0, 700.0),
        ];
        assert_eq!(active_section(0.0, &sections), Some("home"));
        // 100px early
        assert_eq!(active_section(700.0, &sections), Some("about"));
        assert_eq!(active_section(699.0, &sections), Some("home"));
        assert_eq!(active_section(1350.0, &sections), Some("skills"));
        assert_eq!(active_section(5000.0, &sections), None);
        assert_eq!(active_section(0.0, &[]), None);
    }
}
