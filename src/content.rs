//! Page Content
//!
//! Fixed literal tables rendered by the sections.

use crate::models::{Project, SiteProfile, Skill, SkillGroup, SocialLink, Testimonial, UsesGroup, UsesItem};

pub const PROFILE: SiteProfile = SiteProfile {
    name: "Alex Morgan",
    headline: "I design and build fast, reliable software for the web.",
    roles: &[
        "Full-Stack Engineer",
        "Systems Tinkerer",
        "API Designer",
        "Open Source Contributor",
    ],
    bio: "I'm a software engineer with a soft spot for **well-shaped systems**: \
clean interfaces, boring deployments and pages that load before you notice.\n\n\
Over the last eight years I've shipped commerce platforms, real-time dashboards \
and internal tooling for teams of every size. These days I spend most of my time \
on backend services and the occasional [open source](https://github.com/) patch.\n\n\
Away from the keyboard you'll find me at the chessboard or behind a camera.",
    email: "hello@alexmorgan.dev",
    location: "Lisbon, Portugal",
    site_url: "https://alexmorgan.dev",
    socials: &[
        SocialLink { label: "GitHub", url: "https://github.com/" },
        SocialLink { label: "LinkedIn", url: "https://www.linkedin.com/" },
        SocialLink { label: "Mastodon", url: "https://mastodon.social/" },
    ],
};

pub const ABOUT_HIGHLIGHTS: &[(&str, &str)] = &[
    ("8+", "Years shipping"),
    ("40+", "Projects delivered"),
    ("12", "Open source repos"),
];

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Frontend",
        skills: &[
            Skill { name: "TypeScript", level: 92 },
            Skill { name: "React", level: 90 },
            Skill { name: "CSS & Animation", level: 82 },
            Skill { name: "WebAssembly", level: 70 },
        ],
    },
    SkillGroup {
        title: "Backend",
        skills: &[
            Skill { name: "Node.js", level: 88 },
            Skill { name: "Rust", level: 78 },
            Skill { name: "PostgreSQL", level: 85 },
            Skill { name: "Redis", level: 74 },
        ],
    },
    SkillGroup {
        title: "Infrastructure",
        skills: &[
            Skill { name: "Docker", level: 86 },
            Skill { name: "CI/CD", level: 80 },
            Skill { name: "Observability", level: 72 },
        ],
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Enterprise E-Commerce Platform",
        description: "Full-stack e-commerce solution with advanced features including real-time inventory management, payment processing, and analytics dashboard.",
        tags: &["React", "Node.js", "PostgreSQL", "Stripe API"],
        live_url: "#",
        source_url: "#",
        status: "Production",
    },
    Project {
        title: "Real-Time Analytics Dashboard",
        description: "Interactive data visualization platform for business intelligence with real-time updates and customizable reporting features.",
        tags: &["React", "D3.js", "WebSocket", "Express"],
        live_url: "#",
        source_url: "#",
        status: "Live",
    },
    Project {
        title: "Project Management System",
        description: "Collaborative project management tool with team coordination, task tracking, and automated workflow capabilities.",
        tags: &["TypeScript", "React", "Node.js", "MongoDB"],
        live_url: "#",
        source_url: "#",
        status: "Beta",
    },
    Project {
        title: "API Gateway & Microservices",
        description: "Scalable microservices architecture with API gateway, authentication, rate limiting, and service discovery.",
        tags: &["Node.js", "Docker", "Redis", "PostgreSQL"],
        live_url: "#",
        source_url: "#",
        status: "Development",
    },
];

pub const USES_GROUPS: &[UsesGroup] = &[
    UsesGroup {
        title: "Workstation",
        items: &[
            UsesItem { name: "14\" laptop, 32 GB", note: "Daily driver, docked most of the day" },
            UsesItem { name: "27\" 4K monitor", note: "Vertical split for code and docs" },
            UsesItem { name: "Split mechanical keyboard", note: "Brown switches, custom layout" },
        ],
    },
    UsesGroup {
        title: "Software",
        items: &[
            UsesItem { name: "Neovim", note: "With LSP for everything" },
            UsesItem { name: "WezTerm", note: "Terminal and multiplexer in one" },
            UsesItem { name: "Firefox Developer Edition", note: "Best-in-class CSS tooling" },
        ],
    },
    UsesGroup {
        title: "Services",
        items: &[
            UsesItem { name: "GitHub", note: "Code, CI and project boards" },
            UsesItem { name: "Fly.io", note: "Small services close to users" },
            UsesItem { name: "Plausible", note: "Privacy-friendly analytics" },
        ],
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Alex took a tangle of legacy services and turned it into a platform our whole team understands. Releases went from monthly to daily.",
        author: "Priya Raman",
        role: "VP Engineering, Northwind",
    },
    Testimonial {
        quote: "The dashboard Alex built is the first thing our operations team opens every morning. Fast, clear and never down.",
        author: "Marcus Chen",
        role: "Head of Operations, Brightline",
    },
    Testimonial {
        quote: "Rare mix of product sense and engineering depth. Alex asks the right questions before writing a single line.",
        author: "Sofia Almeida",
        role: "Founder, Tessellate",
    },
];
