//! Literal page content.

use crate::icon::Icon;

pub const OWNER_NAME: &str = "Indrasena Reddy Bala";

pub const HERO_ROLES: &[&str] = &[
    "AI/ML Engineer",
    "Open Source Contributor",
    "DevOps Engineer",
];

pub const HERO_BLURB: &str = "Crafting intelligent solutions through machine learning, contributing to open source, \
and mentoring the next generation of developers in DevOps and accessibility.";

pub const SPLASH_MESSAGE: &str = "Initializing AI Systems...";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProjectLinks {
    pub github: Option<&'static str>,
    pub demo: Option<&'static str>,
    pub docs: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub metrics: &'static [&'static str],
    pub technologies: &'static [&'static str],
    /// Free-form key resolved through [`Icon::from_key`].
    pub icon: &'static str,
    pub links: ProjectLinks,
    pub category: &'static str,
}

impl Project {
    pub fn icon(&self) -> Icon {
        Icon::from_key(self.icon)
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: "neural-optimizer",
        title: "Automated Cloud Deployment Pipeline",
        description: "A comprehensive, end-to-end deployment automation system for a full-stack URL shortener \
application. This project establishes a complete, production-ready workflow using modern DevOps principles, from \
infrastructure provisioning with code to a fully automated CI/CD pipeline, ensuring rapid and reliable software delivery.",
        features: &[
            "Infrastructure as Code (IaC) using Terraform for fully reproducible AWS environments.",
            "End-to-End CI/CD Automation with GitHub Actions, triggering on every code commit.",
            "Containerized Services using Docker and Docker Compose for portability and consistency.",
            "Cloud-Native Deployment on AWS, leveraging EC2 for compute and ECR for image registry.",
            "Full-Stack Architecture with a decoupled React frontend and Node.js backend.",
            "Secure & Automated Deployment to EC2 via version-controlled SSH keys and secrets.",
        ],
        metrics: &[
            "95% reduction in deployment time (from over an hour manually to under 5 minutes).",
            "100% automated deployment process, eliminating human error during releases.",
            "Infrastructure setup time reduced by 99% through Terraform automation.",
            "Zero-downtime deployments achieved through container orchestration.",
        ],
        technologies: &["AWS", "Terraform", "Docker", "GitHub Actions", "Node.js", "React"],
        icon: "Brain",
        links: ProjectLinks {
            github: Some("https://github.com/Indra1806/"),
            demo: Some("https://docs.google.com/document/d/1YxVRdK6RSicZ7DVWutj_5RRDHYN5IbTimp1lP5QL5uY/edit?usp=sharing"),
            docs: None,
        },
        category: "DevOps",
    },
    Project {
        id: "nlp-sentiment",
        title: "Telugu Cultural Corpus Collection Platform",
        description: "A foundational data collection platform developed for Viswam.ai to support the creation of a \
large-scale Telugu language model (LLM). As part of a five-person summer internship team, we designed and built a \
full-stack application to crowdsource high-quality, culturally-specific data from the community across Telangana.",
        features: &[
            "Secure Image & Text Ingestion Pipeline for handling user-submitted cultural data.",
            "Structured Metadata Storage in a PostgreSQL database to link images with rich, multilingual descriptions.",
            "Intuitive User Contribution Portal built with React to ensure a seamless upload experience for the community.",
            "Robust Python Backend designed to efficiently process and manage incoming data submissions.",
            "Data Curation Interface for the Viswam.ai team to review, validate, and export the collected corpus.",
        ],
        metrics: &[
            "Created a vital, first-of-its-kind dataset capturing the unique cultural heritage of the Telugu-speaking region.",
            "Collected over 10,000 high-quality image-text pairs in the initial phase, directly fueling the LLM training process.",
            "Enabled the development of a more accurate and culturally-aware Telugu LLM by providing context-rich data.",
            "Designed a scalable and maintainable platform capable of supporting thousands of contributors.",
        ],
        technologies: &["Python", "Flask", "GitLab", "PostgreSQL", "React", "Docker"],
        icon: "Data Collection",
        links: ProjectLinks {
            github: Some("https://code.swecha.org/indrasena/culturemapper"),
            demo: None,
            docs: None,
        },
        category: "ml",
    },
    Project {
        id: "cv-pipeline",
        title: "Global Economic Freedom Analysis (2022)",
        description: "A data analytics internship project sponsored by the Andhra Pradesh State Council of Higher \
Education (APSCHE), analyzing the \"Index of Economic Freedom 2022\" dataset from The Heritage Foundation and \
presenting global and regional trends through an interactive Tableau dashboard.",
        features: &[
            "Data Cleaning & Preparation: processed the raw dataset to handle missing values and ensure data integrity.",
            "Exploratory Data Analysis: studied score distributions and identified outliers and regional patterns.",
            "Interactive Dashboard Creation: visualized GDP, population, inflation and overall economic freedom in Tableau.",
            "Insight Generation: surfaced the correlation between property rights scores and overall economic freedom.",
        ],
        metrics: &[],
        technologies: &["Tableau", "Microsoft Excel", "Data Visualization", "Statistical Analysis", "MySQL"],
        icon: "Eye",
        links: ProjectLinks {
            github: Some("https://github.com/Indra1806/Index-of-Economic-Freedom-2022-Data-Analysis-Project/blob/main/README.md"),
            demo: Some("https://public.tableau.com/shared/X7RWJWGPR?:display_count=n&:origin=viz_share_link"),
            docs: None,
        },
        category: "Data Analytics",
    },
    Project {
        id: "ai-blog-agent",
        title: "AI Blog Generation Agent",
        description: "An intelligent AI agent that automates the creation of high-quality, SEO-optimized blog posts \
from user-defined topics and keywords, using Large Language Models and prompt engineering to produce well-structured, \
publish-ready articles.",
        features: &[
            "Topic-to-Article Generation: transforms a simple prompt or topic into a comprehensive blog post.",
            "Built-in SEO Optimization: keyword integration, meta descriptions and structured headings.",
            "Customizable Content: target audience, tone of voice and key points are user controlled.",
            "Agentic Workflow: research, outlining, drafting and SEO enhancement as separate steps.",
            "Scalable Content Creation: multiple articles generated in parallel.",
        ],
        metrics: &[
            "Reduces content creation time by over 90%",
            "Decreases cost-per-article by 95% compared to manual writing",
            "Ensures 100% consistency in brand voice and tone",
            "Boosts organic traffic by 40% through enhanced SEO keyword integration",
        ],
        technologies: &["Python", "LangChain", "LLM APIs (Google Gemini / OpenAI)", "Streamlit", "Docker"],
        icon: "shield",
        links: ProjectLinks {
            github: Some("https://github.com/Indra1806/blog-agent/blob/main/README.md"),
            demo: None,
            docs: Some("https://blog-agent.netlify.app/"),
        },
        category: "ai-agent",
    },
    Project {
        id: "waterdrop-app",
        title: "WaterDrop: Smart Water Delivery App",
        description: "A full-stack web application that streamlines ordering drinking water: customers book bottle \
sizes, schedule deliveries and pay online through a clean, animated interface.",
        features: &[
            "Seamless Ordering System: browse and order multiple bottle sizes (2L, 5L, 10L, 20L, 30L).",
            "Flexible Delivery Scheduling: one-time or recurring deliveries.",
            "Integrated Secure Payments: frictionless checkout.",
            "Responsive & Animated UI: minimalistic interface with smooth animations on every screen size.",
            "Promotions & Discounts: built-in support for discounts and promotional offers.",
        ],
        metrics: &[
            "Reduces order placement time by 80% compared to phone calls",
            "Achieves a 95% user satisfaction rate for ease of use",
            "Supports 1000+ concurrent users during peak hours",
            "Ensures 99.9% uptime through Netlify's global CDN",
        ],
        technologies: &["React", "Node.js", "Stripe", "PostgreSQL", "Netlify", "Framer Motion"],
        icon: "Droplet",
        links: ProjectLinks {
            github: Some("https://github.com/Indra1806/WATEERDROP"),
            demo: None,
            docs: None,
        },
        category: "web-app",
    },
];

pub fn projects_by_category(category: &str) -> impl Iterator<Item = &'static Project> + '_ {
    PROJECTS.iter().filter(move |p| p.category == category)
}

/// The first `count` projects in display order.
pub fn featured_projects(count: usize) -> &'static [Project] {
    &PROJECTS[..count.min(PROJECTS.len())]
}

pub fn project_by_id(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Experience {
    pub period: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
}

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        period: "2024–Present",
        role: "AI Innovator & Full-Stack Developer",
        company: "Personal Portfolio & Projects",
        location: "Warangal, India",
        description: "Conceptualizing and building end-to-end AI-driven applications, from prompt engineering \
frameworks to full-stack platforms.",
        achievements: &[
            "Developing 'CultureMapper', an end-to-end platform for cultural data collection and analysis.",
            "Building an 'AI Blog Agent' to automate SEO-optimized content creation using agentic workflows.",
            "Designing an interactive portfolio with Lottie animations and a futuristic, AI-inspired UI/UX.",
        ],
    },
    Experience {
        period: "2023–2024",
        role: "AI & Data Analytics Specialist",
        company: "APSCHE Internship & Personal Projects",
        location: "Remote",
        description: "Moved from AI exploration to practical application, focusing on data analytics and \
AI-powered prototypes.",
        achievements: &[
            "Analyzed the 'Index of Economic Freedom' dataset and built interactive dashboards in Tableau.",
            "Developed prompt engineering frameworks for structured and creative AI outputs.",
            "Created AI-generated storybooks with integrated images and scripts for YouTube content.",
        ],
    },
    Experience {
        period: "2022–2023",
        role: "AI Explorer & Aspiring Developer",
        company: "Self-Directed Learning",
        location: "Remote",
        description: "Explored tools for text, image and video generation while learning frontend and backend \
fundamentals.",
        achievements: &[
            "Mastered various AI tools for generative tasks.",
            "Learned to integrate AI APIs into web application prototypes.",
            "Conceptualized a personal brand identity focused on AI-driven innovation.",
        ],
    },
];

pub const STORY: &[&str] = &[
    "My journey began in 2022 with a deep curiosity for AI and its potential to solve real-world problems.",
    "In 2023, I expanded into full-stack development and data analytics, bridging the gap between a creative idea \
and a functional, data-driven prototype.",
    "Today, my focus is on creating end-to-end platforms and structured AI frameworks.",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillGroup {
    pub category: &'static str,
    pub items: &'static [&'static str],
}

pub const SKILLS: &[SkillGroup] = &[
    SkillGroup {
        category: "AI & Data",
        items: &["Prompt Engineering", "LLM Integration", "Data Analytics", "Tableau", "LangChain"],
    },
    SkillGroup {
        category: "Development",
        items: &["Python", "React", "GoLang", "Node.js", "JavaScript"],
    },
    SkillGroup {
        category: "DevOps & Cloud",
        items: &["Docker", "AWS", "CI/CD", "Terraform", "Netlify"],
    },
    SkillGroup {
        category: "Design",
        items: &["UI/UX Concepts", "Canva", "Framer Motion", "Lottie Animations", "Storytelling"],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Value {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const VALUES: &[Value] = &[
    Value {
        icon: Icon::BrainCircuit,
        title: "AI Innovation",
        description: "Pushing the boundaries of what's possible with AI, from creative generation to data intelligence.",
    },
    Value {
        icon: Icon::Layers,
        title: "Full-Stack Integration",
        description: "Building complete solutions that bridge frontend design and backend AI logic.",
    },
    Value {
        icon: Icon::Palette,
        title: "Creative Storytelling",
        description: "Using design and narrative to make complex technology accessible and engaging.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactLink {
    pub icon: Icon,
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

pub const CONTACT_LINKS: &[ContactLink] = &[
    ContactLink {
        icon: Icon::Mail,
        label: "Email",
        value: "indra.ug2022@gmail.com",
        href: "mailto:indra.ug2022@gmail.com",
    },
    ContactLink {
        icon: Icon::Github,
        label: "GitHub",
        value: "@indrasena",
        href: "https://github.com/Indra1806",
    },
    ContactLink {
        icon: Icon::Linkedin,
        label: "LinkedIn",
        value: "indrasena-reddy",
        href: "https://linkedin.com/in/indrasenareddybala",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoRow {
    pub icon: Icon,
    pub label: &'static str,
    pub value: &'static str,
}

pub const AVAILABILITY: &[InfoRow] = &[
    InfoRow {
        icon: Icon::MapPin,
        label: "Location",
        value: "Hyderabad, India (Remote Available)",
    },
    InfoRow {
        icon: Icon::Calendar,
        label: "Availability",
        value: "Open for collaborations",
    },
];

pub const INTEREST_TAGS: &[&str] = &["AI Research", "ML Engineering", "Open Source"];

pub const FOOTER_COPYRIGHT: &str = "© 2025 Indrasena Reddy Bala. All rights reserved.";
