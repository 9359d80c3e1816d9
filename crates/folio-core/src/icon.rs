//! Closed icon set used by the page markup.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    // project cards
    Brain,
    Database,
    Eye,
    Cloud,
    Code,
    Shield,
    // links and info rows
    Github,
    Linkedin,
    Mail,
    ExternalLink,
    MapPin,
    Calendar,
    Award,
    Send,
    CheckCircle,
    // values
    BrainCircuit,
    Layers,
    Palette,
    // navigation
    Home,
    Puzzle,
    User,
    Phone,
}

impl Icon {
    /// Resolve a project's icon key. Lookup is exact; unknown keys render as `Code`.
    pub fn from_key(key: &str) -> Icon {
        match key {
            "Brain" => Icon::Brain,
            "Database" => Icon::Database,
            "Eye" => Icon::Eye,
            "Cloud" => Icon::Cloud,
            "Code" => Icon::Code,
            "Shield" => Icon::Shield,
            _ => Icon::Code,
        }
    }

    /// Text glyph drawn inside the icon badge.
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Brain => "🧠",
            Icon::Database => "🗄",
            Icon::Eye => "👁",
            Icon::Cloud => "☁",
            Icon::Code => "⌨",
            Icon::Shield => "🛡",
            Icon::Github => "⌥",
            Icon::Linkedin => "in",
            Icon::Mail => "✉",
            Icon::ExternalLink => "↗",
            Icon::MapPin => "📍",
            Icon::Calendar => "📅",
            Icon::Award => "🏅",
            Icon::Send => "➤",
            Icon::CheckCircle => "✔",
            Icon::BrainCircuit => "🧬",
            Icon::Layers => "🗂",
            Icon::Palette => "🎨",
            Icon::Home => "🌀",
            Icon::Puzzle => "🧩",
            Icon::User => "👤",
            Icon::Phone => "📞",
        }
    }

    /// CSS modifier class, `icon-<name>`.
    pub fn class_name(self) -> &'static str {
        match self {
            Icon::Brain => "icon-brain",
            Icon::Database => "icon-database",
            Icon::Eye => "icon-eye",
            Icon::Cloud => "icon-cloud",
            Icon::Code => "icon-code",
            Icon::Shield => "icon-shield",
            Icon::Github => "icon-github",
            Icon::Linkedin => "icon-linkedin",
            Icon::Mail => "icon-mail",
            Icon::ExternalLink => "icon-external",
            Icon::MapPin => "icon-map-pin",
            Icon::Calendar => "icon-calendar",
            Icon::Award => "icon-award",
            Icon::Send => "icon-send",
            Icon::CheckCircle => "icon-check",
            Icon::BrainCircuit => "icon-brain-circuit",
            Icon::Layers => "icon-layers",
            Icon::Palette => "icon-palette",
            Icon::Home => "icon-home",
            Icon::Puzzle => "icon-puzzle",
            Icon::User => "icon-user",
            Icon::Phone => "icon-phone",
        }
    }
}
