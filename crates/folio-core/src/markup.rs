//! HTML generation for the page skeleton and its static sections.
//!
//! Output is plain strings mounted with `innerHTML`; every piece of content
//! goes through [`escape`]. Dynamic parts (hero text, nav highlight, form
//! status) are updated in place by the web frontend using the ids below.

use crate::animation::{AnimationConfig, ANIMATIONS};
use crate::contact::{Field, FIELDS};
use crate::content::*;
use crate::icon::Icon;
use crate::section::{page_sections, SectionId, SECTIONS};
use std::fmt::Write;

pub const HERO_TEXT_ID: &str = "hero-role";
pub const HERO_CARET_ID: &str = "hero-caret";
pub const SPLASH_ID: &str = "splash";
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const CONTACT_SUBMIT_ID: &str = "contact-submit";
pub const CONTACT_SUCCESS_ID: &str = "contact-success";
pub const NAV_ITEM_CLASS: &str = "nav-item";
pub const NAV_ACTIVE_CLASS: &str = "active";
pub const ANIMATION_SLOT_CLASS: &str = "lottie-slot";

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn icon(out: &mut String, icon: Icon) {
    _ = write!(
        out,
        "<span class=\"icon {}\" aria-hidden=\"true\">{}</span>",
        icon.class_name(),
        icon.glyph()
    );
}

fn bullet_list(out: &mut String, class: &str, items: &[&str]) {
    _ = write!(out, "<ul class=\"{}\">", class);
    for item in items {
        _ = write!(out, "<li>{}</li>", escape(item));
    }
    out.push_str("</ul>");
}

/// Animation slot id for the `index`-th decorative animation.
pub fn animation_slot_id(index: usize) -> String {
    format!("lottie-{}", index)
}

/// The whole page: splash, both navs, and `<main>` with sections and animation slots.
pub fn page_html(active: usize) -> String {
    let mut out = String::with_capacity(32 * 1024);
    _ = write!(
        out,
        "<div id=\"{SPLASH_ID}\" class=\"splash\"><div class=\"spinner\"></div><p>{}</p></div>",
        escape(SPLASH_MESSAGE)
    );
    out.push_str(&nav_html(active));
    out.push_str("<main>");
    // a transition follows every section except the last
    for section in page_sections() {
        _ = write!(
            out,
            "<section data-section=\"{}\" id=\"{}\">",
            section.order,
            section.id.dom_id()
        );
        out.push_str(&section_body_html(section.id));
        out.push_str("</section>");
        if let Some(cfg) = ANIMATIONS.get(section.order) {
            out.push_str(&animation_slot_html(section.order, cfg));
        }
    }
    out.push_str("</main>");
    out
}

pub fn section_body_html(id: SectionId) -> String {
    match id {
        SectionId::Hero => hero_html(),
        SectionId::Projects => projects_html(),
        SectionId::About => about_html(),
        SectionId::Contact => contact_html(),
    }
}

fn nav_list(out: &mut String, variant: &str, active: usize) {
    _ = write!(
        out,
        "<nav class=\"nav nav-{variant}\" role=\"navigation\" aria-label=\"Section navigation\"><ul>"
    );
    for (i, id) in SECTIONS.iter().enumerate() {
        let is_active = i == active;
        _ = write!(
            out,
            "<li><button type=\"button\" class=\"{NAV_ITEM_CLASS}{}\" data-target=\"{}\" aria-label=\"Navigate to {}\"{}>",
            if is_active { " active" } else { "" },
            id.dom_id(),
            id.label(),
            if is_active { " aria-current=\"page\"" } else { "" }
        );
        icon(out, id.nav_icon());
        _ = write!(out, "<span class=\"nav-label\">{}</span></button></li>", id.label());
    }
    out.push_str("</ul></nav>");
}

/// Desktop (vertical) and mobile (bottom bar) navigation.
pub fn nav_html(active: usize) -> String {
    let mut out = String::new();
    nav_list(&mut out, "desktop", active);
    nav_list(&mut out, "mobile", active);
    out
}

pub fn hero_html() -> String {
    let mut out = String::new();
    _ = write!(out, "<div class=\"hero\"><h1>{}</h1>", escape(OWNER_NAME));
    _ = write!(
        out,
        "<p class=\"hero-role\"><span id=\"{HERO_TEXT_ID}\"></span><span id=\"{HERO_CARET_ID}\" class=\"caret\">|</span></p>"
    );
    _ = write!(out, "<p class=\"hero-blurb\">{}</p>", escape(HERO_BLURB));
    out.push_str("<div class=\"hero-links\"><a class=\"cta\" href=\"#projects\">View My Work</a>");
    for link in CONTACT_LINKS {
        _ = write!(
            out,
            "<a class=\"icon-link\" href=\"{}\" aria-label=\"{}\">",
            escape(link.href),
            escape(link.label)
        );
        icon(&mut out, link.icon);
        out.push_str("</a>");
    }
    out.push_str("</div></div>");
    out
}

pub fn project_card_html(p: &Project) -> String {
    let mut out = String::new();
    _ = write!(out, "<article class=\"project-card\" data-project=\"{}\">", escape(p.id));
    out.push_str("<header>");
    icon(&mut out, p.icon());
    out.push_str("<div class=\"project-links\">");
    if let Some(url) = p.links.github {
        _ = write!(
            out,
            "<a href=\"{}\" aria-label=\"View {} source code\">",
            escape(url),
            escape(p.title)
        );
        icon(&mut out, Icon::Github);
        out.push_str("</a>");
    }
    if let Some(url) = p.links.demo.or(p.links.docs) {
        _ = write!(
            out,
            "<a href=\"{}\" aria-label=\"View {} demo\">",
            escape(url),
            escape(p.title)
        );
        icon(&mut out, Icon::ExternalLink);
        out.push_str("</a>");
    }
    out.push_str("</div></header>");
    _ = write!(out, "<h3>{}</h3><p>{}</p>", escape(p.title), escape(p.description));
    out.push_str("<h4>Key Features</h4>");
    bullet_list(&mut out, "features", p.features);
    if !p.metrics.is_empty() {
        out.push_str("<h4>Performance</h4>");
        bullet_list(&mut out, "metrics", p.metrics);
    }
    out.push_str("<div class=\"tags\">");
    for tech in p.technologies {
        _ = write!(out, "<span class=\"tag\">{}</span>", escape(tech));
    }
    out.push_str("</div></article>");
    out
}

pub fn projects_html() -> String {
    let mut out = String::from(
        "<div class=\"projects\"><h2>Featured Projects</h2><p class=\"lead\">Showcasing intelligent solutions \
that bridge the gap between cutting-edge AI research and real-world applications</p><div class=\"grid\">",
    );
    for p in PROJECTS {
        out.push_str(&project_card_html(p));
    }
    out.push_str(
        "</div><p>Interested in collaborating or learning more about these projects?</p>\
<a class=\"cta\" href=\"#contact\">Let's Connect</a></div>",
    );
    out
}

pub fn about_html() -> String {
    let mut out = String::from("<div class=\"about\"><h2>My Journey</h2><h3>The Story So Far</h3>");
    for para in STORY {
        _ = write!(out, "<p>{}</p>", escape(para));
    }
    out.push_str("<h3>Core Values</h3><div class=\"values\">");
    for v in VALUES {
        out.push_str("<div class=\"value\">");
        icon(&mut out, v.icon);
        _ = write!(out, "<h4>{}</h4><p>{}</p></div>", escape(v.title), escape(v.description));
    }
    out.push_str("</div><h3>Experience &amp; Milestones</h3><div class=\"timeline\">");
    for exp in EXPERIENCES {
        _ = write!(
            out,
            "<div class=\"experience\"><h4>{}</h4><span class=\"company\">{}</span>",
            escape(exp.role),
            escape(exp.company)
        );
        icon(&mut out, Icon::Calendar);
        _ = write!(out, "<span>{}</span>", escape(exp.period));
        icon(&mut out, Icon::MapPin);
        _ = write!(out, "<span>{}</span><p>{}</p>", escape(exp.location), escape(exp.description));
        out.push_str("<h5>");
        icon(&mut out, Icon::Award);
        out.push_str("Key Achievements</h5>");
        bullet_list(&mut out, "achievements", exp.achievements);
        out.push_str("</div>");
    }
    out.push_str("</div><h3>Technical Expertise</h3><div class=\"skills\">");
    for group in SKILLS {
        _ = write!(out, "<div class=\"skill-group\"><h4>{}</h4>", escape(group.category));
        for item in group.items {
            _ = write!(out, "<div class=\"skill\">{}</div>", escape(item));
        }
        out.push_str("</div>");
    }
    out.push_str("</div></div>");
    out
}

fn form_control(out: &mut String, field: Field) {
    let name = field.name();
    _ = write!(out, "<label>{}", field.label());
    match field {
        Field::Message => {
            _ = write!(out, "<textarea name=\"{name}\" rows=\"5\" required></textarea>");
        }
        Field::Email => {
            _ = write!(out, "<input type=\"email\" name=\"{name}\" required>");
        }
        _ => {
            _ = write!(out, "<input type=\"text\" name=\"{name}\" required>");
        }
    }
    out.push_str("</label>");
}

pub fn contact_html() -> String {
    let mut out = String::from(
        "<div class=\"contact\"><h2>Let's Connect</h2><p class=\"lead\">Ready to collaborate on innovative AI \
projects or discuss opportunities? I'm always open to connecting with fellow engineers and researchers.</p>",
    );
    _ = write!(out, "<form id=\"{CONTACT_FORM_ID}\" novalidate>");
    for field in FIELDS {
        form_control(&mut out, field);
    }
    _ = write!(out, "<button type=\"submit\" id=\"{CONTACT_SUBMIT_ID}\">");
    icon(&mut out, Icon::Send);
    out.push_str("<span>Send Message</span></button>");
    _ = write!(out, "<p id=\"{CONTACT_SUCCESS_ID}\" class=\"success\" hidden>");
    icon(&mut out, Icon::CheckCircle);
    out.push_str("Message sent! I'll get back to you soon.</p></form>");

    out.push_str("<div class=\"contact-info\"><h3>Get In Touch</h3>");
    for link in CONTACT_LINKS {
        _ = write!(
            out,
            "<a class=\"contact-link\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">",
            escape(link.href)
        );
        icon(&mut out, link.icon);
        _ = write!(out, "<div>{}</div><div>{}</div></a>", escape(link.label), escape(link.value));
    }
    out.push_str("<h3>Availability</h3>");
    for row in AVAILABILITY {
        out.push_str("<div class=\"info-row\">");
        icon(&mut out, row.icon);
        _ = write!(out, "<div>{}</div><div>{}</div></div>", escape(row.label), escape(row.value));
    }
    out.push_str("<h4>Let's Build Something Amazing</h4><div class=\"tags\">");
    for tag in INTEREST_TAGS {
        _ = write!(out, "<span class=\"tag\">{}</span>", escape(tag));
    }
    _ = write!(
        out,
        "</div></div><footer><p>Built with ❤️</p><p>{}</p></footer></div>",
        escape(FOOTER_COPYRIGHT)
    );
    out
}

/// Empty container for a decorative animation; content is filled in by the player.
pub fn animation_slot_html(index: usize, cfg: &AnimationConfig) -> String {
    format!(
        "<div id=\"{}\" class=\"{ANIMATION_SLOT_CLASS}\" style=\"height:{}\">{}</div>",
        animation_slot_id(index),
        escape(cfg.height),
        spinner_html()
    )
}

pub fn spinner_html() -> String {
    "<div class=\"spinner\" role=\"status\" aria-label=\"Loading animation\"></div>".to_string()
}

/// Static stand-in for an animation: the configured image, else a gradient block.
pub fn fallback_html(cfg: &AnimationConfig) -> String {
    match cfg.fallback_image {
        Some(src) => format!(
            "<img src=\"{}\" alt=\"Animation fallback\" class=\"lottie-fallback\">",
            escape(src)
        ),
        None => "<div class=\"lottie-fallback gradient\"></div>".to_string(),
    }
}
