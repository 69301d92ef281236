//! Built-in page content and content-file loading
//!
//! The built-in set is what the page ships with. A TOML content file with the
//! same shape as [`SiteContent`] replaces it wholesale.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{FolioError, FolioResult};
use crate::models::{
    ExperienceEntry, FaqEntry, ProjectEntry, SiteContent, StoryParagraph, StoryPosition,
    Testimonial,
};

/// Brand shown by the intro, hero and navigation bar
pub const BRAND: &str = "MAAZ.DEV";

/// The content the page ships with.
pub fn builtin() -> SiteContent {
    SiteContent {
        story: builtin_story(),
        experience: builtin_experience(),
        projects: builtin_projects(),
        testimonials: builtin_testimonials(),
        faq: builtin_faq(),
    }
}

/// Load a content file and check its invariants.
pub fn load(path: &Path) -> FolioResult<SiteContent> {
    let raw = fs::read_to_string(path)?;
    let content: SiteContent = toml::from_str(&raw).map_err(|e| FolioError::InvalidToml {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;
    validate(&content).map_err(|message| FolioError::InvalidContent {
        file: path.to_path_buf(),
        message,
    })?;
    tracing::debug!(path = %path.display(), "loaded content file");
    Ok(content)
}

/// Load `path` when given, the built-in set otherwise.
pub fn load_or_builtin(path: Option<&Path>) -> FolioResult<SiteContent> {
    match path {
        Some(p) => load(p),
        None => Ok(builtin()),
    }
}

/// Check content invariants: ids are unique within each collection and no
/// visible text is blank.
pub fn validate(content: &SiteContent) -> Result<(), String> {
    unique_ids("story", content.story.iter().map(|p| p.id))?;
    unique_ids("experience", content.experience.iter().map(|e| e.id))?;
    unique_ids("project", content.projects.iter().map(|p| p.id))?;

    let mut numbers = HashSet::new();
    for entry in &content.faq {
        if !numbers.insert(entry.number.as_str()) {
            return Err(format!("duplicate faq number {}", entry.number));
        }
    }

    for p in &content.story {
        not_blank(&p.text, || format!("story paragraph {} has no text", p.id))?;
    }
    for e in &content.experience {
        not_blank(&e.role, || format!("experience {} has no role", e.id))?;
    }
    for p in &content.projects {
        not_blank(&p.title, || format!("project {} has no title", p.id))?;
    }
    for (i, t) in content.testimonials.iter().enumerate() {
        not_blank(&t.text, || format!("testimonial {} has no text", i + 1))?;
    }
    for f in &content.faq {
        not_blank(&f.question, || format!("faq {} has no question", f.number))?;
    }
    Ok(())
}

fn unique_ids(kind: &str, ids: impl Iterator<Item = u32>) -> Result<(), String> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(format!("duplicate {} id {}", kind, id));
        }
    }
    Ok(())
}

fn not_blank(text: &str, message: impl FnOnce() -> String) -> Result<(), String> {
    if text.trim().is_empty() {
        Err(message())
    } else {
        Ok(())
    }
}

fn builtin_story() -> Vec<StoryParagraph> {
    let texts = [
        "Hi, I'm Muhammad Maaz, a passionate Full Stack Web Developer with a love for creating dynamic and visually appealing web experiences. From the first time I wrote code, I knew I wanted to craft websites that not only work but also feel alive.",
        "I began my journey by exploring HTML, CSS, and JavaScript, gradually moving into frameworks like Next.js and libraries like GSAP for animations. Early on, I experimented with small personal projects, learning by doing and constantly pushing my boundaries.",
        "Over time, I've completed numerous projects, ranging from portfolio websites to interactive web apps. Each project taught me something new, whether it was performance optimization, responsive design, or advanced animations, helping me grow as a developer.",
        "I am always looking for new challenges and opportunities to push my creative limits further. Let's build something amazing together.",
    ];
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| StoryParagraph {
            id: i as u32 + 1,
            text: text.to_string(),
            position: StoryPosition::Center,
            small: true,
        })
        .collect()
}

fn builtin_experience() -> Vec<ExperienceEntry> {
    let rows = [
        (
            "Full Stack Developer",
            "Personal Portfolio & Brand",
            "Jan 2024 – Present",
            "Designing and developing high-end creative websites with a focus on smooth user experiences, GSAP animations, and modern React architectures. Successfully delivered multiple client projects with positive feedback.",
        ),
        (
            "Junior Web Developer",
            "Tech Solutions Inc.",
            "June 2023 – Dec 2023",
            "Worked on large-scale web applications using Next.js and Tailwind CSS. Improved site performance by 40% through code splitting and image optimization techniques. Collaborated with UI designers to implement pixel-perfect layouts.",
        ),
        (
            "Open Source Contributor",
            "GitHub Community",
            "2022 – 2023",
            "Actively contributed to popular React libraries and UI components. Gained deep knowledge of JavaScript performance and accessible web design (WCAG) while working alongside senior developers globally.",
        ),
        (
            "Computer Science Degree",
            "Iqra University",
            "2020 – 2024",
            "Studied core software engineering principles, algorithm design, and modern web development. Built several award-winning academic projects including a real-time collaboration tool and a data visualization dashboard.",
        ),
    ];
    rows.iter()
        .enumerate()
        .map(|(i, (role, company, duration, description))| ExperienceEntry {
            id: i as u32 + 1,
            role: role.to_string(),
            company: company.to_string(),
            duration: duration.to_string(),
            description: description.to_string(),
        })
        .collect()
}

fn builtin_projects() -> Vec<ProjectEntry> {
    const IMG: &str = "https://images.unsplash.com/photo-";
    let rows = [
        (
            "E-Commerce Platform",
            "Retail & Shopping",
            "1460925895917-afdab827c52f",
            "1551288049-bebda4e38f71",
            "Efficiency",
        ),
        (
            "AI Automation System",
            "Technology & AI",
            "1551288049-bebda4e38f71",
            "1512941937669-90a1b58e7e9c",
            "Automation",
        ),
        (
            "Mobile Application",
            "Software & Apps",
            "1467232004584-a241de8bcf5d",
            "1498050108023-c5249f4df085",
            "Design",
        ),
        (
            "Brand Identity",
            "Design & Branding",
            "1558655146-9f40138edfeb",
            "1551650975-87deedd944c3",
            "Creativity",
        ),
    ];
    rows.iter()
        .enumerate()
        .map(|(i, (title, category, laptop, mobile, label))| ProjectEntry {
            id: i as u32 + 1,
            title: title.to_string(),
            category: category.to_string(),
            laptop_image: format!("{IMG}{laptop}?w=1200&h=800&fit=crop"),
            mobile_image: format!("{IMG}{mobile}?w=400&h=800&fit=crop"),
            background_text: label.to_string(),
        })
        .collect()
}

fn builtin_testimonials() -> Vec<Testimonial> {
    let rows = [
        (
            "James Wilson",
            "CEO, TechFlow",
            "The web solutions provided by MAAZ.DEV are truly world-class. Our conversion rate increased by 200% after the relaunch.",
        ),
        (
            "Sarah Chen",
            "Director, Innovate AI",
            "Working with this studio has been a game-changer for our digital strategy. Professional, fast, and highly creative.",
        ),
        (
            "Marco Rossi",
            "Founder, Studio 54",
            "Their attention to detail and ability to translate complex requirements into elegant code is unmatched.",
        ),
        (
            "Elena Petrova",
            "Marketing Head, Global Pulse",
            "The most reliable web development partner we have ever had. The performance of our site is incredible now.",
        ),
        (
            "David Miller",
            "Product Manager, Sphere",
            "Beautiful design combined with robust engineering. MAAZ.DEV exceeded our expectations in every way.",
        ),
    ];
    rows.iter()
        .map(|(author, role, text)| Testimonial {
            author: author.to_string(),
            role: role.to_string(),
            text: text.to_string(),
        })
        .collect()
}

fn builtin_faq() -> Vec<FaqEntry> {
    let rows = [
        (
            "How long until my project goes live?",
            "We understand that speed is a competitive advantage. For a standard website or automation, our average delivery time is 4 weeks. For complex custom systems, we establish a clear roadmap from day one: you'll see progress through iterative steps, ensuring transparency without the wait.",
        ),
        (
            "I'm not a tech expert, will I be able to manage the site?",
            "Absolutely. We design our solutions with user-friendliness in mind. You'll receive comprehensive training and documentation, plus ongoing support to ensure you're comfortable managing your digital presence.",
        ),
        (
            "Are the costs fixed or will there be surprises?",
            "We provide transparent, fixed-price quotes upfront. No hidden fees, no surprises. Any additional features or changes are discussed and approved before implementation.",
        ),
        (
            "Do you provide support after the project is delivered?",
            "Yes, we offer comprehensive post-launch support packages. From technical maintenance to feature updates, we're here to ensure your solution continues to perform optimally.",
        ),
        (
            "My company is small, is automation really worth it?",
            "Automation isn't just for large enterprises. Small businesses often see the biggest ROI from automation, as it frees up valuable time and resources to focus on growth and customer relationships.",
        ),
        (
            "Is Data Certification and Smart Contract tech complicated to use?",
            "Not at all. We handle the technical complexity behind the scenes. You get a simple, intuitive interface while benefiting from cutting-edge blockchain technology for security and verification.",
        ),
    ];
    rows.iter()
        .enumerate()
        .map(|(i, (question, answer))| FaqEntry {
            number: format!("{:02}", i + 1),
            question: question.to_string(),
            answer: answer.to_string(),
        })
        .collect()
}
