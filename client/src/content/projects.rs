//! Project catalog.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

/// Number of projects featured on the home page.
pub const FEATURED_COUNT: usize = 3;

#[derive(Debug, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
    pub category: &'static str,
    pub date: &'static str,
    pub detail: Option<ProjectDetail>,
}

/// Long-form case study shown on the detail page.
#[derive(Debug, PartialEq, Eq)]
pub struct ProjectDetail {
    pub paragraphs: &'static [&'static str],
    pub client: Option<&'static str>,
    pub tools: &'static [&'static str],
    pub gallery: &'static [&'static str],
}

impl Project {
    /// Gallery image selected when the detail page opens.
    #[must_use]
    pub fn default_image(&self) -> &'static str {
        self.detail
            .as_ref()
            .and_then(|d| d.gallery.first().copied())
            .unwrap_or(self.image_url)
    }

    #[must_use]
    pub fn gallery(&self) -> &'static [&'static str] {
        self.detail.as_ref().map_or(&[], |d| d.gallery)
    }
}

const DASHBOARD_COVER: &str = "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&auto=format&fit=crop&q=60&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxzZWFyY2h8M3x8ZGFzaGJvYXJkfGVufDB8fDB8fHww";
const FITNESS_COVER: &str = "https://images.unsplash.com/photo-1512941937669-90a1b58e7e9c?w=800&auto=format&fit=crop&q=60&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxzZWFyY2h8OHx8bW9iaWxlJTIwYXBwfGVufDB8fDB8fHww";
const BRAND_COVER: &str = "https://images.unsplash.com/photo-1599422314077-f4dfdaa4cd09?w=800&auto=format&fit=crop&q=60&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxzZWFyY2h8MTh8fGJyYW5kaW5nfGVufDB8fDB8fHww";

pub static PROJECTS: [Project; 6] = [
    Project {
        id: "interactive-dashboard",
        title: "Interactive Dashboard",
        description: "A responsive dashboard with data visualization and real-time updates.",
        image_url: DASHBOARD_COVER,
        category: "UI/UX Design",
        date: "March 2025",
        detail: Some(ProjectDetail {
            paragraphs: &[
                "This interactive dashboard project focused on creating an intuitive interface for data visualization and real-time monitoring. The goal was to design a system that presents complex information in a clear, accessible manner while maintaining visual appeal.",
                "The design process involved extensive user research to understand how different user types interact with dashboards and what information hierarchies work best for quick comprehension. I created multiple iterations of wireframes and prototypes, testing them with users to refine the experience.",
                "Key features include customizable widgets, real-time data updates, and responsive layouts that work seamlessly across devices. The final design implements thoughtful use of color coding, typography, and white space to create a dashboard that reduces cognitive load while maximizing information density.",
            ],
            client: Some("FinTech Startup"),
            tools: &["Figma", "Sketch", "Principle"],
            gallery: &[
                DASHBOARD_COVER,
                "https://images.unsplash.com/photo-1543286386-713bdd548da4?w=800&auto=format&fit=crop&q=60&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxzZWFyY2h8N3x8ZGFzaGJvYXJkfGVufDB8fDB8fHww",
                "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=800&auto=format&fit=crop&q=60&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxzZWFyY2h8MTR8fGRhc2hib2FyZHxlbnwwfHwwfHx8MA%3D%3D",
            ],
        }),
    },
    Project {
        id: "mobile-app-redesign",
        title: "Mobile App Redesign",
        description: "Reimagining a fitness app with improved user flows and accessibility.",
        image_url: FITNESS_COVER,
        category: "Mobile Design",
        date: "February 2025",
        detail: Some(ProjectDetail {
            paragraphs: &[
                "This project involved a comprehensive redesign of a fitness tracking mobile application to improve usability, engagement, and accessibility. The existing app had strong functionality but suffered from navigation issues and inconsistent visual design.",
                "I began with a thorough audit of the existing application, collecting user feedback and analyzing pain points. User interviews revealed that while users valued the core features, they found the app difficult to navigate and visually outdated.",
                "The redesign focused on creating a cohesive design system, streamlining user flows, and implementing accessibility best practices. Special attention was paid to the workout tracking screens, which were redesigned to provide clearer feedback and more intuitive controls.",
                "The final design features a modern, clean aesthetic with thoughtful color contrasts for readability, simplified navigation, and micro-interactions that provide meaningful feedback during workouts.",
            ],
            client: Some("FitTrack"),
            tools: &["Figma", "Protopie", "Adobe XD"],
            gallery: &[
                FITNESS_COVER,
                "https://images.unsplash.com/photo-1551650975-87deedd944c3?w=800&auto=format&fit=crop&q=60&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxzZWFyY2h8Nnx8bW9iaWxlJTIwYXBwfGVufDB8fDB8fHww",
                "https://images.unsplash.com/photo-1573152958734-1922c188fba3?w=800&auto=format&fit=crop&q=60&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxzZWFyY2h8MTZ8fG1vYmlsZSUyMGFwcHxlbnwwfHwwfHx8MA%3D%3D",
            ],
        }),
    },
    Project {
        id: "brand-identity",
        title: "Brand Identity System",
        description: "Creating a comprehensive visual language for a sustainable fashion brand.",
        image_url: BRAND_COVER,
        category: "Branding",
        date: "January 2025",
        detail: Some(ProjectDetail {
            paragraphs: &[
                "This project involved developing a complete brand identity system for a sustainable fashion brand committed to ethical production and environmental responsibility. The goal was to create a visual language that communicated the brand's values while appealing to their target demographic of conscious consumers.",
                "The design process began with extensive research into sustainable fashion brands, ethical consumers, and visual trends. I conducted workshops with the client to uncover their core brand attributes and differentiation points.",
                "The resulting identity system includes a versatile logo system, a nature-inspired color palette, custom typography guidelines, photography direction, and a comprehensive set of brand applications. The visual language balances modern minimalism with organic elements to reflect the brand's commitment to sustainability without sacrificing style.",
                "Implementation included print materials, packaging design, social media templates, and website design guidelines. The brand system is designed to be flexible and scalable as the company grows while maintaining consistent brand recognition.",
            ],
            client: Some("EcoThreads"),
            tools: &["Adobe Illustrator", "Photoshop", "InDesign"],
            gallery: &[
                BRAND_COVER,
                "https://images.unsplash.com/photo-1600775508114-5c30cf886c7b?w=800&auto=format&fit=crop&q=60&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxzZWFyY2h8Nnx8YnJhbmRpbmd8ZW58MHx8MHx8fDA%3D",
                "https://images.unsplash.com/photo-1636622433525-127afdf3662d?w=800&auto=format&fit=crop&q=60&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxzZWFyY2h8MjB8fGJyYW5kaW5nfGVufDB8fDB8fHww",
            ],
        }),
    },
    Project {
        id: "web-app-design",
        title: "Web Application Design",
        description: "Designing a collaborative project management tool with real-time features.",
        image_url: "https://images.unsplash.com/photo-1581291518633-83b4ebd1d83e?w=800&auto=format&fit=crop&q=60&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxzZWFyY2h8MTl8fHdlYiUyMGFwcHxlbnwwfHwwfHx8MA%3D%3D",
        category: "UI/UX Design",
        date: "December 2024",
        detail: None,
    },
    Project {
        id: "e-commerce-redesign",
        title: "E-Commerce Redesign",
        description: "Revamping an online store with improved user experience and conversion optimization.",
        image_url: "https://images.unsplash.com/photo-1563013544-824ae1b704d3?w=800&auto=format&fit=crop&q=60&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxzZWFyY2h8MTB8fGVjb21tZXJjZXxlbnwwfHwwfHx8MA%3D%3D",
        category: "E-Commerce",
        date: "November 2024",
        detail: None,
    },
    Project {
        id: "mobile-ui-kit",
        title: "Mobile UI Component Kit",
        description: "Creating a comprehensive UI kit for rapid mobile app development.",
        image_url: "https://images.unsplash.com/photo-1622542796254-5b9c46a259b8?w=800&auto=format&fit=crop&q=60&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxzZWFyY2h8MjB8fG1vYmlsZSUyMGFwcCUyMGNvbXBvbmVudHN8ZW58MHx8MHx8fDA%3D",
        category: "Mobile Design",
        date: "October 2024",
        detail: None,
    },
];

#[must_use]
pub fn all() -> &'static [Project] {
    &PROJECTS
}

#[must_use]
pub fn featured() -> &'static [Project] {
    &PROJECTS[..FEATURED_COUNT]
}

#[must_use]
pub fn find(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}
