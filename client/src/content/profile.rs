//! Author profile: About page sections, contact channels, home copy.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

pub const SITE_NAME: &str = "Design Journal";
pub const CONTACT_EMAIL: &str = "hello@designjournal.com";
pub const RESUME_URL: &str = "/Aryan_Bansal_Resume.pdf";

#[derive(Debug)]
pub struct Education {
    pub institution: &'static str,
    pub degree: &'static str,
    pub years: &'static str,
}

pub const EDUCATION: [Education; 3] = [
    Education {
        institution: "Indraprastha Institute Of Information Technology Delhi",
        degree: "B.Tech (CSD)",
        years: "2022 – Present",
    },
    Education {
        institution: "Tagore International School, Vasant Vihar",
        degree: "CBSE",
        years: "2019 - 2021",
    },
    Education {
        institution: "Lalit Mahajan SVM School, Vasant Vihar",
        degree: "CBSE",
        years: "2015 – 2019",
    },
];

pub const ELECTIVES: [&str; 9] = [
    "Advanced Programming",
    "Intro. to Programming",
    "Data Structures & Algorithms",
    "Operating Systems",
    "Computer Organization",
    "Advanced Design of Algorithms",
    "Database Management Systems",
    "AI Prompting",
    "Computer Networks",
];

#[derive(Debug)]
pub struct Responsibility {
    pub title: Option<&'static str>,
    pub description: &'static str,
}

#[derive(Debug)]
pub struct Experience {
    pub company: &'static str,
    pub position: &'static str,
    pub period: &'static str,
    pub guide: Option<&'static str>,
    pub responsibilities: &'static [Responsibility],
}

pub const EXPERIENCE: [Experience; 2] = [
    Experience {
        company: "Arxena",
        position: "Intern",
        period: "05/24 - 07/24",
        guide: Some("Guide: Arnav Saxena"),
        responsibilities: &[
            Responsibility {
                title: Some("Automated CV Upload Pipeline"),
                description: "Streamlined the process for users to submit their CVs (PDF/DOC file) through WhatsApp. Developed a backend system to automatically download CVs sent via WhatsApp and upload them to the company's website.",
            },
            Responsibility {
                title: Some("CV Embedding and Search System"),
                description: "Enhanced CV search functionality by integrating machine learning techniques. Utilized OpenAI's API to embed CV chunks into vector representations. Stored vectors in Pinecone database for efficient similarity searches. Created a query pipeline where user queries are embedded and compared against stored CV chunks using cosine similarity.",
            },
        ],
    },
    Experience {
        company: "ScaleAI",
        position: "AI Trainer",
        period: "07/24 - 2/25",
        guide: None,
        responsibilities: &[
            Responsibility {
                title: None,
                description: "Contributed to training AI models through coding and development, ensuring optimal performance and accuracy.",
            },
            Responsibility {
                title: None,
                description: "Collaborated with teams to refine algorithms and enhance machine learning workflows.",
            },
            Responsibility {
                title: None,
                description: "Applied technical expertise to improve the scalability and efficiency of AI training processes.",
            },
        ],
    },
];

/// `(position, organization)`
pub const POSITIONS: [(&str, &str); 2] =
    [("Core Member", "Tasveer"), ("Player", "Badminton Team IIITD")];

#[derive(Debug)]
pub struct SkillGroup {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILLS: [SkillGroup; 3] = [
    SkillGroup {
        title: "Expertise Areas",
        skills: &["Web Development", "Object Oriented Programming"],
    },
    SkillGroup {
        title: "Programming Languages",
        skills: &[
            "Python", "Java", "C++", "C", "TypeScript", "HTML/CSS", "JavaScript", "React", "Node.js",
            "Express.js",
        ],
    },
    SkillGroup {
        title: "Tools and Technologies",
        skills: &[
            "JavaFX", "MySQL", "PostgreSQL", "GraphQL", "MongoDB", "Docker", "Langchain", "TensorFlow",
            "Pinecone",
        ],
    },
];

pub const INTERESTS: [&str; 3] = ["Photography", "Guitar", "Badminton"];

pub const ACHIEVEMENTS: [&str; 4] = [
    "First Prize in Photography competition",
    "Inter School State Level Badminton competition (Singles): Bronze",
    "Inter School State Level Badminton competition (Doubles): Bronze",
    "All India UCEED rank 220",
];

#[derive(Debug)]
pub struct ContactChannel {
    pub title: &'static str,
    pub value: &'static str,
    pub link: &'static str,
}

pub const CONTACT_CHANNELS: [ContactChannel; 4] = [
    ContactChannel {
        title: "Email",
        value: "aryan@example.com",
        link: "mailto:aryan@example.com",
    },
    ContactChannel {
        title: "LinkedIn",
        value: "linkedin.com/in/aryanbansal",
        link: "https://linkedin.com/in/aryanbansal",
    },
    ContactChannel {
        title: "GitHub",
        value: "github.com/aryanbansal",
        link: "https://github.com/aryanbansal",
    },
    ContactChannel {
        title: "Location",
        value: "New Delhi, India",
        link: "https://maps.google.com/?q=New+Delhi+India",
    },
];

/// Home page "My Design Process" steps: `(number, title, description)`.
pub const PROCESS_STEPS: [(&str, &str, &str); 4] = [
    (
        "01",
        "Discovery & Research",
        "Understanding the problem space, user needs, and business goals through research and stakeholder interviews.",
    ),
    (
        "02",
        "Ideation & Concepts",
        "Exploring multiple directions through sketching, wireframing, and collaborative brainstorming sessions.",
    ),
    (
        "03",
        "Design & Prototyping",
        "Creating comprehensive design systems and interactive prototypes to visualize the solution.",
    ),
    (
        "04",
        "Testing & Iteration",
        "Validating designs through user testing and refining based on feedback and insights.",
    ),
];

/// Primary navigation: `(path, label)`.
pub const NAV_LINKS: [(&str, &str); 4] = [
    ("/", "Home"),
    ("/projects", "Projects"),
    ("/about", "About"),
    ("/contact", "Contact"),
];

/// Footer social links: `(label, href)`.
pub const SOCIAL_LINKS: [(&str, &str); 4] = [
    ("GitHub", "https://github.com"),
    ("LinkedIn", "https://linkedin.com"),
    ("Twitter", "https://twitter.com"),
    ("Email", "mailto:hello@designjournal.com"),
];
