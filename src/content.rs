//! Static content rendered by the portfolio sections.

use crate::icons::Icon;

#[derive(Debug, Clone, Copy)]
pub struct PersonalInfo {
    pub name: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub linkedin: &'static str,
    pub github: &'static str,
    pub tagline: &'static str,
    pub resume_url: &'static str,
    pub profile_image: &'static str,
}

impl PersonalInfo {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// WhatsApp chat link; wa.me only accepts the bare digits of the number.
    pub fn whatsapp_href(&self) -> String {
        let digits: String = self.phone.chars().filter(char::is_ascii_digit).collect();
        format!("https://wa.me/{digits}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    /// Section id without the leading `#`.
    pub section: &'static str,
}

impl NavLink {
    pub fn href(&self) -> String {
        format!("#{}", self.section)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub label: &'static str,
    pub icon: Icon,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    pub icon: Icon,
    /// 0 to 100
    pub proficiency: u8,
}

#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub title: &'static str,
    pub description: &'static str,
    pub skills: &'static [Skill],
}

#[derive(Debug, Clone, Copy)]
pub struct Experience {
    pub id: &'static str,
    pub position: &'static str,
    pub organization: &'static str,
    pub date: &'static str,
    pub location: &'static str,
    pub achievements: &'static [&'static str],
    pub technologies: &'static [&'static str],
    pub logo: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Live,
    Completed,
    InProgress,
    HackathonWinner,
}

impl ProjectStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ProjectStatus::Live => "Live",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::HackathonWinner => "Hackathon Winner",
        }
    }

    pub const fn badge_class(self) -> &'static str {
        match self {
            ProjectStatus::Live => "bg-green/20 text-green border-green/30",
            ProjectStatus::Completed => "bg-blue/20 text-blue border-blue/30",
            ProjectStatus::InProgress => "bg-yellow/20 text-yellow border-yellow/30",
            ProjectStatus::HackathonWinner => "bg-purple/20 text-purple border-purple/30",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub date: &'static str,
    pub status: ProjectStatus,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub tech_stack: &'static [&'static str],
    pub live_url: Option<&'static str>,
    pub code_url: Option<&'static str>,
    pub image: &'static str,
}

pub const VISIBLE_TECH_TAGS: usize = 5;

impl Project {
    /// Tags shown on the card and how many were left out.
    pub fn visible_tech(&self) -> (&'static [&'static str], usize) {
        let shown = self.tech_stack.len().min(VISIBLE_TECH_TAGS);
        (&self.tech_stack[..shown], self.tech_stack.len() - shown)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CertificationBadge {
    Aws,
    Security,
    Trophy,
    Certificate,
}

impl CertificationBadge {
    pub const fn icon(self) -> Icon {
        match self {
            CertificationBadge::Aws => Icon::Aws,
            CertificationBadge::Security => Icon::Shield,
            CertificationBadge::Trophy => Icon::Trophy,
            CertificationBadge::Certificate => Icon::Certificate,
        }
    }

    pub const fn gradient(self) -> &'static str {
        match self {
            CertificationBadge::Aws => "from-orange-500 to-yellow-500",
            CertificationBadge::Security => "from-green-500 to-teal-500",
            CertificationBadge::Trophy => "from-yellow-500 to-amber-500",
            CertificationBadge::Certificate => "from-blue-500 to-indigo-500",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Certification {
    pub id: &'static str,
    pub title: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
    pub badge: CertificationBadge,
    pub credential_url: Option<&'static str>,
}

pub const PERSONAL_INFO: PersonalInfo = PersonalInfo {
    name: "Ishan KC",
    title: "Full-Stack Developer",
    subtitle: "Computer Science Student at Kathmandu University",
    email: "ishankc777@gmail.com",
    phone: "+977-9860039457",
    location: "Banepa, Nepal",
    linkedin: "https://www.linkedin.com/in/ishan-kc-bb3380285/",
    github: "https://github.com/ishannkc",
    tagline: "Building scalable web applications and AI-powered solutions",
    resume_url: "/resume.pdf",
    profile_image: "/images/profile.jpg",
};

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { name: "Home", section: "home" },
    NavLink { name: "About", section: "about" },
    NavLink { name: "Skills", section: "skills" },
    NavLink { name: "Experience", section: "experience" },
    NavLink { name: "Projects", section: "projects" },
    NavLink { name: "Certifications", section: "certifications" },
    NavLink { name: "Contact", section: "contact" },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "LinkedIn",
        icon: Icon::Linkedin,
        href: PERSONAL_INFO.linkedin,
    },
    SocialLink {
        label: "GitHub",
        icon: Icon::Github,
        href: PERSONAL_INFO.github,
    },
];

/// Category shown for the selected skills tab, falling back to the first.
pub fn skill_category(index: usize) -> Option<&'static SkillCategory> {
    SKILL_CATEGORIES.get(index).or(SKILL_CATEGORIES.first())
}

/// Every skill across all categories, in category order.
pub fn all_skills() -> impl Iterator<Item = &'static Skill> {
    SKILL_CATEGORIES.iter().flat_map(|category| category.skills.iter())
}

pub const HERO_PHRASES: &[&str] = &["Full-Stack Developer"];

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "Hey there! I'm Ishan, a 3rd-year Computer Science student at Kathmandu University, set to graduate in November 2027. What started as curiosity about how websites work has evolved into a genuine passion for building things that make a difference.",
    "I specialize in the MERN stack and modern web technologies, but what really excites me is the intersection of AI and web development. From building Intervia, an AI-powered interview platform with voice interactions, to engineering a biometric authentication system at KU HackFest 2025, I love tackling challenges that push the boundaries of what's possible.",
    "I believe in learning by doing. Every project teaches me something new, every bug makes me a better debugger, and every deployment brings its own set of lessons. If you're looking for someone who's passionate about code and ready to contribute, let's connect!",
];

pub const ABOUT_STATS: &[(&str, &str)] = &[
    ("3+", "Projects Completed"),
    ("1", "Hackathon Participation"),
    ("10+", "Technologies Learned"),
    ("2027", "Graduation Year"),
];

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Frontend Development",
        description: "Building beautiful, responsive user interfaces",
        skills: &[
            Skill { name: "React.js", icon: Icon::React, proficiency: 90 },
            Skill { name: "Next.js", icon: Icon::NextJs, proficiency: 85 },
            Skill { name: "React Native", icon: Icon::React, proficiency: 75 },
            Skill { name: "TypeScript", icon: Icon::TypeScript, proficiency: 85 },
            Skill { name: "JavaScript", icon: Icon::JavaScript, proficiency: 90 },
            Skill { name: "Tailwind CSS", icon: Icon::Tailwind, proficiency: 90 },
            Skill { name: "HTML5", icon: Icon::Html5, proficiency: 95 },
            Skill { name: "CSS3", icon: Icon::Css3, proficiency: 90 },
        ],
    },
    SkillCategory {
        title: "Backend Development",
        description: "Creating robust, scalable server-side solutions",
        skills: &[
            Skill { name: "Node.js", icon: Icon::NodeJs, proficiency: 88 },
            Skill { name: "Express.js", icon: Icon::Express, proficiency: 85 },
            Skill { name: "Python", icon: Icon::Python, proficiency: 80 },
            Skill { name: "FastAPI", icon: Icon::FastApi, proficiency: 75 },
            Skill { name: "Flask", icon: Icon::Flask, proficiency: 70 },
            Skill { name: "MySQL", icon: Icon::MySql, proficiency: 80 },
            Skill { name: "MongoDB", icon: Icon::MongoDb, proficiency: 85 },
            Skill { name: "WebSocket", icon: Icon::SocketIo, proficiency: 75 },
            Skill { name: "REST APIs", icon: Icon::Postman, proficiency: 90 },
        ],
    },
    SkillCategory {
        title: "Cloud & DevOps",
        description: "Deploying and managing cloud infrastructure",
        skills: &[
            Skill { name: "Firebase", icon: Icon::Firebase, proficiency: 85 },
            Skill { name: "Git", icon: Icon::Git, proficiency: 90 },
            Skill { name: "GitHub Actions", icon: Icon::GithubActions, proficiency: 70 },
        ],
    },
    SkillCategory {
        title: "Additional Skills",
        description: "Other expertise and specializations",
        skills: &[
            Skill { name: "Payment Integration", icon: Icon::Stripe, proficiency: 75 },
            Skill { name: "Database Design", icon: Icon::Postgresql, proficiency: 80 },
            Skill { name: "Cross-Platform Dev", icon: Icon::Flutter, proficiency: 70 },
            Skill { name: "RESTful API Design", icon: Icon::Swagger, proficiency: 85 },
            Skill { name: "Real-time Systems", icon: Icon::SocketIo, proficiency: 80 },
        ],
    },
];

pub const EXPERIENCES: &[Experience] = &[Experience {
    id: "exp-1",
    position: "Full-Stack Developer – PPG Auth (Biometric Authentication System)",
    organization: "KU HackFest 2025, Kathmandu University",
    date: "December 2025",
    location: "Kathmandu, Nepal",
    achievements: &[
        "Engineered secure biometric authentication system with FastAPI backend and optimized RESTful API endpoints reducing authentication time by 40%",
        "Implemented real-time user verification using WebSocket communication between Python backend and React Native mobile application",
        "Designed scalable API architecture supporting 1000+ concurrent users with ML integration for biometric data processing",
        "Built cross-platform mobile application using React Native and TypeScript for seamless iOS and Android experience",
    ],
    technologies: &[
        "FastAPI",
        "React Native",
        "WebSocket",
        "TypeScript",
        "Python",
        "Machine Learning",
        "Real-time Systems",
    ],
    logo: Some("/images/ku-logo.png"),
}];

pub const PROJECTS: &[Project] = &[
    Project {
        id: "proj-1",
        title: "Intervia – AI Interview Platform",
        date: "August 2025",
        status: ProjectStatus::Live,
        description: "AI-powered interview platform revolutionizing interview preparation with intelligent voice interactions and comprehensive performance analytics.",
        features: &[
            "Developed AI-powered interview platform with Next.js integrating Google Gemini API and Vapi.ai RESTful APIs for voice interaction features",
            "Built comprehensive analytics dashboard using React.js and Tailwind CSS tracking 15+ performance metrics across user sessions",
            "Engineered secure user authentication and real-time data storage using Firebase with role-based access control",
            "Implemented advanced prompt engineering delivering personalized feedback with 95% accuracy",
        ],
        tech_stack: &[
            "MERN Stack",
            "Next.js",
            "TypeScript",
            "Firebase",
            "Google Gemini API",
            "Vapi.ai",
            "REST APIs",
            "Tailwind CSS",
            "React.js",
        ],
        live_url: Some("https://intervia-xi.vercel.app/"),
        code_url: Some("https://github.com/ishannkc/Intervia"),
        image: "/images/intervia-pp.png",
    },
    Project {
        id: "proj-2",
        title: "Classroom Resource Tracker",
        date: "July 2025",
        status: ProjectStatus::Completed,
        description: "Full-stack resource management system streamlining classroom and resource booking for educational institutions with real-time conflict prevention.",
        features: &[
            "Built full-stack resource management system processing 200+ weekly bookings with MySQL relational database and real-time conflict prevention",
            "Developed RESTful API with Node.js and Express.js handling CRUD operations with role-based access control for 3 user tiers",
            "Created responsive booking interface with instant availability updates and optimized database queries through efficient indexing",
            "Designed normalized table schema and implemented efficient SQL queries reducing response time by 35%",
        ],
        tech_stack: &["Node.js", "Express.js", "MySQL", "JavaScript", "HTML", "CSS", "REST APIs"],
        live_url: Some("https://classrestrack.netlify.app/"),
        code_url: Some("https://github.com/ishannkc/Classroom-Resource-Tracker"),
        image: "/images/csr-pp.png",
    },
    Project {
        id: "proj-3",
        title: "PPG Auth – Biometric Authentication System",
        date: "December 2025",
        status: ProjectStatus::Completed,
        description: "Secure biometric authentication system built during KU HackFest 2025 with real-time user verification and ML-powered data processing.",
        features: &[
            "Engineered secure biometric authentication with FastAPI reducing authentication time by 40%",
            "Implemented real-time WebSocket communication for instant user verification",
            "Designed scalable API architecture supporting 1000+ concurrent users",
            "Built cross-platform mobile app with React Native for iOS and Android",
        ],
        tech_stack: &[
            "FastAPI",
            "React Native",
            "Python",
            "WebSocket",
            "TypeScript",
            "Machine Learning",
        ],
        live_url: None,
        code_url: Some("https://github.com/ishannkc/PPGAuth"),
        image: "/images/ppg-auth-pp.png",
    },
];

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        id: "cert-1",
        title: "AWS Solutions Architecture Job Simulation",
        issuer: "Amazon Web Services",
        date: "2024",
        badge: CertificationBadge::Aws,
        credential_url: None,
    },
    Certification {
        id: "cert-2",
        title: "Deloitte Australia Cyber Job Simulation",
        issuer: "Deloitte",
        date: "2024",
        badge: CertificationBadge::Security,
        credential_url: None,
    },
    Certification {
        id: "cert-3",
        title: "KU HackFest 2025 Participant",
        issuer: "Kathmandu University",
        date: "December 2025",
        badge: CertificationBadge::Certificate,
        credential_url: None,
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_nav_links_cover_every_section_once() {
        let sections: HashSet<_> = NAV_LINKS.iter().map(|l| l.section).collect();
        assert_eq!(sections.len(), NAV_LINKS.len());
        for section in ["home", "about", "skills", "experience", "projects", "certifications", "contact"] {
            assert!(sections.contains(section), "missing {section}");
        }
        assert_eq!(NAV_LINKS[0].href(), "#home");
    }

    #[test]
    fn test_proficiency_in_range() {
        for category in SKILL_CATEGORIES {
            assert!(!category.skills.is_empty());
            for skill in category.skills {
                assert!(skill.proficiency <= 100, "{} out of range", skill.name);
            }
        }
    }

    #[test]
    fn test_visible_tech_overflow() {
        let (shown, hidden) = PROJECTS[0].visible_tech();
        assert_eq!(shown.len(), VISIBLE_TECH_TAGS);
        assert_eq!(hidden, PROJECTS[0].tech_stack.len() - VISIBLE_TECH_TAGS);

        let short = Project {
            tech_stack: &["Rust"],
            ..PROJECTS[0]
        };
        assert_eq!(short.visible_tech(), (&["Rust"][..], 0));
    }

    #[test]
    fn test_ids_unique() {
        let ids: HashSet<_> = PROJECTS.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), PROJECTS.len());
        let ids: HashSet<_> = CERTIFICATIONS.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), CERTIFICATIONS.len());
    }

    #[test]
    fn test_mailto() {
        assert_eq!(PERSONAL_INFO.mailto(), "mailto:ishankc777@gmail.com");
        assert!(!HERO_PHRASES.is_empty());
    }

    #[test]
    fn test_whatsapp_href_keeps_digits_only() {
        assert_eq!(PERSONAL_INFO.whatsapp_href(), "https://wa.me/9779860039457");

        let spaced = PersonalInfo {
            phone: "+1 (555) 010-2030",
            ..PERSONAL_INFO
        };
        assert_eq!(spaced.whatsapp_href(), "https://wa.me/15550102030");
    }

    #[test]
    fn test_skill_category_selection() {
        assert_eq!(skill_category(1).map(|c| c.title), Some("Backend Development"));
        assert_eq!(
            skill_category(SKILL_CATEGORIES.len()).map(|c| c.title),
            Some("Frontend Development")
        );
    }

    #[test]
    fn test_all_skills_spans_categories() {
        let total: usize = SKILL_CATEGORIES.iter().map(|c| c.skills.len()).sum();
        assert_eq!(all_skills().count(), total);
        assert_eq!(all_skills().next().map(|s| s.name), Some("React.js"));
    }
}
