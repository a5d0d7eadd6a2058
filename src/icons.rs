/// Every icon the site draws. Rendered as `<i class=...>` using the devicon
/// font for brand marks and the site's own `extra-*` glyphs for the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    // technologies
    React,
    NextJs,
    TypeScript,
    JavaScript,
    Tailwind,
    Html5,
    Css3,
    NodeJs,
    Express,
    Python,
    FastApi,
    Flask,
    MySql,
    MongoDb,
    SocketIo,
    Postman,
    Firebase,
    Git,
    GithubActions,
    Stripe,
    Postgresql,
    Flutter,
    Swagger,
    Aws,
    // social / contact
    Github,
    Linkedin,
    Email,
    Phone,
    Location,
    // interface
    Link,
    ExternalLink,
    Download,
    Send,
    ArrowUp,
    ChevronDown,
    Sun,
    Moon,
    Shield,
    Trophy,
    Certificate,
}

impl Icon {
    pub const fn class(self) -> &'static str {
        match self {
            Icon::React => "devicon-react-original",
            Icon::NextJs => "devicon-nextjs-plain",
            Icon::TypeScript => "devicon-typescript-plain",
            Icon::JavaScript => "devicon-javascript-plain",
            Icon::Tailwind => "devicon-tailwindcss-original",
            Icon::Html5 => "devicon-html5-plain",
            Icon::Css3 => "devicon-css3-plain",
            Icon::NodeJs => "devicon-nodejs-plain",
            Icon::Express => "devicon-express-original",
            Icon::Python => "devicon-python-plain",
            Icon::FastApi => "devicon-fastapi-plain",
            Icon::Flask => "devicon-flask-original",
            Icon::MySql => "devicon-mysql-plain",
            Icon::MongoDb => "devicon-mongodb-plain",
            Icon::SocketIo => "devicon-socketio-original",
            Icon::Postman => "devicon-postman-plain",
            Icon::Firebase => "devicon-firebase-plain",
            Icon::Git => "devicon-git-plain",
            Icon::GithubActions => "devicon-githubactions-plain",
            Icon::Stripe => "extra-card",
            Icon::Postgresql => "devicon-postgresql-plain",
            Icon::Flutter => "devicon-flutter-plain",
            Icon::Swagger => "devicon-swagger-plain",
            Icon::Aws => "devicon-amazonwebservices-plain-wordmark",
            Icon::Github => "devicon-github-plain",
            Icon::Linkedin => "devicon-linkedin-plain",
            Icon::Email => "extra-email",
            Icon::Phone => "extra-phone",
            Icon::Location => "extra-location",
            Icon::Link => "extra-link",
            Icon::ExternalLink => "extra-external",
            Icon::Download => "extra-download",
            Icon::Send => "extra-send",
            Icon::ArrowUp => "extra-arrow-up",
            Icon::ChevronDown => "extra-chevron-down",
            Icon::Sun => "extra-sun",
            Icon::Moon => "extra-moon",
            Icon::Shield => "extra-shield",
            Icon::Trophy => "extra-trophy",
            Icon::Certificate => "extra-certificate",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_classes_use_known_fonts() {
        for icon in [Icon::React, Icon::Aws, Icon::Stripe, Icon::Email, Icon::Certificate] {
            let class = icon.class();
            assert!(
                class.starts_with("devicon-") || class.starts_with("extra-"),
                "{icon:?} -> {class}"
            );
        }
    }
}
