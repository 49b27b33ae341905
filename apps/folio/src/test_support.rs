//! Document builders shared by unit tests.

use crate::models::*;

pub fn empty_document() -> Document {
    Document {
        profile: Profile {
            name: "Ada Example".into(),
            title: "Software Engineer".into(),
            summary: "Builds things.".into(),
            email: "ada@example.com".into(),
            linkedin: "https://linkedin.com/in/ada".into(),
            github: "https://github.com/ada".into(),
        },
        education: vec![],
        work_experience: vec![],
        internships: vec![],
        publications: vec![],
        languages: None,
        available_labels: vec![],
    }
}

pub fn labels(ls: &[&str]) -> Vec<String> {
    ls.iter().map(|s| s.to_string()).collect()
}

pub fn highlight(text: &str, ls: &[&str]) -> Highlight {
    Highlight {
        text: text.into(),
        labels: labels(ls),
    }
}

pub fn skill(name: &str, label: &str) -> Skill {
    Skill {
        name: name.into(),
        label: label.into(),
    }
}

pub fn role(
    id: &str,
    from_date: Option<&str>,
    highlights: Vec<Highlight>,
    skills: Vec<Skill>,
) -> Role {
    Role {
        id: id.into(),
        position: format!("Position {id}"),
        from_date: from_date.map(Into::into),
        to_date: None,
        description: Some(format!("Description {id}")),
        highlights,
        skills,
    }
}

pub fn work(id: &str, roles: Vec<Role>) -> WorkExperience {
    WorkExperience {
        id: id.into(),
        company: format!("Company {id}"),
        location: "Berlin".into(),
        from_date: "2019-01".into(),
        to_date: None,
        current: true,
        roles,
    }
}

pub fn internship(id: &str, roles: Vec<Role>) -> Internship {
    Internship {
        id: id.into(),
        company: format!("Lab {id}"),
        location: "Zurich".into(),
        from_date: "2017-06".into(),
        to_date: Some("2017-09".into()),
        roles,
    }
}

pub fn education(id: &str, ls: &[&str]) -> Education {
    Education {
        id: id.into(),
        institution: format!("University {id}"),
        location: "Munich".into(),
        degree: "MSc".into(),
        field: "Computer Science".into(),
        from_date: "2015-10".into(),
        to_date: "2017-09".into(),
        description: None,
        coursework: None,
        learnings: None,
        labels: labels(ls),
    }
}

pub fn publication(id: &str, ls: &[&str]) -> Publication {
    Publication {
        id: id.into(),
        title: format!("Paper {id}"),
        authors: vec!["Ada Example".into()],
        venue: "SomeConf".into(),
        date: "2021-05".into(),
        kind: "conference".into(),
        link: None,
        description: None,
        labels: labels(ls),
    }
}

/// A document touching every collection with overlapping labels.
pub fn sample_document() -> Document {
    let mut doc = empty_document();
    doc.available_labels = labels(&["backend", "frontend", "ml", "infra", "leadership"]);
    doc.education = vec![
        education("e1", &["ml"]),
        education("e2", &[]),
        education("e3", &["backend", "leadership"]),
    ];
    doc.work_experience = vec![
        work(
            "w1",
            vec![
                role(
                    "r1",
                    Some("2021-06"),
                    vec![
                        highlight("Designed ingestion service", &["backend"]),
                        highlight("Mentored two engineers", &["leadership"]),
                    ],
                    vec![skill("Go", "backend"), skill("Terraform", "infra")],
                ),
                role(
                    "r2",
                    Some("2019-01"),
                    vec![highlight("Rebuilt dashboard", &["frontend"])],
                    vec![skill("Go", "backend"), skill("React", "frontend")],
                ),
            ],
        ),
        work(
            "w2",
            vec![role(
                "r3",
                Some("2018-02"),
                vec![highlight("Untagged chore", &[])],
                vec![skill("Kubernetes", "infra")],
            )],
        ),
    ];
    doc.internships = vec![internship(
        "i1",
        vec![role(
            "r4",
            Some("2017-06"),
            vec![highlight("Trained ranking model", &["ml"])],
            vec![skill("PyTorch", "ml")],
        )],
    )];
    doc.publications = vec![
        publication("p1", &["ml"]),
        publication("p2", &["backend", "infra"]),
    ];
    doc
}
