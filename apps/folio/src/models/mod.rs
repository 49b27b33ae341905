pub mod resume;

pub use resume::{
    Document, Education, Experience, Highlight, Internship, Language, Profile, Publication, Role,
    Skill, WorkExperience,
};
