// Shared fixtures for the integration tests

#![allow(dead_code)]

use chapter_forms::{Application, ContactInfo, FileRef, Member};

pub fn words(n: usize) -> String {
    vec!["wellbeing"; n].join(" ")
}

pub fn valid_member(n: usize) -> Member {
    Member {
        role: "President".to_string(),
        name: format!("Member {}", n),
        email: format!("member{}@univ.edu", n),
        phone: "9876543210".to_string(),
        linkedin: format!("https://www.linkedin.com/in/member-{}", n),
        discipline: "Psychology".to_string(),
        study: "Undergraduate-Second Year".to_string(),
    }
}

pub fn valid_application() -> Application {
    Application {
        university: "Indian Institute of Technology Delhi".to_string(),
        address: "Hauz Khas".to_string(),
        state: "Delhi".to_string(),
        pincode: "110016".to_string(),
        district: "South Delhi".to_string(),
        website: "https://home.iitd.ac.in".to_string(),
        contact: ContactInfo {
            name: "Asha Rao".to_string(),
            email: "asha.rao@iitd.ac.in".to_string(),
            phone: "9123456780".to_string(),
            linkedin: "https://www.linkedin.com/in/asha-rao".to_string(),
        },
        founding_members: (1..=4).map(valid_member).collect(),
        resume: vec![FileRef::new("resume.pdf").with_size(48_213)],
        proof: vec![FileRef::new("student-id.png").with_media_type("image/png")],
        chapter_plan: words(200),
        declaration: true,
        consent: true,
    }
}
