//! Personalities loaded into the catalog at process start.

use crate::models::personality::Personality;

struct SeedPersona {
    id: &'static str,
    name: &'static str,
    age: u32,
    gender: &'static str,
    location: &'static str,
    occupation: &'static str,
    job_title: Option<&'static str>,
    industry: &'static str,
    traits: &'static [&'static str],
    summary: &'static str,
}

impl SeedPersona {
    fn to_personality(&self) -> Personality {
        Personality {
            id: self.id.to_string(),
            name: self.name.to_string(),
            age: Some(self.age),
            gender: Some(self.gender.to_string()),
            location: Some(self.location.to_string()),
            occupation: Some(self.occupation.to_string()),
            job_title: self.job_title.map(str::to_string),
            industry: Some(self.industry.to_string()),
            personality_traits: self.traits.iter().map(|t| t.to_string()).collect(),
            summary: Some(self.summary.to_string()),
        }
    }
}

const SEED_PERSONAS: &[SeedPersona] = &[
    SeedPersona {
        id: "p1",
        name: "Emma Johnson",
        age: 32,
        gender: "Female",
        location: "New York, NY",
        occupation: "Marketing Specialist",
        job_title: Some("Digital Marketing Manager"),
        industry: "Technology",
        traits: &["Professional", "Creative", "Analytical"],
        summary: "Digital marketing specialist who values authenticity and innovation in advertising.",
    },
    SeedPersona {
        id: "p2",
        name: "Alex Chen",
        age: 28,
        gender: "Male",
        location: "San Francisco, CA",
        occupation: "UX Designer",
        job_title: Some("Senior UX Designer"),
        industry: "Software",
        traits: &["Creative", "Detail-oriented", "User-focused"],
        summary: "User experience designer focused on accessibility and intuitive interfaces.",
    },
    SeedPersona {
        id: "p3",
        name: "Sarah Williams",
        age: 45,
        gender: "Female",
        location: "Chicago, IL",
        occupation: "Senior Manager",
        job_title: Some("Finance Director"),
        industry: "Finance",
        traits: &["Professional", "Serious", "Detail-oriented"],
        summary: "Conservative decision-maker who appreciates data-driven marketing approaches.",
    },
    SeedPersona {
        id: "p4",
        name: "Michael Rodriguez",
        age: 39,
        gender: "Male",
        location: "Austin, TX",
        occupation: "Small Business Owner",
        job_title: Some("CEO"),
        industry: "Retail",
        traits: &["Practical", "Enthusiastic", "Value-conscious"],
        summary: "Practical entrepreneur looking for cost-effective marketing solutions with proven ROI.",
    },
    SeedPersona {
        id: "p5",
        name: "Jamal Foster",
        age: 24,
        gender: "Male",
        location: "Portland, OR",
        occupation: "Content Creator",
        job_title: Some("Social Media Influencer"),
        industry: "Entertainment",
        traits: &["Creative", "Humorous", "Trendsetting"],
        summary: "Trendsetting content creator who values authenticity and social impact in brand messaging.",
    },
    SeedPersona {
        id: "p6",
        name: "Lisa Patel",
        age: 36,
        gender: "Female",
        location: "Seattle, WA",
        occupation: "IT Professional",
        job_title: Some("Systems Architect"),
        industry: "Technology",
        traits: &["Technical", "Analytical", "Practical"],
        summary: "Tech-savvy professional who appreciates straightforward, fact-based advertising.",
    },
    SeedPersona {
        id: "p7",
        name: "David Kim",
        age: 41,
        gender: "Male",
        location: "Boston, MA",
        occupation: "Professor",
        job_title: Some("Associate Professor of Marketing"),
        industry: "Education",
        traits: &["Analytical", "Formal", "Detail-oriented"],
        summary: "Academic with a critical eye for marketing claims and evidence-based messaging.",
    },
    SeedPersona {
        id: "p8",
        name: "Maria Gonzalez",
        age: 29,
        gender: "Female",
        location: "Miami, FL",
        occupation: "Healthcare Worker",
        job_title: Some("Registered Nurse"),
        industry: "Healthcare",
        traits: &["Compassionate", "Practical", "Serious"],
        summary: "Healthcare professional who responds to emotional appeals and social impact messaging.",
    },
    SeedPersona {
        id: "p9",
        name: "Robert Johnson",
        age: 52,
        gender: "Male",
        location: "Denver, CO",
        occupation: "Construction Manager",
        job_title: Some("Site Supervisor"),
        industry: "Construction",
        traits: &["Practical", "Direct", "Traditional"],
        summary: "No-nonsense professional who values straightforward, practical advertising.",
    },
    SeedPersona {
        id: "p10",
        name: "Jennifer Wu",
        age: 33,
        gender: "Female",
        location: "Los Angeles, CA",
        occupation: "Art Director",
        job_title: Some("Creative Director"),
        industry: "Advertising",
        traits: &["Creative", "Enthusiastic", "Trendsetting"],
        summary: "Visual creative who appreciates innovative design and bold brand statements.",
    },
    SeedPersona {
        id: "p11",
        name: "Rebecca Wong",
        age: 38,
        gender: "Female",
        location: "Boston, MA",
        occupation: "School Teacher",
        job_title: None,
        industry: "Education",
        traits: &["Casual", "Thoughtful", "Community-oriented"],
        summary: "Practical consumer who values educational content and family-friendly messaging.",
    },
    SeedPersona {
        id: "p12",
        name: "Alex Martinez",
        age: 22,
        gender: "Male",
        location: "Austin, TX",
        occupation: "College Student",
        job_title: None,
        industry: "Education",
        traits: &["Casual", "Enthusiastic", "Value-oriented"],
        summary: "Budget-conscious student passionate about social causes.",
    },
];

pub fn seed_personalities() -> Vec<Personality> {
    SEED_PERSONAS.iter().map(SeedPersona::to_personality).collect()
}
