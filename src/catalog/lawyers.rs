use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lawyer {
    pub id: u32,
    pub name: &'static str,
    pub specialty: &'static str,
    pub rating: f64,
    pub reviews: u32,
    pub experience_years: u32,
    pub location: &'static str,
    pub availability: &'static str,
    pub bio: &'static str,
    /// Fee for a 30-minute consultation, base USD.
    pub consultation_fee_usd: f64,
    pub languages: &'static [&'static str],
}

pub const SPECIALTIES: [&str; 9] = [
    "All",
    "Business Law",
    "Family Law",
    "Real Estate",
    "Intellectual Property",
    "Employment Law",
    "Criminal Law",
    "Immigration",
    "Tax Law",
];

pub fn directory() -> &'static [Lawyer] {
    &LAWYERS
}

/// The consult-a-lawyer filter: case-insensitive substring match of `term`
/// against name or specialty, combined with an exact specialty filter.
/// `"All"` disables the specialty filter.
pub fn search(term: &str, specialty: &str) -> Vec<&'static Lawyer> {
    let term = term.to_lowercase();
    LAWYERS
        .iter()
        .filter(|lawyer| {
            let matches_term = lawyer.name.to_lowercase().contains(&term)
                || lawyer.specialty.to_lowercase().contains(&term);
            let matches_specialty = specialty == "All" || lawyer.specialty == specialty;
            matches_term && matches_specialty
        })
        .collect()
}

static LAWYERS: [Lawyer; 6] = [
    Lawyer {
        id: 1,
        name: "Jennifer Martinez, Esq.",
        specialty: "Business Law",
        rating: 4.9,
        reviews: 127,
        experience_years: 12,
        location: "New York, NY",
        availability: "Available today",
        bio: "Jennifer specializes in business law with expertise in startups, contracts, and \
              corporate governance. She has helped over 200 businesses navigate legal challenges \
              and growth opportunities.",
        consultation_fee_usd: 150.0,
        languages: &["English", "Spanish"],
    },
    Lawyer {
        id: 2,
        name: "Michael Washington, J.D.",
        specialty: "Real Estate",
        rating: 4.8,
        reviews: 93,
        experience_years: 15,
        location: "Chicago, IL",
        availability: "Next available: Tomorrow",
        bio: "Michael is a real estate attorney with extensive experience in property \
              transactions, landlord-tenant disputes, and zoning issues. He has successfully \
              closed over $500M in real estate deals.",
        consultation_fee_usd: 175.0,
        languages: &["English"],
    },
    Lawyer {
        id: 3,
        name: "Sarah Chen, Esq.",
        specialty: "Intellectual Property",
        rating: 5.0,
        reviews: 78,
        experience_years: 8,
        location: "San Francisco, CA",
        availability: "Available today",
        bio: "Sarah specializes in intellectual property law, focusing on patents, trademarks, \
              and copyright protection. She has worked with numerous tech startups and \
              established companies to protect their innovations.",
        consultation_fee_usd: 200.0,
        languages: &["English", "Mandarin"],
    },
    Lawyer {
        id: 4,
        name: "David Rodriguez, J.D.",
        specialty: "Family Law",
        rating: 4.7,
        reviews: 112,
        experience_years: 20,
        location: "Miami, FL",
        availability: "Next available: Friday",
        bio: "David has dedicated his career to family law, handling divorce, custody, and child \
              support cases with compassion and expertise. He strives to make difficult family \
              transitions as smooth as possible.",
        consultation_fee_usd: 165.0,
        languages: &["English", "Spanish"],
    },
    Lawyer {
        id: 5,
        name: "Aisha Johnson, Esq.",
        specialty: "Employment Law",
        rating: 4.9,
        reviews: 86,
        experience_years: 10,
        location: "Atlanta, GA",
        availability: "Available today",
        bio: "Aisha specializes in employment law, representing both employees and employers in \
              workplace disputes, discrimination cases, and contract negotiations. She is known \
              for her strategic approach to complex cases.",
        consultation_fee_usd: 160.0,
        languages: &["English"],
    },
    Lawyer {
        id: 6,
        name: "Robert Kim, J.D.",
        specialty: "Immigration",
        rating: 4.8,
        reviews: 104,
        experience_years: 14,
        location: "Los Angeles, CA",
        availability: "Next available: Tomorrow",
        bio: "Robert is an immigration attorney with expertise in visa applications, green \
              cards, citizenship, and deportation defense. He has successfully helped hundreds \
              of families and individuals navigate the complex immigration system.",
        consultation_fee_usd: 180.0,
        languages: &["English", "Korean", "Spanish"],
    },
];
