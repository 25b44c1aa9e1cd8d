//! Hand-authored site content. Every page renders straight from these slices,
//! one element per entry and in the order written here.

use crate::Route;

pub struct HeroSlide {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub image: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub stats: &'static str,
    pub image: &'static str,
}

pub struct Testimonial {
    pub name: &'static str,
    pub designation: &'static str,
    pub zone: &'static str,
    pub message: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct Stat {
    pub number: u64,
    pub suffix: &'static str,
    pub label: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct JobOpening {
    pub id: u32,
    pub title: &'static str,
    pub department: &'static str,
    pub location: &'static str,
    pub kind: &'static str,
    pub experience: &'static str,
    pub description: &'static str,
    pub requirements: &'static [&'static str],
    pub responsibilities: &'static [&'static str],
    pub benefits: &'static [&'static str],
}

pub struct Benefit {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct Leader {
    pub id: u32,
    pub name: &'static str,
    pub designation: &'static str,
    pub education: &'static str,
    pub experience: &'static str,
    pub expertise: &'static [&'static str],
    pub bio: &'static str,
    pub achievements: &'static [&'static str],
    pub email: &'static str,
}

impl Leader {
    /// Badges shown on the card face: the first two skills, then a "+N more" counter.
    pub fn expertise_badges(&self) -> (&'static [&'static str], Option<usize>) {
        let shown = self.expertise.len().min(2);
        let hidden = self.expertise.len() - shown;
        (&self.expertise[..shown], (hidden > 0).then_some(hidden))
    }
}

pub struct Advisor {
    pub name: &'static str,
    pub position: &'static str,
    pub speciality: &'static str,
    pub experience: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectCategory {
    All,
    Welding,
    Sleepers,
    Testing,
    Safety,
    Reconditioning,
}

impl ProjectCategory {
    pub const FILTERS: [ProjectCategory; 6] = [
        ProjectCategory::All,
        ProjectCategory::Welding,
        ProjectCategory::Sleepers,
        ProjectCategory::Testing,
        ProjectCategory::Safety,
        ProjectCategory::Reconditioning,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProjectCategory::All => "All Projects",
            ProjectCategory::Welding => "Welding",
            ProjectCategory::Sleepers => "Sleepers",
            ProjectCategory::Testing => "Testing",
            ProjectCategory::Safety => "Safety Systems",
            ProjectCategory::Reconditioning => "Reconditioning",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectStatus {
    Ongoing,
    Completed,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Ongoing => "Ongoing",
            ProjectStatus::Completed => "Completed",
        }
    }
}

pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: ProjectCategory,
    pub year: &'static str,
    pub status: ProjectStatus,
    pub location: &'static str,
    pub client: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub stats: &'static [(&'static str, &'static str)],
    pub highlights: &'static [&'static str],
}

/// Projects visible under `category`, in catalog order.
pub fn filter_projects(category: ProjectCategory) -> Vec<&'static Project> {
    PROJECTS
        .iter()
        .filter(|p| category == ProjectCategory::All || p.category == category)
        .collect()
}

pub struct SisterConcern {
    pub name: &'static str,
    pub description: &'static str,
    pub services: &'static [&'static str],
    pub achievements: &'static [(&'static str, &'static str)],
}

pub struct ContactInfo {
    pub icon: &'static str,
    pub title: &'static str,
    pub details: &'static [&'static str],
}

pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub struct NavItem {
    pub label: &'static str,
    pub route: Route,
}

pub struct FooterLink {
    pub label: &'static str,
    pub route: Route,
}

pub const COMPANY_NAME: &str = "Khemchand Group";
pub const CAREERS_EMAIL: &str = "careers@khemchandgroup.com";
pub const INFO_EMAIL: &str = "info@khemchandgroup.com";

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "HOME", route: Route::Home },
    NavItem { label: "ABOUT US", route: Route::About },
    NavItem { label: "SERVICES", route: Route::Services },
    NavItem { label: "PROJECTS", route: Route::Projects },
    NavItem { label: "LEADERSHIP", route: Route::Leadership },
    NavItem { label: "CAREERS", route: Route::Careers },
    NavItem { label: "CONTACT US", route: Route::Contact },
];

pub const HERO_SLIDES: &[HeroSlide] = &[
    HeroSlide {
        title: "Building the Future of Indian Railways",
        subtitle: "30+ Years of Engineering Excellence",
        image: "/assets/train-hero-1.jpg",
    },
    HeroSlide {
        title: "Manufacturing & Supply of MBC Sleepers",
        subtitle: "Quality Standards That Define Excellence",
        image: "/assets/train-hero-2.jpg",
    },
    HeroSlide {
        title: "Flash Butt Welding & USFD Testing",
        subtitle: "Precision Engineering for Rail Infrastructure",
        image: "/assets/train-hero-3.jpg",
    },
];

/// Milestones on the diagonal home-page timeline.
pub const JOURNEY: &[Milestone] = &[
    Milestone { year: "1983", title: "Company Founded", description: "" },
    Milestone { year: "1986", title: "First Major Contract", description: "" },
    Milestone { year: "2000", title: "Leadership Expansion", description: "Mr. Sandeep Sukhwani" },
    Milestone { year: "2004", title: "Flash Butt Welding", description: "" },
    Milestone { year: "2009", title: "USFD Testing", description: "" },
    Milestone { year: "2015", title: "Lubrication Systems", description: "" },
    Milestone { year: "2024", title: "New Horizons", description: "30+ years of excellence" },
];

pub const JOURNEY_BREAKPOINTS: &[f64] = &[0.0, 0.16, 0.33, 0.48, 0.63, 0.80, 1.0];

/// Milestones on the about page.
pub const MILESTONES: &[Milestone] = &[
    Milestone {
        year: "1990",
        title: "Company Founded",
        description: "Mr. S. Kumar (IIT Kanpur, 1975) established Khemchand Group",
    },
    Milestone {
        year: "1995",
        title: "First Major Contract",
        description: "Secured first railway sleeper manufacturing contract",
    },
    Milestone {
        year: "2000",
        title: "Flash Butt Welding",
        description: "Introduced advanced welding technology",
    },
    Milestone {
        year: "2010",
        title: "USFD Testing",
        description: "Started Ultrasonic Flaw Detection services",
    },
    Milestone {
        year: "2015",
        title: "Leadership Expansion",
        description: "Mr. Sandeep Sukhwani, MBA UK joined as director",
    },
    Milestone {
        year: "2024",
        title: "New Horizons",
        description: "30+ years of excellence in Indian Railways",
    },
];

pub const HOME_STATS: &[Stat] = &[
    Stat { number: 200_000, suffix: "+", label: "Flash Butt Joints" },
    Stat { number: 40_000, suffix: "+", label: "Tkm USFD Testing" },
    Stat { number: 500, suffix: "+", label: "Projects Completed" },
    Stat { number: 15, suffix: "+", label: "Railway Zones" },
];

pub const ABOUT_STATS: &[Stat] = &[
    Stat { number: 200_000, suffix: "+", label: "Flash Butt Joints" },
    Stat { number: 40_000, suffix: "+", label: "Tkm USFD Testing" },
    Stat { number: 30, suffix: "+", label: "Years Experience" },
    Stat { number: 500, suffix: "+", label: "Projects Completed" },
];

pub const PROJECT_STATS: &[Stat] = &[
    Stat { number: 200_000, suffix: "+", label: "Flash Butt Joints" },
    Stat { number: 40_000, suffix: "+", label: "USFD Testing (Tkm)" },
    Stat { number: 500, suffix: "+", label: "Projects Completed" },
    Stat { number: 30, suffix: "+", label: "Years of Excellence" },
];

pub const SERVICES: &[Service] = &[
    Service {
        icon: "icon-settings",
        title: "Concrete Sleepers",
        subtitle: "MBC Sleeper Manufacturing",
        description: "High-quality prestressed concrete sleepers manufactured to Indian Railway specifications.",
        features: &["IS:13230 Compliant", "Pre-stressed Technology", "Quality Tested", "Long-lasting Durability"],
        stats: "50,000+ Units Manufactured",
        image: "/assets/service-sleepers.jpg",
    },
    Service {
        icon: "icon-zap",
        title: "Flash Butt Welding",
        subtitle: "Rail Welding Excellence",
        description: "Advanced flash butt welding services for seamless rail connections and enhanced track performance.",
        features: &["Automated Process", "High Precision", "Quality Assured", "Minimal Heat Affected Zone"],
        stats: "2,00,000+ Joints Completed",
        image: "/assets/service-welding.jpg",
    },
    Service {
        icon: "icon-search",
        title: "USFD Testing",
        subtitle: "Ultrasonic Flaw Detection",
        description: "Comprehensive testing of rails and welds using state-of-the-art ultrasonic technology.",
        features: &["Non-destructive Testing", "Real-time Analysis", "Certified Operators", "Detailed Reports"],
        stats: "40,000+ Tkm Tested",
        image: "/assets/service-testing.jpg",
    },
    Service {
        icon: "icon-refresh",
        title: "CMS Crossing Reconditioning",
        subtitle: "Track Infrastructure Renewal",
        description: "Expert reconditioning services for CMS crossings to extend operational life and improve performance.",
        features: &["Complete Overhaul", "Modern Techniques", "Cost Effective", "Extended Life Cycle"],
        stats: "500+ Crossings Reconditioned",
        image: "/assets/service-crossing.jpg",
    },
    Service {
        icon: "icon-alert",
        title: "Broken Rail Detection (BRD)",
        subtitle: "Safety & Monitoring Systems",
        description: "Advanced broken rail detection systems for enhanced railway safety and operational efficiency.",
        features: &["Real-time Monitoring", "Instant Alerts", "Remote Access", "Fail-safe Design"],
        stats: "1000+ Km Coverage",
        image: "/assets/service-detection.jpg",
    },
    Service {
        icon: "icon-droplets",
        title: "Lubrication Systems",
        subtitle: "Track Maintenance Solutions",
        description: "Automated lubrication systems for rail curves to reduce wear and maintenance costs.",
        features: &["Automated Operation", "Weather Resistant", "Precise Application", "Remote Monitoring"],
        stats: "200+ Systems Installed",
        image: "/assets/service-lubrication.jpg",
    },
    Service {
        icon: "icon-train",
        title: "New Horizons for Indian Railways",
        subtitle: "Innovation & Development",
        description: "Pioneering new technologies and solutions for the future of Indian Railway infrastructure.",
        features: &["R&D Focus", "Innovation Hub", "Future Technologies", "Sustainable Solutions"],
        stats: "10+ New Projects",
        image: "/assets/railway-hero-bg.jpg",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Rajesh Kumar",
        designation: "Chief Engineer, Central Railway",
        zone: "Central Railway",
        message: "Khemchand Group has consistently delivered high-quality MBC sleepers for our projects. Their commitment to excellence and timely delivery makes them our preferred partner.",
    },
    Testimonial {
        name: "Amit Sharma",
        designation: "Senior Manager, Northern Railway",
        zone: "Northern Railway",
        message: "The flash butt welding services provided by Khemchand are world-class. Their technical expertise and quality standards have significantly improved our rail infrastructure.",
    },
    Testimonial {
        name: "Priya Desai",
        designation: "Project Director, Western Railway",
        zone: "Western Railway",
        message: "USFD testing services from Khemchand Group have been instrumental in ensuring the safety and reliability of our rail network. Highly professional team!",
    },
    Testimonial {
        name: "Suresh Reddy",
        designation: "Chief Technical Officer, Southern Railway",
        zone: "Southern Railway",
        message: "Working with Khemchand Group has been a great experience. Their innovative solutions and dedication to quality make them stand out in the industry.",
    },
    Testimonial {
        name: "Vikram Singh",
        designation: "Railway Board Official",
        zone: "Railway Board",
        message: "30+ years of excellence speaks for itself. Khemchand Group continues to be a trusted name in railway infrastructure development across India.",
    },
];

pub const JOB_OPENINGS: &[JobOpening] = &[
    JobOpening {
        id: 1,
        title: "Senior Railway Engineer",
        department: "Engineering",
        location: "Delhi, India",
        kind: "Full-time",
        experience: "5-8 years",
        description: "Lead railway infrastructure projects and ensure quality delivery of engineering solutions.",
        requirements: &[
            "B.Tech/M.Tech in Civil Engineering or related field",
            "5+ years experience in railway projects",
            "Knowledge of IS codes and railway standards",
            "Project management skills",
            "Strong analytical and problem-solving abilities",
        ],
        responsibilities: &[
            "Lead engineering teams on major projects",
            "Ensure compliance with quality standards",
            "Coordinate with clients and stakeholders",
            "Review technical drawings and specifications",
            "Mentor junior engineers",
        ],
        benefits: &[
            "Competitive salary package",
            "Health insurance coverage",
            "Professional development opportunities",
            "Performance bonuses",
            "Flexible working arrangements",
        ],
    },
    JobOpening {
        id: 2,
        title: "Welding Technician",
        department: "Operations",
        location: "Multiple locations",
        kind: "Full-time",
        experience: "3-5 years",
        description: "Perform flash butt welding operations and ensure quality standards in rail welding.",
        requirements: &[
            "ITI/Diploma in Welding Technology",
            "3+ years in flash butt welding",
            "Knowledge of welding standards",
            "Safety certification",
            "Physical fitness for field work",
        ],
        responsibilities: &[
            "Perform flash butt welding operations",
            "Conduct quality inspections",
            "Maintain welding equipment",
            "Follow safety protocols",
            "Document welding parameters",
        ],
        benefits: &[
            "Attractive compensation",
            "Field allowances",
            "Safety training programs",
            "Career advancement opportunities",
            "Medical coverage",
        ],
    },
    JobOpening {
        id: 3,
        title: "Quality Control Inspector",
        department: "Quality Assurance",
        location: "Delhi, India",
        kind: "Full-time",
        experience: "2-4 years",
        description: "Ensure quality standards in manufacturing and project delivery through rigorous inspection.",
        requirements: &[
            "B.Tech/Diploma in Mechanical/Civil Engineering",
            "Knowledge of NDT techniques",
            "Experience in quality control",
            "Certification in testing methods",
            "Attention to detail",
        ],
        responsibilities: &[
            "Conduct quality inspections",
            "Perform NDT testing",
            "Prepare quality reports",
            "Ensure compliance with standards",
            "Coordinate with production teams",
        ],
        benefits: &[
            "Competitive package",
            "Technical training",
            "Career growth opportunities",
            "Health benefits",
            "Performance incentives",
        ],
    },
    JobOpening {
        id: 4,
        title: "Project Manager",
        department: "Project Management",
        location: "Delhi, India",
        kind: "Full-time",
        experience: "8-12 years",
        description: "Manage large-scale railway infrastructure projects from conception to completion.",
        requirements: &[
            "B.Tech + MBA or equivalent",
            "8+ years in project management",
            "PMP certification preferred",
            "Railway project experience",
            "Strong leadership skills",
        ],
        responsibilities: &[
            "Manage project lifecycle",
            "Coordinate with stakeholders",
            "Ensure timely delivery",
            "Manage project budgets",
            "Lead project teams",
        ],
        benefits: &[
            "Executive compensation",
            "Leadership development programs",
            "International exposure opportunities",
            "Comprehensive benefits",
            "Stock options",
        ],
    },
];

pub const CAREER_BENEFITS: &[Benefit] = &[
    Benefit {
        icon: "icon-trending-up",
        title: "Career Growth",
        description: "Clear career progression paths with opportunities for advancement",
    },
    Benefit {
        icon: "icon-graduation-cap",
        title: "Learning & Development",
        description: "Continuous learning opportunities and professional development programs",
    },
    Benefit {
        icon: "icon-award",
        title: "Recognition Programs",
        description: "Performance-based recognition and reward systems",
    },
    Benefit {
        icon: "icon-users",
        title: "Team Environment",
        description: "Collaborative work culture with experienced professionals",
    },
];

pub const LEADERS: &[Leader] = &[
    Leader {
        id: 1,
        name: "Mr. S. Kumar",
        designation: "Founder & Chairman",
        education: "B.Tech, IIT Kanpur (1975)",
        experience: "45+ Years",
        expertise: &["Railway Infrastructure", "Engineering Management", "Strategic Planning", "Quality Systems"],
        bio: "A visionary leader and IIT Kanpur alumnus who founded Khemchand Group with a mission to transform India's railway infrastructure. His extensive experience in engineering and unwavering commitment to quality have been the driving forces behind the company's success over three decades.",
        achievements: &[
            "Founded Khemchand Group in 1990",
            "Pioneered flash butt welding in India",
            "Built partnerships with Indian Railways",
            "Established quality standards in industry",
        ],
        email: "s.kumar@khemchandgroup.com",
    },
    Leader {
        id: 2,
        name: "Mr. Sandeep Sukhwani",
        designation: "Director & CEO",
        education: "MBA, United Kingdom",
        experience: "20+ Years",
        expertise: &["International Business", "Strategic Growth", "Operations Management", "Technology Innovation"],
        bio: "An accomplished business leader with international exposure and MBA from the UK. He brings global best practices and modern management techniques to drive the company towards new horizons of growth and technological advancement.",
        achievements: &[
            "Led international expansion initiatives",
            "Implemented modern quality systems",
            "Established technology partnerships",
            "Drove digital transformation",
        ],
        email: "sandeep.sukhwani@khemchandgroup.com",
    },
    Leader {
        id: 3,
        name: "Er. Rajesh Mehta",
        designation: "Chief Technical Officer",
        education: "M.Tech, Civil Engineering",
        experience: "25+ Years",
        expertise: &["Railway Engineering", "Project Management", "Quality Assurance", "Safety Systems"],
        bio: "A seasoned railway engineer with deep technical expertise in all aspects of railway infrastructure. His leadership in technical operations ensures that all projects meet the highest standards of quality and safety.",
        achievements: &[
            "Led major railway projects",
            "Developed safety protocols",
            "Mentored engineering teams",
            "Established technical standards",
        ],
        email: "rajesh.mehta@khemchandgroup.com",
    },
    Leader {
        id: 4,
        name: "Ms. Priya Sharma",
        designation: "Chief Financial Officer",
        education: "CA, MBA Finance",
        experience: "18+ Years",
        expertise: &["Financial Planning", "Risk Management", "Corporate Governance", "Strategic Analysis"],
        bio: "A dynamic financial leader who ensures robust financial management and strategic planning. Her expertise in corporate finance and risk management has been instrumental in the company's sustained growth.",
        achievements: &[
            "Streamlined financial operations",
            "Implemented cost optimization",
            "Enhanced investor relations",
            "Established governance frameworks",
        ],
        email: "priya.sharma@khemchandgroup.com",
    },
];

pub const ADVISORS: &[Advisor] = &[
    Advisor {
        name: "Dr. Rajesh Sharma",
        position: "Technical Advisor",
        speciality: "Railway Engineering",
        experience: "25+ Years",
    },
    Advisor {
        name: "Ms. Priya Nair",
        position: "Quality Assurance Head",
        speciality: "Quality Management",
        experience: "20+ Years",
    },
    Advisor {
        name: "Mr. Amit Gupta",
        position: "Operations Director",
        speciality: "Project Management",
        experience: "18+ Years",
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Delhi-Mumbai High Speed Rail Welding",
        category: ProjectCategory::Welding,
        year: "2023",
        status: ProjectStatus::Ongoing,
        location: "Delhi - Mumbai Corridor",
        client: "Indian Railways",
        description: "Advanced flash butt welding services for the high-speed rail corridor connecting Delhi and Mumbai.",
        image: "/assets/welding-bg.jpg",
        stats: &[("Joints", "25,000+"), ("Length", "350 km"), ("Completion", "75%")],
        highlights: &[
            "High-speed rail compatible welding",
            "Zero defect tolerance",
            "24/7 quality monitoring",
            "Advanced NDT testing",
        ],
    },
    Project {
        id: 2,
        title: "Eastern Railway Sleeper Supply",
        category: ProjectCategory::Sleepers,
        year: "2023",
        status: ProjectStatus::Completed,
        location: "Eastern Railway Zone",
        client: "Eastern Railway",
        description: "Manufacturing and supply of 50,000 prestressed concrete sleepers for track modernization.",
        image: "/assets/railway-hero-bg.jpg",
        stats: &[("Sleepers", "50,000"), ("Routes", "12"), ("Completion", "100%")],
        highlights: &[
            "IS:13230 compliant sleepers",
            "Advanced prestressing technology",
            "Timely delivery achieved",
            "Quality certification received",
        ],
    },
    Project {
        id: 3,
        title: "Chennai-Bangalore USFD Testing",
        category: ProjectCategory::Testing,
        year: "2024",
        status: ProjectStatus::Ongoing,
        location: "Chennai - Bangalore Route",
        client: "Southern Railway",
        description: "Comprehensive ultrasonic flaw detection testing for the entire Chennai-Bangalore railway route.",
        image: "/assets/railway-hero-bg.jpg",
        stats: &[("Distance", "5,000 km"), ("Defects", "127"), ("Completion", "60%")],
        highlights: &[
            "Advanced USFD equipment",
            "Real-time defect detection",
            "Certified testing crew",
            "Digital reporting system",
        ],
    },
    Project {
        id: 4,
        title: "Western Railway BRD System",
        category: ProjectCategory::Safety,
        year: "2022",
        status: ProjectStatus::Completed,
        location: "Western Railway Network",
        client: "Western Railway",
        description: "Installation of broken rail detection systems across critical sections of Western Railway.",
        image: "/assets/welding-bg.jpg",
        stats: &[("Coverage", "1,200 km"), ("Systems", "48"), ("Completion", "100%")],
        highlights: &[
            "24/7 rail monitoring",
            "Instant alert system",
            "Weather-resistant design",
            "Remote diagnostics capability",
        ],
    },
    Project {
        id: 5,
        title: "North-East Frontier Railway Modernization",
        category: ProjectCategory::Reconditioning,
        year: "2023",
        status: ProjectStatus::Ongoing,
        location: "Northeast India",
        client: "NF Railway",
        description: "Complete reconditioning of CMS crossings and track infrastructure modernization.",
        image: "/assets/railway-hero-bg.jpg",
        stats: &[("Crossings", "85"), ("Tracks", "200 km"), ("Completion", "40%")],
        highlights: &[
            "Complete crossing overhaul",
            "Modern materials used",
            "Extended service life",
            "Cost-effective solution",
        ],
    },
];

pub const SISTER_CONCERN: SisterConcern = SisterConcern {
    name: "Precision Equipments Co.",
    description: "Our sister concern specializes in manufacturing diesel locomotive spares with precision engineering.",
    services: &[
        "Turbo Dowelling Systems",
        "HHP Traction Motors",
        "Industrial Blowers",
        "Precision Machining",
        "ALCO & EMD Engine Parts",
        "Custom Fabrication",
    ],
    achievements: &[
        ("500+", "Components Manufactured"),
        ("50+", "Locomotive Models Served"),
    ],
};

pub const CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo {
        icon: "icon-map-pin",
        title: "Head Office",
        details: &["Ramapura Luxa, Varanasi, Uttar Pradesh 221010"],
    },
    ContactInfo {
        icon: "icon-phone",
        title: "Phone Numbers",
        details: &["+91-5422400225"],
    },
    ContactInfo {
        icon: "icon-mail",
        title: "Email Addresses",
        details: &[INFO_EMAIL],
    },
    ContactInfo {
        icon: "icon-clock",
        title: "Business Hours",
        details: &["Monday - Saturday: 12:00 PM - 8:00 PM", "Sunday: Closed"],
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { name: "Facebook", href: "#" },
    SocialLink { name: "Twitter", href: "#" },
    SocialLink { name: "LinkedIn", href: "#" },
    SocialLink { name: "Instagram", href: "#" },
];

/// Networks shown in the header strip, in display order.
pub const HEADER_SOCIALS: &[&str] = &["LinkedIn", "Instagram", "Twitter"];

pub fn social_links(names: &[&str]) -> Vec<&'static SocialLink> {
    names
        .iter()
        .filter_map(|name| SOCIAL_LINKS.iter().find(|link| link.name == *name))
        .collect()
}

/// First number of the phone entry, used as the inquiry line.
pub fn inquiry_phone() -> Option<&'static str> {
    CONTACT_INFO
        .iter()
        .find(|info| info.icon == "icon-phone")
        .and_then(|info| info.details.first().copied())
}

pub const QUICK_LINKS: &[FooterLink] = &[
    FooterLink { label: "About Us", route: Route::About },
    FooterLink { label: "Our Services", route: Route::Services },
    FooterLink { label: "Projects", route: Route::Projects },
    FooterLink { label: "Leadership", route: Route::Leadership },
    FooterLink { label: "Careers", route: Route::Careers },
    FooterLink { label: "Contact Us", route: Route::Contact },
];

pub const FOOTER_SERVICES: &[&str] = &[
    "Concrete Sleepers",
    "Flash Butt Welding",
    "USFD Testing",
    "CMS Crossing Reconditioning",
    "Broken Rail Detection",
    "Lubrication Systems",
];

pub const CERTIFICATIONS: &[&str] = &[
    "ISO 9001:2015 Certified",
    "Railway Board Approved",
    "RDSO Specifications",
    "Quality Management System",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn journey_has_one_breakpoint_per_milestone() {
        assert_eq!(JOURNEY.len(), JOURNEY_BREAKPOINTS.len());
    }

    #[test]
    fn filter_all_returns_catalog_in_order() {
        let ids: Vec<u32> = filter_projects(ProjectCategory::All).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn filter_by_category_keeps_only_matches() {
        let welding = filter_projects(ProjectCategory::Welding);
        assert_eq!(welding.len(), 1);
        assert_eq!(welding[0].title, "Delhi-Mumbai High Speed Rail Welding");

        for category in ProjectCategory::FILTERS.iter().skip(1) {
            assert!(filter_projects(*category).iter().all(|p| p.category == *category));
        }
    }

    #[test]
    fn header_strip_uses_known_socials_in_order() {
        let names: Vec<&str> = social_links(HEADER_SOCIALS).iter().map(|l| l.name).collect();
        assert_eq!(names, vec!["LinkedIn", "Instagram", "Twitter"]);
        assert!(social_links(&["Myspace"]).is_empty());
    }

    #[test]
    fn inquiry_phone_is_the_first_listed_number() {
        assert_eq!(inquiry_phone(), Some("+91-5422400225"));
    }

    #[test]
    fn job_ids_are_unique() {
        let mut ids: Vec<u32> = JOB_OPENINGS.iter().map(|j| j.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), JOB_OPENINGS.len());
    }

    #[test]
    fn leader_badges_cap_at_two() {
        let (shown, more) = LEADERS[0].expertise_badges();
        assert_eq!(shown, &["Railway Infrastructure", "Engineering Management"]);
        assert_eq!(more, Some(2));
    }

    #[test]
    fn nav_starts_at_home() {
        assert_eq!(NAV_ITEMS.first().map(|n| n.label), Some("HOME"));
        assert_eq!(NAV_ITEMS.len(), 7);
    }
}
