//! Static site content: programs, services, gallery and contact details

/// Center contact details shown in page footers and confirmation emails
#[derive(Debug, Clone, Copy)]
pub struct ContactDetails {
    /// Street address
    pub address: &'static str,
    /// Phone numbers, primary first
    pub phones: &'static [&'static str],
    /// Public inbox
    pub email: &'static str,
}

impl ContactDetails {
    /// The number families should call first
    #[must_use]
    pub fn primary_phone(&self) -> &'static str {
        self.phones.first().copied().unwrap_or_default()
    }
}

/// WonderMinds contact details
pub const CONTACT: ContactDetails = ContactDetails {
    address: "Ferdaws Mosque, Al Khobar, SA",
    phones: &["+966 51 053 2513", "+966 50 876 9635"],
    email: "info@wonderminds.edu",
};

/// An age-based program
#[derive(Debug, Clone, Copy)]
pub struct Program {
    /// Page anchor, e.g. `preschool`
    pub slug: &'static str,
    /// Program name
    pub title: &'static str,
    /// Tagline
    pub subtitle: &'static str,
    /// One-sentence pitch
    pub description: &'static str,
    /// Age range
    pub age_range: &'static str,
    /// Half or full day
    pub duration: &'static str,
    /// Class size
    pub capacity: &'static str,
    /// Hero image under `/images`
    pub image: &'static str,
    /// Highlights
    pub features: &'static [&'static str],
}

/// Programs, youngest first
pub const PROGRAMS: &[Program] = &[
    Program {
        slug: "infant",
        title: "Infant & Toddler Care",
        subtitle: "Gentle Beginnings in a Safe Haven",
        description: "A nurturing start where your baby feels safe and loved.",
        age_range: "6 Months – 2 Years",
        duration: "Full Day",
        capacity: "8 children",
        image: "/images/ryan-jacobson-cXUOQWdRV4I-unsplash.jpg",
        features: &[
            "Secure baby rooms with soft lighting and baby-proofed play areas",
            "Bonding through touch, music, and sensory play",
            "Guided motor development: crawling, walking, hand-eye coordination",
            "Daily routine updates shared with parents",
        ],
    },
    Program {
        slug: "daycare",
        title: "Day Care",
        subtitle: "Safe. Caring. Nurturing.",
        description: "The ideal blend of care and early learning.",
        age_range: "2 – 3 Years",
        duration: "Full Day",
        capacity: "12 children",
        image: "/images/unseen-studio-s9CC2SKySJM-unsplash.jpg",
        features: &[
            "Structured daily routine (play, meals, nap, exploration)",
            "Sensory-rich classrooms with early literacy exposure",
            "First steps toward independence: self-feeding, tidying up, toilet training",
            "Gentle introduction to group play and social skills",
        ],
    },
    Program {
        slug: "preschool",
        title: "Preschool",
        subtitle: "Where Curiosity Meets Creativity",
        description: "Children discover their love for learning through exploration.",
        age_range: "3 – 4.5 Years",
        duration: "Half/Full Day",
        capacity: "16 children",
        image: "/images/zachary-keimig-nxJgmZfLcJI-unsplash.jpg",
        features: &[
            "Phonics and pre-reading programs",
            "Counting, sorting, and number concepts through games",
            "Storytelling, puppets, role play, and arts & crafts",
            "Outdoor play and group activities to encourage teamwork",
        ],
    },
    Program {
        slug: "kindergarten",
        title: "Kindergarten",
        subtitle: "Building Strong Foundations for School Success",
        description: "Prepared for school, prepared for life.",
        age_range: "4.5 – 6 Years",
        duration: "Full Day",
        capacity: "18 children",
        image: "/images/brooke-cagle-g1Kr4Ozfoac-unsplash.jpg",
        features: &[
            "Academic readiness: reading, writing, math, and inquiry-based learning",
            "Early STEM activities, puzzles, and problem-solving tasks",
            "Teamwork and communication through projects and presentations",
            "Physical fitness: yoga, sports, balance & coordination games",
        ],
    },
    Program {
        slug: "primary",
        title: "Primary Foundation & Special Education",
        subtitle: "Every Child Deserves to Shine",
        description: "Empowering children to thrive in both academics and life.",
        age_range: "6 – 10 Years",
        duration: "Full Day",
        capacity: "15 children",
        image: "/images/cdc-UqTrGSohyCs-unsplash.jpg",
        features: &[
            "Academic support: homework help, reading fluency, math reinforcement",
            "Skill development: creative writing, science projects, public speaking",
            "Individualized Education Plans (IEPs) for special needs",
            "Speech, Occupational, and Behavioral Therapy support",
            "Support for Autism, ADHD, Learning Disorders",
            "Life Skills: independence, social manners, emotional regulation",
        ],
    },
];

/// A therapy or support service
#[derive(Debug, Clone, Copy)]
pub struct Service {
    /// Page anchor
    pub slug: &'static str,
    /// Service name
    pub title: &'static str,
    /// Overview paragraph
    pub description: &'static str,
    /// What the service covers
    pub features: &'static [&'static str],
}

/// Therapy and support services
pub const SERVICES: &[Service] = &[
    Service {
        slug: "speech",
        title: "Speech & Language Therapy",
        description: "Comprehensive speech and communication support for children with developmental needs. Our certified speech-language pathologists help children develop clear, confident communication skills.",
        features: &[
            "Articulation & clarity training",
            "Vocabulary building & expressive speech",
            "Social communication & conversational skills",
            "Oral motor & feeding therapy",
            "Fluency and stuttering support",
            "Augmentative and alternative communication (AAC)",
        ],
    },
    Service {
        slug: "occupational",
        title: "Occupational Therapy",
        description: "Developing essential motor skills and daily living capabilities. Our occupational therapists help children gain independence and confidence in their daily activities.",
        features: &[
            "Fine motor skills (writing, grip, hand strength)",
            "Gross motor balance & coordination",
            "Sensory integration & regulation",
            "Daily living skills (dressing, feeding, toileting)",
            "Visual-motor integration",
            "Executive functioning skills",
        ],
    },
    Service {
        slug: "behavior",
        title: "Behavior & ABA Therapy",
        description: "Evidence-based behavioral interventions for positive development. Our Board Certified Behavior Analysts use Applied Behavior Analysis to help children develop appropriate behaviors and social skills.",
        features: &[
            "Positive behavior support & reinforcement",
            "Reducing self-harm or tantrums",
            "Developing patience, turn-taking, and compliance",
            "Social skills & peer interaction",
            "Functional communication training",
            "Parent and caregiver training",
        ],
    },
    Service {
        slug: "special-ed",
        title: "Special Education Support",
        description: "Personalized academic support for children with learning difficulties. Our special education specialists provide individualized instruction so every child can succeed.",
        features: &[
            "Reading, writing, and math support for learning difficulties",
            "Strategies for ADHD, Dyslexia, and other learning disorders",
            "Individual & small-group sessions for personalized attention",
            "Assistive teaching methods (visual schedules, PECS)",
            "Curriculum modifications and accommodations",
            "Transition planning and support",
        ],
    },
    Service {
        slug: "counseling",
        title: "Counseling & Parent Support",
        description: "Family support and training programs. Our counselors work with parents to create positive, supportive environments for children's growth.",
        features: &[
            "Parent training to continue therapy at home",
            "Family counseling to reduce stress and build positive routines",
            "Regular workshops on behavior, communication, and academic readiness",
            "Support groups for parents and caregivers",
            "Sibling support and education",
            "Community resource connections",
        ],
    },
];

/// A captioned gallery photo
#[derive(Debug, Clone, Copy)]
pub struct GalleryImage {
    /// Image path
    pub src: &'static str,
    /// Alt text
    pub alt: &'static str,
    /// Caption
    pub title: &'static str,
}

/// Gallery photos
pub const GALLERY: &[GalleryImage] = &[
    GalleryImage {
        src: "/images/gallery/gallery1.jpg",
        alt: "Bright and colorful classroom with learning centers",
        title: "Learning Centers",
    },
    GalleryImage {
        src: "/images/gallery/gallery2.jpg",
        alt: "Outdoor playground with safe equipment",
        title: "Outdoor Playground",
    },
    GalleryImage {
        src: "/images/gallery/gallery3.jpg",
        alt: "Art studio with children creating artwork",
        title: "Art Studio",
    },
    GalleryImage {
        src: "/images/gallery/gallery4.jpg",
        alt: "Cozy library corner with books and reading nooks",
        title: "Library Corner",
    },
    GalleryImage {
        src: "/images/gallery/gallery5.jpg",
        alt: "Science exploration area with hands-on activities",
        title: "Science Exploration",
    },
    GalleryImage {
        src: "/images/gallery/gallery6.jpg",
        alt: "Music room with instruments and children singing",
        title: "Music & Movement",
    },
    GalleryImage {
        src: "/images/gallery/gallery7.jpg",
        alt: "Cafeteria with children enjoying healthy meals",
        title: "Healthy Meals",
    },
    GalleryImage {
        src: "/images/gallery/gallery8.jpg",
        alt: "Quiet nap room with comfortable sleeping areas",
        title: "Rest Time",
    },
];

/// A titled blurb, used for values and highlights
#[derive(Debug, Clone, Copy)]
pub struct Highlight {
    /// Heading
    pub title: &'static str,
    /// Body
    pub description: &'static str,
}

/// Core values on the about page
pub const VALUES: &[Highlight] = &[
    Highlight {
        title: "Nurturing Care",
        description: "We provide a warm, loving environment where every child feels valued and supported in their learning journey.",
    },
    Highlight {
        title: "Quality Education",
        description: "Our curriculum is designed to foster creativity, critical thinking, and a lifelong love of learning.",
    },
    Highlight {
        title: "Community Focus",
        description: "We believe in building strong partnerships with families and creating a supportive community for all children.",
    },
    Highlight {
        title: "Safety First",
        description: "Your child's safety and well-being are our top priorities in everything we do.",
    },
];

/// Reasons to choose WonderMinds, shown on the programs page
pub const PROGRAM_HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        title: "Small Class Sizes",
        description: "Low student-to-teacher ratios ensure personalized attention for every child.",
    },
    Highlight {
        title: "Research-Based Curriculum",
        description: "Our programs are based on the latest research in early childhood development.",
    },
    Highlight {
        title: "Nurturing Environment",
        description: "We create a warm, loving atmosphere where children feel safe to explore and learn.",
    },
    Highlight {
        title: "Qualified Staff",
        description: "Certified, experienced staff dedicated to early childhood care and learning.",
    },
];

/// Frequently asked questions on the contact page
pub const FAQ: &[Highlight] = &[
    Highlight {
        title: "Do you offer part-time programs?",
        description: "Yes! We offer both full-day and half-day programs for preschool and kindergarten students, with flexible drop-off and pick-up for working families.",
    },
    Highlight {
        title: "What is your student-to-teacher ratio?",
        description: "1:4 for infants, 1:6 for toddlers, 1:8 for preschoolers, and 1:12 for kindergarten and primary students.",
    },
    Highlight {
        title: "Do you provide meals and snacks?",
        description: "Yes, we provide nutritious breakfast, lunch, and afternoon snacks prepared fresh daily, and we accommodate dietary restrictions and allergies.",
    },
    Highlight {
        title: "How do I schedule a tour?",
        description: "Use the visit request form below, call us, or send us an email. Tours typically last 30-45 minutes.",
    },
    Highlight {
        title: "What safety measures do you have in place?",
        description: "Secure entry systems, regular safety drills, background-checked staff, and age-appropriate equipment in secure play areas.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_phone() {
        assert_eq!(CONTACT.primary_phone(), "+966 51 053 2513");
    }

    #[test]
    fn test_slugs_are_unique() {
        let mut slugs: Vec<_> = PROGRAMS
            .iter()
            .map(|p| p.slug)
            .chain(SERVICES.iter().map(|s| s.slug))
            .collect();
        let total = slugs.len();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), total);
    }
}
