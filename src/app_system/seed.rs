//! Courses every fresh process starts with.

use crate::course_actor::CourseCreate;
use crate::domain::CourseState;

struct SeedCourse {
    title: &'static str,
    description: &'static str,
    price: u32,
    original_price: u32,
    duration: &'static str,
    level: &'static str,
    features: [&'static str; 6],
}

const CATALOG: [SeedCourse; 6] = [
    SeedCourse {
        title: "Ethical Hacking Fundamentals",
        description: "Complete introduction to ethical hacking with hands-on labs and real-world scenarios. \
                      Learn penetration testing, vulnerability assessment, and security analysis.",
        price: 999,
        original_price: 15999,
        duration: "40+ Hours",
        level: "Beginner",
        features: ["Network Security", "Web App Testing", "Linux Basics", "Tool Mastery", "OWASP Top 10", "Certificate"],
    },
    SeedCourse {
        title: "Advanced Penetration Testing",
        description: "Deep dive into advanced penetration testing techniques and methodologies. \
                      Master professional-grade security testing.",
        price: 1499,
        original_price: 24999,
        duration: "60+ Hours",
        level: "Advanced",
        features: [
            "Advanced Exploits",
            "Buffer Overflows",
            "Privilege Escalation",
            "Report Writing",
            "Enterprise Testing",
            "Certificate",
        ],
    },
    SeedCourse {
        title: "Web Application Security",
        description: "Comprehensive web application security testing and secure coding practices. \
                      Learn to identify and fix web vulnerabilities.",
        price: 799,
        original_price: 12999,
        duration: "35+ Hours",
        level: "Intermediate",
        features: ["SQL Injection", "XSS Attacks", "Authentication Bypass", "API Security", "Secure Coding", "Certificate"],
    },
    SeedCourse {
        title: "Network Security Mastery",
        description: "Master network security concepts, protocols, and implementation strategies. \
                      Build robust network defenses.",
        price: 1199,
        original_price: 18999,
        duration: "45+ Hours",
        level: "Intermediate",
        features: [
            "Firewall Configuration",
            "IDS/IPS Setup",
            "VPN Security",
            "Network Forensics",
            "Wireshark Analysis",
            "Certificate",
        ],
    },
    SeedCourse {
        title: "Digital Forensics Investigation",
        description: "Professional digital forensics investigation techniques, evidence collection, \
                      and court-ready reporting.",
        price: 1299,
        original_price: 21999,
        duration: "50+ Hours",
        level: "Advanced",
        features: [
            "Evidence Acquisition",
            "File System Analysis",
            "Memory Forensics",
            "Mobile Forensics",
            "Report Writing",
            "Certificate",
        ],
    },
    SeedCourse {
        title: "Cloud Security Architecture",
        description: "Comprehensive cloud security for AWS, Azure, GCP including compliance, monitoring, \
                      and incident response.",
        price: 1599,
        original_price: 25999,
        duration: "55+ Hours",
        level: "Expert",
        features: [
            "Multi-Cloud Security",
            "Compliance",
            "DevSecOps",
            "Container Security",
            "Serverless Security",
            "Certificate",
        ],
    },
];

/// The default catalog, in the order ids are assigned.
pub fn default_catalog() -> Vec<CourseCreate> {
    CATALOG
        .iter()
        .map(|seed| CourseCreate {
            title: seed.title.to_string(),
            description: seed.description.to_string(),
            price: seed.price,
            original_price: seed.original_price,
            duration: seed.duration.to_string(),
            level: seed.level.to_string(),
            features: seed.features.iter().map(|f| f.to_string()).collect(),
            state: CourseState::Active,
        })
        .collect()
}
