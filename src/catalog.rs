use std::sync::LazyLock;

use regex::Regex;

static RE_NON_SLUG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub summary: &'static str,
    pub outcomes: &'static [&'static str],
    pub capabilities: &'static [&'static str],
}

impl Service {
    pub fn slug(&self) -> String {
        to_slug(self.title)
    }
}

pub struct Industry {
    pub name: &'static str,
    pub description: &'static str,
    pub overview: &'static str,
    pub priorities: &'static [&'static str],
    pub solutions: &'static [&'static str],
}

impl Industry {
    pub fn slug(&self) -> String {
        to_slug(self.name)
    }
}

pub struct ProcessStep {
    pub title: &'static str,
    pub description: &'static str,
}

/// `"Retail & E-commerce"` becomes `"retail-and-e-commerce"`.
pub fn to_slug(value: &str) -> String {
    let value = value.to_lowercase().replace('&', "and");

    RE_NON_SLUG
        .replace_all(&value, "-")
        .trim_matches('-')
        .to_owned()
}

pub fn find_service(slug: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|s| s.slug() == slug)
}

pub fn find_industry(slug: &str) -> Option<&'static Industry> {
    INDUSTRIES.iter().find(|i| i.slug() == slug)
}

pub static SERVICES: &[Service] = &[
    Service {
        title: "Technology Consulting",
        description: "Strategic guidance for digital transformation and technology adoption",
        summary: "Strategic technology partnerships that align architecture, platforms, and execution to business outcomes.",
        outcomes: &[
            "Accelerated digital roadmap and time-to-value",
            "Reduced platform risk and technical debt",
            "Clear governance and change management",
        ],
        capabilities: &[
            "Enterprise architecture",
            "Technology roadmap",
            "Vendor evaluation",
            "Cloud strategy",
            "Security posture alignment",
        ],
    },
    Service {
        title: "Business Process Optimization",
        description: "Streamline operations and maximize efficiency across your organization",
        summary: "Streamlined operations through process re-engineering, automation, and measurable performance improvements.",
        outcomes: &[
            "Lower operating costs",
            "Higher throughput and quality",
            "Visibility across the value stream",
        ],
        capabilities: &[
            "Process discovery & mapping",
            "Workflow automation",
            "KPI instrumentation",
            "Change management enablement",
        ],
    },
    Service {
        title: "Custom Software Development",
        description: "Tailored solutions built to meet your unique business requirements",
        summary: "Tailored applications built for scale, performance, and maintainability, across web and mobile.",
        outcomes: &[
            "Fit-for-purpose experiences",
            "Secure and scalable foundations",
            "Faster iteration cycles",
        ],
        capabilities: &[
            "Web & mobile apps",
            "API platforms",
            "Design systems",
            "DevOps & CI/CD",
            "Observability",
        ],
    },
    Service {
        title: "System Integration",
        description: "Seamlessly connect your existing systems for unified operations",
        summary: "Unified ecosystems through reliable, secure integrations for data, identity, and processes.",
        outcomes: &[
            "Single source of truth",
            "Automated handoffs",
            "Lower swivel-chair overhead",
        ],
        capabilities: &[
            "ERP/CRM integration",
            "Event-driven architectures",
            "ETL/ELT pipelines",
            "Identity & SSO",
        ],
    },
    Service {
        title: "Cloud Solutions",
        description: "Scalable cloud infrastructure and migration services",
        summary: "Cloud-native foundations with cost efficiency, reliability, and security engineered in.",
        outcomes: &[
            "Elastic scalability",
            "Cost-optimized workloads",
            "Improved reliability & DR",
        ],
        capabilities: &[
            "Cloud migration",
            "Infrastructure as Code",
            "Kubernetes & serverless",
            "FinOps & guardrails",
        ],
    },
    Service {
        title: "Data Analytics",
        description: "Transform your data into actionable business insights",
        summary: "From raw data to insights: semantic models, governance, and real-time analytics that drive decisions.",
        outcomes: &[
            "Trusted, governed datasets",
            "Self-serve BI",
            "Predictive insights",
        ],
        capabilities: &[
            "Data warehousing",
            "Semantic modeling",
            "Business intelligence",
            "Real-time analytics",
        ],
    },
    Service {
        title: "Cybersecurity",
        description: "Comprehensive security solutions to protect your digital assets",
        summary: "Defense-in-depth across identity, endpoints, apps, and data with continuous detection and response.",
        outcomes: &[
            "Reduced attack surface",
            "Improved compliance",
            "Rapid incident response",
        ],
        capabilities: &[
            "Security assessments",
            "Zero-trust alignment",
            "SIEM & SOAR",
            "Security training",
        ],
    },
    Service {
        title: "Digital Transformation",
        description: "End-to-end transformation services for the digital age",
        summary: "Modern operating models, platforms, and culture, delivered iteratively with measurable value.",
        outcomes: &[
            "Modernized platforms",
            "Stronger product culture",
            "Sustainable innovation",
        ],
        capabilities: &[
            "Transformation strategy",
            "Platform engineering",
            "Org design & enablement",
            "Rollout & adoption",
        ],
    },
];

pub static PROCESS: &[ProcessStep] = &[
    ProcessStep {
        title: "Discovery",
        description: "We analyze your business needs, challenges, and objectives to create a comprehensive understanding.",
    },
    ProcessStep {
        title: "Strategy",
        description: "We develop a tailored strategy and roadmap that aligns with your business goals and technical requirements.",
    },
    ProcessStep {
        title: "Implementation",
        description: "Our expert team executes the solution using best practices and cutting-edge technologies.",
    },
    ProcessStep {
        title: "Support",
        description: "We provide ongoing support, maintenance, and optimization to ensure continued success.",
    },
];

pub static INDUSTRIES: &[Industry] = &[
    Industry {
        name: "Financial Services",
        description: "Modernize core systems, enhance security, and accelerate digital banking experiences.",
        overview: "Modernize core banking, payments, and risk platforms while meeting stringent security and compliance.",
        priorities: &[
            "Core modernization and API-first platforms",
            "Risk, compliance, and audit readiness",
            "Real-time payments and customer experiences",
        ],
        solutions: &[
            "Core API layers",
            "Event-driven systems",
            "Data governance & lineage",
            "Secure CI/CD",
        ],
    },
    Industry {
        name: "Healthcare",
        description: "Deliver secure, patient-centric experiences with interoperable systems and analytics.",
        overview: "Interoperable, secure patient experiences built on modern data and workflow platforms.",
        priorities: &[
            "EHR interoperability",
            "HIPAA-grade security",
            "Care pathway orchestration",
        ],
        solutions: &[
            "FHIR integrations",
            "Identity & consent",
            "Analytics & monitoring",
            "Clinical automations",
        ],
    },
    Industry {
        name: "Retail & E-commerce",
        description: "Build seamless omnichannel journeys with scalable platforms and personalization.",
        overview: "Omnichannel, personalized journeys and resilient supply chains that scale during peak demand.",
        priorities: &[
            "Headless commerce",
            "Real-time inventory",
            "Personalization at scale",
        ],
        solutions: &[
            "CDP integrations",
            "OMS & fulfillment",
            "A/B experimentation",
            "Edge caching",
        ],
    },
    Industry {
        name: "Manufacturing",
        description: "Enable Industry 4.0 with connected operations, predictive maintenance, and IoT.",
        overview: "Connected operations with predictive insights across plants, assets, and supply chains.",
        priorities: &[
            "IoT telemetry",
            "MES integration",
            "Predictive maintenance",
        ],
        solutions: &[
            "Time-series pipelines",
            "Digital twins",
            "Shop-floor analytics",
            "Control tower dashboards",
        ],
    },
    Industry {
        name: "Logistics",
        description: "Optimize routing, tracking, and real-time visibility from warehouse to last mile.",
        overview: "End-to-end visibility, routing optimization, and reliable last-mile orchestration.",
        priorities: &[
            "Telematics ingestion",
            "Optimization & ETA",
            "Exception management",
        ],
        solutions: &[
            "Geo services",
            "Routing engines",
            "Real-time tracking",
            "Partner integrations",
        ],
    },
    Industry {
        name: "Education",
        description: "Transform learning with secure platforms, analytics, and collaboration tooling.",
        overview: "Secure digital campuses with collaborative learning, analytics, and student success tooling.",
        priorities: &[
            "LMS integrations",
            "Student analytics",
            "Identity & access",
        ],
        solutions: &[
            "Learning platforms",
            "Engagement dashboards",
            "Credentialing & SSO",
            "Automation workflows",
        ],
    },
    Industry {
        name: "Startups",
        description: "Ship fast with scalable architectures, rapid MVPs, and growth-ready foundations.",
        overview: "Ship quickly with cloud-native foundations that scale with product-market fit and growth.",
        priorities: &["MVP velocity", "Scalable architecture", "Cost efficiency"],
        solutions: &[
            "Serverless backends",
            "Design systems",
            "Observability",
            "Growth analytics",
        ],
    },
    Industry {
        name: "Enterprise",
        description: "Drive transformation with strategy, integration, and secure platform engineering.",
        overview: "Platform engineering, zero-trust security, and change enablement for durable transformation.",
        priorities: &[
            "Platform enablement",
            "Zero-trust and governance",
            "Change management",
        ],
        solutions: &[
            "Golden paths",
            "Self-serve infra",
            "Policy-as-code",
            "Metrics & SLAs",
        ],
    },
];
