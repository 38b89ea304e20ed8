use serde::Serialize;

/// One entry of the services page and `/api/services`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Service {
    pub id: &'static str,
    pub name: &'static str,
    pub price: &'static str,
    #[serde(rename = "description")]
    pub summary: &'static str,
    #[serde(skip)]
    pub details: &'static str,
    pub image: &'static str,
    pub features: &'static [&'static str],
}

pub const SERVICES: [Service; 5] = [
    Service {
        id: "website-development",
        name: "Website Development",
        price: "$200",
        summary: "Professional, responsive websites tailored to your business needs.",
        details: "Professional, responsive websites tailored to your business needs. I create modern, fast-loading websites with clean code, SEO optimization, and mobile-first design. From simple landing pages to complex web applications, I deliver high-quality websites that drive results and engage your audience effectively.",
        image: "https://files.catbox.moe/6dj5x3.jpg",
        features: &["Responsive Design", "SEO Optimized", "Fast Loading", "Mobile First"],
    },
    Service {
        id: "logo-design",
        name: "Logo Designing",
        price: "$10",
        summary: "Professional logo design services that capture your brand's essence.",
        details: "Professional logo design services that capture your brand's essence and identity. I create unique, memorable logos that work across all platforms and mediums. Each design is crafted with attention to detail, ensuring your brand stands out with a distinctive visual identity that resonates with your target audience.",
        image: "https://files.catbox.moe/4ezw8t.jpg",
        features: &[
            "Unique Design",
            "Multiple Formats",
            "Commercial Rights",
            "Revisions Included",
        ],
    },
    Service {
        id: "streaming-accounts",
        name: "Streaming Accounts",
        price: "Contact for pricing",
        summary: "Affordable Netflix and Crunchyroll accounts.",
        details: "Get access to affordable Netflix and Crunchyroll accounts. We provide reliable streaming account services with competitive pricing. Enjoy your favorite shows, movies, and anime content without breaking the bank. Contact us for current availability and special bundle offers.",
        image: "https://files.catbox.moe/c1ekuj.jpg",
        features: &[
            "Netflix Access",
            "Crunchyroll Access",
            "Reliable Service",
            "Competitive Pricing",
        ],
    },
    Service {
        id: "code-dealer",
        name: "Code Dealer",
        price: "Custom pricing",
        summary: "Custom code solutions designed for resale and commercial use.",
        details: "Custom code solutions designed for resale and commercial use. I write clean, well-documented code in various programming languages and frameworks. Whether you need scripts, applications, or specific functionality, I deliver quality code that you can confidently resell to your clients with full commercial rights.",
        image: "https://files.catbox.moe/7uhq6h.jpg",
        features: &[
            "Clean Code",
            "Well Documented",
            "Commercial Rights",
            "Multiple Languages",
        ],
    },
    Service {
        id: "free-psp-games",
        name: "Free PSP Games",
        price: "FREE",
        summary: "Join our exclusive WhatsApp channel for free PSP games!",
        details: "Join our exclusive WhatsApp channel for free PSP games! We regularly share high-quality PSP game downloads, tips, tricks, and gaming content. Get access to a vast collection of classic and popular PlayStation Portable games. Contact us to be added to our gaming community channel.",
        image: "https://files.catbox.moe/b05woz.jpg",
        features: &[
            "Free Access",
            "Regular Updates",
            "Game Library",
            "Community Support",
        ],
    },
];
