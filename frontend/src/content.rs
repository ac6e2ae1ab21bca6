//! Static page copy.

pub struct ServiceItem {
    pub label: &'static str,
    pub icon: &'static str,
}

pub struct ProcessStep {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct ContactCard {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: &'static str,
}

pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { name: "Start", href: "#top" },
    NavLink { name: "Services", href: "#services" },
    NavLink { name: "Process", href: "#process" },
    NavLink { name: "Contact", href: "#contact" },
];

pub const SERVICES: [ServiceItem; 5] = [
    ServiceItem {
        label: "Diagnosis & Audit",
        icon: "M22 12h-4l-3 9L9 3l-3 9H2",
    },
    ServiceItem {
        label: "Cashflow & Liquidity",
        icon: "M2 5h20v14H2z M2 10h20",
    },
    ServiceItem {
        label: "Costs & Margins",
        icon: "M12 2v20 M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6",
    },
    ServiceItem {
        label: "Human Capital",
        icon: "M17 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2 M9 7a4 4 0 1 0 0 8 4 4 0 0 0 0-8",
    },
    ServiceItem {
        label: "Result Control",
        icon: "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z",
    },
];

pub const PROCESS: [ProcessStep; 5] = [
    ProcessStep {
        number: "01",
        title: "Contact",
        description: "Initial talk to understand the scale of challenges.",
    },
    ProcessStep {
        number: "02",
        title: "Analysis",
        description: "Verification of documents and business model.",
    },
    ProcessStep {
        number: "03",
        title: "Strategy",
        description: "Preparation of a recovery or development plan.",
    },
    ProcessStep {
        number: "04",
        title: "Deployment",
        description: "Implementation of changes in financial processes.",
    },
    ProcessStep {
        number: "05",
        title: "Results",
        description: "Constant monitoring and reporting of effects.",
    },
];

pub const CONTACT_CARDS: [ContactCard; 3] = [
    ContactCard {
        label: "Call Us",
        value: "+48 000 000 000",
        icon: "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
    },
    ContactCard {
        label: "Email Us",
        value: "contact@mtggroup.pro",
        icon: "M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z M22 6l-10 7L2 6",
    },
    ContactCard {
        label: "WhatsApp",
        value: "Click to start chat",
        icon: "M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z",
    },
];
