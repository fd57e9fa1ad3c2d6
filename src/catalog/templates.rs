use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateStatus {
    Development,
    Active,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub status: TemplateStatus,
}

pub const CATEGORY_PERSONAL: &str = "Personal Legal Documents";
pub const CATEGORY_BUSINESS: &str = "Business & Commercial Documents";
pub const CATEGORY_PROPERTY: &str = "Property & Rental Agreements";
pub const CATEGORY_LEGAL_NOTICES: &str = "Legal Notices & Letters";

pub const CATEGORIES: [&str; 4] = [
    CATEGORY_PERSONAL,
    CATEGORY_BUSINESS,
    CATEGORY_PROPERTY,
    CATEGORY_LEGAL_NOTICES,
];

pub fn catalog() -> &'static [DocumentTemplate] {
    &TEMPLATES
}

pub fn find(id: &str) -> Option<&'static DocumentTemplate> {
    TEMPLATES.iter().find(|template| template.id == id)
}

pub fn by_category(category: &str) -> Vec<&'static DocumentTemplate> {
    TEMPLATES
        .iter()
        .filter(|template| template.category == category)
        .collect()
}

static TEMPLATES: [DocumentTemplate; 28] = [
    DocumentTemplate {
        id: "will",
        name: "Will & Testament",
        description: "A simple last will and testament document",
        category: CATEGORY_PERSONAL,
        status: TemplateStatus::Development,
    },
    DocumentTemplate {
        id: "living-will",
        name: "Living Will",
        description: "Advance Healthcare Directive specifying medical preferences",
        category: CATEGORY_PERSONAL,
        status: TemplateStatus::Development,
    },
    DocumentTemplate {
        id: "poa",
        name: "Power of Attorney (POA)",
        description: "Grants authority to act on your behalf",
        category: CATEGORY_PERSONAL,
        status: TemplateStatus::Development,
    },
    DocumentTemplate {
        id: "medical-poa",
        name: "Medical Power of Attorney",
        description: "Authorizes medical decisions on your behalf",
        category: CATEGORY_PERSONAL,
        status: TemplateStatus::Development,
    },
    DocumentTemplate {
        id: "affidavit",
        name: "Affidavit",
        description: "Sworn statement that can be self-drafted and notarized",
        category: CATEGORY_PERSONAL,
        status: TemplateStatus::Development,
    },
    DocumentTemplate {
        id: "promissory-note",
        name: "Promissory Note",
        description: "Legally binding agreement for lending money",
        category: CATEGORY_PERSONAL,
        status: TemplateStatus::Development,
    },
    DocumentTemplate {
        id: "authorization-letter",
        name: "Authorization Letter",
        description: "Grant permission for someone to act on your behalf",
        category: CATEGORY_PERSONAL,
        status: TemplateStatus::Development,
    },
    DocumentTemplate {
        id: "nda",
        name: "Non-Disclosure Agreement (NDA)",
        description: "Protects confidential information",
        category: CATEGORY_BUSINESS,
        status: TemplateStatus::Development,
    },
    DocumentTemplate {
        id: "freelance-agreement",
        name: "Freelance/Consultant Agreement",
        description: "Defines terms between freelancers and clients",
        category: CATEGORY_BUSINESS,
        status: TemplateStatus::Development,
    },
    DocumentTemplate {
        id: "contractor-agreement",
        name: "Independent Contractor Agreement",
        description: "Outlines terms between contractor and business",
        category: CATEGORY_BUSINESS,
        status: TemplateStatus::Development,
    },
    DocumentTemplate {
        id: "offer-letter",
        name: "Employment Offer Letter",
        description: "Provides job offer details",
        category: CATEGORY_BUSINESS,
        status: TemplateStatus::Development,
    },
    DocumentTemplate {
        id: "partnership-agreement",
        name: "Business Partnership Agreement",
        description: "Defines roles in a partnership",
        category: CATEGORY_BUSINESS,
        status: TemplateStatus::Development,
    },
    DocumentTemplate {
        id: "payment-agreement",
        name: "Invoice & Payment Agreement",
        description: "Documents for payment obligations",
        category: CATEGORY_BUSINESS,
        status: TemplateStatus::Development,
    },
    DocumentTemplate {
        id: "terms-conditions",
        name: "Website Terms & Conditions",
        description: "Standard policies for website users",
        category: CATEGORY_BUSINESS,
        status: TemplateStatus::Development,
    },
    DocumentTemplate {
        id: "privacy-policy",
        name: "Privacy Policy",
        description: "Data privacy and protection policy",
        category: CATEGORY_BUSINESS,
        status: TemplateStatus::Development,
    },
    DocumentTemplate {
        id: "sla",
        name: "Service Level Agreement (SLA)",
        description: "Defines service expectations",
        category: CATEGORY_BUSINESS,
        status: TemplateStatus::Development,
    },
    DocumentTemplate {
        id: "loi",
        name: "Letter of Intent (LOI)",
        description: "Outlines preliminary agreements",
        category: CATEGORY_BUSINESS,
        status: TemplateStatus::Development,
    },
    DocumentTemplate {
        id: "cease-desist",
        name: "Cease and Desist Letter",
        description: "Requests to stop an activity",
        category: CATEGORY_BUSINESS,
        status: TemplateStatus::Development,
    },
    DocumentTemplate {
        id: "lease-agreement",
        name: "Lease/Rental Agreement",
        description: "Standard rental agreement template",
        category: CATEGORY_PROPERTY,
        status: TemplateStatus::Development,
    },
    DocumentTemplate {
        id: "roommate-agreement",
        name: "Roommate Agreement",
        description: "Defines living arrangements between roommates",
        category: CATEGORY_PROPERTY,
        status: TemplateStatus::Development,
    },
    DocumentTemplate {
        id: "bill-of-sale",
        name: "Bill of Sale",
        description: "Documents the sale of personal property",
        category: CATEGORY_PROPERTY,
        status: TemplateStatus::Development,
    },
    DocumentTemplate {
        id: "property-purchase",
        name: "Property Purchase Agreement",
        description: "Basic property sale agreement",
        category: CATEGORY_PROPERTY,
        status: TemplateStatus::Development,
    },
    DocumentTemplate {
        id: "eviction-notice",
        name: "Eviction Notice",
        description: "Written notice regarding lease violations",
        category: CATEGORY_LEGAL_NOTICES,
        status: TemplateStatus::Development,
    },
    DocumentTemplate {
        id: "resignation-letter",
        name: "Resignation Letter",
        description: "Formal notice for leaving a job",
        category: CATEGORY_LEGAL_NOTICES,
        status: TemplateStatus::Development,
    },
    DocumentTemplate {
        id: "complaint-letter",
        name: "Complaint Letter",
        description: "Formal report of an issue",
        category: CATEGORY_LEGAL_NOTICES,
        status: TemplateStatus::Development,
    },
    DocumentTemplate {
        id: "debt-settlement",
        name: "Debt Settlement Agreement",
        description: "Agreement between debtor and creditor",
        category: CATEGORY_LEGAL_NOTICES,
        status: TemplateStatus::Development,
    },
    DocumentTemplate {
        id: "warning-letter",
        name: "Workplace Warning Letter",
        description: "Used for disciplinary actions",
        category: CATEGORY_LEGAL_NOTICES,
        status: TemplateStatus::Development,
    },
    DocumentTemplate {
        id: "demand-letter",
        name: "Legal Demand Letter",
        description: "Formal request before legal proceedings",
        category: CATEGORY_LEGAL_NOTICES,
        status: TemplateStatus::Development,
    },
];
