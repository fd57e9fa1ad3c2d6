use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingPeriod {
    Monthly,
    Yearly,
}

/// A pricing tier. Amounts are base USD; rendering goes through
/// `LocaleStore::format_price`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingPlan {
    pub name: &'static str,
    pub description: &'static str,
    pub monthly_usd: f64,
    pub yearly_usd: f64,
    pub popular: bool,
    pub features: &'static [&'static str],
    pub not_included: &'static [&'static str],
}

impl PricingPlan {
    pub fn price(&self, period: BillingPeriod) -> f64 {
        match period {
            BillingPeriod::Monthly => self.monthly_usd,
            BillingPeriod::Yearly => self.yearly_usd,
        }
    }
}

pub fn plans() -> &'static [PricingPlan] {
    &PLANS
}

static PLANS: [PricingPlan; 3] = [
    PricingPlan {
        name: "Basic",
        description: "For individuals seeking basic legal assistance",
        monthly_usd: 29.0,
        yearly_usd: 290.0,
        popular: false,
        features: &[
            "AI Legal Assistant Access",
            "Document Templates",
            "Basic Legal Research",
            "Email Support",
            "1 Free Legal Document Review",
        ],
        not_included: &[
            "Video Consultations",
            "Priority Support",
            "Custom Document Creation",
            "Dedicated Legal Team",
        ],
    },
    PricingPlan {
        name: "Professional",
        description: "For small businesses and professionals",
        monthly_usd: 99.0,
        yearly_usd: 990.0,
        popular: true,
        features: &[
            "Everything in Basic",
            "3 Video Consultations/month",
            "Priority Support",
            "Custom Document Creation",
            "Unlimited Document Reviews",
            "Business Contract Templates",
        ],
        not_included: &["Dedicated Legal Team", "24/7 Emergency Support"],
    },
    PricingPlan {
        name: "Enterprise",
        description: "For growing businesses with complex legal needs",
        monthly_usd: 299.0,
        yearly_usd: 2990.0,
        popular: false,
        features: &[
            "Everything in Professional",
            "Unlimited Video Consultations",
            "Dedicated Legal Team",
            "24/7 Emergency Support",
            "Custom Legal Strategy",
            "Regulatory Compliance Review",
        ],
        not_included: &[],
    },
];
