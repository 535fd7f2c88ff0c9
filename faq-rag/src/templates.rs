//! Canned reply texts. Every business fact comes from the [`AgencyProfile`].

use crate::structs::agency_profile::AgencyProfile;
use crate::structs::record::ProductLine;

pub fn greeting(p: &AgencyProfile) -> String {
    format!(
        "Hello! I'm your {} assistant. How can I help you today? I can provide information about \
         our insurance products, help you get a quote, or connect you with an agent.",
        p.name
    )
}

pub fn how_are_you() -> String {
    "I'm doing well, thank you for asking! How can I assist you with your insurance needs today? \
     I'm here to answer questions about our policies, coverage options, and services."
        .to_string()
}

pub fn farewell() -> String {
    "Thank you for chatting with me today! If you have any more questions about our insurance \
     services, feel free to ask anytime. Have a great day!"
        .to_string()
}

pub fn thanks() -> String {
    "You're welcome! Is there anything else I can help you with today? I'm happy to provide more \
     information about our insurance options or answer any other questions you might have."
        .to_string()
}

pub fn insurance_types(p: &AgencyProfile) -> String {
    format!(
        "{} offers four main types of insurance: Health Insurance (comprehensive coverage for \
         individuals and families), Auto Insurance (protection for your vehicle), Home Insurance \
         (safeguarding your property), and Life Insurance (financial security for your loved \
         ones). Each type has multiple plans with different coverage levels and premium options. \
         Which one would you like to know more about?",
        p.name
    )
}

pub fn contact(p: &AgencyProfile) -> String {
    format!(
        "You can contact {} through multiple channels:\n\n\
         • Phone: {} (24/7 customer service)\n\
         • Email: {}\n\
         • Office: {}\n\
         • Hours: {}\n\n\
         Our customer service team is available 24/7 by phone for emergencies and claims. Would \
         you like to speak with an agent directly?",
        p.name, p.phone, p.email, p.office_address, p.office_hours
    )
}

pub fn quote(p: &AgencyProfile) -> String {
    format!(
        "You can get a personalized insurance quote in three easy ways:\n\n\
         1. Online: Fill out our quick quote form on our homepage (takes about 5 minutes)\n\
         2. Phone: Call {} to speak with a quote specialist\n\
         3. In-person: Visit our office for a detailed consultation\n\n\
         Our quotes are personalized based on your specific needs and circumstances. We offer \
         competitive rates with various discounts available. Would you like me to guide you \
         through the online quote process?",
        p.phone
    )
}

pub fn agents(p: &AgencyProfile) -> String {
    let roster: String = p
        .agents
        .iter()
        .map(|a| {
            format!(
                "• {} ({}): {}. Direct line: {}\n",
                a.name, a.title, a.summary, a.direct_line
            )
        })
        .collect();
    format!(
        "Our insurance specialists are here to help you find the perfect coverage:\n\n{roster}\n\
         All our agents are licensed professionals committed to finding you the best coverage at \
         competitive rates. Would you like to schedule a consultation with one of our specialists?"
    )
}

pub fn company(p: &AgencyProfile) -> String {
    p.about.clone()
}

/// Product template body (before excerpts and call to action).
pub fn product_intro(line: ProductLine, p: &AgencyProfile) -> String {
    match line {
        ProductLine::Health => "Our Health Insurance plans provide comprehensive coverage for \
             individuals, families, and businesses. Key benefits include:\n\n\
             • Access to our network of 10,000+ doctors and 500+ hospitals nationwide\n\
             • Prescription drug coverage with low copays\n\
             • Preventive care with no out-of-pocket costs\n\
             • 24/7 telehealth services\n\
             • Mental health coverage\n\
             • Wellness programs and discounts\n\n\
             We offer Bronze, Silver, Gold, and Platinum plans to fit different budgets and \
             healthcare needs, with monthly premiums starting at $250 for individuals."
            .to_string(),
        ProductLine::Auto => format!(
            "{} Auto Insurance protects you and your vehicle with customizable coverage options:\n\n\
             • Collision coverage for accidents regardless of fault\n\
             • Comprehensive coverage for theft, vandalism, and natural disasters\n\
             • Liability protection for bodily injury and property damage\n\
             • Uninsured/underinsured motorist coverage\n\
             • Optional roadside assistance and rental car coverage\n\
             • New car replacement for vehicles less than 1 year old\n\n\
             We offer discounts for safe drivers (up to 20%), multi-car policies (15%), bundling \
             with home insurance (25%), and advanced safety features.",
            p.brand
        ),
        ProductLine::Home => "Our Home Insurance policies safeguard your property and belongings \
             with comprehensive protection:\n\n\
             • Dwelling coverage for your home's structure\n\
             • Personal property protection for your belongings\n\
             • Liability coverage for accidents on your property\n\
             • Additional living expenses if your home becomes uninhabitable\n\
             • Medical payments coverage for guests injured on your property\n\n\
             We also offer optional coverages including flood insurance, earthquake protection, \
             valuable items coverage, and identity theft protection. Policies can be customized \
             based on your home's value, location, and specific needs."
            .to_string(),
        ProductLine::Life => format!(
            "{} Life Insurance provides financial security for your loved ones with flexible \
             coverage options:\n\n\
             • Term Life: Affordable coverage for 10, 20, or 30 years with death benefits from \
             $100,000 to $5 million\n\
             • Whole Life: Permanent coverage with cash value accumulation and fixed premiums\n\
             • Universal Life: Flexible premiums and death benefits with investment components\n\n\
             Our life insurance can help cover funeral expenses, replace lost income, pay off debts \
             including mortgages, fund education expenses, and create an inheritance. Policies are \
             available for individuals ages 18-75 with simplified underwriting options available.",
            p.brand
        ),
    }
}

pub fn product_call_to_action(line: ProductLine) -> &'static str {
    match line {
        ProductLine::Health => {
            "Would you like to get a personalized health insurance quote or speak with our health insurance specialist?"
        }
        ProductLine::Auto => {
            "Would you like to get an auto insurance quote based on your vehicle and driving history?"
        }
        ProductLine::Home => {
            "Would you like to discuss customizing a home insurance policy for your specific property?"
        }
        ProductLine::Life => {
            "Would you like to speak with our life insurance advisor about creating a personalized protection plan for your family?"
        }
    }
}

pub fn claims(p: &AgencyProfile) -> String {
    format!(
        "Filing a claim with {} is quick and easy:\n\n\
         1. Report your claim 24/7 through our mobile app, online portal, or by calling {}\n\
         2. Provide basic information about the incident and any supporting documentation\n\
         3. A dedicated claims adjuster will be assigned within 24 hours\n\
         4. Track your claim status through our online portal or mobile app\n\n\
         For emergency claims, we offer expedited processing with same-day assessments. Our \
         average claim processing time is 5-7 business days, with direct deposit reimbursement \
         available. Do you need to file a claim now or have questions about a specific claims \
         situation?",
        p.name, p.phone
    )
}

pub fn no_information(p: &AgencyProfile) -> String {
    format!(
        "I'm sorry, I don't have specific information about that. Please contact our team at {} \
         for more detailed assistance with your question. You can also visit our website at {} \
         for additional resources.",
        p.phone, p.website
    )
}

pub fn clarify_product(line: ProductLine, p: &AgencyProfile) -> String {
    format!(
        "I'm not sure I understand your specific question about {line} insurance. Would you like \
         to know about coverage options, pricing, or benefits? Or you can call us at {} for \
         personalized assistance.",
        p.phone
    )
}

pub fn clarify_topic(topic: &str, p: &AgencyProfile) -> String {
    format!(
        "I'm not sure I understand your specific question about our {topic} services. Could you \
         please provide more details about what you'd like to know? Our customer service team is \
         also available at {} to assist you.",
        p.phone
    )
}

pub fn clarify_general() -> String {
    "I'm not sure I understand your question completely. Could you please rephrase it or provide \
     more details about what you'd like to know about our insurance services? I can help with \
     information about our policies, coverage options, quotes, claims process, or connecting you \
     with an agent."
        .to_string()
}

pub fn overview_body(overview: &str) -> String {
    format!(
        "{overview}\n\nWe offer four main types of insurance:\n\n\
         • Health Insurance: Comprehensive medical coverage for individuals and families\n\
         • Auto Insurance: Protection for your vehicle against accidents and damages\n\
         • Home Insurance: Safeguarding your property and belongings\n\
         • Life Insurance: Financial security for your loved ones\n\n\
         Which type of insurance are you most interested in learning more about?"
    )
}

pub fn apology(p: &AgencyProfile) -> String {
    format!(
        "I'm sorry, I'm having trouble generating a response right now. Please try again later or \
         contact our team for assistance at {}.",
        p.phone
    )
}
