//! Business facts interpolated into every reply template.
//!
//! The defaults are placeholder data for the demo agency; a deployment swaps
//! them with a JSON file (see `FaqConfig::profile_path`) without touching
//! ranking or generation code.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::faq_rag_error::FaqRagError;

/// A licensed agent featured in agent-related replies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentProfile {
    pub name: String,
    pub title: String,
    /// One-line experience/specialty summary for the agent roster.
    pub summary: String,
    pub direct_line: String,
    /// Sentence used when the assistant suggests talking to this agent.
    pub pitch: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgencyProfile {
    /// Display name, e.g. "ACME Insurance".
    pub name: String,
    /// Short brand term as it appears in queries and content, e.g. "ACME".
    pub brand: String,
    pub phone: String,
    pub email: String,
    pub office_address: String,
    pub office_hours: String,
    pub website: String,
    /// Company background used for "about us" replies.
    pub about: String,
    /// First entry is the featured agent for follow-up suggestions.
    pub agents: Vec<AgentProfile>,
}

impl Default for AgencyProfile {
    fn default() -> Self {
        Self {
            name: "ACME Insurance".into(),
            brand: "ACME".into(),
            phone: "(555) 123-4567".into(),
            email: "info@acmeinsurance.com".into(),
            office_address: "123 Insurance St, City, State 12345".into(),
            office_hours: "Monday-Friday 9am-5pm, Saturday 10am-2pm".into(),
            website: "www.acmeinsurance.com".into(),
            about: "ACME Insurance has been your trusted protection partner for over 20 years. \
                    Founded in 2001 by insurance veterans with a mission to make quality coverage \
                    accessible to everyone, we've grown from a small local agency to serving over \
                    50,000 customers nationwide.\n\n\
                    Our core values:\n\
                    • Customer-first approach with personalized service\n\
                    • Transparency in all policies and pricing\n\
                    • Quick and fair claims processing\n\
                    • Community involvement and giving back\n\n\
                    We're proud to maintain an A+ rating with the Better Business Bureau and 4.8/5 \
                    stars from customer reviews. Our team of 100+ experienced professionals is \
                    dedicated to helping you find the right coverage for your specific needs."
                .into(),
            agents: vec![
                AgentProfile {
                    name: "Sarah Johnson".into(),
                    title: "Senior Advisor".into(),
                    summary: "15+ years experience, specializes in family and business insurance"
                        .into(),
                    direct_line: "(555) 123-4568".into(),
                    pitch: "Sarah has over 15 years of experience and can provide personalized advice."
                        .into(),
                },
                AgentProfile {
                    name: "Michael Chen".into(),
                    title: "Auto & Home Expert".into(),
                    summary: "10+ years experience with property protection".into(),
                    direct_line: "(555) 123-4569".into(),
                    pitch: "Michael has over 10 years of experience protecting homes and vehicles."
                        .into(),
                },
                AgentProfile {
                    name: "Lisa Rodriguez".into(),
                    title: "Health Insurance Specialist".into(),
                    summary: "Expert in individual and group health plans".into(),
                    direct_line: "(555) 123-4570".into(),
                    pitch: "Lisa is an expert in individual and group health plans.".into(),
                },
            ],
        }
    }
}

impl AgencyProfile {
    /// Load a profile from a JSON file; missing fields keep their defaults.
    pub async fn from_json_file(path: &Path) -> Result<Self, FaqRagError> {
        let raw = tokio::fs::read_to_string(path).await?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// The sentence used for the synthetic overview record.
    pub fn overview_sentence(&self) -> String {
        format!(
            "{} offers Health Insurance, Auto Insurance, Home Insurance, and Life Insurance to meet your various protection needs.",
            self.name
        )
    }

    pub fn featured_agent(&self) -> Option<&AgentProfile> {
        self.agents.first()
    }
}
