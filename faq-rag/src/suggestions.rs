//! Follow-up suggestion appended to ranked answers.
//!
//! Keyword families are checked in order; when none matches, one entry of
//! [`GENERIC_SUGGESTIONS`] is chosen by the injected [`SuggestionPicker`].

use std::fmt::Debug;
use std::sync::LazyLock;

use rand::Rng;
use regex::Regex;

use crate::intent::ci;
use crate::structs::agency_profile::AgencyProfile;

pub const GENERIC_SUGGESTIONS: [&str; 5] = [
    "Would you like a personalized quote for this insurance?",
    "Do you have any specific questions about our coverage options?",
    "Would you like to speak with an agent for more detailed information?",
    "Can I help you compare different insurance plans we offer?",
    "Would you like to learn about our discount programs and savings opportunities?",
];

/// Chooses an index into a pool of `len` generic suggestions.
pub trait SuggestionPicker: Send + Sync + Debug {
    /// Must return a value in `0..len`; `len` is never zero.
    fn pick(&self, len: usize) -> usize;
}

/// Uniform random choice.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPicker;

impl SuggestionPicker for RandomPicker {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Always the same slot (wrapped into range). Used for deterministic replies.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedPicker(pub usize);

impl SuggestionPicker for FixedPicker {
    fn pick(&self, len: usize) -> usize {
        self.0 % len
    }
}

#[derive(Debug, Clone, Copy)]
enum Family {
    Quote,
    Coverage,
    Agent,
    Health,
    Auto,
    Home,
    Life,
    Claim,
}

static FAMILIES: LazyLock<Vec<(Regex, Family)>> = LazyLock::new(|| {
    vec![
        (ci("quote|price|cost|how much|premium|rate"), Family::Quote),
        (ci("coverage|protect|benefits|policy details"), Family::Coverage),
        (ci("agent|talk|speak|contact|representative|advisor"), Family::Agent),
        (ci("health|medical|doctor|hospital"), Family::Health),
        (ci("auto|car|vehicle"), Family::Auto),
        (ci("home|property|house"), Family::Home),
        (ci("life|beneficiary|death benefit"), Family::Life),
        (ci("claim|file a claim|report"), Family::Claim),
    ]
});

fn family_text(family: Family, p: &AgencyProfile) -> String {
    match family {
        Family::Quote => format!(
            "Would you like to get a personalized quote for this insurance? You can fill out our \
             form on the homepage or call us at {} for immediate assistance.",
            p.phone
        ),
        Family::Coverage => "Would you like to learn more about the specific coverage details or \
             compare with other insurance options we offer? Our agents can provide a detailed \
             comparison tailored to your needs."
            .to_string(),
        Family::Agent => match p.featured_agent() {
            Some(agent) => format!(
                "Would you like to speak with our agent {}? {} You can reach {} directly at {}.",
                agent.name,
                agent.pitch,
                first_name(&agent.name),
                agent.direct_line
            ),
            None => format!(
                "Would you like to speak with one of our agents? You can reach our team at {}.",
                p.phone
            ),
        },
        Family::Health => "Would you like to know more about our health insurance plans or get a \
             quote for health coverage? We offer individual, family, and group plans with various \
             deductible options."
            .to_string(),
        Family::Auto => "Would you like to learn about our auto insurance discounts or coverage \
             options for different vehicles? We offer special rates for safe drivers and \
             multi-policy holders."
            .to_string(),
        Family::Home => "Would you like to know what specific events and damages our home \
             insurance covers? We can also discuss optional coverages like flood insurance or \
             valuable items protection."
            .to_string(),
        Family::Life => "Would you like to discuss how our life insurance can be tailored to your \
             family's specific needs? We offer both term and permanent life insurance solutions."
            .to_string(),
        Family::Claim => "Would you like information on how to file a claim? Our claims process \
             is quick and easy, with 24/7 support available."
            .to_string(),
    }
}

fn first_name(full: &str) -> &str {
    full.split_whitespace().next().unwrap_or(full)
}

/// Follow-up line for a (lowercased) query.
pub fn follow_up(query: &str, profile: &AgencyProfile, picker: &dyn SuggestionPicker) -> String {
    match FAMILIES.iter().find(|(re, _)| re.is_match(query)) {
        Some((_, family)) => family_text(*family, profile),
        None => {
            let slot = picker.pick(GENERIC_SUGGESTIONS.len()).min(GENERIC_SUGGESTIONS.len() - 1);
            GENERIC_SUGGESTIONS[slot].to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn families_in_order() {
        let p = AgencyProfile::default();
        let pick = FixedPicker(0);

        // "rate" (quote) beats "coverage"
        assert!(follow_up("coverage rates", &p, &pick).starts_with("Would you like to get a personalized quote"));
        assert!(follow_up("what benefits", &p, &pick).contains("specific coverage details"));
        assert_eq!(
            follow_up("can i talk to someone", &p, &pick),
            "Would you like to speak with our agent Sarah Johnson? Sarah has over 15 years of \
             experience and can provide personalized advice. You can reach Sarah directly at \
             (555) 123-4568."
        );
        assert!(follow_up("doctor visits", &p, &pick).contains("health insurance plans"));
        assert!(follow_up("my car", &p, &pick).contains("auto insurance discounts"));
        assert!(follow_up("my house", &p, &pick).contains("home insurance covers"));
        assert!(follow_up("beneficiary rules", &p, &pick).contains("term and permanent"));
        assert!(follow_up("report", &p, &pick).contains("how to file a claim"));
    }

    #[test]
    fn generic_pool_uses_picker() {
        let p = AgencyProfile::default();
        for i in 0..7 {
            let s = follow_up("zzz", &p, &FixedPicker(i));
            assert_eq!(s, GENERIC_SUGGESTIONS[i % GENERIC_SUGGESTIONS.len()]);
        }
        let random = follow_up("zzz", &p, &RandomPicker);
        assert!(GENERIC_SUGGESTIONS.contains(&random.as_str()));
    }

    #[test]
    fn agent_suggestion_without_agents_falls_back_to_main_line() {
        let p = AgencyProfile {
            agents: Vec::new(),
            ..AgencyProfile::default()
        };
        assert!(follow_up("agent", &p, &FixedPicker(0)).contains("(555) 123-4567"));
    }
}
