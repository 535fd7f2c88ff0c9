pub mod agency_profile;
pub mod faq_config;
pub mod record;
pub mod scored_result;
