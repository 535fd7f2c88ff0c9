//! FAQ retrieval and answering for the agency site chat widget.
//!
//! Site text is parsed into typed records, each vectorized into a sparse
//! unigram/bigram embedding. Queries are scored against every record with a
//! blended cosine/Jaccard similarity, re-ranked by heuristic boost rules,
//! and turned into a templated reply.

pub mod assistant;
pub mod boost_rules;
pub mod corpus;
pub mod embedding;
pub mod errors;
pub mod intent;
pub mod knowledge_base;
pub mod lexicon;
pub mod responder;
pub mod scrape;
pub mod search;
pub mod similarity;
pub mod structs;
pub mod suggestions;
pub mod templates;

pub use assistant::FaqAssistant;
pub use corpus::CorpusStore;
pub use embedding::{Embedding, embed};
pub use errors::faq_rag_error::FaqRagError;
pub use intent::{QueryIntent, QuestionType, classify_intent, classify_question_type};
pub use knowledge_base::{CorpusSource, KnowledgeBase};
pub use responder::Responder;
pub use scrape::build_corpus_text;
pub use similarity::similarity;
pub use structs::agency_profile::{AgencyProfile, AgentProfile};
pub use structs::faq_config::{CorpusConfig, FaqConfig, SearchConfig};
pub use structs::record::{ProductLine, Record, RecordKind};
pub use structs::scored_result::ScoredResult;
pub use suggestions::{FixedPicker, RandomPicker, SuggestionPicker};
