use faq_rag::{QueryIntent, QuestionType, ScoredResult};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub intent: QueryIntent,
    pub question_type: QuestionType,
    pub results: Vec<ScoredResult>,
}
