pub mod chat_request;
pub mod chat_response;
pub mod chat_route;
pub mod search_request;
pub mod search_response;
pub mod search_route;
