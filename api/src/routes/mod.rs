pub mod chat;
pub mod corpus;
pub mod forms;
pub mod health_route;
