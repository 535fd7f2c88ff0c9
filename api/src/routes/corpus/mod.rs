pub mod save_content_request;
pub mod save_content_route;
