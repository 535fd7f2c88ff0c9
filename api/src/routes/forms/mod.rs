pub mod inquiry_route;
pub mod save_csv_request;
pub mod save_csv_route;
