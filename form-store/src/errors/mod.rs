pub mod form_store_error;
