// Request handling module entry point

pub mod router;
pub mod static_files;

pub use router::handle_request;
