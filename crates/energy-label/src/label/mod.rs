pub mod export;
pub mod rating;
mod router;
mod service;
pub mod tax;
pub mod views;

pub use router::label_router;
pub use service::LabelService;
