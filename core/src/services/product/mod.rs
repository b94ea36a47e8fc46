//! Product catalog service

mod service;


pub use service::ProductService;
