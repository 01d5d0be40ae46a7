pub mod engine;

pub use engine::Clients;
