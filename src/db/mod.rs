pub mod in_memory;
pub mod match_repository;
pub mod seed;

pub use in_memory::InMemoryMatchRepository;
pub use match_repository::MatchRepository;
