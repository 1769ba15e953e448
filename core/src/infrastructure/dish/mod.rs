pub mod repository;

pub use repository::InMemoryDishRepository;
