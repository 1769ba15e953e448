pub mod repository;

pub use repository::InMemorySettingsRepository;
