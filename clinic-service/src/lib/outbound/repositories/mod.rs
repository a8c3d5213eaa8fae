pub mod credential;
pub mod physician;

pub use credential::PostgresCredentialStore;
pub use physician::PostgresPhysicianRepository;
