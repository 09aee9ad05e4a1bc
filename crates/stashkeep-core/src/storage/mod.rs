mod database;
mod entry_repo;
mod user_repo;

pub use database::Database;
pub use entry_repo::EntryRepository;
pub use user_repo::UserRepository;
