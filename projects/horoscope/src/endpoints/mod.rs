pub mod setup_db;
pub mod users;
