//! SQLite Persistence - SQLite 数据库持久化实现

mod database;
mod profile_repo;

pub use database::*;
pub use profile_repo::*;
