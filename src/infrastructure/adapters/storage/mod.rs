//! Storage Adapter - 文件系统资产存储实现

mod file_storage;

pub use file_storage::FileAssetStorage;
