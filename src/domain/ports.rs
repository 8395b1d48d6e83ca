use crate::utils::error::Result;
use std::path::PathBuf;

pub trait Storage {
    /// Writes `data` under the storage root and returns the full path.
    fn write_file(&self, path: &str, data: &[u8]) -> Result<PathBuf>;
}

pub trait ConfigProvider {
    fn output_path(&self) -> &str;
    fn dpi(&self) -> u32;
}
