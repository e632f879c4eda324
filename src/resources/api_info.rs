//! API info

use crate::client::HuduClient;
use crate::engine::Query;
use crate::error::Result;
use serde_json::Value;

impl HuduClient {
    /// Version and build date of the remote API, as a one-element batch
    pub fn get_api_info(&self) -> Result<Vec<Value>> {
        self.fetch("api_info", Query::new())
    }
}
