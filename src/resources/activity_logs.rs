//! Activity logs

use crate::client::HuduClient;
use crate::engine::Query;
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::warn;

/// Filters for listing activity logs
#[derive(Debug, Clone, Default)]
pub struct ActivityLogQuery {
    pub user_id: Option<i64>,
    pub user_email: Option<String>,
    /// Only honored together with `resource_type`
    pub resource_id: Option<i64>,
    /// Only honored together with `resource_id`; e.g. `Asset`,
    /// `AssetPassword`, `Company`, `Article`
    pub resource_type: Option<String>,
    pub action_message: Option<String>,
    /// Sent to the server in ISO 8601
    pub start_date: Option<DateTime<Utc>>,
}

impl HuduClient {
    /// List activity logs matching the filters.
    ///
    /// `resource_id` and `resource_type` are only meaningful as a pair; a
    /// lone half is dropped with a warning rather than rejected.
    pub fn get_activity_logs(&self, filter: ActivityLogQuery) -> Result<Vec<Value>> {
        let ActivityLogQuery {
            user_id,
            user_email,
            mut resource_id,
            mut resource_type,
            action_message,
            start_date,
        } = filter;

        if resource_id.is_some() && resource_type.is_none() {
            warn!("dropping resource_id filter: it must be paired with resource_type");
            resource_id = None;
        }
        if resource_type.is_some() && resource_id.is_none() {
            warn!("dropping resource_type filter: it must be paired with resource_id");
            resource_type = None;
        }

        let mut query = Query::new();
        query.set_opt("user_id", user_id);
        query.set_opt("user_email", user_email);
        query.set_opt("resource_id", resource_id);
        query.set_opt("resource_type", resource_type);
        query.set_opt("action_message", action_message);
        query.set_opt("start_date", start_date.map(|date| date.to_rfc3339()));

        self.fetch("activity_logs", query)
    }
}
