//! Resource facade
//!
//! One file per resource kind. Each method shapes caller-supplied fields
//! into a [`Query`](crate::engine::Query) or a typed body struct, picks the
//! endpoint string, and delegates to the request engine. Unset optional
//! fields are omitted everywhere so the server applies its own defaults.
//!
//! List methods return the merged record batch; single-resource GETs come
//! back as a one-element batch. Write methods return the engine's
//! [`ApiOutcome`](crate::engine::ApiOutcome) with its decoded-or-raw duality.

mod activity_logs;
mod api_info;
mod articles;
mod asset_layouts;
mod asset_passwords;
mod assets;
mod companies;

pub use activity_logs::ActivityLogQuery;
pub use articles::{ArticleQuery, NewArticle};
pub use asset_layouts::{FieldType, LayoutField, NewAssetLayout};
pub use asset_passwords::{NewAssetPassword, PasswordQuery};
pub use assets::{AssetQuery, AssetUpdate, CompanyAsset, NewAsset};
pub use companies::CompanyQuery;

#[cfg(test)]
mod tests;
