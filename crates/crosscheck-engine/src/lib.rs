//! Crosscheck Engine - the concrete comparison suite
//!
//! Wires the generic comparison core to the JCI backends:
//! - `contracts`: request and response shapes of the six operations
//! - `catalog`: the thirteen categories in their fixed order
//! - `scenarios`: scenario files mapped onto immutable requests
//! - `http`: the blocking HTTP `Backend`
//! - `config`: TOML configuration and environment credentials
//! - `suite`: loads everything up front, then runs it category by category

pub mod catalog;
pub mod config;
pub mod contracts;
pub mod http;
pub mod scenarios;
pub mod suite;

pub use catalog::Category;
pub use config::{Credentials, CrosscheckConfig};
pub use http::HttpBackend;
pub use scenarios::ScenarioSet;
pub use suite::Suite;
