//! valuekit - Tagged values, dot paths and URL-safe parameters
//!
//! Three small pieces that compose into a transport for structured data over
//! string-only channels such as URL query strings:
//!
//! - [`encode`]/[`decode`] tag booleans and numbers as strings (`bool!1`, `num!3`)
//! - [`flatten`]/[`expand`] convert nested maps to dot-path maps and back
//! - [`encode_uri_parameter`]/[`decode_uri_parameter`] wrap any value as
//!   URL-safe base64 JSON
//!
//! Alongside them sit case, date/number and URL helpers.
//!
//! # Example
//!
//! ```rust
//! use valuekit::{decode_object, encode_object, field, Map, Value};
//!
//! let obj: Map = [
//!     field("id", 7),
//!     field("user", Value::map([field("admin", true)])),
//! ]
//! .into_iter()
//! .collect();
//!
//! let flat = encode_object(&obj).unwrap();
//! assert_eq!(flat.get("user.admin"), Some(&Value::str("bool!1")));
//! assert_eq!(decode_object(&flat).unwrap(), obj);
//! ```

mod types;
mod codec;
mod path;
mod json_bridge;
mod uri_param;
mod case;
mod format;
mod url;
mod error;

pub use types::*;
pub use codec::*;
pub use path::*;
pub use json_bridge::*;
pub use uri_param::*;
pub use case::*;
pub use format::*;
pub use url::*;
pub use error::*;
