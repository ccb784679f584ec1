//! Helper functions shared by the generator and templates

mod url;

pub use url::*;
