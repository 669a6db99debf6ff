//! URL handling module
//!
//! This module implements the crawler's URL join policy: rewriting raw
//! hrefs discovered on a page into absolute URLs that can be fed back into
//! the frontier. The policy is deliberately naive byte-level concatenation
//! (see [`normalize`]) rather than standards-compliant resolution.

mod normalize;

pub use normalize::{is_absolute_http, normalize};
