//! URL handling: canonical path derivation and origin comparison
//!
//! Every page in a crawl run is identified by a canonical path, a
//! site-relative string derived from its URL. This module owns the
//! canonicalization rules and the same-origin check that keeps the
//! crawl inside the seed site.

mod canonical;
mod origin;

pub use canonical::{canonical_path, canonicalize};
pub use origin::Origin;
