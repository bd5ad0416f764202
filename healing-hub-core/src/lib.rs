//! Pure text primitives shared by every healing-hub crate.
//!
//! Nothing in here touches storage: slug generation and uniqueness
//! resolution, plus the small string helpers the normalizer relies on.

pub mod slug;
pub mod text;

pub use slug::{SlugRegistry, base_slug_for, make_unique_slug, slugify};
pub use text::{non_blank, split_list, truncate_with_ellipsis};
