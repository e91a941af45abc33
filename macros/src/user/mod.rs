//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(Layout)]` | on struct/enum | Generate the type descriptor |

mod layout;

pub use layout::expand_derive_layout;
