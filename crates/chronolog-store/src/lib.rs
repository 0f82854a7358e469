//! # ChronoLog Store
//!
//! Memo notes kept as one file per note under `<workspace>/.clog/memo/`.
//!
//! ```text
//! <workspace>/
//! └── .clog/
//!     └── memo/
//!         ├── 20250513T231243.clog
//!         └── 20250514T080000.clog
//! ```

mod error;
mod store;

pub use error::StoreError;
pub use store::{MemoDocument, MemoRef, MemoStore, MemoSummary, StoreConfig};
