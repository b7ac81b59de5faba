//! Local page model reconciled by the dispatcher.
//!
//! The page is owned by the caller and injected into the dispatcher as a
//! [`SharedPage`]. The dispatcher only touches the elements bound to the
//! resource of the operation in flight and never keeps element references
//! past one operation.

pub mod elements;
pub mod page;

use std::sync::{Arc, Mutex};

use tracing::warn;

pub use elements::{Banner, BannerId, BannerLevel, BannerOrigin, ShareButton, ViewElement};
pub use page::Page;

/// Page handle shared between the caller and the dispatcher.
///
/// The lock is never held across an `.await`.
pub type SharedPage = Arc<Mutex<Page>>;

/// Run `f` with exclusive access to the page.
///
/// A poisoned lock is recovered and logged.
pub fn with_page<R>(page: &SharedPage, f: impl FnOnce(&mut Page) -> R) -> R {
    let mut guard = match page.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            warn!(event = "core.view.lock_poisoned");
            poisoned.into_inner()
        }
    };
    f(&mut guard)
}
