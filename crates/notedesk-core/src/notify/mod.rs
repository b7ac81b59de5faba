//! User-facing notification surface.
//!
//! Errors are reported through a blocking [`Notifier`] (alert/confirm).
//! Success messages are banners on the page, removed by timers from
//! [`banner`].

pub mod banner;
pub mod traits;

pub use banner::{schedule_dismissal, schedule_flash_dismissal};
pub use traits::Notifier;
