//! Timed removal of banners.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

use crate::view::{BannerId, SharedPage, with_page};

/// Remove `banner` from the page after `delay`, if it is still there.
///
/// The task resolves to whether the banner was removed by this timer.
pub fn schedule_dismissal(page: SharedPage, banner: BannerId, delay: Duration) -> JoinHandle<bool> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let removed = with_page(&page, |p| p.dismiss_banner(banner));
        debug!(
            event = "core.notify.banner_dismissed",
            banner = banner,
            removed = removed
        );
        removed
    })
}

/// Close the flash messages rendered with the page after `delay`.
///
/// Only banners present when this is called are closed. The task resolves
/// to how many were still present at expiry.
pub fn schedule_flash_dismissal(page: SharedPage, delay: Duration) -> JoinHandle<usize> {
    let flashes = with_page(&page, |p| p.flash_banner_ids());
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let closed = with_page(&page, |p| {
            flashes.iter().filter(|id| p.dismiss_banner(**id)).count()
        });
        debug!(event = "core.notify.flash_dismissed", closed = closed);
        closed
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{BannerLevel, BannerOrigin, Page};

    #[tokio::test(start_paused = true)]
    async fn test_banner_removed_after_delay() {
        let page = Page::new().into_shared();
        let id = with_page(&page, |p| {
            p.push_banner(BannerLevel::Success, "Saved", BannerOrigin::Notification)
        });

        let handle = schedule_dismissal(page.clone(), id, Duration::from_millis(3000));

        tokio::time::sleep(Duration::from_millis(2999)).await;
        assert!(with_page(&page, |p| p.banner(id).is_some()));

        assert!(handle.await.unwrap());
        assert!(with_page(&page, |p| p.banners().is_empty()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_banner_closed_early_is_not_an_error() {
        let page = Page::new().into_shared();
        let id = with_page(&page, |p| {
            p.push_banner(BannerLevel::Success, "Saved", BannerOrigin::Notification)
        });
        let handle = schedule_dismissal(page.clone(), id, Duration::from_millis(3000));

        with_page(&page, |p| p.dismiss_banner(id));

        assert!(!handle.await.unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn test_flash_dismissal_spares_later_banners() {
        let page = Page::new()
            .with_flash(BannerLevel::Success, "Logged in!")
            .with_flash(BannerLevel::Danger, "Upload failed")
            .into_shared();

        let handle = schedule_flash_dismissal(page.clone(), Duration::from_millis(5000));
        let later = with_page(&page, |p| {
            p.push_banner(BannerLevel::Success, "Saved", BannerOrigin::Notification)
        });

        assert_eq!(handle.await.unwrap(), 2);
        let remaining: Vec<BannerId> =
            with_page(&page, |p| p.banners().iter().map(|b| b.id).collect());
        assert_eq!(remaining, vec![later]);
    }
}
