use std::sync::{Arc, Mutex};

use notedesk_protocol::{ResourceId, ResourceKind, Visibility};
use serde::Serialize;

use super::SharedPage;
use super::elements::{Banner, BannerId, BannerLevel, BannerOrigin, ShareButton, ViewElement};

/// The rendered page: a banner container followed by resource elements and
/// share buttons.
///
/// Banners are stored top-first; inserting a banner puts it at index 0.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Page {
    banners: Vec<Banner>,
    elements: Vec<ViewElement>,
    share_buttons: Vec<ShareButton>,
    #[serde(skip)]
    next_banner_id: BannerId,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap the page for injection into a dispatcher.
    pub fn into_shared(self) -> SharedPage {
        Arc::new(Mutex::new(self))
    }

    pub fn with_element(mut self, kind: ResourceKind, id: ResourceId) -> Self {
        self.add_element(kind, id);
        self
    }

    pub fn with_share_button(mut self, note_id: ResourceId, visibility: Visibility) -> Self {
        self.add_share_button(note_id, visibility);
        self
    }

    pub fn with_flash(mut self, level: BannerLevel, text: impl Into<String>) -> Self {
        self.push_banner(level, text, BannerOrigin::Flash);
        self
    }

    pub fn add_element(&mut self, kind: ResourceKind, id: ResourceId) {
        self.elements.push(ViewElement::new(kind, id));
    }

    pub fn add_share_button(&mut self, note_id: ResourceId, visibility: Visibility) {
        self.share_buttons
            .push(ShareButton::new(note_id, visibility));
    }

    pub fn elements(&self) -> &[ViewElement] {
        &self.elements
    }

    pub fn element(&self, kind: ResourceKind, id: &ResourceId) -> Option<&ViewElement> {
        self.elements.iter().find(|e| e.matches(kind, id))
    }

    pub fn contains_element(&self, kind: ResourceKind, id: &ResourceId) -> bool {
        self.element(kind, id).is_some()
    }

    pub fn share_buttons(&self) -> &[ShareButton] {
        &self.share_buttons
    }

    pub fn share_buttons_for<'a>(
        &'a self,
        note_id: &'a ResourceId,
    ) -> impl Iterator<Item = &'a ShareButton> + 'a {
        self.share_buttons
            .iter()
            .filter(move |b| &b.note_id == note_id)
    }

    pub fn banners(&self) -> &[Banner] {
        &self.banners
    }

    pub fn banner(&self, id: BannerId) -> Option<&Banner> {
        self.banners.iter().find(|b| b.id == id)
    }

    /// Set the opacity of the first element bound to `(kind, id)`.
    ///
    /// Returns `false` if no such element is on the page.
    pub fn set_opacity(&mut self, kind: ResourceKind, id: &ResourceId, opacity: f32) -> bool {
        match self.elements.iter_mut().find(|e| e.matches(kind, id)) {
            Some(element) => {
                element.opacity = opacity.clamp(0.0, 1.0);
                true
            }
            None => false,
        }
    }

    /// Remove the first element bound to `(kind, id)`. Other elements,
    /// including duplicates of the same key, are left in place.
    pub fn remove_element(&mut self, kind: ResourceKind, id: &ResourceId) -> Option<ViewElement> {
        let index = self.elements.iter().position(|e| e.matches(kind, id))?;
        Some(self.elements.remove(index))
    }

    /// Move every share button bound to `note_id` to `visibility`.
    ///
    /// Returns the number of buttons bound to the note.
    pub fn apply_visibility(&mut self, note_id: &ResourceId, visibility: Visibility) -> usize {
        let mut count = 0;
        for button in self
            .share_buttons
            .iter_mut()
            .filter(|b| &b.note_id == note_id)
        {
            button.visibility = visibility;
            count += 1;
        }
        count
    }

    /// Insert a banner at the top of the page.
    pub fn push_banner(
        &mut self,
        level: BannerLevel,
        text: impl Into<String>,
        origin: BannerOrigin,
    ) -> BannerId {
        self.next_banner_id += 1;
        let id = self.next_banner_id;
        self.banners.insert(
            0,
            Banner {
                id,
                level,
                text: text.into(),
                origin,
            },
        );
        id
    }

    /// Remove a banner if it is still present.
    pub fn dismiss_banner(&mut self, id: BannerId) -> bool {
        let before = self.banners.len();
        self.banners.retain(|b| b.id != id);
        self.banners.len() != before
    }

    pub fn flash_banner_ids(&self) -> Vec<BannerId> {
        self.banners
            .iter()
            .filter(|b| b.origin == BannerOrigin::Flash)
            .map(|b| b.id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> ResourceId {
        ResourceId::parse(raw).unwrap()
    }

    #[test]
    fn test_remove_element_removes_only_first_match() {
        let mut page = Page::new()
            .with_element(ResourceKind::Note, id("42"))
            .with_element(ResourceKind::Note, id("43"))
            .with_element(ResourceKind::Student, id("42"));

        let removed = page.remove_element(ResourceKind::Note, &id("42"));
        assert!(removed.is_some());
        assert_eq!(page.elements().len(), 2);
        assert!(page.contains_element(ResourceKind::Note, &id("43")));
        assert!(page.contains_element(ResourceKind::Student, &id("42")));
    }

    #[test]
    fn test_remove_missing_element_is_none() {
        let mut page = Page::new().with_element(ResourceKind::Note, id("1"));
        assert!(page.remove_element(ResourceKind::Note, &id("2")).is_none());
        assert_eq!(page.elements().len(), 1);
    }

    #[test]
    fn test_set_opacity() {
        let mut page = Page::new().with_element(ResourceKind::Teacher, id("3"));
        assert!(page.set_opacity(ResourceKind::Teacher, &id("3"), 0.5));
        assert_eq!(
            page.element(ResourceKind::Teacher, &id("3")).unwrap().opacity,
            0.5
        );
        assert!(!page.set_opacity(ResourceKind::Teacher, &id("4"), 0.5));
    }

    #[test]
    fn test_apply_visibility_updates_every_bound_button() {
        let mut page = Page::new()
            .with_share_button(id("7"), Visibility::Private)
            .with_share_button(id("8"), Visibility::Private)
            .with_share_button(id("7"), Visibility::Private);

        let updated = page.apply_visibility(&id("7"), Visibility::Public);
        assert_eq!(updated, 2);
        assert!(
            page.share_buttons_for(&id("7"))
                .all(|b| b.visibility == Visibility::Public)
        );
        assert!(
            page.share_buttons_for(&id("8"))
                .all(|b| b.visibility == Visibility::Private)
        );
    }

    #[test]
    fn test_banners_insert_at_top() {
        let mut page = Page::new().with_flash(BannerLevel::Info, "Welcome back");
        let id = page.push_banner(BannerLevel::Success, "Saved", BannerOrigin::Notification);

        assert_eq!(page.banners()[0].id, id);
        assert_eq!(page.banners()[1].text, "Welcome back");
        assert_eq!(page.flash_banner_ids().len(), 1);
    }

    #[test]
    fn test_dismiss_banner_is_idempotent() {
        let mut page = Page::new();
        let id = page.push_banner(BannerLevel::Success, "Saved", BannerOrigin::Notification);
        assert!(page.dismiss_banner(id));
        assert!(!page.dismiss_banner(id));
        assert!(page.banners().is_empty());
    }
}
