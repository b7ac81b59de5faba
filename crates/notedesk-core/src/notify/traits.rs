/// Blocking dialogs shown to the user.
///
/// Both calls return only after the user has seen (or answered) the dialog.
pub trait Notifier: Send + Sync {
    /// Show an error message.
    fn alert(&self, message: &str);

    /// Ask a yes/no question. `false` means declined.
    fn confirm(&self, prompt: &str) -> bool;
}

impl<N: Notifier + ?Sized> Notifier for std::sync::Arc<N> {
    fn alert(&self, message: &str) {
        (**self).alert(message)
    }

    fn confirm(&self, prompt: &str) -> bool {
        (**self).confirm(prompt)
    }
}
