/// Blocking, user-visible notice
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Asks the user a yes/no question before a destructive action
pub trait Confirmer {
    fn confirm(&self, message: &str) -> bool;
}

/// `window.alert` / `window.confirm`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserDialogs;

impl Notifier for BrowserDialogs {
    fn notify(&self, message: &str) {
        gloo::dialogs::alert(message);
    }
}

impl Confirmer for BrowserDialogs {
    fn confirm(&self, message: &str) -> bool {
        gloo::dialogs::confirm(message)
    }
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn notify(&self, message: &str) {
        (**self).notify(message)
    }
}

impl<T: Confirmer + ?Sized> Confirmer for &T {
    fn confirm(&self, message: &str) -> bool {
        (**self).confirm(message)
    }
}
