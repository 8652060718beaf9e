/// Navigation actions consumed by the page.
pub trait Navigator {
    /// Return to the previous history entry.
    fn go_back(&self);
    /// Replace the current location.
    fn go_to(&self, path: &str);
}

pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn go_back(&self) {
        web_sys::window().unwrap().history().unwrap().back().unwrap();
    }

    fn go_to(&self, path: &str) {
        web_sys::window().unwrap().location().replace(path).unwrap();
    }
}
