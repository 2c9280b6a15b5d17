use gloo_storage::{LocalStorage, Storage};

const ACCESS_TOKEN_KEY: &str = "accessToken";

/// Where the access token lives between page loads.
///
/// The login flow only sees this trait, so tests can swap the browser's
/// local storage for an in-memory map.
pub trait TokenStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn remove(&self);
}

/// `TokenStore` over the browser's local storage.
pub struct BrowserTokens;

impl TokenStore for BrowserTokens {
    fn get(&self) -> Option<String> {
        LocalStorage::get(ACCESS_TOKEN_KEY).ok()
    }

    fn set(&self, token: &str) {
        if let Err(e) = LocalStorage::set(ACCESS_TOKEN_KEY, token) {
            log::warn!("failed to persist access token: {}", e);
        }
    }

    fn remove(&self) {
        LocalStorage::delete(ACCESS_TOKEN_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::TokenStore;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemoryTokens(RefCell<Option<String>>);

    impl TokenStore for MemoryTokens {
        fn get(&self) -> Option<String> {
            self.0.borrow().clone()
        }

        fn set(&self, token: &str) {
            *self.0.borrow_mut() = Some(token.to_string());
        }

        fn remove(&self) {
            *self.0.borrow_mut() = None;
        }
    }

    #[test]
    fn set_then_get_round_trips() {
        let store = MemoryTokens::default();
        assert_eq!(store.get(), None);
        store.set("abc123");
        assert_eq!(store.get(), Some("abc123".to_string()));
    }

    #[test]
    fn remove_clears_the_token() {
        let store = MemoryTokens::default();
        store.set("abc123");
        store.remove();
        assert_eq!(store.get(), None);
    }
}
