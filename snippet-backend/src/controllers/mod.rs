pub mod health;
pub mod notes;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use crate::config::Config;
    use crate::notes::NoteStore;
    use crate::AppState;

    pub fn app_state() -> AppState {
        AppState {
            store: Arc::new(NoteStore::open_in_memory().expect("Failed to open store")),
            config: Config::from_lookup(|_| None),
        }
    }
}
