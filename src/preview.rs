//! Short-lived preview URLs for the currently selected image.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// Route prefix previews are served under.
pub const PREVIEW_ROUTE: &str = "/preview";

/// Identifies one registered preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PreviewId(Uuid);

impl PreviewId {
    /// URL the page uses in its `<img>` tag.
    pub fn url(&self) -> String {
        format!("{PREVIEW_ROUTE}/{}", self.0)
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw).ok().map(Self)
    }
}

#[derive(Debug, Clone)]
pub struct PreviewEntry {
    pub mime_type: String,
    pub bytes: Arc<[u8]>,
}

/// In-memory registry of preview bytes.
///
/// Entries live until revoked; the controller revokes the previous entry
/// whenever a new image replaces it.
#[derive(Debug, Clone, Default)]
pub struct PreviewStore {
    entries: Arc<RwLock<HashMap<PreviewId, PreviewEntry>>>,
}

impl PreviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&self, mime_type: impl Into<String>, bytes: &[u8]) -> PreviewId {
        let id = PreviewId(Uuid::new_v4());
        let entry = PreviewEntry {
            mime_type: mime_type.into(),
            bytes: Arc::from(bytes),
        };
        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(id, entry);
        id
    }

    pub fn get(&self, id: PreviewId) -> Option<PreviewEntry> {
        self.entries
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(&id)
            .cloned()
    }

    /// Removes `id`. Returns false if it was already gone.
    pub fn revoke(&self, id: PreviewId) -> bool {
        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&id)
            .is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_get() {
        let store = PreviewStore::new();
        let id = store.create("image/png", b"png-bytes");

        let entry = store.get(id).unwrap();
        assert_eq!(entry.mime_type, "image/png");
        assert_eq!(&*entry.bytes, b"png-bytes");
        assert!(id.url().starts_with("/preview/"));
    }

    #[test]
    fn test_revoke() {
        let store = PreviewStore::new();
        let id = store.create("image/png", b"x");
        assert!(store.revoke(id));
        assert!(!store.revoke(id));
        assert!(store.get(id).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_url_round_trips_through_parse() {
        let store = PreviewStore::new();
        let id = store.create("image/gif", b"gif");
        let raw = id.url().trim_start_matches("/preview/").to_string();
        assert_eq!(PreviewId::parse(&raw), Some(id));
        assert_eq!(PreviewId::parse("not-a-uuid"), None);
    }
}
