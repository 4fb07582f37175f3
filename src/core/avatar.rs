use crate::domain::model::{AvatarFile, AvatarSource};
use crate::domain::ports::FilePicker;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

const PREVIEW_SCHEME: &str = "preview://";

/// Process-local registry backing preview URIs, the in-crate analogue of
/// object URLs. Every `create` allocates a fresh `preview://N` entry; the
/// entry lives until its handle is dropped. Revoking an id that is already
/// gone is a benign no-op.
#[derive(Clone, Default)]
pub struct PreviewStore {
    inner: Arc<Mutex<StoreInner>>,
}

#[derive(Default)]
struct StoreInner {
    next_id: u64,
    live: HashMap<u64, Vec<u8>>,
}

fn lock(inner: &Mutex<StoreInner>) -> MutexGuard<'_, StoreInner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

impl PreviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&self, bytes: Vec<u8>) -> PreviewHandle {
        let mut inner = lock(&self.inner);
        let id = inner.next_id;
        inner.next_id += 1;
        inner.live.insert(id, bytes);
        tracing::debug!("allocated preview handle {}{}", PREVIEW_SCHEME, id);
        PreviewHandle {
            id,
            uri: format!("{}{}", PREVIEW_SCHEME, id),
            store: Arc::clone(&self.inner),
        }
    }

    /// Returns the bytes behind a live preview URI, or `None` for anything
    /// unknown, malformed, or already revoked.
    pub fn resolve(&self, uri: &str) -> Option<Vec<u8>> {
        let id = uri.strip_prefix(PREVIEW_SCHEME)?.parse::<u64>().ok()?;
        lock(&self.inner).live.get(&id).cloned()
    }

    pub fn live_count(&self) -> usize {
        lock(&self.inner).live.len()
    }
}

/// Owns one registry entry and revokes it on drop, so a handle can never be
/// released twice and can never outlive its owner.
pub struct PreviewHandle {
    id: u64,
    uri: String,
    store: Arc<Mutex<StoreInner>>,
}

impl PreviewHandle {
    pub fn uri(&self) -> &str {
        &self.uri
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        lock(&self.store).live.remove(&self.id);
    }
}

pub type ImageChangeFn = Box<dyn FnMut(Option<&AvatarFile>, Option<&str>) + Send>;

struct AvatarSelection {
    file: AvatarFile,
    preview: PreviewHandle,
}

/// Owns the lifecycle of a user-selected image: accepts a file, produces a
/// local preview URI, exposes removal, and guarantees the preview entry is
/// released on replacement, removal, and teardown.
///
/// The owner is told about every change through `on_image_change(file, uri)`,
/// with `(None, None)` signalling removal.
pub struct AvatarManager {
    store: PreviewStore,
    selection: Option<AvatarSelection>,
    picker: Option<Box<dyn FilePicker>>,
    on_image_change: ImageChangeFn,
}

impl AvatarManager {
    pub fn new(store: PreviewStore, on_image_change: ImageChangeFn) -> Self {
        Self {
            store,
            selection: None,
            picker: None,
            on_image_change,
        }
    }

    pub fn with_picker(mut self, picker: Box<dyn FilePicker>) -> Self {
        self.picker = Some(picker);
        self
    }

    /// Asks the attached picker for a file. A cancelled dialog is a no-op.
    pub fn open_picker(&mut self) {
        let picked = match self.picker.as_mut() {
            Some(picker) => picker.pick(),
            None => None,
        };
        self.handle_selection(picked);
    }

    pub fn handle_selection(&mut self, picked: Option<AvatarFile>) {
        match picked {
            Some(file) => self.select_file(file),
            None => tracing::debug!("file selection cancelled, nothing to do"),
        }
    }

    pub fn select_file(&mut self, file: AvatarFile) {
        // The superseded handle must be released before the new one exists.
        self.selection = None;

        let preview = self.store.create(file.bytes.clone());
        tracing::debug!("avatar selected: {} -> {}", file.name, preview.uri());
        (self.on_image_change)(Some(&file), Some(preview.uri()));
        self.selection = Some(AvatarSelection { file, preview });
    }

    /// Releases the current preview and clears the selection. No-op when
    /// nothing is selected.
    pub fn remove(&mut self) {
        if self.selection.take().is_none() {
            return;
        }
        tracing::debug!("avatar removed");
        (self.on_image_change)(None, None);
        if let Some(picker) = self.picker.as_mut() {
            picker.reset();
        }
    }

    pub fn has_selection(&self) -> bool {
        self.selection.is_some()
    }

    pub fn file_name(&self) -> Option<&str> {
        self.selection.as_ref().map(|s| s.file.name.as_str())
    }

    pub fn preview_uri(&self) -> Option<&str> {
        self.selection.as_ref().map(|s| s.preview.uri())
    }

    /// The live preview as `(uri, bytes)`, ready to display.
    pub fn resolve_preview(&self) -> Option<(String, Vec<u8>)> {
        let selection = self.selection.as_ref()?;
        let bytes = self.store.resolve(selection.preview.uri())?;
        Some((selection.preview.uri().to_string(), bytes))
    }

    pub fn avatar_source(&self) -> Option<AvatarSource> {
        self.selection
            .as_ref()
            .map(|s| AvatarSource::Upload(s.file.clone()))
    }
}
