//! Theme preference persistence and document application.
//!
//! A single preference string (`"light"` or `"dark"` by convention) lives
//! under a fixed `localStorage` key and is mirrored onto the `data-theme`
//! attribute of the `<html>` element. Stylesheets key off that attribute to
//! render the chosen theme.
//!
//! TRADE-OFFS
//! ==========
//! The stored value is applied verbatim with no validation, so an externally
//! written value survives until the next toggle. Controller logic is generic
//! over small capability traits; the browser implementations live behind the
//! `hydrate` feature and degrade to no-ops everywhere else, which keeps
//! server rendering deterministic and the logic testable natively.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::util::storage;

/// `localStorage` key holding the persisted preference.
pub const STORAGE_KEY: &str = "erms-theme";

/// Attribute on the document root that stylesheets select on.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// DOM id of the toggle control, when the host page provides one.
pub const TOGGLE_ID: &str = "themeToggle";

/// Canonical theme values. Nothing enforces them at the storage boundary.
pub const DARK: &str = "dark";
pub const LIGHT: &str = "light";

/// Theme reached by one activation, given the currently applied value.
///
/// Anything other than the literal `"dark"` (including an absent or
/// externally written value) counts as light and flips to `"dark"`.
#[must_use]
pub fn next_theme(current: Option<&str>) -> &'static str {
    if current == Some(DARK) { LIGHT } else { DARK }
}

/// Read/write access to the single persisted preference value.
pub trait PreferenceStore {
    /// Persisted value, if any. Absence is not an error.
    fn read(&self) -> Option<String>;

    /// Overwrite the persisted value. Best-effort.
    fn write(&self, theme: &str);
}

/// The document-root attribute that stylesheets render from.
pub trait PresentationTarget {
    /// Currently applied value, if the attribute is set.
    fn applied(&self) -> Option<String>;

    /// Set the attribute. Takes effect immediately via CSS selectors.
    fn apply(&self, theme: &str);
}

/// A control that delivers activation events to one subscribed handler.
pub trait ToggleControl {
    fn on_activate(&self, handler: Box<dyn FnMut()>);
}

/// Couples the preference store with the document attribute it mirrors.
#[derive(Clone)]
pub struct ThemeController<S, P> {
    store: S,
    target: P,
}

impl<S, P> ThemeController<S, P>
where
    S: PreferenceStore + Clone + 'static,
    P: PresentationTarget + Clone + 'static,
{
    pub fn new(store: S, target: P) -> Self {
        Self { store, target }
    }

    /// Persisted preference, if any. No validation is applied.
    #[must_use]
    pub fn preference(&self) -> Option<String> {
        self.store.read()
    }

    /// Apply `theme` to the document, then persist it.
    ///
    /// Accepts any string; attribute and store always end up equal.
    pub fn set_preference(&self, theme: &str) {
        self.target.apply(theme);
        self.store.write(theme);
    }

    /// One activation: flip to the opposite of the currently applied theme.
    pub fn toggle(&self) {
        let applied = self.target.applied();
        self.set_preference(next_theme(applied.as_deref()));
    }

    /// Page-ready entry point.
    ///
    /// Re-applies a stored preference when present; an empty store leaves the
    /// document untouched. When the host page carries a toggle control, one
    /// activation handler is subscribed; a missing control skips that step
    /// silently.
    pub fn initialize(&self, control: Option<&dyn ToggleControl>) {
        if let Some(stored) = self.preference() {
            self.set_preference(&stored);
        }
        let Some(control) = control else {
            return;
        };
        let controller = self.clone();
        control.on_activate(Box::new(move || controller.toggle()));
    }
}

/// `localStorage`-backed preference store under [`STORAGE_KEY`].
#[derive(Clone, Copy, Default)]
pub struct LocalStorageStore;

impl PreferenceStore for LocalStorageStore {
    fn read(&self) -> Option<String> {
        storage::load(STORAGE_KEY)
    }

    fn write(&self, theme: &str) {
        storage::save(STORAGE_KEY, theme);
    }
}

/// The live document root's [`THEME_ATTRIBUTE`].
#[derive(Clone, Copy, Default)]
pub struct DocumentRootTarget;

impl PresentationTarget for DocumentRootTarget {
    fn applied(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let doc = web_sys::window()?.document()?;
            doc.document_element()?.get_attribute(THEME_ATTRIBUTE)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn apply(&self, theme: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            {
                let _ = el.set_attribute(THEME_ATTRIBUTE, theme);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = theme;
        }
    }
}

/// Browser toggle control bound to a DOM element's `click` events.
#[cfg(feature = "hydrate")]
pub struct ClickControl {
    element: web_sys::Element,
}

#[cfg(feature = "hydrate")]
impl ClickControl {
    /// Look up the fixed [`TOGGLE_ID`] in the current document.
    #[must_use]
    pub fn find() -> Option<Self> {
        let doc = web_sys::window()?.document()?;
        doc.get_element_by_id(TOGGLE_ID)
            .map(|element| Self { element })
    }
}

#[cfg(feature = "hydrate")]
impl ToggleControl for ClickControl {
    fn on_activate(&self, handler: Box<dyn FnMut()>) {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let closure = Closure::wrap(handler);
        let _ = self
            .element
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        // Listener lives for the page's lifetime.
        closure.forget();
    }
}

/// Re-apply a stored preference and wire the page's toggle control.
///
/// Runs once at module start. Pages without a toggle control still get their
/// stored preference re-applied.
pub fn init() {
    let controller = ThemeController::new(LocalStorageStore, DocumentRootTarget);
    #[cfg(feature = "hydrate")]
    {
        let control = ClickControl::find();
        if control.is_none() {
            log::debug!("no #{TOGGLE_ID} control on this page; toggle not wired");
        }
        controller.initialize(control.as_ref().map(|c| c as &dyn ToggleControl));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        controller.initialize(None);
    }
}

/// Whether the live document currently has `"dark"` applied.
#[must_use]
pub fn is_dark_applied() -> bool {
    DocumentRootTarget.applied().as_deref() == Some(DARK)
}

/// One toggle activation against the live document.
pub fn toggle_document() {
    ThemeController::new(LocalStorageStore, DocumentRootTarget).toggle();
}
