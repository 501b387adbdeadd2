//! Thread-local store for the page's toggle control registry.
//!
//! The registry persists across component re-renders, holding one entry
//! per filter control keyed by control id. Components read and mutate it
//! through `with`, then bump a version counter to trigger a re-render.
//! Thread-local to avoid synchronization overhead in WASM.

use std::cell::RefCell;

use mediabrowser_ui::ControlRegistry;

thread_local! {
    /// Registry that survives component lifetimes.
    pub static REGISTRY: RefCell<ControlRegistry> = RefCell::new(ControlRegistry::new());
}
