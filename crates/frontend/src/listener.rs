use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, KeyboardEvent};

/// A DOM event listener that is removed again when the guard is dropped.
///
/// Hold it in a hook (`use_hook(|| Rc::new(...))`) so its lifetime matches
/// the component that registered it.
pub struct ScopedListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl ScopedListener {
    pub fn on_document(event: &'static str, handler: impl FnMut(Event) + 'static) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Self::attach(EventTarget::from(document), event, handler)
    }

    pub fn on_window(event: &'static str, handler: impl FnMut(Event) + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        Self::attach(EventTarget::from(window), event, handler)
    }

    fn attach(
        target: EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Option<Self> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(ScopedListener {
            target,
            event,
            callback,
        })
    }
}

impl Drop for ScopedListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// `KeyboardEvent.key` of a DOM event, if it is a keyboard event.
pub fn event_key(event: &Event) -> Option<String> {
    event.dyn_ref::<KeyboardEvent>().map(|k| k.key())
}

/// Keys that close an open overlay. Older browsers report `Esc`.
pub fn is_dismiss_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}
