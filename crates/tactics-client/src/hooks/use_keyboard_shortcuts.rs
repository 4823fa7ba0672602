//! Board keyboard shortcuts.

use gloo::events::EventListener;
use tactics_core::{ShortcutCommand, resolve_shortcut};
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

/// Whether the key press is aimed at a form control, such as a name field.
fn is_input_element(event: &KeyboardEvent) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<web_sys::HtmlElement>().ok())
        .is_some_and(|element| {
            matches!(
                element.tag_name().to_lowercase().as_str(),
                "input" | "textarea" | "select"
            )
        })
}

/// Attaches a document-wide keydown listener that resolves shortcuts and
/// emits them on `on_command`.
#[hook]
pub fn use_keyboard_shortcuts(on_command: Callback<ShortcutCommand>, enabled: bool) {
    let listener_ref = use_mut_ref(|| None::<EventListener>);

    use_effect_with((on_command, enabled), move |(on_command, enabled)| {
        *listener_ref.borrow_mut() = None;

        if !*enabled {
            return;
        }

        let on_command = on_command.clone();
        let document = gloo::utils::document();

        let listener = EventListener::new(&document, "keydown", move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if event.repeat() || is_input_element(event) {
                return;
            }

            let ctrl = event.ctrl_key() || event.meta_key() || event.alt_key();
            if let Some(command) = resolve_shortcut(&event.key(), event.shift_key(), ctrl) {
                event.prevent_default();
                tracing::debug!(?command, "shortcut");
                on_command.emit(command);
            }
        });

        *listener_ref.borrow_mut() = Some(listener);
    });
}
