//! Document-level pointer tracking for token drags.

use gloo::events::EventListener;
use tactics_core::{Delta, DropTarget};
use wasm_bindgen::JsCast;
use web_sys::PointerEvent;
use yew::prelude::*;

/// Where and how far a drag ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragRelease {
    pub target: DropTarget,
    pub offset: Option<Delta>,
}

/// Resolves the drop zone under a client coordinate.
fn drop_target_at(x: f64, y: f64) -> DropTarget {
    #[allow(clippy::cast_possible_truncation)]
    let element = gloo::utils::document().element_from_point(x as f32, y as f32);
    let Some(element) = element else {
        return DropTarget::Outside;
    };
    if matches!(element.closest(".trash-zone"), Ok(Some(_))) {
        DropTarget::Trash
    } else if matches!(element.closest(".pitch"), Ok(Some(_))) {
        DropTarget::Pitch
    } else {
        DropTarget::Outside
    }
}

/// Hook for following a token drag across the whole document.
///
/// While `dragging` is set, `pointermove` and `pointerup` listeners are
/// attached to the document, so the gesture keeps tracking when the pointer
/// leaves the pitch. They are removed once the drag ends.
///
/// # Arguments
///
/// * `dragging` - Whether a gesture is live in the session.
/// * `on_move` - Receives the offset from the grab point on every move.
/// * `on_release` - Receives the drop zone under the pointer and the final
///   offset. The offset is `None` when no grab point was recorded.
///
/// Returns a callback that records the client coordinate a drag starts from.
///
/// # Example
///
/// ```ignore
/// let begin = use_pointer_drag(session.drag.is_dragging(), on_drag_move, on_drag_release);
/// let on_grab = Callback::from(move |grab: Grab| {
///     begin.emit(grab.client);
///     dispatcher.dispatch(SessionAction::DragStart { subject: grab.subject, zone: grab.zone });
/// });
/// ```
#[hook]
pub fn use_pointer_drag(
    dragging: bool,
    on_move: Callback<Delta>,
    on_release: Callback<DragRelease>,
) -> Callback<(f64, f64)> {
    let origin = use_mut_ref(|| None::<(f64, f64)>);
    let listeners = use_mut_ref(Vec::<EventListener>::new);

    let begin = {
        let origin = origin.clone();
        Callback::from(move |start: (f64, f64)| {
            *origin.borrow_mut() = Some(start);
        })
    };

    use_effect_with(
        (dragging, on_move, on_release),
        move |(dragging, on_move, on_release)| {
            listeners.borrow_mut().clear();

            if !*dragging {
                return;
            }

            let document = gloo::utils::document();
            let offset_from = |origin: Option<(f64, f64)>, event: &PointerEvent| {
                origin.map(|(x, y)| {
                    Delta::new(f64::from(event.client_x()) - x, f64::from(event.client_y()) - y)
                })
            };

            let move_listener = {
                let origin = origin.clone();
                let on_move = on_move.clone();
                EventListener::new(&document, "pointermove", move |event| {
                    let Some(event) = event.dyn_ref::<PointerEvent>() else {
                        return;
                    };
                    if let Some(offset) = offset_from(*origin.borrow(), event) {
                        on_move.emit(offset);
                    }
                })
            };

            let up_listener = {
                let origin = origin.clone();
                let on_release = on_release.clone();
                EventListener::new(&document, "pointerup", move |event| {
                    let Some(event) = event.dyn_ref::<PointerEvent>() else {
                        return;
                    };
                    let offset = offset_from(origin.borrow_mut().take(), event);
                    let target = drop_target_at(
                        f64::from(event.client_x()),
                        f64::from(event.client_y()),
                    );
                    tracing::debug!(?target, ?offset, "drag released");
                    on_release.emit(DragRelease { target, offset });
                })
            };

            listeners.borrow_mut().extend([move_listener, up_listener]);
        },
    );

    begin
}
