//! The playing field: markings, tokens, ball and annotations.

use gloo::events::EventListener;
use tactics_core::{BoardAction, Delta, DragSubject, Point, SessionAction, ShapeRef, Side};
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::shapes::ShapeView;
use crate::components::token::{BallToken, Grab, PlayerToken};
use crate::hooks::{DragRelease, use_pointer_drag};
use crate::state::BoardHandle;

#[derive(Properties, PartialEq)]
pub struct PitchProps {
    pub board: BoardHandle,
}

/// Converts a pointer event to pitch-local coordinates.
fn local_point(node: &NodeRef, event: &PointerEvent) -> Option<Point> {
    let element = node.cast::<web_sys::Element>()?;
    let rect = element.get_bounding_client_rect();
    Some(Point::new(
        f64::from(event.client_x()) - rect.left(),
        f64::from(event.client_y()) - rect.top(),
    ))
}

fn measure_width(node: &NodeRef) -> Option<f64> {
    node.cast::<web_sys::HtmlElement>()
        .map(|element| f64::from(element.client_width()))
        .filter(|width| *width > 0.0)
}

#[function_component(Pitch)]
pub fn pitch(props: &PitchProps) -> Html {
    let board = &props.board;
    let session = &board.session;
    let pitch_ref = use_node_ref();
    let dispatcher = board.dispatcher();

    // Measure the rendered width on mount and whenever the window resizes.
    {
        let pitch_ref = pitch_ref.clone();
        let dispatcher = dispatcher.clone();
        use_effect_with((), move |_| {
            let report = move || {
                if let Some(width) = measure_width(&pitch_ref) {
                    dispatcher.dispatch(SessionAction::FieldResized { width });
                }
            };
            report();
            let listener = EventListener::new(&gloo::utils::window(), "resize", move |_| report());
            move || drop(listener)
        });
    }

    let on_drag_move = use_callback(dispatcher.clone(), |offset: Delta, dispatcher| {
        dispatcher.dispatch(SessionAction::DragMove(offset));
    });
    let on_drag_release = use_callback(dispatcher.clone(), |release: DragRelease, dispatcher| {
        dispatcher.dispatch(SessionAction::Drop {
            target: release.target,
            offset: release.offset,
        });
    });
    let begin_drag = use_pointer_drag(session.drag.is_dragging(), on_drag_move, on_drag_release);

    let on_grab = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |grab: Grab| {
            begin_drag.emit(grab.client);
            dispatcher.dispatch(SessionAction::DragStart {
                subject: grab.subject,
                zone: grab.zone,
            });
        })
    };

    let drawing_enabled = session.annotations.mode().is_drawing_enabled();
    let drawing_shape = session.annotations.current().is_some();

    let on_pointer_down = {
        let pitch_ref = pitch_ref.clone();
        let dispatcher = dispatcher.clone();
        Callback::from(move |e: PointerEvent| {
            if !drawing_enabled {
                return;
            }
            if let Some(point) = local_point(&pitch_ref, &e) {
                e.prevent_default();
                if let Some(target) = e.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
                    let _ = target.set_pointer_capture(e.pointer_id());
                }
                dispatcher.dispatch(SessionAction::PointerDown(point));
            }
        })
    };

    let on_pointer_move = {
        let pitch_ref = pitch_ref.clone();
        let dispatcher = dispatcher.clone();
        Callback::from(move |e: PointerEvent| {
            let Some(point) = local_point(&pitch_ref, &e) else {
                return;
            };
            if drawing_shape {
                dispatcher.dispatch(SessionAction::PointerMove(point));
            } else {
                dispatcher.dispatch(SessionAction::HoverAt(point));
            }
        })
    };

    let on_pointer_up = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |_: PointerEvent| {
            if drawing_shape {
                dispatcher.dispatch(SessionAction::PointerUp);
            }
        })
    };

    let on_delete_shape = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |shape: ShapeRef| {
            dispatcher.dispatch(SessionAction::DeleteShape {
                kind: shape.kind,
                index: shape.index,
            });
        })
    };

    let players = Side::ALL.into_iter().flat_map(|side| {
        session.board.tokens(side).map(move |token| (side, token))
    });

    let field = session.board.config().field;

    html! {
        <div
            ref={pitch_ref}
            class={classes!("pitch", drawing_enabled.then_some("drawing"))}
            style={format!("max-width: {}px; height: {}px;", field.width, field.height)}
            onpointerdown={on_pointer_down}
            onpointermove={on_pointer_move}
            onpointerup={on_pointer_up}
        >
            <div class="pitch-markings">
                <div class="halfway-line" />
                <div class="center-circle" />
                <div class="penalty-area penalty-area-left" />
                <div class="penalty-area penalty-area-right" />
            </div>

            { for session.annotations.iter().map(|(shape_ref, shape)| html! {
                <ShapeView
                    key={format!("{:?}-{}", shape_ref.kind, shape_ref.index)}
                    shape={shape.clone()}
                    {shape_ref}
                    hovered={session.annotations.hovered() == Some(shape_ref)}
                    on_delete={on_delete_shape.clone()}
                />
            }) }

            { for players.map(|(side, token)| {
                let id = token.id;
                let on_rename = {
                    let dispatcher = dispatcher.clone();
                    Callback::from(move |name: String| {
                        dispatcher.dispatch(SessionAction::Board(BoardAction::RenameToken {
                            side,
                            id,
                            name,
                        }));
                    })
                };
                html! {
                    <PlayerToken
                        key={format!("{side}-{id}")}
                        {side}
                        token={token.clone()}
                        preview={session.drag.preview_offset(DragSubject::Player { side, id })}
                        on_grab={on_grab.clone()}
                        {on_rename}
                    />
                }
            }) }

            <BallToken
                position={session.board.ball()}
                preview={session.drag.preview_offset(DragSubject::Ball)}
                on_grab={on_grab}
            />
        </div>
    }
}
