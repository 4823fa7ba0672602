//! Player and ball tokens.

use tactics_core::{Delta, DragSubject, GrabZone, Position, Side, Token};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// A pointer press on a token: what, which part, and the client coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grab {
    pub subject: DragSubject,
    pub zone: GrabZone,
    pub client: (f64, f64),
}

impl Grab {
    fn from_event(subject: DragSubject, zone: GrabZone, event: &PointerEvent) -> Self {
        Self {
            subject,
            zone,
            client: (f64::from(event.client_x()), f64::from(event.client_y())),
        }
    }
}

/// Inline placement for a token, shifted by the live drag preview.
fn placement(position: Position, preview: Option<Delta>) -> String {
    let mut style = format!("left: {}px; top: {}px;", position.left, position.top);
    if let Some(offset) = preview {
        style.push_str(&format!(
            " transform: translate({}px, {}px); pointer-events: none;",
            offset.dx, offset.dy
        ));
    }
    style
}

#[derive(Properties, PartialEq)]
pub struct PlayerTokenProps {
    pub side: Side,
    pub token: Token,
    pub preview: Option<Delta>,
    pub on_grab: Callback<Grab>,
    pub on_rename: Callback<String>,
}

#[function_component(PlayerToken)]
pub fn player_token(props: &PlayerTokenProps) -> Html {
    let subject = DragSubject::Player {
        side: props.side,
        id: props.token.id,
    };

    let on_glyph_down = {
        let on_grab = props.on_grab.clone();
        Callback::from(move |e: PointerEvent| {
            e.prevent_default();
            on_grab.emit(Grab::from_event(subject, GrabZone::Glyph, &e));
        })
    };

    let on_label_down = {
        let on_grab = props.on_grab.clone();
        Callback::from(move |e: PointerEvent| {
            e.stop_propagation();
            on_grab.emit(Grab::from_event(subject, GrabZone::NameLabel, &e));
        })
    };

    let on_input = {
        let on_rename = props.on_rename.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_rename.emit(input.value());
        })
    };

    html! {
        <div
            class={classes!(
                "player-token",
                format!("player-token-{}", props.side),
                props.preview.is_some().then_some("dragging")
            )}
            style={placement(props.token.position, props.preview)}
        >
            <div
                class="player-glyph"
                style={format!("background: {};", props.side.color())}
                onpointerdown={on_glyph_down}
            >
                {props.token.id}
            </div>
            <input
                class="player-name"
                type="text"
                value={props.token.name.clone()}
                onpointerdown={on_label_down}
                oninput={on_input}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BallTokenProps {
    pub position: Position,
    pub preview: Option<Delta>,
    pub on_grab: Callback<Grab>,
}

#[function_component(BallToken)]
pub fn ball_token(props: &BallTokenProps) -> Html {
    let on_down = {
        let on_grab = props.on_grab.clone();
        Callback::from(move |e: PointerEvent| {
            e.prevent_default();
            on_grab.emit(Grab::from_event(DragSubject::Ball, GrabZone::Glyph, &e));
        })
    };

    html! {
        <div
            class={classes!("ball-token", props.preview.is_some().then_some("dragging"))}
            style={placement(props.position, props.preview)}
            onpointerdown={on_down}
        />
    }
}
