//! Per-team toolbar: presets, players, drawing tools and formation files.

use tactics_core::{
    BoardAction, SessionAction, ShapeKind, Side, export_formation, import_formation,
};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_icons::{Icon, IconData};

use crate::files::{BrowserFile, download};
use crate::state::BoardHandle;

#[derive(Properties, PartialEq)]
pub struct TeamControlsProps {
    pub side: Side,
    pub board: BoardHandle,
    /// Receives user-facing error messages.
    pub on_error: Callback<String>,
}

#[function_component(TeamControls)]
pub fn team_controls(props: &TeamControlsProps) -> Html {
    let side = props.side;
    let session = &props.board.session;
    let dispatcher = props.board.dispatcher();
    let file_input_ref = use_node_ref();

    let color = side.color();
    let mode = session.annotations.mode();
    let count = session.board.count(side);
    let max = session.board.config().max_players_per_side;

    let on_formation_change = {
        let dispatcher = dispatcher.clone();
        let field_width = session.field_width;
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let name = select.value();
            if name.is_empty() {
                return;
            }
            dispatcher.dispatch(SessionAction::Board(BoardAction::ApplyFormation {
                side,
                name,
                field_width,
            }));
            select.set_value("");
        })
    };

    let on_add = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |_: MouseEvent| {
            dispatcher.dispatch(SessionAction::Board(BoardAction::AddToken(side)));
        })
    };

    let toggle = |tool: ShapeKind| {
        let dispatcher = dispatcher.clone();
        Callback::from(move |_: MouseEvent| {
            dispatcher.dispatch(SessionAction::ToggleTool {
                tool,
                color: color.to_string(),
            });
        })
    };

    let on_export = {
        let document = session.board.side_document(side);
        let on_error = props.on_error.clone();
        Callback::from(move |_: MouseEvent| {
            let result = export_formation(&document, side)
                .map_err(|e| e.to_string())
                .and_then(|file| download(&file));
            if let Err(message) = result {
                tracing::error!(%side, error = %message, "export failed");
                on_error.emit(format!("Could not export the formation: {message}"));
            }
        })
    };

    let on_import_click = {
        let file_input_ref = file_input_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = file_input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };

    let on_file_change = {
        let dispatcher = dispatcher.clone();
        let on_error = props.on_error.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                let dispatcher = dispatcher.clone();
                let on_error = on_error.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match import_formation(&BrowserFile(file)).await {
                        Ok(document) => dispatcher.dispatch(SessionAction::Import { side, document }),
                        Err(error) => on_error.emit(error.to_string()),
                    }
                });
            }
            input.set_value("");
        })
    };

    html! {
        <div class={classes!("team-controls", format!("team-controls-{side}"))}>
            <h2 style={format!("color: {color};")}>
                {format!("Team {}", side.number())}
                <span class="team-count">{format!(" ({count}/{max})")}</span>
            </h2>

            <select class="formation-select" onchange={on_formation_change}>
                <option value="" selected=true>{"Formation..."}</option>
                { for session.board.catalog().names().map(|name| html! {
                    <option value={name}>{name}</option>
                }) }
            </select>

            <div class="team-buttons">
                <button
                    class="meatball-btn"
                    onclick={on_add}
                    disabled={count >= max}
                    title="Add player"
                >
                    <Icon data={IconData::LUCIDE_PLUS} width="18px" height="18px" />
                </button>
                <button
                    class={classes!(
                        "meatball-btn",
                        mode.is_active(ShapeKind::Arrow, color).then_some("active")
                    )}
                    onclick={toggle(ShapeKind::Arrow)}
                    title="Draw arrow"
                >
                    {"↗"}
                </button>
                <button
                    class={classes!(
                        "meatball-btn",
                        mode.is_active(ShapeKind::Rectangle, color).then_some("active")
                    )}
                    onclick={toggle(ShapeKind::Rectangle)}
                    title="Draw rectangle"
                >
                    <Icon data={IconData::LUCIDE_SQUARE} width="18px" height="18px" />
                </button>
                <button class="meatball-btn" onclick={on_export} title="Export formation">
                    <Icon data={IconData::LUCIDE_DOWNLOAD} width="18px" height="18px" />
                </button>
                <button class="meatball-btn" onclick={on_import_click} title="Import formation">
                    <Icon data={IconData::LUCIDE_FOLDER_OPEN} width="18px" height="18px" />
                </button>
            </div>

            <input
                ref={file_input_ref}
                type="file"
                accept=".json,application/json"
                style="display: none"
                onchange={on_file_change}
            />
        </div>
    }
}
