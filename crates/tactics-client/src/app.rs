//! Root component.

use tactics_core::{BoardAction, DragSubject, SessionAction, ShortcutCommand, Side};
use yew::prelude::*;
use yew_icons::{Icon, IconData};

use crate::components::{Pitch, ShortcutsHelp, TeamControls, TrashZone};
use crate::hooks::use_keyboard_shortcuts;
use crate::state::BoardState;

#[function_component(App)]
pub fn app() -> Html {
    let board = use_reducer(BoardState::default);
    let error = use_state(|| None::<String>);

    let on_shortcut = use_callback(board.dispatcher(), |command: ShortcutCommand, dispatcher| {
        dispatcher.dispatch(SessionAction::Shortcut(command));
    });
    use_keyboard_shortcuts(on_shortcut, true);

    let on_error = {
        let error = error.clone();
        Callback::from(move |message: String| {
            tracing::warn!(%message, "showing error");
            error.set(Some(message));
        })
    };

    let on_dismiss = {
        let error = error.clone();
        Callback::from(move |_: MouseEvent| error.set(None))
    };

    let on_reset = {
        let dispatcher = board.dispatcher();
        Callback::from(move |_: MouseEvent| {
            dispatcher.dispatch(SessionAction::Board(BoardAction::ResetAll));
        })
    };

    let on_clear_shapes = {
        let dispatcher = board.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(SessionAction::ClearShapes))
    };

    let dragging_player = matches!(
        board.session.drag.subject(),
        Some(DragSubject::Player { .. })
    );

    html! {
        <div class="tactics-app">
            <header class="tactics-header">
                <h1>{"Tactics Board"}</h1>
                <div class="tactics-header-actions">
                    <button class="meatball-btn" onclick={on_clear_shapes} title="Clear drawings">
                        <Icon data={IconData::LUCIDE_X} width="18px" height="18px" />
                    </button>
                    <button class="meatball-btn" onclick={on_reset} title="Remove all players">
                        <Icon data={IconData::LUCIDE_REFRESH_CW} width="18px" height="18px" />
                    </button>
                </div>
            </header>

            if let Some(message) = (*error).clone() {
                <div class="error-banner" role="alert">
                    <span>{message}</span>
                    <button class="meatball-btn" onclick={on_dismiss} title="Dismiss">
                        <Icon data={IconData::LUCIDE_X} width="14px" height="14px" />
                    </button>
                </div>
            }

            <main class="tactics-main">
                <TeamControls side={Side::Team1} board={board.clone()} on_error={on_error.clone()} />
                <div class="pitch-column">
                    <Pitch board={board.clone()} />
                    <TrashZone armed={dragging_player} />
                </div>
                <TeamControls side={Side::Team2} board={board.clone()} {on_error} />
            </main>

            <ShortcutsHelp />
        </div>
    }
}
