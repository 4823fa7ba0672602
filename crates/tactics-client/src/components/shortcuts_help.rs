//! Static keyboard reference.

use yew::prelude::*;

const SHORTCUTS: [(&str, &str); 3] = [
    ("F", "Toggle arrow tool"),
    ("R", "Toggle rectangle tool"),
    ("A", "Add a player"),
];

#[function_component(ShortcutsHelp)]
pub fn shortcuts_help() -> Html {
    html! {
        <aside class="shortcuts-help">
            <h3>{"Keyboard shortcuts"}</h3>
            <p>{"Plain key for team 1 (blue), Shift + key for team 2 (red)."}</p>
            <ul>
                { for SHORTCUTS.iter().map(|(key, label)| html! {
                    <li><kbd>{*key}</kbd>{" "}{*label}</li>
                }) }
            </ul>
        </aside>
    }
}
