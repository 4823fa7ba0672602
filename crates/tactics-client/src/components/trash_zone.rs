//! Drop zone that deletes players.

use yew::prelude::*;
use yew_icons::{Icon, IconData};

#[derive(Properties, PartialEq)]
pub struct TrashZoneProps {
    /// Highlights the zone while a player is being dragged.
    pub armed: bool,
}

#[function_component(TrashZone)]
pub fn trash_zone(props: &TrashZoneProps) -> Html {
    html! {
        <div class={classes!("trash-zone", props.armed.then_some("armed"))}>
            <Icon data={IconData::LUCIDE_X} width="20px" height="20px" />
            <span>{"Drag here to delete"}</span>
        </div>
    }
}
