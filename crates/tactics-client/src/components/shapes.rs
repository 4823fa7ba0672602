//! Arrow and rectangle rendering.

use tactics_core::{Rect, Shape, ShapeKind, ShapeRef};
use yew::prelude::*;
use yew_icons::{Icon, IconData};

/// Alpha suffix applied to rectangle fills.
const FILL_ALPHA: &str = "40";

/// Hex form of a tool colour.
fn hex_color(color: &str) -> &str {
    match color {
        "blue" => "#0000ff",
        "red" => "#ff0000",
        "black" => "#000000",
        other => other,
    }
}

/// Translucent fill for a rectangle drawn in `color`.
pub fn rectangle_fill(color: &str) -> String {
    let hex = hex_color(color);
    if hex.starts_with('#') && hex.len() == 7 {
        format!("{hex}{FILL_ALPHA}")
    } else {
        hex.to_string()
    }
}

fn rect_style(rect: Rect) -> String {
    format!(
        "left: {}px; top: {}px; width: {}px; height: {}px;",
        rect.left, rect.top, rect.width, rect.height
    )
}

#[derive(Properties, PartialEq)]
pub struct ShapeViewProps {
    pub shape: Shape,
    pub shape_ref: ShapeRef,
    pub hovered: bool,
    pub on_delete: Callback<ShapeRef>,
}

/// One annotation plus its delete control.
#[function_component(ShapeView)]
pub fn shape_view(props: &ShapeViewProps) -> Html {
    let shape = &props.shape;
    let frame = shape.frame();

    let body = match shape.kind {
        ShapeKind::Arrow => {
            let marker_id = format!("arrowhead-{}", props.shape_ref.index);
            html! {
                <svg
                    class="shape arrow"
                    style={rect_style(frame.bounds)}
                    width={frame.bounds.width.to_string()}
                    height={frame.bounds.height.to_string()}
                >
                    <defs>
                        <marker
                            id={marker_id.clone()}
                            markerWidth="10"
                            markerHeight="7"
                            refX="10"
                            refY="3.5"
                            orient="auto"
                        >
                            <polygon points="0 0, 10 3.5, 0 7" fill={shape.color.clone()} />
                        </marker>
                    </defs>
                    <line
                        x1={frame.from.x.to_string()}
                        y1={frame.from.y.to_string()}
                        x2={frame.to.x.to_string()}
                        y2={frame.to.y.to_string()}
                        stroke={shape.color.clone()}
                        stroke-width="3"
                        marker-end={format!("url(#{marker_id})")}
                    />
                </svg>
            }
        }
        ShapeKind::Rectangle => html! {
            <div
                class="shape rectangle"
                style={format!(
                    "{} border: 2px solid {}; background: {};",
                    rect_style(frame.bounds),
                    shape.color,
                    rectangle_fill(&shape.color)
                )}
            />
        },
    };

    let delete = (props.hovered && !shape.drawing).then(|| {
        let on_delete = props.on_delete.clone();
        let shape_ref = props.shape_ref;
        let onclick = Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_delete.emit(shape_ref);
        });
        let onpointerdown = Callback::from(|e: PointerEvent| e.stop_propagation());
        html! {
            <button
                class="shape-delete"
                style={rect_style(shape.delete_button())}
                title="Delete"
                {onclick}
                {onpointerdown}
            >
                <Icon data={IconData::LUCIDE_X} width="14px" height="14px" />
            </button>
        }
    });

    html! {
        <>
            {body}
            {for delete}
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn test_rectangle_fill() {
        assert_eq!(rectangle_fill("blue"), "#0000ff40");
        assert_eq!(rectangle_fill("red"), "#ff000040");
        assert_eq!(rectangle_fill("#123456"), "#12345640");
        assert_eq!(rectangle_fill("rgba(0, 0, 0, 0.2)"), "rgba(0, 0, 0, 0.2)");
    }
}
