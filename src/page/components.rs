//! Leptos components the composer assembles sections from.

use leptos::prelude::*;

use super::markdown::render_markdown_html;
use crate::content::{InfoCard, ProseBlock, StatusIndicator};
use crate::geo::{RoutePreview, RouteProjection};

pub const MAP_WIDTH: f64 = 320.0;
pub const MAP_HEIGHT: f64 = 200.0;
pub const MAP_PADDING: f64 = 24.0;
const MARKER_RADIUS: &str = "6";

/// One entry of the tab bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabLink {
    pub name: String,
    pub href: String,
    pub active: bool,
}

/// Section tabs plus the theme toggle.
#[component]
pub fn TabBar(tabs: Vec<TabLink>, theme_href: String, theme_label: String) -> impl IntoView {
    view! {
        <nav class="tabs">
            {tabs
                .into_iter()
                .map(|tab| {
                    let class = if tab.active { "tabs__tab tabs__tab--active" } else { "tabs__tab" };
                    view! { <a class=class href=tab.href>{tab.name}</a> }
                })
                .collect::<Vec<_>>()}
            <a class="pill tabs__theme" href=theme_href>{theme_label}</a>
        </nav>
    }
}

/// Card with a title and static text. A single body entry is a paragraph,
/// anything else a bullet list.
#[component]
pub fn InfoCardView(card: InfoCard) -> impl IntoView {
    let InfoCard { title, level, weight, body } = card;

    let heading = match level {
        1 => view! { <h1 class="card__title">{title}</h1> }.into_any(),
        2 => view! { <h2 class="card__title">{title}</h2> }.into_any(),
        3 => view! { <h3 class="card__title">{title}</h3> }.into_any(),
        4 => view! { <h4 class="card__title">{title}</h4> }.into_any(),
        5 => view! { <h5 class="card__title">{title}</h5> }.into_any(),
        _ => view! { <h6 class="card__title">{title}</h6> }.into_any(),
    };

    let content = if body.len() == 1 {
        let text = body.into_iter().next().unwrap_or_default();
        view! { <p>{text}</p> }.into_any()
    } else {
        view! { <ul>{body.into_iter().map(|item| view! { <li>{item}</li> }).collect::<Vec<_>>()}</ul> }.into_any()
    };

    view! {
        <div class="card" style=format!("flex:{weight}")>
            {heading}
            <div class="card__body">{content}</div>
        </div>
    }
}

/// Titled Markdown prose.
#[component]
pub fn Prose(block: ProseBlock) -> impl IntoView {
    let rendered = render_markdown_html(&block.markdown);
    view! {
        <article class="prose">
            <h3>{block.heading}</h3>
            <div class="prose__body" inner_html=rendered></div>
        </article>
    }
}

/// Two-point route preview drawn as inline SVG.
#[component]
pub fn RouteMap(route: RoutePreview) -> impl IntoView {
    let projection = RouteProjection::fit(&route, MAP_WIDTH, MAP_HEIGHT, MAP_PADDING);
    let (start, end) = (projection.start, projection.end);

    let start_label = format!("Start {}", route.start);
    let end_label = format!("End {}", route.end);
    let distance = format!("{:.1} km", route.distance_km());

    view! {
        <figure class="route-map" data-start=route.start.to_string() data-end=route.end.to_string()>
            <svg class="route-map__svg" viewBox=projection.view_box() role="img">
                <line
                    class="route-map__line"
                    x1=svg_num(start.x)
                    y1=svg_num(start.y)
                    x2=svg_num(end.x)
                    y2=svg_num(end.y)
                ></line>
                <circle
                    class="route-map__marker route-map__marker--start"
                    cx=svg_num(start.x)
                    cy=svg_num(start.y)
                    r=MARKER_RADIUS
                ></circle>
                <circle
                    class="route-map__marker route-map__marker--end"
                    cx=svg_num(end.x)
                    cy=svg_num(end.y)
                    r=MARKER_RADIUS
                ></circle>
            </svg>
            <figcaption class="route-map__caption">
                <span class="route-map__start">{start_label}</span>
                <span class="route-map__end">{end_label}</span>
                <span class="pill route-map__distance">{distance}</span>
            </figcaption>
        </figure>
    }
}

/// Status placeholder box.
#[component]
pub fn StatusBox(status: StatusIndicator) -> impl IntoView {
    view! {
        <div class="bot status-box">
            <span class="status-box__label">{status.label()}</span>
        </div>
    }
}

fn svg_num(v: f64) -> String {
    format!("{v:.1}")
}
