use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, HtmlElement};

use crate::client::LikeClient;
use crate::components::like_widget::{LikeWidget, LikeWidgetProps};
use crate::config::LikeConfig;
use crate::cookie::document_cookie_header;
use crate::dom::LikeTarget;
use crate::error::LikeError;
use crate::fetch::FetchTransport;
use crate::handler::toggle_like;
use crate::like::LikeState;
use crate::logging;

/// `<body>` attribute holding a JSON [`LikeConfig`] override.
pub const CONFIG_ATTRIBUTE: &str = "data-like-config";
pub const LIKE_BUTTON_SELECTOR: &str = "[data-pk][data-is-liked]:not([data-like-widget])";
pub const LIKE_WIDGET_SELECTOR: &str = "[data-like-widget]";

pub type Client = Rc<LikeClient<FetchTransport>>;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("document not found"))?;

    let (config, config_error) = load_config(&document);
    logging::init(config.log_level());
    if let Some(err) = config_error {
        log::warn!("ignoring invalid {CONFIG_ATTRIBUTE}: {err}");
    }

    let transport = FetchTransport::new()?;
    let client = Rc::new(LikeClient::from_cookie_header(
        transport,
        &config,
        &document_cookie_header(),
    ));

    // Widgets render buttons matching the plain selector, so bind first.
    let buttons = bind_like_buttons(&document, &client)?;
    let widgets = mount_like_widgets(&document, &client)?;
    log::info!("bound {buttons} like buttons, mounted {widgets} like widgets");

    Ok(())
}

pub fn load_config(document: &Document) -> (LikeConfig, Option<serde_json::Error>) {
    let raw = document
        .body()
        .and_then(|body| body.get_attribute(CONFIG_ATTRIBUTE));

    match raw.as_deref().map(LikeConfig::from_json) {
        Some(Ok(config)) => (config, None),
        Some(Err(err)) => (LikeConfig::default(), Some(err)),
        None => (LikeConfig::default(), None),
    }
}

pub fn bind_like_buttons(document: &Document, client: &Client) -> Result<u32, LikeError> {
    let mut bound = 0;
    for button in query_html_elements(document, LIKE_BUTTON_SELECTOR)? {
        let client = Rc::clone(client);
        let document = document.clone();
        let target = button.clone();

        let onclick = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            let client = Rc::clone(&client);
            let document = document.clone();
            let target = target.clone();
            spawn_local(async move {
                match toggle_like(&*client, &target, &document).await {
                    Ok(outcome) => log::debug!(
                        "{} {} -> {}",
                        outcome.action,
                        outcome.pk,
                        outcome.liked_by_count
                    ),
                    Err(err) => log::error!("like toggle failed: {err}"),
                }
            });
        });

        button
            .add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())
            .map_err(LikeError::dom)?;
        // The listener lives as long as the page.
        onclick.forget();
        bound += 1;
    }
    Ok(bound)
}

pub fn mount_like_widgets(document: &Document, client: &Client) -> Result<u32, LikeError> {
    let mut mounted = 0;
    for root in query_html_elements(document, LIKE_WIDGET_SELECTOR)? {
        let Some(pk) = root.pk().filter(|pk| !pk.is_empty()) else {
            log::warn!("like widget without data-pk skipped");
            continue;
        };
        let is_liked = LikeState::from_flag(root.is_liked().as_deref()) == LikeState::Liked;
        let liked_by_count = parse_liked_by_count(root.dataset().get("likedByCount").as_deref());

        let props = LikeWidgetProps {
            pk,
            is_liked,
            liked_by_count,
            client: Rc::clone(client),
        };
        let root: Element = root.into();
        yew::Renderer::<LikeWidget>::with_root_and_props(root, props).render();
        mounted += 1;
    }
    Ok(mounted)
}

/// `data-liked-by-count` of a widget root; missing or unparsable reads as 0.
pub fn parse_liked_by_count(raw: Option<&str>) -> u64 {
    raw.and_then(|count| count.trim().parse().ok()).unwrap_or(0)
}

fn query_html_elements(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, LikeError> {
    let nodes = document.query_selector_all(selector).map_err(LikeError::dom)?;
    Ok((0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}
