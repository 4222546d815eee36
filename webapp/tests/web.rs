#![cfg(target_arch = "wasm32")]

use async_trait::async_trait;
use tweet_like::app::{bind_like_buttons, load_config, mount_like_widgets, CONFIG_ATTRIBUTE};
use tweet_like::dom::{CountDisplay, CountDisplays, LikeTarget};
use tweet_like::like::{LIKED_GLYPH, NOT_LIKED_GLYPH};
use tweet_like::{toggle_like, LikeClient, LikeConfig, LikeError, LikeRequest, Transport};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

struct Fixed(&'static str);

#[async_trait(?Send)]
impl Transport for Fixed {
    async fn post(&self, _request: &LikeRequest) -> Result<String, LikeError> {
        Ok(self.0.to_string())
    }
}

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn mount(html: &str) -> HtmlElement {
    let document = document();
    let root = document
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    root.set_inner_html(html);
    document.body().unwrap().append_child(&root).unwrap();
    root
}

// Yew renders from its scheduler, so let a timer turn pass before looking.
async fn next_tick() {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 10)
            .unwrap();
    });
    wasm_bindgen_futures::JsFuture::from(promise).await.unwrap();
}

fn element(id_selector: &str) -> HtmlElement {
    document()
        .query_selector(id_selector)
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
}

#[wasm_bindgen_test]
fn dataset_maps_to_like_target() {
    let root = mount(r#"<button class="t1" data-pk="101" data-is-liked="false">x</button>"#);
    let button = element("button.t1");

    assert_eq!(button.pk().as_deref(), Some("101"));
    assert_eq!(button.is_liked().as_deref(), Some("false"));

    button.set_is_liked("true").unwrap();
    button.set_content(LIKED_GLYPH);
    assert_eq!(button.get_attribute("data-is-liked").as_deref(), Some("true"));
    assert_eq!(button.inner_html(), LIKED_GLYPH);

    root.remove();
}

#[wasm_bindgen_test]
fn document_finds_display_by_pk() {
    let root = mount(r#"<span id="202">1</span>"#);

    let display = document().count_display("202").unwrap();
    display.set_count(12);
    assert_eq!(element("span[id='202']").inner_html(), "12");
    assert!(document().count_display("no-such-id").is_none());

    root.remove();
}

#[wasm_bindgen_test]
async fn toggle_updates_real_dom() {
    let root = mount(
        r#"<button class="t3" data-pk="303" data-is-liked="false">&#9825;</button><span id="303">6</span>"#,
    );
    let button = element("button.t3");
    let client = LikeClient::new(Fixed(r#"{"liked_by_count": 7}"#), &LikeConfig::default(), None);

    toggle_like(&client, &button, &document()).await.unwrap();

    assert_eq!(button.get_attribute("data-is-liked").as_deref(), Some("true"));
    assert_eq!(button.inner_html(), LIKED_GLYPH);
    assert_eq!(element("span[id='303']").inner_html(), "7");

    root.remove();
}

#[wasm_bindgen_test]
fn config_attribute_overrides_defaults() {
    let body = document().body().unwrap();
    body.set_attribute(CONFIG_ATTRIBUTE, r#"{"namespace": "posts"}"#).unwrap();
    let (config, err) = load_config(&document());
    assert!(err.is_none());
    assert_eq!(config.namespace, "posts");

    body.set_attribute(CONFIG_ATTRIBUTE, "{broken").unwrap();
    let (config, err) = load_config(&document());
    assert!(err.is_some());
    assert_eq!(config, LikeConfig::default());

    body.remove_attribute(CONFIG_ATTRIBUTE).unwrap();
}

#[wasm_bindgen_test]
fn binds_plain_buttons_but_not_widget_roots() {
    let root = mount(
        r#"<button data-pk="404" data-is-liked="false"></button>
           <div data-like-widget data-pk="405" data-is-liked="true"></div>"#,
    );
    let client = std::rc::Rc::new(LikeClient::new(
        tweet_like::fetch::FetchTransport::new().unwrap(),
        &LikeConfig::default(),
        None,
    ));

    let bound = bind_like_buttons(&document(), &client).unwrap();
    assert!(bound >= 1);
    assert_eq!(
        document()
            .query_selector_all(tweet_like::app::LIKE_BUTTON_SELECTOR)
            .unwrap()
            .length(),
        bound
    );

    root.remove();
}

#[wasm_bindgen_test]
async fn widget_renders_button_and_count() {
    let root = mount(
        r#"<div data-like-widget data-pk="505" data-is-liked="true" data-liked-by-count="9"></div>
           <div data-like-widget data-pk="506" data-is-liked="false" data-liked-by-count="lots"></div>"#,
    );
    let client = std::rc::Rc::new(LikeClient::new(
        tweet_like::fetch::FetchTransport::new().unwrap(),
        &LikeConfig::default(),
        None,
    ));

    let mounted = mount_like_widgets(&document(), &client).unwrap();
    assert_eq!(mounted, 2);
    next_tick().await;

    let liked = element("[data-like-widget] button[data-pk='505']");
    assert_eq!(liked.get_attribute("data-is-liked").as_deref(), Some("true"));
    assert_eq!(liked.text_content().as_deref(), Some(LIKED_GLYPH));
    assert_eq!(element("span[id='505']").text_content().as_deref(), Some("9"));

    let not_liked = element("[data-like-widget] button[data-pk='506']");
    assert_eq!(not_liked.get_attribute("data-is-liked").as_deref(), Some("false"));
    assert_eq!(not_liked.text_content().as_deref(), Some(NOT_LIKED_GLYPH));
    assert_eq!(element("span[id='506']").text_content().as_deref(), Some("0"));

    root.remove();
}
