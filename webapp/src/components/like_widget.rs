use std::rc::Rc;

use yew::prelude::*;

use crate::client::LikeClient;
use crate::error::LikeError;
use crate::fetch::FetchTransport;
use crate::like::{LikeAction, LikeResponse, LikeState};

/// Like button plus count, rendered with the same markup contract as the
/// server-rendered pages: `data-pk`/`data-is-liked` on the button and the
/// count in an element whose id is the pk.
pub struct LikeWidget {
    state: LikeState,
    liked_by_count: u64,
}

pub enum Msg {
    Toggle,
    Completed(LikeAction, Result<LikeResponse, LikeError>),
}

#[derive(Properties)]
pub struct LikeWidgetProps {
    pub pk: String,
    pub is_liked: bool,
    pub liked_by_count: u64,
    pub client: Rc<LikeClient<FetchTransport>>,
}

impl PartialEq for LikeWidgetProps {
    fn eq(&self, other: &Self) -> bool {
        self.pk == other.pk
            && self.is_liked == other.is_liked
            && self.liked_by_count == other.liked_by_count
            && Rc::ptr_eq(&self.client, &other.client)
    }
}

impl LikeWidget {
    pub fn new(is_liked: bool, liked_by_count: u64) -> Self {
        let state = if is_liked { LikeState::Liked } else { LikeState::NotLiked };
        LikeWidget { state, liked_by_count }
    }

    pub fn state(&self) -> LikeState {
        self.state
    }

    pub fn liked_by_count(&self) -> u64 {
        self.liked_by_count
    }

    /// Takes the finished request into account; returns whether to re-render.
    pub fn apply(&mut self, action: LikeAction, result: Result<LikeResponse, LikeError>) -> bool {
        match result {
            Ok(response) => {
                self.state = action.resulting_state();
                self.liked_by_count = response.liked_by_count;
                true
            }
            Err(_) => false,
        }
    }
}

impl Component for LikeWidget {
    type Message = Msg;
    type Properties = LikeWidgetProps;

    fn create(ctx: &Context<Self>) -> Self {
        LikeWidget::new(ctx.props().is_liked, ctx.props().liked_by_count)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Toggle => {
                let action = self.state.toggle_action();
                let client = Rc::clone(&ctx.props().client);
                let pk = ctx.props().pk.clone();
                ctx.link().send_future(async move {
                    let result = client.send(&pk, action).await;
                    Msg::Completed(action, result)
                });
                false
            }
            Msg::Completed(action, result) => {
                if let Err(err) = &result {
                    log::error!("{action} {} failed: {err}", ctx.props().pk);
                }
                self.apply(action, result)
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let pk = ctx.props().pk.clone();
        let onclick = ctx.link().callback(|_| Msg::Toggle);

        html! {
            <span class="like-widget">
                <button data-pk={pk.clone()} data-is-liked={self.state.flag()} {onclick}>
                    { self.state.glyph() }
                </button>
                <span id={pk}>{ self.liked_by_count.to_string() }</span>
            </span>
        }
    }
}
