use crate::client::{LikeClient, Transport};
use crate::dom::{CountDisplay, CountDisplays, LikeTarget};
use crate::error::LikeError;
use crate::like::{LikeAction, LikeState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikeOutcome {
    pub pk: String,
    pub action: LikeAction,
    pub state: LikeState,
    pub liked_by_count: u64,
}

/// Runs one like/unlike round trip for `target`.
///
/// Nothing is written to the DOM unless the response decoded. The button is
/// updated before the count display is looked up, so a page without a
/// display for `pk` still gets a consistent button and an `Err`.
pub async fn toggle_like<T, E, D>(
    client: &LikeClient<T>,
    target: &E,
    displays: &D,
) -> Result<LikeOutcome, LikeError>
where
    T: Transport,
    E: LikeTarget + ?Sized,
    D: CountDisplays + ?Sized,
{
    let pk = target
        .pk()
        .filter(|pk| !pk.is_empty())
        .ok_or(LikeError::MissingAttribute("data-pk"))?;
    let action = LikeAction::from_flag(target.is_liked().as_deref());

    let response = client.send(&pk, action).await?;

    let state = action.resulting_state();
    target.set_is_liked(state.flag())?;
    target.set_content(state.glyph());

    let display = displays
        .count_display(&pk)
        .ok_or_else(|| LikeError::MissingDisplay(pk.clone()))?;
    display.set_count(response.liked_by_count);

    Ok(LikeOutcome {
        pk,
        action,
        state,
        liked_by_count: response.liked_by_count,
    })
}
