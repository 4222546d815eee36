//! The two DOM surfaces a toggle touches: the clicked button and the count
//! display whose id equals the tweet's pk.

use web_sys::{Document, Element, HtmlElement};

use crate::error::LikeError;

pub const PK_KEY: &str = "pk";
pub const IS_LIKED_KEY: &str = "isLiked";

pub trait LikeTarget {
    fn pk(&self) -> Option<String>;
    fn is_liked(&self) -> Option<String>;
    fn set_is_liked(&self, flag: &str) -> Result<(), LikeError>;
    fn set_content(&self, content: &str);
}

pub trait CountDisplay {
    fn set_count(&self, count: u64);
}

/// Lookup of count displays by tweet pk.
pub trait CountDisplays {
    type Display: CountDisplay;

    fn count_display(&self, pk: &str) -> Option<Self::Display>;
}

impl LikeTarget for HtmlElement {
    fn pk(&self) -> Option<String> {
        self.dataset().get(PK_KEY)
    }

    fn is_liked(&self) -> Option<String> {
        self.dataset().get(IS_LIKED_KEY)
    }

    fn set_is_liked(&self, flag: &str) -> Result<(), LikeError> {
        self.dataset().set(IS_LIKED_KEY, flag).map_err(LikeError::dom)
    }

    fn set_content(&self, content: &str) {
        self.set_inner_html(content);
    }
}

impl CountDisplay for Element {
    fn set_count(&self, count: u64) {
        self.set_inner_html(&count.to_string());
    }
}

impl CountDisplays for Document {
    type Display = Element;

    fn count_display(&self, pk: &str) -> Option<Element> {
        self.get_element_by_id(pk)
    }
}
