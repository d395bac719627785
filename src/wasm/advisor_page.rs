//! Advisor card for the signed-in user's group.

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, Event, HtmlImageElement, Window};

use super::auth::{alert, profiles, to_js};
use super::dom;
use crate::profile::AdvisorView;

const HOME: &str = "../index.html";

fn render(window: &Window, document: &Document) -> Result<(), JsValue> {
    let store = profiles(window).map_err(to_js)?;
    let user = store.current_user();
    match AdvisorView::for_user(user.as_ref()) {
        AdvisorView::NoSession => {
            alert(window, "Сессия истекла. Войдите заново.");
            window.location().set_href(HOME)
        }
        AdvisorView::Unassigned => {
            let group = user.and_then(|u| u.group).unwrap_or_default();
            log::warn!("no advisor for group {group:?}");
            if let Some(el) = dom::by_id(document, "adv-name") {
                dom::set_text(&el, "Эдвайзер не назначен");
            }
            Ok(())
        }
        AdvisorView::Assigned(advisor) => {
            for (id, value) in advisor.fields() {
                if let Some(el) = dom::by_id(document, id) {
                    dom::set_text(&el, value);
                }
            }
            if let Some(img) = document
                .get_element_by_id("adv-photo")
                .and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
            {
                img.set_src(advisor.photo());
            }
            Ok(())
        }
    }
}

pub fn mount(window: &Window, document: &Document) -> Result<(), JsValue> {
    if let Some(back) = document.get_element_by_id("goBack") {
        let window = window.clone();
        let cb = Closure::wrap(Box::new(move |e: Event| {
            e.prevent_default();
            if let Err(err) = window.location().set_href(HOME) {
                log::warn!("back link: {err:?}");
            }
        }) as Box<dyn FnMut(Event)>);
        back.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }
    render(window, document)
}
