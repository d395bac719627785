use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Function;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Document, Window};

use crate::clock::FrameScheduler;
use crate::config::SceneConfig;
use crate::layout::LayoutSource;
use crate::scene::{self, AnimationContext};

mod advisor_page;
mod auth;
pub mod dom;
mod elevator;
mod logger;
mod profile_page;
mod render;

use dom::DomLayout;

fn listen_passive(window: &Window, event: &str, cb: &Function) -> Result<(), JsValue> {
    let opts = AddEventListenerOptions::new();
    opts.set_passive(true);
    window.add_event_listener_with_callback_and_add_event_listener_options(event, cb, &opts)
}

fn page() -> Result<(Window, Document), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    Ok((window, document))
}

/// Reads overrides from `<script id="floors-config" type="application/json">`.
fn load_config(document: &Document) -> SceneConfig {
    let text = document.get_element_by_id("floors-config").and_then(|el| el.text_content());
    let Some(text) = text else {
        return SceneConfig::default();
    };
    SceneConfig::from_json(&text).unwrap_or_else(|e| {
        log::warn!("{e}; using defaults");
        SceneConfig::default()
    })
}

/// Shows walls and elevator once the hero has scrolled away.
fn mount_chrome(window: &Window, document: &Document, margin: f64) -> Result<(), JsValue> {
    let walls = dom::query_doc(document, ".walls");
    let hero = dom::by_id(document, "parallax");
    let (Some(walls), Some(hero)) = (walls, hero) else {
        return Ok(());
    };
    let elevator = dom::query_doc(document, ".elevator");
    let layout = DomLayout::new(window.clone());

    let update = move || -> Result<(), JsValue> {
        let visible =
            scene::chrome_visible(layout.viewport().scroll_y, layout.span(&hero), margin);
        dom::toggle_class(&walls, "visible", visible)?;
        if let Some(elevator) = &elevator {
            dom::toggle_class(elevator, "visible", visible)?;
        }
        Ok(())
    };
    update()?;

    let cb = Closure::wrap(Box::new(move || {
        if let Err(e) = update() {
            log::warn!("chrome reveal: {e:?}");
        }
    }) as Box<dyn FnMut()>);
    listen_passive(window, "scroll", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let (window, document) = page()?;
    let cfg = load_config(&document);
    logger::init(cfg.level_filter());

    if document.get_element_by_id("profile-view").is_some() {
        return profile_page::mount(&window, &document);
    }
    if document.get_element_by_id("adv-name").is_some() {
        return advisor_page::mount(&window, &document);
    }

    let scene = dom::discover_scene(&document);
    log::info!("scene: {} floors, {} dividers", scene.floors.len(), scene.dividers.len());

    let ctx = Rc::new(RefCell::new(AnimationContext::new(cfg.clone())));
    {
        let ctx = ctx.clone();
        let cb = Closure::wrap(Box::new(move || ctx.borrow_mut().resize()) as Box<dyn FnMut()>);
        window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    mount_chrome(&window, &document, cfg.reveal_margin)?;
    auth::mount(&window, &document)?;
    elevator::mount(&window, &document, &scene, cfg.elevator.clone())?;

    let presenter = render::Presenter::discover(&document);
    let layout = DomLayout::new(window.clone());
    render::RafScheduler.run(Box::new(move || {
        let user = auth::current_user(&window);
        let frame = ctx.borrow_mut().tick(&layout, &scene, user.as_deref());
        presenter.present(&scene, &frame);
    }))
}
