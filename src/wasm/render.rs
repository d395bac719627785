use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Document, HtmlElement};

use super::dom::{query_doc, set_style};
use crate::clock::FrameScheduler;
use crate::parallax::LayerTransform;
use crate::scene::{Frame, Scene};
use crate::tilt::PanelTilt;

/// Ticks from `requestAnimationFrame` for the lifetime of the page.
pub struct RafScheduler;

impl FrameScheduler for RafScheduler {
    type Error = JsValue;

    fn run(self, mut frame: Box<dyn FnMut()>) -> Result<(), JsValue> {
        // `f` holds the animation-frame closure so that it can re-request
        // itself. Storing it inside an `Option` lets us create the `Closure`
        // first and then reach it from within itself.
        let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let g = f.clone();
        *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            frame();

            // schedule next
            if let Err(e) = request_frame(&f) {
                log::error!("animation loop stopped: {e:?}");
            }
        }) as Box<dyn FnMut()>));

        request_frame(&g)
    }
}

fn request_frame(f: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) -> Result<(), JsValue> {
    let slot = f.borrow();
    let cb = slot.as_ref().ok_or("animation frame closure dropped")?;
    window()
        .ok_or("no window")?
        .request_animation_frame(cb.as_ref().unchecked_ref())?;
    Ok(())
}

/// Writes frames to the page's style attributes.
pub struct Presenter {
    background: Option<HtmlElement>,
    mid: Option<HtmlElement>,
    gradient: Option<HtmlElement>,
    top: Option<HtmlElement>,
}

impl Presenter {
    pub fn discover(document: &Document) -> Self {
        Self {
            background: query_doc(document, ".bg-img"),
            mid: query_doc(document, ".mid-img"),
            gradient: query_doc(document, ".mid-gradient"),
            top: query_doc(document, ".top-img"),
        }
    }

    pub fn present(&self, scene: &Scene<HtmlElement>, frame: &Frame) {
        self.present_parallax(frame);

        for (divider, tilt) in scene.dividers.iter().zip(&frame.tilts) {
            let (Some(panel), Some(tilt)) = (&divider.panel, tilt) else { continue };
            if let Some(pivot) = tilt.pivot {
                set_style(panel, "transform-origin", &PanelTilt::origin_css(pivot));
            }
            set_style(panel, "transform", &tilt.transform_css());
        }

        if let (Some(i), Some(shadow)) = (frame.active_floor, &frame.shadow) {
            if let Some(card) = &scene.floors[i].card {
                set_style(card, "box-shadow", &shadow.to_css());
            }
        }

        for (floor, state) in scene.floors.iter().zip(&frame.covers) {
            let Some(cover) = &floor.cover else { continue };
            set_style(cover, "opacity", state.opacity());
            set_style(cover, "pointer-events", state.pointer_events());
        }
    }

    fn present_parallax(&self, frame: &Frame) {
        let p = &frame.parallax;
        let layers: [(&Option<HtmlElement>, &LayerTransform); 4] = [
            (&self.background, &p.background),
            (&self.mid, &p.mid),
            (&self.gradient, &p.gradient),
            (&self.top, &p.top),
        ];
        for (el, transform) in layers {
            if let Some(el) = el {
                set_style(el, "transform", &transform.to_css());
            }
        }
        if let Some(gradient) = &self.gradient {
            set_style(gradient, "opacity", &p.gradient_opacity.to_string());
        }
    }
}
