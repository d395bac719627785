use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use super::dom::{self, DomLayout};
use crate::config::ElevatorConfig;
use crate::elevator::Elevator;
use crate::layout::{LayoutSource, Span};
use crate::scene::Scene;

struct Panel {
    label: Option<HtmlElement>,
    name: Option<HtmlElement>,
    jumps: Vec<HtmlElement>,
}

struct ElevatorUi {
    window: Window,
    layout: DomLayout,
    sections: Vec<HtmlElement>,
    elevator: Elevator,
    panel: Panel,
}

impl ElevatorUi {
    fn spans(&self) -> Vec<Span> {
        self.sections.iter().map(|s| self.layout.span(s)).collect()
    }

    fn sync(&mut self) -> Result<(), JsValue> {
        let spans = self.spans();
        let view = self.elevator.sync(&spans, self.layout.viewport());
        if let Some(label) = &self.panel.label {
            dom::set_text(label, &view.label);
        }
        if let Some(name) = &self.panel.name {
            dom::set_text(name, &view.name);
        }
        for (button, on) in self.panel.jumps.iter().zip(&view.jumps) {
            dom::toggle_class(button, "active", *on)?;
        }
        Ok(())
    }

    fn scroll_to(&self, target: Option<f64>) {
        let Some(top) = target else { return };
        log::debug!("elevator: scrolling to {top}");
        let opts = ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&opts);
    }

    fn step(&mut self, delta: i64) {
        let spans = self.spans();
        let target = self.elevator.step(&spans, self.layout.viewport(), delta);
        self.scroll_to(target);
    }

    fn jump(&self, index: i64) {
        self.scroll_to(self.elevator.goto(&self.spans(), index));
    }
}

fn on_click(el: &HtmlElement, handler: impl FnMut() + 'static) -> Result<(), JsValue> {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Wires the elevator panel. Pages without floors or an elevator are left alone.
pub fn mount(
    window: &Window,
    document: &Document,
    scene: &Scene<HtmlElement>,
    cfg: ElevatorConfig,
) -> Result<(), JsValue> {
    let Some(root) = dom::query_doc(document, ".elevator") else { return Ok(()) };
    if scene.floors.is_empty() {
        return Ok(());
    }

    let jumps: Vec<HtmlElement> = dom::query_all(document, ".elevator .elev-jump");
    let elevator = Elevator::new(cfg, &scene.headings(), jumps.len());
    for (button, name) in jumps.iter().zip(elevator.names()) {
        button.set_attribute("data-name", name)?;
        button.set_attribute("title", name)?;
    }

    let up = dom::query(&root, ".elev-up");
    let down = dom::query(&root, ".elev-down");
    let ui = Rc::new(RefCell::new(ElevatorUi {
        window: window.clone(),
        layout: DomLayout::new(window.clone()),
        sections: scene.floors.iter().map(|f| f.section.clone()).collect(),
        elevator,
        panel: Panel {
            label: dom::by_id(document, "elev-floor"),
            name: dom::query(&root, ".elev-floor-label"),
            jumps: jumps.clone(),
        },
    }));

    if let Some(up) = up {
        let ui = ui.clone();
        on_click(&up, move || ui.borrow_mut().step(-1))?;
    }
    if let Some(down) = down {
        let ui = ui.clone();
        on_click(&down, move || ui.borrow_mut().step(1))?;
    }
    for button in &jumps {
        let ui = ui.clone();
        let target = button.dataset().get("floor").and_then(|s| s.parse::<i64>().ok());
        on_click(button, move || {
            if let Some(i) = target {
                ui.borrow().jump(i);
            }
        })?;
    }

    let resync = {
        let ui = ui.clone();
        Closure::wrap(Box::new(move || {
            if let Err(e) = ui.borrow_mut().sync() {
                log::warn!("elevator sync failed: {e:?}");
            }
        }) as Box<dyn FnMut()>)
    };
    super::listen_passive(window, "scroll", resync.as_ref().unchecked_ref())?;
    window.add_event_listener_with_callback("resize", resync.as_ref().unchecked_ref())?;
    resync.forget();

    let result = ui.borrow_mut().sync();
    result
}
