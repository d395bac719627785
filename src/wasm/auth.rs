//! Login toast, logout button and the user fields on the index page.

use std::rc::Rc;

use js_sys::Promise;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{
    CanvasRenderingContext2d, Document, Event, File, FileReader, HtmlCanvasElement,
    HtmlImageElement, HtmlInputElement, Storage, Window,
};

use super::dom;
use crate::error::ProfileError;
use crate::profile::{advisor_for_group, photo, KeyValueStore, ProfileStore, SignIn};

/// `localStorage`-backed key-value store.
#[derive(Clone)]
pub struct LocalStore {
    storage: Storage,
}

impl LocalStore {
    pub fn open(window: &Window) -> Result<Self, ProfileError> {
        let storage = window
            .local_storage()
            .map_err(|e| ProfileError::Storage(format!("{e:?}")))?
            .ok_or_else(|| ProfileError::Storage("localStorage disabled".to_owned()))?;
        Ok(Self { storage })
    }
}

fn storage_err(e: JsValue) -> ProfileError {
    ProfileError::Storage(format!("{e:?}"))
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, ProfileError> {
        self.storage.get_item(key).map_err(storage_err)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ProfileError> {
        self.storage.set_item(key, value).map_err(storage_err)
    }

    fn remove(&mut self, key: &str) -> Result<(), ProfileError> {
        self.storage.remove_item(key).map_err(storage_err)
    }
}

pub fn profiles(window: &Window) -> Result<ProfileStore<LocalStore>, ProfileError> {
    Ok(ProfileStore::new(LocalStore::open(window)?))
}

pub fn to_js(e: ProfileError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

pub fn alert(window: &Window, msg: &str) {
    let _ = window.alert_with_message(msg);
}

/// Uniform roll in `[0, 1)` for group assignment.
pub fn roll() -> f64 {
    js_sys::Math::random()
}

async fn read_data_url(file: &File) -> Result<String, JsValue> {
    let reader = FileReader::new()?;
    let done = Promise::new(&mut |resolve, reject| {
        reader.set_onload(Some(&resolve));
        reader.set_onerror(Some(&reject));
    });
    reader.read_as_data_url(file)?;
    JsFuture::from(done).await?;
    reader.result()?.as_string().ok_or_else(|| "file is not readable as a data URL".into())
}

async fn load_image(src: &str) -> Result<HtmlImageElement, JsValue> {
    let img = HtmlImageElement::new()?;
    let done = Promise::new(&mut |resolve, reject| {
        img.set_onload(Some(&resolve));
        img.set_onerror(Some(&reject));
    });
    img.set_src(src);
    JsFuture::from(done).await?;
    Ok(img)
}

/// Reads `file`, shrinks it to fit `max_side` and re-encodes it as a JPEG data URL.
pub async fn compress_photo(
    document: &Document,
    file: &File,
    max_side: u32,
    quality: f64,
) -> Result<String, JsValue> {
    let src = read_data_url(file).await?;
    let img = load_image(&src).await?;
    let (w, h) = photo::fit_within(img.natural_width(), img.natural_height(), max_side);

    let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
    canvas.set_width(w);
    canvas.set_height(h);
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or("2d canvas not supported")?
        .dyn_into()?;
    ctx.draw_image_with_html_image_element_and_dw_and_dh(&img, 0.0, 0.0, w as f64, h as f64)?;
    canvas.to_data_url_with_type_and_encoder_options("image/jpeg", &JsValue::from_f64(quality))
}

pub fn selected_file(input: &HtmlInputElement) -> Option<File> {
    input.files()?.get(0)
}

struct AuthUi {
    window: Window,
    document: Document,
}

impl AuthUi {
    fn sync(&self) -> Result<(), JsValue> {
        let store = profiles(&self.window).map_err(to_js)?;
        let user = store.current_user();
        let logged = store.current().is_some();
        let doc = &self.document;

        if let Some(toast) = dom::query_doc(doc, ".toast-auth") {
            dom::toggle_class(&toast, "show", !logged)?;
        }
        if let Some(action) = dom::by_id(doc, "profile-action") {
            dom::set_style(&action, "display", if logged { "" } else { "none" });
        }
        if let Some(action) = dom::by_id(doc, "login-action") {
            dom::set_style(&action, "display", if logged { "none" } else { "" });
        }

        let Some(user) = user else { return Ok(()) };
        let group = user.group.as_deref().unwrap_or("");
        for el in dom::query_all(doc, "#user-name") {
            dom::set_text(&el, &user.name);
        }
        for el in dom::query_all(doc, "#group-name") {
            dom::set_text(&el, group);
        }
        for el in dom::query_all(doc, "#program-name") {
            dom::set_text(&el, user.program.as_deref().unwrap_or(""));
        }
        if let Some(photo) = &user.photo {
            for el in dom::query_all(doc, "#img-user") {
                dom::set_style(&el, "background-image", &format!("url({photo})"));
            }
        }
        if let Some(el) = dom::by_id(doc, "edviser-name") {
            match advisor_for_group(group) {
                Some(a) => dom::set_text(&el, a.name),
                None => dom::set_text(&el, "(эдвайзер не назначен)"),
            }
        }
        Ok(())
    }

    fn sync_logged(&self) {
        if let Err(e) = self.sync() {
            log::warn!("auth ui sync failed: {e:?}");
        }
    }

    async fn submit(&self) -> Result<(), JsValue> {
        let doc = &self.document;
        let value = |id: &str| {
            doc.get_element_by_id(id)
                .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
                .map(|input| input.value())
                .unwrap_or_default()
        };
        let (name, pass) = (value("toast-user"), value("toast-pass"));

        let file = doc
            .get_element_by_id("toast-photo")
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .and_then(|input| selected_file(&input));
        let photo = match file {
            Some(file) => {
                let (max_side, quality) = photo::SIGN_IN_PHOTO;
                Some(compress_photo(doc, &file, max_side, quality).await?)
            }
            None => None,
        };

        let mut store = profiles(&self.window).map_err(to_js)?;
        match store.sign_in(&name, &pass, photo, roll()) {
            Ok(SignIn::Registered) => log::info!("new profile created"),
            Ok(SignIn::Authenticated) => {}
            Err(ProfileError::BadCredentials) => {
                alert(&self.window, "Неверные данные");
                return Ok(());
            }
            Err(e) => return Err(to_js(e)),
        }
        self.sync()
    }
}

/// Current session name, read fresh each call so other tabs' logins show up.
pub fn current_user(window: &Window) -> Option<String> {
    profiles(window).ok()?.current()
}

pub fn mount(window: &Window, document: &Document) -> Result<(), JsValue> {
    let ui = Rc::new(AuthUi { window: window.clone(), document: document.clone() });
    ui.sync_logged();

    if let Some(exit) = dom::by_id(document, "exit-profile") {
        let ui = ui.clone();
        let cb = Closure::wrap(Box::new(move || {
            if let Ok(mut store) = profiles(&ui.window) {
                if let Err(e) = store.logout() {
                    log::warn!("logout failed: {e}");
                }
            }
            ui.sync_logged();
        }) as Box<dyn FnMut()>);
        exit.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    if let Some(form) = dom::by_id(document, "toast-login") {
        let ui = ui.clone();
        let cb = Closure::wrap(Box::new(move |e: Event| {
            e.prevent_default();
            let ui = ui.clone();
            spawn_local(async move {
                if let Err(e) = ui.submit().await {
                    log::error!("sign-in failed: {e:?}");
                }
            });
        }) as Box<dyn FnMut(Event)>);
        form.add_event_listener_with_callback("submit", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    Ok(())
}
