use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlImageElement, HtmlInputElement, Window};

use super::auth::{alert, compress_photo, profiles, roll, selected_file, to_js};
use crate::error::ProfileError;
use crate::profile::{photo, ProfileEdit};

const HOME: &str = "../index.html";
const DEFAULT_AVATAR: &str = "../media/user.png";

struct ProfilePage {
    window: Window,
    document: Document,
}

impl ProfilePage {
    fn input(&self, id: &str) -> Option<HtmlInputElement> {
        self.document.get_element_by_id(id)?.dyn_into().ok()
    }

    fn render(&self) -> Result<(), JsValue> {
        let store = profiles(&self.window).map_err(to_js)?;
        let Some(user) = store.current_user() else {
            return self.window.location().set_href(HOME);
        };

        match self.input("user-name") {
            Some(input) => input.set_value(&user.name),
            None => {
                if let Some(el) = self.document.get_element_by_id("user-name") {
                    el.set_text_content(Some(&user.name));
                }
            }
        }
        if let Some(pass) = self.input("profile-pass") {
            pass.set_value(&user.pass);
        }
        if let Some(avatar) = self.document.get_element_by_id("profile-avatar") {
            if let Ok(img) = avatar.dyn_into::<HtmlImageElement>() {
                img.set_src(user.photo.as_deref().unwrap_or(DEFAULT_AVATAR));
            }
        }
        if let Some(group) = self.document.get_element_by_id("group-name") {
            group.set_text_content(Some(user.group.as_deref().unwrap_or("")));
        }
        Ok(())
    }

    fn save(&self) -> Result<(), JsValue> {
        let edit = ProfileEdit {
            name: self.input("user-name").map(|i| i.value()).unwrap_or_default(),
            pass: self.input("profile-pass").map(|i| i.value()).unwrap_or_default(),
            photo: None,
        };
        let mut store = profiles(&self.window).map_err(to_js)?;
        match store.save_profile(edit, roll()) {
            Ok(_) => {}
            Err(ProfileError::NameTaken(name)) => {
                alert(&self.window, &format!("Имя «{name}» уже занято"));
                return Ok(());
            }
            Err(e) => return Err(to_js(e)),
        }
        self.render()?;
        alert(&self.window, "Профиль сохранён");
        Ok(())
    }

    async fn change_photo(&self) -> Result<(), JsValue> {
        let Some(file) = self.input("profile-photo").and_then(|i| selected_file(&i)) else {
            return Ok(());
        };
        let (max_side, quality) = photo::PROFILE_PHOTO;
        let data = compress_photo(&self.document, &file, max_side, quality).await?;
        profiles(&self.window).map_err(to_js)?.set_photo(data).map_err(to_js)?;
        self.render()
    }

    fn toggle_pass(&self) -> Result<(), JsValue> {
        let Some(pass) = self.input("profile-pass") else { return Ok(()) };
        let shown = pass.style().get_property_value("display")? != "none";
        pass.style().set_property("display", if shown { "none" } else { "" })?;
        if !shown {
            pass.focus()?;
        }
        Ok(())
    }

    fn toggle_name(&self) -> Result<(), JsValue> {
        let Some(name) = self.input("user-name") else { return Ok(()) };
        name.set_read_only(!name.read_only());
        name.focus()
    }
}

type Handler = fn(&ProfilePage) -> Result<(), JsValue>;

fn on(page: &Rc<ProfilePage>, id: &str, event: &str, handler: Handler) -> Result<(), JsValue> {
    let Some(el) = page.document.get_element_by_id(id) else { return Ok(()) };
    let page = page.clone();
    let cb = Closure::wrap(Box::new(move || {
        if let Err(e) = handler(&page) {
            log::warn!("profile page: {e:?}");
        }
    }) as Box<dyn FnMut()>);
    el.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

pub fn mount(window: &Window, document: &Document) -> Result<(), JsValue> {
    let page = Rc::new(ProfilePage { window: window.clone(), document: document.clone() });

    on(&page, "save-profile", "click", ProfilePage::save)?;
    on(&page, "toggle-pass", "click", ProfilePage::toggle_pass)?;
    on(&page, "toggle-name", "click", ProfilePage::toggle_name)?;

    if let Some(input) = page.input("profile-photo") {
        let page = page.clone();
        let cb = Closure::wrap(Box::new(move || {
            let page = page.clone();
            spawn_local(async move {
                if let Err(e) = page.change_photo().await {
                    log::error!("photo update failed: {e:?}");
                }
            });
        }) as Box<dyn FnMut()>);
        input.add_event_listener_with_callback("change", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    page.render()
}
