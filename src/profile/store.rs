//! User records and the session pointer, kept in a flat key-value store.
//!
//! Records live as one JSON array; the session is a tiny `{"name": ..}`
//! object. Unreadable data is treated as absent, never as an error.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::advisors;
use crate::error::ProfileError;

pub const KEY_USERS: &str = "atu_db_users";
pub const KEY_CURRENT: &str = "atu_current_user";
pub const DEFAULT_PROGRAM: &str = "АТУ — бакалавриат";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, ProfileError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), ProfileError>;
    fn remove(&mut self, key: &str) -> Result<(), ProfileError>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, ProfileError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ProfileError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), ProfileError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: String,
    #[serde(default)]
    pub pass: String,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub program: Option<String>,
}

impl UserRecord {
    pub fn named(name: &str) -> Self {
        Self { name: name.to_owned(), pass: String::new(), photo: None, group: None, program: None }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct SessionPointer {
    name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignIn {
    Registered,
    Authenticated,
}

/// Edits submitted from the profile page.
#[derive(Debug, Clone, Default)]
pub struct ProfileEdit {
    pub name: String,
    /// Ignored when blank.
    pub pass: String,
    pub photo: Option<String>,
}

pub struct ProfileStore<S> {
    store: S,
}

impl<S: KeyValueStore> ProfileStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn users(&self) -> Vec<UserRecord> {
        let raw = match self.store.get(KEY_USERS) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::warn!("reading users: {e}");
                return Vec::new();
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            log::warn!("discarding unreadable user list: {e}");
            Vec::new()
        })
    }

    fn save_users(&mut self, users: &[UserRecord]) -> Result<(), ProfileError> {
        let raw = serde_json::to_string(users)?;
        self.store.set(KEY_USERS, &raw)
    }

    pub fn user(&self, name: &str) -> Option<UserRecord> {
        self.users().into_iter().find(|u| u.name == name)
    }

    /// Replaces the record with the same name, or appends it.
    pub fn upsert(&mut self, user: UserRecord) -> Result<UserRecord, ProfileError> {
        let mut users = self.users();
        match users.iter().position(|u| u.name == user.name) {
            Some(i) => users[i] = user.clone(),
            None => users.push(user.clone()),
        }
        self.save_users(&users)?;
        Ok(user)
    }

    pub fn set_current(&mut self, name: Option<&str>) -> Result<(), ProfileError> {
        match name.filter(|n| !n.is_empty()) {
            Some(name) => {
                let raw = serde_json::to_string(&SessionPointer { name: name.to_owned() })?;
                self.store.set(KEY_CURRENT, &raw)
            }
            None => self.store.remove(KEY_CURRENT),
        }
    }

    /// Name of the signed-in user, if any.
    pub fn current(&self) -> Option<String> {
        let raw = self.store.get(KEY_CURRENT).ok()??;
        serde_json::from_str::<SessionPointer>(&raw)
            .ok()
            .map(|s| s.name)
            .filter(|n| !n.is_empty())
    }

    pub fn current_user(&self) -> Option<UserRecord> {
        self.current().and_then(|n| self.user(&n))
    }

    pub fn logout(&mut self) -> Result<(), ProfileError> {
        self.set_current(None)
    }

    /// Checks the password and, on success, points the session at `name`.
    pub fn auth(&mut self, name: &str, pass: &str) -> Result<bool, ProfileError> {
        match self.user(name) {
            Some(u) if u.pass == pass => {
                self.set_current(Some(name))?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Login form: unknown names are registered on the spot, known names must
    /// match their password. `roll` in `[0, 1)` picks the new user's group.
    pub fn sign_in(
        &mut self,
        name: &str,
        pass: &str,
        photo: Option<String>,
        roll: f64,
    ) -> Result<SignIn, ProfileError> {
        let (name, pass) = (name.trim(), pass.trim());
        if name.is_empty() {
            return Err(ProfileError::EmptyName);
        }

        let Some(mut user) = self.user(name) else {
            self.upsert(UserRecord {
                name: name.to_owned(),
                pass: pass.to_owned(),
                photo,
                group: Some(advisors::random_group(roll).to_owned()),
                program: Some(DEFAULT_PROGRAM.to_owned()),
            })?;
            self.set_current(Some(name))?;
            log::info!("registered {name}");
            return Ok(SignIn::Registered);
        };

        if !self.auth(name, pass)? {
            return Err(ProfileError::BadCredentials);
        }
        if photo.is_some() {
            user.photo = photo;
            self.upsert(user)?;
        }
        Ok(SignIn::Authenticated)
    }

    /// Applies profile-page edits to the signed-in user and re-points the
    /// session at the (possibly new) name. Renaming onto another user's name
    /// is refused.
    pub fn save_profile(
        &mut self,
        edit: ProfileEdit,
        roll: f64,
    ) -> Result<UserRecord, ProfileError> {
        let current = self.current().ok_or(ProfileError::NoSession)?;
        let name = edit.name.trim();
        if name.is_empty() {
            return Err(ProfileError::EmptyName);
        }
        if name != current && self.user(name).is_some() {
            return Err(ProfileError::NameTaken(name.to_owned()));
        }

        let mut user = self.user(&current).unwrap_or_else(|| UserRecord::named(&current));
        user.name = name.to_owned();
        let pass = edit.pass.trim();
        if !pass.is_empty() {
            user.pass = pass.to_owned();
        }
        if edit.photo.is_some() {
            user.photo = edit.photo;
        }
        user.group.get_or_insert_with(|| advisors::random_group(roll).to_owned());
        user.program.get_or_insert_with(|| DEFAULT_PROGRAM.to_owned());

        if user.name != current {
            let mut users = self.users();
            users.retain(|u| u.name != current);
            self.save_users(&users)?;
        }
        let user = self.upsert(user)?;
        self.set_current(Some(&user.name))?;
        Ok(user)
    }

    /// Replaces the signed-in user's photo.
    pub fn set_photo(&mut self, photo: String) -> Result<UserRecord, ProfileError> {
        let current = self.current().ok_or(ProfileError::NoSession)?;
        let mut user = self.user(&current).unwrap_or_else(|| UserRecord::named(&current));
        user.photo = Some(photo);
        self.upsert(user)
    }
}
