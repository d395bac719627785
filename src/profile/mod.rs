//! Browser-local user profiles: records, session pointer, advisors, photos.

pub mod advisors;
pub mod photo;
pub mod store;

pub use advisors::{advisor_for_group, random_group, Advisor, AdvisorView};
pub use store::{KeyValueStore, MemoryStore, ProfileEdit, ProfileStore, SignIn, UserRecord};
