use floors_wasm::profile::advisors::{self, DEFAULT_ADVISOR_PHOTO, GROUPS};
use floors_wasm::profile::photo::fit_within;
use floors_wasm::profile::store::{KEY_CURRENT, KEY_USERS};
use floors_wasm::profile::{
    advisor_for_group, Advisor, AdvisorView, KeyValueStore, MemoryStore, ProfileEdit,
    ProfileStore, SignIn, UserRecord,
};
use floors_wasm::ProfileError;

fn store() -> ProfileStore<MemoryStore> {
    ProfileStore::new(MemoryStore::new())
}

fn user(name: &str, pass: &str) -> UserRecord {
    UserRecord { name: name.into(), pass: pass.into(), photo: None, group: None, program: None }
}

#[test]
fn upsert_replaces_by_name() {
    let mut s = store();
    s.upsert(user("aru", "1")).unwrap();
    s.upsert(user("dan", "2")).unwrap();
    s.upsert(user("aru", "3")).unwrap();

    let users = s.users();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].name, "aru");
    assert_eq!(s.user("aru").unwrap().pass, "3");
    assert!(s.user("nobody").is_none());
}

#[test]
fn session_pointer_round_trips_and_clears() {
    let mut s = store();
    assert_eq!(s.current(), None);
    s.set_current(Some("aru")).unwrap();
    assert_eq!(s.current().as_deref(), Some("aru"));
    s.logout().unwrap();
    assert_eq!(s.current(), None);
}

#[test]
fn corrupt_storage_reads_as_empty() {
    let mut kv = MemoryStore::new();
    kv.set(KEY_USERS, "{not json").unwrap();
    kv.set(KEY_CURRENT, "[]").unwrap();
    let s = ProfileStore::new(kv);
    assert!(s.users().is_empty());
    assert_eq!(s.current(), None);
    assert_eq!(s.current_user(), None);
}

#[test]
fn records_written_by_older_pages_still_load() {
    let mut kv = MemoryStore::new();
    kv.set(KEY_USERS, r#"[{"name":"aru","pass":"x","photo":null}]"#).unwrap();
    kv.set(KEY_CURRENT, r#"{"name":"aru"}"#).unwrap();
    let s = ProfileStore::new(kv);
    let u = s.current_user().unwrap();
    assert_eq!(u.group, None);
    assert_eq!(u.program, None);
}

#[test]
fn auth_checks_password_and_sets_session() {
    let mut s = store();
    s.upsert(user("aru", "secret")).unwrap();
    assert!(!s.auth("aru", "wrong").unwrap());
    assert_eq!(s.current(), None);
    assert!(!s.auth("ghost", "").unwrap());
    assert!(s.auth("aru", "secret").unwrap());
    assert_eq!(s.current().as_deref(), Some("aru"));
}

#[test]
fn sign_in_registers_unknown_user() {
    let mut s = store();
    let photo = Some("data:image/jpeg;base64,AA".into());
    let outcome = s.sign_in("  aru ", " pw ", photo, 0.0).unwrap();
    assert_eq!(outcome, SignIn::Registered);

    let u = s.current_user().unwrap();
    assert_eq!(u.name, "aru");
    assert_eq!(u.pass, "pw");
    assert_eq!(u.group.as_deref(), Some(GROUPS[0]));
    assert_eq!(u.program.as_deref(), Some("АТУ — бакалавриат"));
    assert!(u.photo.is_some());
}

#[test]
fn sign_in_rejects_wrong_password() {
    let mut s = store();
    s.sign_in("aru", "pw", None, 0.5).unwrap();
    s.logout().unwrap();

    let err = s.sign_in("aru", "nope", None, 0.5).unwrap_err();
    assert!(matches!(err, ProfileError::BadCredentials));
    assert_eq!(s.current(), None);

    assert_eq!(s.sign_in("aru", "pw", Some("new".into()), 0.5).unwrap(), SignIn::Authenticated);
    assert_eq!(s.current_user().unwrap().photo.as_deref(), Some("new"));
}

#[test]
fn sign_in_requires_a_name() {
    let mut s = store();
    assert!(matches!(s.sign_in("   ", "pw", None, 0.1), Err(ProfileError::EmptyName)));
    assert!(s.users().is_empty());
}

#[test]
fn save_profile_renames_and_keeps_password_when_blank() {
    let mut s = store();
    s.upsert(user("aru", "pw")).unwrap();
    s.set_current(Some("aru")).unwrap();

    let saved = s
        .save_profile(ProfileEdit { name: "Aruzhan".into(), pass: "  ".into(), photo: None }, 0.99)
        .unwrap();
    assert_eq!(saved.pass, "pw");
    assert_eq!(saved.group.as_deref(), Some(GROUPS[4]));
    assert_eq!(s.current().as_deref(), Some("Aruzhan"));
    assert!(s.user("aru").is_none());
    assert_eq!(s.users().len(), 1);

    let saved = s
        .save_profile(ProfileEdit { name: "Aruzhan".into(), pass: "new".into(), photo: None }, 0.0)
        .unwrap();
    assert_eq!(saved.pass, "new");
    assert_eq!(saved.group.as_deref(), Some(GROUPS[4]));
}

#[test]
fn save_profile_needs_session() {
    let mut s = store();
    let edit = ProfileEdit { name: "x".into(), ..Default::default() };
    let err = s.save_profile(edit, 0.0).unwrap_err();
    assert!(matches!(err, ProfileError::NoSession));
}

#[test]
fn rename_onto_existing_user_is_refused() {
    let mut s = store();
    s.sign_in("dan", "dan-secret", Some("dan.jpg".into()), 0.9).unwrap();
    s.sign_in("aru", "aru-pw", None, 0.0).unwrap();

    let edit = ProfileEdit { name: " dan ".into(), ..Default::default() };
    let err = s.save_profile(edit, 0.0).unwrap_err();
    assert!(matches!(err, ProfileError::NameTaken(ref n) if n == "dan"));

    let dan = s.user("dan").unwrap();
    assert_eq!(dan.pass, "dan-secret");
    assert_eq!(dan.photo.as_deref(), Some("dan.jpg"));
    assert_eq!(dan.group.as_deref(), Some(GROUPS[4]));
    assert_eq!(s.user("aru").unwrap().pass, "aru-pw");
    assert_eq!(s.users().len(), 2);
    assert_eq!(s.current().as_deref(), Some("aru"));
}

#[test]
fn saving_under_own_name_is_not_a_clash() {
    let mut s = store();
    s.sign_in("aru", "pw", None, 0.0).unwrap();
    let edit = ProfileEdit { name: "aru".into(), pass: "pw2".into(), photo: None };
    assert_eq!(s.save_profile(edit, 0.0).unwrap().pass, "pw2");
    assert_eq!(s.users().len(), 1);
}

#[test]
fn set_photo_updates_current_user() {
    let mut s = store();
    s.sign_in("aru", "pw", None, 0.3).unwrap();
    let u = s.set_photo("data:x".into()).unwrap();
    assert_eq!(u.photo.as_deref(), Some("data:x"));
    assert_eq!(s.user("aru").unwrap().photo.as_deref(), Some("data:x"));
}

#[test]
fn every_group_has_an_advisor() {
    for group in GROUPS {
        assert!(advisor_for_group(group).is_some(), "{group}");
    }
    assert_eq!(advisor_for_group("ПИ 24-21").unwrap().name, "Руслан Ермеков");
    assert!(advisor_for_group("ХХ 00-00").is_none());
}

#[test]
fn advisor_page_follows_session_and_group() {
    assert_eq!(AdvisorView::for_user(None), AdvisorView::NoSession);

    let mut u = user("aru", "pw");
    assert_eq!(AdvisorView::for_user(Some(&u)), AdvisorView::Unassigned);
    u.group = Some("ХХ 00-00".into());
    assert_eq!(AdvisorView::for_user(Some(&u)), AdvisorView::Unassigned);

    u.group = Some("ИС 11-25".into());
    let AdvisorView::Assigned(advisor) = AdvisorView::for_user(Some(&u)) else {
        panic!("ИС 11-25 has an advisor");
    };
    let fields = advisor.fields();
    assert_eq!(fields[0], ("adv-name", "Александр Ким"));
    assert_eq!(fields[1], ("adv-role", "Эдвайзер кафедры ИС"));
    assert_eq!(fields[2], ("adv-dept", "Кафедра Информационных систем"));
    assert_eq!(fields[3], ("adv-field", "Сетевые технологии, кибербезопасность"));
    assert_eq!(fields[4].0, "adv-contact");
    assert_eq!(advisor.photo(), "../assets/advisors/kim.jpg");
}

#[test]
fn advisor_without_avatar_gets_default_photo() {
    let advisor = Advisor { avatar: "", ..advisors::ADVISORS[0] };
    assert_eq!(advisor.photo(), DEFAULT_ADVISOR_PHOTO);
}

#[test]
fn group_roll_covers_every_bucket() {
    assert_eq!(advisors::random_group(0.0), GROUPS[0]);
    assert_eq!(advisors::random_group(0.2), GROUPS[1]);
    assert_eq!(advisors::random_group(0.999), GROUPS[4]);
    assert_eq!(advisors::random_group(1.0), GROUPS[4]);
}

#[test]
fn photos_shrink_but_never_grow() {
    assert_eq!(fit_within(1024, 768, 256), (256, 192));
    assert_eq!(fit_within(300, 1200, 512), (128, 512));
    assert_eq!(fit_within(100, 80, 256), (100, 80));
    assert_eq!(fit_within(0, 0, 256), (0, 0));
}
