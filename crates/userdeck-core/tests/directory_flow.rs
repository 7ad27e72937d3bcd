//! End-to-end tests for the userdeck-core public API.
//!
//! These tests load configuration from a temp directory, build the record
//! source it selects, and walk the list and detail flows the UI drives.

use std::fs;

use userdeck_core::config::loading::load_hierarchy_from;
use userdeck_core::shell::{Route, active_nav_item};
use userdeck_core::stats::DashboardStats;
use userdeck_core::users::{self, DetailState, RecordSource, UserId, ViewState, resolve_detail};

const USERS_JSON: &str = r#"[
    {"id": 1, "name": "Leanne Graham", "username": "Bret", "email": "Sincere@april.biz",
     "address": {"street": "Kulas Light", "suite": "Apt. 556", "city": "Gwenborough",
                 "zipcode": "92998-3874", "geo": {"lat": "-37.3159", "lng": "81.1496"}}},
    {"id": 2, "name": "Ervin Howell", "username": "Antonette", "email": "Shanna@melissa.tv"},
    {"id": 3, "name": "Clementine Bauch", "username": "Samantha", "email": "Nathan@yesenia.net"},
    {"id": 4, "name": "Patricia Lebsack", "username": "Karianne", "email": "Julianne.OConner@kory.org"},
    {"id": 5, "name": "Chelsey Dietrich", "username": "Kamren", "email": "Lucio_Hettinger@annie.ca"},
    {"id": 6, "name": "Mrs. Dennis Schulist", "username": "Leopoldo_Corkery", "email": "Karley_Dach@jasper.info"},
    {"id": 7, "name": "Kurtis Weissnat", "username": "Elwyn.Skiles", "email": "Telly.Hoeger@billy.biz"}
]"#;

#[test]
fn test_config_selects_file_source_and_page_size() {
    let dir = tempfile::tempdir().unwrap();
    let project_dir = dir.path().join("project").join(".userdeck");
    fs::create_dir_all(&project_dir).unwrap();
    fs::write(project_dir.join("users.json"), USERS_JSON).unwrap();
    fs::write(
        project_dir.join("config.toml"),
        "[users]\npage_size = 3\n\n[source]\npath = \"users.json\"\n",
    )
    .unwrap();

    let config = load_hierarchy_from(
        &dir.path().join("missing-user-config.toml"),
        &project_dir.join("config.toml"),
    )
    .unwrap();
    assert_eq!(config.users.page_size(), 3);

    let source = users::source_from_config(&config);
    assert_eq!(source.name(), "json_file");

    let snapshot = source.list_users();
    assert!(snapshot.is_ready());
    assert_eq!(snapshot.data.len(), 7);

    let mut view = ViewState::new(config.users.page_size());
    let page = view.derive(&snapshot.data);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.range_label(), "Showing 1–3 of 7");

    view.next_page(&snapshot.data);
    view.next_page(&snapshot.data);
    view.next_page(&snapshot.data);
    assert_eq!(view.page(), 3);
    assert_eq!(view.derive(&snapshot.data).visible.len(), 1);

    view.set_query("samantha");
    assert_eq!(view.page(), 1);
    let filtered = view.derive(&snapshot.data);
    assert_eq!(filtered.visible.len(), 1);
    assert_eq!(filtered.visible[0].name, "Clementine Bauch");
}

#[test]
fn test_card_click_to_detail_and_back() {
    let source = users::PlaceholderSource::default();
    let snapshot = source.list_users();

    let view = ViewState::default();
    let page = view.derive(&snapshot.data);
    assert_eq!(page.visible.len(), 6);

    let clicked = Route::UserDetail(page.visible[2].id);
    let parsed = Route::parse(&clicked.path()).unwrap();
    assert_eq!(active_nav_item(&parsed).map(|item| item.label), Some("Users"));

    let Route::UserDetail(id) = parsed else {
        panic!("expected a detail route");
    };
    match resolve_detail(&snapshot, id) {
        DetailState::Ready(user) => {
            assert_eq!(user.username, "Samantha");
            assert_eq!(user.handle(), "@Samantha");
        }
        other => panic!("unexpected detail state: {:?}", other),
    }

    let missing = Route::parse("/dashboard/users/999").unwrap();
    assert_eq!(missing, Route::UserDetail(UserId(999)));
    let state = resolve_detail(&snapshot, UserId(999));
    assert_eq!(
        state.error().map(|e| e.to_string()).as_deref(),
        Some("User '999' not found")
    );
}

#[test]
fn test_dashboard_stats_from_placeholder_source() {
    let source = users::PlaceholderSource::default();
    let stats = DashboardStats::from_records(&source.list_users().data);
    let values: Vec<String> = stats.cards().iter().map(|c| c.value.clone()).collect();
    assert_eq!(values, vec!["10", "7", "23.5%", "10"]);
}
