//! Application state tests
//!
//! Login gating, the dashboard mount, and how responses from the three
//! services land in state, including out-of-order and failed ones.

use evilcorp::grid::{dataset_from_json, Record};
use evilcorp::remote::{Minion, Sprites};
use evilcorp::session::{Authenticator, View};
use evilcorp::ui::app::FocusPane;
use evilcorp::ui::requests::{Request, RequestKind, Response};
use evilcorp::ui::theme::Theme;
use evilcorp::ui::App;
use serde_json::json;

fn logged_in_app() -> App {
    let mut app = App::new(Theme::default_theme().clone());
    app.login.username = "evilguy".to_string();
    app.login.password = "password".to_string();
    app.submit_login();
    app
}

fn minion(name: &str) -> Minion {
    Minion {
        name: name.to_string(),
        sprites: Sprites {
            front_default: Some(format!("https://img/{}/front.png", name)),
            back_default: Some(format!("https://img/{}/back.png", name)),
        },
    }
}

#[test]
fn test_login_with_expected_credentials() {
    let app = logged_in_app();
    assert_eq!(app.view(), View::Dashboard);
    assert_eq!(
        app.session.user().map(|u| u.username.as_str()),
        Some("evilguy")
    );
    assert_eq!(app.focus, FocusPane::Chat);
}

#[test]
fn test_other_credentials_remain_on_login() {
    for (user, pass) in [("evilguy", ""), ("", "password"), ("Evilguy", "password")] {
        let mut app = App::new(Theme::default_theme().clone());
        app.login.username = user.to_string();
        app.login.password = pass.to_string();

        let requests = app.submit_login();

        assert!(requests.is_empty());
        assert_eq!(app.view(), View::Login);
        assert!(app.notice.is_some());
    }
}

#[test]
fn test_custom_authenticator_is_used() {
    struct OnlyMinions;
    impl Authenticator for OnlyMinions {
        fn authenticate(&self, username: &str, _password: &str) -> bool {
            username == "minion"
        }
    }

    let mut app = App::with_authenticator(
        Theme::default_theme().clone(),
        Box::new(OnlyMinions),
    );
    app.login.username = "minion".to_string();

    let requests = app.submit_login();
    assert_eq!(app.view(), View::Dashboard);
    assert!(requests.contains(&Request::FetchUsers));
}

#[test]
fn test_mount_responses_in_either_order() {
    let users = dataset_from_json(json!([
        {"username": "Doofenshmirtz", "id": 1, "password": "password", "email": "platypush8r@gmail.com"},
        {"username": "BigFrank", "id": 2, "password": "password", "email": "whofurted@aol.com"},
        {"username": "JumbaGuy", "id": 3, "password": "password", "email": "jookiba@yahoo.com"}
    ]));

    let mut minion_first = logged_in_app();
    minion_first.apply(Response::Minion(minion("mewtwo")));
    minion_first.apply(Response::Users(users.clone()));

    let mut users_first = logged_in_app();
    users_first.apply(Response::Users(users));
    users_first.apply(Response::Minion(minion("mewtwo")));

    for app in [&minion_first, &users_first] {
        assert!(!app.is_busy());
        assert_eq!(app.minion.as_ref().map(|m| m.name.as_str()), Some("mewtwo"));
        assert_eq!(app.users_grid().row_count(), 3);
    }
    assert_eq!(minion_first.users_grid(), users_first.users_grid());
}

#[test]
fn test_users_grid_matches_columns() {
    let mut app = logged_in_app();
    app.apply(Response::Users(vec![
        Record::new()
            .with("username", "JumbaGuy")
            .with("id", 3)
            .with("password", "password")
            .with("email", "jookiba@yahoo.com"),
        Record::new().with("nickname", "no known fields"),
    ]));

    let grid = app.users_grid();
    assert_eq!(grid.header, vec!["username", "id", "password", "email"]);
    assert_eq!(
        grid.rows,
        vec![
            vec!["JumbaGuy", "3", "password", "jookiba@yahoo.com"],
            vec!["", "", "", ""],
        ]
    );
}

#[test]
fn test_users_grid_is_stable_across_renders() {
    let mut app = logged_in_app();
    app.apply(Response::Users(vec![Record::new().with("id", 1)]));

    assert_eq!(app.users_grid(), app.users_grid());
}

#[test]
fn test_late_response_still_lands() {
    let mut app = logged_in_app();
    app.apply(Response::Minion(minion("ditto")));

    // A second reshuffle resolves after the first one was already shown
    let request = app.reshuffle_minion();
    assert!(matches!(request, Some(Request::FetchMinion(_))));
    app.apply(Response::Minion(minion("eevee")));

    assert_eq!(app.minion.as_ref().map(|m| m.name.as_str()), Some("eevee"));
}

#[test]
fn test_failed_users_fetch_keeps_previous_rows() {
    let mut app = logged_in_app();
    app.apply(Response::Users(vec![Record::new().with("id", 1)]));
    app.refresh_users();

    app.apply(Response::Failed {
        kind: RequestKind::Users,
        message: "Failed to fetch users from http://127.0.0.1:8000/sql/".to_string(),
    });

    assert!(!app.users_loading);
    assert_eq!(app.users_grid().row_count(), 1);
    assert!(app
        .status
        .as_ref()
        .is_some_and(|s| s.message.contains("/sql/")));
}

#[test]
fn test_random_minion_ids_in_range() {
    let mut app = logged_in_app();
    for _ in 0..50 {
        app.minion_loading = false;
        match app.reshuffle_minion() {
            Some(Request::FetchMinion(id)) => assert!((1..=1025).contains(&id)),
            other => panic!("unexpected request: {:?}", other),
        }
    }
}
