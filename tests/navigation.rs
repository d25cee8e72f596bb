//! End-to-end navigation scenarios through the bootstrapped application.

use bank_dashboard::config::{AppConfig, RouteConfig};
use bank_dashboard::routing::NavigationOutcome;

mod common;

#[test]
fn test_root_shows_dashboard() {
    let (booted, document) = common::boot("/");

    let active = booted.app.current_route().unwrap();
    assert_eq!(active.view_name(), "Dashboard");
    assert_eq!(active.location.path, "/");
    assert!(common::mounted_html(&document).contains("<h1>Dashboard</h1>"));
}

#[test]
fn test_dashboard_path_shows_dashboard() {
    let (booted, document) = common::boot("/dashboard");

    let active = booted.app.current_route().unwrap();
    assert_eq!(active.view_name(), "Dashboard");
    assert_eq!(active.location.path, "/dashboard");
    assert!(common::mounted_html(&document).contains("data-view=\"Dashboard\""));
}

#[test]
fn test_unknown_path_shows_not_found() {
    let (booted, document) = common::boot("/unknown/path");

    let active = booted.app.current_route().unwrap();
    assert_eq!(active.view_name(), "NotFound");
    assert_eq!(
        active.location.params.get("catchAll").map(String::as_str),
        Some("unknown/path")
    );
    let html = common::mounted_html(&document);
    assert!(html.contains("<h1>404</h1>"));
    assert!(html.contains("/unknown/path"));
}

#[test]
fn test_every_undeclared_path_falls_back() {
    let (booted, _document) = common::boot("/");
    let router = booted.app.router().unwrap();

    for path in ["/dashboard/", "/DASHBOARD", "/dashboard/settings", "//", "/index.html"] {
        assert_eq!(router.resolve(path).view.name(), "NotFound", "path {path:?}");
    }
    for path in ["/", "/dashboard"] {
        assert_eq!(router.resolve(path).view.name(), "Dashboard", "path {path:?}");
    }
}

#[test]
fn test_repeated_navigation_is_idempotent() {
    let (mut booted, mut document) = common::boot("/");
    let app = &mut booted.app;

    assert_eq!(
        app.navigate(&mut document, "/unknown/path").unwrap(),
        NavigationOutcome::Navigated
    );
    let first = app.current_route().unwrap();
    let html = common::mounted_html(&document);

    assert_eq!(
        app.navigate(&mut document, "/unknown/path").unwrap(),
        NavigationOutcome::Duplicated
    );
    let second = app.current_route().unwrap();

    assert_eq!(first.navigation_id, second.navigation_id);
    assert_eq!(second.view_name(), "NotFound");
    assert_eq!(common::mounted_html(&document), html);
    assert_eq!(app.router().unwrap().history().len(), 2);
}

#[test]
fn test_history_walk() {
    let (mut booted, mut document) = common::boot("/");
    let app = &mut booted.app;

    app.navigate(&mut document, "/dashboard").unwrap();
    app.navigate(&mut document, "/nope").unwrap();
    assert!(common::mounted_html(&document).contains("NotFound"));

    app.go(&mut document, -2).unwrap();
    assert_eq!(app.current_route().unwrap().location.path, "/");

    assert_eq!(
        app.go(&mut document, 5).unwrap(),
        NavigationOutcome::OutOfHistory
    );
    assert_eq!(app.current_route().unwrap().location.path, "/");
}

#[test]
fn test_relaxed_matching_from_config() {
    let mut config = AppConfig::default();
    config.router.sensitive = false;
    config.router.strict = false;

    let (booted, _document) = common::boot_with(&config, "/Dashboard/");
    assert_eq!(booted.app.current_route().unwrap().view_name(), "Dashboard");
}

#[test]
fn test_custom_table_and_mount_point() {
    let mut config = AppConfig::default();
    config.mount.selector = "#root".into();
    config.routes = vec![
        RouteConfig::new("/home", "Dashboard").named("home"),
        RouteConfig::new("/:rest(.*)", "NotFound").named("missing"),
    ];

    let (booted, document) = common::boot_with(&config, "/");
    let active = booted.app.current_route().unwrap();
    assert_eq!(active.view_name(), "NotFound");
    assert_eq!(active.name.as_deref(), Some("missing"));
    assert_eq!(active.location.params.get("rest").map(String::as_str), Some(""));
    assert!(document
        .query_selector("#root")
        .unwrap()
        .inner_html()
        .contains("404"));
}

#[test]
fn test_example_config_boots() {
    let config = bank_dashboard::config::load_config(std::path::Path::new(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/config/app.example.toml"
    )))
    .unwrap();

    let (booted, _document) = common::boot_with(&config, "/dashboard");
    let active = booted.app.current_route().unwrap();
    assert_eq!(active.name.as_deref(), Some("dashboard"));
    assert_eq!(
        booted.backend.app(None).unwrap().options().project_id,
        "your-project"
    );
}

#[test]
fn test_non_ascii_literal_is_reachable() {
    let mut config = AppConfig::default();
    config.routes = vec![
        RouteConfig::new("/", "Dashboard"),
        RouteConfig::new("/café", "Dashboard").named("cafe"),
        RouteConfig::new("/my page", "Dashboard").named("spaced"),
        RouteConfig::new("/:catchAll(.*)", "NotFound"),
    ];

    let (mut booted, mut document) = common::boot_with(&config, "/café");
    assert_eq!(booted.app.current_route().unwrap().name.as_deref(), Some("cafe"));

    booted.app.navigate(&mut document, "/my page").unwrap();
    let active = booted.app.current_route().unwrap();
    assert_eq!(active.name.as_deref(), Some("spaced"));
    assert_eq!(active.location.path, "/my page");
    assert_eq!(active.location.full_path, "/my%20page");
    assert!(common::mounted_html(&document).contains("data-view=\"Dashboard\""));

    booted.app.navigate(&mut document, "/%64ashboard").unwrap();
    assert_eq!(booted.app.current_route().unwrap().view_name(), "Dashboard");
}
