mod common;

use articlehub::features::session::SessionState;
use articlehub::routes::{
    article_details_path, AppRoute, GuardState, PathPattern, Rendered, RouteEntry, RouteTable,
    RouteTableError, Router, View,
};

fn router() -> Router {
    Router::new(RouteTable::app_routes().unwrap(), "/").unwrap()
}

#[test]
fn every_guarded_route_redirects_without_session() {
    let session = common::anonymous_session();
    for path in ["/profile", "/articles", "/articles/7"] {
        let nav = router().navigate(path, Some(&session));
        assert_eq!(nav.location, "/", "{path}");
        assert_eq!(nav.route, AppRoute::Main);
        assert_eq!(nav.rendered(), Rendered::View(View::Home));
        assert_eq!(nav.redirected_from.as_deref(), Some(path));
    }
}

#[test]
fn guarded_routes_render_with_session() {
    let session = common::alice_session();
    let nav = router().navigate("/profile", Some(&session));
    assert_eq!(nav.guard, GuardState::Authorized);
    assert_eq!(nav.rendered(), Rendered::View(View::Profile));
    assert!(nav.redirected_from.is_none());

    let nav = router().navigate(&article_details_path("42"), Some(&session));
    assert_eq!(nav.route, AppRoute::ArticleDetails);
    assert_eq!(nav.param("id"), Some("42"));
}

#[test]
fn public_routes_ignore_session() {
    for session in [
        None,
        Some(SessionState::default()),
        Some(common::anonymous_session()),
    ] {
        let nav = router().navigate("/about", session.as_ref());
        assert_eq!(nav.guard, GuardState::Unguarded);
        assert_eq!(nav.rendered(), Rendered::View(View::About));
    }
}

#[test]
fn uninitialised_session_shows_loading() {
    let nav = router().navigate("/articles", Some(&SessionState::default()));
    assert_eq!(nav.guard, GuardState::Checking);
    assert_eq!(nav.rendered(), Rendered::Loading);
    assert_eq!(nav.location, "/articles");
}

#[test]
fn configured_redirect_target_is_used() {
    let router = Router::new(RouteTable::app_routes().unwrap(), "/about").unwrap();
    let nav = router.navigate("/profile", Some(&common::anonymous_session()));
    assert_eq!(nav.location, "/about");
    assert_eq!(nav.rendered(), Rendered::View(View::About));
}

#[test]
fn unknown_path_falls_through_to_catch_all() {
    let nav = router().navigate("/unknown-path", Some(&common::anonymous_session()));
    assert_eq!(nav.route, AppRoute::NotFound);
    assert_eq!(nav.guard, GuardState::Unguarded);
    assert_eq!(nav.rendered(), Rendered::View(View::NotFound));
}

#[test]
fn catch_all_declared_first_is_still_evaluated_last() {
    let table = RouteTable::new(vec![
        RouteEntry::new(AppRoute::NotFound, PathPattern::CATCH_ALL, View::NotFound).unwrap(),
        RouteEntry::new(AppRoute::Main, "/", View::Home).unwrap(),
        RouteEntry::new(AppRoute::About, "/about", View::About).unwrap(),
    ])
    .unwrap();
    assert_eq!(table.entries().last().unwrap().id, AppRoute::NotFound);

    let router = Router::new(table, "/").unwrap();
    let nav = router.navigate("/about", None);
    assert_eq!(nav.route, AppRoute::About);
    let nav = router.navigate("/missing", None);
    assert_eq!(nav.route, AppRoute::NotFound);
}

#[test]
fn table_requires_exactly_one_catch_all() {
    let missing = RouteTable::new(vec![RouteEntry::new(AppRoute::Main, "/", View::Home).unwrap()]);
    assert_eq!(missing.unwrap_err(), RouteTableError::CatchAllCount { found: 0 });

    let doubled = RouteTable::new(vec![
        RouteEntry::new(AppRoute::NotFound, "*", View::NotFound).unwrap(),
        RouteEntry::new(AppRoute::Main, "*", View::Home).unwrap(),
    ]);
    assert_eq!(doubled.unwrap_err(), RouteTableError::CatchAllCount { found: 2 });
}

#[test]
fn table_rejects_duplicate_ids() {
    let result = RouteTable::new(vec![
        RouteEntry::new(AppRoute::Main, "/", View::Home).unwrap(),
        RouteEntry::new(AppRoute::Main, "/home", View::Home).unwrap(),
        RouteEntry::new(AppRoute::NotFound, "*", View::NotFound).unwrap(),
    ]);
    assert_eq!(
        result.unwrap_err(),
        RouteTableError::DuplicateRoute { id: AppRoute::Main }
    );
}

#[test]
fn app_routes_match_the_published_surface() {
    let table = RouteTable::app_routes().unwrap();
    let surface: Vec<_> = table
        .entries()
        .iter()
        .map(|entry| (entry.path.as_str(), entry.auth_only, entry.view))
        .collect();
    assert_eq!(
        surface,
        vec![
            ("/", false, View::Home),
            ("/about", false, View::About),
            ("/articles", true, View::ArticlesList),
            ("/articles/:id", true, View::ArticleDetails),
            ("/profile", true, View::Profile),
            ("*", false, View::NotFound),
        ]
    );
}
