//! Route table behaviour over the application's twelve tool routes.

use std::collections::HashSet;

use futures::FutureExt;
use futures::future::LocalBoxFuture;
use webtools_core::{LoadError, Route, RouteError, RouteTable};

type Page = &'static str;

macro_rules! page {
    ($id:literal) => {{
        fn load() -> LocalBoxFuture<'static, Result<Page, LoadError>> {
            async { Ok($id) }.boxed_local()
        }
        load
    }};
}

const DECLARED: [(&str, &str); 12] = [
    ("/", "home"),
    ("/gamepad", "gamepad"),
    ("/keyboard", "keyboard"),
    ("/microphone", "microphone"),
    ("/interest-calculator", "interest"),
    ("/unit-converter", "converter"),
    ("/color-converter", "color"),
    ("/text-tools", "text"),
    ("/json-formatter", "json"),
    ("/timezone-converter", "timezone"),
    ("/date-calculator", "date"),
    ("/regex-tester", "regex"),
];

fn table() -> RouteTable<Page> {
    RouteTable::new([
        Route::new("/", "home", page!("Home")),
        Route::new("/gamepad", "gamepad", page!("GamepadTester")),
        Route::new("/keyboard", "keyboard", page!("KeyboardTester")),
        Route::new("/microphone", "microphone", page!("MicrophoneTester")),
        Route::new("/interest-calculator", "interest", page!("InterestCalculator")),
        Route::new("/unit-converter", "converter", page!("UnitConverter")),
        Route::new("/color-converter", "color", page!("ColorConverter")),
        Route::new("/text-tools", "text", page!("TextTools")),
        Route::new("/json-formatter", "json", page!("JsonFormatter")),
        Route::new("/timezone-converter", "timezone", page!("TimezoneConverter")),
        Route::new("/date-calculator", "date", page!("DateCalculator")),
        Route::new("/regex-tester", "regex", page!("RegexTester")),
    ])
    .expect("route list is valid")
}

#[test]
fn paths_and_names_are_pairwise_distinct() {
    let table = table();
    let paths: HashSet<_> = table.iter().map(Route::path).collect();
    let names: HashSet<_> = table.iter().map(Route::name).collect();
    assert_eq!(paths.len(), table.len());
    assert_eq!(names.len(), table.len());
}

#[test]
fn declared_routes_in_order() {
    let actual: Vec<_> = table().iter().map(|r| (r.path(), r.name())).collect();
    assert_eq!(actual, DECLARED);
}

#[test]
fn url_for_round_trips_through_resolve() {
    let table = table();
    for (path, name) in DECLARED {
        assert_eq!(table.url_for(name), Ok(path));
        let resolved = table.resolve(table.url_for(name).unwrap()).unwrap();
        let named = table.by_name(name).unwrap();
        assert!(std::ptr::eq(resolved, named), "{name}");
    }
}

#[test]
fn resolve_known_and_unknown_paths() {
    let table = table();
    assert_eq!(table.resolve("/").unwrap().name(), "home");
    assert_eq!(table.resolve("/regex-tester").unwrap().name(), "regex");
    assert_eq!(
        table.resolve("/does-not-exist").unwrap_err(),
        RouteError::NotMatched {
            path: "/does-not-exist".to_string()
        }
    );
}

#[test]
fn url_for_unknown_name_fails() {
    assert_eq!(
        table().url_for("nonexistent-name"),
        Err(RouteError::NameNotFound {
            name: "nonexistent-name".to_string()
        })
    );
}

#[tokio::test]
async fn json_formatter_loads_exactly_once() {
    let table = table();

    assert_eq!(table.load("/json-formatter").await, Ok("JsonFormatter"));
    assert_eq!(table.load("/json-formatter").await, Ok("JsonFormatter"));

    let route = table.resolve("/json-formatter").unwrap();
    assert_eq!(route.name(), "json");
    assert_eq!(route.load_count(), 1);

    let untouched = table.iter().filter(|r| r.name() != "json");
    assert!(untouched.into_iter().all(|r| r.load_count() == 0));
}

#[test]
fn nothing_loads_at_construction() {
    let table = table();
    assert!(table.iter().all(|r| !r.is_loaded()));
}
