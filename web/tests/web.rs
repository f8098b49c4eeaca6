//! Browser tests, run with `wasm-pack test --headless --firefox web`.

#![cfg(target_arch = "wasm32")]

use gloo::utils::{body, document, document_element, window};
use themeswitch_core::*;
use themeswitch_web::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

/// Each test gets its own checkbox, storage key and attribute so they do not see each other.
fn page(name: &str) -> (ThemeConfig, HtmlInputElement) {
    let config = ThemeConfig {
        storage_key: format!("themeswitch-test:{}", name),
        attribute: format!("data-test-{}", name),
        toggle_id: format!("toggle-{}", name),
    };
    let input: HtmlInputElement = document()
        .create_element("input")
        .unwrap()
        .dyn_into()
        .unwrap();
    input.set_type("checkbox");
    input.set_id(&config.toggle_id);
    body().append_child(&input).unwrap();
    storage().remove_item(&config.storage_key).unwrap();
    (config, input)
}

fn storage() -> web_sys::Storage {
    window().local_storage().unwrap().unwrap()
}

fn flip(input: &HtmlInputElement, checked: bool) {
    input.set_checked(checked);
    input
        .dispatch_event(&Event::new("change").unwrap())
        .unwrap();
}

fn attribute(config: &ThemeConfig) -> Option<String> {
    document_element().get_attribute(&config.attribute)
}

#[wasm_bindgen_test]
fn missing_toggle_fails_install() {
    let config = ThemeConfig {
        toggle_id: "no-such-toggle".to_string(),
        ..ThemeConfig::default()
    };
    assert_eq!(
        ThemeSwitch::install(&config).err(),
        Some(ThemeError::MissingControl("no-such-toggle".to_string()))
    );
}

#[wasm_bindgen_test]
fn non_input_element_is_not_a_toggle() {
    let div = document().create_element("div").unwrap();
    div.set_id("toggle-div");
    body().append_child(&div).unwrap();
    assert!(matches!(
        CheckboxToggle::find("toggle-div"),
        Err(ThemeError::MissingControl(_))
    ));
}

#[wasm_bindgen_test]
fn document_theme_sets_attribute() {
    let mut sink = DocumentTheme::new("data-test-sink");
    sink.apply(Theme::Dark).unwrap();
    assert_eq!(sink.current(), Some(Theme::Dark));
    sink.apply(Theme::Light).unwrap();
    assert_eq!(
        document_element().get_attribute("data-test-sink").as_deref(),
        Some("light")
    );
}

#[wasm_bindgen_test]
fn stored_choice_applied_on_install() {
    let (config, input) = page("stored");
    storage().set_item(&config.storage_key, "dark").unwrap();

    let switch = ThemeSwitch::install(&config).unwrap();
    assert_eq!(switch.theme(), Some(Theme::Dark));
    assert_eq!(attribute(&config).as_deref(), Some("dark"));
    assert!(input.checked());
}

#[wasm_bindgen_test]
fn change_event_persists_choice() {
    let (config, input) = page("change");
    let _switch = ThemeSwitch::install(&config).unwrap();

    flip(&input, true);
    assert_eq!(attribute(&config).as_deref(), Some("dark"));
    assert_eq!(
        storage().get_item(&config.storage_key).unwrap().as_deref(),
        Some("dark")
    );

    flip(&input, false);
    assert_eq!(attribute(&config).as_deref(), Some("light"));
    assert_eq!(
        storage().get_item(&config.storage_key).unwrap().as_deref(),
        Some("light")
    );
}

#[wasm_bindgen_test]
fn dropping_switch_stops_listening() {
    let (config, input) = page("teardown");
    let switch = ThemeSwitch::install(&config).unwrap();
    flip(&input, true);
    drop(switch);

    flip(&input, false);
    assert_eq!(attribute(&config).as_deref(), Some("dark"));
    assert_eq!(
        storage().get_item(&config.storage_key).unwrap().as_deref(),
        Some("dark")
    );
}

#[wasm_bindgen_test]
fn local_store_reads_raw_strings() {
    let mut store = LocalStore::new("themeswitch-test:raw");
    assert!(store.is_attached());
    store.save("light").unwrap();
    assert_eq!(
        storage().get_item("themeswitch-test:raw").unwrap().as_deref(),
        Some("light")
    );
    assert_eq!(store.load().unwrap().as_deref(), Some("light"));
}
