use serde_json::json;
use ui_accordion::prelude::*;

fn netbanking() -> serde_json::Value {
    json!({ "netbanking": { "AXIS": "Axis Bank", "HDFC": "HDFC Bank" } })
}

fn demo_config() -> UiConfig {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/payments.json");
    UiConfig::from_path(path).unwrap()
}

#[test]
fn netbanking_selection_round_trip() {
    let mut ui = UiManager::from_json(MemoryHost::new(), &netbanking(), "daisyui").unwrap();
    assert_eq!(ui.get_ui_state(), netbanking());

    ui.render().unwrap();
    assert_eq!(ui.host_mut().change("Ui-netbanking-AXIS", true), 1);

    assert_eq!(ui.get_ui_state()["netbanking"]["AXIS"], json!(true));
    assert_eq!(
        ui.get_state_json(),
        json!({ "netbanking": { "AXIS": true, "HDFC": "HDFC Bank" } })
    );
}

#[test]
fn default_state_mirrors_two_level_tree() {
    let tree = json!({
        "netbanking": { "AXIS": "Axis Bank", "HDFC": "HDFC Bank" },
        "cards": { "VISA": "Visa" },
        "wallet": {},
    });
    let ui = UiManager::from_json(MemoryHost::new(), &tree, "bootstrap").unwrap();
    assert_eq!(ui.get_ui_state(), tree);
    assert_eq!(ui.get_state_json(), tree);
}

#[test]
fn toggles_converge_to_last_event() {
    let mut ui = UiManager::new(MemoryHost::new(), demo_config(), Theme::Bootstrap);
    ui.render().unwrap();

    for checked in [true, true, false, true] {
        ui.host_mut().change("Ui-cards-RUPAY", checked);
    }
    assert!(ui.is_selected("cards-RUPAY").unwrap());

    ui.host_mut().change("Ui-cards-RUPAY", false);
    assert!(!ui.is_selected("cards-RUPAY").unwrap());
    assert_eq!(ui.get_ui_state()["cards"]["RUPAY"], json!(false));
}

#[test]
fn unsupported_theme_is_an_error() {
    let result = UiManager::from_json(MemoryHost::new(), &netbanking(), "foundation");
    match result {
        Err(UiError::UnsupportedTheme(name)) => assert_eq!(name, "foundation"),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected UnsupportedTheme"),
    }
}

#[test]
fn invalid_configuration_is_rejected() {
    let result = UiManager::from_json(
        MemoryHost::new(),
        &json!({ "net-banking": { "AXIS": "Axis Bank" } }),
        "daisyui",
    );
    assert!(matches!(result, Err(UiError::InvalidConfiguration(_))));
}

#[test]
fn falsy_groups_never_render() {
    for theme in [Theme::DaisyUi, Theme::Bootstrap] {
        let mut ui = UiManager::new(MemoryHost::new(), demo_config(), theme);
        ui.render().unwrap();
        let markup = ui.host().markup();

        assert!(markup.contains("Netbanking"), "{theme}: {markup}");
        assert!(markup.contains(r#"name="Ui-wallet-PHONEPE""#));
        assert!(!markup.contains("Upi"), "{theme}");
        assert!(!markup.contains("Emi"), "{theme}");
        assert!(!markup.contains("Ui-upi"), "{theme}");
    }

    let ui = UiManager::new(MemoryHost::new(), demo_config(), Theme::DaisyUi);
    let state = ui.get_ui_state();
    assert_eq!(state["upi"], json!({}));
    assert_eq!(state["emi"], json!(false));
}

#[test]
fn absent_groups_stay_in_default_state() {
    let tree = json!({ "upi": null, "emi": false, "cards": { "VISA": "Visa" } });
    let mut ui = UiManager::from_json(MemoryHost::new(), &tree, "bootstrap").unwrap();

    let expected = json!({ "upi": {}, "emi": false, "cards": { "VISA": "Visa" } });
    assert_eq!(ui.get_ui_state(), expected);

    ui.update_ui_state("cards-VISA", true).unwrap();
    assert_eq!(
        ui.get_state_json(),
        json!({ "upi": {}, "emi": false, "cards": { "VISA": true } })
    );
    assert!(matches!(
        ui.update_ui_state("upi-GPAY", true),
        Err(UiError::UnknownOption(_))
    ));
}

#[test]
fn group_keys_must_work_as_dom_ids() {
    for group in ["net banking", "net.banking", "net#banking"] {
        let tree = json!({ group: { "AXIS": "Axis Bank" } });
        let result = UiManager::from_json(MemoryHost::new(), &tree, "bootstrap");
        assert!(
            matches!(result, Err(UiError::InvalidConfiguration(_))),
            "expected rejection of group '{group}'"
        );
    }
}

#[test]
fn bootstrap_markup_wires_headers_to_bodies() {
    let config = UiConfig::from_value(&netbanking()).unwrap();
    let options = UiOptions::new(Theme::Bootstrap).with_accordion_id("payment-methods");
    let mut ui = UiManager::with_options(MemoryHost::new(), config, options);
    ui.render().unwrap();

    let markup = ui.host().markup();
    assert!(markup.starts_with(r#"<div class="accordion p-4 m-3" id="payment-methods">"#));
    assert!(markup.contains(r##"data-bs-target="#Ui-netbanking""##));
    assert!(markup.contains(r##"data-bs-parent="#payment-methods""##));
    assert!(markup.contains(r#"<input type="checkbox" name="Ui-netbanking-HDFC" class="form-check-input">"#));
}

#[test]
fn daisyui_markup_is_a_card() {
    let mut ui = UiManager::from_json(MemoryHost::new(), &netbanking(), "daisyui").unwrap();
    ui.update_ui_state("netbanking-HDFC", true).unwrap();
    ui.render().unwrap();

    let markup = ui.host().markup();
    assert!(markup.starts_with(r#"<div class="ui-manager card bg-base-100 w-96 shadow-xl"><div class="card-body">"#));
    assert!(markup.contains(r#"class="collapse collapse-plus border-base-300 bg-base-200 border""#));
    assert!(markup.contains(r#"name="Ui-netbanking-HDFC" checked>"#));
    assert!(markup.contains(r#"name="Ui-netbanking-AXIS">"#));
    assert!(markup.contains(r#"<span class="label-text">HDFC Bank</span>"#));
}

#[test]
fn exported_state_reseeds_selection() {
    let mut ui = UiManager::new(MemoryHost::new(), demo_config(), Theme::DaisyUi);
    ui.update_ui_state("netbanking-SBI", true).unwrap();
    ui.update_ui_state("wallet-PAYTM", false).unwrap();
    let exported = ui.get_state_json();

    let restored = UiManager::from_json(MemoryHost::new(), &exported, "daisyui").unwrap();
    let keys: Vec<String> = restored.selected_keys().iter().map(|k| k.to_string()).collect();
    assert_eq!(keys, vec!["netbanking-SBI"]);
    assert_eq!(restored.get_ui_state(), exported);
}

#[test]
fn stray_joined_keys_are_nested() {
    let repaired = unflatten(json!({ "a": { "c": false }, "a-b": true }));
    assert_eq!(repaired, json!({ "a": { "c": false, "b": true } }));
}

#[test]
fn labels_are_escaped() {
    let tree = json!({ "food": { "FISH": "Fish & <Chips>" } });
    let mut ui = UiManager::from_json(MemoryHost::new(), &tree, "bootstrap").unwrap();
    ui.render().unwrap();
    assert!(ui.host().markup().contains("<span>Fish &amp; &lt;Chips&gt;</span>"));
}
