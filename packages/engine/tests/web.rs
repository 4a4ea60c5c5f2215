//! Facade tests against a JS host object; run with `wasm-pack test --node`.
#![cfg(target_arch = "wasm32")]

use js_sys::{Function, Object, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

use medal_pusher_engine::MedalPusher;

fn set(target: &Object, key: &str, value: &JsValue) {
    Reflect::set(target, &JsValue::from_str(key), value).unwrap();
}

/// Host whose medals are plain `{ name, position }` objects and whose labels
/// are stored on the host itself
fn host() -> Object {
    let host = Object::new();
    set(&host, "disposed", &JsValue::from_f64(0.0));
    set(
        &host,
        "createMedal",
        &Function::new_with_args(
            "name, x, y, z, tiltX",
            "return { name: name, tiltX: tiltX, position: { x: x, y: y, z: z } };",
        ),
    );
    set(&host, "disposeMedal", &Function::new_with_args("m", "this.disposed += 1;"));
    set(&host, "setInsertText", &Function::new_with_args("t", "this.insertText = t;"));
    set(&host, "setScoreText", &Function::new_with_args("t", "this.scoreText = t;"));
    set(&host, "movePusher", &Function::new_with_args("x, y, z", "this.pusherZ = z;"));
    host
}

fn get(host: &Object, key: &str) -> JsValue {
    Reflect::get(host, &JsValue::from_str(key)).unwrap()
}

#[wasm_bindgen_test]
fn start_and_drop_through_host() {
    let host = host();
    let mut pusher = MedalPusher::new(host.clone().into(), Some(r#"{"initialMedals": 5, "seed": 1}"#.to_string()))
        .expect("host is complete");

    assert_eq!(pusher.start(), 5);
    assert_eq!(get(&host, "insertText"), JsValue::from_str("Insert: 0"));
    assert_eq!(get(&host, "scoreText"), JsValue::from_str("Score: 0"));

    pusher.frame(3000.0);
    assert_eq!(pusher.inserted_count(), 1);
    assert_eq!(pusher.active_medals(), 6);
    assert_eq!(get(&host, "insertText"), JsValue::from_str("Insert: 10"));
    assert!(get(&host, "pusherZ").as_f64().is_some());
}

#[wasm_bindgen_test]
fn missing_callback_is_rejected() {
    let host = host();
    Reflect::delete_property(&host, &JsValue::from_str("disposeMedal")).unwrap();
    assert!(MedalPusher::new(host.into(), None).is_err());
}

#[wasm_bindgen_test]
fn invalid_config_is_rejected() {
    let result = MedalPusher::new(host().into(), Some(r#"{"spawnIntervalMs": -1}"#.to_string()));
    assert!(result.is_err());
}

#[wasm_bindgen_test]
fn session_failure_keeps_skybox() {
    let mut pusher = MedalPusher::new(host().into(), Some("{}".to_string())).unwrap();
    pusher.session_started();
    assert!(!pusher.skybox_visible());
    pusher.session_failed("NotAllowedError".to_string());
    assert!(pusher.skybox_visible());
    assert!(!pusher.immersive());
}
