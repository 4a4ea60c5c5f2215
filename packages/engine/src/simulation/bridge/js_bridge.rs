//! Host bridge - the collaborator traits implemented over a JS object
//!
//! Expected host shape:
//! ```text
//! {
//!   createMedal(name, x, y, z, tiltX) -> handle   // required
//!   disposeMedal(handle)                          // required
//!   setInsertText(text)                           // required
//!   setScoreText(text)                            // required
//!   movePusher(x, y, z)                           // optional
//! }
//! ```
//! Handles are whatever the host returns (typically the mesh instance); their
//! position is read from `handle.position.{x,y,z}` every frame.
//!
//! Collaborator calls cannot fail from the lifecycle's point of view. A JS
//! exception is logged and the frame carries on.

use std::cell::Cell;

use js_sys::{Array, Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use crate::core::vec3::Vec3;
use crate::domain::medal::Placement;
use crate::systems::lifecycle::{MedalEngine, ScoreDisplay};

fn method(host: &JsValue, name: &str) -> Result<Function, String> {
    let value = Reflect::get(host, &JsValue::from_str(name))
        .map_err(|_| format!("host.{} is not readable", name))?;
    value
        .dyn_into::<Function>()
        .map_err(|_| format!("host.{} must be a function", name))
}

fn optional_method(host: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(host, &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
}

fn read_number(target: &JsValue, key: &str) -> Option<f64> {
    Reflect::get(target, &JsValue::from_str(key)).ok()?.as_f64()
}

fn read_position(handle: &JsValue) -> Option<Vec3> {
    if !handle.is_object() {
        return None;
    }
    let position = Reflect::get(handle, &JsValue::from_str("position")).ok()?;
    if !position.is_object() {
        return None;
    }
    Some(Vec3::new(
        read_number(&position, "x")? as f32,
        read_number(&position, "y")? as f32,
        read_number(&position, "z")? as f32,
    ))
}

pub struct JsEngine {
    host: JsValue,
    create_medal: Function,
    dispose_medal: Function,
    move_pusher: Option<Function>,
    // Position read failures repeat every frame; report only the first.
    position_warned: Cell<bool>,
}

impl JsEngine {
    pub fn from_host(host: &JsValue) -> Result<Self, String> {
        if !host.is_object() {
            return Err("host must be an object".to_string());
        }
        Ok(Self {
            host: host.clone(),
            create_medal: method(host, "createMedal")?,
            dispose_medal: method(host, "disposeMedal")?,
            move_pusher: optional_method(host, "movePusher"),
            position_warned: Cell::new(false),
        })
    }
}

impl MedalEngine for JsEngine {
    type Handle = JsValue;

    fn create_body(&mut self, placement: &Placement) -> Option<JsValue> {
        let args = Array::new();
        args.push(&JsValue::from_str(&placement.id.name()));
        args.push(&JsValue::from_f64(placement.position.x as f64));
        args.push(&JsValue::from_f64(placement.position.y as f64));
        args.push(&JsValue::from_f64(placement.position.z as f64));
        args.push(&JsValue::from_f64(placement.tilt_x as f64));

        match self.create_medal.apply(&self.host, &args) {
            Ok(handle) if handle.is_undefined() || handle.is_null() => {
                console_warn!("createMedal({}) returned no body", placement.id.name());
                None
            }
            Ok(handle) => Some(handle),
            Err(err) => {
                console_warn!("createMedal({}) failed: {:?}", placement.id.name(), err);
                None
            }
        }
    }

    fn destroy_body(&mut self, handle: JsValue) {
        if let Err(err) = self.dispose_medal.call1(&self.host, &handle) {
            console_warn!("disposeMedal failed: {:?}", err);
        }
    }

    fn position(&self, handle: &JsValue) -> Vec3 {
        match read_position(handle) {
            Some(position) => position,
            None => {
                if !self.position_warned.replace(true) {
                    console_warn!("medal handle has no readable position, keeping it in play");
                }
                Vec3::new(f32::NAN, f32::NAN, f32::NAN)
            }
        }
    }

    fn place_pusher(&mut self, position: Vec3) {
        let Some(move_pusher) = &self.move_pusher else {
            return;
        };
        let result = move_pusher.call3(
            &self.host,
            &JsValue::from_f64(position.x as f64),
            &JsValue::from_f64(position.y as f64),
            &JsValue::from_f64(position.z as f64),
        );
        if let Err(err) = result {
            console_warn!("movePusher failed: {:?}", err);
        }
    }
}

pub struct JsDisplay {
    host: JsValue,
    set_insert_text: Function,
    set_score_text: Function,
}

impl JsDisplay {
    pub fn from_host(host: &JsValue) -> Result<Self, String> {
        Ok(Self {
            host: host.clone(),
            set_insert_text: method(host, "setInsertText")?,
            set_score_text: method(host, "setScoreText")?,
        })
    }

    fn call(&self, setter: &Function, text: &str) {
        if let Err(err) = setter.call1(&self.host, &JsValue::from_str(text)) {
            console_warn!("label update to {:?} failed: {:?}", text, err);
        }
    }
}

impl ScoreDisplay for JsDisplay {
    fn set_insert_text(&mut self, text: &str) {
        self.call(&self.set_insert_text, text);
    }

    fn set_score_text(&mut self, text: &str) {
        self.call(&self.set_score_text, text);
    }
}
