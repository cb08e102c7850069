//! Sprite loading and the ready signal
//!
//! One image per fruit kind plus the bomb, loaded from `images/<name>.png`.
//! The session stays in Loading until every sprite has fired its load
//! event; the loop driver polls [`SpriteStore::is_ready`] each frame.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::HtmlImageElement;

use crate::sim::{FruitKind, ProjectileKind};

/// Fruit sprites plus the bomb
const SPRITE_COUNT: usize = FruitKind::ALL.len() + 1;

/// All renderable sprites and their collective ready state
pub struct SpriteStore {
    /// Indexed by [`FruitKind::index`]
    fruits: Vec<HtmlImageElement>,
    bomb: HtmlImageElement,
    loaded: Rc<Cell<usize>>,
}

impl SpriteStore {
    /// Kick off loading of every required sprite.
    pub fn load() -> Result<Self, JsValue> {
        let loaded = Rc::new(Cell::new(0usize));

        let mut fruits = Vec::with_capacity(FruitKind::ALL.len());
        for kind in FruitKind::ALL {
            let path = format!("images/{}.png", kind.as_str());
            fruits.push(load_sprite(&path, &loaded)?);
        }
        let bomb = load_sprite("images/bomb.png", &loaded)?;

        Ok(Self {
            fruits,
            bomb,
            loaded,
        })
    }

    /// True once every sprite has loaded. A failed load never becomes
    /// ready; the error is logged and the session stays in Loading.
    pub fn is_ready(&self) -> bool {
        self.loaded.get() == SPRITE_COUNT
    }

    /// The sprite for a projectile kind
    pub fn sprite_for(&self, kind: ProjectileKind) -> &HtmlImageElement {
        match kind {
            ProjectileKind::Fruit(fruit) => &self.fruits[fruit.index()],
            ProjectileKind::Bomb => &self.bomb,
        }
    }
}

/// Create one image element and hook its load/error events.
fn load_sprite(path: &str, loaded: &Rc<Cell<usize>>) -> Result<HtmlImageElement, JsValue> {
    let img = HtmlImageElement::new()?;

    {
        let loaded = loaded.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            loaded.set(loaded.get() + 1);
        });
        img.set_onload(Some(closure.as_ref().unchecked_ref()));
        closure.forget();
    }

    {
        let path = path.to_string();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            log::error!("Failed to load sprite {path}");
        });
        img.set_onerror(Some(closure.as_ref().unchecked_ref()));
        closure.forget();
    }

    img.set_src(path);
    Ok(img)
}
