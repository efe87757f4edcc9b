//! WebGPU client for Unfair Pong
//!
//! Runs a [`game_core::Session`] in the browser. Shapes go through wgpu,
//! text through a 2D canvas layered on top. The host page owns the
//! `requestAnimationFrame` loop and calls [`frame`] then [`render_frame`].

#[macro_use]
pub mod logging;

pub mod camera;
pub mod hud;
pub mod input;
pub mod instances;
pub mod mesh;
pub mod timing;

#[cfg(target_arch = "wasm32")]
mod renderer;

#[cfg(target_arch = "wasm32")]
pub use web::*;

/// Pick a preset by name; anything unrecognised gets the key-start game
pub fn config_for_variant(name: &str) -> game_core::Config {
    match name {
        "countdown" | "a" | "A" => game_core::Config::countdown_variant(),
        _ => game_core::Config::key_start_variant(),
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::*;
    use crate::hud::Hud;
    use crate::renderer::Renderer;
    use crate::timing::{FixedStep, SIM_FIXED_DT};
    use game_core::Session;
    use glam::Vec2;
    use std::cell::RefCell;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    /// Main client state
    pub struct Client {
        session: Session,
        renderer: Renderer,
        hud: Hud,
        clock: FixedStep,
    }

    impl Client {
        pub async fn new(
            canvas: HtmlCanvasElement,
            overlay: HtmlCanvasElement,
            variant: &str,
        ) -> Result<Self, JsValue> {
            let config = config_for_variant(variant);
            let field = Vec2::new(config.field_width, config.field_height);
            let seed = js_sys::Date::now() as u64;

            let renderer = Renderer::new(canvas, field.x, field.y)
                .await
                .map_err(|e| JsValue::from_str(&e))?;
            let hud = Hud::new(overlay, field).map_err(|e| JsValue::from_str(&e))?;

            console_log!("Unfair Pong: {:?} start, seed {}", config.start_gate, seed);
            Ok(Self {
                session: Session::new(config, seed),
                renderer,
                hud,
                clock: FixedStep::new(),
            })
        }

        /// Run however many fixed steps `dt` real seconds cover
        pub fn frame(&mut self, dt: f32) {
            for _ in 0..self.clock.advance(dt) {
                self.session.on_frame(SIM_FIXED_DT);
                let score = self.session.score.value;
                for line in logging::describe_events(&self.session.events, score) {
                    console_log!("{}", line);
                }
            }
        }

        pub fn render(&mut self) -> Result<(), JsValue> {
            let scene = self.session.scene();
            self.renderer
                .draw(&scene)
                .and_then(|_| self.hud.draw(&scene.texts))
                .map_err(|e| {
                    console_error!("Render failed: {}", e);
                    JsValue::from_str(&e)
                })
        }
    }

    thread_local! {
        static CLIENT: RefCell<Option<Client>> = const { RefCell::new(None) };
    }

    fn with_client<T>(f: impl FnOnce(&mut Client) -> T) -> Result<T, JsValue> {
        CLIENT.with(|cell| match cell.borrow_mut().as_mut() {
            Some(client) => Ok(f(client)),
            None => Err(JsValue::from_str("Client not initialized")),
        })
    }

    /// Create the client. `variant` is "countdown" or "key-start".
    #[wasm_bindgen]
    pub fn init_client(
        canvas: HtmlCanvasElement,
        overlay: HtmlCanvasElement,
        variant: String,
    ) -> js_sys::Promise {
        console_error_panic_hook::set_once();
        wasm_bindgen_futures::future_to_promise(async move {
            let client = Client::new(canvas, overlay, &variant).await?;
            CLIENT.with(|cell| *cell.borrow_mut() = Some(client));
            Ok(JsValue::UNDEFINED)
        })
    }

    /// Advance the game by `dt` real seconds at a fixed 60 Hz
    #[wasm_bindgen]
    pub fn frame(dt: f32) -> Result<(), JsValue> {
        with_client(|client| client.frame(dt))
    }

    #[wasm_bindgen]
    pub fn render_frame() -> Result<(), JsValue> {
        with_client(|client| client.render())?
    }

    /// Returns true when the page should suppress the key's default action
    #[wasm_bindgen]
    pub fn key_down(key: &str) -> Result<bool, JsValue> {
        with_client(|client| client.session.on_key_down(input::key_from_name(key)))?;
        Ok(input::should_prevent_default(key))
    }

    #[wasm_bindgen]
    pub fn key_up(key: &str) -> Result<bool, JsValue> {
        with_client(|client| client.session.on_key_up(input::key_from_name(key)))?;
        Ok(input::should_prevent_default(key))
    }

    #[wasm_bindgen]
    pub fn resize(width: u32, height: u32) -> Result<(), JsValue> {
        with_client(|client| client.renderer.resize(width, height))
    }

    /// Once true, the host stops its loop and closes the window
    #[wasm_bindgen]
    pub fn is_closed() -> bool {
        with_client(|client| client.session.is_closed()).unwrap_or(false)
    }

    /// Window close request
    #[wasm_bindgen]
    pub fn close_session() -> Result<(), JsValue> {
        with_client(|client| {
            client.session.close();
            console_log!("Session: closed by host");
        })
    }
}
