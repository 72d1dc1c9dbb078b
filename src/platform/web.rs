//! Browser host
//!
//! Wires the game to the page: `#gameCanvas` for WebGPU output, `#score` and
//! `#lives` for the HUD, `#pauseBtn` / `#restartBtn` for controls, and
//! document keyboard events for the paddle. Frames are driven by
//! `requestAnimationFrame` and only re-requested while the loop says so.

use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlCanvasElement, KeyboardEvent, MouseEvent};

use crate::config::GameConfig;
use crate::game_loop::{GameLoop, Hud, LoopControl, StopReason};
use crate::renderer::{RenderError, RenderState, VertexBatch};

const CANVAS_ID: &str = "gameCanvas";
const SCORE_ID: &str = "score";
const LIVES_ID: &str = "lives";
const PAUSE_BTN_ID: &str = "pauseBtn";
const RESTART_BTN_ID: &str = "restartBtn";

/// Startup failures
#[derive(Debug, Error)]
pub enum WebError {
    #[error("missing DOM object: {0}")]
    Missing(&'static str),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Score and lives text sinks
struct DomHud {
    score: Option<Element>,
    lives: Option<Element>,
}

impl DomHud {
    fn new(document: &Document) -> Self {
        let score = document.get_element_by_id(SCORE_ID);
        let lives = document.get_element_by_id(LIVES_ID);
        if score.is_none() || lives.is_none() {
            log::warn!("HUD elements #{SCORE_ID} / #{LIVES_ID} not found");
        }
        Self { score, lives }
    }
}

impl Hud for DomHud {
    fn show(&mut self, score: u64, lives: u32) {
        if let Some(el) = &self.score {
            el.set_text_content(Some(&score.to_string()));
        }
        if let Some(el) = &self.lives {
            el.set_text_content(Some(&lives.to_string()));
        }
    }

    /// Blocking alert, then a full reload: the only way out of game over
    fn announce_game_over(&mut self, _score: u64) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message("GAME OVER");
            reload(&window);
        }
    }
}

struct App {
    game: GameLoop,
    batch: VertexBatch,
    render_state: RenderState,
    hud: DomHud,
    /// An animation frame is already requested
    frame_pending: bool,
}

impl App {
    fn frame(&mut self) -> LoopControl {
        let control = self.game.frame(&mut self.batch, &mut self.hud);
        if control != LoopControl::Stop(StopReason::Paused) {
            self.render();
        }
        control
    }

    fn render(&mut self) {
        match self.render_state.render(&self.batch) {
            Ok(()) => {}
            // Reconfigure surface if lost or outdated
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let (w, h) = self.render_state.size;
                self.render_state.resize(w, h);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory!");
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}

fn reload(window: &web_sys::Window) {
    if let Err(e) = window.location().reload() {
        log::error!("Reload failed: {:?}", e);
    }
}

/// Entry point for the browser build
pub async fn run() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }

    log::info!("Block Breaker starting...");

    if let Err(e) = start().await {
        log::error!("Failed to start: {e}");
    }
}

async fn start() -> Result<(), WebError> {
    let window = web_sys::window().ok_or(WebError::Missing("window"))?;
    let document = window.document().ok_or(WebError::Missing("document"))?;

    let canvas: HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or(WebError::Missing("#gameCanvas"))?
        .dyn_into()
        .map_err(|_| WebError::Missing("#gameCanvas as <canvas>"))?;

    let config = GameConfig::load();
    let width = config.field_width as u32;
    let height = config.field_height as u32;
    canvas.set_width(width);
    canvas.set_height(height);

    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
        ..Default::default()
    });

    let surface = instance
        .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
        .map_err(RenderError::from)?;

    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        })
        .await
        .map_err(RenderError::from)?;

    log::info!("Using adapter: {:?}", adapter.get_info().name);

    let field_size = (config.field_width, config.field_height);
    let render_state = RenderState::new(surface, &adapter, width, height, field_size).await?;

    let app = Rc::new(RefCell::new(App {
        game: GameLoop::new(config),
        batch: VertexBatch::new(),
        render_state,
        hud: DomHud::new(&document),
        frame_pending: false,
    }));

    setup_keyboard(&document, app.clone());
    setup_pause_button(&document, app.clone());
    setup_restart_button(&document, app.clone());

    request_frame(app);

    log::info!("Block Breaker running!");
    Ok(())
}

fn setup_keyboard(document: &Document, app: Rc<RefCell<App>>) {
    {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let mut a = app.borrow_mut();
            let key = event.key();
            match key.as_str() {
                // Demo mode
                "i" | "I" => {
                    a.game.toggle_autopilot();
                }
                _ => {
                    a.game.key_down(&key);
                }
            }
        });
        let _ = document
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            app.borrow_mut().game.key_up(&event.key());
        });
        let _ =
            document.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn setup_pause_button(document: &Document, app: Rc<RefCell<App>>) {
    let Some(btn) = document.get_element_by_id(PAUSE_BTN_ID) else {
        log::warn!("No #{PAUSE_BTN_ID} on the page");
        return;
    };

    let label = btn.clone();
    let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
        let control = app.borrow_mut().game.toggle_pause();
        label.set_text_content(Some(app.borrow().game.pause_label()));

        // The loop stopped requesting frames while paused
        if control == LoopControl::Continue {
            request_frame(app.clone());
        }
    });
    let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn setup_restart_button(document: &Document, app: Rc<RefCell<App>>) {
    let Some(btn) = document.get_element_by_id(RESTART_BTN_ID) else {
        log::warn!("No #{RESTART_BTN_ID} on the page");
        return;
    };

    let pause_btn = document.get_element_by_id(PAUSE_BTN_ID);
    let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
        let Some(window) = web_sys::window() else {
            return;
        };
        match window.location().reload() {
            Ok(()) => log::info!("Restarting..."),
            Err(e) => {
                // Reload refused; start over in place instead
                log::warn!("Reload failed ({:?}), restarting in place", e);
                app.borrow_mut().game.restart();
                if let Some(label) = &pause_btn {
                    label.set_text_content(Some(app.borrow().game.pause_label()));
                }
                request_frame(app.clone());
            }
        }
    });
    let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Ask for one animation frame unless one is already pending
fn request_frame(app: Rc<RefCell<App>>) {
    if std::mem::replace(&mut app.borrow_mut().frame_pending, true) {
        return;
    }
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(move |_time: f64| {
        game_loop(app);
    });
    let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    closure.forget();
}

fn game_loop(app: Rc<RefCell<App>>) {
    let control = {
        let mut a = app.borrow_mut();
        a.frame_pending = false;
        a.frame()
    };

    match control {
        LoopControl::Continue => request_frame(app),
        LoopControl::Stop(reason) => log::debug!("Frame loop stopped: {:?}", reason),
    }
}
