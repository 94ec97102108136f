use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, PointerEvent};
use yew::prelude::*;

use super::controls_panel::ControlsPanel;
use crate::engine::Engine;
use crate::input::{Command, InputEvent};
use crate::leaderboard::{LocalScoreStore, SCORE_KEY};
use crate::model::RoundConfig;
use crate::render::paint;
use crate::state::Surface;
use crate::util::{clog, cwarn};

pub const CANVAS_ID: &str = "quantum-canvas";

type SharedEngine = Rc<RefCell<Option<Engine<LocalScoreStore>>>>;

/// Canvas logical size from its attributes, falling back to 800x420.
fn surface_of(canvas: &HtmlCanvasElement) -> Surface {
    let default = Surface::default();
    let width = if canvas.width() > 0 { canvas.width() as f64 } else { default.width };
    let height = if canvas.height() > 0 { canvas.height() as f64 } else { default.height };
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    Surface { width, height }
}

/// Client coordinates to canvas pixels, accounting for CSS scaling.
fn canvas_point(canvas: &HtmlCanvasElement, e: &PointerEvent) -> (f64, f64) {
    let rect = canvas.get_bounding_client_rect();
    let sx = if rect.width() > 0.0 { canvas.width() as f64 / rect.width() } else { 1.0 };
    let sy = if rect.height() > 0.0 { canvas.height() as f64 / rect.height() } else { 1.0 };
    (
        (e.client_x() as f64 - rect.left()) * sx,
        (e.client_y() as f64 - rect.top()) * sy,
    )
}

fn feed(engine: &SharedEngine, event: InputEvent) {
    if let Some(e) = engine.borrow_mut().as_mut() {
        e.handle(&event);
    }
}

/// Wires the engine to the canvas. Returns the teardown, or `None` when the
/// surface cannot be drawn on and the game stays disabled.
fn mount(
    canvas: HtmlCanvasElement,
    engine: SharedEngine,
    paused_label: UseStateHandle<bool>,
) -> Option<Box<dyn FnOnce()>> {
    let window = web_sys::window()?;
    let ctx = match canvas.get_context("2d") {
        Ok(Some(c)) => c.dyn_into::<CanvasRenderingContext2d>().ok()?,
        _ => {
            cwarn("2d context unavailable; game disabled");
            return None;
        }
    };
    let surface = surface_of(&canvas);
    let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
    *engine.borrow_mut() = Some(Engine::new(
        RoundConfig::default(),
        surface,
        seed,
        LocalScoreStore::new(SCORE_KEY),
        js_sys::Date::now,
    ));
    clog(&format!("engine started on {}x{}", surface.width, surface.height));

    // Frame loop
    let raf_id = Rc::new(RefCell::new(None));
    let frame_cell: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    {
        let raf_id_loop = raf_id.clone();
        let frame_cell_loop = frame_cell.clone();
        let window_loop = window.clone();
        let engine = engine.clone();
        let last_paused = Rc::new(RefCell::new(false));
        *frame_cell.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
            let snap = match engine.borrow_mut().as_mut() {
                Some(e) => e.frame(ts),
                None => return,
            };
            paint(&ctx, &snap);
            if *last_paused.borrow() != snap.paused {
                *last_paused.borrow_mut() = snap.paused;
                paused_label.set(snap.paused);
            }
            if let Some(cb) = frame_cell_loop.borrow().as_ref() {
                if let Ok(id) = window_loop.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    *raf_id_loop.borrow_mut() = Some(id);
                }
            }
        }) as Box<dyn FnMut(f64)>));
        if let Some(cb) = frame_cell.borrow().as_ref() {
            if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                *raf_id.borrow_mut() = Some(id);
            }
        }
    }

    // Pointer: press on the canvas, drag and release anywhere.
    let pointerdown_cb = {
        let engine = engine.clone();
        let canvas = canvas.clone();
        Closure::wrap(Box::new(move |e: PointerEvent| {
            if e.button() != 0 {
                return;
            }
            let (x, y) = canvas_point(&canvas, &e);
            feed(&engine, InputEvent::PointerDown { x, y });
        }) as Box<dyn FnMut(_)>)
    };
    let pointermove_cb = {
        let engine = engine.clone();
        let canvas = canvas.clone();
        Closure::wrap(Box::new(move |e: PointerEvent| {
            let (x, y) = canvas_point(&canvas, &e);
            feed(&engine, InputEvent::PointerMove { x, y });
        }) as Box<dyn FnMut(_)>)
    };
    let pointerup_cb = {
        let engine = engine.clone();
        Closure::wrap(Box::new(move |_e: PointerEvent| {
            feed(&engine, InputEvent::PointerUp);
        }) as Box<dyn FnMut(_)>)
    };
    let keydown_cb = {
        let engine = engine.clone();
        Closure::wrap(Box::new(move |e: KeyboardEvent| {
            if e.code() == "Space" {
                e.prevent_default();
            }
            feed(&engine, InputEvent::Key { code: e.code(), key: e.key() });
        }) as Box<dyn FnMut(_)>)
    };
    let _ = canvas.add_event_listener_with_callback("pointerdown", pointerdown_cb.as_ref().unchecked_ref());
    let _ = window.add_event_listener_with_callback("pointermove", pointermove_cb.as_ref().unchecked_ref());
    let _ = window.add_event_listener_with_callback("pointerup", pointerup_cb.as_ref().unchecked_ref());
    let _ = window.add_event_listener_with_callback("keydown", keydown_cb.as_ref().unchecked_ref());

    let teardown: Box<dyn FnOnce()> = Box::new(move || {
        let _ = canvas.remove_event_listener_with_callback("pointerdown", pointerdown_cb.as_ref().unchecked_ref());
        let _ = window.remove_event_listener_with_callback("pointermove", pointermove_cb.as_ref().unchecked_ref());
        let _ = window.remove_event_listener_with_callback("pointerup", pointerup_cb.as_ref().unchecked_ref());
        let _ = window.remove_event_listener_with_callback("keydown", keydown_cb.as_ref().unchecked_ref());
        if let Some(id) = raf_id.borrow_mut().take() {
            let _ = window.cancel_animation_frame(id);
        }
        // Breaks the loop's self reference.
        frame_cell.borrow_mut().take();
        engine.borrow_mut().take();
        drop((pointerdown_cb, pointermove_cb, pointerup_cb, keydown_cb));
    });
    Some(teardown)
}

#[function_component(RoundView)]
pub fn round_view() -> Html {
    let canvas_ref = use_node_ref();
    let engine: SharedEngine = use_mut_ref(|| None);
    let paused = use_state(|| false);

    // Main mount effect (engine, listeners, frame loop)
    {
        let canvas_ref = canvas_ref.clone();
        let engine = engine.clone();
        let paused = paused.clone();
        use_effect_with((), move |_| {
            let teardown = match canvas_ref.cast::<HtmlCanvasElement>() {
                Some(canvas) => mount(canvas, engine, paused),
                None => {
                    cwarn("canvas missing; game disabled");
                    None
                }
            };
            teardown.unwrap_or_else(|| Box::new(|| ()) as Box<dyn FnOnce()>)
        });
    }

    let send = |command: Command| {
        let engine = engine.clone();
        Callback::from(move |()| {
            if let Some(e) = engine.borrow_mut().as_mut() {
                e.command(command);
            }
        })
    };
    let pause_label = if *paused { "Resume" } else { "Pause" };

    html! {<div style="display:flex; flex-direction:column; align-items:center; padding:12px;">
        <canvas ref={canvas_ref} id={CANVAS_ID} width="800" height="420" style="max-width:100%; touch-action:none;"></canvas>
        <ControlsPanel pause_label={pause_label.to_string()} on_toggle_pause={send(Command::TogglePause)} on_restart={send(Command::Restart)} />
    </div>}
}
