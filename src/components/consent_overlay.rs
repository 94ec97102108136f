//! One-time-per-session privacy/terms notice. Independent of the round engine;
//! it only shares the page.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

pub const SHOWN_KEY: &str = "aimforce_popup_shown";
pub const DEFAULT_LOGO: &str = "assets/img/aimforce-logo.svg";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    Index,
    Lander,
}

impl PageKind {
    /// Pages that carry the notice; any other path returns `None`.
    pub fn classify(path: &str) -> Option<Self> {
        let path = path.to_lowercase();
        if path == "/" || path.ends_with('/') || path.ends_with("index.html") {
            Some(PageKind::Index)
        } else if path.ends_with("lander.html") || path.ends_with("lande.html") {
            Some(PageKind::Lander)
        } else {
            None
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsentChoice {
    Close,
    Decline,
    Accept,
    Escape,
}

impl ConsentChoice {
    /// Where the page goes after the notice is dismissed.
    /// On the lander every choice leads to the terms page.
    pub fn destination(self, page: PageKind) -> &'static str {
        match (page, self) {
            (PageKind::Index, ConsentChoice::Accept) => "terms.html",
            (PageKind::Index, _) => "privacy.html",
            (PageKind::Lander, _) => "terms.html",
        }
    }
}

fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok()?
}

/// Decides whether to show the notice and marks the session as shown if so.
fn claim_session_slot() -> Option<PageKind> {
    let window = web_sys::window()?;
    let path = window.location().pathname().ok()?;
    let page = PageKind::classify(&path)?;
    let store = session_storage()?;
    if store.get_item(SHOWN_KEY).ok().flatten().as_deref() == Some("1") {
        return None;
    }
    let _ = store.set_item(SHOWN_KEY, "1");
    Some(page)
}

/// The page icon doubles as the notice logo.
fn logo_src(icon_href: Option<String>) -> String {
    icon_href
        .filter(|href| !href.is_empty())
        .unwrap_or_else(|| DEFAULT_LOGO.to_string())
}

fn page_icon_href() -> Option<String> {
    let document = web_sys::window()?.document()?;
    document
        .query_selector("link[rel=\"icon\"]")
        .ok()??
        .get_attribute("href")
}

/// Locks page scroll with "hidden"; an empty value restores it.
fn set_body_overflow(value: &str) {
    let body = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body());
    if let Some(body) = body {
        let _ = body.style().set_property("overflow", value);
    }
}

fn navigate(url: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.location().set_href(url);
    }
}

#[function_component(ConsentOverlay)]
pub fn consent_overlay() -> Html {
    let page = use_state(claim_session_slot);

    let choose = {
        let page = page.clone();
        Callback::from(move |choice: ConsentChoice| {
            if let Some(kind) = *page {
                page.set(None);
                navigate(choice.destination(kind));
            }
        })
    };

    // Escape dismisses while the notice is up; the page behind does not scroll.
    {
        let choose = choose.clone();
        use_effect_with(*page, move |shown| {
            if shown.is_some() {
                set_body_overflow("hidden");
            }
            let listener = shown.map(|_| {
                Closure::wrap(Box::new(move |e: web_sys::KeyboardEvent| {
                    if e.key() == "Escape" {
                        choose.emit(ConsentChoice::Escape);
                    }
                }) as Box<dyn FnMut(_)>)
            });
            if let (Some(win), Some(cb)) = (web_sys::window(), listener.as_ref()) {
                let _ = win.add_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref());
            }
            move || {
                if let (Some(win), Some(cb)) = (web_sys::window(), listener.as_ref()) {
                    let _ = win.remove_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref());
                }
                if listener.is_some() {
                    set_body_overflow("");
                }
                drop(listener);
            }
        });
    }

    if page.is_none() {
        return html! {};
    }
    let on = |choice: ConsentChoice| {
        let cb = choose.clone();
        Callback::from(move |_: MouseEvent| cb.emit(choice))
    };
    html! {
        <div id="af-overlay" class="af-overlay" style="position:fixed; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.6); z-index:100;">
            <div class="af-modal" role="dialog" aria-modal="true" aria-labelledby="af-title" style="position:relative; background:#0b1a33; color:#eaf4ff; border:1px solid #30363d; border-radius:12px; padding:24px 28px; max-width:420px; width:90%;">
                <button class="af-close" aria-label="Close" onclick={on(ConsentChoice::Close)} style="position:absolute; top:8px; right:10px;">{"×"}</button>
                <div class="af-logo" style="display:flex; justify-content:center; margin-bottom:12px;">
                    <img src={logo_src(page_icon_href())} alt="AimForce" style="height:48px;" />
                </div>
                <h2 id="af-title" style="margin:0 0 12px 0;">{"Privacy & Terms"}</h2>
                <p class="af-text" style="margin:0 0 16px 0; line-height:1.4;">{"We use basic cookies and collect minimal analytics to improve gameplay and content. By continuing, you acknowledge our Privacy Policy and agree to our Terms."}</p>
                <div class="af-actions" style="display:flex; gap:12px; justify-content:center;">
                    <button class="af-btn af-accept" onclick={on(ConsentChoice::Accept)}>{"Accept"}</button>
                    <button class="af-btn af-secondary af-decline" onclick={on(ConsentChoice::Decline)}>{"Close"}</button>
                </div>
            </div>
        </div>
    }
}
