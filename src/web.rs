//! DOM wiring for the proposal flow.
//!
//! Builds the three screens once, applies the theme token set to the document
//! root, and re-renders the handful of dynamic bits (visible screen, No-button
//! position/label, progress fill, hint line) after every state transition.
//! All mutable state lives in the thread-local [`ProposalApp`]; handlers
//! mutate it synchronously and then read it back out for rendering.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window, window};

use crate::config::{self, AppConfig};
use crate::decor;
use crate::flow::{NoOutcome, PageState, ProposalApp};
use crate::geometry::{CursorPoint, ElementSize, Lcg, ViewportBounds};

/// How long the dodge wiggle animation runs before the flag clears.
const WIGGLE_MS: i32 = 500;
/// Delay before confetti appears on the success screen.
const CONFETTI_REVEAL_MS: i32 = 300;
/// Confetti is removed once the fall animation has played out.
const CONFETTI_CLEAR_MS: i32 = 3000;

// RefCell::new isn't const on this toolchain; allow Clippy lint until a const initializer is feasible.
thread_local! {
    static APP: std::cell::RefCell<Option<ProposalApp>> = std::cell::RefCell::new(None);
    static CONFIG: std::cell::RefCell<Option<AppConfig>> = std::cell::RefCell::new(None);
}

fn with_app<R>(f: impl FnOnce(&mut ProposalApp) -> R) -> Option<R> {
    APP.with(|cell| cell.borrow_mut().as_mut().map(f))
}

pub fn start_app() -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let cfg = AppConfig::default();
    apply_theme(&doc, &cfg)?;
    build_dom(&doc, &cfg)?;

    let app = ProposalApp::new(read_viewport(&win), rng_seed());
    APP.with(|cell| cell.replace(Some(app)));
    CONFIG.with(|cell| cell.replace(Some(cfg)));

    wire_events(&win, &doc)?;
    render();
    Ok(())
}

// --- Startup helpers ---------------------------------------------------------

/// Apply the pure theme token set to the document root, once.
fn apply_theme(doc: &Document, cfg: &AppConfig) -> Result<(), JsValue> {
    let root: web_sys::HtmlElement = doc
        .document_element()
        .ok_or_else(|| JsValue::from_str("no document element"))?
        .dyn_into()?;
    for (name, value) in config::theme_tokens(cfg) {
        root.style().set_property(name, value)?;
    }
    Ok(())
}

fn read_viewport(win: &Window) -> ViewportBounds {
    let width = win
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .filter(|v| *v > 0.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .filter(|v| *v > 0.0);
    if width.is_none() || height.is_none() {
        web_sys::console::warn_1(&JsValue::from_str(
            "viewport bounds unavailable, falling back to 800x600",
        ));
    }
    ViewportBounds::new(width.unwrap_or(800.0) as i32, height.unwrap_or(600.0) as i32)
}

/// Measure the rendered No button and hand the size to the core. Only
/// meaningful once the invitation screen is visible; a non-positive
/// measurement keeps the fixed default inside the core.
fn measure_no_button() {
    let measured = window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id("va-no"))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        .map(|el| ElementSize::new(el.offset_width(), el.offset_height()));
    match measured {
        Some(size) if size.width > 0 && size.height > 0 => {
            with_app(|app| app.set_button_size(size));
        }
        _ => {
            web_sys::console::warn_1(&JsValue::from_str(
                "No button unmeasurable, keeping default size",
            ));
        }
    }
}

fn rng_seed() -> u32 {
    #[cfg(feature = "rng")]
    {
        let mut buf = [0u8; 4];
        if getrandom::getrandom(&mut buf).is_ok() {
            return u32::from_le_bytes(buf);
        }
    }
    let now = window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0);
    (now * 1000.0) as u64 as u32
}

// --- DOM construction --------------------------------------------------------

const STYLE_SHEET: &str = "
#va-root { position:fixed; inset:0; overflow:auto; font-family: Georgia, 'Times New Roman', serif;
  background: linear-gradient(180deg, var(--color-background) 0%, #FFF0F0 50%, var(--color-secondary) 100%); }
.va-page { position:relative; z-index:10; min-height:100%; display:flex; flex-direction:column;
  align-items:center; justify-content:center; padding:32px 16px; box-sizing:border-box; }
.va-card { background:var(--color-surface); border:2px solid var(--color-secondary); border-radius:24px;
  box-shadow:0 20px 50px rgba(0,0,0,0.12); max-width:28rem; padding:48px 32px; margin:0 16px; }
.va-letter-text { color:var(--color-foreground); font-size:19px; line-height:1.6; text-align:center; margin:0 0 24px; }
.va-divider { width:48px; height:2px; margin:0 auto 16px; opacity:0.3; background:var(--color-primary); }
.va-signature { color:var(--color-foreground); opacity:0.6; font-style:italic; text-align:center; margin:0; }
.va-title { color:var(--color-foreground); font-size:32px; text-align:center; margin:0 0 32px; }
.va-btn { border:none; border-radius:9999px; padding:12px 32px; font-size:17px; cursor:pointer;
  box-shadow:0 4px 14px rgba(0,0,0,0.12); font-family:inherit; }
.va-btn-primary { background:var(--color-primary); color:#ffffff; }
.va-btn-ghost { background:transparent; color:var(--color-foreground); box-shadow:none; opacity:0.7; margin-top:32px; }
.va-hearts-row { display:flex; align-items:center; gap:10px; margin-bottom:24px; }
.va-pulse { display:inline-block; color:var(--color-primary); animation:va-pulse 1.6s ease-in-out infinite; }
.va-polaroid { background:#ffffff; padding:12px 12px 8px; border-radius:4px;
  box-shadow:0 10px 30px rgba(0,0,0,0.15); margin-bottom:32px; }
.va-polaroid-photo { width:224px; height:224px; border-radius:4px; overflow:hidden; display:flex;
  align-items:center; justify-content:center;
  background:linear-gradient(135deg, var(--color-secondary) 0%, var(--color-background) 100%); }
.va-polaroid-mini { width:96px; height:96px; }
.va-caption { text-align:center; color:var(--color-foreground); opacity:0.7; padding-top:8px; font-style:italic; }
.va-buttons { position:relative; display:flex; align-items:center; gap:16px; min-height:120px; margin-bottom:24px; }
.va-hint { color:var(--color-foreground); opacity:0.6; font-size:14px; text-align:center; margin:0; }
.va-gallery { display:grid; grid-template-columns:repeat(2, auto); gap:14px; margin-bottom:32px; }
.va-datecard { background:var(--color-surface); border-radius:16px; box-shadow:0 4px 20px rgba(0,0,0,0.08);
  padding:16px 24px; text-align:center; margin-bottom:32px; }
.va-datecard p { margin:4px 0; }
.va-codebox { border:1px dashed var(--color-secondary); border-radius:12px; padding:16px 24px;
  text-align:center; max-width:24rem; color:var(--color-foreground); }
.va-codebox .va-code { font-family:'Fira Code', monospace; font-size:12px; line-height:1.7; opacity:0.6; margin:0; }
.va-codebox .va-final { font-style:italic; font-size:14px; margin:12px 0 0; }
.va-heart { position:absolute; opacity:0.4; color:var(--color-primary); animation:va-float 5s ease-in-out infinite; }
.va-heart-rev { animation-name:va-float-rev; }
.va-sparkle { position:absolute; opacity:0.5; color:var(--color-primary); font-size:12px;
  animation:va-sparkle 3s ease-in-out infinite; }
.va-confetti-piece { position:absolute; top:-20px; width:10px; height:10px;
  animation-name:va-fall; animation-timing-function:linear; animation-fill-mode:both; }
@keyframes va-wiggle { 0%,100% { transform:rotate(0deg); } 25% { transform:rotate(-6deg); } 75% { transform:rotate(6deg); } }
@keyframes va-fall { from { transform:translateY(-20px) rotate(0deg); opacity:1; }
  to { transform:translateY(105vh) rotate(540deg); opacity:0.8; } }
@keyframes va-float { 0%,100% { transform:translateY(0); } 50% { transform:translateY(-14px); } }
@keyframes va-float-rev { 0%,100% { transform:translateY(0); } 50% { transform:translateY(14px); } }
@keyframes va-sparkle { 0%,100% { opacity:0.15; transform:scale(0.8); } 50% { opacity:0.9; transform:scale(1.15); } }
@keyframes va-pulse { 0%,100% { transform:scale(1); } 50% { transform:scale(1.18); } }
";

fn build_dom(doc: &Document, cfg: &AppConfig) -> Result<(), JsValue> {
    let body = doc.body().ok_or_else(|| JsValue::from_str("no body"))?;

    if doc.get_element_by_id("va-style").is_none() {
        let style = doc.create_element("style")?;
        style.set_id("va-style");
        style.set_text_content(Some(STYLE_SHEET));
        body.append_child(&style)?;
    }

    // Rebuild the root from scratch on a repeated start call.
    if let Some(old) = doc.get_element_by_id("va-root") {
        old.remove();
    }
    let root = doc.create_element("div")?;
    root.set_id("va-root");
    root.set_inner_html(&format!(
        "{decor}\
         <div id='va-letter' class='va-page'>{letter}</div>\
         <div id='va-invite' class='va-page' style='display:none;'>{invite}</div>\
         <div id='va-success' class='va-page' style='display:none;'>{success}</div>\
         <div id='va-confetti' style='position:fixed; inset:0; pointer-events:none; overflow:hidden; z-index:50;'></div>",
        decor = decor_html(),
        letter = letter_html(cfg),
        invite = invitation_html(cfg),
        success = success_html(cfg),
    ));
    body.append_child(&root)?;
    Ok(())
}

/// Fixed background decoration shared by all three screens.
fn decor_html() -> String {
    let mut html = String::new();
    for (i, spot) in decor::FLOATING_HEARTS.iter().enumerate() {
        let class = if i % 2 == 0 {
            "va-heart"
        } else {
            "va-heart va-heart-rev"
        };
        html.push_str(&format!(
            "<span class='{class}' style='left:{}%; top:{}%; font-size:{}px; animation-delay:{}s;'>\u{2665}</span>",
            spot.left_pct, spot.top_pct, spot.size, spot.delay_s
        ));
    }
    for spot in decor::SPARKLES.iter() {
        html.push_str(&format!(
            "<span class='va-sparkle' style='left:{}%; top:{}%; animation-delay:{}s;'>\u{2726}</span>",
            spot.left_pct, spot.top_pct, spot.delay_s
        ));
    }
    html
}

fn hearts_row(sizes: &[u32]) -> String {
    let mut html = String::from("<div class='va-hearts-row'>");
    for (i, size) in sizes.iter().enumerate() {
        html.push_str(&format!(
            "<span class='va-pulse' style='font-size:{size}px; animation-delay:{}s;'>\u{2665}</span>",
            i as f32 * 0.3
        ));
    }
    html.push_str("</div>");
    html
}

fn letter_html(cfg: &AppConfig) -> String {
    format!(
        "{hearts}\
         <div class='va-card'>\
           <p class='va-letter-text'>{letter}</p>\
           <div class='va-divider'></div>\
           <p class='va-signature'>{signature} \u{2665}</p>\
         </div>\
         <button id='va-continue' class='va-btn va-btn-primary' style='margin-top:40px;'\
                 aria-label='Continue to valentine question'>{next} \u{2192}</button>",
        hearts = hearts_row(&[20, 28, 20]),
        letter = cfg.love_letter,
        signature = cfg.letter_signature,
        next = cfg.next_button_text,
    )
}

fn invitation_html(cfg: &AppConfig) -> String {
    let photo = match &cfg.main_photo {
        Some(url) => format!(
            "<img src='{url}' alt='Us' style='width:100%; height:100%; object-fit:cover;'>"
        ),
        None => "<span style='font-size:48px; opacity:0.35; color:var(--color-primary);'>\u{2665}</span>"
            .to_string(),
    };
    format!(
        "{hearts}\
         <div class='va-polaroid'>\
           <div class='va-polaroid-photo'>{photo}</div>\
           <div class='va-caption'>{caption} \u{2665}</div>\
         </div>\
         <h1 class='va-title'>{question}</h1>\
         <div class='va-buttons'>\
           <button id='va-yes' class='va-btn va-btn-primary' style='min-width:120px; position:relative; z-index:10;'\
                   aria-label=\"Yes, I'll be your Valentine\">{yes} \u{2665}</button>\
           <button id='va-no' aria-label='No (but this button will dodge!)'>\
             <span id='va-no-fill'></span>\
             <span id='va-no-label' style='position:relative; z-index:1;'>{no}</span>\
           </button>\
         </div>\
         <p id='va-hint' class='va-hint'></p>\
         <button id='va-back' class='va-btn va-btn-ghost'\
                 aria-label='Go back to read the letter again'>\u{2190} Read Letter Again</button>",
        hearts = hearts_row(&[20, 28, 20]),
        caption = cfg.polaroid_caption,
        question = cfg.main_question,
        yes = cfg.yes_button_text,
        no = cfg.no_button_text,
    )
}

fn success_html(cfg: &AppConfig) -> String {
    let rotations = [2, -1, -2, 1];
    let mut gallery = String::from("<div class='va-gallery'>");
    for (i, photo) in cfg.gallery_photos.iter().enumerate() {
        let inner = match photo {
            Some(url) => format!(
                "<img src='{url}' alt='Memory {}' style='width:100%; height:100%; object-fit:cover;'>",
                i + 1
            ),
            None => "<span style='font-size:28px; opacity:0.35; color:var(--color-primary);'>\u{2665}</span>"
                .to_string(),
        };
        gallery.push_str(&format!(
            "<div class='va-polaroid' style='transform:rotate({}deg); margin-bottom:0;'>\
               <div class='va-polaroid-photo va-polaroid-mini'>{inner}</div>\
             </div>",
            rotations[i % rotations.len()]
        ));
    }
    gallery.push_str("</div>");

    format!(
        "{hearts}\
         <h1 class='va-title' style='color:var(--color-primary); margin-bottom:8px;'>{headline}</h1>\
         <h2 class='va-title' style='font-size:24px;'>{love}</h2>\
         {gallery}\
         <div class='va-datecard'>\
           <p style='color:var(--color-foreground); opacity:0.6;'>Mark your calendar</p>\
           <p style='color:var(--color-primary); font-size:22px; font-weight:600;'>{date}</p>\
         </div>\
         <div class='va-codebox'>\
           <p class='va-code'>{code}</p>\
           <p class='va-final'>{final_msg} \u{2665}</p>\
         </div>\
         <button id='va-prev' class='va-btn va-btn-ghost'\
                 aria-label='Back to the question'>\u{2190} Back to the Question</button>\
         <button id='va-restart' class='va-btn va-btn-ghost' style='margin-top:8px;'\
                 aria-label='Start over from the letter'>Start Over</button>",
        hearts = hearts_row(&[40, 56, 40]),
        headline = cfg.success_message,
        love = cfg.love_message,
        date = cfg.date_details,
        code = cfg.code_message,
        final_msg = cfg.final_message,
    )
}

// --- Event wiring ------------------------------------------------------------

fn wire_events(win: &Window, doc: &Document) -> Result<(), JsValue> {
    on_click(doc, "va-continue", || {
        with_app(|app| app.continue_to_invitation());
        render();
        // The button is laid out now; adopt its real size for the dodge math.
        measure_no_button();
    })?;
    on_click(doc, "va-yes", || {
        with_app(|app| app.affirm());
        render();
        if let Some(w) = window() {
            schedule_confetti(&w);
        }
    })?;
    on_click(doc, "va-back", || {
        with_app(|app| app.back_to_letter());
        render();
    })?;
    on_click(doc, "va-restart", || {
        with_app(|app| app.back_to_letter());
        render();
    })?;
    on_click(doc, "va-prev", || {
        with_app(|app| app.back_to_invitation());
        render();
        measure_no_button();
    })?;

    let no_el = doc
        .get_element_by_id("va-no")
        .ok_or_else(|| JsValue::from_str("missing va-no"))?;

    // Hover and click both count as interactions; once the button has
    // transformed they fall through to the affirmative action.
    for name in ["mouseenter", "click"] {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::MouseEvent| {
            evt.prevent_default();
            handle_no_event(Some(CursorPoint::new(
                evt.client_x() as f64,
                evt.client_y() as f64,
            )));
        }) as Box<dyn FnMut(_)>);
        no_el.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::TouchEvent| {
            evt.prevent_default();
            let cursor = evt
                .touches()
                .get(0)
                .map(|t| CursorPoint::new(t.client_x() as f64, t.client_y() as f64));
            handle_no_event(cursor);
        }) as Box<dyn FnMut(_)>);
        no_el.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    // Keyboard activation has no pointer; the core falls back to the viewport center.
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
            let key = evt.key();
            if key == "Enter" || key == " " {
                evt.prevent_default();
                handle_no_event(None);
            }
        }) as Box<dyn FnMut(_)>);
        no_el.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::Event| {
            if let Some(w) = window() {
                let bounds = read_viewport(&w);
                with_app(|app| app.viewport_resized(bounds));
                render();
            }
        }) as Box<dyn FnMut(_)>);
        win.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

fn on_click(doc: &Document, id: &str, handler: impl Fn() + 'static) -> Result<(), JsValue> {
    let el = doc
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str("missing element"))?;
    let closure = Closure::wrap(Box::new(move |evt: web_sys::MouseEvent| {
        evt.prevent_default();
        handler();
    }) as Box<dyn FnMut(_)>);
    el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn handle_no_event(cursor: Option<CursorPoint>) {
    let outcome = with_app(|app| app.no_interaction(cursor));
    render();
    if let Some(win) = window() {
        match outcome {
            Some(NoOutcome::Dodged) => schedule_wiggle_clear(&win),
            Some(NoOutcome::Affirmed) => schedule_confetti(&win),
            None => {}
        }
    }
}

// --- Timers ------------------------------------------------------------------

/// Clear the wiggle flag after the animation played. Stale-safe: clearing an
/// already-reset flag changes nothing.
fn schedule_wiggle_clear(win: &Window) {
    let cb = Closure::wrap(Box::new(move || {
        with_app(|app| app.clear_wiggle());
        render();
    }) as Box<dyn FnMut()>);
    let _ = win
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), WIGGLE_MS);
    cb.forget();
}

/// Reveal confetti shortly after the success screen appears, then clear it
/// once the fall animation is over. Both callbacks bail out quietly if the
/// user already navigated away.
fn schedule_confetti(win: &Window) {
    let cb = Closure::wrap(Box::new(move || {
        let on_success = with_app(|app| app.page() == PageState::Success).unwrap_or(false);
        if !on_success {
            return;
        }
        if let Some(doc) = window().and_then(|w| w.document()) {
            if let Some(layer) = doc.get_element_by_id("va-confetti") {
                let html = CONFIG.with(|cell| {
                    cell.borrow()
                        .as_ref()
                        .map(confetti_html)
                        .unwrap_or_default()
                });
                layer.set_inner_html(&html);
            }
        }
        if let Some(w) = window() {
            let clear = Closure::wrap(Box::new(move || {
                if let Some(doc) = window().and_then(|w| w.document()) {
                    if let Some(layer) = doc.get_element_by_id("va-confetti") {
                        layer.set_inner_html("");
                    }
                }
            }) as Box<dyn FnMut()>);
            let _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
                clear.as_ref().unchecked_ref(),
                CONFETTI_CLEAR_MS,
            );
            clear.forget();
        }
    }) as Box<dyn FnMut()>);
    let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
        cb.as_ref().unchecked_ref(),
        CONFETTI_REVEAL_MS,
    );
    cb.forget();
}

fn confetti_html(cfg: &AppConfig) -> String {
    let mut rng = Lcg::new(rng_seed());
    let pieces = decor::spawn_confetti(cfg.confetti_count, cfg.confetti_colors.len(), &mut rng);
    let mut html = String::new();
    for piece in pieces {
        let radius = if piece.round { "50%" } else { "0" };
        html.push_str(&format!(
            "<div class='va-confetti-piece' style='left:{:.2}%; background-color:{}; border-radius:{radius}; \
             animation-delay:{:.2}s; animation-duration:{:.2}s;'></div>",
            piece.left_pct, cfg.confetti_colors[piece.color_idx], piece.delay_s, piece.duration_s
        ));
    }
    html
}

// --- Rendering ---------------------------------------------------------------

fn render() {
    let Some(doc) = window().and_then(|w| w.document()) else {
        return;
    };
    APP.with(|app_cell| {
        CONFIG.with(|cfg_cell| {
            let app_ref = app_cell.borrow();
            let cfg_ref = cfg_cell.borrow();
            let (Some(app), Some(cfg)) = (app_ref.as_ref(), cfg_ref.as_ref()) else {
                return;
            };
            render_into(&doc, app, cfg);
        });
    });
}

fn render_into(doc: &Document, app: &ProposalApp, cfg: &AppConfig) {
    let page = app.page();
    set_display(doc, "va-letter", page == PageState::Letter);
    set_display(doc, "va-invite", page == PageState::Invitation);
    set_display(doc, "va-success", page == PageState::Success);

    let transformed = app.is_transformed();

    if let Some(no_el) = doc.get_element_by_id("va-no") {
        let position = match app.button_position() {
            crate::geometry::ButtonPosition::InFlow => {
                "position:relative; left:auto; top:auto;".to_string()
            }
            crate::geometry::ButtonPosition::At { x, y } => {
                format!("position:fixed; left:{x:.1}px; top:{y:.1}px;")
            }
        };
        let colors = if transformed {
            "background:var(--color-primary); color:#ffffff; border:2px solid var(--color-primary);"
        } else {
            "background:var(--color-surface); color:var(--color-foreground); border:2px solid var(--color-secondary);"
        };
        let wiggle = if app.is_wiggling() {
            "animation:va-wiggle 0.5s ease-in-out;"
        } else {
            ""
        };
        no_el
            .set_attribute(
                "style",
                &format!(
                    "padding:12px 32px; border-radius:9999px; font-size:17px; min-width:120px; \
                     font-family:inherit; cursor:pointer; overflow:hidden; z-index:20; \
                     box-shadow:0 4px 14px rgba(0,0,0,0.12); \
                     transition:left 0.3s ease-out, top 0.3s ease-out, background-color 0.3s ease, \
                     color 0.3s ease, border-color 0.3s ease; {position}{colors}{wiggle}"
                ),
            )
            .ok();
        no_el
            .set_attribute(
                "aria-label",
                if transformed {
                    "Yes! (You convinced me!)"
                } else {
                    "No (but this button will dodge!)"
                },
            )
            .ok();
    }

    if let Some(fill) = doc.get_element_by_id("va-no-fill") {
        let opacity = if transformed { 0.0 } else { 0.4 };
        fill.set_attribute(
            "style",
            &format!(
                "position:absolute; left:0; top:0; bottom:0; width:{:.0}%; \
                 background:var(--color-secondary); opacity:{opacity}; border-radius:9999px; \
                 transition:width 0.3s ease-out;",
                app.progress_percent()
            ),
        )
        .ok();
    }

    if let Some(label) = doc.get_element_by_id("va-no-label") {
        if transformed {
            label.set_text_content(Some("Yes! \u{1F496}"));
        } else {
            label.set_text_content(Some(&cfg.no_button_text));
        }
    }

    if let Some(hint) = doc.get_element_by_id("va-hint") {
        hint.set_text_content(Some(config::hint_text(app.hint_slot())));
    }
}

fn set_display(doc: &Document, id: &str, shown: bool) {
    if let Some(el) = doc.get_element_by_id(id) {
        if let Some(html_el) = el.dyn_ref::<web_sys::HtmlElement>() {
            let _ = html_el
                .style()
                .set_property("display", if shown { "flex" } else { "none" });
        }
    }
}
