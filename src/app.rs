use leptos::html::{Canvas, Form};
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;
use strum::IntoEnumIterator;

use crate::{
    application::SceneContext,
    domain::{
        geometry::ShapeSelector,
        logging::{LogComponent, LogEntry, LogLevel, Logger},
    },
    infrastructure::{dom, rendering::SceneRenderer, services::ConsoleLogger},
    log_error,
};

const MAX_LOG_LINES: usize = 100;

thread_local! {
    static GLOBAL_LOGS: RwSignal<Vec<(u64, String)>> = create_rw_signal(Vec::new());
    static IS_LOG_PAUSED: RwSignal<bool> = create_rw_signal(false);
    static LOG_SEQUENCE: std::cell::Cell<u64> = const { std::cell::Cell::new(0) };
}

/// Forwards to the browser console and mirrors every line into the debug panel.
pub struct LeptosLogger {
    console: ConsoleLogger,
}

impl LeptosLogger {
    pub fn new(console: ConsoleLogger) -> Self {
        Self { console }
    }
}

impl Logger for LeptosLogger {
    fn min_level(&self) -> LogLevel {
        self.console.min_level()
    }

    fn log(&self, entry: LogEntry) {
        let line = entry.format_line();
        self.console.log(entry);

        let paused = IS_LOG_PAUSED.with(|paused| paused.get_untracked());
        if paused {
            return;
        }
        let id = LOG_SEQUENCE.with(|seq| {
            let id = seq.get();
            seq.set(id + 1);
            id
        });
        GLOBAL_LOGS.with(|logs| {
            logs.update(|lines| {
                lines.push((id, line));
                if lines.len() > MAX_LOG_LINES {
                    let excess = lines.len() - MAX_LOG_LINES;
                    lines.drain(..excess);
                }
            });
        });
    }
}

/// Scene state and renderer shared by the canvas and the parameter form.
#[derive(Clone)]
pub struct SceneHandles {
    pub context: Rc<RefCell<SceneContext>>,
    pub renderer: Rc<RefCell<Option<SceneRenderer>>>,
}

impl SceneHandles {
    pub fn new(context: SceneContext) -> Self {
        Self { context: Rc::new(RefCell::new(context)), renderer: Rc::new(RefCell::new(None)) }
    }

    /// Draw a frame if the renderer is ready; returns a status line.
    fn redraw(&self) -> String {
        let context = self.context.borrow();
        match self.renderer.borrow_mut().as_mut() {
            Some(renderer) => match renderer.render(&context.scene) {
                Ok(()) => format!(
                    "✅ {} shapes, {} vertices, {:.1} FPS",
                    context.scene.len(),
                    context.scene.vertex_count(),
                    renderer.average_fps()
                ),
                Err(e) => format!("❌ Render error: {:?}", e),
            },
            None => "⏳ Renderer not ready".to_string(),
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = dom::load_scene_config();
    let handles = SceneHandles::new(SceneContext::new(config));
    let (status, set_status) = create_signal("Initializing...".to_string());

    view! {
        <style>
            {r#"
            .scene-app {
                font-family: -apple-system, BlinkMacSystemFont, sans-serif;
                background: #1e2a38;
                min-height: 100vh;
                padding: 20px;
                color: white;
                display: flex;
                flex-wrap: wrap;
                gap: 20px;
            }

            .scene-container {
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 10px;
            }

            .status {
                color: #72c685;
                font-size: 14px;
            }

            .parameters fieldset {
                border: 1px solid #4a5d73;
                border-radius: 8px;
                margin-bottom: 10px;
            }

            .parameters label {
                display: inline-block;
                min-width: 110px;
                margin: 3px 0;
            }

            .parameters input[type=number] {
                width: 70px;
            }

            .debug-console {
                background: rgba(0, 0, 0, 0.8);
                border-radius: 10px;
                padding: 15px;
                max-height: 300px;
                overflow-y: auto;
                border: 1px solid #4a5d73;
                flex-basis: 100%;
            }

            .debug-header {
                display: flex;
                justify-content: space-between;
                margin-bottom: 10px;
                color: #72c685;
                font-weight: bold;
            }

            .debug-btn {
                background: #4a5d73;
                color: white;
                border: none;
                padding: 5px 10px;
                border-radius: 5px;
                cursor: pointer;
                font-size: 12px;
                margin-left: 5px;
            }

            .log-line {
                font-family: 'Courier New', monospace;
                font-size: 11px;
                color: #e0e0e0;
                margin: 2px 0;
            }
            "#}
        </style>
        <div class="scene-app">
            <SceneCanvas handles=handles.clone() set_status=set_status status=status />
            <ParameterForm handles=handles set_status=set_status />
            <DebugConsole />
        </div>
    }
}

/// Canvas plus the asynchronous renderer start-up.
#[component]
fn SceneCanvas(
    handles: SceneHandles,
    set_status: WriteSignal<String>,
    status: ReadSignal<String>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<Canvas>();
    let config = handles.context.borrow().service.config().clone();
    let (canvas_id, width, height) = (config.canvas_id.clone(), config.width, config.height);

    create_effect(move |_| {
        if canvas_ref.get().is_none() {
            return;
        }
        let handles = handles.clone();
        let config = config.clone();
        spawn_local(async move {
            set_status.set("🚀 Initializing renderer...".to_string());
            match SceneRenderer::new(&config.canvas_id, config.width, config.height, config.strip_parity)
                .await
            {
                Ok(renderer) => {
                    *handles.renderer.borrow_mut() = Some(renderer);
                    set_status.set(handles.redraw());
                }
                Err(e) => {
                    log_error!(LogComponent::Presentation("SceneCanvas"), "❌ Renderer failed: {:?}", e);
                    set_status.set(format!("❌ Renderer failed: {:?}", e));
                }
            }
        });
    });

    view! {
        <div class="scene-container">
            <canvas
                id=canvas_id
                node_ref=canvas_ref
                width=width
                height=height
                style="border: 2px solid #4a5d73; border-radius: 10px;"
            />
            <div class="status">{move || status.get()}</div>
        </div>
    }
}

/// Camera and shape parameters. Any change re-reads the whole form.
#[component]
fn ParameterForm(handles: SceneHandles, set_status: WriteSignal<String>) -> impl IntoView {
    let form_ref = create_node_ref::<Form>();
    let camera = handles.context.borrow().service.config().camera.form_defaults();
    let camera_value = move |name: &str| camera.get(name).unwrap_or_default().to_string();

    let apply = move || {
        let Some(form) = form_ref.get_untracked() else { return };
        let result = dom::read_form(&form)
            .and_then(|values| handles.context.borrow_mut().apply_form(&values));
        match result {
            Ok(_) => set_status.set(handles.redraw()),
            Err(e) => set_status.set(format!("⚠️ {}", e)),
        }
    };
    let apply_on_submit = apply.clone();

    let number = |name: &'static str, label: &'static str, value: &str| {
        let value = value.to_string();
        view! {
            <label>{label}" "<input type="number" name=name value=value step="any" /></label>
        }
    };

    view! {
        <form
            class="parameters"
            node_ref=form_ref
            on:change=move |_| apply()
            on:submit=move |ev: ev::SubmitEvent| {
                ev.prevent_default();
                apply_on_submit();
            }
        >
            <fieldset>
                <legend>"Shape"</legend>
                {ShapeSelector::iter()
                    .map(|shape| {
                        view! {
                            <label>
                                <input type="radio" name="shape" value=shape.as_ref().to_string() />
                                {shape.to_string()}
                            </label>
                        }
                    })
                    .collect_view()}
            </fieldset>
            <fieldset>
                <legend>"Shape parameters"</legend>
                {number("size", "Cube size", "1.0")}
                <br />
                {number("r1", "Torus R1", "1.0")}
                {number("r2", "Torus R2", "0.5")}
                {number("m", "Torus N", "30")}
                {number("x", "Torus M", "20")}
                <br />
                {number("r", "Sphere R", "1.5")}
                {number("m_sphere", "Sphere N", "30")}
                {number("x_sphere", "Sphere M", "30")}
            </fieldset>
            <fieldset>
                <legend>"Projection"</legend>
                <label>
                    <input type="radio" name="projection_type" value="perspective" checked=true />
                    "Perspective"
                </label>
                <label>
                    <input type="radio" name="projection_type" value="orthographic" />
                    "Orthographic"
                </label>
                <br />
                {number("fovy", "Field of view", &camera_value("fovy"))}
                {number("znear", "Near", &camera_value("znear"))}
                {number("zfar", "Far", &camera_value("zfar"))}
                <br />
                {number("left", "Left", "-3")}
                {number("right", "Right", "3")}
                {number("bot", "Bottom", "-3")}
                {number("top", "Top", "3")}
                {number("front", "Front", "0.1")}
                {number("back", "Back", "100")}
            </fieldset>
            <button type="submit" class="debug-btn">"Update"</button>
        </form>
    }
}

#[component]
fn DebugConsole() -> impl IntoView {
    let logs = GLOBAL_LOGS.with(|logs| *logs);
    let is_paused = IS_LOG_PAUSED.with(|paused| *paused);

    view! {
        <div class="debug-console">
            <div class="debug-header">
                <span>"🐛 Scene Log"</span>
                <span>
                    <button
                        class="debug-btn"
                        on:click=move |_| is_paused.update(|p| *p = !*p)
                    >
                        {move || if is_paused.get() { "▶️ Resume" } else { "⏸️ Pause" }}
                    </button>
                    <button class="debug-btn" on:click=move |_| logs.set(Vec::new())>
                        "🗑️ Clear"
                    </button>
                </span>
            </div>
            <For
                each=move || logs.get()
                key=|(id, _)| *id
                children=move |(_, line)| view! { <div class="log-line">{line}</div> }
            />
        </div>
    }
}
