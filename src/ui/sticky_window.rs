//! The sticky window: one frameless `tao` window holding one `wry` webview.
//!
//! Lifecycle:
//! - The window shape is applied when the loop starts, again from a one-shot
//!   user event once the first layout pass is done, and on every resize.
//! - The close shortcut arrives either as a native key event or from the
//!   page's keydown listener via `window.ipc.postMessage()`.
//! - A close request or the close shortcut ends the loop.
//! - Without a styled GTK container (macOS, Windows) a second, transparent
//!   webview behind the page paints the card and its border.

use anyhow::{Context, Result};
use tao::dpi::{LogicalPosition, LogicalSize};
use tao::event::{ElementState, Event, StartCause, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder};
use tao::keyboard::{Key, ModifiersState};
use tao::window::WindowBuilder;
use wry::WebViewBuilder;

use crate::app::App;
use crate::managers::shortcut_manager::{ShortcutAction, ShortcutManagerTrait};
use crate::platform::{self, WindowDecoration};
use crate::types::geometry::ScreenSize;
use crate::types::shortcut::{Modifiers, ShortcutKey};

#[derive(Debug)]
enum UserEvent {
    /// Deferred shape application after the first layout pass.
    ReapplyShape,
    /// A shortcut fired inside the page.
    Shortcut(ShortcutAction),
    /// The page asked to open a new window; load it in place instead.
    Navigate(String),
}

// ─── Key translation ───

fn to_modifiers(state: ModifiersState) -> Modifiers {
    Modifiers {
        ctrl: state.control_key(),
        alt: state.alt_key(),
        shift: state.shift_key(),
        meta: state.super_key(),
    }
}

fn to_shortcut_key(key: &Key<'_>) -> Option<ShortcutKey> {
    let function = |n: u8| Some(ShortcutKey::Function(n));
    match key {
        Key::F1 => function(1),
        Key::F2 => function(2),
        Key::F3 => function(3),
        Key::F4 => function(4),
        Key::F5 => function(5),
        Key::F6 => function(6),
        Key::F7 => function(7),
        Key::F8 => function(8),
        Key::F9 => function(9),
        Key::F10 => function(10),
        Key::F11 => function(11),
        Key::F12 => function(12),
        Key::Escape => Some(ShortcutKey::Escape),
        Key::Enter => Some(ShortcutKey::Enter),
        Key::Tab => Some(ShortcutKey::Tab),
        Key::Space => Some(ShortcutKey::Space),
        Key::Home => Some(ShortcutKey::Home),
        Key::Character(s) => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(ShortcutKey::Char(c.to_ascii_lowercase())),
                _ => None,
            }
        }
        _ => None,
    }
}

fn primary_screen(event_loop: &EventLoop<UserEvent>) -> Option<ScreenSize> {
    let monitor = event_loop.primary_monitor()?;
    let size = monitor.size().to_logical::<u32>(monitor.scale_factor());
    Some(ScreenSize {
        width: size.width,
        height: size.height,
    })
}

// ─── Main entry point ───

pub fn run(app: App) -> Result<()> {
    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let layout = app.layout(primary_screen(&event_loop));
    let decoration = WindowDecoration::new(&app.config, &layout);
    let frame = layout.frame;
    tracing::debug!(?frame, content = ?layout.content, "window layout");
    if decoration.shape.is_some() && !platform::supports_native_shape() {
        tracing::debug!("rounded corners come from the backdrop and page clip on this platform");
    }

    let builder = WindowBuilder::new()
        .with_title("StickyPages")
        .with_decorations(false)
        .with_transparent(true)
        .with_resizable(false)
        .with_always_on_top(app.config.always_on_top)
        .with_inner_size(LogicalSize::new(frame.width, frame.height))
        .with_position(LogicalPosition::new(frame.x, frame.y));
    let window = platform::configure_window(builder)
        .build(&event_loop)
        .context("failed to create window")?;
    platform::prepare_frame(&window, &decoration);

    let init_script = app.initialization_script(&layout);
    let ipc_proxy = proxy.clone();
    let nw_proxy = proxy.clone();

    let mut builder = WebViewBuilder::new()
        .with_url(&app.config.webpage_url)
        .with_transparent(true)
        .with_initialization_script(&init_script)
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let body = msg.body().as_str();
            tracing::debug!(body = %body.chars().take(200).collect::<String>(), "ipc");
            if let Some(action) = ShortcutAction::from_ipc(body) {
                let _ = ipc_proxy.send_event(UserEvent::Shortcut(action));
            }
        })
        .with_new_window_req_handler(move |url, _features| {
            if url.starts_with("http://") || url.starts_with("https://") {
                let _ = nw_proxy.send_event(UserEvent::Navigate(url));
            }
            wry::NewWindowResponse::Deny
        })
        .with_devtools(cfg!(debug_assertions));
    if !app.config.javascript_enabled {
        builder = builder.with_javascript_disabled();
    }

    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window
            .default_vbox()
            .context("window has no GTK container")?;
        builder.build_gtk(vbox).context("failed to create webview")?
    };

    #[cfg(not(target_os = "linux"))]
    let _backdrop = WebViewBuilder::new()
        .with_html(&decoration.backdrop_html)
        .with_transparent(true)
        .with_bounds(wry::Rect {
            position: wry::dpi::LogicalPosition::new(0, 0).into(),
            size: wry::dpi::LogicalSize::new(frame.width, frame.height).into(),
        })
        .build_as_child(&window)
        .context("failed to create card backdrop")?;

    #[cfg(not(target_os = "linux"))]
    let webview = {
        let content = layout.content;
        builder
            .with_bounds(wry::Rect {
                position: wry::dpi::LogicalPosition::new(content.x, content.y).into(),
                size: wry::dpi::LogicalSize::new(content.width, content.height).into(),
            })
            .build_as_child(&window)
            .context("failed to create webview")?
    };

    let shortcuts = app.shortcut_manager;
    let mut modifiers = ModifiersState::empty();

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        let perform = |action: ShortcutAction, control_flow: &mut ControlFlow| match action {
            ShortcutAction::Close => {
                tracing::info!("close shortcut pressed");
                *control_flow = ControlFlow::Exit;
            }
        };

        match event {
            Event::NewEvents(StartCause::Init) => {
                platform::apply_shape(&window, &decoration);
                let _ = proxy.send_event(UserEvent::ReapplyShape);
            }

            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                tracing::info!("window closed");
                *control_flow = ControlFlow::Exit;
            }

            Event::WindowEvent {
                event: WindowEvent::Resized(_),
                ..
            } => platform::apply_shape(&window, &decoration),

            Event::WindowEvent {
                event: WindowEvent::ModifiersChanged(state),
                ..
            } => modifiers = state,

            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event: key_event, .. },
                ..
            } => {
                if key_event.state != ElementState::Pressed {
                    return;
                }
                let action = to_shortcut_key(&key_event.logical_key)
                    .and_then(|key| shortcuts.action_for(to_modifiers(modifiers), key));
                if let Some(action) = action {
                    perform(action, control_flow);
                }
            }

            Event::UserEvent(user_event) => match user_event {
                UserEvent::ReapplyShape => platform::apply_shape(&window, &decoration),
                UserEvent::Shortcut(action) => perform(action, control_flow),
                UserEvent::Navigate(url) => {
                    tracing::debug!(%url, "opening new-window request in place");
                    if let Err(e) = webview.load_url(&url) {
                        tracing::warn!(%url, "failed to load page: {}", e);
                    }
                }
            },

            _ => {}
        }
    });
}
