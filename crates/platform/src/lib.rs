use std::sync::Arc;
use std::{thread, time::Duration};

use app_api::UiApp;
use gfx::{GpuError, GpuRenderer, ViewportConfig};
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    error::{EventLoopError, OsError},
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop, EventLoopProxy},
    window::{Window, WindowId},
};

enum UserEvent {
    Tick,
}

#[derive(Debug)]
pub enum PlatformError {
    EventLoop(EventLoopError),
    Window(OsError),
    Gpu(GpuError),
}

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlatformError::EventLoop(e) => write!(f, "event loop: {e}"),
            PlatformError::Window(e) => write!(f, "cannot create window: {e}"),
            PlatformError::Gpu(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for PlatformError {}

impl From<EventLoopError> for PlatformError {
    fn from(e: EventLoopError) -> Self {
        PlatformError::EventLoop(e)
    }
}

/// Opens a window sized by `config` and drives `app` until it is closed.
pub fn run<A: UiApp + 'static>(app: A, config: ViewportConfig) -> Result<(), PlatformError> {
    let event_loop = EventLoop::<UserEvent>::with_user_event().build()?;
    let proxy = event_loop.create_proxy();

    let mut host = PlatformApp {
        app,
        config,
        window: None,
        renderer: None,
        proxy: Some(proxy),
        ticker_started: false,
        title: String::new(),
        failure: None,
    };
    event_loop.run_app(&mut host)?;

    match host.failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

struct PlatformApp<A> {
    app: A,
    config: ViewportConfig,
    window: Option<Arc<Window>>,
    renderer: Option<GpuRenderer>,
    proxy: Option<EventLoopProxy<UserEvent>>,
    ticker_started: bool,
    title: String,
    failure: Option<PlatformError>,
}

impl<A: UiApp> PlatformApp<A> {
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: PlatformError) {
        log::error!(target: "platform", "{err}");
        self.failure = Some(err);
        event_loop.exit();
    }

    fn start_ticker(&mut self) {
        if self.ticker_started {
            return;
        }
        self.ticker_started = true;

        if let Some(proxy) = self.proxy.clone() {
            thread::spawn(move || {
                let frame = Duration::from_millis(16); // ~60Hz
                loop {
                    if proxy.send_event(UserEvent::Tick).is_err() {
                        break;
                    }
                    thread::sleep(frame);
                }
            });
        }
    }
}

impl<A: UiApp> ApplicationHandler<UserEvent> for PlatformApp<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            self.title = self.app.title();
            let attributes = Window::default_attributes()
                .with_title(self.title.as_str())
                .with_inner_size(LogicalSize::new(self.config.width, self.config.height));
            match event_loop.create_window(attributes) {
                Ok(window) => self.window = Some(Arc::new(window)),
                Err(e) => return self.fail(event_loop, PlatformError::Window(e)),
            }
        }

        if self.renderer.is_none()
            && let Some(window) = self.window.as_ref()
        {
            match GpuRenderer::new(Arc::clone(window)) {
                Ok(renderer) => self.renderer = Some(renderer),
                Err(e) => return self.fail(event_loop, PlatformError::Gpu(e)),
            }
        }

        self.start_ticker();
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, event: UserEvent) {
        match event {
            UserEvent::Tick => {
                if let Some(window) = self.window.as_ref() {
                    window.request_redraw();
                }
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let (Some(window), Some(renderer)) = (self.window.as_ref(), self.renderer.as_mut()) else {
            return;
        };
        renderer.on_window_event(window, &event);

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(new_size) => renderer.resize(new_size),
            WindowEvent::RedrawRequested => {
                let app = &mut self.app;
                renderer.render(window, |ctx| app.ui(ctx));

                let title = self.app.title();
                if title != self.title {
                    window.set_title(&title);
                    self.title = title;
                }
            }
            _ => {}
        }
    }
}
