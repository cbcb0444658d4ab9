use app_api::UiApp;
use egui::{CentralPanel, Context, Key, TopBottomPanel};
use gfx::{EguiFonts, Viewport, ViewportConfig, paint_page};
use layout::{FontCache, LayoutOptions};
use net::Fetch;

mod page;

pub use page::{LoadError, PageState};

pub struct BrowserApp {
    url: String,
    pending: Option<String>,
    last_status: Option<String>,
    page: PageState,
    fetcher: Box<dyn Fetch>,
    // Created on the first frame, once egui's fonts exist.
    fonts: Option<FontCache<EguiFonts>>,
    layout_options: LayoutOptions,
    config: ViewportConfig,
    viewport: Viewport,
}

impl BrowserApp {
    /// A browser that loads `url` on its first frame.
    pub fn new(url: impl Into<String>, fetcher: Box<dyn Fetch>, config: ViewportConfig) -> Self {
        let url = url.into();
        Self {
            pending: Some(url.clone()),
            url,
            last_status: None,
            page: PageState::new(),
            fetcher,
            fonts: None,
            layout_options: LayoutOptions {
                width: config.width,
                ..LayoutOptions::default()
            },
            config,
            viewport: Viewport::new(0.0, config.height),
        }
    }

    fn navigate(&mut self, url: &str, fonts: &FontCache<EguiFonts>) {
        log::info!(target: "browser", "loading {url}");
        match self
            .page
            .load(url, self.fetcher.as_ref(), fonts, &self.layout_options)
        {
            Ok(words) => {
                self.viewport.scroll = 0.0;
                if let Some(location) = &self.page.location {
                    self.url = location.to_string();
                }
                self.last_status = Some(format!("{words} words"));
            }
            Err(err) => {
                log::error!(target: "browser", "failed to load {url}: {err}");
                self.last_status = Some(format!("Error: {err}"));
            }
        }
    }

    fn handle_scroll_keys(&mut self, ctx: &Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        let (down, up) = ctx.input(|i| {
            (
                i.key_pressed(Key::ArrowDown),
                i.key_pressed(Key::ArrowUp),
            )
        });
        let max_scroll = self.page.content_height();
        if down {
            self.viewport.scroll_by(self.config.scroll_step, max_scroll);
        }
        if up {
            self.viewport.scroll_by(-self.config.scroll_step, max_scroll);
        }
    }
}

impl UiApp for BrowserApp {
    fn ui(&mut self, ctx: &Context) {
        let fonts = self
            .fonts
            .take()
            .unwrap_or_else(|| FontCache::new(EguiFonts::new(ctx)));

        if let Some(url) = self.pending.take() {
            self.navigate(&url, &fonts);
        }
        self.handle_scroll_keys(ctx);

        TopBottomPanel::top("topbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("URL:");
                let response = ui.text_edit_singleline(&mut self.url);
                let submitted =
                    response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
                if submitted || ui.button("Go").clicked() {
                    self.pending = Some(self.url.trim().to_string());
                }
                if let Some(status) = &self.last_status {
                    ui.label(status);
                }
            });
        });

        CentralPanel::default().show(ctx, |ui| {
            if let Err(err) = paint_page(ui, &self.page.display_list, &fonts, &mut self.viewport) {
                log::error!(target: "browser", "paint failed: {err}");
                self.last_status = Some(format!("Error: {err}"));
            }
        });

        if self.pending.is_some() {
            ctx.request_repaint();
        }
        self.fonts = Some(fonts);
    }

    fn title(&self) -> String {
        match &self.page.location {
            Some(location) => format!("leafview - {location}"),
            None => "leafview".to_string(),
        }
    }
}
