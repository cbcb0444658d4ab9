use egui::Context;

/// An application the platform event loop can host.
pub trait UiApp {
    /// Build one frame of UI.
    fn ui(&mut self, ctx: &Context);

    /// Window title; polled after every frame.
    fn title(&self) -> String {
        "leafview".to_string()
    }
}
