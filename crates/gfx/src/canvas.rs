/// Drawing surface the viewport renderer issues text draws to.
pub trait Canvas {
    type Font;

    /// Draw `text` with its top-left corner at (`x`, `y`) in viewport px.
    fn draw_text(&mut self, x: f32, y: f32, text: &str, font: &Self::Font);
}
