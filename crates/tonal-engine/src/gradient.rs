//! CSS gradient descriptors between a primary and a secondary color.

use serde::Serialize;
use tonal_color::Color;

/// Opacity of the faded repeat stops in the mesh gradient.
const MESH_FADE: f64 = 0.8;

/// Four CSS `background-image` values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GradientSet {
    pub linear: String,
    pub radial: String,
    pub conic: String,
    pub mesh: String,
}

impl GradientSet {
    /// `(kind, css)` pairs.
    #[must_use]
    pub fn entries(&self) -> [(&'static str, &str); 4] {
        [
            ("linear", self.linear.as_str()),
            ("radial", self.radial.as_str()),
            ("conic", self.conic.as_str()),
            ("mesh", self.mesh.as_str()),
        ]
    }
}

/// Build gradients from `primary` to `secondary`.
///
/// Without a secondary, the complement of the primary (hue + 180°) is used.
///
/// # Examples
///
/// ```
/// use tonal_color::Color;
/// use tonal_engine::generate_gradients;
///
/// let g = generate_gradients(Color::hex("#ff0000").unwrap(), None);
/// assert_eq!(g.linear, "linear-gradient(135deg, #ff0000, #00ffff)");
/// ```
#[must_use]
pub fn generate_gradients(primary: Color, secondary: Option<Color>) -> GradientSet {
    let secondary = secondary.unwrap_or_else(|| primary.complement());
    let (p, s) = (primary.to_hex(), secondary.to_hex());
    let p_faded = primary.with_alpha(MESH_FADE).to_hex();
    let s_faded = secondary.with_alpha(MESH_FADE).to_hex();

    GradientSet {
        linear: format!("linear-gradient(135deg, {p}, {s})"),
        radial: format!("radial-gradient(circle, {p}, {s})"),
        conic: format!("conic-gradient(from 0deg, {p}, {s}, {p})"),
        mesh: format!("linear-gradient(45deg, {p}, {s}, {p_faded}, {s_faded})"),
    }
}
