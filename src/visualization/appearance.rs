//! Static atom-type appearance table
//!
//! Maps an atom's type tag to a visual style (color + sphere scale).
//! Types without an entry keep the renderer's default material and unit
//! scale. The table is fixed configuration, not derived from simulation
//! state — add entries here to style more atom types.

/// Immutable visual style for one atom type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtomStyle {
    pub color: [f32; 3], // base color, linear RGB in [0, 1]
    pub scale: f32, // uniform sphere scale in world units
}

/// type tag -> style table
static ATOM_STYLES: &[(u32, AtomStyle)] = &[
    (1, AtomStyle { color: [0.9, 0.9, 0.9], scale: 0.1 }), // light gray, small
    (2, AtomStyle { color: [0.9, 0.0, 0.0], scale: 0.15 }), // red, larger
];

/// Look up the style for a type tag; `None` means renderer default
pub fn style_for(type_tag: u32) -> Option<&'static AtomStyle> {
    ATOM_STYLES
        .iter()
        .find(|(tag, _)| *tag == type_tag)
        .map(|(_, style)| style)
}
