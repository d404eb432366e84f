//! Tile hover, selection and legend glow state.
//!
//! A glow has an inner and an outer shell. The selected tile glows at once;
//! tiles lit by hovering a legend category fade in and out with a cubic
//! ease-out.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::animation::easing::ease_out;
use crate::chemistry::category::ElementCategory;
use crate::chemistry::elements::ElementRegistry;

/// Full inner and outer glow opacity.
pub const GLOW_TARGET: [f32; 2] = [0.5, 0.3];
/// Tile scale while the pointer is over it.
pub const HOVER_SCALE: f32 = 1.15;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Fade {
    from: [f32; 2],
    to: [f32; 2],
    elapsed_ms: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct TileGlow {
    opacity: [f32; 2],
    fade: Option<Fade>,
}

/// Render state of one tile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TileState {
    pub number: u32,
    pub scale: f32,
    pub glow: [f32; 2],
}

impl TileState {
    pub const FLOATS: usize = 4;

    pub fn to_floats(&self) -> [f32; Self::FLOATS] {
        [self.number as f32, self.scale, self.glow[0], self.glow[1]]
    }
}

#[derive(Debug, Clone)]
pub struct TableHighlight {
    glows: BTreeMap<u32, TileGlow>,
    active: Option<u32>,
    hovered: Option<u32>,
    legend: Option<ElementCategory>,
    fade_ms: f32,
}

impl TableHighlight {
    pub fn new(fade_ms: f32) -> Self {
        Self {
            glows: BTreeMap::new(),
            active: None,
            hovered: None,
            legend: None,
            fade_ms: fade_ms.max(1.0),
        }
    }

    pub fn active(&self) -> Option<u32> {
        self.active
    }

    pub fn hovered(&self) -> Option<u32> {
        self.hovered
    }

    /// Select a tile. The previous selection loses its glow immediately.
    pub fn set_active(&mut self, number: u32) {
        if let Some(prev) = self.active.filter(|&p| p != number) {
            self.glows.remove(&prev);
        }
        self.active = Some(number);
        self.glows.insert(
            number,
            TileGlow {
                opacity: GLOW_TARGET,
                fade: None,
            },
        );
    }

    pub fn set_hovered(&mut self, number: Option<u32>) {
        self.hovered = number;
    }

    /// Pointer entered a legend row: fade out the previous category, fade in
    /// this one. The selected tile is left alone.
    pub fn legend_enter(&mut self, category: ElementCategory, registry: &ElementRegistry) {
        if let Some(prev) = self.legend.filter(|&p| p != category) {
            self.fade_category(prev, [0.0, 0.0], registry);
        }
        self.legend = Some(category);
        self.fade_category(category, GLOW_TARGET, registry);
    }

    /// Pointer left the legend row.
    pub fn legend_leave(&mut self, registry: &ElementRegistry) {
        if let Some(category) = self.legend.take() {
            self.fade_category(category, [0.0, 0.0], registry);
        }
    }

    fn fade_category(&mut self, category: ElementCategory, to: [f32; 2], registry: &ElementRegistry) {
        let active = self.active;
        for element in registry.by_category(category) {
            if Some(element.number) == active {
                continue;
            }
            let glow = self.glows.entry(element.number).or_default();
            glow.fade = Some(Fade {
                from: glow.opacity,
                to,
                elapsed_ms: 0.0,
            });
        }
    }

    /// Advance running fades. Glows that finish fading out are dropped.
    pub fn update(&mut self, dt_ms: f32) {
        let duration = self.fade_ms;
        for glow in self.glows.values_mut() {
            let Some(mut fade) = glow.fade else {
                continue;
            };
            fade.elapsed_ms += dt_ms.max(0.0);
            let t = (fade.elapsed_ms / duration).min(1.0);
            for i in 0..2 {
                glow.opacity[i] = ease_out(fade.from[i], fade.to[i], t);
            }
            glow.fade = if t >= 1.0 { None } else { Some(fade) };
        }
        self.glows
            .retain(|_, g| g.fade.is_some() || g.opacity != [0.0, 0.0]);
    }

    /// Current inner and outer glow of a tile.
    pub fn glow(&self, number: u32) -> [f32; 2] {
        self.glows.get(&number).map(|g| g.opacity).unwrap_or([0.0, 0.0])
    }

    pub fn scale(&self, number: u32) -> f32 {
        if self.hovered == Some(number) {
            HOVER_SCALE
        } else {
            1.0
        }
    }

    pub fn tile_states(&self, registry: &ElementRegistry) -> Vec<TileState> {
        registry
            .iter()
            .map(|e| TileState {
                number: e.number,
                scale: self.scale(e.number),
                glow: self.glow(e.number),
            })
            .collect()
    }
}

impl Default for TableHighlight {
    fn default() -> Self {
        Self::new(300.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ElementRegistry {
        ElementRegistry::load().unwrap()
    }

    #[test]
    fn selecting_moves_the_glow() {
        let mut hl = TableHighlight::default();
        hl.set_active(6);
        assert_eq!(hl.glow(6), GLOW_TARGET);
        hl.set_active(8);
        assert_eq!(hl.glow(6), [0.0, 0.0]);
        assert_eq!(hl.glow(8), GLOW_TARGET);
        assert_eq!(hl.active(), Some(8));
    }

    #[test]
    fn hover_scales_one_tile() {
        let mut hl = TableHighlight::default();
        hl.set_hovered(Some(26));
        assert_eq!(hl.scale(26), HOVER_SCALE);
        assert_eq!(hl.scale(27), 1.0);
        hl.set_hovered(None);
        assert_eq!(hl.scale(26), 1.0);
    }

    #[test]
    fn legend_fades_in_with_cubic_ease() {
        let reg = registry();
        let mut hl = TableHighlight::default();
        hl.legend_enter(ElementCategory::NobleGas, &reg);
        assert_eq!(hl.glow(10), [0.0, 0.0]);
        assert_eq!(hl.legend, Some(ElementCategory::NobleGas));

        hl.update(150.0);
        let g = hl.glow(10);
        assert!((g[0] - 0.5 * 0.875).abs() < 1e-5);
        assert!((g[1] - 0.3 * 0.875).abs() < 1e-5);

        hl.update(150.0);
        for element in reg.by_category(ElementCategory::NobleGas) {
            assert_eq!(hl.glow(element.number), GLOW_TARGET);
        }
        assert!(hl.glows.values().all(|g| g.fade.is_none()));
    }

    #[test]
    fn legend_leave_fades_out_and_drops() {
        let reg = registry();
        let mut hl = TableHighlight::default();
        hl.legend_enter(ElementCategory::Metalloid, &reg);
        hl.update(300.0);
        hl.legend_leave(&reg);
        assert_eq!(hl.legend, None);
        hl.update(100.0);
        assert!(hl.glow(5)[0] > 0.0 && hl.glow(5)[0] < 0.5);
        hl.update(200.0);
        assert_eq!(hl.glow(5), [0.0, 0.0]);
        assert!(hl.glows.is_empty());
    }

    #[test]
    fn legend_skips_selected_tile() {
        let reg = registry();
        let mut hl = TableHighlight::default();
        hl.set_active(2);
        hl.legend_enter(ElementCategory::NobleGas, &reg);
        hl.update(50.0);
        assert_eq!(hl.glow(2), GLOW_TARGET);
        hl.legend_leave(&reg);
        hl.update(400.0);
        assert_eq!(hl.glow(2), GLOW_TARGET);
    }

    #[test]
    fn switching_categories_swaps_glows() {
        let reg = registry();
        let mut hl = TableHighlight::default();
        hl.legend_enter(ElementCategory::AlkaliMetal, &reg);
        hl.update(300.0);
        hl.legend_enter(ElementCategory::Lanthanide, &reg);
        hl.update(300.0);
        assert_eq!(hl.glow(3), [0.0, 0.0]);
        assert_eq!(hl.glow(57), GLOW_TARGET);
    }

    #[test]
    fn tile_states_cover_table() {
        let reg = registry();
        let mut hl = TableHighlight::default();
        hl.set_active(1);
        hl.set_hovered(Some(2));
        let states = hl.tile_states(&reg);
        assert_eq!(states.len(), 118);
        assert_eq!(states[0].glow, GLOW_TARGET);
        assert_eq!(states[1].scale, HOVER_SCALE);
        assert_eq!(states[1].to_floats(), [2.0, HOVER_SCALE, 0.0, 0.0]);
    }
}
