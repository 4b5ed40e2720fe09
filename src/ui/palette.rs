use macroquad::prelude::*;

use crate::core::Palette;
use crate::state::ApplicationState;

const SWATCH_SIZE: f32 = 24.0;
const PADDING: f32 = 6.0;
const BAR_X: f32 = 10.0;
const BAR_Y: f32 = 10.0;

/// Screen rect of the palette bar
pub fn palette_bar_rect(palette: &Palette) -> Rect {
    let n = palette.len() as f32;
    Rect::new(
        BAR_X,
        BAR_Y,
        n * SWATCH_SIZE + (n + 1.0) * PADDING,
        SWATCH_SIZE + 2.0 * PADDING,
    )
}

fn swatch_rect(index: usize) -> Rect {
    Rect::new(
        BAR_X + PADDING + index as f32 * (SWATCH_SIZE + PADDING),
        BAR_Y + PADDING,
        SWATCH_SIZE,
        SWATCH_SIZE,
    )
}

/// Index of the swatch under `point`
pub fn swatch_at(palette: &Palette, point: Vec2) -> Option<usize> {
    (0..palette.len()).find(|&i| swatch_rect(i).contains(point))
}

/// Select the swatch under `point`, returning whether one was hit
pub fn select_swatch_at(palette: &mut Palette, point: Vec2) -> bool {
    match swatch_at(palette, point) {
        Some(index) => {
            palette.select(index);
            true
        }
        None => false,
    }
}

/// Draw the palette bar and handle swatch clicks
///
/// The caller decides pointer-over-UI from `palette_bar_rect` before input
/// runs, so the bar itself only draws and selects.
pub fn render_palette_bar(state: &mut ApplicationState) {
    let mouse_pos = Vec2::from(mouse_position());
    let bar = palette_bar_rect(&state.palette);

    draw_rectangle(bar.x, bar.y, bar.w, bar.h, Color::from_rgba(40, 40, 40, 230));
    draw_rectangle_lines(bar.x, bar.y, bar.w, bar.h, 2.0, GRAY);

    let current = state.palette.current_index();
    for (i, _name, rgba) in state.palette.entries() {
        let r = swatch_rect(i);
        draw_rectangle(r.x, r.y, r.w, r.h, rgba.to_mq_color());

        // Highlight if this is the current color
        let (border_width, border_color) = if i == current {
            (3.0, Color::from_rgba(255, 255, 0, 255))
        } else {
            (1.0, BLACK)
        };
        draw_rectangle_lines(r.x, r.y, r.w, r.h, border_width, border_color);
    }

    if is_mouse_button_pressed(MouseButton::Left) {
        select_swatch_at(&mut state.palette, mouse_pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swatches_sit_inside_the_bar() {
        let palette = Palette::new();
        let bar = palette_bar_rect(&palette);
        for i in 0..palette.len() {
            let r = swatch_rect(i);
            assert!(bar.contains(r.point()));
            assert!(r.right() <= bar.right());
        }
    }

    #[test]
    fn swatch_hit_testing() {
        let palette = Palette::new();
        let center = swatch_rect(3).center();
        assert_eq!(swatch_at(&palette, center), Some(3));
        assert_eq!(swatch_at(&palette, vec2(BAR_X + 1.0, BAR_Y + 1.0)), None);
        assert_eq!(swatch_at(&palette, vec2(500.0, 500.0)), None);
    }

    #[test]
    fn clicking_a_swatch_selects_it() {
        let mut palette = Palette::new();
        assert!(select_swatch_at(&mut palette, swatch_rect(4).center()));
        assert_eq!(palette.current_index(), 4);

        // Bar padding is not a swatch
        assert!(!select_swatch_at(&mut palette, vec2(BAR_X + 1.0, BAR_Y + 1.0)));
        assert_eq!(palette.current_index(), 4);
    }
}
