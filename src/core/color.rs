#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to macroquad Color (f32 0.0-1.0)
    pub fn to_mq_color(self) -> macroquad::color::Color {
        macroquad::color::Color::from_rgba(self.r, self.g, self.b, self.a)
    }
}

pub const BLUE: Rgba = Rgba::rgb(0, 121, 241);
pub const GREEN: Rgba = Rgba::rgb(0, 228, 48);
pub const ORANGE: Rgba = Rgba::rgb(255, 161, 0);
pub const PINK: Rgba = Rgba::rgb(255, 109, 194);
pub const PURPLE: Rgba = Rgba::rgb(200, 122, 255);
pub const RED: Rgba = Rgba::rgb(230, 41, 55);
pub const YELLOW: Rgba = Rgba::rgb(253, 249, 0);
pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

pub const PALETTE: [(&str, Rgba); 8] = [
    ("Blue", BLUE),
    ("Green", GREEN),
    ("Orange", ORANGE),
    ("Pink", PINK),
    ("Purple", PURPLE),
    ("Red", RED),
    ("Yellow", YELLOW),
    ("White", WHITE),
];

/// Cycling cursor over the fixed paint palette
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    current: usize,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

impl Palette {
    pub fn new() -> Self {
        Self { current: 0 }
    }

    pub fn len(&self) -> usize {
        PALETTE.len()
    }

    pub fn is_empty(&self) -> bool {
        PALETTE.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Rgba {
        PALETTE[self.current].1
    }

    pub fn current_name(&self) -> &'static str {
        PALETTE[self.current].0
    }

    /// Advance to the next color, wrapping at the end of the palette
    pub fn cycle(&mut self) -> Rgba {
        self.current = (self.current + 1) % PALETTE.len();
        self.current()
    }

    /// Select a palette entry directly; out-of-range indices are ignored
    pub fn select(&mut self, index: usize) -> bool {
        if index < PALETTE.len() {
            self.current = index;
            true
        } else {
            false
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = (usize, &'static str, Rgba)> {
        PALETTE.iter().enumerate().map(|(i, (name, c))| (i, *name, *c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_starts_on_blue() {
        let palette = Palette::new();
        assert_eq!(palette.current(), BLUE);
        assert_eq!(palette.current_name(), "Blue");
    }

    #[test]
    fn cycle_wraps_back_to_first_color() {
        let mut palette = Palette::new();
        for _ in 0..palette.len() - 1 {
            palette.cycle();
        }
        assert_eq!(palette.current(), WHITE);
        assert_eq!(palette.cycle(), BLUE);
        assert_eq!(palette.current_index(), 0);
    }

    #[test]
    fn select_ignores_out_of_range() {
        let mut palette = Palette::new();
        assert!(palette.select(5));
        assert_eq!(palette.current(), RED);
        assert!(!palette.select(42));
        assert_eq!(palette.current(), RED);
    }

    #[test]
    fn mq_color_is_normalized() {
        let c = Rgba::rgba(0, 255, 51, 255).to_mq_color();
        assert_eq!((c.r, c.g, c.a), (0.0, 1.0, 1.0));
        assert!((c.b - 0.2).abs() < 1e-6);
    }
}
