//! Text panel adapter
//!
//! Implements the core `Panel` trait on any embedded-graphics RGB565 draw
//! target: white text on a blue background, in a fixed-width font that
//! covers the degree sign.

use embedded_graphics::mono_font::iso_8859_1::FONT_10X20;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Baseline, Text};
use fixclock_core::traits::{Panel, PanelError, Region};

pub const FOREGROUND: Rgb565 = Rgb565::WHITE;
pub const BACKGROUND: Rgb565 = Rgb565::BLUE;

/// `Panel` over an embedded-graphics draw target
pub struct TextPanel<T> {
    target: T,
    style: MonoTextStyle<'static, Rgb565>,
}

impl<T> TextPanel<T>
where
    T: DrawTarget<Color = Rgb565>,
{
    pub fn new(target: T) -> Self {
        let style = MonoTextStyleBuilder::new()
            .font(&FONT_10X20)
            .text_color(FOREGROUND)
            .background_color(BACKGROUND)
            .build();
        Self { target, style }
    }

    /// Fill the whole target with the background color
    pub fn fill_background(&mut self) -> Result<(), PanelError> {
        self.target
            .clear(BACKGROUND)
            .map_err(|_| PanelError::Communication)
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn into_inner(self) -> T {
        self.target
    }
}

impl<T> Panel for TextPanel<T>
where
    T: DrawTarget<Color = Rgb565>,
{
    fn clear_region(&mut self, region: Region) -> Result<(), PanelError> {
        let area = Rectangle::new(
            Point::new(region.x as i32, region.y as i32),
            Size::new(region.width as u32, region.height as u32),
        );
        let bounds = self.target.bounding_box();
        if area.intersection(&bounds) != area {
            return Err(PanelError::OutOfBounds);
        }

        self.target
            .fill_solid(&area, BACKGROUND)
            .map_err(|_| PanelError::Communication)
    }

    fn draw_text(&mut self, x: u16, y: u16, text: &str) -> Result<(), PanelError> {
        let origin = Point::new(x as i32, y as i32);
        if !self.target.bounding_box().contains(origin) {
            return Err(PanelError::OutOfBounds);
        }

        Text::with_baseline(text, origin, self.style, Baseline::Top)
            .draw(&mut self.target)
            .map(|_| ())
            .map_err(|_| PanelError::Communication)
    }
}
