//! ST7789 TFT controller
//!
//! Minimal 16-bit color driver over a blocking SPI device with separate
//! data/command and reset lines. Implements `DrawTarget` so that
//! embedded-graphics can render onto it. Solid and contiguous fills open one
//! address window and stream into it instead of going pixel by pixel.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;

/// ST7789 commands
mod cmd {
    pub const SWRESET: u8 = 0x01;
    pub const SLPOUT: u8 = 0x11;
    pub const NORON: u8 = 0x13;
    pub const INVON: u8 = 0x21;
    pub const DISPON: u8 = 0x29;
    pub const CASET: u8 = 0x2A;
    pub const RASET: u8 = 0x2B;
    pub const RAMWR: u8 = 0x2C;
    pub const MADCTL: u8 = 0x36;
    pub const COLMOD: u8 = 0x3A;
}

/// 16 bits per pixel, 65k colors
const COLMOD_RGB565: u8 = 0x55;

/// MADCTL bits
const MADCTL_MY: u8 = 0x80;
const MADCTL_MX: u8 = 0x40;
const MADCTL_MV: u8 = 0x20;

/// Pixels per SPI write when streaming a fill
const FILL_CHUNK_PIXELS: usize = 32;

/// Driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum St7789Error {
    /// SPI transfer failed
    Spi,
    /// Data/command or reset line could not be driven
    Pin,
}

/// Panel orientation in quarter turns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Quarter turns 0-3; anything larger wraps
    pub const fn from_quarter_turns(turns: u8) -> Self {
        match turns % 4 {
            0 => Rotation::Deg0,
            1 => Rotation::Deg90,
            2 => Rotation::Deg180,
            _ => Rotation::Deg270,
        }
    }

    const fn madctl(&self) -> u8 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => MADCTL_MX | MADCTL_MV,
            Rotation::Deg180 => MADCTL_MX | MADCTL_MY,
            Rotation::Deg270 => MADCTL_MY | MADCTL_MV,
        }
    }

    /// Width and height are swapped on odd quarter turns
    const fn is_landscape(&self) -> bool {
        matches!(self, Rotation::Deg90 | Rotation::Deg270)
    }
}

/// ST7789 driver
pub struct St7789<SPI, DC, RST> {
    spi: SPI,
    dc: DC,
    rst: RST,
    /// Native (portrait) dimensions
    width: u16,
    height: u16,
    rotation: Rotation,
}

impl<SPI, DC, RST> St7789<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    pub fn new(spi: SPI, dc: DC, rst: RST, width: u16, height: u16) -> Self {
        Self {
            spi,
            dc,
            rst,
            width,
            height,
            rotation: Rotation::Deg0,
        }
    }

    /// Hardware reset followed by the controller bring-up sequence
    pub fn init<D: DelayNs>(
        &mut self,
        delay: &mut D,
        rotation: Rotation,
    ) -> Result<(), St7789Error> {
        self.rst.set_high().map_err(|_| St7789Error::Pin)?;
        delay.delay_ms(10);
        self.rst.set_low().map_err(|_| St7789Error::Pin)?;
        delay.delay_ms(10);
        self.rst.set_high().map_err(|_| St7789Error::Pin)?;
        delay.delay_ms(120);

        self.command(cmd::SWRESET, &[])?;
        delay.delay_ms(150);
        self.command(cmd::SLPOUT, &[])?;
        delay.delay_ms(120);
        self.command(cmd::COLMOD, &[COLMOD_RGB565])?;
        self.set_rotation(rotation)?;
        self.command(cmd::INVON, &[])?;
        self.command(cmd::NORON, &[])?;
        self.command(cmd::DISPON, &[])?;
        delay.delay_ms(10);

        Ok(())
    }

    pub fn set_rotation(&mut self, rotation: Rotation) -> Result<(), St7789Error> {
        self.command(cmd::MADCTL, &[rotation.madctl()])?;
        self.rotation = rotation;
        Ok(())
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Visible width and height under the current rotation
    pub fn dimensions(&self) -> (u16, u16) {
        if self.rotation.is_landscape() {
            (self.height, self.width)
        } else {
            (self.width, self.height)
        }
    }

    /// Fill a rectangle with one color, clipped to the visible area
    pub fn fill_rect(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        color: Rgb565,
    ) -> Result<(), St7789Error> {
        let (max_w, max_h) = self.dimensions();
        if x >= max_w || y >= max_h || w == 0 || h == 0 {
            return Ok(());
        }
        let x1 = x.saturating_add(w - 1).min(max_w - 1);
        let y1 = y.saturating_add(h - 1).min(max_h - 1);

        self.set_window(x, y, x1, y1)?;
        let count = (x1 - x + 1) as usize * (y1 - y + 1) as usize;
        self.stream_color(color, count)
    }

    /// Give back the bus and control lines
    pub fn release(self) -> (SPI, DC, RST) {
        (self.spi, self.dc, self.rst)
    }

    fn command(&mut self, command: u8, params: &[u8]) -> Result<(), St7789Error> {
        self.dc.set_low().map_err(|_| St7789Error::Pin)?;
        self.spi.write(&[command]).map_err(|_| St7789Error::Spi)?;
        if !params.is_empty() {
            self.data(params)?;
        }
        Ok(())
    }

    fn data(&mut self, bytes: &[u8]) -> Result<(), St7789Error> {
        self.dc.set_high().map_err(|_| St7789Error::Pin)?;
        self.spi.write(bytes).map_err(|_| St7789Error::Spi)
    }

    /// Set the inclusive address window and start a RAM write
    fn set_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> Result<(), St7789Error> {
        let [x0h, x0l] = x0.to_be_bytes();
        let [x1h, x1l] = x1.to_be_bytes();
        let [y0h, y0l] = y0.to_be_bytes();
        let [y1h, y1l] = y1.to_be_bytes();

        self.command(cmd::CASET, &[x0h, x0l, x1h, x1l])?;
        self.command(cmd::RASET, &[y0h, y0l, y1h, y1l])?;
        self.command(cmd::RAMWR, &[])
    }

    fn stream_color(&mut self, color: Rgb565, count: usize) -> Result<(), St7789Error> {
        let [hi, lo] = color.into_storage().to_be_bytes();
        let mut chunk = [0u8; FILL_CHUNK_PIXELS * 2];
        for pair in chunk.chunks_exact_mut(2) {
            pair[0] = hi;
            pair[1] = lo;
        }

        let mut remaining = count;
        while remaining > 0 {
            let n = remaining.min(FILL_CHUNK_PIXELS);
            self.data(&chunk[..n * 2])?;
            remaining -= n;
        }
        Ok(())
    }
}

impl<SPI, DC, RST> OriginDimensions for St7789<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    fn size(&self) -> Size {
        let (w, h) = self.dimensions();
        Size::new(w as u32, h as u32)
    }
}

impl<SPI, DC, RST> DrawTarget for St7789<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    type Color = Rgb565;
    type Error = St7789Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let bounds = self.bounding_box();
        for Pixel(point, color) in pixels {
            if !bounds.contains(point) {
                continue;
            }
            let (x, y) = (point.x as u16, point.y as u16);
            self.set_window(x, y, x, y)?;
            self.data(&color.into_storage().to_be_bytes())?;
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        if area.is_zero_sized() {
            return Ok(());
        }
        self.fill_rect(
            area.top_left.x as u16,
            area.top_left.y as u16,
            area.size.width as u16,
            area.size.height as u16,
            color,
        )
    }

    fn fill_contiguous<I>(&mut self, area: &Rectangle, colors: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        let drawable = area.intersection(&self.bounding_box());
        let Some(bottom_right) = drawable.bottom_right() else {
            return Ok(());
        };
        self.set_window(
            drawable.top_left.x as u16,
            drawable.top_left.y as u16,
            bottom_right.x as u16,
            bottom_right.y as u16,
        )?;

        // Colors cover the unclipped area in row-major order, as does the window
        let mut chunk = [0u8; FILL_CHUNK_PIXELS * 2];
        let mut len = 0;
        for (point, color) in area.points().zip(colors) {
            if !drawable.contains(point) {
                continue;
            }
            chunk[len..len + 2].copy_from_slice(&color.into_storage().to_be_bytes());
            len += 2;
            if len == chunk.len() {
                self.data(&chunk)?;
                len = 0;
            }
        }
        if len > 0 {
            self.data(&chunk[..len])?;
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        let (w, h) = self.dimensions();
        self.fill_rect(0, 0, w, h, color)
    }
}
