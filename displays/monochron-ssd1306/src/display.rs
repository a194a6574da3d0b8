//! SSD1306 OLED driver
//!
//! Owns the bus handle, the framebuffer and the text renderer. Drawing
//! calls only touch the in-memory buffer; nothing reaches the panel until
//! [`Ssd1306::flush`].

use monochron_core::{
    draw_icon, draw_line, DisplayConfig, FontAsset, FrameBuffer, Icon, RenderError, TextRenderer,
    DEFAULT_CAPACITY,
};
use monochron_hal::I2cBus;

use crate::command::{self, cmd, CONTROL_COMMAND, CONTROL_DATA};

/// Driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError<E> {
    /// Drawing or configuration error from the rendering core
    Render(RenderError),
    /// Bus write failed
    Transport(E),
}

impl<E> From<RenderError> for DisplayError<E> {
    fn from(e: RenderError) -> Self {
        DisplayError::Render(e)
    }
}

impl<E: core::fmt::Debug> core::fmt::Display for DisplayError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DisplayError::Render(e) => write!(f, "render error: {}", e),
            DisplayError::Transport(e) => write!(f, "transport error: {:?}", e),
        }
    }
}

/// SSD1306 driver
///
/// `N` is the framebuffer capacity in bytes; the default fits a 128x64
/// panel. All methods take `&mut self`, so a display shared between tasks
/// needs an outer mutex around both drawing and flushing.
pub struct Ssd1306<B, const N: usize = DEFAULT_CAPACITY> {
    bus: B,
    config: DisplayConfig,
    buffer: FrameBuffer<N>,
    text: TextRenderer,
}

impl<B: I2cBus, const N: usize> Ssd1306<B, N> {
    /// Create a driver for the panel described by `config`
    ///
    /// Allocates a blank framebuffer; nothing is sent on the bus. Fails
    /// with [`RenderError::InvalidDimensions`] if the panel is wider than
    /// 128 columns or its height is outside 16..=64 rows.
    pub fn new(bus: B, config: DisplayConfig) -> Result<Self, DisplayError<B::Error>> {
        command::check_geometry(&config)?;
        let buffer = FrameBuffer::with_bounds(config.width, config.height, config.bounds)?;
        let mut text = TextRenderer::default();
        text.set_policy(config.glyphs);

        Ok(Self {
            bus,
            config,
            buffer,
            text,
        })
    }

    /// Replace the font used by [`Ssd1306::write_string`]
    pub fn set_font(&mut self, font: FontAsset) -> Result<(), DisplayError<B::Error>> {
        font.validate()?;
        self.text = TextRenderer::with_policy(font, self.config.glyphs);
        Ok(())
    }

    /// Send a command stream
    fn command(&mut self, bytes: &[u8]) -> Result<(), DisplayError<B::Error>> {
        self.bus
            .write_prefixed(self.config.address, CONTROL_COMMAND, bytes)
            .map_err(DisplayError::Transport)
    }

    /// Power up and configure the controller
    ///
    /// Sends the init sequence, then sets the column and page windows to
    /// the full panel so a flush always starts at the top-left corner.
    pub fn init(&mut self) -> Result<(), DisplayError<B::Error>> {
        #[cfg(feature = "defmt")]
        defmt::debug!(
            "ssd1306 init {=u16}x{=u16} at {=u8:#x}",
            self.config.width,
            self.config.height,
            self.config.address
        );

        self.command(&command::init_sequence(&self.config))?;
        self.command(&command::column_window(&self.config))?;
        self.command(&command::page_window(&self.config))
    }

    /// Clear the framebuffer (the panel keeps its image until the next flush)
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Turn on the pixel at (`x`, `y`)
    pub fn set(&mut self, x: i32, y: i32) -> Result<(), DisplayError<B::Error>> {
        Ok(self.buffer.set(x, y)?)
    }

    /// Draw a line between two points, both included
    pub fn draw_line(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
    ) -> Result<(), DisplayError<B::Error>> {
        Ok(draw_line(&mut self.buffer, x0, y0, x1, y1)?)
    }

    /// Render `text` at (`x`, `y`), scaled by `size`
    ///
    /// Returns the cursor x after the last character.
    pub fn write_string(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        size: u8,
    ) -> Result<i32, DisplayError<B::Error>> {
        Ok(self.text.write_str(&mut self.buffer, text, x, y, size)?)
    }

    /// Draw raw icon bytes (three bytes per row) at (`x`, `y`)
    pub fn draw_icon(&mut self, bytes: &[u8], x: i32, y: i32) -> Result<(), DisplayError<B::Error>> {
        Ok(draw_icon(&mut self.buffer, bytes, x, y)?)
    }

    /// Draw a built-in or user [`Icon`] at (`x`, `y`)
    pub fn draw(&mut self, icon: &Icon, x: i32, y: i32) -> Result<(), DisplayError<B::Error>> {
        Ok(icon.draw(&mut self.buffer, x, y)?)
    }

    /// Send the whole framebuffer to the panel
    ///
    /// One bus write: the data control byte followed by every page. On
    /// failure the framebuffer is left as it was.
    pub fn flush(&mut self) -> Result<(), DisplayError<B::Error>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("ssd1306 flush {=usize} bytes", self.buffer.size());

        self.bus
            .write_prefixed(self.config.address, CONTROL_DATA, self.buffer.as_bytes())
            .map_err(DisplayError::Transport)
    }

    /// Blank the panel: clear the framebuffer and flush it
    pub fn power_off(&mut self) -> Result<(), DisplayError<B::Error>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("ssd1306 power off");

        self.buffer.clear();
        self.flush()
    }

    /// Wake the panel from sleep
    pub fn display_on(&mut self) -> Result<(), DisplayError<B::Error>> {
        self.command(&[cmd::DISPLAY_ON])
    }

    /// Put the panel to sleep (display RAM is kept)
    pub fn display_off(&mut self) -> Result<(), DisplayError<B::Error>> {
        self.command(&[cmd::DISPLAY_OFF])
    }

    /// Set display contrast (0-255)
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), DisplayError<B::Error>> {
        self.command(&[cmd::SET_CONTRAST, contrast])?;
        self.config.contrast = contrast;
        Ok(())
    }

    /// Invert display colors
    pub fn set_inverted(&mut self, inverted: bool) -> Result<(), DisplayError<B::Error>> {
        if inverted {
            self.command(&[cmd::INVERT_DISPLAY])
        } else {
            self.command(&[cmd::NORMAL_DISPLAY])
        }
    }

    /// Active configuration
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// The framebuffer
    pub fn buffer(&self) -> &FrameBuffer<N> {
        &self.buffer
    }

    /// Mutable framebuffer, for drawing with other renderers
    pub fn buffer_mut(&mut self) -> &mut FrameBuffer<N> {
        &mut self.buffer
    }

    /// Give back the bus
    pub fn release(self) -> B {
        self.bus
    }
}
