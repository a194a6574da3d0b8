//! SSD1306 command set
//!
//! Every transfer to the controller starts with a control byte: commands
//! are sent after [`CONTROL_COMMAND`], pixel data after [`CONTROL_DATA`].

use monochron_core::{DisplayConfig, RenderError};

/// Control byte for a command stream
pub const CONTROL_COMMAND: u8 = 0x00;

/// Control byte for display RAM data
pub const CONTROL_DATA: u8 = 0x40;

/// SSD1306 commands
pub mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_MULTIPLEX: u8 = 0xA8;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_START_LINE: u8 = 0x40;
    pub const CHARGE_PUMP: u8 = 0x8D;
    pub const MEMORY_MODE: u8 = 0x20;
    /// Column 127 mapped to SEG0
    pub const SEG_REMAP: u8 = 0xA1;
    pub const SEG_NORMAL: u8 = 0xA0;
    pub const COM_SCAN_DEC: u8 = 0xC8;
    pub const COM_SCAN_INC: u8 = 0xC0;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const DISPLAY_ALL_ON_RESUME: u8 = 0xA4;
    pub const NORMAL_DISPLAY: u8 = 0xA6;
    pub const INVERT_DISPLAY: u8 = 0xA7;
    pub const COLUMN_ADDR: u8 = 0x21;
    pub const PAGE_ADDR: u8 = 0x22;
}

/// Widest panel the controller can drive (SEG0-SEG127)
pub const MAX_WIDTH: u16 = 128;

/// Shortest panel the multiplex ratio allows
pub const MIN_HEIGHT: u16 = 16;

/// Tallest panel the controller can drive (COM0-COM63)
pub const MAX_HEIGHT: u16 = 64;

/// Check that a panel geometry fits the controller
///
/// The command builders below assume a geometry that passed this check.
pub fn check_geometry(config: &DisplayConfig) -> Result<(), RenderError> {
    if config.width == 0
        || config.width > MAX_WIDTH
        || config.height < MIN_HEIGHT
        || config.height > MAX_HEIGHT
    {
        return Err(RenderError::InvalidDimensions);
    }
    Ok(())
}

/// Length of the power-on sequence
pub const INIT_LEN: usize = 25;

/// Horizontal addressing: the column pointer wraps into the next page
const HORIZONTAL_ADDRESSING: u8 = 0x00;

/// Build the power-on command sequence for a panel
///
/// Multiplex ratio, COM pin layout, charge pump and precharge depend on
/// the panel geometry and supply.
pub fn init_sequence(config: &DisplayConfig) -> [u8; INIT_LEN] {
    let multiplex = config.height.saturating_sub(1) as u8;
    // 128x32 glass routes COM lines sequentially, taller panels alternate
    let com_pins = if config.height == 32 { 0x02 } else { 0x12 };
    let (charge_pump, precharge) = if config.external_vcc {
        (0x10, 0x22)
    } else {
        (0x14, 0xF1)
    };
    let (seg_remap, com_scan) = if config.flipped {
        (cmd::SEG_NORMAL, cmd::COM_SCAN_INC)
    } else {
        (cmd::SEG_REMAP, cmd::COM_SCAN_DEC)
    };

    [
        cmd::DISPLAY_OFF,
        cmd::SET_CLOCK_DIV,
        0x80, // Default oscillator, divide ratio 1
        cmd::SET_MULTIPLEX,
        multiplex,
        cmd::SET_DISPLAY_OFFSET,
        0x00,
        cmd::SET_START_LINE,
        cmd::CHARGE_PUMP,
        charge_pump,
        cmd::MEMORY_MODE,
        HORIZONTAL_ADDRESSING,
        seg_remap,
        com_scan,
        cmd::SET_COM_PINS,
        com_pins,
        cmd::SET_CONTRAST,
        config.contrast,
        cmd::SET_PRECHARGE,
        precharge,
        cmd::SET_VCOM_DETECT,
        0x40,
        cmd::DISPLAY_ALL_ON_RESUME,
        cmd::NORMAL_DISPLAY,
        cmd::DISPLAY_ON,
    ]
}

/// Column window covering the whole panel width
pub fn column_window(config: &DisplayConfig) -> [u8; 3] {
    [cmd::COLUMN_ADDR, 0, config.width.saturating_sub(1) as u8]
}

/// Page window covering every page
pub fn page_window(config: &DisplayConfig) -> [u8; 3] {
    [cmd::PAGE_ADDR, 0, config.pages().saturating_sub(1) as u8]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_sequence_128x64() {
        let seq = init_sequence(&DisplayConfig::new(128, 64));

        assert_eq!(seq[0], cmd::DISPLAY_OFF);
        assert_eq!(&seq[3..5], &[cmd::SET_MULTIPLEX, 63]);
        assert_eq!(&seq[8..10], &[cmd::CHARGE_PUMP, 0x14]);
        assert_eq!(&seq[10..12], &[cmd::MEMORY_MODE, 0x00]);
        assert_eq!(&seq[12..14], &[cmd::SEG_REMAP, cmd::COM_SCAN_DEC]);
        assert_eq!(&seq[14..16], &[cmd::SET_COM_PINS, 0x12]);
        assert_eq!(&seq[16..18], &[cmd::SET_CONTRAST, 0x8F]);
        assert_eq!(&seq[18..20], &[cmd::SET_PRECHARGE, 0xF1]);
        assert_eq!(seq[INIT_LEN - 1], cmd::DISPLAY_ON);
    }

    #[test]
    fn test_init_sequence_128x32_external_vcc() {
        let mut config = DisplayConfig::new(128, 32);
        config.external_vcc = true;
        config.flipped = true;
        config.contrast = 0x20;
        let seq = init_sequence(&config);

        assert_eq!(seq[4], 31);
        assert_eq!(seq[9], 0x10);
        assert_eq!(&seq[12..14], &[cmd::SEG_NORMAL, cmd::COM_SCAN_INC]);
        assert_eq!(seq[15], 0x02);
        assert_eq!(seq[17], 0x20);
        assert_eq!(seq[19], 0x22);
    }

    #[test]
    fn test_check_geometry() {
        assert_eq!(check_geometry(&DisplayConfig::new(128, 64)), Ok(()));
        assert_eq!(check_geometry(&DisplayConfig::new(128, 16)), Ok(()));
        assert_eq!(check_geometry(&DisplayConfig::new(64, 48)), Ok(()));

        for (width, height) in [(256, 64), (129, 32), (0, 32), (128, 8), (128, 72)] {
            assert_eq!(
                check_geometry(&DisplayConfig::new(width, height)),
                Err(RenderError::InvalidDimensions),
                "{}x{}",
                width,
                height
            );
        }
    }

    #[test]
    fn test_multiplex_tracks_height() {
        assert_eq!(init_sequence(&DisplayConfig::new(128, 16))[4], 15);
        assert_eq!(init_sequence(&DisplayConfig::new(64, 48))[4], 47);
    }

    #[test]
    fn test_address_windows() {
        let config = DisplayConfig::new(128, 64);
        assert_eq!(column_window(&config), [cmd::COLUMN_ADDR, 0, 127]);
        assert_eq!(page_window(&config), [cmd::PAGE_ADDR, 0, 7]);

        let small = DisplayConfig::new(64, 48);
        assert_eq!(column_window(&small), [cmd::COLUMN_ADDR, 0, 63]);
        assert_eq!(page_window(&small), [cmd::PAGE_ADDR, 0, 5]);
    }
}
