//! Sharp memory LCD driver
//!
//! Driver for 144x168 memory-in-pixel panels via SPI. The panel keeps its
//! image without refresh; only changed lines are sent. Chip select is
//! active high. Framing comes from `t10_display::memlcd`.

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;
use embedded_hal_async::delay::DelayNs;

use t10_display::memlcd::{command_byte, encode_line, CMD_CLEAR, CMD_WRITE_LINE, TRAILER};
use t10_display::{DisplayBackend, DisplayError, FrameBuffer};

/// Chip select setup time before the first clock edge (tsSCS)
const CS_SETUP_US: u32 = 3;

/// Chip select hold time after the last clock edge (thSCS)
const CS_HOLD_US: u32 = 1;

/// Memory LCD driver
pub struct MemoryLcd<SPI, CS, D> {
    spi: SPI,
    cs: CS,
    delay: D,
    /// VCOM polarity; must alternate to avoid DC bias on the liquid crystal
    vcom: bool,
    initialized: bool,
}

impl<SPI, CS, D> MemoryLcd<SPI, CS, D>
where
    SPI: SpiBus,
    CS: OutputPin,
    D: DelayNs,
{
    /// Create a new driver
    pub fn new(spi: SPI, cs: CS, delay: D) -> Self {
        Self {
            spi,
            cs,
            delay,
            vcom: false,
            initialized: false,
        }
    }

    /// Initialize the panel: deselect it, then clear it
    pub async fn init(&mut self) -> Result<(), DisplayError> {
        self.cs.set_low().map_err(|_| DisplayError::Communication)?;
        self.initialized = true;
        self.clear().await
    }

    /// Command byte for the next transfer; flips VCOM every time
    fn next_command(&mut self, command: u8) -> u8 {
        self.vcom = !self.vcom;
        command_byte(command, self.vcom)
    }

    async fn select(&mut self) -> Result<(), DisplayError> {
        self.cs.set_high().map_err(|_| DisplayError::Communication)?;
        self.delay.delay_us(CS_SETUP_US).await;
        Ok(())
    }

    async fn deselect(&mut self) -> Result<(), DisplayError> {
        self.spi.flush().map_err(|_| DisplayError::Communication)?;
        self.delay.delay_us(CS_HOLD_US).await;
        self.cs.set_low().map_err(|_| DisplayError::Communication)
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), DisplayError> {
        self.spi.write(bytes).map_err(|_| DisplayError::Communication)
    }

    fn write_lines(&mut self, frame: &FrameBuffer) -> Result<usize, DisplayError> {
        let command = self.next_command(CMD_WRITE_LINE);
        self.write(&[command])?;

        let mut sent = 0;
        for y in frame.dirty_rows() {
            self.write(&encode_line(y, frame.row(y)))?;
            sent += 1;
        }

        self.write(&[TRAILER])?;
        Ok(sent)
    }
}

impl<SPI, CS, D> DisplayBackend for MemoryLcd<SPI, CS, D>
where
    SPI: SpiBus,
    CS: OutputPin,
    D: DelayNs,
{
    async fn clear(&mut self) -> Result<(), DisplayError> {
        if !self.initialized {
            return Err(DisplayError::NotInitialized);
        }

        let command = self.next_command(CMD_CLEAR);
        self.select().await?;
        let result = self.write(&[command, TRAILER]);
        self.deselect().await?;
        result
    }

    async fn flush(&mut self, frame: &mut FrameBuffer) -> Result<usize, DisplayError> {
        if !self.initialized {
            return Err(DisplayError::NotInitialized);
        }
        if !frame.is_dirty() {
            return Ok(0);
        }

        self.select().await?;
        let result = self.write_lines(frame);
        self.deselect().await?;

        // Rows stay dirty on failure so the next flush resends them
        let sent = result?;
        frame.mark_clean();
        Ok(sent)
    }
}
