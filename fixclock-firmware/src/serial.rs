//! GPS UART source and stop button

use embassy_rp::gpio::Input;
use embassy_rp::uart::{self, BufferedUartRx};
use embedded_io::ReadReady;
use embedded_io_async::Read;
use fixclock_core::traits::{SerialError, SerialSource, StopRequest};

/// Non-blocking reader over the buffered GPS UART
pub struct UartSource {
    rx: BufferedUartRx,
}

impl UartSource {
    pub fn new(rx: BufferedUartRx) -> Self {
        Self { rx }
    }
}

fn map_error(e: uart::Error) -> SerialError {
    match e {
        uart::Error::Overrun => SerialError::Overrun,
        _ => SerialError::Line,
    }
}

impl SerialSource for UartSource {
    async fn read_available(&mut self, buf: &mut [u8]) -> Result<usize, SerialError> {
        // Only read when bytes are buffered; `read` would wait otherwise
        if !self.rx.read_ready().map_err(map_error)? {
            return Ok(0);
        }
        self.rx.read(buf).await.map_err(map_error)
    }
}

/// Active-low push button that ends the poll loop
pub struct ButtonStop {
    pin: Input<'static>,
}

impl ButtonStop {
    pub fn new(pin: Input<'static>) -> Self {
        Self { pin }
    }
}

impl StopRequest for ButtonStop {
    fn requested(&mut self) -> bool {
        self.pin.is_low()
    }
}
