//! Serial input and stop request traits

/// Errors reported by a serial source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SerialError {
    /// Receive buffer overrun, bytes were lost
    Overrun,
    /// Framing, parity or break condition on the line
    Line,
}

/// Non-blocking byte source for the GPS receiver
#[allow(async_fn_in_trait)]
pub trait SerialSource {
    /// Copy whatever bytes are already buffered into `buf`
    ///
    /// Must not wait for new data; returns `Ok(0)` when nothing is pending.
    async fn read_available(&mut self, buf: &mut [u8]) -> Result<usize, SerialError>;
}

/// External request to end the poll loop (operator stop)
pub trait StopRequest {
    fn requested(&mut self) -> bool;
}
