//! Fixclock - GPS Clock Firmware
//!
//! Main firmware binary for an RP2040 GPS clock: a NMEA receiver on UART0,
//! an HT16K33 4-digit display on I2C0 and an ST7789 panel on SPI1.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::UART0;
use embassy_rp::spi::{self, Spi};
use embassy_rp::uart::{self, BufferedInterruptHandler, BufferedUartRx};
use embassy_time::{Delay, Timer};
use embedded_hal_bus::spi::ExclusiveDevice;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use fixclock_core::render::UtcOffset;
use fixclock_core::scheduler::{Instrument, PollLoop};
use fixclock_core::sink::{PanelSink, SegmentSink};
use fixclock_drivers::bus;
use fixclock_drivers::gps::NmeaDecoder;
use fixclock_drivers::panel::{Rotation, St7789, TextPanel};
use fixclock_drivers::segment::Ht16k33;

mod config;
mod notify;
mod serial;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

/// GPS receive buffer size; covers several seconds of sentences at 9600 baud
const GPS_RX_BUF_SIZE: usize = 1024;

// Static cell for the UART buffer (must live forever)
static GPS_RX_BUF: StaticCell<[u8; GPS_RX_BUF_SIZE]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Fixclock firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load();
    config::log_summary(&config);

    // Setup I2C0 for the segment display
    // Pin assignments: SDA=GPIO4, SCL=GPIO5
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = config.segment.i2c_frequency;
    let mut i2c = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, i2c_config);

    let found = bus::scan(&mut i2c);
    if found.is_empty() {
        warn!("[I2C] No I2C devices found!");
    } else {
        info!("[I2C] Found devices at addresses: {=[u8]:#x}", found.as_slice());
    }

    let mut segment_display = Ht16k33::new(i2c, config.segment.i2c_address);
    match segment_display.init(config.segment.brightness) {
        Ok(()) => info!("Segment display initialized"),
        Err(e) => error!("[ERROR] Segment display initialization failed: {:?}", e),
    }

    let mut segment = SegmentSink::new(segment_display);
    if let Err(e) = segment.show_no_fix() {
        warn!("Failed to show initial frame: {:?}", e);
    }

    // Backlight on GPIO13, held for the lifetime of the firmware
    let _backlight = Output::new(
        p.PIN_13,
        if config.panel.enabled {
            Level::High
        } else {
            Level::Low
        },
    );

    let panel = if config.panel.enabled {
        // Setup SPI1 for the TFT panel
        // Pin assignments: SCK=GPIO10, MOSI=GPIO11, CS=GPIO9, DC=GPIO8, RST=GPIO12
        let mut spi_config = spi::Config::default();
        spi_config.frequency = config.panel.spi_frequency;
        let spi = Spi::new_blocking_txonly(p.SPI1, p.PIN_10, p.PIN_11, spi_config);
        let cs = Output::new(p.PIN_9, Level::High);
        let dc = Output::new(p.PIN_8, Level::Low);
        let rst = Output::new(p.PIN_12, Level::High);

        let device = match ExclusiveDevice::new_no_delay(spi, cs) {
            Ok(device) => device,
            Err(e) => match e {},
        };

        let mut st7789 = St7789::new(device, dc, rst, config.panel.width, config.panel.height);
        let rotation = Rotation::from_quarter_turns(config.panel.rotation);

        debug!("[LCD] Initializing TFT display...");
        let panel = match st7789.init(&mut Delay, rotation) {
            Ok(()) => {
                let mut text_panel = TextPanel::new(st7789);
                match text_panel.fill_background() {
                    Ok(()) => {
                        debug!("[LCD] TFT display initialized successfully.");
                        Timer::after_secs(1).await;
                        Some(text_panel)
                    }
                    Err(e) => {
                        error!("[ERROR] TFT display initialization failed: {:?}", e);
                        None
                    }
                }
            }
            Err(e) => {
                error!("[ERROR] TFT display initialization failed: {:?}", e);
                None
            }
        };
        if panel.is_none() {
            debug!("[LCD] TFT display unavailable, panel updates disabled.");
        }
        panel
    } else {
        info!("TFT display disabled in config");
        None
    };

    // Setup UART0 for the GPS receiver (receive only)
    // Pin assignment: RX=GPIO1
    let mut uart_config = uart::Config::default();
    uart_config.baudrate = config.gps.baudrate;
    let rx_buf = GPS_RX_BUF.init([0u8; GPS_RX_BUF_SIZE]);
    let rx = BufferedUartRx::new(p.UART0, Irqs, p.PIN_1, rx_buf, uart_config);
    info!("GPS UART initialized at {} baud", config.gps.baudrate);

    // Stop button on GPIO15, active low
    let stop_pin = Input::new(p.PIN_15, Pull::Up);

    let offset = config.utc_offset().unwrap_or(UtcOffset::UTC);
    let instrument = Instrument::new(
        NmeaDecoder::new(),
        offset,
        segment,
        PanelSink::with_panel(panel),
        notify::DefmtNotifier,
    );
    let mut poll = PollLoop::new(instrument, config.poll_interval_ms);

    info!("Entering poll loop ({}ms interval)", config.poll_interval_ms);

    let mut source = serial::UartSource::new(rx);
    let mut stop = serial::ButtonStop::new(stop_pin);
    let cycles = poll.run(&mut source, &mut Delay, &mut stop).await;

    info!(
        "Poll loop ended after {} cycles, fix held: {}",
        cycles,
        poll.instrument().fix_state().had_fix()
    );

    Timer::after_millis(100).await;

    loop {
        Timer::after_secs(60).await;
    }
}
