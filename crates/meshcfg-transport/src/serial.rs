use std::time::Duration;

use serialport::{DataBits, FlowControl, Parity, SerialPort, StopBits};
use tracing::{debug, info};

use crate::error::{Result, TransportError};
use crate::io::{IoSink, IoSource};

/// Default line speed of the radio's serial console.
pub const DEFAULT_BAUD_RATE: u32 = 115_200;

/// Default per-read timeout. Short so the reader can notice shutdown.
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_millis(100);

/// Serial link parameters. Framing is always 8N1 without flow control.
#[derive(Debug, Clone)]
pub struct SerialConfig {
    /// Device path, e.g. `/dev/ttyUSB0` or `COM3`.
    pub path: String,
    /// Line speed.
    pub baud_rate: u32,
    /// Per-read timeout.
    pub read_timeout: Duration,
}

impl SerialConfig {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            baud_rate: DEFAULT_BAUD_RATE,
            read_timeout: DEFAULT_READ_TIMEOUT,
        }
    }
}

/// An open serial link, split into a reading and a writing half.
pub struct SerialLink {
    reader: IoSource<Box<dyn SerialPort>>,
    writer: IoSink<Box<dyn SerialPort>>,
}

impl SerialLink {
    /// Open the port described by `config`.
    pub fn open(config: &SerialConfig) -> Result<Self> {
        let port = serialport::new(&config.path, config.baud_rate)
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .flow_control(FlowControl::None)
            .timeout(config.read_timeout)
            .open()
            .map_err(|err| TransportError::Open {
                path: config.path.clone(),
                source: err.into(),
            })?;

        let writer = port.try_clone().map_err(|err| TransportError::Open {
            path: config.path.clone(),
            source: err.into(),
        })?;

        info!(path = %config.path, baud = config.baud_rate, "opened serial port");
        debug!(read_timeout = ?config.read_timeout, "serial read timeout");

        Ok(Self {
            reader: IoSource::new(port),
            writer: IoSink::new(writer),
        })
    }

    /// Split into the byte source and byte sink halves.
    pub fn split(self) -> (IoSource<Box<dyn SerialPort>>, IoSink<Box<dyn SerialPort>>) {
        (self.reader, self.writer)
    }
}

impl std::fmt::Debug for SerialLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerialLink").field("type", &"serial").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_match_radio_console() {
        let cfg = SerialConfig::new("/dev/ttyUSB0");
        assert_eq!(cfg.baud_rate, 115_200);
        assert_eq!(cfg.read_timeout, Duration::from_millis(100));
    }

    #[test]
    fn open_missing_port_reports_path() {
        let cfg = SerialConfig::new("/dev/meshcfg-definitely-missing");
        let err = SerialLink::open(&cfg).unwrap_err();
        match err {
            TransportError::Open { path, .. } => {
                assert_eq!(path, "/dev/meshcfg-definitely-missing")
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
