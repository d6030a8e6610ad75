use crate::schema::{self, config, module_config};

/// A configuration section, as carried by one `Config` message.
pub type ConfigSection = config::PayloadVariant;

/// A module configuration section, as carried by one `ModuleConfig` message.
pub type ModuleSection = module_config::PayloadVariant;

/// A decoded device-to-host message.
///
/// Every message kind the device can send maps onto exactly one variant, so
/// consumers match exhaustively and a new kind is a compile-time decision.
#[derive(Debug, Clone, PartialEq)]
pub enum RadioMessage {
    /// The local node's number and hardware identifier.
    NodeIdentity(schema::MyNodeInfo),
    /// A node database record; only the local node's record is of interest.
    NodeRecord(schema::NodeInfo),
    /// Firmware and hardware descriptors.
    Metadata(schema::DeviceMetadata),
    Config(ConfigSection),
    ModuleConfig(ModuleSection),
    Channel(schema::Channel),
    /// End of the configuration stream for the given request id.
    ConfigComplete(u32),
    /// A structured log line emitted by the firmware.
    LogRecord(schema::LogRecord),
    /// A known message kind with no bearing on configuration.
    Other(&'static str),
}

impl RadioMessage {
    /// Short name of the message kind, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            RadioMessage::NodeIdentity(_) => "my_info",
            RadioMessage::NodeRecord(_) => "node_info",
            RadioMessage::Metadata(_) => "metadata",
            RadioMessage::Config(_) => "config",
            RadioMessage::ModuleConfig(_) => "module_config",
            RadioMessage::Channel(_) => "channel",
            RadioMessage::ConfigComplete(_) => "config_complete_id",
            RadioMessage::LogRecord(_) => "log_record",
            RadioMessage::Other(kind) => *kind,
        }
    }
}

impl config::PayloadVariant {
    /// Section name, unique per variant.
    pub fn section_name(&self) -> &'static str {
        match self {
            config::PayloadVariant::Device(_) => "device",
            config::PayloadVariant::Position(_) => "position",
            config::PayloadVariant::Power(_) => "power",
            config::PayloadVariant::Network(_) => "network",
            config::PayloadVariant::Display(_) => "display",
            config::PayloadVariant::Lora(_) => "lora",
            config::PayloadVariant::Bluetooth(_) => "bluetooth",
            config::PayloadVariant::Security(_) => "security",
        }
    }
}

impl module_config::PayloadVariant {
    /// Section name, unique per variant.
    pub fn section_name(&self) -> &'static str {
        match self {
            module_config::PayloadVariant::Mqtt(_) => "mqtt",
            module_config::PayloadVariant::Serial(_) => "serial",
            module_config::PayloadVariant::ExternalNotification(_) => "external_notification",
            module_config::PayloadVariant::StoreForward(_) => "store_forward",
            module_config::PayloadVariant::RangeTest(_) => "range_test",
            module_config::PayloadVariant::Telemetry(_) => "telemetry",
            module_config::PayloadVariant::CannedMessage(_) => "canned_message",
            module_config::PayloadVariant::Audio(_) => "audio",
            module_config::PayloadVariant::RemoteHardware(_) => "remote_hardware",
            module_config::PayloadVariant::NeighborInfo(_) => "neighbor_info",
            module_config::PayloadVariant::AmbientLighting(_) => "ambient_lighting",
            module_config::PayloadVariant::DetectionSensor(_) => "detection_sensor",
            module_config::PayloadVariant::Paxcounter(_) => "paxcounter",
        }
    }
}
