//! Subset of the radio's public protobuf schema.
//!
//! Field numbers follow the upstream `.proto` definitions. Fields and
//! variants not listed here are skipped by the decoder, which keeps older
//! hosts working against newer firmware.

use serde::Serialize;

/// Device to host envelope.
#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct FromRadio {
    #[prost(uint32, tag = "1")]
    pub id: u32,
    #[prost(
        oneof = "from_radio::PayloadVariant",
        tags = "2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 13"
    )]
    pub payload_variant: Option<from_radio::PayloadVariant>,
}

pub mod from_radio {
    use serde::Serialize;

    #[derive(Clone, PartialEq, prost::Oneof, Serialize)]
    pub enum PayloadVariant {
        #[prost(message, tag = "2")]
        Packet(super::MeshPacket),
        #[prost(message, tag = "3")]
        MyInfo(super::MyNodeInfo),
        #[prost(message, tag = "4")]
        NodeInfo(super::NodeInfo),
        #[prost(message, tag = "5")]
        Config(super::Config),
        #[prost(message, tag = "6")]
        LogRecord(super::LogRecord),
        #[prost(uint32, tag = "7")]
        ConfigCompleteId(u32),
        #[prost(bool, tag = "8")]
        Rebooted(bool),
        #[prost(message, tag = "9")]
        ModuleConfig(super::ModuleConfig),
        #[prost(message, tag = "10")]
        Channel(super::Channel),
        #[prost(message, tag = "11")]
        QueueStatus(super::QueueStatus),
        #[prost(message, tag = "13")]
        Metadata(super::DeviceMetadata),
    }
}

/// Host to device envelope.
#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct ToRadio {
    #[prost(oneof = "to_radio::PayloadVariant", tags = "3, 4")]
    pub payload_variant: Option<to_radio::PayloadVariant>,
}

pub mod to_radio {
    use serde::Serialize;

    #[derive(Clone, PartialEq, prost::Oneof, Serialize)]
    pub enum PayloadVariant {
        /// Ask the device to stream its configuration, ending with a
        /// `config_complete_id` carrying the same value.
        #[prost(uint32, tag = "3")]
        WantConfigId(u32),
        #[prost(bool, tag = "4")]
        Disconnect(bool),
    }
}

/// Mesh traffic relayed to the host. Only the routing header is kept.
#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct MeshPacket {
    #[prost(fixed32, tag = "1")]
    pub from: u32,
    #[prost(fixed32, tag = "2")]
    pub to: u32,
    #[prost(uint32, tag = "3")]
    pub channel: u32,
    #[prost(fixed32, tag = "6")]
    pub id: u32,
}

#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct MyNodeInfo {
    #[prost(uint32, tag = "1")]
    pub my_node_num: u32,
    #[prost(uint32, tag = "8")]
    pub reboot_count: u32,
    #[prost(uint32, tag = "11")]
    pub min_app_version: u32,
    #[prost(bytes = "vec", tag = "12")]
    #[serde(serialize_with = "crate::hex_bytes::serialize")]
    pub device_id: Vec<u8>,
    #[prost(string, tag = "13")]
    pub pio_env: String,
}

#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct User {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub long_name: String,
    #[prost(string, tag = "3")]
    pub short_name: String,
    /// Superseded by `MyNodeInfo.device_id`; older firmware only fills this.
    #[prost(bytes = "vec", tag = "4")]
    #[serde(serialize_with = "crate::hex_bytes::serialize")]
    pub macaddr: Vec<u8>,
    #[prost(int32, tag = "5")]
    pub hw_model: i32,
    #[prost(bool, tag = "6")]
    pub is_licensed: bool,
    #[prost(int32, tag = "7")]
    pub role: i32,
    #[prost(bytes = "vec", tag = "8")]
    #[serde(serialize_with = "crate::hex_bytes::serialize")]
    pub public_key: Vec<u8>,
}

#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct NodeInfo {
    #[prost(uint32, tag = "1")]
    pub num: u32,
    #[prost(message, optional, tag = "2")]
    pub user: Option<User>,
    #[prost(float, tag = "4")]
    pub snr: f32,
    #[prost(fixed32, tag = "5")]
    pub last_heard: u32,
    #[prost(uint32, tag = "7")]
    pub channel: u32,
    #[prost(bool, tag = "8")]
    pub via_mqtt: bool,
    #[prost(uint32, optional, tag = "9")]
    pub hops_away: Option<u32>,
}

#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct DeviceMetadata {
    #[prost(string, tag = "1")]
    pub firmware_version: String,
    #[prost(uint32, tag = "2")]
    pub device_state_version: u32,
    #[prost(bool, tag = "3")]
    pub can_shutdown: bool,
    #[prost(bool, tag = "4")]
    pub has_wifi: bool,
    #[prost(bool, tag = "5")]
    pub has_bluetooth: bool,
    #[prost(bool, tag = "6")]
    pub has_ethernet: bool,
    #[prost(int32, tag = "7")]
    pub role: i32,
    #[prost(uint32, tag = "8")]
    pub position_flags: u32,
    #[prost(int32, tag = "9")]
    pub hw_model: i32,
    #[prost(bool, tag = "10")]
    pub has_remote_hardware: bool,
}

#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct LogRecord {
    #[prost(string, tag = "1")]
    pub message: String,
    #[prost(fixed32, tag = "2")]
    pub time: u32,
    #[prost(string, tag = "3")]
    pub source: String,
    #[prost(int32, tag = "4")]
    pub level: i32,
}

#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct QueueStatus {
    #[prost(int32, tag = "1")]
    pub res: i32,
    #[prost(uint32, tag = "2")]
    pub free: u32,
    #[prost(uint32, tag = "3")]
    pub maxlen: u32,
    #[prost(uint32, tag = "4")]
    pub mesh_packet_id: u32,
}

#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct Channel {
    #[prost(int32, tag = "1")]
    pub index: i32,
    #[prost(message, optional, tag = "2")]
    pub settings: Option<ChannelSettings>,
    /// 0 disabled, 1 primary, 2 secondary.
    #[prost(int32, tag = "3")]
    pub role: i32,
}

#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct ChannelSettings {
    #[prost(uint32, tag = "1")]
    pub channel_num: u32,
    #[prost(bytes = "vec", tag = "2")]
    #[serde(serialize_with = "crate::hex_bytes::serialize")]
    pub psk: Vec<u8>,
    #[prost(string, tag = "3")]
    pub name: String,
    #[prost(fixed32, tag = "4")]
    pub id: u32,
    #[prost(bool, tag = "5")]
    pub uplink_enabled: bool,
    #[prost(bool, tag = "6")]
    pub downlink_enabled: bool,
}

/// One configuration section per message.
#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct Config {
    #[prost(oneof = "config::PayloadVariant", tags = "1, 2, 3, 4, 5, 6, 7, 8")]
    pub payload_variant: Option<config::PayloadVariant>,
}

pub mod config {
    use serde::Serialize;

    #[derive(Clone, PartialEq, prost::Oneof, Serialize)]
    #[serde(untagged)]
    pub enum PayloadVariant {
        #[prost(message, tag = "1")]
        Device(DeviceConfig),
        #[prost(message, tag = "2")]
        Position(PositionConfig),
        #[prost(message, tag = "3")]
        Power(PowerConfig),
        #[prost(message, tag = "4")]
        Network(NetworkConfig),
        #[prost(message, tag = "5")]
        Display(DisplayConfig),
        #[prost(message, tag = "6")]
        Lora(LoRaConfig),
        #[prost(message, tag = "7")]
        Bluetooth(BluetoothConfig),
        #[prost(message, tag = "8")]
        Security(SecurityConfig),
    }

    #[derive(Clone, PartialEq, prost::Message, Serialize)]
    pub struct DeviceConfig {
        #[prost(int32, tag = "1")]
        pub role: i32,
        #[prost(int32, tag = "6")]
        pub rebroadcast_mode: i32,
        #[prost(uint32, tag = "7")]
        pub node_info_broadcast_secs: u32,
        #[prost(bool, tag = "8")]
        pub double_tap_as_button_press: bool,
        #[prost(bool, tag = "10")]
        pub disable_triple_click: bool,
        #[prost(string, tag = "11")]
        pub tzdef: String,
        #[prost(bool, tag = "12")]
        pub led_heartbeat_disabled: bool,
    }

    #[derive(Clone, PartialEq, prost::Message, Serialize)]
    pub struct PositionConfig {
        #[prost(uint32, tag = "1")]
        pub position_broadcast_secs: u32,
        #[prost(bool, tag = "2")]
        pub position_broadcast_smart_enabled: bool,
        #[prost(bool, tag = "3")]
        pub fixed_position: bool,
        #[prost(uint32, tag = "5")]
        pub gps_update_interval: u32,
        #[prost(uint32, tag = "7")]
        pub position_flags: u32,
        #[prost(int32, tag = "13")]
        pub gps_mode: i32,
    }

    #[derive(Clone, PartialEq, prost::Message, Serialize)]
    pub struct PowerConfig {
        #[prost(bool, tag = "1")]
        pub is_power_saving: bool,
        #[prost(uint32, tag = "2")]
        pub on_battery_shutdown_after_secs: u32,
        #[prost(float, tag = "3")]
        pub adc_multiplier_override: f32,
        #[prost(uint32, tag = "4")]
        pub wait_bluetooth_secs: u32,
        #[prost(uint32, tag = "6")]
        pub sds_secs: u32,
        #[prost(uint32, tag = "7")]
        pub ls_secs: u32,
        #[prost(uint32, tag = "8")]
        pub min_wake_secs: u32,
    }

    #[derive(Clone, PartialEq, prost::Message, Serialize)]
    pub struct NetworkConfig {
        #[prost(bool, tag = "1")]
        pub wifi_enabled: bool,
        #[prost(string, tag = "3")]
        pub wifi_ssid: String,
        #[prost(string, tag = "4")]
        #[serde(skip_serializing)]
        pub wifi_psk: String,
        #[prost(string, tag = "5")]
        pub ntp_server: String,
        #[prost(bool, tag = "6")]
        pub eth_enabled: bool,
        #[prost(int32, tag = "7")]
        pub address_mode: i32,
    }

    #[derive(Clone, PartialEq, prost::Message, Serialize)]
    pub struct DisplayConfig {
        #[prost(uint32, tag = "1")]
        pub screen_on_secs: u32,
        #[prost(int32, tag = "2")]
        pub gps_format: i32,
        #[prost(uint32, tag = "3")]
        pub auto_screen_carousel_secs: u32,
        #[prost(bool, tag = "4")]
        pub compass_north_top: bool,
        #[prost(bool, tag = "5")]
        pub flip_screen: bool,
        #[prost(int32, tag = "6")]
        pub units: i32,
    }

    #[derive(Clone, PartialEq, prost::Message, Serialize)]
    pub struct LoRaConfig {
        #[prost(bool, tag = "1")]
        pub use_preset: bool,
        #[prost(int32, tag = "2")]
        pub modem_preset: i32,
        #[prost(uint32, tag = "3")]
        pub bandwidth: u32,
        #[prost(uint32, tag = "4")]
        pub spread_factor: u32,
        #[prost(uint32, tag = "5")]
        pub coding_rate: u32,
        #[prost(float, tag = "6")]
        pub frequency_offset: f32,
        #[prost(int32, tag = "7")]
        pub region: i32,
        #[prost(uint32, tag = "8")]
        pub hop_limit: u32,
        #[prost(bool, tag = "9")]
        pub tx_enabled: bool,
        #[prost(int32, tag = "10")]
        pub tx_power: i32,
        #[prost(uint32, tag = "11")]
        pub channel_num: u32,
        #[prost(bool, tag = "12")]
        pub override_duty_cycle: bool,
    }

    #[derive(Clone, PartialEq, prost::Message, Serialize)]
    pub struct BluetoothConfig {
        #[prost(bool, tag = "1")]
        pub enabled: bool,
        #[prost(int32, tag = "2")]
        pub mode: i32,
        #[prost(uint32, tag = "3")]
        #[serde(skip_serializing)]
        pub fixed_pin: u32,
    }

    #[derive(Clone, PartialEq, prost::Message, Serialize)]
    pub struct SecurityConfig {
        #[prost(bytes = "vec", tag = "1")]
        #[serde(serialize_with = "crate::hex_bytes::serialize")]
        pub public_key: Vec<u8>,
        #[prost(bytes = "vec", tag = "2")]
        #[serde(skip_serializing)]
        pub private_key: Vec<u8>,
        #[prost(bytes = "vec", repeated, tag = "3")]
        #[serde(serialize_with = "crate::hex_bytes::serialize_list")]
        pub admin_key: Vec<Vec<u8>>,
        #[prost(bool, tag = "4")]
        pub is_managed: bool,
        #[prost(bool, tag = "5")]
        pub serial_enabled: bool,
        #[prost(bool, tag = "6")]
        pub debug_log_api_enabled: bool,
        #[prost(bool, tag = "8")]
        pub admin_channel_enabled: bool,
    }
}

/// One module configuration section per message.
#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct ModuleConfig {
    #[prost(
        oneof = "module_config::PayloadVariant",
        tags = "1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13"
    )]
    pub payload_variant: Option<module_config::PayloadVariant>,
}

pub mod module_config {
    use serde::Serialize;

    #[derive(Clone, PartialEq, prost::Oneof, Serialize)]
    #[serde(untagged)]
    pub enum PayloadVariant {
        #[prost(message, tag = "1")]
        Mqtt(MqttConfig),
        #[prost(message, tag = "2")]
        Serial(SerialConfig),
        #[prost(message, tag = "3")]
        ExternalNotification(ExternalNotificationConfig),
        #[prost(message, tag = "4")]
        StoreForward(StoreForwardConfig),
        #[prost(message, tag = "5")]
        RangeTest(RangeTestConfig),
        #[prost(message, tag = "6")]
        Telemetry(TelemetryConfig),
        #[prost(message, tag = "7")]
        CannedMessage(CannedMessageConfig),
        #[prost(message, tag = "8")]
        Audio(AudioConfig),
        #[prost(message, tag = "9")]
        RemoteHardware(RemoteHardwareConfig),
        #[prost(message, tag = "10")]
        NeighborInfo(NeighborInfoConfig),
        #[prost(message, tag = "11")]
        AmbientLighting(AmbientLightingConfig),
        #[prost(message, tag = "12")]
        DetectionSensor(DetectionSensorConfig),
        #[prost(message, tag = "13")]
        Paxcounter(PaxcounterConfig),
    }

    #[derive(Clone, PartialEq, prost::Message, Serialize)]
    pub struct MqttConfig {
        #[prost(bool, tag = "1")]
        pub enabled: bool,
        #[prost(string, tag = "2")]
        pub address: String,
        #[prost(string, tag = "3")]
        pub username: String,
        #[prost(string, tag = "4")]
        #[serde(skip_serializing)]
        pub password: String,
        #[prost(bool, tag = "5")]
        pub encryption_enabled: bool,
        #[prost(bool, tag = "6")]
        pub json_enabled: bool,
        #[prost(bool, tag = "7")]
        pub tls_enabled: bool,
        #[prost(string, tag = "8")]
        pub root: String,
        #[prost(bool, tag = "9")]
        pub proxy_to_client_enabled: bool,
        #[prost(bool, tag = "10")]
        pub map_reporting_enabled: bool,
    }

    #[derive(Clone, PartialEq, prost::Message, Serialize)]
    pub struct SerialConfig {
        #[prost(bool, tag = "1")]
        pub enabled: bool,
        #[prost(bool, tag = "2")]
        pub echo: bool,
        #[prost(uint32, tag = "3")]
        pub rxd: u32,
        #[prost(uint32, tag = "4")]
        pub txd: u32,
        #[prost(int32, tag = "5")]
        pub baud: i32,
        #[prost(uint32, tag = "6")]
        pub timeout: u32,
        #[prost(int32, tag = "7")]
        pub mode: i32,
    }

    #[derive(Clone, PartialEq, prost::Message, Serialize)]
    pub struct ExternalNotificationConfig {
        #[prost(bool, tag = "1")]
        pub enabled: bool,
        #[prost(uint32, tag = "2")]
        pub output_ms: u32,
        #[prost(uint32, tag = "3")]
        pub output: u32,
        #[prost(bool, tag = "4")]
        pub active: bool,
        #[prost(bool, tag = "5")]
        pub alert_message: bool,
        #[prost(bool, tag = "6")]
        pub alert_bell: bool,
    }

    #[derive(Clone, PartialEq, prost::Message, Serialize)]
    pub struct StoreForwardConfig {
        #[prost(bool, tag = "1")]
        pub enabled: bool,
        #[prost(bool, tag = "2")]
        pub heartbeat: bool,
        #[prost(uint32, tag = "3")]
        pub records: u32,
        #[prost(uint32, tag = "4")]
        pub history_return_max: u32,
        #[prost(uint32, tag = "5")]
        pub history_return_window: u32,
    }

    #[derive(Clone, PartialEq, prost::Message, Serialize)]
    pub struct RangeTestConfig {
        #[prost(bool, tag = "1")]
        pub enabled: bool,
        #[prost(uint32, tag = "2")]
        pub sender: u32,
        #[prost(bool, tag = "3")]
        pub save: bool,
    }

    #[derive(Clone, PartialEq, prost::Message, Serialize)]
    pub struct TelemetryConfig {
        #[prost(uint32, tag = "1")]
        pub device_update_interval: u32,
        #[prost(uint32, tag = "2")]
        pub environment_update_interval: u32,
        #[prost(bool, tag = "3")]
        pub environment_measurement_enabled: bool,
        #[prost(bool, tag = "4")]
        pub environment_screen_enabled: bool,
        #[prost(bool, tag = "5")]
        pub environment_display_fahrenheit: bool,
        #[prost(bool, tag = "6")]
        pub air_quality_enabled: bool,
        #[prost(uint32, tag = "7")]
        pub air_quality_interval: u32,
        #[prost(bool, tag = "8")]
        pub power_measurement_enabled: bool,
    }

    #[derive(Clone, PartialEq, prost::Message, Serialize)]
    pub struct CannedMessageConfig {
        #[prost(bool, tag = "1")]
        pub rotary1_enabled: bool,
        #[prost(bool, tag = "8")]
        pub updown1_enabled: bool,
        #[prost(bool, tag = "9")]
        pub enabled: bool,
        #[prost(string, tag = "10")]
        pub allow_input_source: String,
        #[prost(bool, tag = "11")]
        pub send_bell: bool,
    }

    #[derive(Clone, PartialEq, prost::Message, Serialize)]
    pub struct AudioConfig {
        #[prost(bool, tag = "1")]
        pub codec2_enabled: bool,
        #[prost(uint32, tag = "2")]
        pub ptt_pin: u32,
        #[prost(int32, tag = "3")]
        pub bitrate: i32,
    }

    #[derive(Clone, PartialEq, prost::Message, Serialize)]
    pub struct RemoteHardwareConfig {
        #[prost(bool, tag = "1")]
        pub enabled: bool,
        #[prost(bool, tag = "2")]
        pub allow_undefined_pin_access: bool,
    }

    #[derive(Clone, PartialEq, prost::Message, Serialize)]
    pub struct NeighborInfoConfig {
        #[prost(bool, tag = "1")]
        pub enabled: bool,
        #[prost(uint32, tag = "2")]
        pub update_interval: u32,
        #[prost(bool, tag = "3")]
        pub transmit_over_lora: bool,
    }

    #[derive(Clone, PartialEq, prost::Message, Serialize)]
    pub struct AmbientLightingConfig {
        #[prost(bool, tag = "1")]
        pub led_state: bool,
        #[prost(uint32, tag = "2")]
        pub current: u32,
        #[prost(uint32, tag = "3")]
        pub red: u32,
        #[prost(uint32, tag = "4")]
        pub green: u32,
        #[prost(uint32, tag = "5")]
        pub blue: u32,
    }

    #[derive(Clone, PartialEq, prost::Message, Serialize)]
    pub struct DetectionSensorConfig {
        #[prost(bool, tag = "1")]
        pub enabled: bool,
        #[prost(uint32, tag = "2")]
        pub minimum_broadcast_secs: u32,
        #[prost(uint32, tag = "3")]
        pub state_broadcast_secs: u32,
        #[prost(bool, tag = "4")]
        pub send_bell: bool,
        #[prost(string, tag = "5")]
        pub name: String,
    }

    #[derive(Clone, PartialEq, prost::Message, Serialize)]
    pub struct PaxcounterConfig {
        #[prost(bool, tag = "1")]
        pub enabled: bool,
        #[prost(uint32, tag = "2")]
        pub paxcounter_update_interval: u32,
        #[prost(int32, tag = "3")]
        pub wifi_threshold: i32,
        #[prost(int32, tag = "4")]
        pub ble_threshold: i32,
    }
}

/// Display name for the well-known hardware models.
pub fn hardware_model_name(model: i32) -> Option<&'static str> {
    let name = match model {
        0 => "UNSET",
        1 => "TLORA_V2",
        2 => "TLORA_V1",
        3 => "TLORA_V2_1_1P6",
        4 => "TBEAM",
        5 => "HELTEC_V2_0",
        6 => "TBEAM_V0P7",
        7 => "T_ECHO",
        8 => "TLORA_V1_1P3",
        9 => "RAK4631",
        10 => "HELTEC_V2_1",
        11 => "HELTEC_V1",
        12 => "LILYGO_TBEAM_S3_CORE",
        13 => "RAK11200",
        14 => "NANO_G1",
        15 => "TLORA_V2_1_1P8",
        16 => "TLORA_T3_S3",
        17 => "NANO_G1_EXPLORER",
        18 => "NANO_G2_ULTRA",
        25 => "STATION_G1",
        26 => "RAK11310",
        31 => "STATION_G2",
        39 => "DIY_V1",
        43 => "HELTEC_V3",
        44 => "HELTEC_WSL_V3",
        48 => "HELTEC_WIRELESS_TRACKER",
        49 => "HELTEC_WIRELESS_PAPER",
        50 => "T_DECK",
        51 => "T_WATCH_S3",
        69 => "HELTEC_MESH_NODE_T114",
        71 => "TRACKER_T1000_E",
        255 => "PRIVATE_HW",
        _ => return None,
    };
    Some(name)
}
