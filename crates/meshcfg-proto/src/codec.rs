use prost::Message;
use tracing::trace;

use crate::error::{DecodeError, Result};
use crate::message::RadioMessage;
use crate::schema::{from_radio, to_radio, FromRadio, ToRadio};

/// Request id the host uses when asking for the full configuration. The
/// device echoes it back in `config_complete_id` when it is done.
pub const WANT_CONFIG_ID: u32 = 64;

/// Translates between frame payloads and radio messages.
pub trait MessageCodec {
    /// Decode one frame payload.
    fn decode(&self, payload: &[u8]) -> Result<RadioMessage>;

    /// Encode the request that makes the device stream its configuration.
    fn encode_config_request(&self, request_id: u32) -> Vec<u8>;
}

/// [`MessageCodec`] for the radio's protobuf schema.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProtobufCodec;

impl MessageCodec for ProtobufCodec {
    fn decode(&self, payload: &[u8]) -> Result<RadioMessage> {
        let envelope = FromRadio::decode(payload)?;
        let variant = envelope
            .payload_variant
            .ok_or(DecodeError::MissingVariant("from_radio"))?;

        let message = match variant {
            from_radio::PayloadVariant::MyInfo(info) => RadioMessage::NodeIdentity(info),
            from_radio::PayloadVariant::NodeInfo(info) => RadioMessage::NodeRecord(info),
            from_radio::PayloadVariant::Metadata(meta) => RadioMessage::Metadata(meta),
            from_radio::PayloadVariant::Config(config) => RadioMessage::Config(
                config
                    .payload_variant
                    .ok_or(DecodeError::MissingVariant("config"))?,
            ),
            from_radio::PayloadVariant::ModuleConfig(config) => RadioMessage::ModuleConfig(
                config
                    .payload_variant
                    .ok_or(DecodeError::MissingVariant("module_config"))?,
            ),
            from_radio::PayloadVariant::Channel(channel) => RadioMessage::Channel(channel),
            from_radio::PayloadVariant::ConfigCompleteId(id) => RadioMessage::ConfigComplete(id),
            from_radio::PayloadVariant::LogRecord(record) => RadioMessage::LogRecord(record),
            from_radio::PayloadVariant::Packet(_) => RadioMessage::Other("packet"),
            from_radio::PayloadVariant::Rebooted(_) => RadioMessage::Other("rebooted"),
            from_radio::PayloadVariant::QueueStatus(_) => RadioMessage::Other("queue_status"),
        };
        trace!(kind = message.kind(), "decoded message");
        Ok(message)
    }

    fn encode_config_request(&self, request_id: u32) -> Vec<u8> {
        ToRadio {
            payload_variant: Some(to_radio::PayloadVariant::WantConfigId(request_id)),
        }
        .encode_to_vec()
    }
}
