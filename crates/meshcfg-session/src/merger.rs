use std::collections::BTreeMap;

use meshcfg_proto::schema::{Channel, DeviceMetadata, NodeInfo};
use meshcfg_proto::{ConfigSection, ModuleSection, RadioMessage};
use serde::{Serialize, Serializer};
use tracing::{debug, trace, warn};

/// Most channels a radio can define.
pub const MAX_CHANNELS: usize = 8;

/// A device configuration snapshot, assembled from many fragments.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeviceConfig {
    pub node_number: Option<u32>,
    #[serde(serialize_with = "serialize_identity")]
    pub device_identity: Option<Vec<u8>>,
    pub hardware_id: String,
    pub long_name: String,
    pub short_name: String,
    pub metadata: Option<DeviceMetadata>,
    /// One entry per section name, holding the newest fragment.
    pub config: BTreeMap<&'static str, ConfigSection>,
    /// One entry per module section name, holding the newest fragment.
    pub module_config: BTreeMap<&'static str, ModuleSection>,
    /// Channels in arrival order.
    pub channels: Vec<Channel>,
    pub config_complete: bool,
}

impl DeviceConfig {
    /// Whether the snapshot identifies its node well enough to be final.
    pub fn is_ready(&self) -> bool {
        self.node_number.is_some() && !self.hardware_id.is_empty()
    }
}

fn serialize_identity<S: Serializer>(
    identity: &Option<Vec<u8>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match identity {
        Some(bytes) => serializer.serialize_some(&hex::encode(bytes)),
        None => serializer.serialize_none(),
    }
}

/// What applying one message did to the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The snapshot changed.
    Applied,
    /// The message had no effect.
    Ignored,
    /// The completion signal for our request arrived. The snapshot may still
    /// lack identity fields; see [`ConfigMerger::is_resolved`].
    CandidateComplete,
}

/// Folds decoded messages into a [`DeviceConfig`].
///
/// Identity is first-write-wins: the node number and device identity are
/// taken from the first message that carries them and never replaced.
/// Everything else follows last-write-wins.
#[derive(Debug)]
pub struct ConfigMerger {
    request_id: u32,
    snapshot: DeviceConfig,
}

impl ConfigMerger {
    pub fn new(request_id: u32) -> Self {
        Self {
            request_id,
            snapshot: DeviceConfig::default(),
        }
    }

    /// Apply one message to the snapshot.
    pub fn apply(&mut self, message: RadioMessage) -> MergeOutcome {
        match message {
            RadioMessage::NodeIdentity(info) => {
                // Zero is what an unprovisioned radio reports; wait for a real number.
                if info.my_node_num == 0 {
                    debug!("ignoring node identity without a node number");
                    return MergeOutcome::Ignored;
                }
                match self.snapshot.node_number {
                    None => {
                        debug!(node = info.my_node_num, "local node identified");
                        self.snapshot.node_number = Some(info.my_node_num);
                    }
                    Some(known) if known != info.my_node_num => {
                        warn!(
                            known,
                            reported = info.my_node_num,
                            "ignoring conflicting node identity"
                        );
                        return MergeOutcome::Ignored;
                    }
                    Some(_) => {}
                }
                if self.snapshot.device_identity.is_none() && !info.device_id.is_empty() {
                    self.snapshot.device_identity = Some(info.device_id);
                }
                MergeOutcome::Applied
            }
            RadioMessage::NodeRecord(record) => self.apply_node_record(record),
            RadioMessage::Metadata(metadata) => {
                debug!(firmware = %metadata.firmware_version, "metadata");
                self.snapshot.metadata = Some(metadata);
                MergeOutcome::Applied
            }
            RadioMessage::Config(section) => {
                let name = section.section_name();
                debug!(section = name, "config section");
                self.snapshot.config.insert(name, section);
                MergeOutcome::Applied
            }
            RadioMessage::ModuleConfig(section) => {
                let name = section.section_name();
                debug!(section = name, "module config section");
                self.snapshot.module_config.insert(name, section);
                MergeOutcome::Applied
            }
            RadioMessage::Channel(channel) => {
                if self.snapshot.channels.len() >= MAX_CHANNELS {
                    warn!(index = channel.index, "channel limit reached, ignoring channel");
                    return MergeOutcome::Ignored;
                }
                debug!(index = channel.index, "channel");
                self.snapshot.channels.push(channel);
                MergeOutcome::Applied
            }
            RadioMessage::ConfigComplete(id) if id == self.request_id => {
                if self.snapshot.config_complete {
                    trace!(id, "repeated completion signal");
                    return MergeOutcome::Ignored;
                }
                debug!(id, ready = self.snapshot.is_ready(), "configuration complete");
                self.snapshot.config_complete = true;
                MergeOutcome::CandidateComplete
            }
            RadioMessage::ConfigComplete(id) => {
                debug!(id, expected = self.request_id, "completion for another request");
                MergeOutcome::Ignored
            }
            RadioMessage::LogRecord(_) | RadioMessage::Other(_) => MergeOutcome::Ignored,
        }
    }

    fn apply_node_record(&mut self, record: NodeInfo) -> MergeOutcome {
        if self.snapshot.node_number != Some(record.num) {
            trace!(node = record.num, "record for another node");
            return MergeOutcome::Ignored;
        }
        let Some(user) = record.user else {
            return MergeOutcome::Ignored;
        };

        debug!(id = %user.id, long_name = %user.long_name, "local node record");
        self.snapshot.hardware_id = user.id;
        self.snapshot.long_name = user.long_name;
        self.snapshot.short_name = user.short_name;
        if self.snapshot.device_identity.is_none() && !user.macaddr.is_empty() {
            self.snapshot.device_identity = Some(user.macaddr);
        }
        MergeOutcome::Applied
    }

    /// Completion was signalled and the snapshot is ready.
    pub fn is_resolved(&self) -> bool {
        self.snapshot.config_complete && self.snapshot.is_ready()
    }

    pub fn snapshot(&self) -> &DeviceConfig {
        &self.snapshot
    }

    pub fn into_snapshot(self) -> DeviceConfig {
        self.snapshot
    }
}
