//! Selection: which device the chart panel follows.

use crate::device::DeviceId;

/// Zero or one selected device. Changes only on a row click; there is no
/// way back to "nothing selected".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    device: Option<DeviceId>,
}

impl Selection {
    /// Select `device`, returning the device that was selected before.
    pub fn select(&mut self, device: DeviceId) -> Option<DeviceId> {
        self.device.replace(device)
    }

    #[must_use]
    pub fn device(&self) -> Option<&DeviceId> {
        self.device.as_ref()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.device.is_some()
    }

    /// Title of the chart panel, once something is selected.
    #[must_use]
    pub fn chart_title(&self) -> Option<String> {
        self.device.as_ref().map(|id| format!("Device {id} Charts"))
    }
}
