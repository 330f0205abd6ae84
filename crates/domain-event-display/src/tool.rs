//! Host tool configuration seam

use std::sync::atomic::{AtomicBool, Ordering};

/// The part of the host tool the plugin talks to
pub trait ToolConfig: Send + Sync {
    /// Mark the tool configuration as changed (or saved)
    fn set_config_changed(&self, changed: bool);
}

/// Plain dirty flag, for hosts that persist configuration themselves
#[derive(Debug, Default)]
pub struct ConfigFlag {
    changed: AtomicBool,
}

impl ConfigFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_changed(&self) -> bool {
        self.changed.load(Ordering::Acquire)
    }

    /// Read and reset the flag in one step
    pub fn take(&self) -> bool {
        self.changed.swap(false, Ordering::AcqRel)
    }
}

impl ToolConfig for ConfigFlag {
    fn set_config_changed(&self, changed: bool) {
        self.changed.store(changed, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_take_resets() {
        let flag = ConfigFlag::new();
        assert!(!flag.is_changed());
        flag.set_config_changed(true);
        assert!(flag.is_changed());
        assert!(flag.take());
        assert!(!flag.is_changed());
        assert!(!flag.take());
    }
}
