//! Public interface exposure flags.
//!
//! The only settings an operator may toggle while the node runs. They live
//! outside the immutable [`ClusterSettings`](super::ClusterSettings) value
//! behind their own lock; consumers see a change on their next read.

use parking_lot::RwLock;
use tracing::info;

/// Which HTTP surfaces are served on the external interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExposureFlags {
    pub admin_on_public: bool,
    pub stats_on_public: bool,
    pub gossip_on_public: bool,
}

/// Shared, runtime-toggleable [`ExposureFlags`].
#[derive(Debug)]
pub struct PublicExposure {
    flags: RwLock<ExposureFlags>,
}

impl PublicExposure {
    pub fn new(flags: ExposureFlags) -> Self {
        Self {
            flags: RwLock::new(flags),
        }
    }

    /// Consistent copy of all three flags.
    pub fn snapshot(&self) -> ExposureFlags {
        *self.flags.read()
    }

    pub fn admin_on_public(&self) -> bool {
        self.flags.read().admin_on_public
    }

    pub fn stats_on_public(&self) -> bool {
        self.flags.read().stats_on_public
    }

    pub fn gossip_on_public(&self) -> bool {
        self.flags.read().gossip_on_public
    }

    pub fn set_admin_on_public(&self, enabled: bool) {
        self.update(|f| f.admin_on_public = enabled);
    }

    pub fn set_stats_on_public(&self, enabled: bool) {
        self.update(|f| f.stats_on_public = enabled);
    }

    pub fn set_gossip_on_public(&self, enabled: bool) {
        self.update(|f| f.gossip_on_public = enabled);
    }

    /// Apply several changes atomically and return the resulting flags.
    pub fn update(&self, change: impl FnOnce(&mut ExposureFlags)) -> ExposureFlags {
        let mut flags = self.flags.write();
        let before = *flags;
        change(&mut *flags);
        if *flags != before {
            info!(
                admin_on_public = flags.admin_on_public,
                stats_on_public = flags.stats_on_public,
                gossip_on_public = flags.gossip_on_public,
                "Public exposure changed"
            );
        }
        *flags
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;

    fn all_on() -> ExposureFlags {
        ExposureFlags {
            admin_on_public: true,
            stats_on_public: true,
            gossip_on_public: true,
        }
    }

    #[test]
    fn test_setters_change_one_flag() {
        let exposure = PublicExposure::new(all_on());
        exposure.set_stats_on_public(false);

        assert!(exposure.admin_on_public());
        assert!(!exposure.stats_on_public());
        assert!(exposure.gossip_on_public());
    }

    #[test]
    fn test_update_is_atomic_for_readers() {
        let exposure = Arc::new(PublicExposure::new(all_on()));

        let writer = {
            let exposure = Arc::clone(&exposure);
            thread::spawn(move || {
                for i in 0..1000 {
                    let on = i % 2 == 0;
                    exposure.update(|f| {
                        f.admin_on_public = on;
                        f.stats_on_public = on;
                        f.gossip_on_public = on;
                    });
                }
            })
        };

        for _ in 0..1000 {
            let snap = exposure.snapshot();
            assert_eq!(snap.admin_on_public, snap.stats_on_public);
            assert_eq!(snap.stats_on_public, snap.gossip_on_public);
        }

        writer.join().unwrap();
    }
}
