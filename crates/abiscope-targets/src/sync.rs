//! Size of the OS mutual-exclusion primitive.
//!
//! Runtime-managed locks are stored as opaque bytes, so only the size of
//! `CRITICAL_SECTION` / `pthread_mutex_t` matters. The host's `sizeof` can't
//! be used when cross compiling.

use crate::config::{OsFamily, TargetConfig};

/// Size in bytes of the target's native critical section.
pub fn critical_section_size(config: &TargetConfig) -> u32 {
    let lp64 = config.is_lp64;
    match config.os {
        // CRITICAL_SECTION
        OsFamily::Windows => {
            if lp64 {
                40
            } else {
                24
            }
        }
        OsFamily::Linux => match (config.is_64bit, lp64) {
            (_, true) => 40,
            (true, false) => 32,
            (false, false) => 24,
        },
        OsFamily::FreeBSD | OsFamily::OpenBSD | OsFamily::DragonFlyBSD => {
            // pthread_mutex_t is a pointer on the BSDs.
            if lp64 {
                8
            } else {
                4
            }
        }
        OsFamily::MacOS => {
            if lp64 {
                64
            } else {
                44
            }
        }
        OsFamily::Solaris => 24,
    }
}
