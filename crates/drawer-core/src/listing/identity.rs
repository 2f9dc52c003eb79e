use std::collections::HashMap;

use uzers::{get_group_by_gid, get_user_by_uid};

/// Memoized uid/gid to name resolution for one scan.
///
/// A scan touches the same handful of owners over and over; one system
/// lookup per distinct id is enough. The cache lives and dies with the
/// call that created it, so results never go stale across scans.
#[derive(Debug, Default)]
pub struct IdentityCache {
    users: HashMap<u32, String>,
    groups: HashMap<u32, String>,
}

impl IdentityCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a uid. A failed lookup yields an empty name; the numeric
    /// id stays available on the entry.
    pub fn user_name(&mut self, uid: u32) -> String {
        self.users
            .entry(uid)
            .or_insert_with(|| {
                get_user_by_uid(uid)
                    .map(|u| u.name().to_string_lossy().into_owned())
                    .unwrap_or_default()
            })
            .clone()
    }

    /// Resolve a gid, same contract as [`user_name`](Self::user_name).
    pub fn group_name(&mut self, gid: u32) -> String {
        self.groups
            .entry(gid)
            .or_insert_with(|| {
                get_group_by_gid(gid)
                    .map(|g| g.name().to_string_lossy().into_owned())
                    .unwrap_or_default()
            })
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_ids_resolve_to_empty_names() {
        let mut ids = IdentityCache::new();
        // uids this high are not allocated on any sane test host
        assert_eq!(ids.user_name(u32::MAX - 7), "");
        assert_eq!(ids.group_name(u32::MAX - 7), "");
    }

    #[test]
    fn lookups_are_memoized() {
        let mut ids = IdentityCache::new();
        let first = ids.user_name(0);
        let again = ids.user_name(0);
        assert_eq!(first, again);
        assert_eq!(ids.users.len(), 1);
    }
}
