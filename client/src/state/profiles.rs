//! Portal user listing grouped by role.

#[cfg(test)]
#[path = "profiles_test.rs"]
mod profiles_test;

use crate::net::types::{Role, User};

/// Group users by role in [`Role::ALL`] order, names sorted within a group.
/// Roles without users are omitted.
#[must_use]
pub fn group_by_role(users: &[User]) -> Vec<(Role, Vec<User>)> {
    Role::ALL
        .into_iter()
        .filter_map(|role| {
            let mut group: Vec<User> = users.iter().filter(|u| u.role == role).cloned().collect();
            if group.is_empty() {
                return None;
            }
            group.sort_by(|a, b| a.name.cmp(&b.name));
            Some((role, group))
        })
        .collect()
}
