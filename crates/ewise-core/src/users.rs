//! Pure list logic over a loaded page of users.

use crate::api::User;

/// Case-insensitive substring filter over first name, last name and email.
///
/// An empty term returns every user in order.
pub fn filter_users<'a>(users: &'a [User], term: &str) -> Vec<&'a User> {
    if term.is_empty() {
        return users.iter().collect();
    }

    let needle = term.to_lowercase();
    users
        .iter()
        .filter(|user| {
            [&user.first_name, &user.last_name, &user.email]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Removes the user with `id`. Returns whether an entry was removed.
pub fn remove_user(users: &mut Vec<User>, id: u64) -> bool {
    let before = users.len();
    users.retain(|user| user.id != id);
    users.len() != before
}

/// Current page within `[1, total_pages]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub total_pages: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl Pagination {
    pub fn new(page: u32, total_pages: u32) -> Self {
        let mut pagination = Self {
            page,
            total_pages: total_pages.max(1),
        };
        pagination.clamp();
        pagination
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Returns the previous page, or `None` at the first page.
    pub fn prev(&self) -> Option<u32> {
        self.has_prev().then(|| self.page - 1)
    }

    /// Returns the next page, or `None` at the last page.
    pub fn next(&self) -> Option<u32> {
        self.has_next().then(|| self.page + 1)
    }

    pub fn clamp(&mut self) {
        self.page = self.page.clamp(1, self.total_pages.max(1));
    }

    /// Records the total from a successful list response.
    pub fn apply_total(&mut self, total_pages: u32) {
        self.total_pages = total_pages.max(1);
        self.clamp();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: u64, first: &str, last: &str, email: &str) -> User {
        User {
            id,
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
            avatar: String::new(),
        }
    }

    fn sample() -> Vec<User> {
        vec![
            user(1, "George", "Bluth", "george.bluth@reqres.in"),
            user(2, "Janet", "Weaver", "janet.weaver@reqres.in"),
            user(3, "Emma", "Wong", ""),
            user(4, "Eve", "Holt", "eve.holt@reqres.in"),
        ]
    }

    #[test]
    fn test_empty_term_returns_all() {
        let users = sample();
        let ids: Vec<u64> = filter_users(&users, "").iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_filter_is_case_insensitive_across_fields() {
        let users = sample();
        let by_name: Vec<u64> = filter_users(&users, "WEAV").iter().map(|u| u.id).collect();
        assert_eq!(by_name, vec![2]);

        let by_email: Vec<u64> = filter_users(&users, "holt@").iter().map(|u| u.id).collect();
        assert_eq!(by_email, vec![4]);

        let multiple: Vec<u64> = filter_users(&users, "e").iter().map(|u| u.id).collect();
        assert_eq!(multiple, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_filter_no_match() {
        assert!(filter_users(&sample(), "zzz").is_empty());
    }

    #[test]
    fn test_remove_user_removes_only_that_id() {
        let mut users = sample();
        assert!(remove_user(&mut users, 2));
        let ids: Vec<u64> = users.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);

        assert!(!remove_user(&mut users, 99));
        assert_eq!(users.len(), 3);
    }

    #[test]
    fn test_pagination_boundaries_are_noops() {
        let first = Pagination::new(1, 2);
        assert_eq!(first.prev(), None);
        assert_eq!(first.next(), Some(2));

        let last = Pagination::new(2, 2);
        assert_eq!(last.next(), None);
        assert_eq!(last.prev(), Some(1));
    }

    #[test]
    fn test_pagination_clamps_into_range() {
        assert_eq!(Pagination::new(0, 3).page, 1);
        assert_eq!(Pagination::new(9, 3).page, 3);

        let mut p = Pagination::new(3, 3);
        p.apply_total(2);
        assert_eq!(p, Pagination { page: 2, total_pages: 2 });
    }

    #[test]
    fn test_zero_total_treated_as_one() {
        let mut p = Pagination::new(2, 5);
        p.apply_total(0);
        assert_eq!(p, Pagination { page: 1, total_pages: 1 });
        assert!(!p.has_prev());
        assert!(!p.has_next());
    }
}
