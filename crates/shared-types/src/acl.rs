//! # Stream Access Control Lists
//!
//! Per-stream role lists consumed by the authorization layer.
//!
//! Each list is either absent (`None`, no restriction recorded) or a set of
//! role names. An empty list is not the same as an absent one: it means no
//! role is permitted.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Operations a stream ACL grants roles for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AclOperation {
    Read,
    Write,
    Delete,
    MetaRead,
    MetaWrite,
}

/// Role lists for the five stream operations.
///
/// Field names on the wire follow the stream metadata convention (`$r`, `$w`,
/// `$d`, `$mr`, `$mw`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamAcl {
    #[serde(rename = "$r", default, skip_serializing_if = "Option::is_none")]
    read_roles: Option<Vec<String>>,
    #[serde(rename = "$w", default, skip_serializing_if = "Option::is_none")]
    write_roles: Option<Vec<String>>,
    #[serde(rename = "$d", default, skip_serializing_if = "Option::is_none")]
    delete_roles: Option<Vec<String>>,
    #[serde(rename = "$mr", default, skip_serializing_if = "Option::is_none")]
    meta_read_roles: Option<Vec<String>>,
    #[serde(rename = "$mw", default, skip_serializing_if = "Option::is_none")]
    meta_write_roles: Option<Vec<String>>,
}

impl StreamAcl {
    /// Create an ACL from five role lists, kept exactly as given.
    pub fn new(
        read_roles: Option<Vec<String>>,
        write_roles: Option<Vec<String>>,
        delete_roles: Option<Vec<String>>,
        meta_read_roles: Option<Vec<String>>,
        meta_write_roles: Option<Vec<String>>,
    ) -> Self {
        Self {
            read_roles,
            write_roles,
            delete_roles,
            meta_read_roles,
            meta_write_roles,
        }
    }

    /// Create an ACL from one role per operation.
    ///
    /// Each present role becomes a one-element list; an absent role stays
    /// absent rather than turning into an empty list.
    pub fn from_roles(
        read_role: Option<&str>,
        write_role: Option<&str>,
        delete_role: Option<&str>,
        meta_read_role: Option<&str>,
        meta_write_role: Option<&str>,
    ) -> Self {
        fn single(role: Option<&str>) -> Option<Vec<String>> {
            role.map(|r| vec![r.to_string()])
        }

        Self::new(
            single(read_role),
            single(write_role),
            single(delete_role),
            single(meta_read_role),
            single(meta_write_role),
        )
    }

    pub fn read_roles(&self) -> Option<&[String]> {
        self.read_roles.as_deref()
    }

    pub fn write_roles(&self) -> Option<&[String]> {
        self.write_roles.as_deref()
    }

    pub fn delete_roles(&self) -> Option<&[String]> {
        self.delete_roles.as_deref()
    }

    pub fn meta_read_roles(&self) -> Option<&[String]> {
        self.meta_read_roles.as_deref()
    }

    pub fn meta_write_roles(&self) -> Option<&[String]> {
        self.meta_write_roles.as_deref()
    }

    /// Roles recorded for `operation`, or `None` if nothing was recorded.
    pub fn roles_for(&self, operation: AclOperation) -> Option<&[String]> {
        match operation {
            AclOperation::Read => self.read_roles(),
            AclOperation::Write => self.write_roles(),
            AclOperation::Delete => self.delete_roles(),
            AclOperation::MetaRead => self.meta_read_roles(),
            AclOperation::MetaWrite => self.meta_write_roles(),
        }
    }
}

struct RoleList<'a>(Option<&'a [String]>);

impl fmt::Display for RoleList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            None => f.write_str("<null>"),
            Some(roles) => write!(f, "[{}]", roles.join(", ")),
        }
    }
}

impl fmt::Display for StreamAcl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Read: {}, Write: {}, Delete: {}, MetaRead: {}, MetaWrite: {}",
            RoleList(self.read_roles()),
            RoleList(self.write_roles()),
            RoleList(self.delete_roles()),
            RoleList(self.meta_read_roles()),
            RoleList(self.meta_write_roles()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_roles_become_one_element_lists_in_order() {
        let acl = StreamAcl::from_roles(
            Some("readers"),
            Some("writers"),
            Some("admins"),
            Some("meta-readers"),
            Some("meta-writers"),
        );

        assert_eq!(acl.read_roles(), Some(&["readers".to_string()][..]));
        assert_eq!(acl.write_roles(), Some(&["writers".to_string()][..]));
        assert_eq!(acl.delete_roles(), Some(&["admins".to_string()][..]));
        assert_eq!(acl.meta_read_roles(), Some(&["meta-readers".to_string()][..]));
        assert_eq!(acl.meta_write_roles(), Some(&["meta-writers".to_string()][..]));
    }

    #[test]
    fn test_absent_role_stays_absent() {
        let acl = StreamAcl::from_roles(Some("readers"), None, None, None, Some("ops"));

        assert!(acl.write_roles().is_none());
        assert!(acl.delete_roles().is_none());
        assert!(acl.meta_read_roles().is_none());
        assert_eq!(acl.roles_for(AclOperation::MetaWrite).map(|r| r.len()), Some(1));
    }

    #[test]
    fn test_empty_list_is_distinct_from_absent() {
        let acl = StreamAcl::new(Some(Vec::new()), None, None, None, None);

        assert_eq!(acl.read_roles(), Some(&[][..]));
        assert!(acl.write_roles().is_none());
        assert_ne!(acl, StreamAcl::default());
    }

    #[test]
    fn test_display_marks_absent_lists() {
        let acl = StreamAcl::new(
            Some(vec!["a".to_string(), "b".to_string()]),
            None,
            Some(Vec::new()),
            None,
            None,
        );

        assert_eq!(
            acl.to_string(),
            "Read: [a, b], Write: <null>, Delete: [], MetaRead: <null>, MetaWrite: <null>"
        );
    }

    #[test]
    fn test_serde_uses_metadata_keys_and_skips_absent() {
        let acl = StreamAcl::from_roles(Some("$all"), None, None, None, Some("$admins"));
        let json = serde_json::to_string(&acl).unwrap();

        assert_eq!(json, r#"{"$r":["$all"],"$mw":["$admins"]}"#);

        let decoded: StreamAcl = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, acl);
    }
}
