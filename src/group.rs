use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::{Path, PathBuf};

/// A SCIM group resource as listed by the AWS identity store.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub schemas: Vec<String>,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<String>,
}

impl Group {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            ..Self::default()
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Listing {
    Groups(Vec<Group>),
    Response {
        #[serde(rename = "Resources", default)]
        resources: Vec<Group>,
    },
}

/// Parses either a bare array of groups or a SCIM `ListResponse`.
pub fn parse_groups(content: &str) -> serde_json::Result<Vec<Group>> {
    let listing: Listing = serde_json::from_str(content)?;
    Ok(match listing {
        Listing::Groups(groups) => groups,
        Listing::Response { resources } => resources,
    })
}

/// Reads a group listing from `path`, or from stdin when `path` is `-`.
pub fn read_groups(path: &Path) -> Result<Vec<Group>> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| Error::ReadGroups {
                path: PathBuf::from("<stdin>"),
                source: e,
            })?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|e| Error::ReadGroups {
            path: path.to_path_buf(),
            source: e,
        })?
    };

    parse_groups(&content).map_err(|e| Error::ParseGroups {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_bare_array() {
        let groups = parse_groups(
            r#"[{"displayName": "aws-group-A"}, {"id": "g-2", "displayName": "aws-group-B"}]"#,
        )
        .unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0], Group::new("aws-group-A"));
        assert_eq!(groups[1].id.as_deref(), Some("g-2"));
    }

    #[test]
    fn test_parse_list_response() {
        let groups = parse_groups(
            r#"{
                "schemas": ["urn:ietf:params:scim:api:messages:2.0:ListResponse"],
                "totalResults": 1,
                "Resources": [
                    {
                        "id": "90677c608a-7afcdc23-0bd4-4fb7-b2ff-10ccffdff447",
                        "schemas": ["urn:ietf:params:scim:schemas:core:2.0:Group"],
                        "displayName": "aws-admins",
                        "members": ["u-1", "u-2"]
                    }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].display_name, "aws-admins");
        assert_eq!(groups[0].members, vec!["u-1", "u-2"]);
    }

    #[test]
    fn test_parse_list_response_without_resources() {
        let groups = parse_groups(r#"{"totalResults": 0}"#).unwrap();
        assert!(groups.is_empty());
    }

    #[test]
    fn test_parse_missing_display_name() {
        assert!(parse_groups(r#"[{"id": "g-1"}]"#).is_err());
    }

    #[test]
    fn test_read_groups_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"[{{"displayName": "aws-group-A"}}]"#).unwrap();

        let groups = read_groups(file.path()).unwrap();
        assert_eq!(groups, vec![Group::new("aws-group-A")]);
    }

    #[test]
    fn test_read_groups_missing_file() {
        let result = read_groups(Path::new("/nonexistent/groups.json"));
        assert!(matches!(result, Err(Error::ReadGroups { .. })));
    }

    #[test]
    fn test_read_groups_bad_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let result = read_groups(file.path());
        assert!(matches!(result, Err(Error::ParseGroups { .. })));
    }
}
