use serde::{Deserialize, Serialize};

/// A candidate profile as delivered by the remote feed.
///
/// The source guarantees no identifier and no uniqueness; the widget treats
/// every entry as an opaque snapshot.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub age: u32,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

/// The locally authored profile. Same shape as [`Profile`], but it never
/// comes from the network: it is built from validated form input and lives
/// in its own storage slot. At most one exists at a time.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DraftProfile {
    pub name: String,
    pub age: u32,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

/// Raw form input for the draft editor, before validation. All fields are
/// strings exactly as typed; `age` is parsed during validation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DraftFields {
    pub name: String,
    pub age: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub photo: String,
    #[serde(default)]
    pub bio: String,
}

/// Auxiliary panels toggled independently of feed traversal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelId {
    Liked,
    Draft,
    WhoLikedMe,
}

impl PanelId {
    pub fn as_str(&self) -> &'static str {
        match self {
            PanelId::Liked => "liked",
            PanelId::Draft => "draft",
            PanelId::WhoLikedMe => "who_liked_me",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_optionals_default_when_absent() {
        let p: Profile = serde_json::from_str(r#"{"name":"Ann","age":28}"#).unwrap();
        assert_eq!(
            p,
            Profile {
                name: "Ann".into(),
                age: 28,
                city: None,
                photo: None,
                bio: None,
            }
        );
    }

    #[test]
    fn profile_full_shape_roundtrips() {
        let p = Profile {
            name: "Ann".into(),
            age: 28,
            city: Some("Riga".into()),
            photo: Some("https://example.test/a.jpg".into()),
            bio: Some("hi".into()),
        };
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(serde_json::from_str::<Profile>(&json).unwrap(), p);
    }
}
