use serde::{
    de::{self, DeserializeOwned},
    Deserialize, Deserializer,
};

pub const TAG_REF_PREFIX: &str = "refs/tags/";

/// GitLab treats absent and `null` fields alike, so both decode to the default.
fn nullable<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(de).map(Option::unwrap_or_default)
}

type JsonObject = serde_json::Map<String, serde_json::Value>;

// Derived struct impls also accept a JSON array, filled by position.
// Nested records go through a map first so only objects (or `null`) pass.
fn from_object<T, E>(object: Option<JsonObject>) -> Result<T, E>
where
    T: Default + DeserializeOwned,
    E: de::Error,
{
    match object {
        Some(object) => {
            serde_json::from_value(serde_json::Value::Object(object)).map_err(E::custom)
        }
        None => Ok(T::default()),
    }
}

fn nullable_object<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    from_object(Option::<JsonObject>::deserialize(de)?)
}

fn nullable_objects<'de, D, T>(de: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    Option::<Vec<Option<JsonObject>>>::deserialize(de)?
        .unwrap_or_default()
        .into_iter()
        .map(from_object::<T, D::Error>)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    Push,
    MergeRequest,
    RepositoryUpdate,
    #[serde(other)]
    Unknown,
}

impl Default for ObjectKind {
    fn default() -> Self {
        Self::Unknown
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Project {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub web_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Author {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub avatar_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Commit {
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub message: String,
    #[serde(deserialize_with = "nullable_object")]
    pub author: Author,
    #[serde(deserialize_with = "nullable")]
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MergeRequest {
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    #[serde(deserialize_with = "nullable")]
    pub state: String,
    #[serde(deserialize_with = "nullable_object")]
    pub author: Author,
    #[serde(deserialize_with = "nullable")]
    pub url: String,
}

/// Body of a GitLab webhook request, as sent on the wire.
///
/// Which fields carry meaning depends on `object_kind`; convert into
/// [`Event`] before reading any of them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Payload {
    #[serde(deserialize_with = "nullable")]
    pub object_kind: ObjectKind,
    #[serde(deserialize_with = "nullable")]
    pub user_name: String,
    #[serde(deserialize_with = "nullable")]
    pub user_avatar: String,
    #[serde(deserialize_with = "nullable_object")]
    pub project: Project,
    #[serde(rename = "ref", deserialize_with = "nullable")]
    pub reference: String,
    #[serde(deserialize_with = "nullable_objects")]
    pub commits: Vec<Commit>,
    #[serde(deserialize_with = "nullable")]
    pub after: String,
    #[serde(deserialize_with = "nullable_object")]
    pub merge_request: MergeRequest,
}

/// User that triggered the event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Actor {
    pub name: String,
    pub avatar_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Branch or tag push. Tags are told apart by [`TAG_REF_PREFIX`] on `reference`.
    Push {
        actor: Actor,
        project: Project,
        reference: String,
        commits: Vec<Commit>,
        after: String,
    },
    MergeRequest {
        actor: Actor,
        project: Project,
        merge_request: MergeRequest,
    },
    RepositoryUpdate {
        actor: Actor,
        project: Project,
    },
    Unknown,
}

impl Event {
    pub fn kind(&self) -> ObjectKind {
        match self {
            Event::Push { .. } => ObjectKind::Push,
            Event::MergeRequest { .. } => ObjectKind::MergeRequest,
            Event::RepositoryUpdate { .. } => ObjectKind::RepositoryUpdate,
            Event::Unknown => ObjectKind::Unknown,
        }
    }
}

impl From<Payload> for Event {
    fn from(payload: Payload) -> Self {
        let Payload {
            object_kind,
            user_name,
            user_avatar,
            project,
            reference,
            commits,
            after,
            merge_request,
        } = payload;
        let actor = Actor {
            name: user_name,
            avatar_url: user_avatar,
        };

        match object_kind {
            ObjectKind::Push => Event::Push {
                actor,
                project,
                reference,
                commits,
                after,
            },
            ObjectKind::MergeRequest => Event::MergeRequest {
                actor,
                project,
                merge_request,
            },
            ObjectKind::RepositoryUpdate => Event::RepositoryUpdate { actor, project },
            ObjectKind::Unknown => Event::Unknown,
        }
    }
}
