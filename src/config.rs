use secstr::SecUtf8;
use serde::{Deserialize, Deserializer};

/// Decoded from `DISCORD_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default, deserialize_with = "deserialize_opt_secutf8")]
    pub webhook_url: Option<SecUtf8>,
}

fn deserialize_opt_secutf8<'de, D>(de: D) -> Result<Option<SecUtf8>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(de).map(|o| o.map(SecUtf8::from))
}
