use ahash::AHashMap;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct BindingsV1 {
    pub version: u8,
    #[serde(default)]
    pub menu_action: Option<String>,
    #[serde(default)]
    pub actions: AHashMap<String, ActionV1>, // action name -> binding
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub(crate) struct ActionV1 {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub block_built_in: bool,
    #[serde(default)]
    pub buttons: Vec<String>, // button tokens, e.g. "R_A"
}
