//! Rendering for the `kinds` listing

use ccsvlib::Kind;
use serde::Serialize;

/// One supported kind, as shown by `ccsv kinds`
#[derive(Debug, Serialize)]
pub struct KindInfo {
    pub name: &'static str,
    pub tag: u32,
    pub float: bool,
}

impl From<Kind> for KindInfo {
    fn from(kind: Kind) -> Self {
        Self {
            name: kind.name(),
            tag: kind.tag(),
            float: kind.is_float(),
        }
    }
}

/// All kinds in tag order
pub fn kind_infos() -> Vec<KindInfo> {
    Kind::ALL.into_iter().map(KindInfo::from).collect()
}

/// Plain listing: `name<TAB>tag`, one kind per line
pub fn render_kinds_text(kinds: &[KindInfo]) -> String {
    kinds
        .iter()
        .map(|k| format!("{}\t{}\n", k.name, k.tag))
        .collect()
}

pub fn render_kinds_json(kinds: &[KindInfo]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(kinds)
}
