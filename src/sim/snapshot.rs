//! Renderable view of the scene
//!
//! Borrowed straight from [`GameState`] after a tick; serialize it to hand
//! the frame to a renderer in another runtime.

use serde::Serialize;

use super::state::{AmbientPool, BackgroundLayer, Collectible, Fish, GameState};

/// Collectible plus the draw hints a renderer needs
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectibleView<'a> {
    #[serde(flatten)]
    pub collectible: &'a Collectible,
    pub color: &'static str,
    pub glow: bool,
}

impl<'a> From<&'a Collectible> for CollectibleView<'a> {
    fn from(collectible: &'a Collectible) -> Self {
        let kind = collectible.kind;
        Self {
            collectible,
            color: kind.color(),
            glow: kind.glows(),
        }
    }
}

/// Everything drawn in one frame
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneSnapshot<'a> {
    pub tick: u64,
    pub score: u64,
    pub boost_active: bool,
    pub fish: &'a Fish,
    pub collectibles: Vec<CollectibleView<'a>>,
    pub bubbles: &'a AmbientPool,
    pub motes: &'a AmbientPool,
    pub layers: &'a [BackgroundLayer],
}

impl<'a> SceneSnapshot<'a> {
    pub fn capture(state: &'a GameState) -> Self {
        Self {
            tick: state.time_ticks,
            score: state.score,
            boost_active: state.boost.active,
            fish: &state.fish,
            collectibles: state.collectibles.iter().map(CollectibleView::from).collect(),
            bubbles: &state.bubbles,
            motes: &state.motes,
            layers: &state.layers,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|err| {
            log::warn!("Snapshot serialization failed: {err}");
            String::from("{}")
        })
    }
}
