//! Naming and colormap selection for display layers.
//!
//! Every channel of every view becomes one layer. The layer either takes
//! the color assigned to its view or a colormap derived from the channel
//! name.

use crate::{assigner::ViewColorMap, types::ViewId};
use derive_more::Display;

pub const DEFAULT_PREFIX: &str = "tile";
pub const GAMMA: f64 = 0.6;

#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum Colormap {
    #[display(fmt = "{}", _0)]
    Named(String),
    /// The colormap of channels matching no known fluorophore.
    ///
    /// Downstream consumers have historically received this one as a
    /// one-element sequence rather than a plain name, hence its own variant.
    #[display(fmt = "[{}]", _0)]
    Fallback(String),
}

impl Colormap {
    pub fn name(&self) -> &str {
        match self {
            Colormap::Named(name) | Colormap::Fallback(name) => name,
        }
    }
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Blending {
    #[display(fmt = "additive")]
    Additive,
}

#[derive(Debug, Display, Clone, PartialEq)]
#[display(fmt = "{}\t{}\t{}\t{}", name, colormap, gamma, blending)]
pub struct LayerSpec {
    pub view: ViewId,
    pub name: String,
    pub colormap: Colormap,
    pub gamma: f64,
    pub blending: Blending,
}

/// Picks the colormap of a channel from its name.
pub fn channel_colormap(channel: &str) -> Colormap {
    if channel.contains("GFP") {
        Colormap::Named(String::from("green"))
    } else if channel.contains("RFP") {
        Colormap::Named(String::from("red"))
    } else {
        Colormap::Fallback(String::from("gray"))
    }
}

/// Returns `"{prefix}_{index:03} :: {channel}"`, or the channel alone.
pub fn layer_name(prefix: Option<&str>, view_index: usize, channel: &str) -> String {
    match prefix {
        Some(prefix) => format!("{}_{:03} :: {}", prefix, view_index, channel),
        None => String::from(channel),
    }
}

/// One layer per `(view, channel)`, views outermost.
///
/// With `colors`, every channel of a view shares the view's color;
/// otherwise the colormap follows the channel name.
pub fn layer_specs<S: AsRef<str>>(
    views: &[ViewId],
    channels: &[S],
    colors: Option<&ViewColorMap>,
    prefix: Option<&str>,
) -> Vec<LayerSpec> {
    let mut specs = Vec::with_capacity(views.len() * channels.len());
    for (index, &view) in views.iter().enumerate() {
        for channel in channels {
            let channel = channel.as_ref();
            let colormap = colors
                .and_then(|colors| colors.color(view))
                .map_or_else(
                    || channel_colormap(channel),
                    |color| Colormap::Named(String::from(color)),
                );
            specs.push(LayerSpec {
                view,
                name: layer_name(prefix, index, channel),
                colormap,
                gamma: GAMMA,
                blending: Blending::Additive,
            });
        }
    }
    specs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assigner::assign_colors, graph::ViewGraph};

    #[test]
    fn test_channel_colormap() {
        assert_eq!(channel_colormap("EGFP"), Colormap::Named(String::from("green")));
        assert_eq!(channel_colormap("mRFP1"), Colormap::Named(String::from("red")));
        let fallback = channel_colormap("DAPI");
        assert_eq!(fallback, Colormap::Fallback(String::from("gray")));
        assert_eq!(fallback.name(), "gray");
        assert_eq!(fallback.to_string(), "[gray]");
    }

    #[test]
    fn test_layer_name() {
        assert_eq!(layer_name(Some("tile"), 7, "GFP"), "tile_007 :: GFP");
        assert_eq!(layer_name(Some("tile"), 1234, "GFP"), "tile_1234 :: GFP");
        assert_eq!(layer_name(None, 7, "GFP"), "GFP");
    }

    #[test]
    fn test_positional_layers() {
        let g = ViewGraph::from_parts(vec![5, 6], vec![(5, 6, 0.2)]).unwrap();
        let colors = assign_colors(&g, 2).unwrap();
        let specs = layer_specs(g.views(), &["GFP", "DAPI"], Some(&colors), Some(DEFAULT_PREFIX));
        assert_eq!(
            specs
                .iter()
                .map(|s| (s.name.as_str(), s.colormap.name()))
                .collect::<Vec<_>>(),
            vec![
                ("tile_000 :: GFP", "red"),
                ("tile_000 :: DAPI", "red"),
                ("tile_001 :: GFP", "green"),
                ("tile_001 :: DAPI", "green"),
            ]
        );
        assert_eq!(specs[0].to_string(), "tile_000 :: GFP\tred\t0.6\tadditive");
    }

    #[test]
    fn test_channel_layers() {
        let specs = layer_specs(&[0], &["RFP", "BF"], None, None);
        assert_eq!(specs[0].colormap, Colormap::Named(String::from("red")));
        assert_eq!(specs[1].colormap, Colormap::Fallback(String::from("gray")));
        assert_eq!(specs[1].name, "BF");
    }
}
