//! Plan YAML schema type definitions

use serde::Deserialize;

use super::scalar;

/// Root structure of a plan document
#[derive(Debug, Clone, Deserialize)]
pub struct PlanDocument {
    pub title: String,
    /// Palette indexed by bag number; entry 0 is bag 1
    #[serde(rename = "bagcolors")]
    pub bag_colors: Vec<String>,
    pub shapes: ShapePresets,
    pub groups: Vec<StepDefinition>,
}

impl PlanDocument {
    /// Look up the color for a 1-based bag number
    pub fn bag_color(&self, bag: i64) -> Option<&str> {
        let index = usize::try_from(bag).ok()?.checked_sub(1)?;
        self.bag_colors.get(index).map(String::as_str)
    }
}

/// The two node style presets of a plan
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ShapePresets {
    /// Applied to nodes that only ever appear as a `start`
    pub independent: NodeStyle,
    /// Applied to nodes that are both a `start` and a `next` target
    pub integration: NodeStyle,
}

impl ShapePresets {
    pub fn get(&self, preset: Preset) -> &NodeStyle {
        match preset {
            Preset::Independent => &self.independent,
            Preset::Integration => &self.integration,
        }
    }
}

/// Which style preset a node carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Independent,
    Integration,
}

/// Graphviz node attributes a style preset may set
///
/// Values may be written as YAML strings, numbers or booleans; they are kept
/// as the string Graphviz will receive. Unknown keys are rejected.
///
/// A preset `color` takes precedence over the node's bag color.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeStyle {
    #[serde(default, deserialize_with = "scalar::optional")]
    pub shape: Option<String>,
    #[serde(default, deserialize_with = "scalar::optional")]
    pub style: Option<String>,
    #[serde(default, deserialize_with = "scalar::optional")]
    pub color: Option<String>,
    #[serde(default, deserialize_with = "scalar::optional")]
    pub fillcolor: Option<String>,
    #[serde(default, deserialize_with = "scalar::optional")]
    pub fontcolor: Option<String>,
    #[serde(default, deserialize_with = "scalar::optional")]
    pub fontname: Option<String>,
    #[serde(default, deserialize_with = "scalar::optional")]
    pub fontsize: Option<String>,
    #[serde(default, deserialize_with = "scalar::optional")]
    pub penwidth: Option<String>,
    #[serde(default, deserialize_with = "scalar::optional")]
    pub peripheries: Option<String>,
    #[serde(default, deserialize_with = "scalar::optional")]
    pub width: Option<String>,
    #[serde(default, deserialize_with = "scalar::optional")]
    pub height: Option<String>,
    #[serde(default, deserialize_with = "scalar::optional")]
    pub margin: Option<String>,
    #[serde(default, deserialize_with = "scalar::optional")]
    pub fixedsize: Option<String>,
    #[serde(default, deserialize_with = "scalar::optional")]
    pub tooltip: Option<String>,
}

impl NodeStyle {
    /// Set attributes as `(name, value)` pairs, in a fixed order
    pub fn attributes(&self) -> Vec<(&'static str, &str)> {
        [
            ("shape", &self.shape),
            ("style", &self.style),
            ("color", &self.color),
            ("fillcolor", &self.fillcolor),
            ("fontcolor", &self.fontcolor),
            ("fontname", &self.fontname),
            ("fontsize", &self.fontsize),
            ("penwidth", &self.penwidth),
            ("peripheries", &self.peripheries),
            ("width", &self.width),
            ("height", &self.height),
            ("margin", &self.margin),
            ("fixedsize", &self.fixedsize),
            ("tooltip", &self.tooltip),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.as_deref().map(|v| (name, v)))
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes().is_empty()
    }
}

/// One declared transition of the plan (an entry of `groups`)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StepDefinition {
    #[serde(deserialize_with = "scalar::string")]
    pub start: String,
    /// Informational end label, only shown in the node label
    #[serde(deserialize_with = "scalar::string")]
    pub end: String,
    /// 1-based index into `bagcolors`
    pub bag: i64,
    #[serde(deserialize_with = "scalar::string")]
    pub next: String,
}

impl StepDefinition {
    /// Three-line node label: `From:`, `To:` and `Bag:`
    pub fn label(&self) -> String {
        format!("From: {}\nTo: {}\nBag: {}", self.start, self.end, self.bag)
    }
}
