use crate::{logger, utils};

use serde_derive::{Deserialize, Serialize};
use std::fs;

/// The color adjustment script driven by the adjust-convert profile.
pub const ADJUST_TOOL: &str = "./adjust_color.sh";
/// The vector tracing script driven by the adjust-convert and convert-eps
/// profiles.
pub const TRACE_TOOL: &str = "./trace.sh";
/// The raster converter driven by the convert-png profile, resolved via
/// the PATH.
pub const RASTER_TOOL: &str = "convert";

#[derive(Clone, Copy, Deserialize, Serialize)]
pub enum PadType {
    One,
    Ten,
    Hundred,
    Thousand,
}

impl PadType {
    /// Render an index with this padding width.
    ///
    /// # Arguments
    ///
    /// * `index` - The index to be rendered.
    pub fn apply(&self, index: usize) -> String {
        match self {
            PadType::One => format!("{index}"),
            PadType::Ten => format!("{index:02}"),
            PadType::Hundred => format!("{index:03}"),
            PadType::Thousand => format!("{index:04}"),
        }
    }
}

/// A single external tool invocation within a conversion profile.
#[derive(Clone, Deserialize, Serialize)]
pub struct ConversionStep {
    /// The external command to run, either a name on the PATH or a relative
    /// script path.
    pub tool: String,

    /// Appended to the padded file stem to produce the step's input file name.
    pub input_suffix: String,

    /// Appended to the padded file stem to produce the step's output file name.
    pub output_suffix: String,
}

impl ConversionStep {
    pub fn new(tool: &str, input_suffix: &str, output_suffix: &str) -> Self {
        Self {
            tool: tool.to_string(),
            input_suffix: input_suffix.to_string(),
            output_suffix: output_suffix.to_string(),
        }
    }

    pub fn input_name(&self, stem: &str) -> String {
        format!("{stem}{}", self.input_suffix)
    }

    pub fn output_name(&self, stem: &str) -> String {
        format!("{stem}{}", self.output_suffix)
    }
}

/// A conversion profile: the filename template and the ordered list of
/// external tool invocations to apply to each index.
#[derive(Clone, Deserialize, Serialize)]
pub struct ConversionProfile {
    /// The name of the profile, used in log output only.
    pub name: String,

    /// The base file name preceding the padded index, e.g. "image".
    pub base_name: String,

    /// The index to start scanning from. If unspecified the scan starts at 1.
    #[serde(default = "default_start_from")]
    pub start_from: usize,

    /// The padding applied to the index. If unspecified a three digit
    /// zero-padded index is used.
    #[serde(default = "default_pad_type")]
    pub index_pad_type: PadType,

    /// The conversion steps to run, in order, for each index.
    pub steps: Vec<ConversionStep>,
}

impl ConversionProfile {
    /// The profile corresponding to the original adjust_convert script:
    /// color-adjust each JPEG, then trace the adjusted copy into a PDF.
    pub fn adjust_convert() -> Self {
        Self::built_in(
            "adjust-convert",
            vec![
                ConversionStep::new(ADJUST_TOOL, ".jpg", "_adjusted.jpg"),
                ConversionStep::new(TRACE_TOOL, "_adjusted.jpg", ".pdf"),
            ],
        )
    }

    /// The profile corresponding to the original convert_eps script: trace
    /// each JPEG directly into an EPS file.
    pub fn convert_eps() -> Self {
        Self::built_in(
            "convert-eps",
            vec![ConversionStep::new(TRACE_TOOL, ".jpg", ".eps")],
        )
    }

    /// The profile corresponding to the original convert_png script: convert
    /// each previously adjusted JPEG into a PNG file.
    pub fn convert_png() -> Self {
        Self::built_in(
            "convert-png",
            vec![ConversionStep::new(
                RASTER_TOOL,
                "_adjusted.jpg",
                "_adjusted.png",
            )],
        )
    }

    fn built_in(name: &str, steps: Vec<ConversionStep>) -> Self {
        Self {
            name: name.to_string(),
            base_name: "image".to_string(),
            start_from: default_start_from(),
            index_pad_type: default_pad_type(),
            steps,
        }
    }

    /// Resolve a command-line argument into a conversion profile: either the
    /// name of one of the built-in profiles, or the path to a profile JSON
    /// data file.
    ///
    /// # Arguments
    ///
    /// * `arg` - The profile name or profile file path.
    ///
    /// # Returns
    ///
    /// The resolved profile, or `None` if the argument could not be resolved.
    /// Diagnostics are logged before returning `None`.
    pub fn resolve(arg: &str) -> Option<Self> {
        match arg {
            "adjust-convert" => return Some(Self::adjust_convert()),
            "convert-eps" => return Some(Self::convert_eps()),
            "convert-png" => return Some(Self::convert_png()),
            _ => {}
        }

        if !utils::file_exists(arg) {
            logger::log(
                format!(
                    "Unknown conversion profile '{arg}'. Expected adjust-convert, convert-eps, convert-png or the path to a profile data file."
                ),
                true,
            );
            return None;
        }

        let json = match fs::read_to_string(arg) {
            Ok(j) => j,
            Err(e) => {
                logger::log(
                    format!("An error occurred while attempting to read the profile data file: {e}"),
                    true,
                );
                return None;
            }
        };

        match serde_json::from_str::<ConversionProfile>(&json) {
            Ok(p) => Some(p),
            Err(e) => {
                logger::log(
                    format!("An error occurred while attempting to parse the JSON data: {e:?}."),
                    true,
                );
                None
            }
        }
    }

    /// Validate the profile parameters, logging a message for each problem
    /// found.
    pub fn validate(&self) -> bool {
        let mut check = true;

        if self.base_name.is_empty() {
            logger::log("The profile base name must not be empty.", true);
            check = false;
        }

        if self.start_from == 0 {
            logger::log("The starting index must be 1 or higher.", true);
            check = false;
        }

        if self.steps.is_empty() {
            logger::log(
                "The profile must contain at least one conversion step.",
                true,
            );
            check = false;
        }

        for step in &self.steps {
            if step.tool.is_empty() {
                logger::log("A conversion step has an empty tool command.", true);
                check = false;
            }
        }

        check
    }

    /// The padded file stem for a given index, e.g. index 7 with base name
    /// "image" gives "image007".
    pub fn stem_for_index(&self, index: usize) -> String {
        format!("{}{}", self.base_name, self.index_pad_type.apply(index))
    }

    /// The file whose existence gates the loop for a given stem. This is the
    /// input to the first conversion step, so the profile must have passed
    /// validation before this is called.
    pub fn gate_name(&self, stem: &str) -> String {
        self.steps[0].input_name(stem)
    }
}

fn default_start_from() -> usize {
    1
}

fn default_pad_type() -> PadType {
    PadType::Hundred
}
