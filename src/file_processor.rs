use crate::{converters, logger, profile::ConversionProfile, utils};

use std::time::Instant;

/// Drives the sequential conversion scan for a single profile.
pub struct FileProcessor {
    pub profile: ConversionProfile,
}

impl FileProcessor {
    pub fn new(profile: ConversionProfile) -> Self {
        logger::section("File Processing Initialization", false);

        logger::log(
            format!(
                "Profile '{}' with {} conversion step{}, starting from index {}.",
                profile.name,
                profile.steps.len(),
                if profile.steps.len() != 1 { "s" } else { "" },
                profile.start_from
            ),
            false,
        );

        Self { profile }
    }

    /// Process the numbered image files in the working directory, one index
    /// at a time, until the expected input file for the current index is
    /// missing.
    ///
    /// Tool exit codes are written to the log but never acted on; a failing
    /// tool does not stop the scan.
    pub fn process(&self) {
        logger::section("File Processing", true);

        let now = Instant::now();
        let mut index = self.profile.start_from;
        let mut converted: usize = 0;

        loop {
            let stem = self.profile.stem_for_index(index);
            let gate = self.profile.gate_name(&stem);

            logger::subsection(&format!("Index {index}"), false);
            logger::log(format!("Checking for: {gate}"), true);
            if !utils::file_exists(&gate) {
                logger::log("Finished converting files.", true);
                break;
            }

            for step in &self.profile.steps {
                let input = step.input_name(&stem);
                let output = step.output_name(&stem);

                logger::log(format!("  {} {} {}", step.tool, input, output), true);

                let code = converters::run_tool(&step.tool, &input, &output);
                logger::log(format!("{} exited with code {code}.", step.tool), false);
            }

            converted += 1;
            index += 1;
        }

        logger::log(
            format!(
                "{} file{} converted, in {}.",
                converted,
                if converted != 1 { "s" } else { "" },
                utils::format_duration(now.elapsed().as_secs())
            ),
            false,
        );
    }
}
