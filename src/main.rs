use bulk_image_conversion::{
    file_processor::FileProcessor, logger, profile::ConversionProfile,
};

use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() == 3 {
        // Do we need to enable logging?
        if args[2].to_lowercase() == "--logging" {
            logger::set_enabled(true);
        }
    }

    logger::section("Initial Setup", false);

    if args.len() < 2 {
        logger::log("No conversion profile was specified.", true);
        logger::log(
            "Usage: bulk-image-conversion <adjust-convert|convert-eps|convert-png|profile.json> [--logging]",
            true,
        );
        return;
    }

    // Resolve the profile: a built-in profile name, or the path to a
    // profile JSON data file.
    let profile = match ConversionProfile::resolve(&args[1]) {
        Some(p) => p,
        None => return,
    };

    logger::log("Attempting to validate profile parameters...", false);

    if !profile.validate() {
        return;
    }

    logger::log("All parameters successfully validated.", false);

    // Create the file processor instance and run the converter.
    let file_processor = FileProcessor::new(profile);
    file_processor.process();
}
